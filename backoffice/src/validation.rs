//! Declarative field validation.
//!
//! Each entity lists its rules in a static table. Validation runs every rule
//! and reports at most one violation per field, the first one in table
//! order, so a field shows a single message at a time.

use derive_more::Display;

pub const REQUIRED: &str = "This field is required";

#[derive(Debug, Clone, PartialEq, Eq, Display)]
#[display("{field}: {message}")]
pub struct FieldViolation {
    pub field: &'static str,
    pub message: String,
}

/// One check on one field. Returns the message to show when violated.
pub struct Rule<T, C> {
    pub field: &'static str,
    pub check: fn(&T, &C) -> Option<&'static str>,
}

/// Input rejected before reaching the remote API.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{}", join_violations(.violations))]
pub struct ValidationError {
    pub violations: Vec<FieldViolation>,
}

impl ValidationError {
    pub fn single(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            violations: vec![FieldViolation {
                field,
                message: message.into(),
            }],
        }
    }

    /// The message to show next to `field`, if any.
    pub fn for_field(&self, field: &str) -> Option<&str> {
        self.violations
            .iter()
            .find(|v| v.field == field)
            .map(|v| v.message.as_str())
    }
}

fn join_violations(violations: &[FieldViolation]) -> String {
    violations
        .iter()
        .map(FieldViolation::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

pub fn validate<T, C>(
    rules: &[Rule<T, C>],
    value: &T,
    context: &C,
) -> Result<(), ValidationError> {
    let mut violations: Vec<FieldViolation> = Vec::new();
    for rule in rules {
        if violations.iter().any(|v| v.field == rule.field) {
            continue;
        }
        if let Some(message) = (rule.check)(value, context) {
            violations.push(FieldViolation {
                field: rule.field,
                message: message.into(),
            });
        }
    }

    if violations.is_empty() {
        Ok(())
    } else {
        Err(ValidationError { violations })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Range {
        low: i32,
        high: i32,
    }

    static RANGE_RULES: &[Rule<Range, ()>] = &[
        Rule {
            field: "low",
            check: |r, _| (r.low < 0).then_some("Should be at least 0"),
        },
        Rule {
            field: "low",
            check: |r, _| (r.low > 100).then_some("Should be at most 100"),
        },
        Rule {
            field: "high",
            check: |r, _| (r.high < r.low).then_some("Should not be below low"),
        },
        Rule {
            field: "high",
            check: |r, _| (r.high < 0).then_some("Should be at least 0"),
        },
    ];

    #[test]
    fn reports_first_violation_per_field() {
        let err = validate(RANGE_RULES, &Range { low: -5, high: -10 }, &())
            .unwrap_err();
        assert_eq!(err.violations.len(), 2);
        assert_eq!(err.for_field("low"), Some("Should be at least 0"));
        assert_eq!(err.for_field("high"), Some("Should not be below low"));
        assert_eq!(
            err.to_string(),
            "low: Should be at least 0; high: Should not be below low"
        );
        let source: &dyn std::error::Error = &err;
        assert_eq!(source.to_string(), err.to_string());
    }

    #[test]
    fn valid_input_passes() {
        assert!(validate(RANGE_RULES, &Range { low: 1, high: 2 }, &()).is_ok());
    }
}
