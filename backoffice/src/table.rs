//! Shared pieces of the cabin and booking table operations (filter and
//! sort options, as they appear in the page's query string).

use derive_more::Display;
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display)]
pub enum SortDirection {
    #[default]
    #[display("asc")]
    Asc,
    #[display("desc")]
    Desc,
}

impl SortDirection {
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Asc => ordering,
            Self::Desc => ordering.reverse(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown {kind} option {value:?}")]
pub struct ParseOptionError {
    pub kind: &'static str,
    pub value: String,
}

/// Split a sort option such as `regular_price-desc` into field and
/// direction.
pub(crate) fn split_sort<'a>(
    kind: &'static str,
    value: &'a str,
) -> Result<(&'a str, SortDirection), ParseOptionError> {
    let unknown = || ParseOptionError {
        kind,
        value: value.to_string(),
    };
    let (field, direction) = value.rsplit_once('-').ok_or_else(unknown)?;
    let direction = match direction {
        "asc" => SortDirection::Asc,
        "desc" => SortDirection::Desc,
        _ => return Err(unknown()),
    };
    Ok((field, direction))
}
