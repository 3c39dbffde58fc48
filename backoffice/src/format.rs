use rust_decimal::Decimal;

/// Format an amount as US dollars with two decimals and thousands
/// separators, e.g. `$1,234.50`.
pub fn format_currency(amount: Decimal) -> String {
    let rounded = format!("{:.2}", amount.abs().round_dp(2));
    let (whole, cents) =
        rounded.split_once('.').unwrap_or((rounded.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if amount.is_sign_negative() && !amount.is_zero() {
        "-"
    } else {
        ""
    };
    format!("{sign}${grouped}.{cents}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::dec;

    #[test]
    fn formats_dollars() {
        assert_eq!(format_currency(dec!(0)), "$0.00");
        assert_eq!(format_currency(dec!(90)), "$90.00");
        assert_eq!(format_currency(dec!(590.5)), "$590.50");
        assert_eq!(format_currency(dec!(1234567.891)), "$1,234,567.89");
        assert_eq!(format_currency(dec!(-1000)), "-$1,000.00");
    }
}
