use rust_decimal::Decimal;
use zakat_core::calculations::common::round_half_up;

/// Formats an amount with exactly two decimal places.
///
/// Rounds half away from zero. A value that rounds to zero prints as
/// `0.00`, never `-0.00`.
pub fn format_amount(amount: Decimal) -> String {
    let rounded = round_half_up(amount);
    let rounded = if rounded.is_zero() {
        Decimal::ZERO
    } else {
        rounded
    };
    format!("{rounded:.2}")
}

/// Formats an optional amount for display, using "—" when `None`.
pub fn opt_amount_display(amount: Option<Decimal>) -> String {
    amount
        .map(format_amount)
        .unwrap_or_else(|| "—".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    #[test]
    fn format_amount_pads_to_two_places() {
        assert_eq!(format_amount(dec!(125)), "125.00");
        assert_eq!(format_amount(dec!(5.0)), "5.00");
        assert_eq!(format_amount(dec!(0.1)), "0.10");
    }

    #[test]
    fn format_amount_rounds_half_away_from_zero() {
        assert_eq!(format_amount(dec!(0.00025)), "0.00");
        assert_eq!(format_amount(dec!(1.005)), "1.01");
        assert_eq!(format_amount(dec!(-2.505)), "-2.51");
    }

    #[test]
    fn format_amount_keeps_negative_results() {
        assert_eq!(format_amount(dec!(-2.5)), "-2.50");
    }

    #[test]
    fn format_amount_never_prints_negative_zero() {
        assert_eq!(format_amount(dec!(-0.001)), "0.00");
    }

    #[test]
    fn opt_amount_display_uses_dash_for_none() {
        assert_eq!(opt_amount_display(None), "—");
        assert_eq!(opt_amount_display(Some(dec!(12.345))), "12.35");
    }
}
