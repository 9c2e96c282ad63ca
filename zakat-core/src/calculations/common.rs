//! Common utility functions for zakat calculations.
//!
//! This module provides the lenient numeric coercion applied to every form
//! field and the rounding used when amounts are displayed.

use rust_decimal::Decimal;
use tracing::warn;

/// Most fraction digits a [`Decimal`] can carry.
const MAX_SCALE: u32 = 28;

/// Most digits an integer [`Decimal`] can have.
const MAX_INTEGER_DIGITS: usize = 29;

/// Digits that always fit in an `i128`.
const MAX_I128_DIGITS: usize = 38;

/// Rounds a decimal value to exactly two decimal places using half-up rounding.
///
/// Values at exactly 0.005 are rounded away from zero.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use zakat_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(124.994)), dec!(124.99));
/// assert_eq!(round_half_up(dec!(124.995)), dec!(125.00));
/// assert_eq!(round_half_up(dec!(-2.505)), dec!(-2.51)); // Away from zero
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

/// Reads the number at the start of `input`, ignoring anything after it.
///
/// Leading and trailing whitespace is skipped. The number may carry a sign,
/// a fractional part and an exponent (`1.5e3`). Returns `None` when the
/// input does not start with a number or the number does not fit in a
/// [`Decimal`].
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use zakat_core::calculations::common::parse_leading_decimal;
///
/// assert_eq!(parse_leading_decimal("  42.50 "), Some(dec!(42.50)));
/// assert_eq!(parse_leading_decimal("12abc"), Some(dec!(12)));
/// assert_eq!(parse_leading_decimal("1,000"), Some(dec!(1)));
/// assert_eq!(parse_leading_decimal("2.5e2"), Some(dec!(250)));
/// assert_eq!(parse_leading_decimal("abc"), None);
/// assert_eq!(parse_leading_decimal(""), None);
/// ```
pub fn parse_leading_decimal(input: &str) -> Option<Decimal> {
    let (prefix, _) = split_numeric_prefix(input.trim())?;
    decimal_from_prefix(prefix)
}

/// Converts one raw form value into its contribution to the total.
///
/// Empty input is zero. Input without a leading number, or whose number is
/// out of range, is also zero and is reported with a warning. Trailing
/// characters after a number are dropped with a warning.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use zakat_core::calculations::common::coerce_amount;
///
/// assert_eq!(coerce_amount("1000"), dec!(1000));
/// assert_eq!(coerce_amount("-100"), dec!(-100));
/// assert_eq!(coerce_amount(""), dec!(0));
/// assert_eq!(coerce_amount("abc"), dec!(0));
/// ```
pub fn coerce_amount(input: &str) -> Decimal {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Decimal::ZERO;
    }

    let Some((prefix, rest)) = split_numeric_prefix(trimmed) else {
        warn!(input = %input, "value is not a number; counted as zero");
        return Decimal::ZERO;
    };

    match decimal_from_prefix(prefix) {
        Some(amount) => {
            if !rest.is_empty() {
                warn!(
                    input = %input,
                    amount = %amount,
                    ignored = %rest,
                    "ignored characters after number"
                );
            }
            amount
        }
        None => {
            warn!(input = %input, "number is out of range; counted as zero");
            Decimal::ZERO
        }
    }
}

/// Splits `input` into its longest numeric prefix and the remainder.
///
/// The prefix grammar is `[+-]? (digits [. digits?] | . digits) ([eE] [+-]? digits)?`.
/// An exponent marker without digits is not part of the prefix.
fn split_numeric_prefix(input: &str) -> Option<(&str, &str)> {
    let bytes = input.as_bytes();
    let digits_from = |start: usize| {
        bytes[start..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count()
    };

    let mut pos = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        pos += 1;
    }

    let int_digits = digits_from(pos);
    pos += int_digits;

    let mut mantissa_digits = int_digits;
    if bytes.get(pos) == Some(&b'.') {
        let frac_digits = digits_from(pos + 1);
        mantissa_digits += frac_digits;
        if mantissa_digits > 0 {
            pos += 1 + frac_digits;
        }
    }

    if mantissa_digits == 0 {
        return None;
    }

    if matches!(bytes.get(pos), Some(b'e' | b'E')) {
        let mut end = pos + 1;
        if matches!(bytes.get(end), Some(b'+' | b'-')) {
            end += 1;
        }
        let exp_digits = digits_from(end);
        if exp_digits > 0 {
            pos = end + exp_digits;
        }
    }

    // Every consumed byte is ASCII, so `pos` is a char boundary.
    Some(input.split_at(pos))
}

/// Converts a prefix accepted by [`split_numeric_prefix`] into a [`Decimal`].
///
/// The exponent only moves the decimal point, so it is folded into the
/// scale before any digits are dropped or the range is checked.
fn decimal_from_prefix(prefix: &str) -> Option<Decimal> {
    let (negative, unsigned) = match prefix.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, prefix.strip_prefix('+').unwrap_or(prefix)),
    };

    let (mantissa, exponent) = match unsigned.split_once(['e', 'E']) {
        Some((mantissa, exponent)) => (
            mantissa,
            exponent.parse::<i64>().unwrap_or(if exponent.starts_with('-') {
                i64::MIN
            } else {
                i64::MAX
            }),
        ),
        None => (unsigned, 0),
    };

    let (int_part, frac_part) = mantissa.split_once('.').unwrap_or((mantissa, ""));
    let digits = format!("{int_part}{frac_part}");
    let digits = digits.trim_start_matches('0');
    if digits.is_empty() {
        return Some(Decimal::ZERO);
    }

    let scale = (frac_part.len() as i64).saturating_sub(exponent);
    let value = if scale < 0 {
        // Integer with trailing zeros; anything past 29 digits overflows.
        if scale < -(MAX_INTEGER_DIGITS as i64) {
            return None;
        }
        let zeros = "0".repeat(scale.unsigned_abs() as usize);
        decimal_from_digits(&format!("{digits}{zeros}"), 0)?
    } else {
        decimal_from_digits(digits, scale)?
    };

    Some(if negative && !value.is_zero() { -value } else { value })
}

/// Builds `digits × 10^-scale`, dropping trailing fraction digits until the
/// value fits. Returns `None` only when the integer part alone overflows.
fn decimal_from_digits(
    digits: &str,
    scale: i64,
) -> Option<Decimal> {
    let mut digits = digits;
    let mut scale = scale;

    let drop = (scale - MAX_SCALE as i64)
        .max(digits.len() as i64 - MAX_I128_DIGITS as i64)
        .clamp(0, scale);
    if drop >= digits.len() as i64 {
        return Some(Decimal::ZERO);
    }
    digits = &digits[..digits.len() - drop as usize];
    scale -= drop;

    loop {
        if digits.len() <= MAX_I128_DIGITS {
            let mantissa = digits.parse::<i128>().ok()?;
            if let Ok(value) = Decimal::try_from_i128_with_scale(mantissa, scale as u32) {
                return Some(value);
            }
        }
        if scale == 0 {
            return None;
        }
        digits = &digits[..digits.len() - 1];
        scale -= 1;
        if digits.is_empty() {
            return Some(Decimal::ZERO);
        }
    }
}
