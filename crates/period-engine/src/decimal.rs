//! Arbitrary-precision decimal arithmetic with explicit scale and rounding.
//!
//! Thin helpers over [`BigDecimal`]: every arithmetic result is rounded to a
//! caller-chosen number of decimal places with a caller-chosen
//! [`RoundingMode`], so money-style computations never depend on the
//! library's default precision.

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::str::FromStr;

use bigdecimal::num_bigint::BigInt;
pub use bigdecimal::{BigDecimal, RoundingMode};

use crate::error::{PeriodError, Result};

fn zero() -> BigDecimal {
    BigDecimal::from(0)
}

/// Parse a decimal literal such as `"1234.50"` or `"-0.001"`.
///
/// # Errors
///
/// Returns [`PeriodError::InvalidDecimal`] if `s` is not a decimal number.
pub fn parse_decimal(s: &str) -> Result<BigDecimal> {
    BigDecimal::from_str(s.trim()).map_err(|e| PeriodError::InvalidDecimal(format!("'{s}': {e}")))
}

pub fn compare_to_zero(value: &BigDecimal) -> Ordering {
    value.cmp(&zero())
}

pub fn is_zero(value: &BigDecimal) -> bool {
    compare_to_zero(value) == Ordering::Equal
}

pub fn is_positive(value: &BigDecimal) -> bool {
    compare_to_zero(value) == Ordering::Greater
}

pub fn is_negative(value: &BigDecimal) -> bool {
    compare_to_zero(value) == Ordering::Less
}

pub fn is_zero_or_positive(value: &BigDecimal) -> bool {
    !is_negative(value)
}

pub fn is_zero_or_negative(value: &BigDecimal) -> bool {
    !is_positive(value)
}

/// Round `value` to `scale` decimal places.
pub fn round(value: &BigDecimal, scale: i64, mode: RoundingMode) -> BigDecimal {
    value.with_scale_round(scale, mode)
}

pub fn add(a: &BigDecimal, b: &BigDecimal, scale: i64, mode: RoundingMode) -> BigDecimal {
    round(&(a + b), scale, mode)
}

pub fn subtract(a: &BigDecimal, b: &BigDecimal, scale: i64, mode: RoundingMode) -> BigDecimal {
    round(&(a - b), scale, mode)
}

pub fn multiply(a: &BigDecimal, b: &BigDecimal, scale: i64, mode: RoundingMode) -> BigDecimal {
    round(&(a * b), scale, mode)
}

/// Divide `a` by `b`, rounding the quotient to `scale` places.
///
/// # Errors
///
/// Returns [`PeriodError::DivisionByZero`] if `b` is zero, or
/// [`PeriodError::InvalidDecimal`] if `scale` is too far from the operands'
/// own scales to represent.
pub fn divide(a: &BigDecimal, b: &BigDecimal, scale: i64, mode: RoundingMode) -> Result<BigDecimal> {
    if is_zero(b) {
        return Err(PeriodError::DivisionByZero);
    }
    Ok(round(&truncated_quotient(a, b, scale)?, scale, mode))
}

/// `a / b` truncated toward zero at `scale + 1` places, followed by one sticky
/// digit when the division is inexact.
///
/// The extra place and the sticky digit carry exactly the information every
/// [`RoundingMode`] needs, so rounding the result to `scale` gives the same
/// answer as rounding the infinite quotient.
fn truncated_quotient(a: &BigDecimal, b: &BigDecimal, scale: i64) -> Result<BigDecimal> {
    let (a_digits, a_scale) = a.as_bigint_and_exponent();
    let (b_digits, b_scale) = b.as_bigint_and_exponent();
    let out_of_range =
        || PeriodError::InvalidDecimal(format!("quotient scale {scale} is out of range"));

    let guard_scale = scale.checked_add(1).ok_or_else(out_of_range)?;
    // a / b * 10^guard_scale == a_digits * 10^shift / b_digits
    let shift = guard_scale
        .checked_add(b_scale)
        .and_then(|s| s.checked_sub(a_scale))
        .ok_or_else(out_of_range)?;
    let power = |n: i64| -> Result<BigInt> {
        let exp = u32::try_from(n.unsigned_abs()).map_err(|_| out_of_range())?;
        Ok(BigInt::from(10).pow(exp))
    };
    let (num, den) = if shift >= 0 {
        (a_digits * power(shift)?, b_digits)
    } else {
        (a_digits, b_digits * power(shift)?)
    };

    let quotient = &num / &den;
    let remainder = &num % &den;
    if remainder == BigInt::from(0) {
        return Ok(BigDecimal::new(quotient, guard_scale));
    }
    let sticky = if num.sign() == den.sign() { 1 } else { -1 };
    let sticky_scale = guard_scale.checked_add(1).ok_or_else(out_of_range)?;
    Ok(BigDecimal::new(quotient * 10 + sticky, sticky_scale))
}

/// Sum any number of values, rounding the total once at the end.
pub fn sum<I>(values: I, scale: i64, mode: RoundingMode) -> BigDecimal
where
    I: IntoIterator,
    I::Item: Borrow<BigDecimal>,
{
    let total = values
        .into_iter()
        .fold(zero(), |acc, v| acc + v.borrow());
    round(&total, scale, mode)
}

/// `percent` percent of `value` (`percentage(200, 15) == 30`).
pub fn percentage(
    value: &BigDecimal,
    percent: &BigDecimal,
    scale: i64,
    mode: RoundingMode,
) -> BigDecimal {
    let (digits, exponent) = (value * percent).as_bigint_and_exponent();
    round(&BigDecimal::new(digits, exponent + 2), scale, mode)
}
