//! Number-to-string formatting with configurable separators.
//!
//! ```
//! use period_engine::decimal::parse_decimal;
//! use period_engine::format::{format_decimal, NumberFormat, TrailingZeros};
//!
//! let value = parse_decimal("1234567.5").unwrap();
//! assert_eq!(format_decimal(&value, &NumberFormat::default()).unwrap(), "1,234,567.50");
//! assert_eq!(format_decimal(&value, &NumberFormat::european()).unwrap(), "1.234.567,50");
//!
//! let significant = NumberFormat { trailing_zeros: TrailingZeros::Strip, ..NumberFormat::default() };
//! assert_eq!(format_decimal(&value, &significant).unwrap(), "1,234,567.5");
//! ```

use bigdecimal::{BigDecimal, RoundingMode};
use serde::{Deserialize, Serialize};

use crate::error::{PeriodError, Result};

/// Whether to pad the fraction to the full scale or show only significant digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrailingZeros {
    /// `1.50`, `2.00`
    #[default]
    Keep,
    /// `1.5`, `2`
    Strip,
}

/// Largest [`NumberFormat::scale`] accepted by [`format_decimal`].
pub const MAX_SCALE: u32 = 1_000;

/// Formatting options for [`format_decimal`].
#[derive(Debug, Clone)]
pub struct NumberFormat {
    pub decimal_separator: char,
    /// Thousands separator; `None` disables grouping.
    pub grouping_separator: Option<char>,
    /// Decimal places to round to, at most [`MAX_SCALE`].
    pub scale: u32,
    pub rounding: RoundingMode,
    pub trailing_zeros: TrailingZeros,
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self {
            decimal_separator: '.',
            grouping_separator: Some(','),
            scale: 2,
            rounding: RoundingMode::HalfUp,
            trailing_zeros: TrailingZeros::Keep,
        }
    }
}

impl NumberFormat {
    /// `1234567.50`: no grouping.
    pub fn plain() -> Self {
        Self {
            grouping_separator: None,
            ..Self::default()
        }
    }

    /// `1.234.567,50`
    pub fn european() -> Self {
        Self {
            decimal_separator: ',',
            grouping_separator: Some('.'),
            ..Self::default()
        }
    }

    fn validate(&self) -> Result<()> {
        if self.scale > MAX_SCALE {
            return Err(PeriodError::InvalidFormat(format!(
                "scale {} exceeds the maximum of {MAX_SCALE}",
                self.scale
            )));
        }
        let reserved = |c: char| c.is_ascii_digit() || c == '-';
        if reserved(self.decimal_separator) {
            return Err(PeriodError::InvalidFormat(format!(
                "decimal separator '{}' is a digit or sign",
                self.decimal_separator
            )));
        }
        if let Some(group) = self.grouping_separator {
            if reserved(group) {
                return Err(PeriodError::InvalidFormat(format!(
                    "grouping separator '{group}' is a digit or sign"
                )));
            }
            if group == self.decimal_separator {
                return Err(PeriodError::InvalidFormat(format!(
                    "decimal and grouping separators are both '{group}'"
                )));
            }
        }
        Ok(())
    }
}

/// Format `value` according to `format`.
///
/// # Errors
///
/// Returns [`PeriodError::InvalidFormat`] if the separators clash with each
/// other or with digits, or if the scale exceeds [`MAX_SCALE`].
pub fn format_decimal(value: &BigDecimal, format: &NumberFormat) -> Result<String> {
    format.validate()?;

    let scale = format.scale as usize;
    let rounded = value.with_scale_round(i64::from(format.scale), format.rounding);
    let (unscaled, _) = rounded.as_bigint_and_exponent();
    let text = unscaled.to_string();
    let (negative, digits) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text.as_str()),
    };

    let mut digits = digits.to_string();
    if digits.len() <= scale {
        digits = format!("{}{digits}", "0".repeat(scale + 1 - digits.len()));
    }
    let is_zero = digits.bytes().all(|b| b == b'0');
    let (integer, fraction) = digits.split_at(digits.len() - scale);

    let fraction = match format.trailing_zeros {
        TrailingZeros::Keep => fraction,
        TrailingZeros::Strip => fraction.trim_end_matches('0'),
    };
    let integer = match format.grouping_separator {
        Some(sep) => group_digits(integer, sep),
        None => integer.to_string(),
    };

    let mut out = String::with_capacity(integer.len() + fraction.len() + 2);
    if negative && !is_zero {
        out.push('-');
    }
    out.push_str(&integer);
    if !fraction.is_empty() {
        out.push(format.decimal_separator);
        out.push_str(fraction);
    }
    Ok(out)
}

/// Format an integer, padding the fraction per `format`.
///
/// # Errors
///
/// Same as [`format_decimal`].
pub fn format_integer(value: i64, format: &NumberFormat) -> Result<String> {
    format_decimal(&BigDecimal::from(value), format)
}

/// Insert `separator` every three digits from the right.
fn group_digits(digits: &str, separator: char) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(ch);
    }
    out
}
