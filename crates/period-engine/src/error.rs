//! Error types for period-engine operations.

use thiserror::Error;

use crate::period::PeriodFamily;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PeriodError {
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Invalid datetime: {0}")]
    InvalidDatetime(String),

    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),

    #[error("Invalid {family} index {index}: must be 1..={max}")]
    InvalidPeriodIndex {
        family: PeriodFamily,
        index: u8,
        max: u8,
    },

    #[error("Period mismatch: date lies in {family} {actual}, expected {family} {expected}")]
    PeriodMismatch {
        family: PeriodFamily,
        expected: u8,
        actual: u8,
    },

    #[error("Invalid decimal: {0}")]
    InvalidDecimal(String),

    #[error("Division by zero")]
    DivisionByZero,

    #[error("Invalid number format: {0}")]
    InvalidFormat(String),
}

pub type Result<T> = std::result::Result<T, PeriodError>;
