//! # period-engine
//!
//! Deterministic calendar-period computation.
//!
//! Splits the year into trimesters (four 3-month spans), quadrimesters (three
//! 4-month spans) or semesters (two 6-month spans), classifies dates into
//! those spans, and resolves the first or last day of the current, next or
//! previous span. The same algorithm serves plain dates, date-times and zoned
//! date-times through one capability trait.
//!
//! ## Modules
//!
//! - [`temporal`] — The temporal primitive: [`CalendarFields`], constructors, zone resolution
//! - [`period`] — Period families, classification and boundary resolution
//! - [`facade`] — [`PeriodExt`]: named boundary methods and `is_*` predicates
//! - [`zoned`] — [`ZonedPeriodExt`]: start-of-day variants for zoned values
//! - [`calendar`] — [`CalendarExt`]: day/week/month/year arithmetic and predicates
//! - [`decimal`] — Arbitrary-precision arithmetic with explicit scale and rounding
//! - [`format`] — Number-to-string formatting
//! - [`error`] — Error types
//!
//! ## Example
//!
//! ```
//! use period_engine::{date, PeriodExt};
//!
//! let d = date(2023, 3, 15).unwrap();
//! assert_eq!(d.first_day_of_current_semester().unwrap(), date(2023, 1, 1).unwrap());
//! assert_eq!(d.last_day_of_previous_semester().unwrap(), date(2022, 12, 31).unwrap());
//! assert!(d.is_first_trimester());
//! ```

pub mod calendar;
pub mod decimal;
pub mod error;
pub mod facade;
pub mod format;
pub mod period;
pub mod temporal;
pub mod zoned;

pub use calendar::{CalendarExt, WeekStartDay};
pub use error::PeriodError;
pub use facade::PeriodExt;
pub use format::{format_decimal, format_integer, NumberFormat, TrailingZeros};
pub use period::{
    classify, is_in_period, resolve, resolve_from, BoundaryKind, Direction, Period, PeriodFamily,
};
pub use temporal::{date, datetime, parse_timezone, zoned_datetime, CalendarFields};
pub use zoned::ZonedPeriodExt;
