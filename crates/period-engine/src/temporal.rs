//! The temporal primitive the period core is written against.
//!
//! Every period computation only needs two things from a temporal value: the
//! calendar date it falls on, and a way to build the same kind of value on a
//! different calendar date. [`CalendarFields`] captures exactly that, and is
//! implemented for the three representations this crate supports:
//!
//! - [`NaiveDate`] — a plain calendar date
//! - [`NaiveDateTime`] — a date with a time of day, no zone
//! - [`DateTime<Z>`] — a zoned instant (typically `DateTime<chrono_tz::Tz>`)
//!
//! Moving a zoned value to another date keeps its wall-clock time and zone.
//! When that wall-clock reading does not exist on the target date (a DST gap),
//! it is pushed forward by the length of the gap; when it exists twice (a DST
//! overlap), the earlier instant wins.

use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, NaiveTime, Offset, TimeZone};
use chrono_tz::Tz;
use tracing::debug;

use crate::error::{PeriodError, Result};

/// A temporal value that lives on a calendar date and can be moved to another one.
pub trait CalendarFields: Sized {
    /// The calendar date this value falls on (local date for zoned values).
    fn calendar_date(&self) -> NaiveDate;

    /// A value of the same representation on `date`, keeping every other
    /// component (time of day, zone) unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`PeriodError::InvalidDatetime`] if a zoned value cannot be
    /// placed on `date` at all.
    fn with_calendar_date(&self, date: NaiveDate) -> Result<Self>;
}

impl CalendarFields for NaiveDate {
    fn calendar_date(&self) -> NaiveDate {
        *self
    }

    fn with_calendar_date(&self, date: NaiveDate) -> Result<Self> {
        Ok(date)
    }
}

impl CalendarFields for NaiveDateTime {
    fn calendar_date(&self) -> NaiveDate {
        self.date()
    }

    fn with_calendar_date(&self, date: NaiveDate) -> Result<Self> {
        Ok(date.and_time(self.time()))
    }
}

impl<Z: TimeZone> CalendarFields for DateTime<Z> {
    fn calendar_date(&self) -> NaiveDate {
        self.date_naive()
    }

    fn with_calendar_date(&self, date: NaiveDate) -> Result<Self> {
        resolve_local(&self.timezone(), date.and_time(self.time()))
    }
}

// ── Construction ────────────────────────────────────────────────────────────

/// Build a calendar date, rejecting anything that is not a real Gregorian date.
///
/// # Errors
///
/// Returns [`PeriodError::InvalidDate`] for out-of-range months or days
/// (e.g. February 30th, or February 29th outside a leap year).
///
/// # Examples
///
/// ```
/// use period_engine::temporal::date;
///
/// assert!(date(2024, 2, 29).is_ok());
/// assert!(date(2023, 2, 29).is_err());
/// ```
pub fn date(year: i32, month: u32, day: u32) -> Result<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| PeriodError::InvalidDate(format!("{year:04}-{month:02}-{day:02}")))
}

/// Build a date with a time of day.
///
/// # Errors
///
/// Returns [`PeriodError::InvalidDate`] for an invalid date, or
/// [`PeriodError::InvalidDatetime`] for an invalid time of day.
pub fn datetime(
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    second: u32,
    nanosecond: u32,
) -> Result<NaiveDateTime> {
    let time = NaiveTime::from_hms_nano_opt(hour, minute, second, nanosecond).ok_or_else(|| {
        PeriodError::InvalidDatetime(format!(
            "{hour:02}:{minute:02}:{second:02}.{nanosecond:09}"
        ))
    })?;
    Ok(date(year, month, day)?.and_time(time))
}

/// Build a zoned datetime from local wall-clock fields.
///
/// Gap and overlap handling follows the module-level rules.
///
/// # Errors
///
/// Same as [`datetime`], plus [`PeriodError::InvalidDatetime`] when the local
/// time cannot be placed in `tz`.
#[allow(clippy::too_many_arguments)]
pub fn zoned_datetime<Z: TimeZone>(
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    second: u32,
    nanosecond: u32,
    tz: &Z,
) -> Result<DateTime<Z>> {
    resolve_local(
        tz,
        datetime(year, month, day, hour, minute, second, nanosecond)?,
    )
}

/// Parse an IANA timezone string into `Tz`.
///
/// # Errors
///
/// Returns [`PeriodError::InvalidTimezone`] for unknown zone names.
pub fn parse_timezone(s: &str) -> Result<Tz> {
    s.parse::<Tz>()
        .map_err(|_| PeriodError::InvalidTimezone(format!("'{}'", s)))
}

// ── Local time resolution ───────────────────────────────────────────────────

/// Place a wall-clock reading in `tz`.
///
/// Ambiguous readings resolve to the earlier instant. Readings inside a gap
/// are interpreted with the offset in force before the transition, which
/// moves them forward by the gap length (02:30 on a spring-forward night
/// becomes 03:30).
///
/// # Errors
///
/// Returns [`PeriodError::InvalidDatetime`] if no offset can be found for the
/// reading, which only happens at the edges of the representable range.
pub fn resolve_local<Z: TimeZone>(tz: &Z, naive: NaiveDateTime) -> Result<DateTime<Z>> {
    if let Some(dt) = tz.from_local_datetime(&naive).earliest() {
        return Ok(dt);
    }

    let unplaceable = || {
        PeriodError::InvalidDatetime(format!("local time {naive} cannot be placed in zone"))
    };

    let before = naive
        .checked_sub_signed(Duration::days(1))
        .ok_or_else(unplaceable)?;
    let offset = tz
        .offset_from_local_datetime(&before)
        .earliest()
        .ok_or_else(unplaceable)?
        .fix();
    let utc = naive
        .checked_sub_signed(Duration::seconds(i64::from(offset.local_minus_utc())))
        .ok_or_else(unplaceable)?;

    let resolved = tz.from_utc_datetime(&utc);
    debug!(local = %naive, resolved = %resolved.naive_local(), "local time fell in a gap, shifted forward");
    Ok(resolved)
}

/// The first instant of `date` in `tz`.
///
/// Usually midnight; when a transition swallows midnight it is the first
/// wall-clock reading after the gap.
///
/// # Errors
///
/// Returns [`PeriodError::InvalidDatetime`] if the date cannot be placed in `tz`.
pub fn start_of_day<Z: TimeZone>(date: NaiveDate, tz: &Z) -> Result<DateTime<Z>> {
    resolve_local(tz, date.and_time(NaiveTime::MIN))
}

// ── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike, Utc};

    #[test]
    fn test_date_valid() {
        let d = date(2023, 3, 15).unwrap();
        assert_eq!((d.year(), d.month(), d.day()), (2023, 3, 15));
    }

    #[test]
    fn test_date_leap_day() {
        assert!(date(2024, 2, 29).is_ok());
        assert!(date(2000, 2, 29).is_ok());
        assert!(date(1900, 2, 29).is_err());
    }

    #[test]
    fn test_date_invalid_returns_error() {
        let err = date(2023, 2, 30).unwrap_err().to_string();
        assert!(err.contains("Invalid date"), "got: {err}");
        assert!(err.contains("2023-02-30"), "got: {err}");
        assert!(date(2023, 13, 1).is_err());
        assert!(date(2023, 0, 1).is_err());
    }

    #[test]
    fn test_datetime_invalid_time_returns_error() {
        let err = datetime(2023, 3, 15, 24, 0, 0, 0).unwrap_err();
        assert!(matches!(err, PeriodError::InvalidDatetime(_)));
    }

    #[test]
    fn test_naive_datetime_keeps_time() {
        let dt = datetime(2023, 3, 15, 10, 30, 5, 0).unwrap();
        let moved = dt.with_calendar_date(date(2023, 7, 1).unwrap()).unwrap();
        assert_eq!(moved, datetime(2023, 7, 1, 10, 30, 5, 0).unwrap());
    }

    #[test]
    fn test_zoned_keeps_wall_clock_across_dst() {
        let tz = parse_timezone("America/New_York").unwrap();
        // January: EST (UTC-5)
        let winter = zoned_datetime(2026, 1, 15, 9, 0, 0, 0, &tz).unwrap();
        // Moving to July keeps 09:00 local, now EDT (UTC-4)
        let summer = winter.with_calendar_date(date(2026, 7, 1).unwrap()).unwrap();
        assert_eq!(summer.hour(), 9);
        assert_eq!(summer.with_timezone(&Utc).hour(), 13);
    }

    #[test]
    fn test_resolve_local_gap_shifts_forward() {
        let tz = parse_timezone("America/New_York").unwrap();
        // March 8, 2026: 02:00 → 03:00
        let naive = datetime(2026, 3, 8, 2, 30, 0, 0).unwrap();
        let resolved = resolve_local(&tz, naive).unwrap();
        assert_eq!(resolved.hour(), 3);
        assert_eq!(resolved.minute(), 30);
    }

    #[test]
    fn test_resolve_local_overlap_takes_earlier() {
        let tz = parse_timezone("America/New_York").unwrap();
        // November 1, 2026: 01:30 happens twice; the EDT reading is first.
        let naive = datetime(2026, 11, 1, 1, 30, 0, 0).unwrap();
        let resolved = resolve_local(&tz, naive).unwrap();
        assert_eq!(resolved.with_timezone(&Utc).hour(), 5);
    }

    #[test]
    fn test_start_of_day_when_midnight_is_skipped() {
        // Sao Paulo skipped 00:00 → 01:00 on 2018-11-04.
        let tz = parse_timezone("America/Sao_Paulo").unwrap();
        let start = start_of_day(date(2018, 11, 4).unwrap(), &tz).unwrap();
        assert_eq!(start.date_naive(), date(2018, 11, 4).unwrap());
        assert_eq!(start.hour(), 1);
    }

    #[test]
    fn test_start_of_day_regular() {
        let tz = parse_timezone("Europe/Paris").unwrap();
        let start = start_of_day(date(2023, 6, 30).unwrap(), &tz).unwrap();
        assert_eq!((start.hour(), start.minute(), start.second()), (0, 0, 0));
    }

    #[test]
    fn test_parse_timezone_invalid() {
        let err = parse_timezone("Invalid/Zone").unwrap_err().to_string();
        assert!(err.contains("Invalid timezone"), "got: {err}");
    }
}
