//! General calendar helpers shared by every temporal representation.
//!
//! [`CalendarExt`] is blanket-implemented for all [`CalendarFields`] types, so
//! `NaiveDate`, `NaiveDateTime` and zoned `DateTime`s get the same day, week,
//! month and year arithmetic. Arithmetic works on the calendar date and keeps
//! the time of day (and zone) of the input.

use chrono::{Datelike, Days, Month, Months, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::{PeriodError, Result};
use crate::temporal::{date, CalendarFields};

// ── Configurable week start ─────────────────────────────────────────────────

/// Which day begins a week for [`CalendarExt::first_day_of_week`] and
/// [`CalendarExt::last_day_of_week`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeekStartDay {
    /// ISO 8601 standard (Monday = day 0 of the week).
    #[default]
    Monday,
    /// US/Canada convention (Sunday = day 0 of the week).
    Sunday,
}

/// How many days `weekday` is from the week-start day.
fn days_from_week_start(weekday: Weekday, week_start: WeekStartDay) -> u64 {
    match week_start {
        WeekStartDay::Monday => u64::from(weekday.num_days_from_monday()),
        WeekStartDay::Sunday => u64::from(weekday.num_days_from_sunday()),
    }
}

/// Whether `year` is a Gregorian leap year.
pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Number of days in `month` (1-12) of `year`.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        2 if is_leap_year(year) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

// ── Signed arithmetic on NaiveDate ──────────────────────────────────────────

fn add_days(d: NaiveDate, days: i64) -> Option<NaiveDate> {
    let magnitude = Days::new(days.unsigned_abs());
    if days >= 0 {
        d.checked_add_days(magnitude)
    } else {
        d.checked_sub_days(magnitude)
    }
}

fn sub_days(d: NaiveDate, days: i64) -> Option<NaiveDate> {
    let magnitude = Days::new(days.unsigned_abs());
    if days >= 0 {
        d.checked_sub_days(magnitude)
    } else {
        d.checked_add_days(magnitude)
    }
}

fn add_months(d: NaiveDate, months: i64) -> Option<NaiveDate> {
    let magnitude = Months::new(u32::try_from(months.unsigned_abs()).ok()?);
    if months >= 0 {
        d.checked_add_months(magnitude)
    } else {
        d.checked_sub_months(magnitude)
    }
}

fn sub_months(d: NaiveDate, months: i64) -> Option<NaiveDate> {
    let magnitude = Months::new(u32::try_from(months.unsigned_abs()).ok()?);
    if months >= 0 {
        d.checked_sub_months(magnitude)
    } else {
        d.checked_add_months(magnitude)
    }
}

fn out_of_range(d: NaiveDate, op: &str, amount: i64, unit: &str) -> PeriodError {
    PeriodError::InvalidDate(format!("{d} {op} {amount} {unit} is out of range"))
}

// ── CalendarExt ─────────────────────────────────────────────────────────────

/// Day/week/month/year arithmetic and calendar predicates.
///
/// Month and year arithmetic clamps to the last valid day of the target month,
/// so January 31st plus one month is the last day of February.
pub trait CalendarExt: CalendarFields {
    /// Move forward `days` days (backward when negative).
    ///
    /// # Errors
    ///
    /// Returns [`PeriodError::InvalidDate`] if the result is out of range.
    fn plus_days(&self, days: i64) -> Result<Self> {
        let d = self.calendar_date();
        let target = add_days(d, days).ok_or_else(|| out_of_range(d, "+", days, "days"))?;
        self.with_calendar_date(target)
    }

    /// Move backward `days` days (forward when negative).
    ///
    /// # Errors
    ///
    /// Returns [`PeriodError::InvalidDate`] if the result is out of range.
    fn minus_days(&self, days: i64) -> Result<Self> {
        let d = self.calendar_date();
        let target = sub_days(d, days).ok_or_else(|| out_of_range(d, "-", days, "days"))?;
        self.with_calendar_date(target)
    }

    /// Move forward `weeks` weeks.
    ///
    /// # Errors
    ///
    /// Returns [`PeriodError::InvalidDate`] if the result is out of range.
    fn plus_weeks(&self, weeks: i64) -> Result<Self> {
        let days = weeks
            .checked_mul(7)
            .ok_or_else(|| out_of_range(self.calendar_date(), "+", weeks, "weeks"))?;
        self.plus_days(days)
    }

    /// Move backward `weeks` weeks.
    ///
    /// # Errors
    ///
    /// Returns [`PeriodError::InvalidDate`] if the result is out of range.
    fn minus_weeks(&self, weeks: i64) -> Result<Self> {
        let days = weeks
            .checked_mul(7)
            .ok_or_else(|| out_of_range(self.calendar_date(), "-", weeks, "weeks"))?;
        self.minus_days(days)
    }

    /// Move forward `months` months, clamping the day of month.
    ///
    /// # Errors
    ///
    /// Returns [`PeriodError::InvalidDate`] if the result is out of range.
    fn plus_months(&self, months: i64) -> Result<Self> {
        let d = self.calendar_date();
        let target = add_months(d, months).ok_or_else(|| out_of_range(d, "+", months, "months"))?;
        self.with_calendar_date(target)
    }

    /// Move backward `months` months, clamping the day of month.
    ///
    /// # Errors
    ///
    /// Returns [`PeriodError::InvalidDate`] if the result is out of range.
    fn minus_months(&self, months: i64) -> Result<Self> {
        let d = self.calendar_date();
        let target = sub_months(d, months).ok_or_else(|| out_of_range(d, "-", months, "months"))?;
        self.with_calendar_date(target)
    }

    /// Move forward `years` years (February 29th clamps to the 28th).
    ///
    /// # Errors
    ///
    /// Returns [`PeriodError::InvalidDate`] if the result is out of range.
    fn plus_years(&self, years: i64) -> Result<Self> {
        let months = years
            .checked_mul(12)
            .ok_or_else(|| out_of_range(self.calendar_date(), "+", years, "years"))?;
        self.plus_months(months)
    }

    /// Move backward `years` years.
    ///
    /// # Errors
    ///
    /// Returns [`PeriodError::InvalidDate`] if the result is out of range.
    fn minus_years(&self, years: i64) -> Result<Self> {
        let months = years
            .checked_mul(12)
            .ok_or_else(|| out_of_range(self.calendar_date(), "-", years, "years"))?;
        self.minus_months(months)
    }

    /// The first day of this value's month.
    ///
    /// # Errors
    ///
    /// Returns [`PeriodError::InvalidDatetime`] if a zoned value cannot be placed there.
    fn first_day_of_month(&self) -> Result<Self> {
        let d = self.calendar_date();
        self.with_calendar_date(date(d.year(), d.month(), 1)?)
    }

    /// The last day of this value's month (leap-year aware).
    ///
    /// # Errors
    ///
    /// Returns [`PeriodError::InvalidDatetime`] if a zoned value cannot be placed there.
    fn last_day_of_month(&self) -> Result<Self> {
        let d = self.calendar_date();
        let last = days_in_month(d.year(), d.month());
        self.with_calendar_date(date(d.year(), d.month(), last)?)
    }

    /// January 1st of this value's year.
    ///
    /// # Errors
    ///
    /// Returns [`PeriodError::InvalidDatetime`] if a zoned value cannot be placed there.
    fn first_day_of_year(&self) -> Result<Self> {
        self.with_calendar_date(date(self.calendar_date().year(), 1, 1)?)
    }

    /// December 31st of this value's year.
    ///
    /// # Errors
    ///
    /// Returns [`PeriodError::InvalidDatetime`] if a zoned value cannot be placed there.
    fn last_day_of_year(&self) -> Result<Self> {
        self.with_calendar_date(date(self.calendar_date().year(), 12, 31)?)
    }

    /// The first day of this value's week.
    ///
    /// # Errors
    ///
    /// Returns [`PeriodError::InvalidDate`] at the edge of the representable range.
    fn first_day_of_week(&self, week_start: WeekStartDay) -> Result<Self> {
        let d = self.calendar_date();
        let back = days_from_week_start(d.weekday(), week_start);
        let start = d
            .checked_sub_days(Days::new(back))
            .ok_or_else(|| PeriodError::InvalidDate(format!("start of week of {d} is out of range")))?;
        self.with_calendar_date(start)
    }

    /// The last day of this value's week.
    ///
    /// # Errors
    ///
    /// Returns [`PeriodError::InvalidDate`] at the edge of the representable range.
    fn last_day_of_week(&self, week_start: WeekStartDay) -> Result<Self> {
        let d = self.calendar_date();
        let ahead = 6 - days_from_week_start(d.weekday(), week_start);
        let end = d
            .checked_add_days(Days::new(ahead))
            .ok_or_else(|| PeriodError::InvalidDate(format!("end of week of {d} is out of range")))?;
        self.with_calendar_date(end)
    }

    /// Same calendar date as `other`, whatever the time of day.
    fn is_same_day<O: CalendarFields>(&self, other: &O) -> bool {
        self.calendar_date() == other.calendar_date()
    }

    /// Strictly earlier calendar date than `other`.
    fn is_before_day<O: CalendarFields>(&self, other: &O) -> bool {
        self.calendar_date() < other.calendar_date()
    }

    /// Strictly later calendar date than `other`.
    fn is_after_day<O: CalendarFields>(&self, other: &O) -> bool {
        self.calendar_date() > other.calendar_date()
    }

    /// Calendar date within `start..=end`.
    fn is_between_days<A: CalendarFields, B: CalendarFields>(&self, start: &A, end: &B) -> bool {
        let d = self.calendar_date();
        start.calendar_date() <= d && d <= end.calendar_date()
    }

    fn is_leap_year(&self) -> bool {
        is_leap_year(self.calendar_date().year())
    }

    fn days_in_month(&self) -> u32 {
        let d = self.calendar_date();
        days_in_month(d.year(), d.month())
    }

    fn is_weekend(&self) -> bool {
        matches!(self.calendar_date().weekday(), Weekday::Sat | Weekday::Sun)
    }

    fn is_month(&self, month: Month) -> bool {
        self.calendar_date().month() == month.number_from_month()
    }

    fn is_january(&self) -> bool {
        self.is_month(Month::January)
    }

    fn is_february(&self) -> bool {
        self.is_month(Month::February)
    }

    fn is_march(&self) -> bool {
        self.is_month(Month::March)
    }

    fn is_april(&self) -> bool {
        self.is_month(Month::April)
    }

    fn is_may(&self) -> bool {
        self.is_month(Month::May)
    }

    fn is_june(&self) -> bool {
        self.is_month(Month::June)
    }

    fn is_july(&self) -> bool {
        self.is_month(Month::July)
    }

    fn is_august(&self) -> bool {
        self.is_month(Month::August)
    }

    fn is_september(&self) -> bool {
        self.is_month(Month::September)
    }

    fn is_october(&self) -> bool {
        self.is_month(Month::October)
    }

    fn is_november(&self) -> bool {
        self.is_month(Month::November)
    }

    fn is_december(&self) -> bool {
        self.is_month(Month::December)
    }
}

impl<T: CalendarFields> CalendarExt for T {}

// ── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::temporal::{datetime, parse_timezone, zoned_datetime};
    use chrono::Timelike;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        date(y, m, day).unwrap()
    }

    #[test]
    fn test_plus_and_minus_days() {
        assert_eq!(d(2023, 12, 31).plus_days(1).unwrap(), d(2024, 1, 1));
        assert_eq!(d(2024, 3, 1).minus_days(1).unwrap(), d(2024, 2, 29));
        assert_eq!(d(2024, 3, 1).plus_days(-1).unwrap(), d(2024, 2, 29));
        assert_eq!(d(2024, 3, 1).minus_days(-1).unwrap(), d(2024, 3, 2));
    }

    #[test]
    fn test_plus_weeks() {
        assert_eq!(d(2023, 3, 15).plus_weeks(2).unwrap(), d(2023, 3, 29));
        assert_eq!(d(2023, 3, 15).minus_weeks(3).unwrap(), d(2023, 2, 22));
    }

    #[test]
    fn test_plus_months_clamps_day() {
        assert_eq!(d(2023, 1, 31).plus_months(1).unwrap(), d(2023, 2, 28));
        assert_eq!(d(2024, 1, 31).plus_months(1).unwrap(), d(2024, 2, 29));
        assert_eq!(d(2023, 3, 31).minus_months(1).unwrap(), d(2023, 2, 28));
        assert_eq!(d(2023, 11, 15).plus_months(3).unwrap(), d(2024, 2, 15));
        assert_eq!(d(2023, 11, 15).plus_months(-11).unwrap(), d(2022, 12, 15));
    }

    #[test]
    fn test_plus_years_from_leap_day() {
        assert_eq!(d(2024, 2, 29).plus_years(1).unwrap(), d(2025, 2, 28));
        assert_eq!(d(2024, 2, 29).minus_years(4).unwrap(), d(2020, 2, 29));
    }

    #[test]
    fn test_arithmetic_out_of_range() {
        let err = d(2023, 1, 1).plus_days(i64::MAX).unwrap_err();
        assert!(matches!(err, PeriodError::InvalidDate(_)));
        assert!(d(2023, 1, 1).plus_years(i64::MAX).is_err());
        assert!(d(2023, 1, 1).minus_days(i64::MIN).is_err());
    }

    #[test]
    fn test_last_day_of_month_leap_year() {
        assert_eq!(d(2024, 2, 10).last_day_of_month().unwrap(), d(2024, 2, 29));
        assert_eq!(d(2023, 2, 10).last_day_of_month().unwrap(), d(2023, 2, 28));
        assert_eq!(d(2023, 4, 10).last_day_of_month().unwrap(), d(2023, 4, 30));
        assert_eq!(d(2023, 4, 10).first_day_of_month().unwrap(), d(2023, 4, 1));
    }

    #[test]
    fn test_first_and_last_day_of_year() {
        assert_eq!(d(2023, 6, 10).first_day_of_year().unwrap(), d(2023, 1, 1));
        assert_eq!(d(2023, 6, 10).last_day_of_year().unwrap(), d(2023, 12, 31));
    }

    #[test]
    fn test_week_boundaries_monday_start() {
        // 2023-03-15 is a Wednesday
        let wed = d(2023, 3, 15);
        assert_eq!(wed.first_day_of_week(WeekStartDay::Monday).unwrap(), d(2023, 3, 13));
        assert_eq!(wed.last_day_of_week(WeekStartDay::Monday).unwrap(), d(2023, 3, 19));
    }

    #[test]
    fn test_week_boundaries_sunday_start() {
        let wed = d(2023, 3, 15);
        assert_eq!(wed.first_day_of_week(WeekStartDay::Sunday).unwrap(), d(2023, 3, 12));
        assert_eq!(wed.last_day_of_week(WeekStartDay::Sunday).unwrap(), d(2023, 3, 18));
    }

    #[test]
    fn test_datetime_arithmetic_keeps_time() {
        let dt = datetime(2023, 1, 31, 18, 45, 0, 0).unwrap();
        let moved = dt.plus_months(1).unwrap();
        assert_eq!(moved, datetime(2023, 2, 28, 18, 45, 0, 0).unwrap());
        assert_eq!(
            dt.last_day_of_year().unwrap(),
            datetime(2023, 12, 31, 18, 45, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_zoned_plus_days_across_dst_keeps_wall_clock() {
        let tz = parse_timezone("America/New_York").unwrap();
        let before = zoned_datetime(2026, 3, 7, 14, 0, 0, 0, &tz).unwrap();
        let after = before.plus_days(1).unwrap();
        assert_eq!(after.hour(), 14);
        assert_eq!((after - before).num_hours(), 23);
    }

    #[test]
    fn test_comparison_predicates() {
        let a = d(2023, 3, 15);
        let b = datetime(2023, 3, 15, 23, 59, 0, 0).unwrap();
        assert!(a.is_same_day(&b));
        assert!(!a.is_before_day(&b));
        assert!(a.is_before_day(&d(2023, 3, 16)));
        assert!(a.is_after_day(&d(2022, 12, 31)));
        assert!(a.is_between_days(&d(2023, 3, 15), &d(2023, 3, 15)));
        assert!(!a.is_between_days(&d(2023, 3, 16), &d(2023, 4, 1)));
    }

    #[test]
    fn test_month_predicates() {
        let june = d(2023, 6, 10);
        assert!(june.is_june());
        assert!(june.is_month(Month::June));
        assert!(!june.is_july());
        assert!(d(2023, 1, 1).is_january());
        assert!(d(2023, 12, 31).is_december());
        assert!(d(2023, 9, 1).is_september());
    }

    #[test]
    fn test_leap_year_and_days_in_month() {
        assert!(d(2024, 1, 1).is_leap_year());
        assert!(!d(2023, 1, 1).is_leap_year());
        assert!(!is_leap_year(1900));
        assert!(is_leap_year(2000));
        assert_eq!(d(2024, 2, 1).days_in_month(), 29);
        assert_eq!(d(2023, 2, 1).days_in_month(), 28);
        assert_eq!(d(2023, 11, 1).days_in_month(), 30);
    }

    #[test]
    fn test_is_weekend() {
        assert!(d(2023, 3, 18).is_weekend()); // Saturday
        assert!(d(2023, 3, 19).is_weekend()); // Sunday
        assert!(!d(2023, 3, 20).is_weekend()); // Monday
    }
}
