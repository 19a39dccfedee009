//! Start-of-day boundaries for zoned date-times.
//!
//! Period boundaries are calendar dates. For a zoned value the plain
//! [`PeriodExt`] methods keep the input's wall-clock time; the
//! `*_at_start_of_day` variants here return the zone's first instant of the
//! boundary date instead. The boundary date is always computed on the local
//! calendar date first, so a DST gap on the input's time of day can never
//! push the result onto a neighbouring day.

use chrono::{DateTime, NaiveDate, TimeZone};

use crate::calendar::CalendarExt;
use crate::error::Result;
use crate::facade::PeriodExt;
use crate::period::{BoundaryKind, Direction, PeriodFamily};
use crate::temporal::{start_of_day, CalendarFields};

macro_rules! start_of_day_variants {
    ($($variant:ident => $base:ident;)*) => {
        $(
            #[doc = concat!("[`", stringify!($base), "`](PeriodExt) at the start of the day.")]
            fn $variant(&self) -> Result<Self> {
                self.start_of_day_on(self.calendar_date().$base()?)
            }
        )*
    };
}

/// Boundary operations that land on the zone's first instant of the day.
///
/// Every method shares the errors of the boundary it wraps, plus
/// [`PeriodError::InvalidDatetime`](crate::PeriodError::InvalidDatetime) when
/// the day cannot be placed in the zone.
pub trait ZonedPeriodExt: CalendarFields {
    /// The first instant of `date` in this value's zone.
    fn start_of_day_on(&self, date: NaiveDate) -> Result<Self>;

    /// Drop the time of day: the first instant of this value's own date.
    fn at_start_of_day(&self) -> Result<Self> {
        self.start_of_day_on(self.calendar_date())
    }

    fn period_boundary_at_start_of_day(
        &self,
        family: PeriodFamily,
        direction: Direction,
        kind: BoundaryKind,
    ) -> Result<Self> {
        let boundary = self.calendar_date().period_boundary(family, direction, kind)?;
        self.start_of_day_on(boundary)
    }

    fn first_day_of_current_at_start_of_day(&self, family: PeriodFamily) -> Result<Self> {
        self.period_boundary_at_start_of_day(family, Direction::Current, BoundaryKind::First)
    }

    fn last_day_of_current_at_start_of_day(&self, family: PeriodFamily) -> Result<Self> {
        self.period_boundary_at_start_of_day(family, Direction::Current, BoundaryKind::Last)
    }

    fn first_day_of_next_at_start_of_day(&self, family: PeriodFamily) -> Result<Self> {
        self.period_boundary_at_start_of_day(family, Direction::Next, BoundaryKind::First)
    }

    fn last_day_of_next_at_start_of_day(&self, family: PeriodFamily) -> Result<Self> {
        self.period_boundary_at_start_of_day(family, Direction::Next, BoundaryKind::Last)
    }

    fn first_day_of_previous_at_start_of_day(&self, family: PeriodFamily) -> Result<Self> {
        self.period_boundary_at_start_of_day(family, Direction::Previous, BoundaryKind::First)
    }

    fn last_day_of_previous_at_start_of_day(&self, family: PeriodFamily) -> Result<Self> {
        self.period_boundary_at_start_of_day(family, Direction::Previous, BoundaryKind::Last)
    }

    start_of_day_variants! {
        first_day_of_current_trimester_at_start_of_day => first_day_of_current_trimester;
        last_day_of_current_trimester_at_start_of_day => last_day_of_current_trimester;
        first_day_of_next_trimester_at_start_of_day => first_day_of_next_trimester;
        last_day_of_next_trimester_at_start_of_day => last_day_of_next_trimester;
        first_day_of_previous_trimester_at_start_of_day => first_day_of_previous_trimester;
        last_day_of_previous_trimester_at_start_of_day => last_day_of_previous_trimester;

        first_day_of_current_quadrimester_at_start_of_day => first_day_of_current_quadrimester;
        last_day_of_current_quadrimester_at_start_of_day => last_day_of_current_quadrimester;
        first_day_of_next_quadrimester_at_start_of_day => first_day_of_next_quadrimester;
        last_day_of_next_quadrimester_at_start_of_day => last_day_of_next_quadrimester;
        first_day_of_previous_quadrimester_at_start_of_day => first_day_of_previous_quadrimester;
        last_day_of_previous_quadrimester_at_start_of_day => last_day_of_previous_quadrimester;

        first_day_of_current_semester_at_start_of_day => first_day_of_current_semester;
        last_day_of_current_semester_at_start_of_day => last_day_of_current_semester;
        first_day_of_next_semester_at_start_of_day => first_day_of_next_semester;
        last_day_of_next_semester_at_start_of_day => last_day_of_next_semester;
        first_day_of_previous_semester_at_start_of_day => first_day_of_previous_semester;
        last_day_of_previous_semester_at_start_of_day => last_day_of_previous_semester;

        first_day_of_month_at_start_of_day => first_day_of_month;
        last_day_of_month_at_start_of_day => last_day_of_month;
        first_day_of_year_at_start_of_day => first_day_of_year;
        last_day_of_year_at_start_of_day => last_day_of_year;
    }
}

impl<Z: TimeZone> ZonedPeriodExt for DateTime<Z> {
    fn start_of_day_on(&self, date: NaiveDate) -> Result<Self> {
        start_of_day(date, &self.timezone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::temporal::{date, parse_timezone, zoned_datetime};
    use chrono::{Timelike, Utc};
    use chrono_tz::Tz;

    fn tz(name: &str) -> Tz {
        parse_timezone(name).unwrap()
    }

    #[test]
    fn test_at_start_of_day_drops_time() {
        let paris = tz("Europe/Paris");
        let dt = zoned_datetime(2023, 3, 15, 16, 45, 12, 500, &paris).unwrap();
        let start = dt.at_start_of_day().unwrap();
        assert_eq!(start.date_naive(), date(2023, 3, 15).unwrap());
        assert_eq!((start.hour(), start.minute(), start.second(), start.nanosecond()), (0, 0, 0, 0));
        assert_eq!(start.timezone(), paris);
    }

    #[test]
    fn test_semester_at_start_of_day() {
        let ny = tz("America/New_York");
        let dt = zoned_datetime(2023, 3, 15, 22, 0, 0, 0, &ny).unwrap();
        let next = dt.first_day_of_next_semester_at_start_of_day().unwrap();
        assert_eq!(next.date_naive(), date(2023, 7, 1).unwrap());
        assert_eq!(next.hour(), 0);
        // July 1st midnight EDT is 04:00 UTC
        assert_eq!(next.with_timezone(&Utc).hour(), 4);
    }

    #[test]
    fn test_generic_variants_match_named() {
        let tokyo = tz("Asia/Tokyo");
        let dt = zoned_datetime(2023, 11, 20, 8, 0, 0, 0, &tokyo).unwrap();
        assert_eq!(
            dt.first_day_of_next_at_start_of_day(PeriodFamily::Trimester).unwrap(),
            dt.first_day_of_next_trimester_at_start_of_day().unwrap()
        );
        assert_eq!(
            dt.last_day_of_previous_at_start_of_day(PeriodFamily::Quadrimester).unwrap(),
            dt.last_day_of_previous_quadrimester_at_start_of_day().unwrap()
        );
        let first_next = dt.first_day_of_next_trimester_at_start_of_day().unwrap();
        assert_eq!(first_next.date_naive(), date(2024, 1, 1).unwrap());
    }

    #[test]
    fn test_month_and_year_at_start_of_day() {
        let berlin = tz("Europe/Berlin");
        let dt = zoned_datetime(2024, 2, 10, 12, 0, 0, 0, &berlin).unwrap();
        let end = dt.last_day_of_month_at_start_of_day().unwrap();
        assert_eq!(end.date_naive(), date(2024, 2, 29).unwrap());
        assert_eq!(end.hour(), 0);
        let year_end = dt.last_day_of_year_at_start_of_day().unwrap();
        assert_eq!(year_end.date_naive(), date(2024, 12, 31).unwrap());
    }

    #[test]
    fn test_start_of_day_skips_missing_midnight() {
        // Sao Paulo jumped from 00:00 to 01:00 on 2018-11-04.
        let sp = tz("America/Sao_Paulo");
        let dt = zoned_datetime(2018, 10, 20, 15, 0, 0, 0, &sp).unwrap();
        let start = dt.start_of_day_on(date(2018, 11, 4).unwrap()).unwrap();
        assert_eq!(start.date_naive(), date(2018, 11, 4).unwrap());
        assert_eq!(start.hour(), 1);
    }

    #[test]
    fn test_fixed_offset_zone() {
        let utc_dt = Utc.with_ymd_and_hms(2023, 8, 14, 23, 59, 59).unwrap();
        let start = utc_dt.first_day_of_current_semester_at_start_of_day().unwrap();
        assert_eq!(start, Utc.with_ymd_and_hms(2023, 7, 1, 0, 0, 0).unwrap());
    }
}
