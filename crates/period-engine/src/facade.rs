//! Method-style access to period classification and boundaries.
//!
//! [`PeriodExt`] is blanket-implemented for every [`CalendarFields`] type, so
//! dates, date-times and zoned date-times share one implementation:
//!
//! ```
//! use period_engine::facade::PeriodExt;
//! use period_engine::temporal::{date, datetime};
//!
//! let d = date(2023, 3, 15).unwrap();
//! assert_eq!(d.first_day_of_next_semester().unwrap(), date(2023, 7, 1).unwrap());
//!
//! // Time of day is carried over to the boundary.
//! let dt = datetime(2023, 3, 15, 9, 30, 0, 0).unwrap();
//! assert_eq!(
//!     dt.last_day_of_current_trimester().unwrap(),
//!     datetime(2023, 3, 31, 9, 30, 0, 0).unwrap(),
//! );
//! ```
//!
//! Zoned values keep their wall-clock time, and a boundary date whose clock
//! skips that time (a DST gap) moves it forward. On such days New York's
//! `02:30` on 2001-04-01 becomes `03:30`, so for zoned values the period
//! adjacency (`last_day_of_previous` is the day before `first_day_of_current`)
//! holds on calendar dates ([`chrono::DateTime::date_naive`]), not on the
//! instants themselves. Use [`ZonedPeriodExt`](crate::zoned::ZonedPeriodExt)
//! for boundaries pinned to the zone's start of day.

use crate::error::Result;
use crate::period::{self, BoundaryKind, Direction, Period, PeriodFamily};
use crate::temporal::CalendarFields;

/// Period boundaries and classification predicates.
///
/// All boundary methods share the errors of [`period::resolve`].
pub trait PeriodExt: CalendarFields {
    /// The `family` period this value falls in.
    fn period(&self, family: PeriodFamily) -> Period {
        Period::containing(self, family)
    }

    fn period_boundary(
        &self,
        family: PeriodFamily,
        direction: Direction,
        kind: BoundaryKind,
    ) -> Result<Self> {
        period::resolve(self, family, direction, kind)
    }

    fn is_in_period(&self, family: PeriodFamily, index: u8) -> bool {
        period::is_in_period(self, family, index)
    }

    fn first_day_of_current(&self, family: PeriodFamily) -> Result<Self> {
        self.period_boundary(family, Direction::Current, BoundaryKind::First)
    }

    fn last_day_of_current(&self, family: PeriodFamily) -> Result<Self> {
        self.period_boundary(family, Direction::Current, BoundaryKind::Last)
    }

    fn first_day_of_next(&self, family: PeriodFamily) -> Result<Self> {
        self.period_boundary(family, Direction::Next, BoundaryKind::First)
    }

    fn last_day_of_next(&self, family: PeriodFamily) -> Result<Self> {
        self.period_boundary(family, Direction::Next, BoundaryKind::Last)
    }

    fn first_day_of_previous(&self, family: PeriodFamily) -> Result<Self> {
        self.period_boundary(family, Direction::Previous, BoundaryKind::First)
    }

    fn last_day_of_previous(&self, family: PeriodFamily) -> Result<Self> {
        self.period_boundary(family, Direction::Previous, BoundaryKind::Last)
    }

    // ── Trimesters ──────────────────────────────────────────────────────

    fn first_day_of_current_trimester(&self) -> Result<Self> {
        self.first_day_of_current(PeriodFamily::Trimester)
    }

    fn last_day_of_current_trimester(&self) -> Result<Self> {
        self.last_day_of_current(PeriodFamily::Trimester)
    }

    fn first_day_of_next_trimester(&self) -> Result<Self> {
        self.first_day_of_next(PeriodFamily::Trimester)
    }

    fn last_day_of_next_trimester(&self) -> Result<Self> {
        self.last_day_of_next(PeriodFamily::Trimester)
    }

    fn first_day_of_previous_trimester(&self) -> Result<Self> {
        self.first_day_of_previous(PeriodFamily::Trimester)
    }

    fn last_day_of_previous_trimester(&self) -> Result<Self> {
        self.last_day_of_previous(PeriodFamily::Trimester)
    }

    /// January through March.
    fn is_first_trimester(&self) -> bool {
        self.is_in_period(PeriodFamily::Trimester, 1)
    }

    /// April through June.
    fn is_second_trimester(&self) -> bool {
        self.is_in_period(PeriodFamily::Trimester, 2)
    }

    /// July through September.
    fn is_third_trimester(&self) -> bool {
        self.is_in_period(PeriodFamily::Trimester, 3)
    }

    /// October through December.
    fn is_fourth_trimester(&self) -> bool {
        self.is_in_period(PeriodFamily::Trimester, 4)
    }

    // ── Quadrimesters ───────────────────────────────────────────────────

    fn first_day_of_current_quadrimester(&self) -> Result<Self> {
        self.first_day_of_current(PeriodFamily::Quadrimester)
    }

    fn last_day_of_current_quadrimester(&self) -> Result<Self> {
        self.last_day_of_current(PeriodFamily::Quadrimester)
    }

    fn first_day_of_next_quadrimester(&self) -> Result<Self> {
        self.first_day_of_next(PeriodFamily::Quadrimester)
    }

    fn last_day_of_next_quadrimester(&self) -> Result<Self> {
        self.last_day_of_next(PeriodFamily::Quadrimester)
    }

    fn first_day_of_previous_quadrimester(&self) -> Result<Self> {
        self.first_day_of_previous(PeriodFamily::Quadrimester)
    }

    fn last_day_of_previous_quadrimester(&self) -> Result<Self> {
        self.last_day_of_previous(PeriodFamily::Quadrimester)
    }

    /// January through April.
    fn is_first_quadrimester(&self) -> bool {
        self.is_in_period(PeriodFamily::Quadrimester, 1)
    }

    /// May through August.
    fn is_second_quadrimester(&self) -> bool {
        self.is_in_period(PeriodFamily::Quadrimester, 2)
    }

    /// September through December.
    fn is_third_quadrimester(&self) -> bool {
        self.is_in_period(PeriodFamily::Quadrimester, 3)
    }

    // ── Semesters ───────────────────────────────────────────────────────

    fn first_day_of_current_semester(&self) -> Result<Self> {
        self.first_day_of_current(PeriodFamily::Semester)
    }

    fn last_day_of_current_semester(&self) -> Result<Self> {
        self.last_day_of_current(PeriodFamily::Semester)
    }

    fn first_day_of_next_semester(&self) -> Result<Self> {
        self.first_day_of_next(PeriodFamily::Semester)
    }

    fn last_day_of_next_semester(&self) -> Result<Self> {
        self.last_day_of_next(PeriodFamily::Semester)
    }

    fn first_day_of_previous_semester(&self) -> Result<Self> {
        self.first_day_of_previous(PeriodFamily::Semester)
    }

    fn last_day_of_previous_semester(&self) -> Result<Self> {
        self.last_day_of_previous(PeriodFamily::Semester)
    }

    /// January through June.
    fn is_first_semester(&self) -> bool {
        self.is_in_period(PeriodFamily::Semester, 1)
    }

    /// July through December.
    fn is_second_semester(&self) -> bool {
        self.is_in_period(PeriodFamily::Semester, 2)
    }
}

impl<T: CalendarFields> PeriodExt for T {}
