//! Fixed partitions of the year and the period boundaries derived from them.
//!
//! A [`PeriodFamily`] splits the twelve months into equal, contiguous spans:
//!
//! | Family       | Spans | Months per span | Spans                          |
//! |--------------|-------|-----------------|--------------------------------|
//! | Trimester    | 4     | 3               | Jan–Mar, Apr–Jun, Jul–Sep, Oct–Dec |
//! | Quadrimester | 3     | 4               | Jan–Apr, May–Aug, Sep–Dec      |
//! | Semester     | 2     | 6               | Jan–Jun, Jul–Dec               |
//!
//! Every family is described by one const table (month → span index, and the
//! first/last day of each span), and a single algorithm resolves boundaries
//! for all of them:
//!
//! 1. classify the input's month into a span index;
//! 2. step to the current, next or previous span, rolling the year over at
//!    the family edges;
//! 3. read the first or last day of the target span from the table.

use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::{PeriodError, Result};
use crate::temporal::{date, CalendarFields};

// ── Families and their tables ───────────────────────────────────────────────

/// A fixed partition of the calendar year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PeriodFamily {
    /// Four 3-month spans.
    Trimester,
    /// Three 4-month spans.
    Quadrimester,
    /// Two 6-month spans.
    Semester,
}

/// One span of a family: its first and last month and the last day of that last month.
///
/// No span ends in February, so the last day never depends on the year.
#[derive(Debug, Clone, Copy)]
struct Span {
    first_month: u32,
    last_month: u32,
    last_day: u32,
}

impl Span {
    const fn new(first_month: u32, last_month: u32, last_day: u32) -> Self {
        Self {
            first_month,
            last_month,
            last_day,
        }
    }
}

struct FamilyLayout {
    /// Span index (1-based) for each month, January first.
    month_to_index: [u8; 12],
    spans: &'static [Span],
}

const TRIMESTERS: FamilyLayout = FamilyLayout {
    month_to_index: [1, 1, 1, 2, 2, 2, 3, 3, 3, 4, 4, 4],
    spans: &[
        Span::new(1, 3, 31),
        Span::new(4, 6, 30),
        Span::new(7, 9, 30),
        Span::new(10, 12, 31),
    ],
};

const QUADRIMESTERS: FamilyLayout = FamilyLayout {
    month_to_index: [1, 1, 1, 1, 2, 2, 2, 2, 3, 3, 3, 3],
    spans: &[
        Span::new(1, 4, 30),
        Span::new(5, 8, 31),
        Span::new(9, 12, 31),
    ],
};

const SEMESTERS: FamilyLayout = FamilyLayout {
    month_to_index: [1, 1, 1, 1, 1, 1, 2, 2, 2, 2, 2, 2],
    spans: &[Span::new(1, 6, 30), Span::new(7, 12, 31)],
};

impl PeriodFamily {
    pub const ALL: [PeriodFamily; 3] = [
        PeriodFamily::Trimester,
        PeriodFamily::Quadrimester,
        PeriodFamily::Semester,
    ];

    const fn layout(self) -> &'static FamilyLayout {
        match self {
            PeriodFamily::Trimester => &TRIMESTERS,
            PeriodFamily::Quadrimester => &QUADRIMESTERS,
            PeriodFamily::Semester => &SEMESTERS,
        }
    }

    /// Months per span (3, 4 or 6).
    pub const fn span_months(self) -> u32 {
        match self {
            PeriodFamily::Trimester => 3,
            PeriodFamily::Quadrimester => 4,
            PeriodFamily::Semester => 6,
        }
    }

    /// Spans per year (4, 3 or 2).
    pub const fn span_count(self) -> u8 {
        match self {
            PeriodFamily::Trimester => 4,
            PeriodFamily::Quadrimester => 3,
            PeriodFamily::Semester => 2,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            PeriodFamily::Trimester => "trimester",
            PeriodFamily::Quadrimester => "quadrimester",
            PeriodFamily::Semester => "semester",
        }
    }

    /// Single-letter code used by [`Period`]'s `Display` (`2023-T4`).
    pub const fn code(self) -> char {
        match self {
            PeriodFamily::Trimester => 'T',
            PeriodFamily::Quadrimester => 'Q',
            PeriodFamily::Semester => 'S',
        }
    }

    fn span(self, index: u8) -> &'static Span {
        &self.layout().spans[usize::from(index) - 1]
    }
}

impl fmt::Display for PeriodFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Which period to resolve, relative to the one containing the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Current,
    Next,
    Previous,
}

/// Which edge of a period to return.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoundaryKind {
    First,
    Last,
}

// ── Period ──────────────────────────────────────────────────────────────────

/// A concrete span: the `index`-th period of `family` in `year`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "RawPeriod")]
pub struct Period {
    family: PeriodFamily,
    year: i32,
    index: u8,
}

#[derive(Deserialize)]
struct RawPeriod {
    family: PeriodFamily,
    year: i32,
    index: u8,
}

impl TryFrom<RawPeriod> for Period {
    type Error = PeriodError;

    fn try_from(raw: RawPeriod) -> Result<Self> {
        Period::new(raw.family, raw.index, raw.year)
    }
}

impl Period {
    /// # Errors
    ///
    /// Returns [`PeriodError::InvalidPeriodIndex`] unless `1 <= index <= family.span_count()`.
    pub fn new(family: PeriodFamily, index: u8, year: i32) -> Result<Self> {
        let max = family.span_count();
        if index == 0 || index > max {
            return Err(PeriodError::InvalidPeriodIndex { family, index, max });
        }
        Ok(Self {
            family,
            year,
            index,
        })
    }

    /// The period of `family` that `value` falls in.
    pub fn containing<T: CalendarFields>(value: &T, family: PeriodFamily) -> Self {
        let d = value.calendar_date();
        Self {
            family,
            year: d.year(),
            index: classify(value, family),
        }
    }

    pub fn family(&self) -> PeriodFamily {
        self.family
    }

    pub fn index(&self) -> u8 {
        self.index
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// The following period, rolling into the next year after the last span.
    pub fn next(&self) -> Self {
        if self.index == self.family.span_count() {
            Self {
                year: self.year.saturating_add(1),
                index: 1,
                ..*self
            }
        } else {
            Self {
                index: self.index + 1,
                ..*self
            }
        }
    }

    /// The preceding period, rolling into the previous year before the first span.
    pub fn previous(&self) -> Self {
        if self.index == 1 {
            Self {
                year: self.year.saturating_sub(1),
                index: self.family.span_count(),
                ..*self
            }
        } else {
            Self {
                index: self.index - 1,
                ..*self
            }
        }
    }

    pub fn shift(&self, direction: Direction) -> Self {
        match direction {
            Direction::Current => *self,
            Direction::Next => self.next(),
            Direction::Previous => self.previous(),
        }
    }

    /// # Errors
    ///
    /// Returns [`PeriodError::InvalidDate`] if the year is outside the supported date range.
    pub fn first_day(&self) -> Result<NaiveDate> {
        let span = self.family.span(self.index);
        date(self.year, span.first_month, 1)
    }

    /// # Errors
    ///
    /// Returns [`PeriodError::InvalidDate`] if the year is outside the supported date range.
    pub fn last_day(&self) -> Result<NaiveDate> {
        let span = self.family.span(self.index);
        date(self.year, span.last_month, span.last_day)
    }

    /// # Errors
    ///
    /// Returns [`PeriodError::InvalidDate`] if the year is outside the supported date range.
    pub fn boundary(&self, kind: BoundaryKind) -> Result<NaiveDate> {
        match kind {
            BoundaryKind::First => self.first_day(),
            BoundaryKind::Last => self.last_day(),
        }
    }

    pub fn contains<T: CalendarFields>(&self, value: &T) -> bool {
        value.calendar_date().year() == self.year && classify(value, self.family) == self.index
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{}{}", self.year, self.family.code(), self.index)
    }
}

// ── Classification and resolution ───────────────────────────────────────────

/// The 1-based index of the `family` span containing `value`'s month.
///
/// # Examples
///
/// ```
/// use period_engine::period::{classify, PeriodFamily};
/// use period_engine::temporal::date;
///
/// let d = date(2023, 6, 10).unwrap();
/// assert_eq!(classify(&d, PeriodFamily::Quadrimester), 2);
/// assert_eq!(classify(&d, PeriodFamily::Semester), 1);
/// ```
pub fn classify<T: CalendarFields>(value: &T, family: PeriodFamily) -> u8 {
    let month0 = value.calendar_date().month0() as usize;
    family.layout().month_to_index[month0]
}

/// Whether `value` lies in the `index`-th span of `family` (any year).
pub fn is_in_period<T: CalendarFields>(value: &T, family: PeriodFamily, index: u8) -> bool {
    classify(value, family) == index
}

/// Resolve the first or last day of the current, next or previous `family`
/// period relative to `value`.
///
/// The result has the same representation as the input: a time of day and
/// zone, if any, are carried over to the boundary date.
///
/// # Errors
///
/// Returns [`PeriodError::InvalidDate`] when the boundary falls outside the
/// supported date range, or [`PeriodError::InvalidDatetime`] when a zoned
/// value cannot be placed on the boundary date.
///
/// # Examples
///
/// ```
/// use period_engine::period::{resolve, BoundaryKind, Direction, PeriodFamily};
/// use period_engine::temporal::date;
///
/// let d = date(2023, 11, 20).unwrap();
/// let next = resolve(&d, PeriodFamily::Trimester, Direction::Next, BoundaryKind::First).unwrap();
/// assert_eq!(next, date(2024, 1, 1).unwrap());
/// ```
pub fn resolve<T: CalendarFields>(
    value: &T,
    family: PeriodFamily,
    direction: Direction,
    kind: BoundaryKind,
) -> Result<T> {
    let current = Period::containing(value, family);
    debug_assert!(current.contains(value));

    let target = current.shift(direction);
    let boundary = target.boundary(kind)?;
    trace!(
        from = %value.calendar_date(),
        %current,
        %target,
        ?kind,
        %boundary,
        "resolved period boundary"
    );
    value.with_calendar_date(boundary)
}

/// Like [`resolve`], but only for inputs known to lie in span `expected_index`.
///
/// Callers that already hold a span index (e.g. from a stored schedule) use
/// this to catch a date that drifted into another span.
///
/// # Errors
///
/// Returns [`PeriodError::InvalidPeriodIndex`] if `expected_index` is not a
/// span of `family`, [`PeriodError::PeriodMismatch`] if `value` lies in a
/// different span, or any error of [`resolve`].
pub fn resolve_from<T: CalendarFields>(
    value: &T,
    family: PeriodFamily,
    expected_index: u8,
    direction: Direction,
    kind: BoundaryKind,
) -> Result<T> {
    let max = family.span_count();
    if expected_index == 0 || expected_index > max {
        return Err(PeriodError::InvalidPeriodIndex {
            family,
            index: expected_index,
            max,
        });
    }

    let actual = classify(value, family);
    if actual != expected_index {
        return Err(PeriodError::PeriodMismatch {
            family,
            expected: expected_index,
            actual,
        });
    }

    resolve(value, family, direction, kind)
}

// ── Tests ───────────────────────────────────────────────────────────────────
