//! `periods`: inspect trimesters, quadrimesters and semesters from the command line.
//!
//! ```text
//! periods classify 2023-06-10
//! periods boundary 2023-03-15 --family semester --direction next --kind first
//! periods boundary 2023-03-15T22:00 -f trimester -z America/New_York --start-of-day
//! periods format 1234567.891 --decimal-separator , --grouping-separator .
//! ```

use std::io::{self, Write};

use anyhow::{bail, Context, Result};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use clap::{Parser, Subcommand, ValueEnum};
use period_engine::decimal::{parse_decimal, RoundingMode};
use period_engine::temporal::resolve_local;
use period_engine::{
    format_decimal, parse_timezone, BoundaryKind, Direction, NumberFormat, Period, PeriodExt,
    PeriodFamily, TrailingZeros, ZonedPeriodExt,
};
use serde::Serialize;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "periods",
    version,
    about = "Trimester, quadrimester and semester boundaries"
)]
struct Cli {
    /// Log resolution details to stderr (overrides RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show which period of each family a date falls in
    Classify {
        /// Date (YYYY-MM-DD) or local datetime (YYYY-MM-DDTHH:MM[:SS])
        value: String,

        /// Only report this family
        #[arg(short, long)]
        family: Option<FamilyArg>,
    },

    /// Resolve the first or last day of the current, next or previous period
    Boundary {
        /// Date (YYYY-MM-DD) or local datetime (YYYY-MM-DDTHH:MM[:SS])
        value: String,

        #[arg(short, long)]
        family: FamilyArg,

        #[arg(short, long, default_value = "current")]
        direction: DirectionArg,

        #[arg(short, long, default_value = "first")]
        kind: KindArg,

        /// IANA timezone; the value is read as wall-clock time in this zone
        #[arg(short = 'z', long)]
        timezone: Option<String>,

        /// Return the zone's first instant of the boundary day
        #[arg(long, requires = "timezone")]
        start_of_day: bool,
    },

    /// Format a decimal number
    Format {
        #[arg(allow_negative_numbers = true)]
        number: String,

        /// Decimal places to round to (at most 1000)
        #[arg(short, long, default_value_t = 2)]
        scale: u32,

        #[arg(long, default_value_t = '.')]
        decimal_separator: char,

        #[arg(long, default_value_t = ',')]
        grouping_separator: char,

        /// Do not group thousands
        #[arg(long)]
        no_grouping: bool,

        /// Show only significant decimals
        #[arg(long)]
        strip_trailing_zeros: bool,

        #[arg(long, default_value = "half-up")]
        rounding: RoundingArg,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum FamilyArg {
    Trimester,
    Quadrimester,
    Semester,
}

impl From<FamilyArg> for PeriodFamily {
    fn from(arg: FamilyArg) -> Self {
        match arg {
            FamilyArg::Trimester => PeriodFamily::Trimester,
            FamilyArg::Quadrimester => PeriodFamily::Quadrimester,
            FamilyArg::Semester => PeriodFamily::Semester,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum DirectionArg {
    Current,
    Next,
    Previous,
}

impl From<DirectionArg> for Direction {
    fn from(arg: DirectionArg) -> Self {
        match arg {
            DirectionArg::Current => Direction::Current,
            DirectionArg::Next => Direction::Next,
            DirectionArg::Previous => Direction::Previous,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum KindArg {
    First,
    Last,
}

impl From<KindArg> for BoundaryKind {
    fn from(arg: KindArg) -> Self {
        match arg {
            KindArg::First => BoundaryKind::First,
            KindArg::Last => BoundaryKind::Last,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum RoundingArg {
    Up,
    Down,
    Ceiling,
    Floor,
    HalfUp,
    HalfDown,
    HalfEven,
}

impl From<RoundingArg> for RoundingMode {
    fn from(arg: RoundingArg) -> Self {
        match arg {
            RoundingArg::Up => RoundingMode::Up,
            RoundingArg::Down => RoundingMode::Down,
            RoundingArg::Ceiling => RoundingMode::Ceiling,
            RoundingArg::Floor => RoundingMode::Floor,
            RoundingArg::HalfUp => RoundingMode::HalfUp,
            RoundingArg::HalfDown => RoundingMode::HalfDown,
            RoundingArg::HalfEven => RoundingMode::HalfEven,
        }
    }
}

// ── Input ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq)]
enum Input {
    Date(NaiveDate),
    DateTime(NaiveDateTime),
}

impl Input {
    fn date(&self) -> NaiveDate {
        match self {
            Input::Date(d) => *d,
            Input::DateTime(dt) => dt.date(),
        }
    }

    fn naive_datetime(&self) -> NaiveDateTime {
        match self {
            Input::Date(d) => d.and_time(NaiveTime::MIN),
            Input::DateTime(dt) => *dt,
        }
    }
}

fn parse_input(s: &str) -> Result<Input> {
    let s = s.trim();
    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Ok(Input::Date(d));
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Ok(Input::DateTime(dt));
        }
    }
    bail!("cannot parse '{s}': expected YYYY-MM-DD or YYYY-MM-DDTHH:MM[:SS]")
}

// ── Output ──────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
struct Classification {
    date: NaiveDate,
    periods: Vec<PeriodInfo>,
}

#[derive(Debug, Serialize)]
struct PeriodInfo {
    /// e.g. "2023-Q2"
    label: String,
    #[serde(flatten)]
    period: Period,
    first_day: NaiveDate,
    last_day: NaiveDate,
}

#[derive(Debug, Serialize)]
struct BoundaryResult {
    input: String,
    family: PeriodFamily,
    direction: Direction,
    kind: BoundaryKind,
    /// The period the boundary belongs to.
    period: String,
    result: String,
}

// ── Commands ────────────────────────────────────────────────────────────────

fn classify(value: &str, family: Option<FamilyArg>) -> Result<String> {
    let date = parse_input(value)?.date();
    let families = match family {
        Some(f) => vec![PeriodFamily::from(f)],
        None => PeriodFamily::ALL.to_vec(),
    };

    let periods = families
        .into_iter()
        .map(|family| -> Result<PeriodInfo> {
            let period = date.period(family);
            Ok(PeriodInfo {
                label: period.to_string(),
                period,
                first_day: period.first_day()?,
                last_day: period.last_day()?,
            })
        })
        .collect::<Result<Vec<_>>>()?;
    debug!(%date, count = periods.len(), "classified");

    Ok(serde_json::to_string_pretty(&Classification { date, periods })?)
}

fn boundary(
    value: &str,
    family: PeriodFamily,
    direction: Direction,
    kind: BoundaryKind,
    timezone: Option<&str>,
    start_of_day: bool,
) -> Result<String> {
    let input = parse_input(value)?;
    debug!(?input, %family, ?direction, ?kind, ?timezone, start_of_day, "resolving boundary");

    let result = match timezone {
        None => match input {
            Input::Date(d) => d.period_boundary(family, direction, kind)?.to_string(),
            Input::DateTime(dt) => dt
                .period_boundary(family, direction, kind)?
                .format("%Y-%m-%dT%H:%M:%S")
                .to_string(),
        },
        Some(name) => {
            let tz = parse_timezone(name)?;
            let zoned = resolve_local(&tz, input.naive_datetime())
                .with_context(|| format!("placing '{value}' in {name}"))?;
            let resolved = if start_of_day {
                zoned.period_boundary_at_start_of_day(family, direction, kind)?
            } else {
                zoned.period_boundary(family, direction, kind)?
            };
            resolved.to_rfc3339()
        }
    };

    let period = Period::containing(&input.date(), family).shift(direction);
    let out = BoundaryResult {
        input: value.to_string(),
        family,
        direction,
        kind,
        period: period.to_string(),
        result,
    };
    Ok(serde_json::to_string_pretty(&out)?)
}

fn format_number(number: &str, format: &NumberFormat) -> Result<String> {
    let value = parse_decimal(number)?;
    Ok(format_decimal(&value, format)?)
}

fn run(command: Command) -> Result<String> {
    match command {
        Command::Classify { value, family } => classify(&value, family),
        Command::Boundary {
            value,
            family,
            direction,
            kind,
            timezone,
            start_of_day,
        } => boundary(
            &value,
            family.into(),
            direction.into(),
            kind.into(),
            timezone.as_deref(),
            start_of_day,
        ),
        Command::Format {
            number,
            scale,
            decimal_separator,
            grouping_separator,
            no_grouping,
            strip_trailing_zeros,
            rounding,
        } => {
            let format = NumberFormat {
                decimal_separator,
                grouping_separator: (!no_grouping).then_some(grouping_separator),
                scale,
                rounding: rounding.into(),
                trailing_zeros: if strip_trailing_zeros {
                    TrailingZeros::Strip
                } else {
                    TrailingZeros::Keep
                },
            };
            format_number(&number, &format)
        }
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let output = run(cli.command)?;
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{output}")?;
    Ok(())
}
