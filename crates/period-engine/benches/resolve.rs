use std::hint::black_box;

use chrono::{Days, NaiveDate};
use criterion::{criterion_group, criterion_main, Criterion};
use period_engine::{
    parse_timezone, resolve, BoundaryKind, Direction, PeriodFamily, ZonedPeriodExt,
};

fn year_of_dates() -> Vec<NaiveDate> {
    let start = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
    (0..365)
        .map(|n| start.checked_add_days(Days::new(n)).unwrap())
        .collect()
}

fn bench_resolve_dates(c: &mut Criterion) {
    let dates = year_of_dates();
    c.bench_function("resolve_all_families_one_year", |b| {
        b.iter(|| {
            for d in &dates {
                for family in PeriodFamily::ALL {
                    let next = resolve(d, family, Direction::Next, BoundaryKind::Last).unwrap();
                    black_box(next);
                }
            }
        })
    });
}

fn bench_resolve_zoned(c: &mut Criterion) {
    let tz = parse_timezone("America/New_York").unwrap();
    let dates = year_of_dates();
    let zoned: Vec<_> = dates
        .iter()
        .map(|d| period_engine::temporal::start_of_day(*d, &tz).unwrap())
        .collect();
    c.bench_function("zoned_semester_start_of_day_one_year", |b| {
        b.iter(|| {
            for dt in &zoned {
                black_box(dt.first_day_of_next_semester_at_start_of_day().unwrap());
            }
        })
    });
}

criterion_group!(benches, bench_resolve_dates, bench_resolve_zoned);
criterion_main!(benches);
