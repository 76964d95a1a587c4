//! Performance benchmarks for the Hours Calculator.
//!
//! Covers the two pure stages of a run:
//! - Scanning a full 35-pair timesheet grid into time entries
//! - Aggregating entry lists of increasing size with leave applied
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use chrono::{Days, NaiveDate};
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use hours_calculator::calculation::{HolidayCalendar, calculate_hours_summary};
use hours_calculator::models::{LeaveAllowances, LeaveBalance, TimeEntry};
use hours_calculator::timesheet::{CellValue, GridLayout, MemoryGrid, TimesheetExtractor};

fn start_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 12, 2).unwrap()
}

fn christmas_calendar() -> HolidayCalendar {
    HolidayCalendar::from_config(&[
        "2024/12/25".to_string(),
        "2024/12/26".to_string(),
        "2025/01/01".to_string(),
    ])
    .unwrap()
}

/// A grid with every pair of the default layout filled, one day per pair.
fn full_grid(layout: &GridLayout) -> MemoryGrid {
    let epoch = NaiveDate::from_ymd_opt(1899, 12, 30).unwrap();
    let mut grid = MemoryGrid::new();

    for (i, (row, date_column, hours_column)) in layout.cell_pairs().enumerate() {
        let date = start_date() + Days::new(i as u64);
        grid.set(
            row,
            date_column,
            CellValue::Number((date - epoch).num_days() as f64),
        );
        grid.set(row, hours_column, CellValue::Number((i % 9) as f64));
    }

    grid
}

fn bench_extract_grid(c: &mut Criterion) {
    let calendar = christmas_calendar();
    let layout = GridLayout::default();
    let extractor = TimesheetExtractor::new(&calendar, &layout);
    let grid = full_grid(&layout);

    c.bench_function("extract_full_grid", |b| {
        b.iter(|| extractor.extract(black_box(&grid), "bench.xlsx").unwrap())
    });
}

fn bench_aggregate(c: &mut Criterion) {
    let calendar = christmas_calendar();
    let leave = LeaveAllowances {
        ordinary: LeaveBalance::new(3, 2),
        sick: LeaveBalance::new(1, 10),
        family: LeaveBalance::new(0, 3),
    };

    let mut group = c.benchmark_group("aggregate");
    for size in [35usize, 365, 3650] {
        let entries: Vec<TimeEntry> = (0..size)
            .map(|i| TimeEntry::new(start_date() + Days::new(i as u64), 8, &calendar))
            .collect();

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &entries, |b, entries| {
            b.iter(|| calculate_hours_summary(black_box(entries), black_box(&leave)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_extract_grid, bench_aggregate);
criterion_main!(benches);
