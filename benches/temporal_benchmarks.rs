//! Performance benchmarks for temporal queries.
//!
//! - Day expansion of a single record over a year
//! - Active/archived/future filtering over store tables of growing size
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, Weekday};
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use office_records::config::{Clock, OfficeConfig};
use office_records::models::{Contract, User};
use office_records::store::RecordStore;
use office_records::temporal::TemporalRange;

fn base() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 1, 1)
        .and_then(|d| d.and_hms_opt(8, 0, 0))
        .expect("valid base instant")
}

/// Creates a store holding `count` contracts spread over two years, one
/// third each in the past, present and future relative to the store clock.
fn create_test_store(count: usize) -> RecordStore {
    let now = base() + Duration::days(365);
    let mut store = RecordStore::new(OfficeConfig::default().with_clock(Clock::Fixed(now)));
    let (_, person) = store
        .create_account_with_profile(User::new("bench"))
        .expect("Failed to create account");

    for i in 0..count {
        let start = base() + Duration::days((i % 3) as i64 * 300);
        let mut contract = Contract::new(person);
        contract.range = TemporalRange::new(Some(start), Some(start + Duration::days(200)));
        store.insert(contract).expect("Failed to insert contract");
    }
    store
}

/// Benchmark: Expanding a one year range into days.
fn bench_days_range(c: &mut Criterion) {
    let range = TemporalRange::new(Some(base()), Some(base() + Duration::days(365)));

    let mut group = c.benchmark_group("days_range");
    group.bench_function("year", |b| b.iter(|| black_box(range.days_range(None, None))));
    group.bench_function("year_weekdays", |b| {
        b.iter(|| {
            black_box(range.days_range_filtered(None, None, |d| {
                !matches!(d.weekday(), Weekday::Sat | Weekday::Sun)
            }))
        })
    });
    group.finish();
}

/// Benchmark: Filtering store tables by temporal state.
fn bench_store_filters(c: &mut Criterion) {
    let mut group = c.benchmark_group("store_filters");

    for size in [100usize, 1_000, 10_000] {
        let store = create_test_store(size);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("filter_active", size), &store, |b, store| {
            b.iter(|| black_box(store.filter_active::<Contract>(None).count()))
        });
        group.bench_with_input(BenchmarkId::new("filter_archived", size), &store, |b, store| {
            b.iter(|| black_box(store.filter_archived::<Contract>(None).count()))
        });
        group.bench_with_input(BenchmarkId::new("filter_future", size), &store, |b, store| {
            b.iter(|| black_box(store.filter_future::<Contract>(None).count()))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_days_range, bench_store_filters);
criterion_main!(benches);
