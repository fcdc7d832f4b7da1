use std::sync::Arc;

use chrono::{Duration, NaiveDate};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use daily_budget::{
    ledger::{Entry, Ledger},
    report::CashReporter,
    time::FixedClock,
};

fn build_sample_ledger(entry_count: usize) -> Ledger {
    let today = NaiveDate::from_ymd_opt(2025, 1, 31).unwrap();
    let mut ledger = Ledger::with_clock(5_000.0, Arc::new(FixedClock::new(today)));
    for idx in 0..entry_count {
        let date = today - Duration::days((idx % 30) as i64);
        ledger.add_entry(Entry::on(50.0 + (idx % 100) as f64, "bench", date));
    }
    ledger
}

fn bench_aggregation(c: &mut Criterion) {
    let ledger = build_sample_ledger(black_box(10_000));

    c.bench_function("today_total_10k", |b| b.iter(|| black_box(ledger.today_total())));
    c.bench_function("week_total_10k", |b| b.iter(|| black_box(ledger.week_total())));
    c.bench_function("cash_message_10k", |b| {
        b.iter(|| black_box(CashReporter::remaining_message(&ledger, "eur")))
    });
}

criterion_group!(benches, bench_aggregation);
criterion_main!(benches);
