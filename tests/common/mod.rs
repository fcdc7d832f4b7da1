#![allow(dead_code)]

use std::sync::Arc;

use chrono::{Duration, NaiveDate};
use daily_budget::{
    ledger::{Entry, Ledger},
    time::FixedClock,
};

/// Pinned "today" shared by the integration suites.
pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2019, 11, 8).expect("valid date")
}

pub fn days_ago(days: i64) -> NaiveDate {
    today() - Duration::days(days)
}

pub fn clock() -> FixedClock {
    FixedClock::new(today())
}

/// Ledger pinned to `today()` and seeded with `(amount, days ago)` pairs.
pub fn ledger_with(limit: f64, entries: &[(f64, i64)]) -> Ledger {
    let mut ledger = Ledger::with_clock(limit, Arc::new(clock()));
    for (amount, back) in entries {
        ledger.add_entry(Entry::on(*amount, "seed", days_ago(*back)));
    }
    ledger
}
