#![doc(test(attr(deny(warnings))))]

//! Daily Budget tracks dated calorie or cash entries against a daily limit and
//! reports what is left for today.
//!
//! ```
//! use std::sync::Arc;
//! use chrono::NaiveDate;
//! use daily_budget::{ledger::{Entry, Ledger}, report::CashReporter, time::FixedClock};
//!
//! let today = NaiveDate::from_ymd_opt(2019, 11, 8).unwrap();
//! let mut ledger = Ledger::with_clock(1000.0, Arc::new(FixedClock::new(today)));
//! ledger.add_entry(Entry::on(1400.0, "rent share", today));
//! assert_eq!(
//!     CashReporter::remaining_message(&ledger, "usd"),
//!     "Денег нет, держись: твой долг - 6.67 USD"
//! );
//! ```

pub mod config;
pub mod currency;
pub mod errors;
pub mod ledger;
pub mod report;
pub mod time;
pub mod utils;

pub use errors::{BudgetError, BudgetResult};

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Daily Budget tracing initialized.");
    });
}
