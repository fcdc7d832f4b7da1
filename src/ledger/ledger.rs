use std::{fmt, sync::Arc};

use chrono::NaiveDate;
use serde::Serialize;

use super::{entry::Entry, window::DateWindow};
use crate::time::{Clock, SystemClock};

/// Number of calendar days, today included, covered by the weekly total.
pub const WEEK_DAYS: u32 = 7;

/// Append-only list of entries measured against a fixed daily limit.
#[derive(Clone)]
pub struct Ledger {
    limit: f64,
    entries: Vec<Entry>,
    clock: Arc<dyn Clock>,
}

/// Point-in-time view of the ledger aggregates.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LedgerSummary {
    pub date: NaiveDate,
    pub limit: f64,
    pub today_total: f64,
    pub remaining_today: f64,
    pub week_total: f64,
    pub entry_count: usize,
}

/// Anything that can report how much of today's limit is left.
pub trait RemainingToday {
    fn remaining_today(&self) -> f64;
}

impl Ledger {
    pub fn new(limit: f64) -> Self {
        Self::with_clock(limit, Arc::new(SystemClock))
    }

    pub fn with_clock(limit: f64, clock: Arc<dyn Clock>) -> Self {
        Self {
            limit,
            entries: Vec::new(),
            clock,
        }
    }

    pub fn add_entry(&mut self, entry: Entry) {
        tracing::debug!(
            amount = entry.amount(),
            date = %entry.date(),
            comment = entry.comment(),
            "entry added"
        );
        self.entries.push(entry);
    }

    pub fn limit(&self) -> f64 {
        self.limit
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The date "today" resolves to right now.
    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    pub fn total_in(&self, window: DateWindow) -> f64 {
        self.entries
            .iter()
            .filter(|entry| window.contains(entry.date()))
            .map(Entry::amount)
            .sum()
    }

    pub fn total_on(&self, date: NaiveDate) -> f64 {
        self.total_in(DateWindow::day(date))
    }

    pub fn today_total(&self) -> f64 {
        let total = self.total_on(self.today());
        tracing::trace!(total, "today total");
        total
    }

    /// `limit - today_total()`; negative once the limit is exceeded.
    pub fn remaining_today(&self) -> f64 {
        self.limit - self.today_total()
    }

    /// Window of the last seven calendar days ending today.
    pub fn week_window(&self) -> DateWindow {
        DateWindow::trailing_days(self.today(), WEEK_DAYS)
    }

    pub fn week_total(&self) -> f64 {
        let total = self.total_in(self.week_window());
        tracing::trace!(total, "week total");
        total
    }

    pub fn summary(&self) -> LedgerSummary {
        let today_total = self.today_total();
        LedgerSummary {
            date: self.today(),
            limit: self.limit,
            today_total,
            remaining_today: self.limit - today_total,
            week_total: self.week_total(),
            entry_count: self.entries.len(),
        }
    }
}

impl RemainingToday for Ledger {
    fn remaining_today(&self) -> f64 {
        Ledger::remaining_today(self)
    }
}

impl fmt::Debug for Ledger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Ledger")
            .field("limit", &self.limit)
            .field("entries", &self.entries)
            .field("today", &self.today())
            .finish()
    }
}
