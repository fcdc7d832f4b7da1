//! Sources of "today" for ledger queries.

use chrono::{DateTime, Duration, Local, NaiveDate, NaiveTime, TimeZone};

/// Clock abstracts access to the current date so ledger queries stay deterministic in tests.
pub trait Clock: Send + Sync {
    /// Returns the current local timestamp.
    fn now(&self) -> DateTime<Local>;

    /// Returns the current local calendar date. Defaults to `now().date_naive()`.
    fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }
}

/// Real-time clock backed by the local system time.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// Clock pinned to a single calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock {
    date: NaiveDate,
}

impl FixedClock {
    pub fn new(date: NaiveDate) -> Self {
        Self { date }
    }
}

impl Clock for FixedClock {
    /// Local noon of the pinned date, using the offset in effect at that instant.
    fn now(&self) -> DateTime<Local> {
        let noon = self.date.and_time(NaiveTime::default()) + Duration::hours(12);
        let offset = Local.offset_from_utc_datetime(&noon);
        let utc = noon - Duration::seconds(i64::from(offset.local_minus_utc()));
        DateTime::from_naive_utc_and_offset(utc, offset)
    }

    fn today(&self) -> NaiveDate {
        self.date
    }
}
