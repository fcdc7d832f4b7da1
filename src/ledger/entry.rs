use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::{BudgetError, BudgetResult};
use crate::time::Clock;

/// Accepted format for user supplied entry dates.
pub const ENTRY_DATE_FORMAT: &str = "%d.%m.%Y";

/// A single dated amount logged against a ledger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    amount: f64,
    comment: String,
    date: NaiveDate,
}

impl Entry {
    /// Builds an entry, parsing `date` as `DD.MM.YYYY` or falling back to `clock.today()`.
    pub fn new(
        amount: f64,
        comment: impl Into<String>,
        date: Option<&str>,
        clock: &dyn Clock,
    ) -> BudgetResult<Self> {
        let date = match date {
            Some(raw) => parse_entry_date(raw)?,
            None => clock.today(),
        };
        Ok(Self::on(amount, comment, date))
    }

    pub fn on(amount: f64, comment: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            amount,
            comment: comment.into(),
            date,
        }
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    pub fn comment(&self) -> &str {
        &self.comment
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }
}

/// Input shape for entries arriving as JSON, with the date still in `DD.MM.YYYY`.
#[derive(Debug, Clone, Deserialize)]
pub struct EntryDraft {
    pub amount: f64,
    #[serde(default)]
    pub comment: String,
    #[serde(default)]
    pub date: Option<String>,
}

impl EntryDraft {
    pub fn into_entry(self, clock: &dyn Clock) -> BudgetResult<Entry> {
        Entry::new(self.amount, self.comment, self.date.as_deref(), clock)
    }
}

/// Parses a `DD.MM.YYYY` date strictly: zero-padded day and month, four-digit year.
pub fn parse_entry_date(raw: &str) -> BudgetResult<NaiveDate> {
    if !has_entry_date_shape(raw) {
        return Err(BudgetError::ParseDate {
            input: raw.to_string(),
            source: None,
        });
    }
    NaiveDate::parse_from_str(raw, ENTRY_DATE_FORMAT).map_err(|source| BudgetError::ParseDate {
        input: raw.to_string(),
        source: Some(source),
    })
}

// chrono accepts short, signed or space-padded fields for %d/%m/%Y.
fn has_entry_date_shape(raw: &str) -> bool {
    let bytes = raw.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(idx, byte)| match idx {
            2 | 5 => *byte == b'.',
            _ => byte.is_ascii_digit(),
        })
}
