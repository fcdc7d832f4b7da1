use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::errors::{BudgetError, BudgetResult};

/// Half-open calendar range `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateWindow {
    pub fn new(start: NaiveDate, end: NaiveDate) -> BudgetResult<Self> {
        if end <= start {
            return Err(BudgetError::InvalidWindow(
                "window end must be after start".into(),
            ));
        }
        Ok(Self { start, end })
    }

    /// Window covering exactly one day.
    pub fn day(date: NaiveDate) -> Self {
        Self {
            start: date,
            end: date + Duration::days(1),
        }
    }

    /// The `days` most recent calendar days, `today` included.
    pub fn trailing_days(today: NaiveDate, days: u32) -> Self {
        let days = i64::from(days.max(1));
        Self {
            start: today - Duration::days(days - 1),
            end: today + Duration::days(1),
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date < self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn rejects_empty_or_inverted_ranges() {
        assert!(DateWindow::new(date(2024, 1, 2), date(2024, 1, 2)).is_err());
        assert!(DateWindow::new(date(2024, 1, 3), date(2024, 1, 2)).is_err());
        assert!(DateWindow::new(date(2024, 1, 1), date(2024, 1, 2)).is_ok());
    }

    #[test]
    fn trailing_week_spans_seven_days() {
        let week = DateWindow::trailing_days(date(2024, 3, 1), 7);
        assert_eq!(week.start, date(2024, 2, 24));
        assert!(week.contains(date(2024, 3, 1)));
        assert!(week.contains(date(2024, 2, 24)));
        assert!(!week.contains(date(2024, 2, 23)));
        assert!(!week.contains(date(2024, 3, 2)));
    }

    #[test]
    fn day_window_contains_only_that_day() {
        let day = DateWindow::day(date(2024, 12, 31));
        assert!(day.contains(date(2024, 12, 31)));
        assert!(!day.contains(date(2025, 1, 1)));
        assert!(!day.contains(date(2024, 12, 30)));
    }
}
