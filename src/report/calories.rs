use std::fmt;

use serde::Serialize;

use crate::ledger::RemainingToday;

/// Outcome of checking today's calorie allowance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "status", content = "kcal", rename_all = "snake_case")]
pub enum CaloriesStatus {
    /// Up to this many kilocalories may still be eaten today.
    Allowed(f64),
    Stop,
}

impl CaloriesStatus {
    pub fn from_remaining(remaining: f64) -> Self {
        if remaining > 0.0 {
            CaloriesStatus::Allowed(remaining)
        } else {
            CaloriesStatus::Stop
        }
    }
}

impl fmt::Display for CaloriesStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CaloriesStatus::Allowed(kcal) => write!(
                f,
                "Сегодня можно съесть что-нибудь ещё, но с общей калорийностью не более {kcal} кКал"
            ),
            CaloriesStatus::Stop => f.write_str("Хватит есть!"),
        }
    }
}

/// Formats the calorie budget of a ledger.
#[derive(Debug, Default, Clone, Copy)]
pub struct CaloriesReporter;

impl CaloriesReporter {
    pub fn status(source: &impl RemainingToday) -> CaloriesStatus {
        CaloriesStatus::from_remaining(source.remaining_today())
    }

    pub fn remaining_message(source: &impl RemainingToday) -> String {
        Self::status(source).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use insta::assert_snapshot;

    struct Remaining(f64);

    impl RemainingToday for Remaining {
        fn remaining_today(&self) -> f64 {
            self.0
        }
    }

    #[test]
    fn positive_remaining_embeds_value() {
        assert_snapshot!(
            CaloriesReporter::remaining_message(&Remaining(150.0)),
            @"Сегодня можно съесть что-нибудь ещё, но с общей калорийностью не более 150 кКал"
        );
    }

    #[test]
    fn fractional_remaining_is_not_rounded() {
        let message = CaloriesReporter::remaining_message(&Remaining(12.345));
        assert!(message.contains("не более 12.345 кКал"), "{message}");
    }

    #[test]
    fn zero_or_negative_remaining_stops() {
        assert_eq!(CaloriesReporter::remaining_message(&Remaining(0.0)), "Хватит есть!");
        assert_eq!(CaloriesReporter::remaining_message(&Remaining(-5.0)), "Хватит есть!");
        assert_eq!(CaloriesReporter::status(&Remaining(-5.0)), CaloriesStatus::Stop);
    }
}
