use std::fmt;

use serde::Serialize;

use crate::currency::Currency;
use crate::ledger::RemainingToday;

/// Outcome of checking today's cash allowance in a given currency.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CashStatus {
    /// Exactly nothing left. Takes priority over currency validation.
    Exhausted,
    UnsupportedCurrency { code: String },
    Remaining { amount: f64, currency: Currency },
    /// Over the limit; `amount` is the positive size of the debt.
    Debt { amount: f64, currency: Currency },
}

impl CashStatus {
    pub fn from_remaining(remaining: f64, code: &str) -> Self {
        if remaining == 0.0 {
            return CashStatus::Exhausted;
        }
        let currency = match Currency::from_code(code) {
            Ok(currency) => currency,
            Err(err) => {
                tracing::warn!(error = %err, "cash report requested in unsupported currency");
                return CashStatus::UnsupportedCurrency {
                    code: code.to_string(),
                };
            }
        };
        let amount = currency.convert(remaining);
        if remaining < 0.0 {
            CashStatus::Debt {
                amount: amount.abs(),
                currency,
            }
        } else {
            CashStatus::Remaining { amount, currency }
        }
    }
}

impl fmt::Display for CashStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CashStatus::Exhausted => f.write_str("Денег нет, держись"),
            CashStatus::UnsupportedCurrency { code } => {
                write!(f, "Неподдерживаемый тип валюты {code}")
            }
            CashStatus::Remaining { amount, currency } => {
                write!(f, "На сегодня осталось {amount} {currency}")
            }
            CashStatus::Debt { amount, currency } => {
                write!(f, "Денег нет, держись: твой долг - {amount} {currency}")
            }
        }
    }
}

/// Formats the cash budget of a ledger in one of the supported currencies.
#[derive(Debug, Default, Clone, Copy)]
pub struct CashReporter;

impl CashReporter {
    pub fn status(source: &impl RemainingToday, code: &str) -> CashStatus {
        CashStatus::from_remaining(source.remaining_today(), code)
    }

    pub fn remaining_message(source: &impl RemainingToday, code: &str) -> String {
        Self::status(source, code).to_string()
    }
}
