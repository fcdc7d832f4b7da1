//! Fixed-rate currencies the cash report can convert into.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::errors::BudgetError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Currency {
    Usd,
    Eur,
    Rub,
}

impl Currency {
    pub const ALL: [Currency; 3] = [Currency::Usd, Currency::Eur, Currency::Rub];

    /// Looks up a lowercase currency code (`usd`, `eur`, `rub`).
    pub fn from_code(code: &str) -> Result<Self, BudgetError> {
        match code {
            "usd" => Ok(Currency::Usd),
            "eur" => Ok(Currency::Eur),
            "rub" => Ok(Currency::Rub),
            other => Err(BudgetError::UnsupportedCurrency(other.to_string())),
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Currency::Usd => "usd",
            Currency::Eur => "eur",
            Currency::Rub => "rub",
        }
    }

    /// Ledger units per one unit of this currency.
    pub fn rate(self) -> f64 {
        match self {
            Currency::Usd => 60.0,
            Currency::Eur => 70.0,
            Currency::Rub => 1.0,
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Eur => "Euro",
            Currency::Rub => "руб",
        }
    }

    /// Converts a ledger amount into this currency, rounded to cents.
    pub fn convert(self, amount: f64) -> f64 {
        round_to_cents(amount / self.rate())
    }
}

impl FromStr for Currency {
    type Err = BudgetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s)
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Rounds to two decimals, halves away from zero.
pub fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_codes_resolve() {
        for currency in Currency::ALL {
            assert_eq!(Currency::from_code(currency.code()).unwrap(), currency);
        }
        assert_eq!("eur".parse::<Currency>().unwrap(), Currency::Eur);
    }

    #[test]
    fn lookup_is_case_sensitive() {
        assert!(matches!(
            Currency::from_code("USD"),
            Err(BudgetError::UnsupportedCurrency(code)) if code == "USD"
        ));
        assert!(Currency::from_code("gbp").is_err());
    }

    #[test]
    fn conversion_rounds_to_cents() {
        assert_eq!(Currency::Eur.convert(1000.0), 14.29);
        assert_eq!(Currency::Usd.convert(-400.0), -6.67);
        assert_eq!(Currency::Rub.convert(12.344), 12.34);
    }

    #[test]
    fn rounding_moves_halves_away_from_zero() {
        assert_eq!(round_to_cents(0.125), 0.13);
        assert_eq!(round_to_cents(-0.125), -0.13);
        assert_eq!(round_to_cents(2.5), 2.5);
    }
}
