//! Status messages built on top of a ledger's remaining-today value.

pub mod calories;
pub mod cash;

pub use calories::{CaloriesReporter, CaloriesStatus};
pub use cash::{CashReporter, CashStatus};
