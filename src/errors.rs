use thiserror::Error;

/// Failures raised while building entries, reading config, or reporting.
#[derive(Debug, Error)]
pub enum BudgetError {
    #[error("Invalid date `{input}`, expected DD.MM.YYYY")]
    ParseDate {
        input: String,
        #[source]
        source: Option<chrono::ParseError>,
    },
    #[error("Unsupported currency: {0}")]
    UnsupportedCurrency(String),
    #[error("Invalid window: {0}")]
    InvalidWindow(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

pub type BudgetResult<T> = Result<T, BudgetError>;
