use thiserror::Error;

use crate::domain::error::{InvalidOrderError, PayoutError, ValidationError};

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

/// Ledger persistence errors.
#[derive(Error, Debug)]
pub enum LedgerError {
    #[error("ledger file {path} is corrupt: {source}")]
    Corrupt {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("unsupported ledger version {found} (expected {expected})")]
    UnsupportedVersion { found: u32, expected: u32 },
}

/// Race lifecycle errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EventError {
    #[error("wagering is closed")]
    WageringClosed,

    #[error("results are locked")]
    ResultsLocked,

    #[error("no finishing order set")]
    OrderNotSet,
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    InvalidOrder(#[from] InvalidOrderError),

    #[error(transparent)]
    Payout(PayoutError),

    #[error(transparent)]
    Event(#[from] EventError),

    #[error(transparent)]
    Ledger(#[from] LedgerError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<PayoutError> for Error {
    fn from(error: PayoutError) -> Self {
        match error {
            PayoutError::InvalidOrder(order) => Self::InvalidOrder(order),
            other => Self::Payout(other),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
