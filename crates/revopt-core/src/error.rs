//! Unified error type for the revopt crates.
//!
//! Loader, normalizer, aggregator and simulator all return [`RevoptResult`]
//! so the CLI can report every failure through a single path.
//!
//! # Example
//!
//! ```ignore
//! use revopt_core::{RevoptError, RevoptResult};
//!
//! fn recommended(rows: &[PriceComparisonRow]) -> RevoptResult<Price> {
//!     rows.first()
//!         .map(|row| row.recommended_price)
//!         .ok_or_else(|| RevoptError::Validation("empty comparison table".into()))
//! }
//! ```

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RevoptError {
    /// I/O errors (opening the dataset, writing exports)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A field could not be parsed (price, timestamp, CSV row)
    #[error("Parse error: {0}")]
    Parse(String),

    /// Data validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Invalid inputs to the demand simulator
    #[error("Simulation error: {0}")]
    Simulation(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// The selected room/month pair has no data behind it
    #[error("no recommended price for room '{room}' in {month}")]
    MissingSelection { room: String, month: String },

    /// Generic errors (for wrapping external errors)
    #[error("{0}")]
    Other(String),
}

pub type RevoptResult<T> = Result<T, RevoptError>;

impl From<anyhow::Error> for RevoptError {
    fn from(err: anyhow::Error) -> Self {
        RevoptError::Other(format!("{err:#}"))
    }
}

impl From<String> for RevoptError {
    fn from(s: String) -> Self {
        RevoptError::Other(s)
    }
}

impl From<&str> for RevoptError {
    fn from(s: &str) -> Self {
        RevoptError::Other(s.to_string())
    }
}

impl From<serde_json::Error> for RevoptError {
    fn from(err: serde_json::Error) -> Self {
        RevoptError::Parse(err.to_string())
    }
}
