//! Typed errors raised around the mining core

use thiserror::Error;

/// Result type for operations that fail with a [`MiningError`]
pub type MiningResult<T> = std::result::Result<T, MiningError>;

/// Mining error types
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MiningError {
    /// A threshold argument outside `[0, 1]` (or not a number)
    #[error("{name} has to be between 0 and 1. input value: {value}")]
    InvalidThreshold { name: &'static str, value: f64 },

    /// No transactions to mine
    #[error("dataset contains no transactions")]
    EmptyDataset,

    /// The frequent itemsets are not downward closed
    #[error("internal invariant violated: {0}")]
    InvariantViolation(String),
}
