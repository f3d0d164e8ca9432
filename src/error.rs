//! Error types for insurapro.

use std::io;
use thiserror::Error;

/// Result type alias for insurapro operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in insurapro operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Storage I/O error.
    #[error("Storage error: {0}")]
    Storage(#[from] io::Error),

    /// JSON serialization error.
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// The backup exists but does not hold a valid customer collection.
    #[error("Corrupt data: {0}")]
    CorruptData(String),

    /// No customer matched the given id or query.
    #[error("Customer not found: {0}")]
    CustomerNotFound(String),

    /// A query matched more than one customer.
    #[error(
        "Query '{query}' matches several customers (IDs: {}); pick one with #ID",
        .matches.join(", ")
    )]
    AmbiguousQuery {
        /// The query as typed.
        query: String,
        /// Ids of every matching customer, in store order.
        matches: Vec<String>,
    },

    /// Every id up to the given maximum has been issued.
    #[error("No customer ids left: the largest id {0} has already been issued")]
    IdsExhausted(u64),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}
