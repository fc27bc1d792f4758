//! Error types for the isnad ledger.

use thiserror::Error;

/// Errors that can occur during ledger operations
#[derive(Debug, Error)]
pub enum ChainError {
    #[error("Ledger I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Ledger serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
