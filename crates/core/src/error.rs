//! Error types for the core module.

/// Error type for the Core module
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Error when decoding or validating common inputs
    #[error("Encoding error: {0}")]
    CommonError(#[from] volund_common::error::Error),
    /// Error when validating or serializing a transaction
    #[error("Transaction error: {0}")]
    TransactionError(#[from] volund_tx::error::Error),
    /// Generic error with a message
    #[error("Error: {0}")]
    Generic(String),
}
