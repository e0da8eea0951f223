//! Errors produced by the shared utilities.

/// Generic error type for volund common operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Generic error with a message.
    #[error("Error: {0}")]
    Generic(String),
    /// Malformed hex text: odd length or a non-hex character.
    #[error("invalid hex: {0}")]
    InvalidHex(String),
    /// A fixed-size input had the wrong length.
    #[error("invalid length: expected {expected} bytes, got {actual}")]
    InvalidLength {
        /// The number of bytes the operation requires.
        expected: usize,
        /// The number of bytes actually provided.
        actual: usize,
    },
}
