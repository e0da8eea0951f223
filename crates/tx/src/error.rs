//! Errors for transaction validation and serialization.

/// Error type for legacy transaction operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Generic error with a message.
    #[error("Error: {0}")]
    Generic(String),
    /// The chain id is zero; EIP-155 preimages bind to a specific chain.
    #[error("chain id must be non-zero")]
    MissingChainId,
    /// A zero gas limit is not meaningful.
    #[error("gas limit must be non-zero")]
    ZeroGasLimit,
    /// The caller's output buffer cannot hold the encoding. The required
    /// size is computed before any byte is written.
    #[error("output buffer too small: needed {needed} bytes, got {available}")]
    BufferTooSmall {
        /// The exact encoded size of the transaction.
        needed: usize,
        /// The capacity the caller provided.
        available: usize,
    },
}
