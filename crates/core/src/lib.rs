//! The Core module serves as the central integration point for volund's
//! encoding primitives, providing offline construction of Ethereum
//! transaction payloads and contract call data.
//!
//! This module re-exports the public interfaces of all the encoder crates,
//! making it easier to use volund's capabilities in other projects.

/// Error types for the core module
pub mod error;

// Re-export all encoder modules
pub use volund_abi;
pub use volund_common;
pub use volund_keccak;
pub use volund_rlp;
pub use volund_tx;
