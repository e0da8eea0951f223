//! Fixed-size byte types shared by the encoding crates.

/// A 20-byte Ethereum account address.
pub type Address = [u8; 20];

/// A single 32-byte big-endian ABI word.
pub type Word = [u8; 32];

/// A 4-byte function selector, the truncated Keccak-256 digest of a
/// function signature.
pub type Selector = [u8; 4];

/// A 32-byte Keccak-256 digest.
pub type Digest = [u8; 32];

/// The size of an [`Address`] in bytes.
pub const ADDRESS_SIZE: usize = 20;
