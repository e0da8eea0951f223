//! Ethereum-style Keccak-256 for the volund toolkit.
//!
//! This crate implements the Keccak-256 hash function as used by Ethereum:
//! the 1088-bit-rate / 512-bit-capacity sponge over Keccak-f[1600] with the
//! original `0x01` domain suffix, not the NIST SHA3-256 `0x06` suffix. The
//! distinction is load-bearing: function selectors, transaction hashes, and
//! storage keys all depend on it.

/// The Keccak-f[1600] permutation.
mod permutation;

/// The streaming sponge hasher.
mod hasher;

pub use hasher::{keccak256, Keccak256, DIGEST_SIZE, RATE};
