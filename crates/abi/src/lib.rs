//! Contract ABI encoding for the volund toolkit.
//!
//! Contract call data is a 4-byte function selector followed by a sequence
//! of 32-byte big-endian words. This crate encodes the scalar word forms
//! (unsigned integers, addresses, booleans, raw words), the dynamic-bytes
//! form (a length word followed by zero-padded data), and the selectors
//! themselves, which are truncated Keccak-256 digests of the function
//! signature.

use tracing::trace;
use volund_common::{
    types::{Address, Selector, Word},
    utils::hex::encode_hex,
};
use volund_keccak::keccak256;

/// The size of a single ABI word in bytes.
pub const WORD_SIZE: usize = 32;

/// The size of a function selector in bytes.
pub const SELECTOR_SIZE: usize = 4;

/// Encodes an unsigned integer as a 32-byte ABI word.
///
/// The value is written big-endian into the last 8 bytes of the word,
/// right-justified and zero-padded on the left.
///
/// ```
/// use volund_abi::encode_uint;
///
/// let word = encode_uint(1);
/// assert_eq!(word[..31], [0u8; 31]);
/// assert_eq!(word[31], 0x01);
/// ```
pub fn encode_uint(value: u64) -> Word {
    let mut word = [0u8; WORD_SIZE];
    word[WORD_SIZE - 8..].copy_from_slice(&value.to_be_bytes());
    word
}

/// Encodes a 20-byte address as a 32-byte ABI word.
///
/// The address occupies the last 20 bytes of the word, zero-padded on the
/// left.
///
/// ```
/// use volund_abi::encode_address;
///
/// let word = encode_address(&[0x11; 20]);
/// assert_eq!(word[..12], [0u8; 12]);
/// assert_eq!(word[12..], [0x11; 20]);
/// ```
pub fn encode_address(address: &Address) -> Word {
    let mut word = [0u8; WORD_SIZE];
    word[WORD_SIZE - 20..].copy_from_slice(address);
    word
}

/// Encodes a boolean as a 32-byte ABI word: 31 zero bytes then `0x00` or
/// `0x01`.
pub fn encode_bool(value: bool) -> Word {
    let mut word = [0u8; WORD_SIZE];
    word[WORD_SIZE - 1] = value as u8;
    word
}

/// Encodes a raw 32-byte value as an ABI word. An identity copy, present
/// for symmetry with the other word forms.
pub fn encode_fixed_bytes(bytes: &Word) -> Word {
    *bytes
}

/// Encodes a dynamic byte string: a length word followed by the data,
/// zero-padded on the right up to the next 32-byte boundary.
///
/// The output is `32 + ceil(len / 32) * 32` bytes long; an empty input
/// produces just the zero length word.
///
/// ```
/// use volund_abi::{encode_bytes, encode_uint};
///
/// let encoded = encode_bytes(b"hi");
/// assert_eq!(encoded.len(), 64);
/// assert_eq!(encoded[..32], encode_uint(2));
/// assert_eq!(&encoded[32..34], b"hi");
/// assert_eq!(encoded[34..], [0u8; 30]);
/// ```
pub fn encode_bytes(data: &[u8]) -> Vec<u8> {
    let padded = data.len().div_ceil(WORD_SIZE) * WORD_SIZE;

    let mut out = Vec::with_capacity(WORD_SIZE + padded);
    out.extend_from_slice(&encode_uint(data.len() as u64));
    out.extend_from_slice(data);
    out.resize(WORD_SIZE + padded, 0);
    out
}

/// Computes the 4-byte function selector for a Solidity function signature.
///
/// The selector is the first 4 bytes of the Keccak-256 digest of the
/// signature's UTF-8 bytes.
///
/// ```
/// use volund_abi::function_selector;
///
/// let selector = function_selector("transfer(address,uint256)");
/// assert_eq!(selector, [0xa9, 0x05, 0x9c, 0xbb]);
/// ```
pub fn function_selector(signature: &str) -> Selector {
    let digest = keccak256(signature.as_bytes());

    let mut selector = [0u8; SELECTOR_SIZE];
    selector.copy_from_slice(&digest[..SELECTOR_SIZE]);

    trace!("computed selector 0x{} for signature '{}'", encode_hex(&selector), signature);
    selector
}
