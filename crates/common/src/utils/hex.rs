use crate::{error::Error, types::Address};
use std::fmt::Write;

/// Encodes a slice of bytes into a lowercase hex string.
///
/// ```
/// use volund_common::utils::hex::encode_hex;
///
/// let bytes = vec![72, 101, 108, 108, 111, 32, 87, 111, 114, 108, 100];
/// let result = encode_hex(&bytes);
/// assert_eq!(result, "48656c6c6f20576f726c64");
/// ```
pub fn encode_hex(bytes: &[u8]) -> String {
    bytes.iter().fold(String::with_capacity(bytes.len() * 2), |mut acc, b| {
        write!(acc, "{b:02x}").expect("unable to write");
        acc
    })
}

/// Decodes a hex string into a vector of bytes.
///
/// An optional `0x`/`0X` prefix is stripped, and digits may be in either
/// case. The string must contain an even number of valid hex digits; odd
/// lengths and non-hex characters are rejected with
/// [`Error::InvalidHex`] rather than decoded best-effort.
///
/// ```
/// use volund_common::utils::hex::decode_hex;
///
/// let hex = "0x48656c6c6f20576f726c64"; // "Hello World" in hex
/// let result = decode_hex(hex).expect("should decode hex");
/// assert_eq!(result, vec![72, 101, 108, 108, 111, 32, 87, 111, 114, 108, 100]);
/// ```
pub fn decode_hex(s: &str) -> Result<Vec<u8>, Error> {
    // normalize
    let s = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")).unwrap_or(s);

    if s.is_empty() {
        return Ok(vec![]);
    }

    if !s.is_ascii() {
        return Err(Error::InvalidHex(format!("non-hex character in '{s}'")));
    }

    if s.len() % 2 != 0 {
        return Err(Error::InvalidHex(format!("odd number of digits in '{s}'")));
    }

    (0..s.len())
        .step_by(2)
        .map(|i| {
            u8::from_str_radix(&s[i..i + 2], 16)
                .map_err(|_| Error::InvalidHex(format!("non-hex character in '{s}'")))
        })
        .collect()
}

/// Decodes a hex string into a 20-byte address.
///
/// ```
/// use volund_common::utils::hex::decode_address;
///
/// let address = decode_address("0x00112233445566778899aAbBcCdDeEfF00112233")
///     .expect("should decode address");
/// assert_eq!(address[0], 0x00);
/// assert_eq!(address[19], 0x33);
/// ```
pub fn decode_address(s: &str) -> Result<Address, Error> {
    let bytes = decode_hex(s)?;
    let actual = bytes.len();
    bytes.try_into().map_err(|_| Error::InvalidLength { expected: 20, actual })
}
