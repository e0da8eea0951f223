//! Legacy (pre-EIP-1559) transaction modeling for the volund toolkit.
//!
//! A [`LegacyTransaction`] holds the fields of an unsigned legacy
//! transaction and serializes its EIP-155 *signing preimage*: the 9-item
//! RLP list of nonce, gas price, gas limit, recipient, value, call data,
//! chain id, and two zero placeholders standing in for the signature
//! components `r` and `s`. This is the byte string a signer hashes; it is
//! not a broadcastable signed transaction.

/// Error types for the tx module.
pub mod error;

use derive_builder::Builder;
use error::Error;
use tracing::debug;
use volund_common::types::Address;

/// An unsigned legacy Ethereum transaction.
///
/// All numeric fields are 64-bit unsigned integers; call data is borrowed
/// from the caller for the lifetime of the value. A transaction without a
/// recipient is a contract creation.
///
/// ```
/// use volund_tx::LegacyTransactionBuilder;
///
/// let tx = LegacyTransactionBuilder::default()
///     .nonce(1)
///     .gas_price(20_000_000_000)
///     .gas_limit(21_000)
///     .chain_id(1)
///     .build()
///     .expect("should build transaction");
///
/// assert!(tx.validate().is_ok());
/// ```
#[derive(Debug, Clone, Default, Builder)]
#[builder(default)]
pub struct LegacyTransaction<'a> {
    /// Transaction count of the sender address.
    pub nonce: u64,

    /// Price per gas unit, in wei.
    pub gas_price: u64,

    /// Maximum gas allowed for this transaction.
    pub gas_limit: u64,

    /// Amount transferred, in wei.
    pub value: u64,

    /// EIP-155 chain id. Zero means "unset" and fails validation.
    pub chain_id: u64,

    /// Recipient address; `None` is a contract creation.
    pub to: Option<Address>,

    /// Call data. Borrowed; the caller keeps ownership.
    pub data: &'a [u8],
}

impl<'a> LegacyTransaction<'a> {
    /// Checks the minimal invariants that make the transaction usable.
    ///
    /// Fails if the chain id or the gas limit is zero. An absent recipient
    /// is explicitly valid (contract creation). No cryptographic or
    /// RLP-level checks are performed.
    pub fn validate(&self) -> Result<(), Error> {
        if self.chain_id == 0 {
            return Err(Error::MissingChainId);
        }

        if self.gas_limit == 0 {
            return Err(Error::ZeroGasLimit);
        }

        Ok(())
    }

    /// The exact size in bytes of the RLP-encoded unsigned preimage.
    ///
    /// Validates first, then sums the size-only RLP lengths of the 9
    /// fields plus the outer list header. Repeated calls return identical
    /// results, so callers can size a single allocation before encoding.
    pub fn rlp_size(&self) -> Result<usize, Error> {
        self.validate()?;

        let payload = self.payload_len();
        Ok(volund_rlp::list_header_len(payload) + payload)
    }

    /// Encodes the unsigned EIP-155 signing preimage.
    ///
    /// ```
    /// use volund_tx::LegacyTransactionBuilder;
    ///
    /// let tx = LegacyTransactionBuilder::default()
    ///     .gas_limit(21_000)
    ///     .chain_id(1)
    ///     .build()
    ///     .expect("should build transaction");
    ///
    /// let encoded = tx.rlp_encode().expect("should encode transaction");
    /// assert_eq!(encoded.len(), tx.rlp_size().expect("should size transaction"));
    /// ```
    pub fn rlp_encode(&self) -> Result<Vec<u8>, Error> {
        let size = self.rlp_size()?;

        let mut out = Vec::with_capacity(size);
        volund_rlp::encode_list_header(self.payload_len(), &mut out);
        self.encode_payload(&mut out);
        debug_assert_eq!(out.len(), size);

        debug!("encoded unsigned legacy tx preimage ({} bytes)", out.len());
        Ok(out)
    }

    /// Encodes the unsigned preimage into a caller-provided buffer and
    /// returns the number of bytes written.
    ///
    /// The required size is computed first; if `out` cannot hold it, the
    /// call fails with [`Error::BufferTooSmall`] without writing anything.
    pub fn rlp_encode_into(&self, out: &mut [u8]) -> Result<usize, Error> {
        let size = self.rlp_size()?;
        if out.len() < size {
            return Err(Error::BufferTooSmall { needed: size, available: out.len() });
        }

        let encoded = self.rlp_encode()?;
        out[..size].copy_from_slice(&encoded);
        Ok(size)
    }

    /// The total encoded length of the 9 list items, excluding the outer
    /// list header.
    fn payload_len(&self) -> usize {
        let to_len = match &self.to {
            Some(address) => volund_rlp::bytes_len(address),
            None => volund_rlp::bytes_len(&[]),
        };

        volund_rlp::uint_len(self.nonce) +
            volund_rlp::uint_len(self.gas_price) +
            volund_rlp::uint_len(self.gas_limit) +
            to_len +
            volund_rlp::uint_len(self.value) +
            volund_rlp::bytes_len(self.data) +
            volund_rlp::uint_len(self.chain_id) +
            volund_rlp::uint_len(0) +
            volund_rlp::uint_len(0)
    }

    /// Appends the 9 list items in preimage order.
    ///
    /// The order is mandatory: nonce, gas price, gas limit, recipient (the
    /// empty string when absent, never omitted), value, data, chain id,
    /// and the two zero placeholders for `r` and `s`.
    fn encode_payload(&self, out: &mut Vec<u8>) {
        volund_rlp::encode_uint(self.nonce, out);
        volund_rlp::encode_uint(self.gas_price, out);
        volund_rlp::encode_uint(self.gas_limit, out);

        match &self.to {
            Some(address) => volund_rlp::encode_bytes(address, out),
            None => volund_rlp::encode_bytes(&[], out),
        }

        volund_rlp::encode_uint(self.value, out);
        volund_rlp::encode_bytes(self.data, out);
        volund_rlp::encode_uint(self.chain_id, out);
        volund_rlp::encode_uint(0, out);
        volund_rlp::encode_uint(0, out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;

    fn demo_address() -> Address {
        let mut address = [0u8; 20];
        for (i, byte) in address.iter_mut().enumerate() {
            *byte = 0x11 + i as u8;
        }
        address
    }

    #[test]
    fn test_default_is_invalid() {
        let tx = LegacyTransaction::default();
        assert!(matches!(tx.validate(), Err(Error::MissingChainId)));
    }

    #[test]
    fn test_validate_requires_chain_id_and_gas_limit() {
        let mut tx = LegacyTransaction { chain_id: 1, ..Default::default() };
        assert!(matches!(tx.validate(), Err(Error::ZeroGasLimit)));

        tx.gas_limit = 21_000;
        assert!(tx.validate().is_ok());
    }

    #[test]
    fn test_contract_creation_is_valid() {
        let tx = LegacyTransaction {
            gas_limit: 100_000,
            chain_id: 1,
            to: None,
            ..Default::default()
        };

        assert!(tx.validate().is_ok());
    }

    #[test]
    fn test_rlp_size_fails_on_invalid_tx() {
        let tx = LegacyTransaction::default();
        assert!(tx.rlp_size().is_err());
        assert!(tx.rlp_encode().is_err());
    }

    #[test]
    fn test_preimage_known_vector() {
        // 1 ETH to 0x1112...2324 at 20 gwei, chain id 1
        let tx = LegacyTransaction {
            nonce: 1,
            gas_price: 20_000_000_000,
            gas_limit: 21_000,
            value: 1_000_000_000_000_000_000,
            chain_id: 1,
            to: Some(demo_address()),
            data: &[],
        };

        let encoded = tx.rlp_encode().expect("should encode transaction");
        let expected = hex!(
            "ec"
            "01"
            "8504a817c800"
            "825208"
            "941112131415161718191a1b1c1d1e1f2021222324"
            "880de0b6b3a7640000"
            "80"
            "01"
            "8080"
        );
        assert_eq!(encoded, expected);
    }

    #[test]
    fn test_preimage_contract_creation_encodes_empty_recipient() {
        let tx = LegacyTransaction {
            gas_limit: 100_000,
            chain_id: 1,
            to: None,
            data: &[0x60, 0x80, 0x60, 0x40],
            ..Default::default()
        };

        let encoded = tx.rlp_encode().expect("should encode transaction");

        // nonce, gas_price, value all encode as 0x80, and so does the
        // absent recipient: the slot is present, not omitted
        let expected = hex!(
            "d0"
            "80"
            "80"
            "830186a0"
            "80"
            "80"
            "8460806040"
            "01"
            "8080"
        );
        assert_eq!(encoded, expected);
        assert_eq!(encoded[7], 0x80);
    }

    #[test]
    fn test_rlp_size_matches_encoding() {
        let data = [0xabu8; 100];
        let tx = LegacyTransaction {
            nonce: 7,
            gas_price: 1_000,
            gas_limit: 60_000,
            value: 42,
            chain_id: 137,
            to: Some(demo_address()),
            data: &data,
        };

        let size = tx.rlp_size().expect("should size transaction");
        let encoded = tx.rlp_encode().expect("should encode transaction");
        assert_eq!(size, encoded.len());

        // repeated dry runs agree
        assert_eq!(tx.rlp_size().expect("should size transaction"), size);
    }

    #[test]
    fn test_long_form_list_header() {
        // 100 bytes of calldata pushes the payload past the 55-byte
        // short-form threshold
        let data = [0x01u8; 100];
        let tx = LegacyTransaction {
            gas_limit: 21_000,
            chain_id: 1,
            to: Some(demo_address()),
            data: &data,
            ..Default::default()
        };

        let encoded = tx.rlp_encode().expect("should encode transaction");
        assert_eq!(encoded[0], 0xf8);
    }

    #[test]
    fn test_encode_into_exact_buffer() {
        let tx = LegacyTransaction {
            nonce: 1,
            gas_price: 20_000_000_000,
            gas_limit: 21_000,
            value: 1_000_000_000_000_000_000,
            chain_id: 1,
            to: Some(demo_address()),
            data: &[],
        };

        let size = tx.rlp_size().expect("should size transaction");
        let mut buffer = vec![0u8; size];
        let written = tx.rlp_encode_into(&mut buffer).expect("should encode transaction");

        assert_eq!(written, size);
        assert_eq!(buffer, tx.rlp_encode().expect("should encode transaction"));
    }

    #[test]
    fn test_encode_into_short_buffer_fails_cleanly() {
        let tx = LegacyTransaction {
            gas_limit: 21_000,
            chain_id: 1,
            ..Default::default()
        };

        let size = tx.rlp_size().expect("should size transaction");
        let mut buffer = vec![0xffu8; size - 1];
        let result = tx.rlp_encode_into(&mut buffer);

        assert!(matches!(result, Err(Error::BufferTooSmall { needed, available })
            if needed == size && available == size - 1));
        // nothing was written
        assert!(buffer.iter().all(|byte| *byte == 0xff));
    }

    #[test]
    fn test_builder_defaults_match_init() {
        let tx = LegacyTransactionBuilder::default().build().expect("should build transaction");

        assert_eq!(tx.nonce, 0);
        assert_eq!(tx.gas_price, 0);
        assert_eq!(tx.gas_limit, 0);
        assert_eq!(tx.value, 0);
        assert_eq!(tx.chain_id, 0);
        assert!(tx.to.is_none());
        assert!(tx.data.is_empty());
    }

    #[test]
    fn test_builder_sets_fields() {
        let data = [0xde, 0xad, 0xbe];
        let tx = LegacyTransactionBuilder::default()
            .nonce(3)
            .gas_price(100)
            .gas_limit(21_000)
            .chain_id(5)
            .to(Some(demo_address()))
            .data(&data)
            .build()
            .expect("should build transaction");

        assert!(tx.validate().is_ok());
        assert_eq!(tx.nonce, 3);
        assert_eq!(tx.to, Some(demo_address()));
        assert_eq!(tx.data, &data);
    }
}
