//! Streaming sponge hasher for Keccak-256.

use crate::permutation::keccak_f;

/// The size of a Keccak-256 digest in bytes.
pub const DIGEST_SIZE: usize = 32;

/// The sponge rate in bytes: 1088 bits absorbed per block, leaving a
/// 512-bit capacity. This is the Keccak-256/SHA3-256 parameterization.
pub const RATE: usize = 136;

/// The [`Keccak256`] struct is a streaming Ethereum-style Keccak-256 hasher.
///
/// Input is buffered until a full rate-sized block is available, at which
/// point the block is XORed into the state as little-endian 64-bit lanes
/// and one permutation is run. [`Keccak256::finalize`] consumes the hasher,
/// so absorbing into a finalized state is rejected at compile time rather
/// than silently ignored.
///
/// ```
/// use volund_keccak::Keccak256;
///
/// let mut hasher = Keccak256::new();
/// hasher.update(b"transfer(");
/// hasher.update(b"address,uint256)");
/// let digest = hasher.finalize();
/// assert_eq!(digest[..4], [0xa9, 0x05, 0x9c, 0xbb]);
/// ```
#[derive(Debug, Clone)]
pub struct Keccak256 {
    /// The 1600-bit permutation state, viewed as 25 64-bit lanes.
    state: [u64; 25],
    /// Byte-oriented absorption buffer, sized to the sponge rate.
    buffer: [u8; RATE],
    /// Number of pending bytes currently in the buffer.
    buffer_len: usize,
}

impl Default for Keccak256 {
    fn default() -> Self {
        Self::new()
    }
}

impl Keccak256 {
    /// Creates a new hasher with an all-zero state and an empty buffer.
    pub fn new() -> Keccak256 {
        Keccak256 { state: [0u64; 25], buffer: [0u8; RATE], buffer_len: 0 }
    }

    /// Absorbs `data` into the sponge.
    ///
    /// May be called any number of times with slices of any length; blocks
    /// are absorbed as soon as the internal buffer fills to the rate
    /// boundary.
    pub fn update(&mut self, mut data: &[u8]) {
        while !data.is_empty() {
            let space = RATE - self.buffer_len;
            let take = data.len().min(space);

            self.buffer[self.buffer_len..self.buffer_len + take].copy_from_slice(&data[..take]);
            self.buffer_len += take;
            data = &data[take..];

            if self.buffer_len == RATE {
                self.absorb_block();
            }
        }
    }

    /// Finalizes the hash and returns the 32-byte digest.
    ///
    /// Applies the Keccak padding used by Ethereum: a single `0x01` domain
    /// suffix, zero fill to the rate boundary, and `0x80` ORed into the
    /// final byte of the block. NIST SHA3-256 differs only in using `0x06`
    /// here, which is why the two functions disagree on every input.
    pub fn finalize(mut self) -> [u8; DIGEST_SIZE] {
        // buffer_len < RATE always holds here: a full buffer is absorbed
        // by update() before it returns.
        self.buffer[self.buffer_len] = 0x01;
        for byte in &mut self.buffer[self.buffer_len + 1..] {
            *byte = 0;
        }
        self.buffer[RATE - 1] |= 0x80;

        self.absorb_block();

        // squeeze: the first 32 bytes of the state, lanes 0-3 little-endian
        let mut digest = [0u8; DIGEST_SIZE];
        for (chunk, lane) in digest.chunks_exact_mut(8).zip(self.state.iter()) {
            chunk.copy_from_slice(&lane.to_le_bytes());
        }
        digest
    }

    /// XORs the buffered block into the state lane-by-lane and permutes.
    fn absorb_block(&mut self) {
        for (lane, chunk) in self.state.iter_mut().zip(self.buffer.chunks_exact(8)) {
            *lane ^= u64::from_le_bytes(chunk.try_into().expect("chunk is 8 bytes"));
        }
        keccak_f(&mut self.state);
        self.buffer_len = 0;
    }
}

/// Convenience one-shot Keccak-256 of a single buffer.
///
/// ```
/// use volund_keccak::keccak256;
///
/// let digest = keccak256(b"");
/// assert_eq!(digest[0], 0xc5);
/// assert_eq!(digest[31], 0x70);
/// ```
pub fn keccak256(data: &[u8]) -> [u8; DIGEST_SIZE] {
    let mut hasher = Keccak256::new();
    hasher.update(data);
    hasher.finalize()
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;

    #[test]
    fn test_keccak256_empty() {
        assert_eq!(
            keccak256(b""),
            hex!("c5d2460186f7233c927e7db2dcc703c0e500b653ca82273b7bfad8045d85a470")
        );
    }

    #[test]
    fn test_keccak256_abc() {
        assert_eq!(
            keccak256(b"abc"),
            hex!("4e03657aea45a94fc7d47ba826c8d667c0d1e6e33a64a036ec44f58fa12d6c45")
        );
    }

    #[test]
    fn test_keccak256_fox() {
        assert_eq!(
            keccak256(b"The quick brown fox jumps over the lazy dog"),
            hex!("4d741b6f1eb29cb2a9b9911c82f56fa8d73b04959d3d9d222895df6c0b28aa15")
        );
    }

    #[test]
    fn test_streaming_matches_one_shot() {
        let data = b"The quick brown fox jumps over the lazy dog";

        let mut hasher = Keccak256::new();
        hasher.update(&data[..10]);
        hasher.update(&data[10..11]);
        hasher.update(&data[11..]);

        assert_eq!(hasher.finalize(), keccak256(data));
    }

    #[test]
    fn test_streaming_across_rate_boundary() {
        // 500 bytes spans three 136-byte blocks plus a partial tail
        let data = vec![0xa5u8; 500];

        let mut hasher = Keccak256::new();
        for chunk in data.chunks(7) {
            hasher.update(chunk);
        }

        assert_eq!(hasher.finalize(), keccak256(&data));
    }

    #[test]
    fn test_exact_rate_block() {
        // an input of exactly one rate block still gets a full padding block
        let data = vec![0x11u8; RATE];
        let one_shot = keccak256(&data);

        let mut hasher = Keccak256::new();
        hasher.update(&data);
        assert_eq!(hasher.finalize(), one_shot);

        // and differs from the digest of the empty input
        assert_ne!(one_shot, keccak256(b""));
    }

    #[test]
    fn test_update_empty_slice_is_noop() {
        let mut hasher = Keccak256::new();
        hasher.update(b"");
        hasher.update(b"abc");
        hasher.update(b"");

        assert_eq!(hasher.finalize(), keccak256(b"abc"));
    }
}
