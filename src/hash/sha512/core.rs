use zeroize::{Zeroize, ZeroizeOnDrop};

use super::H512_INIT;
use super::computations::all_rounds;
use crate::utils::bytes::{load64_be_buf, store64_be};

/// Incremental SHA-512 state.
///
/// Input is buffered until a full 128-byte block is available. The message
/// length is tracked in bits as a 128-bit counter. The state is wiped on
/// drop.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Sha512 {
    hash: [u64; 8],
    block: [u8; 128],
    block_len: usize,
    bit_len: u128,
}

impl Default for Sha512 {
    fn default() -> Self {
        Self::new()
    }
}

impl Sha512 {
    /// Starts a new hash.
    pub fn new() -> Self {
        Self {
            hash: H512_INIT,
            block: [0; 128],
            block_len: 0,
            bit_len: 0,
        }
    }

    /// Compresses the buffered block into the hash state.
    fn compress(&mut self) {
        let mut w = [0u64; 16];
        load64_be_buf(&mut w, &self.block);
        all_rounds(&mut self.hash, &mut w);
        w.zeroize();
    }

    /// Feeds message bytes. Chunk boundaries do not affect the digest.
    pub fn update(&mut self, mut message: &[u8]) {
        while !message.is_empty() {
            let take = (128 - self.block_len).min(message.len());
            self.block[self.block_len..self.block_len + take].copy_from_slice(&message[..take]);
            self.block_len += take;
            message = &message[take..];

            if self.block_len == 128 {
                self.bit_len = self.bit_len.wrapping_add(1024);
                self.compress();
                self.block_len = 0;
            }
        }
    }

    /// Pads the message, returns the 64-byte digest and destroys the state.
    ///
    /// The length field is the 128-bit big-endian bit count, as required by
    /// FIPS 180-4.
    pub fn finalize(mut self) -> [u8; 64] {
        self.bit_len = self.bit_len.wrapping_add((self.block_len as u128) << 3);

        self.block[self.block_len..].fill(0);
        self.block[self.block_len] = 0x80;

        // No room left for the length field
        if self.block_len > 111 {
            self.compress();
            self.block.fill(0);
        }

        let bit_len = self.bit_len;
        self.block[112..].copy_from_slice(&bit_len.to_be_bytes());
        self.compress();

        let mut out = [0u8; 64];
        for (chunk, word) in out.chunks_exact_mut(8).zip(&self.hash) {
            store64_be(chunk, *word);
        }
        out
    }
}

/// Computes the SHA-512 digest of `message`.
pub fn sha512(message: &[u8]) -> [u8; 64] {
    let mut ctx = Sha512::new();
    ctx.update(message);
    ctx.finalize()
}
