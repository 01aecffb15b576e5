use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::utils::bytes::{gap, load64_le_buf};

/// BLAKE2b initialization vector (the SHA-512 IV).
pub(crate) const IV: [u64; 8] = [
    0x6a09e667f3bcc908,
    0xbb67ae8584caa73b,
    0x3c6ef372fe94f82b,
    0xa54ff53a5f1d36f1,
    0x510e527fade682d1,
    0x9b05688c2b3e6c1f,
    0x1f83d9abfb41bd6b,
    0x5be0cd19137e2179,
];

/// Message word schedule, one row per round.
///
/// Rows 10 and 11 repeat rows 0 and 1.
const SIGMA: [[usize; 16]; 12] = [
    [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15],
    [14, 10, 4, 8, 9, 15, 13, 6, 1, 12, 0, 2, 11, 7, 5, 3],
    [11, 8, 12, 0, 5, 2, 15, 13, 10, 14, 3, 6, 7, 1, 9, 4],
    [7, 9, 3, 1, 13, 12, 11, 14, 2, 6, 5, 10, 4, 0, 15, 8],
    [9, 0, 5, 7, 2, 4, 10, 15, 14, 1, 11, 12, 6, 8, 3, 13],
    [2, 12, 6, 10, 0, 11, 8, 3, 4, 13, 7, 5, 15, 14, 1, 9],
    [12, 5, 1, 15, 14, 13, 4, 10, 0, 7, 6, 3, 9, 2, 8, 11],
    [13, 11, 7, 14, 12, 1, 3, 9, 5, 0, 15, 4, 8, 6, 2, 10],
    [6, 15, 14, 9, 11, 3, 0, 8, 12, 2, 13, 7, 1, 4, 10, 5],
    [10, 2, 8, 4, 7, 6, 1, 5, 15, 11, 9, 14, 3, 12, 13, 0],
    [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15],
    [14, 10, 4, 8, 9, 15, 13, 6, 1, 12, 0, 2, 11, 7, 5, 3],
];

/// BLAKE2b mixing function G.
#[inline(always)]
fn g(v: &mut [u64; 16], a: usize, b: usize, c: usize, d: usize, x: u64, y: u64) {
    v[a] = v[a].wrapping_add(v[b]).wrapping_add(x);
    v[d] = (v[d] ^ v[a]).rotate_right(32);
    v[c] = v[c].wrapping_add(v[d]);
    v[b] = (v[b] ^ v[c]).rotate_right(24);
    v[a] = v[a].wrapping_add(v[b]).wrapping_add(y);
    v[d] = (v[d] ^ v[a]).rotate_right(16);
    v[c] = v[c].wrapping_add(v[d]);
    v[b] = (v[b] ^ v[c]).rotate_right(63);
}

/// Incremental BLAKE2b state (RFC 7693).
///
/// Input is buffered as 16 little-endian words. A full buffer is only
/// compressed once more input arrives, because the last block must be
/// compressed with the finalization flag set.
///
/// The state is wiped on drop.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Blake2b {
    hash: [u64; 8],
    input_offset: [u64; 2],
    input: [u64; 16],
    input_idx: usize,
    hash_size: usize,
}

impl Blake2b {
    /// Starts an unkeyed hash producing `hash_size` bytes.
    ///
    /// # Panics
    ///
    /// Panics unless `1 <= hash_size <= 64`.
    pub fn new(hash_size: usize) -> Self {
        Self::new_keyed(hash_size, &[])
    }

    /// Starts a keyed hash (BLAKE2b used as a MAC or PRF).
    ///
    /// The key is absorbed as a zero-padded first block.
    ///
    /// # Panics
    ///
    /// Panics unless `1 <= hash_size <= 64` and `key.len() <= 64`.
    pub fn new_keyed(hash_size: usize, key: &[u8]) -> Self {
        assert!(
            (1..=64).contains(&hash_size),
            "BLAKE2b output must be 1 to 64 bytes"
        );
        assert!(key.len() <= 64, "BLAKE2b key must be at most 64 bytes");

        let mut hash = IV;
        hash[0] ^= 0x0101_0000 ^ ((key.len() as u64) << 8) ^ hash_size as u64;

        let mut ctx = Self {
            hash,
            input_offset: [0; 2],
            input: [0; 16],
            input_idx: 0,
            hash_size,
        };

        if !key.is_empty() {
            let mut key_block = zeroize::Zeroizing::new([0u8; 128]);
            key_block[..key.len()].copy_from_slice(key);
            load64_le_buf(&mut ctx.input, &key_block[..]);
            ctx.input_idx = 128;
        }
        ctx
    }

    /// Output length in bytes.
    pub fn hash_size(&self) -> usize {
        self.hash_size
    }

    fn compress(&mut self, is_last_block: bool) {
        // Byte counter, 128 bits
        let consumed = self.input_idx as u64;
        self.input_offset[0] = self.input_offset[0].wrapping_add(consumed);
        if self.input_offset[0] < consumed {
            self.input_offset[1] = self.input_offset[1].wrapping_add(1);
        }

        let mut v = [0u64; 16];
        v[..8].copy_from_slice(&self.hash);
        v[8..].copy_from_slice(&IV);
        v[12] ^= self.input_offset[0];
        v[13] ^= self.input_offset[1];
        v[14] ^= 0u64.wrapping_sub(is_last_block as u64);

        let m = &self.input;
        for s in &SIGMA {
            g(&mut v, 0, 4, 8, 12, m[s[0]], m[s[1]]);
            g(&mut v, 1, 5, 9, 13, m[s[2]], m[s[3]]);
            g(&mut v, 2, 6, 10, 14, m[s[4]], m[s[5]]);
            g(&mut v, 3, 7, 11, 15, m[s[6]], m[s[7]]);
            g(&mut v, 0, 5, 10, 15, m[s[8]], m[s[9]]);
            g(&mut v, 1, 6, 11, 12, m[s[10]], m[s[11]]);
            g(&mut v, 2, 7, 8, 13, m[s[12]], m[s[13]]);
            g(&mut v, 3, 4, 9, 14, m[s[14]], m[s[15]]);
        }

        for i in 0..8 {
            self.hash[i] ^= v[i] ^ v[i + 8];
        }
        v.zeroize();
    }

    /// ORs one byte into the input buffer at the current position.
    #[inline(always)]
    fn push_byte(&mut self, byte: u8) {
        let word = self.input_idx >> 3;
        let shift = (self.input_idx & 7) << 3;
        self.input[word] |= (byte as u64) << shift;
        self.input_idx += 1;
    }

    /// Feeds message bytes. Chunk boundaries do not affect the digest.
    pub fn update(&mut self, mut message: &[u8]) {
        if message.is_empty() {
            return;
        }

        // Align with word boundaries
        if self.input_idx & 7 != 0 {
            let nb_bytes = gap(self.input_idx, 8).min(message.len());
            for &byte in &message[..nb_bytes] {
                self.push_byte(byte);
            }
            message = &message[nb_bytes..];
        }

        // Align with block boundaries
        if self.input_idx & 127 != 0 {
            let nb_words = gap(self.input_idx, 128).min(message.len()) >> 3;
            let start = self.input_idx >> 3;
            load64_le_buf(&mut self.input[start..start + nb_words], message);
            self.input_idx += nb_words << 3;
            message = &message[nb_words << 3..];
        }

        // Whole blocks, keeping the latest one buffered
        let mut blocks = message.chunks_exact(128);
        for block in &mut blocks {
            if self.input_idx == 128 {
                self.compress(false);
            }
            load64_le_buf(&mut self.input, block);
            self.input_idx = 128;
        }

        let rest = blocks.remainder();
        if !rest.is_empty() {
            if self.input_idx == 128 {
                self.compress(false);
                self.input_idx = 0;
            }
            if self.input_idx == 0 {
                self.input = [0; 16];
            }

            let nb_words = rest.len() >> 3;
            let start = self.input_idx >> 3;
            load64_le_buf(&mut self.input[start..start + nb_words], rest);
            self.input_idx += nb_words << 3;

            for &byte in &rest[nb_words << 3..] {
                self.push_byte(byte);
            }
        }
    }

    /// Writes the digest into `hash` and destroys the state.
    ///
    /// # Panics
    ///
    /// Panics if `hash.len()` differs from the configured output length.
    pub fn finalize(mut self, hash: &mut [u8]) {
        assert_eq!(hash.len(), self.hash_size, "wrong BLAKE2b output length");
        self.compress(true);
        for (i, byte) in hash.iter_mut().enumerate() {
            *byte = (self.hash[i >> 3] >> (8 * (i & 7))) as u8;
        }
    }
}

/// Hashes `message` into `hash`, whose length (1 to 64) sets the digest size.
pub fn blake2b(hash: &mut [u8], message: &[u8]) {
    blake2b_keyed(hash, &[], message);
}

/// Keyed BLAKE2b of `message`, with a key of up to 64 bytes.
pub fn blake2b_keyed(hash: &mut [u8], key: &[u8], message: &[u8]) {
    let mut ctx = Blake2b::new_keyed(hash.len(), key);
    ctx.update(message);
    ctx.finalize(hash);
}

/// 64-byte BLAKE2b of the concatenation of `parts`.
pub(crate) fn blake2b_64(parts: &[&[u8]]) -> [u8; 64] {
    let mut ctx = Blake2b::new(64);
    for part in parts {
        ctx.update(part);
    }
    let mut hash = [0u8; 64];
    ctx.finalize(&mut hash);
    hash
}
