//! Block type and compression function for Argon2.
//!
//! A block is 1024 bytes seen as 128 little-endian 64-bit words. The
//! compression function G is built on a BLAKE2b-like round whose additions
//! are strengthened with 32-bit multiplications.

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::utils::bytes::{load64_le_buf, store64_le_buf};

/// A 1024-byte Argon2 memory block (128 × 64-bit words).
///
/// Blocks make up the caller-provided work area. Every block is wiped on
/// drop, and [`argon2`](super::argon2) zeroes the whole work area before
/// returning.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Block(pub [u64; 128]);

impl Default for Block {
    fn default() -> Self {
        Self::ZERO
    }
}

impl Block {
    pub(crate) const ZERO: Self = Self([0u64; 128]);

    /// Allocates a zeroed work area of `nb_blocks` blocks.
    ///
    /// Callers without an allocator can build the area any other way and
    /// pass it to [`WorkArea::new`](super::WorkArea::new).
    pub fn new_area(nb_blocks: usize) -> Vec<Block> {
        vec![Self::ZERO; nb_blocks]
    }

    pub(crate) fn in_place_xor(&mut self, other: &Block) {
        self.0
            .iter_mut()
            .zip(other.0.iter())
            .for_each(|(a, b)| *a ^= b);
    }

    pub(crate) fn from_bytes(bytes: &[u8; 1024]) -> Self {
        let mut block = Self::ZERO;
        load64_le_buf(&mut block.0, bytes);
        block
    }

    pub(crate) fn to_bytes(&self, out: &mut [u8; 1024]) {
        store64_le_buf(out, &self.0);
    }

    /// Compression function G(X, Y) = P(X ⊕ Y) ⊕ X ⊕ Y (RFC 9106 §3.5).
    ///
    /// P is applied to the eight rows of 16 consecutive words, then to the
    /// eight columns made of interleaved word pairs.
    pub(crate) fn compress(x: &Self, y: &Self) -> Self {
        let mut r = x.clone();
        r.in_place_xor(y);

        let mut z = r.clone();
        z.permute_rows_and_columns();
        z.in_place_xor(&r);
        z
    }

    fn permute_rows_and_columns(&mut self) {
        let mut v = [0u64; 16];

        for row in self.0.chunks_exact_mut(16) {
            v.copy_from_slice(row);
            permute_p(&mut v);
            row.copy_from_slice(&v);
        }

        for i in (0..16).step_by(2) {
            for (k, pair) in v.chunks_exact_mut(2).enumerate() {
                pair[0] = self.0[i + 16 * k];
                pair[1] = self.0[i + 16 * k + 1];
            }
            permute_p(&mut v);
            for (k, pair) in v.chunks_exact(2).enumerate() {
                self.0[i + 16 * k] = pair[0];
                self.0[i + 16 * k + 1] = pair[1];
            }
        }
        v.zeroize();
    }

    /// Builds a pseudo-random index block for data-independent addressing.
    ///
    /// The result is G(0, G(0, Z)), where Z holds the position, the public
    /// parameters and a counter. Reference positions are read from it, so
    /// they do not depend on the password.
    pub(crate) fn index_block(position: &[u64; 7]) -> Self {
        let mut input = Self::ZERO;
        input.0[..7].copy_from_slice(position);

        let tmp = Block::compress(&Block::ZERO, &input);
        Block::compress(&Block::ZERO, &tmp)
    }
}

/// Multiply-hardened addition: `a + b + 2 · lo32(a) · lo32(b)`.
#[inline(always)]
fn fblamka(a: u64, b: u64) -> u64 {
    let product = (a & 0xffff_ffff).wrapping_mul(b & 0xffff_ffff);
    a.wrapping_add(b).wrapping_add(product.wrapping_shl(1))
}

/// GB mixing function (Argon2 variant of BLAKE2b's G).
///
/// ```text
/// a = a + b + 2 × trunc(a) × trunc(b)
/// d = (d ⊕ a) >>> rotation
/// ```
///
/// with rotations of 32, 24, 16 and 63 bits.
#[inline(always)]
fn gb(v: &mut [u64; 16], a: usize, b: usize, c: usize, d: usize) {
    v[a] = fblamka(v[a], v[b]);
    v[d] = (v[d] ^ v[a]).rotate_right(32);
    v[c] = fblamka(v[c], v[d]);
    v[b] = (v[b] ^ v[c]).rotate_right(24);
    v[a] = fblamka(v[a], v[b]);
    v[d] = (v[d] ^ v[a]).rotate_right(16);
    v[c] = fblamka(v[c], v[d]);
    v[b] = (v[b] ^ v[c]).rotate_right(63);
}

/// P permutation: GB over the columns, then over the diagonals.
#[inline(always)]
fn permute_p(v: &mut [u64; 16]) {
    gb(v, 0, 4, 8, 12);
    gb(v, 1, 5, 9, 13);
    gb(v, 2, 6, 10, 14);
    gb(v, 3, 7, 11, 15);

    gb(v, 0, 5, 10, 15);
    gb(v, 1, 6, 11, 12);
    gb(v, 2, 7, 8, 13);
    gb(v, 3, 4, 9, 14);
}
