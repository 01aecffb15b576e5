//! Endian-explicit loads and stores.
//!
//! Every primitive in the crate is little-endian except the SHA-512 family,
//! which is big-endian. Callers pass slices that are at least as long as
//! the value being read or written; shorter slices are a bug and panic.

/// Number of bytes needed to bring `x` up to the next multiple of `pow_2`.
///
/// `pow_2` must be a power of two.
#[inline(always)]
pub(crate) fn gap(x: usize, pow_2: usize) -> usize {
    (!x).wrapping_add(1) & (pow_2 - 1)
}

#[inline(always)]
pub(crate) fn load24_le(s: &[u8]) -> u32 {
    (s[0] as u32) | ((s[1] as u32) << 8) | ((s[2] as u32) << 16)
}

#[inline(always)]
pub(crate) fn load32_le(s: &[u8]) -> u32 {
    u32::from_le_bytes([s[0], s[1], s[2], s[3]])
}

#[inline(always)]
pub(crate) fn load64_le(s: &[u8]) -> u64 {
    load32_le(s) as u64 | ((load32_le(&s[4..]) as u64) << 32)
}

#[inline(always)]
pub(crate) fn load64_be(s: &[u8]) -> u64 {
    u64::from_be_bytes([s[0], s[1], s[2], s[3], s[4], s[5], s[6], s[7]])
}

#[inline(always)]
pub(crate) fn store32_le(out: &mut [u8], value: u32) {
    out[..4].copy_from_slice(&value.to_le_bytes());
}

#[inline(always)]
pub(crate) fn store64_le(out: &mut [u8], value: u64) {
    out[..8].copy_from_slice(&value.to_le_bytes());
}

#[inline(always)]
pub(crate) fn store64_be(out: &mut [u8], value: u64) {
    out[..8].copy_from_slice(&value.to_be_bytes());
}

/// Loads `dst.len()` consecutive little-endian `u32` words from `src`.
pub(crate) fn load32_le_buf(dst: &mut [u32], src: &[u8]) {
    for (word, chunk) in dst.iter_mut().zip(src.chunks_exact(4)) {
        *word = load32_le(chunk);
    }
}

/// Loads `dst.len()` consecutive little-endian `u64` words from `src`.
pub(crate) fn load64_le_buf(dst: &mut [u64], src: &[u8]) {
    for (word, chunk) in dst.iter_mut().zip(src.chunks_exact(8)) {
        *word = load64_le(chunk);
    }
}

/// Loads `dst.len()` consecutive big-endian `u64` words from `src`.
pub(crate) fn load64_be_buf(dst: &mut [u64], src: &[u8]) {
    for (word, chunk) in dst.iter_mut().zip(src.chunks_exact(8)) {
        *word = load64_be(chunk);
    }
}

/// Stores every word of `src` as little-endian bytes into `dst`.
pub(crate) fn store32_le_buf(dst: &mut [u8], src: &[u32]) {
    for (chunk, word) in dst.chunks_exact_mut(4).zip(src) {
        store32_le(chunk, *word);
    }
}

/// Stores every word of `src` as little-endian bytes into `dst`.
pub(crate) fn store64_le_buf(dst: &mut [u8], src: &[u64]) {
    for (chunk, word) in dst.chunks_exact_mut(8).zip(src) {
        store64_le(chunk, *word);
    }
}

/// Copies the first `N` bytes of `src` into a fixed-size array.
#[inline(always)]
pub(crate) fn array_from<const N: usize>(src: &[u8]) -> [u8; N] {
    let mut out = [0u8; N];
    out.copy_from_slice(&src[..N]);
    out
}
