//! Constant-time comparisons and secret wiping.
//!
//! The `verify*` functions keep the integer contract of the primitives they
//! serve: `0` when both inputs are equal, `-1` otherwise. Their running time
//! depends only on the input lengths, never on where the inputs differ.

use zeroize::Zeroize;

use super::bytes::load64_le;

/// Maps `0` to `0` and every other value to `-1`, without branching.
#[inline(always)]
fn neq0(diff: u64) -> i32 {
    let half = (diff >> 32) | (diff as u32 as u64);
    (1 & (half.wrapping_sub(1) >> 32)) as i32 - 1
}

#[inline(always)]
fn x16(a: &[u8], b: &[u8]) -> u64 {
    (load64_le(&a[0..]) ^ load64_le(&b[0..])) | (load64_le(&a[8..]) ^ load64_le(&b[8..]))
}

#[inline(always)]
fn x32(a: &[u8], b: &[u8]) -> u64 {
    x16(a, b) | x16(&a[16..], &b[16..])
}

#[inline(always)]
fn x64(a: &[u8], b: &[u8]) -> u64 {
    x32(a, b) | x32(&a[32..], &b[32..])
}

/// Compares two 16-byte buffers in constant time.
///
/// Returns `0` if they are equal and `-1` otherwise.
pub fn verify16(a: &[u8; 16], b: &[u8; 16]) -> i32 {
    neq0(x16(a, b))
}

/// Compares two 32-byte buffers in constant time.
///
/// Returns `0` if they are equal and `-1` otherwise.
pub fn verify32(a: &[u8; 32], b: &[u8; 32]) -> i32 {
    neq0(x32(a, b))
}

/// Compares two 64-byte buffers in constant time.
///
/// Returns `0` if they are equal and `-1` otherwise.
pub fn verify64(a: &[u8; 64], b: &[u8; 64]) -> i32 {
    neq0(x64(a, b))
}

/// Erases a secret buffer.
///
/// The writes are guaranteed not to be elided by the optimizer, even if the
/// buffer is never read again.
pub fn wipe(secret: &mut [u8]) {
    secret.zeroize();
}
