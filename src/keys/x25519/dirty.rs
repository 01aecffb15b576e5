//! Public keys that keep the cofactor.
//!
//! Regular X25519 public keys are multiples of the base point, and all of
//! them lie in the prime-order subgroup. That makes them distinguishable
//! from random once hidden with Elligator 2. The functions here add a
//! low-order component chosen by the 3 low bits of the secret key, so the
//! public key covers the whole curve.
//!
//! ## Security
//!
//! A dirty public key reveals the 3 low bits of the secret key. Only use
//! it for ephemeral keys that are then hidden with
//! [`elligator_rev`](crate::keys::elligator::elligator_rev). Key exchange
//! with [`x25519`](super::x25519) still works, because X25519 clears the
//! cofactor.
//!
//! The two variants produce the same output bit for bit:
//!
//! - [`x25519_dirty_small`]: one Montgomery ladder over a base point of
//!   order 8L. Smaller, about half as fast.
//! - [`x25519_dirty_fast`]: an Edwards comb multiplication plus a table-free
//!   low-order point addition.

use zeroize::Zeroize;

use super::core::scalarmult;
use crate::keys::field::{FieldElement, LOP_X, LOP_Y, SQRTM1};
use crate::keys::group::{PrecomputedPoint, scalarmult_base};
use crate::keys::scalar::{add_xl, eddsa_trim_scalar};

/// Base point of order 8L: the regular base point plus a point of order 8.
///
/// The low order component is chosen so that both variants agree.
const DIRTY_BASE_POINT: [u8; 32] = [
    0xd8, 0x86, 0x1a, 0xa2, 0x78, 0x7a, 0xd9, 0x26, 0x8b, 0x74, 0x74, 0xb6, 0x82, 0xe3, 0xbe, 0xc3,
    0xce, 0x36, 0x9a, 0x1e, 0x5e, 0x31, 0x47, 0xa2, 0x6d, 0x37, 0x7c, 0xfd, 0x20, 0xb5, 0xdf, 0x75,
];

/// Dirty public key with a single ladder over 256 bits.
///
/// The trimmed scalar carries the main factor. Adding `(secret_key[0] mod
/// 8)·L` to it sets its value modulo 8 (the cofactor part) without
/// changing it modulo L.
pub fn x25519_dirty_small(secret_key: &[u8; 32]) -> [u8; 32] {
    let mut scalar = eddsa_trim_scalar(secret_key);
    add_xl(&mut scalar, secret_key[0]);
    let public_key = scalarmult(&scalar, &DIRTY_BASE_POINT, 256);
    scalar.zeroize();
    public_key
}

/// Selects one coordinate of `[cofactor]LOP` in constant time.
///
/// The 8 low order points have coordinates among `0`, `k` and `x` and
/// their opposites, following the same pattern (x uses `k = √−1`, y uses
/// `k = 1` rotated by 2):
///
/// ```text
/// [0]: ( 0,   1)   [4]: (-0,  -1)
/// [1]: ( x,   y)   [5]: (-x,  -y)
/// [2]: ( √-1, -0)  [6]: (-√-1, 0)
/// [3]: ( x,  -y)   [7]: (-x,   y)
/// ```
fn select_lop(x: &FieldElement, k: &FieldElement, cofactor: u8) -> FieldElement {
    let mut out = FieldElement::ZERO;
    out.conditional_move(k, ((cofactor >> 1) & 1) as u32);
    out.conditional_move(x, (cofactor & 1) as u32);
    let mut minus = -out;
    out.conditional_move(&minus, ((cofactor >> 2) & 1) as u32);
    minus.zeroize();
    out
}

/// Dirty public key with an Edwards base point multiplication.
///
/// Computes `[trimmed]B` with the comb, adds `[secret_key[0] mod 8]` times
/// a point of order 8, and converts to the Montgomery u coordinate.
pub fn x25519_dirty_fast(secret_key: &[u8; 32]) -> [u8; 32] {
    let mut scalar = eddsa_trim_scalar(secret_key);
    let pk = scalarmult_base(&scalar);

    let mut lx = select_lop(&LOP_X, &SQRTM1, secret_key[0]);
    let mut ly = select_lop(&LOP_Y, &FieldElement::ONE, secret_key[0].wrapping_add(2));
    let low_order_point = PrecomputedPoint::from_affine(&lx, &ly);

    let pk = pk.madd(&low_order_point);

    // u = (Z + Y) / (Z - Y), sign ignored
    let mut t1 = pk.z + pk.y;
    let mut t2 = (pk.z - pk.y).invert();
    let public_key = (t1 * t2).to_bytes();

    scalar.zeroize();
    lx.zeroize();
    ly.zeroize();
    t1.zeroize();
    t2.zeroize();
    public_key
}
