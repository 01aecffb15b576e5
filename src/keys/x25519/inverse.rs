use zeroize::Zeroize;

use super::core::scalarmult;
use crate::keys::scalar::{Scalar, add_xl, eddsa_trim_scalar};

/// Multiplies `curve_point` by the inverse of the trimmed `private_key`.
///
/// Undoes `x25519(private_key, P)` for points `P` of the prime-order
/// subgroup: `x25519_inverse(k, x25519(k, P)) == P`. This is the unblinding
/// step of exponential blinding protocols such as OPRFs.
///
/// The scalar is inverted modulo L, then its cofactor part is cleared by
/// multiplying by `3L + 1` modulo `8L`, so any low-order component of the
/// input point is removed.
pub fn x25519_inverse(private_key: &[u8; 32], curve_point: &[u8; 32]) -> [u8; 32] {
    let mut trimmed = eddsa_trim_scalar(private_key);
    let mut scalar = Scalar::from_bytes_mod_order(&trimmed).invert().to_bytes();

    // scalar * (3L + 1) mod 8L = scalar + (3 * scalar mod 8) * L
    let factor = scalar[0].wrapping_mul(3);
    add_xl(&mut scalar, factor);

    // 8L is just below 2^256, so all 256 bits go through the ladder
    let blind_salt = scalarmult(&scalar, curve_point, 256);

    trimmed.zeroize();
    scalar.zeroize();
    blind_salt
}
