//! Birational maps between Edwards25519 and Curve25519.
//!
//! ```text
//! u = (1 + y) / (1 − y)
//! y = (u − 1) / (u + 1)
//! ```
//!
//! Only the `y` and `u` coordinates are converted. The sign of `x` is lost
//! going to X25519 and assumed positive coming back.

use zeroize::Zeroize;

use crate::keys::field::FieldElement;

/// Converts an EdDSA public key into an X25519 public key.
pub fn eddsa_to_x25519(eddsa: &[u8; 32]) -> [u8; 32] {
    let y = FieldElement::from_bytes(eddsa);
    let mut num = FieldElement::ONE + y;
    let mut den = (FieldElement::ONE - y).invert();
    let u = (num * den).to_bytes();
    num.zeroize();
    den.zeroize();
    u
}

/// Converts an X25519 public key into an EdDSA public key (positive `x`).
pub fn x25519_to_eddsa(x25519: &[u8; 32]) -> [u8; 32] {
    let u = FieldElement::from_bytes(x25519);
    let mut num = u - FieldElement::ONE;
    let mut den = (u + FieldElement::ONE).invert();
    let y = (num * den).to_bytes();
    num.zeroize();
    den.zeroize();
    y
}
