//! Elligator 2 over Curve25519.
//!
//! Maps curve points to 32-byte strings indistinguishable from random, and
//! back. Only about half of the points can be encoded; the other half makes
//! [`elligator_rev`] fail with [`Error::NotEncodable`], in which case the
//! caller picks another key pair.
//!
//! The representative is a field element in `[0, (p−1)/2]`, which takes
//! 254 bits. The two top bits of the last byte are filled from the tweak so
//! the whole string looks random. They are ignored by [`elligator_map`].
//!
//! ## Forward map
//!
//! ```text
//! w = −A / (1 + 2r²)
//! e = legendre(w³ + Aw² + w)
//! u = e·w − (1 − e)·A/2
//! ```
//!
//! Computed with a single inverse square root and no branch on secrets.

use tracing::trace;
use zeroize::{Zeroize, Zeroizing};

use crate::encryption::chacha20::chacha20_djb;
use crate::error::{Error, Result};
use crate::keys::field::{A, A2, FieldElement, UFACTOR};
use crate::keys::x25519::x25519_dirty_fast;

/// Maps a representative to the u coordinate of a curve point.
///
/// Every 32-byte string is a valid input. The 2 most significant bits are
/// ignored.
pub fn elligator_map(hidden: &[u8; 32]) -> [u8; 32] {
    let mut r = FieldElement::from_bytes_masked(hidden, 2);
    r = r.square();
    let mut t1 = r + r;
    let mut u = t1 + FieldElement::ONE;
    let mut t2 = u.square();
    let mut t3 = A2 * t1 - t2;
    t3 = t3 * A;
    t1 = t2 * u;
    t1 = t3 * t1;
    let (mut inv, is_square) = t1.invsqrt();
    t1 = inv;
    u = r * UFACTOR;
    u.conditional_move(&FieldElement::ONE, is_square as u32);
    t1 = t1.square();
    u = u * A;
    u = u * t3;
    u = u * t2;
    u = u * t1;
    u = -u;
    let curve = u.to_bytes();

    for fe in [&mut r, &mut t1, &mut u, &mut t2, &mut t3, &mut inv] {
        fe.zeroize();
    }
    curve
}

/// Computes a representative of `public_key`.
///
/// Bit 0 of `tweak` selects between the two representatives (it matches
/// the sign of the Edwards `v` coordinate). Bits 6 and 7 are copied into
/// the two unused top bits of the output. Bits 1 to 5 are ignored.
///
/// # Errors
///
/// [`Error::NotEncodable`] if the point has no representative. Roughly
/// half of all points fall in that case.
///
/// ```text
/// r² = −u / (2(u + A))      if v is positive
/// r² = −(u + A) / (2u)      if v is negative
/// ```
pub fn elligator_rev(public_key: &[u8; 32], tweak: u8) -> Result<[u8; 32]> {
    let mut t1 = FieldElement::from_bytes(public_key);
    let mut t2 = t1 + A;
    let mut t3 = (t1 * t2).mul_small(-2);
    let (inv, is_square) = t3.invsqrt();
    t3 = inv;
    if !is_square {
        t1.zeroize();
        t2.zeroize();
        t3.zeroize();
        return Err(Error::NotEncodable);
    }

    t1.conditional_move(&t2, (tweak & 1) as u32);
    t3 = t1 * t3;
    t1 = t3.mul_small(2);
    t2 = -t3;
    // Pick the non-negative root
    t3.conditional_move(&t2, t1.is_odd());

    let mut hidden = t3.to_bytes();
    hidden[31] |= tweak & 0xc0;

    t1.zeroize();
    t2.zeroize();
    t3.zeroize();
    Ok(hidden)
}

/// Generates a key pair whose public key can be hidden.
///
/// Candidates are drawn deterministically from `seed` with ChaCha20 until
/// a dirty public key ([`x25519_dirty_fast`]) is encodable. The seed is
/// wiped.
///
/// # Returns
///
/// `(hidden, secret_key)`: the representative of the public key, and the
/// X25519 secret key. The public key itself is `elligator_map(&hidden)`.
pub fn elligator_key_pair(seed: &mut [u8; 32]) -> ([u8; 32], [u8; 32]) {
    let mut buf = Zeroizing::new([0u8; 64]);
    let mut key = Zeroizing::new([0u8; 32]);
    buf[32..].copy_from_slice(seed);

    let mut attempts = 0u32;
    let hidden = loop {
        attempts += 1;
        key.copy_from_slice(&buf[32..]);
        chacha20_djb(&mut buf[..], None, &key, &[0u8; 8], 0);

        let mut candidate = [0u8; 32];
        candidate.copy_from_slice(&buf[..32]);
        let public_key = x25519_dirty_fast(&candidate);
        candidate.zeroize();

        if let Ok(hidden) = elligator_rev(&public_key, buf[32]) {
            break hidden;
        }
    };
    trace!(attempts, "elligator key pair found");

    let mut secret_key = [0u8; 32];
    secret_key.copy_from_slice(&buf[..32]);
    seed.zeroize();
    (hidden, secret_key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keys::x25519::x25519_dirty_small;

    #[test]
    fn rev_then_map_round_trips() {
        let mut found = 0;
        for i in 0u8..32 {
            let sk = [i.wrapping_mul(37).wrapping_add(1); 32];
            let pk = x25519_dirty_small(&sk);
            if let Ok(hidden) = elligator_rev(&pk, i) {
                assert_eq!(elligator_map(&hidden), pk, "round trip failed for {i}");
                found += 1;
            }
        }
        assert!(found > 0, "no encodable point among 32 candidates");
    }

    #[test]
    fn top_bits_come_from_tweak() {
        let mut seed = [5u8; 32];
        let (_, sk) = elligator_key_pair(&mut seed);
        let pk = x25519_dirty_fast(&sk);
        for tweak in [0x00u8, 0x41, 0x80, 0xc1] {
            let hidden = elligator_rev(&pk, tweak).expect("encodability does not depend on the tweak");
            assert_eq!(hidden[31] & 0xc0, tweak & 0xc0);
            assert_eq!(elligator_map(&hidden), pk);
        }
    }

    #[test]
    fn key_pair_wipes_seed() {
        let mut seed = [9u8; 32];
        let (hidden, sk) = elligator_key_pair(&mut seed);
        assert_eq!(seed, [0u8; 32]);
        assert_eq!(elligator_map(&hidden), x25519_dirty_fast(&sk));
    }
}
