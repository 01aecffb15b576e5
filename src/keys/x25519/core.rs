use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::keys::field::FieldElement;
use crate::keys::scalar::{eddsa_trim_scalar, scalar_bit};

/// The X25519 base point, u = 9.
pub(crate) const BASE_POINT: [u8; 32] = {
    let mut b = [0u8; 32];
    b[0] = 9;
    b
};

/// Projective state of the Montgomery ladder: the input point `x1` and the
/// two running points `(x2 : z2)` and `(x3 : z3)`, with `P3 − P2 = P1`.
#[derive(Zeroize, ZeroizeOnDrop)]
struct Ladder {
    x1: FieldElement,
    x2: FieldElement,
    z2: FieldElement,
    x3: FieldElement,
    z3: FieldElement,
}

impl Ladder {
    fn new(u: &[u8; 32]) -> Self {
        let x1 = FieldElement::from_bytes(u);
        Ladder {
            x1,
            x2: FieldElement::ONE,
            z2: FieldElement::ZERO,
            x3: x1,
            z3: FieldElement::ONE,
        }
    }

    fn cswap(&mut self, condition: u32) {
        self.x2.swap(&mut self.x3, condition);
        self.z2.swap(&mut self.z3, condition);
    }

    /// Replaces `(P2, P3)` by `(2·P2, P2 + P3)` with differential addition.
    fn step(&mut self) {
        let mut t0 = self.x3 - self.z3;
        let mut t1 = self.x2 - self.z2;
        self.x2 = self.x2 + self.z2;
        self.z2 = self.x3 + self.z3;
        self.z3 = t0 * self.x2;
        self.z2 = self.z2 * t1;
        t0 = t1.square();
        t1 = self.x2.square();
        self.x3 = self.z3 + self.z2;
        self.z2 = self.z3 - self.z2;
        self.x2 = t1 * t0;
        t1 = t1 - t0;
        self.z2 = self.z2.square();
        self.z3 = t1.mul_small(121666);
        self.x3 = self.x3.square();
        t0 = t0 + self.z3;
        self.z3 = self.x1 * self.z2;
        self.z2 = t1 * t0;

        t0.zeroize();
        t1.zeroize();
    }
}

/// Montgomery ladder over the `nb_bits` low bits of `scalar`.
///
/// The scalar is used as is: clamping, if any, is the caller's job. The
/// result is the u coordinate of `[scalar]P`, 0 for the point at infinity.
///
/// Swaps are deferred with the xor trick: the ladder only swaps when the
/// current bit differs from the previous one, plus once at the end.
pub(crate) fn scalarmult(scalar: &[u8; 32], u: &[u8; 32], nb_bits: i32) -> [u8; 32] {
    let mut ladder = Ladder::new(u);
    let mut swap = 0u32;

    for pos in (0..nb_bits).rev() {
        let b = scalar_bit(scalar, pos) as u32;
        swap ^= b;
        ladder.cswap(swap);
        swap = b;

        ladder.step();
    }
    ladder.cswap(swap);

    // x = X / Z
    ladder.z2 = ladder.z2.invert();
    ladder.x2 = ladder.x2 * ladder.z2;
    ladder.x2.to_bytes()
}

/// X25519 key exchange (RFC 7748).
///
/// Computes the raw shared secret between `secret_key` and
/// `their_public_key`. The scalar is clamped first.
///
/// ## Return value
///
/// The u coordinate of the shared point. It is all zeros when the peer
/// sent a low-order point, and it is not uniformly random: hash it
/// (together with both public keys) before use as a key.
///
/// ## Security
///
/// - Constant-time with respect to the secret key.
/// - Peer public keys are not validated (matches X25519 semantics).
pub fn x25519(secret_key: &[u8; 32], their_public_key: &[u8; 32]) -> [u8; 32] {
    let mut e = eddsa_trim_scalar(secret_key);
    let shared = scalarmult(&e, their_public_key, 255);
    e.zeroize();
    shared
}

/// Derives the X25519 public key of `secret_key`: `x25519(secret_key, 9)`.
pub fn x25519_public_key(secret_key: &[u8; 32]) -> [u8; 32] {
    x25519(secret_key, &BASE_POINT)
}
