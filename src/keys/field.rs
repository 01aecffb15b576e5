//! Finite field arithmetic for Curve25519 / Ed25519.
//!
//! This module implements arithmetic in the prime field
//!
//! ```text
//! 𝔽ₚ where p = 2²⁵⁵ − 19
//! ```
//!
//! ## Representation
//!
//! Field elements are 10 signed 32-bit limbs with alternating sizes:
//!
//! ```text
//! [26, 25, 26, 25, 26, 25, 26, 25, 26, 25] bits
//! ```
//!
//! Addition, subtraction and negation are limb-wise and never carry. Their
//! results are only valid as inputs to multiplication, squaring and
//! encoding, which tolerate limbs up to about 1.65 times their nominal
//! size. Chaining two additions without a multiplication in between is not
//! allowed.
//!
//! ## Design goals
//!
//! - **Constant-time execution**: no secret-dependent branches or memory access.
//! - **Overflow safety**: products are accumulated in `i64` and carried in
//!   a fixed order that keeps every intermediate below 2⁶³.
//! - **Deferred reduction**: values stay partially reduced until encoded.

use core::ops::{Add, Mul, Neg, Sub};

use zeroize::Zeroize;

use crate::utils::bytes::{load24_le, load32_le, store32_le};
use crate::utils::ct::verify32;

/// Multiplies two limbs with explicit promotion to `i64`.
macro_rules! mul {
    ($a:expr, $b:expr) => {
        ($a as i64) * ($b as i64)
    };
}

/// Field element modulo `2^255 - 19`, in radix 2^25.5.
#[derive(Clone, Copy, Debug, Zeroize)]
pub(crate) struct FieldElement(pub(crate) [i32; 10]);

/// √−1
pub(crate) const SQRTM1: FieldElement = FieldElement([
    -32595792, -7943725, 9377950, 3500415, 12389472, -272473, -25146209, -2005654, 326686,
    11406482,
]);

/// Edwards curve constant d = −121665 / 121666.
pub(crate) const D: FieldElement = FieldElement([
    -10913610, 13857413, -15372611, 6949391, 114729, -8787816, -6275908, -3247719, -18696448,
    -12055116,
]);

/// 2d
pub(crate) const D2: FieldElement = FieldElement([
    -21827239, -5839606, -30745221, 13898782, 229458, 15978800, -12551817, -6495438, 29715968,
    9444199,
]);

/// x coordinate of an Edwards point of order 8.
pub(crate) const LOP_X: FieldElement = FieldElement([
    21352778, 5345713, 4660180, -8347857, 24143090, 14568123, 30185756, -12247770, -33528939,
    8345319,
]);

/// y coordinate of an Edwards point of order 8.
pub(crate) const LOP_Y: FieldElement = FieldElement([
    -6952922, -1265500, 6862341, -7057498, -4037696, -5447722, 31680899, -15325402, -19365852,
    1569102,
]);

/// −2·√−1, the Elligator 2 non-square factor.
pub(crate) const UFACTOR: FieldElement = FieldElement([
    -1917299, 15887451, -18755900, -7000830, -24778944, 544946, -16816446, 4011309, -653372,
    10741468,
]);

/// A², with A = 486662 the Montgomery curve coefficient.
pub(crate) const A2: FieldElement = FieldElement([12721188, 3529, 0, 0, 0, 0, 0, 0, 0, 0]);

/// Montgomery curve coefficient A = 486662.
pub(crate) const A: FieldElement = FieldElement([486662, 0, 0, 0, 0, 0, 0, 0, 0, 0]);

/// Signed carry propagation.
///
/// Each carry is `c = (t + 2^(k-1)) >> k`, so the remaining limb lands in
/// `[-2^(k-1), 2^(k-1))`. The order below lets inputs reach 2⁶² (2⁶³ for
/// `t0`) without overflow, and leaves every output limb below 1.1 times
/// its nominal size.
#[inline(always)]
fn carry(mut t: [i64; 10]) -> FieldElement {
    #[inline(always)]
    fn step(t: &mut [i64; 10], i: usize, bits: u32, next: usize, factor: i64) {
        let c = (t[i] + (1i64 << (bits - 1))) >> bits;
        t[i] -= c * (1i64 << bits);
        t[next] += c * factor;
    }

    step(&mut t, 0, 26, 1, 1);
    step(&mut t, 4, 26, 5, 1);
    step(&mut t, 1, 25, 2, 1);
    step(&mut t, 5, 25, 6, 1);
    step(&mut t, 2, 26, 3, 1);
    step(&mut t, 6, 26, 7, 1);
    step(&mut t, 3, 25, 4, 1);
    step(&mut t, 7, 25, 8, 1);
    step(&mut t, 4, 26, 5, 1);
    step(&mut t, 8, 26, 9, 1);
    step(&mut t, 9, 25, 0, 19);
    step(&mut t, 0, 26, 1, 1);

    let out = FieldElement(t.map(|x| x as i32));
    t.zeroize();
    out
}

impl FieldElement {
    /// The additive identity (0).
    pub(crate) const ZERO: Self = FieldElement([0i32; 10]);

    /// The multiplicative identity (1).
    pub(crate) const ONE: Self = FieldElement([1, 0, 0, 0, 0, 0, 0, 0, 0, 0]);

    /// Constant-time conditional swap.
    ///
    /// If `condition == 1`, swaps `self` and `rhs`.
    /// If `condition == 0`, does nothing.
    pub(crate) fn swap(&mut self, rhs: &mut Self, condition: u32) {
        let mask = (condition as i32).wrapping_neg();

        for (s, r) in self.0.iter_mut().zip(rhs.0.iter_mut()) {
            let tmp = (*s ^ *r) & mask;
            *s ^= tmp;
            *r ^= tmp;
        }
    }

    /// Constant-time conditional move.
    ///
    /// If `condition == 1`, replaces `self` with `rhs`.
    /// If `condition == 0`, leaves `self` unchanged.
    pub(crate) fn conditional_move(&mut self, rhs: &Self, condition: u32) {
        let mask = (condition as i32).wrapping_neg();

        for (s, r) in self.0.iter_mut().zip(rhs.0.iter()) {
            let tmp = (*s ^ r) & mask;
            *s ^= tmp;
        }
    }

    /// Decodes 32 little-endian bytes, ignoring the top `nb_mask` bits.
    ///
    /// EdDSA ignores one bit (it holds the sign of x). Elligator 2
    /// representatives ignore two. Non-canonical values are accepted and
    /// reduced.
    pub(crate) fn from_bytes_masked(s: &[u8; 32], nb_mask: u32) -> Self {
        let mask = 0x00ff_ffff_u32 >> nb_mask;
        carry([
            load32_le(&s[0..]) as i64,
            (load24_le(&s[4..]) as i64) << 6,
            (load24_le(&s[7..]) as i64) << 5,
            (load24_le(&s[10..]) as i64) << 3,
            (load24_le(&s[13..]) as i64) << 2,
            load32_le(&s[16..]) as i64,
            (load24_le(&s[20..]) as i64) << 7,
            (load24_le(&s[23..]) as i64) << 5,
            (load24_le(&s[26..]) as i64) << 4,
            ((load24_le(&s[29..]) & mask) as i64) << 2,
        ])
    }

    /// Decodes 32 little-endian bytes, ignoring the top bit.
    pub(crate) fn from_bytes(s: &[u8; 32]) -> Self {
        Self::from_bytes_masked(s, 1)
    }

    /// Encodes this field element into its canonical 32-byte form.
    ///
    /// The input limbs must come out of a carry (multiplication, squaring
    /// or decoding), which bounds the value below p in absolute value. A
    /// negative value gets p added back.
    pub(crate) fn to_bytes(&self) -> [u8; 32] {
        let mut t = self.0;

        // q = 0 if the value is non-negative, -1 otherwise
        let mut q = (19 * t[9] + (1i32 << 24)) >> 25;
        for i in 0..5 {
            q += t[2 * i];
            q >>= 26;
            q += t[2 * i + 1];
            q >>= 25;
        }

        q *= 19;
        for i in 0..5 {
            t[2 * i] += q;
            q = t[2 * i] >> 26;
            t[2 * i] -= q * (1i32 << 26);

            t[2 * i + 1] += q;
            q = t[2 * i + 1] >> 25;
            t[2 * i + 1] -= q * (1i32 << 25);
        }

        let u = t.map(|x| x as u32);
        let mut s = [0u8; 32];
        store32_le(&mut s[0..], u[0] | (u[1] << 26));
        store32_le(&mut s[4..], (u[1] >> 6) | (u[2] << 19));
        store32_le(&mut s[8..], (u[2] >> 13) | (u[3] << 13));
        store32_le(&mut s[12..], (u[3] >> 19) | (u[4] << 6));
        store32_le(&mut s[16..], u[5] | (u[6] << 25));
        store32_le(&mut s[20..], (u[6] >> 7) | (u[7] << 19));
        store32_le(&mut s[24..], (u[7] >> 13) | (u[8] << 12));
        store32_le(&mut s[28..], (u[8] >> 20) | (u[9] << 6));

        t.zeroize();
        s
    }

    /// Multiplies by a small constant, such as 121666 or 2.
    pub(crate) fn mul_small(&self, g: i32) -> Self {
        carry(self.0.map(|f| mul!(f, g)))
    }

    /// Computes `self²`.
    ///
    /// Cheaper than a general multiplication thanks to the symmetric cross
    /// products. Constant time.
    pub(crate) fn square(&self) -> Self {
        let [f0, f1, f2, f3, f4, f5, f6, f7, f8, f9] = self.0;
        let (f0_2, f1_2, f2_2, f3_2) = (f0 * 2, f1 * 2, f2 * 2, f3 * 2);
        let (f4_2, f5_2, f6_2, f7_2) = (f4 * 2, f5 * 2, f6 * 2, f7 * 2);
        let (f5_38, f6_19, f7_38) = (f5 * 38, f6 * 19, f7 * 38);
        let (f8_19, f9_38) = (f8 * 19, f9 * 38);

        carry([
            mul!(f0, f0) + mul!(f1_2, f9_38) + mul!(f2_2, f8_19)
                + mul!(f3_2, f7_38) + mul!(f4_2, f6_19) + mul!(f5, f5_38),
            mul!(f0_2, f1) + mul!(f2, f9_38) + mul!(f3_2, f8_19)
                + mul!(f4, f7_38) + mul!(f5_2, f6_19),
            mul!(f0_2, f2) + mul!(f1_2, f1) + mul!(f3_2, f9_38)
                + mul!(f4_2, f8_19) + mul!(f5_2, f7_38) + mul!(f6, f6_19),
            mul!(f0_2, f3) + mul!(f1_2, f2) + mul!(f4, f9_38)
                + mul!(f5_2, f8_19) + mul!(f6, f7_38),
            mul!(f0_2, f4) + mul!(f1_2, f3_2) + mul!(f2, f2)
                + mul!(f5_2, f9_38) + mul!(f6_2, f8_19) + mul!(f7, f7_38),
            mul!(f0_2, f5) + mul!(f1_2, f4) + mul!(f2_2, f3)
                + mul!(f6, f9_38) + mul!(f7_2, f8_19),
            mul!(f0_2, f6) + mul!(f1_2, f5_2) + mul!(f2_2, f4)
                + mul!(f3_2, f3) + mul!(f7_2, f9_38) + mul!(f8, f8_19),
            mul!(f0_2, f7) + mul!(f1_2, f6) + mul!(f2_2, f5)
                + mul!(f3_2, f4) + mul!(f8, f9_38),
            mul!(f0_2, f8) + mul!(f1_2, f7_2) + mul!(f2_2, f6)
                + mul!(f3_2, f5_2) + mul!(f4, f4) + mul!(f9, f9_38),
            mul!(f0_2, f9) + mul!(f1_2, f8) + mul!(f2_2, f7)
                + mul!(f3_2, f6) + mul!(f4, f5_2),
        ])
    }

    /// Squares `n` times in a row (`n ≥ 1`).
    pub(crate) fn pow2k(&self, n: u32) -> Self {
        let mut out = self.square();
        for _ in 1..n {
            out = out.square();
        }
        out
    }

    /// Returns `1` if the canonical encoding is odd, `0` otherwise.
    ///
    /// Oddness is the sign convention of Ed25519 and Elligator 2.
    pub(crate) fn is_odd(&self) -> u32 {
        let mut s = self.to_bytes();
        let odd = (s[0] & 1) as u32;
        s.zeroize();
        odd
    }

    /// Returns `1` if both elements encode the same value, `0` otherwise.
    pub(crate) fn ct_eq(&self, other: &Self) -> u32 {
        let mut fs = self.to_bytes();
        let mut gs = other.to_bytes();
        let equal = (1 + verify32(&fs, &gs)) as u32;
        fs.zeroize();
        gs.zeroize();
        equal
    }

    /// Inverse square root.
    ///
    /// Returns `(isr, is_square)` where:
    ///
    /// - `isr = √(1/x)` and `is_square = true` if x is a non-zero square
    /// - `isr = √(√−1/x)` and `is_square = false` if x is not a square
    /// - `isr = 0` and `is_square = true` if x is zero
    ///
    /// The sign of the root is unspecified.
    ///
    /// Computes `t = x^((p-5)/8)`, then the quartic character
    /// `x^((p-1)/4) = t²·x`, which is one of 1, −1, √−1 or −√−1. For
    /// quartic −1 and √−1, `t` is off by a factor √−1 and gets corrected.
    pub(crate) fn invsqrt(&self) -> (Self, bool) {
        let x = *self;

        // t0 = x^((p-5)/8) = x^(2^252 - 3)
        let mut t0 = x.square();
        let mut t1 = t0.pow2k(2) * x;
        t0 = t0 * t1;
        t0 = t1 * t0.square();
        t0 = t0.pow2k(5) * t0;
        t1 = t0.pow2k(10) * t0;
        t1 = t1.pow2k(20) * t1;
        t0 = t1.pow2k(10) * t0;
        t1 = t0.pow2k(50) * t0;
        t1 = t1.pow2k(100) * t1;
        t0 = t1.pow2k(50) * t0;
        t0 = t0.pow2k(2) * x;

        let quartic = t0.square() * x;

        let z0 = x.ct_eq(&Self::ZERO);
        let p1 = quartic.ct_eq(&Self::ONE);
        let m1 = quartic.ct_eq(&-Self::ONE);
        let ms = quartic.ct_eq(&-SQRTM1);

        let mut isr = t0 * SQRTM1;
        isr.conditional_move(&t0, 1 - (m1 | ms));

        t0.zeroize();
        t1.zeroize();
        (isr, (p1 | m1 | z0) == 1)
    }

    /// Modular inverse, computed as `x · (invsqrt(x²))²`.
    ///
    /// The inverse of zero is zero.
    pub(crate) fn invert(&self) -> Self {
        let (mut tmp, _) = self.square().invsqrt();
        let out = tmp.square() * *self;
        tmp.zeroize();
        out
    }
}

impl Add for FieldElement {
    type Output = Self;

    /// Limb-wise addition, without carry.
    fn add(self, rhs: Self) -> Self {
        FieldElement(core::array::from_fn(|i| self.0[i] + rhs.0[i]))
    }
}

impl Sub for FieldElement {
    type Output = Self;

    /// Limb-wise subtraction, without carry.
    fn sub(self, rhs: Self) -> Self {
        FieldElement(core::array::from_fn(|i| self.0[i] - rhs.0[i]))
    }
}

impl Neg for FieldElement {
    type Output = Self;

    fn neg(self) -> Self {
        FieldElement(self.0.map(|x| -x))
    }
}

impl Mul for FieldElement {
    type Output = Self;

    /// Schoolbook multiplication with the `2²⁵⁵ ≡ 19` reduction folded in.
    ///
    /// Odd limbs of `f` are doubled when multiplied with odd limbs of `g`,
    /// because both carry half a bit of the radix.
    fn mul(self, rhs: Self) -> Self {
        let [f0, f1, f2, f3, f4, f5, f6, f7, f8, f9] = self.0;
        let [g0, g1, g2, g3, g4, g5, g6, g7, g8, g9] = rhs.0;
        let (ff1, ff3, ff5, ff7, ff9) = (f1 * 2, f3 * 2, f5 * 2, f7 * 2, f9 * 2);
        let (gg1, gg2, gg3) = (g1 * 19, g2 * 19, g3 * 19);
        let (gg4, gg5, gg6) = (g4 * 19, g5 * 19, g6 * 19);
        let (gg7, gg8, gg9) = (g7 * 19, g8 * 19, g9 * 19);

        carry([
            mul!(f0, g0) + mul!(ff1, gg9) + mul!(f2, gg8) + mul!(ff3, gg7) + mul!(f4, gg6)
                + mul!(ff5, gg5) + mul!(f6, gg4) + mul!(ff7, gg3) + mul!(f8, gg2)
                + mul!(ff9, gg1),
            mul!(f0, g1) + mul!(f1, g0) + mul!(f2, gg9) + mul!(f3, gg8) + mul!(f4, gg7)
                + mul!(f5, gg6) + mul!(f6, gg5) + mul!(f7, gg4) + mul!(f8, gg3)
                + mul!(f9, gg2),
            mul!(f0, g2) + mul!(ff1, g1) + mul!(f2, g0) + mul!(ff3, gg9) + mul!(f4, gg8)
                + mul!(ff5, gg7) + mul!(f6, gg6) + mul!(ff7, gg5) + mul!(f8, gg4)
                + mul!(ff9, gg3),
            mul!(f0, g3) + mul!(f1, g2) + mul!(f2, g1) + mul!(f3, g0) + mul!(f4, gg9)
                + mul!(f5, gg8) + mul!(f6, gg7) + mul!(f7, gg6) + mul!(f8, gg5)
                + mul!(f9, gg4),
            mul!(f0, g4) + mul!(ff1, g3) + mul!(f2, g2) + mul!(ff3, g1) + mul!(f4, g0)
                + mul!(ff5, gg9) + mul!(f6, gg8) + mul!(ff7, gg7) + mul!(f8, gg6)
                + mul!(ff9, gg5),
            mul!(f0, g5) + mul!(f1, g4) + mul!(f2, g3) + mul!(f3, g2) + mul!(f4, g1)
                + mul!(f5, g0) + mul!(f6, gg9) + mul!(f7, gg8) + mul!(f8, gg7)
                + mul!(f9, gg6),
            mul!(f0, g6) + mul!(ff1, g5) + mul!(f2, g4) + mul!(ff3, g3) + mul!(f4, g2)
                + mul!(ff5, g1) + mul!(f6, g0) + mul!(ff7, gg9) + mul!(f8, gg8)
                + mul!(ff9, gg7),
            mul!(f0, g7) + mul!(f1, g6) + mul!(f2, g5) + mul!(f3, g4) + mul!(f4, g3)
                + mul!(f5, g2) + mul!(f6, g1) + mul!(f7, g0) + mul!(f8, gg9)
                + mul!(f9, gg8),
            mul!(f0, g8) + mul!(ff1, g7) + mul!(f2, g6) + mul!(ff3, g5) + mul!(f4, g4)
                + mul!(ff5, g3) + mul!(f6, g2) + mul!(ff7, g1) + mul!(f8, g0)
                + mul!(ff9, gg9),
            mul!(f0, g9) + mul!(f1, g8) + mul!(f2, g7) + mul!(f3, g6) + mul!(f4, g5)
                + mul!(f5, g4) + mul!(f6, g3) + mul!(f7, g2) + mul!(f8, g1)
                + mul!(f9, g0),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fe(n: i32) -> FieldElement {
        FieldElement([n, 0, 0, 0, 0, 0, 0, 0, 0, 0])
    }

    #[test]
    fn sqrtm1_squares_to_minus_one() {
        let m1 = SQRTM1.square();
        assert_eq!(m1.ct_eq(&-FieldElement::ONE), 1);
    }

    #[test]
    fn invert_is_multiplicative_inverse() {
        let x = fe(12345678) * D;
        let product = x * x.invert();
        assert_eq!(product.to_bytes(), FieldElement::ONE.to_bytes());
        assert_eq!(FieldElement::ZERO.invert().to_bytes(), [0u8; 32]);
    }

    #[test]
    fn invsqrt_detects_squares() {
        let x = fe(9);
        let (isr, is_square) = x.invsqrt();
        assert!(is_square);
        assert_eq!((isr.square() * x).to_bytes(), FieldElement::ONE.to_bytes());

        // 2 is not a square modulo p
        let (_, is_square) = fe(2).invsqrt();
        assert!(!is_square);
    }

    #[test]
    fn encoding_is_canonical() {
        // p + 3 decodes to 3
        let mut p_plus_3 = [0xffu8; 32];
        p_plus_3[0] = 0xed + 3;
        p_plus_3[31] = 0x7f;
        let x = FieldElement::from_bytes(&p_plus_3);
        assert_eq!(x.to_bytes(), fe(3).to_bytes());

        // -1 encodes as p - 1
        let minus_one = (-FieldElement::ONE).to_bytes();
        assert_eq!(minus_one[0], 0xec);
        assert_eq!(minus_one[31], 0x7f);
    }

    #[test]
    fn a_squared_matches() {
        assert_eq!((A * A).to_bytes(), A2.to_bytes());
        assert_eq!(fe(486662).square().to_bytes(), A2.to_bytes());
    }

    #[test]
    fn swap_and_move_are_conditional() {
        let mut a = fe(1);
        let mut b = fe(2);
        a.swap(&mut b, 0);
        assert_eq!(a.0[0], 1);
        a.swap(&mut b, 1);
        assert_eq!((a.0[0], b.0[0]), (2, 1));
        a.conditional_move(&b, 1);
        assert_eq!(a.0[0], 1);
    }
}
