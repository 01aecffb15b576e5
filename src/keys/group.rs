//! Group operations on the twisted Edwards curve Edwards25519.
//!
//! ```text
//! −x² + y² = 1 + d·x²·y²
//! ```
//!
//! ## Representations
//!
//! - [`Point`]: extended coordinates `(X : Y : Z : T)` with `x = X/Z`,
//!   `y = Y/Z` and `T = XY/Z`
//! - [`CachedPoint`]: `(Y + X, Y − X, Z, 2d·T)`, the right-hand side of an
//!   addition
//! - [`PrecomputedPoint`]: the same with `Z = 1`, used for the base point
//!   tables
//!
//! ## Scalar multiplication
//!
//! - [`scalarmult_base`]: fixed base, constant time, twin 4-bit signed combs
//! - [`double_scalarmult_vartime`]: `[s]B + [h]P` with fused sliding
//!   windows, for signature verification only (variable time)

use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use super::field::{D, D2, FieldElement};
use super::scalar::{eddsa_mul_add, scalar_bit};
use super::table::{B_COMB_HIGH, B_COMB_LOW, B_WINDOW};

/// A point in extended twisted Edwards coordinates. Wiped on drop.
#[derive(Clone, Debug, Zeroize, ZeroizeOnDrop)]
pub(crate) struct Point {
    pub(crate) x: FieldElement,
    pub(crate) y: FieldElement,
    pub(crate) z: FieldElement,
    pub(crate) t: FieldElement,
}

/// A point prepared to be added: `(Y + X, Y − X, Z, 2d·T)`. Wiped on drop.
#[derive(Clone, Debug, Zeroize, ZeroizeOnDrop)]
pub(crate) struct CachedPoint {
    pub(crate) yp: FieldElement,
    pub(crate) ym: FieldElement,
    pub(crate) z: FieldElement,
    pub(crate) t2: FieldElement,
}

/// An affine point prepared to be added: `(y + x, y − x, 2d·x·y)`.
///
/// Wiped on drop. The base point tables are `static`, so they are never
/// dropped.
#[derive(Clone, Debug, Zeroize, ZeroizeOnDrop)]
pub(crate) struct PrecomputedPoint {
    pub(crate) yp: FieldElement,
    pub(crate) ym: FieldElement,
    pub(crate) t2: FieldElement,
}

impl CachedPoint {
    fn neg(&self) -> Self {
        CachedPoint {
            yp: self.ym,
            ym: self.yp,
            z: self.z,
            t2: -self.t2,
        }
    }
}

impl PrecomputedPoint {
    fn neg(&self) -> Self {
        PrecomputedPoint {
            yp: self.ym,
            ym: self.yp,
            t2: -self.t2,
        }
    }

    /// Builds the precomputed form of the affine point `(x, y)`.
    pub(crate) fn from_affine(x: &FieldElement, y: &FieldElement) -> Self {
        PrecomputedPoint {
            yp: *y + *x,
            ym: *y - *x,
            t2: (*y * *x) * D2,
        }
    }
}

impl Point {
    /// The neutral element `(0, 1)`.
    pub(crate) fn identity() -> Self {
        Point {
            x: FieldElement::ZERO,
            y: FieldElement::ONE,
            z: FieldElement::ONE,
            t: FieldElement::ZERO,
        }
    }

    /// Encodes the point as `y` with the sign of `x` in the top bit.
    pub(crate) fn to_bytes(&self) -> [u8; 32] {
        let mut recip = self.z.invert();
        let mut x = self.x * recip;
        let mut y = self.y * recip;

        let mut s = y.to_bytes();
        s[31] ^= (x.is_odd() as u8) << 7;

        recip.zeroize();
        x.zeroize();
        y.zeroize();
        s
    }

    /// Decodes a point and returns its **negation**, or `None` if the bytes
    /// do not encode a curve point.
    ///
    /// Non-canonical encodings of `y` are accepted. Variable time: only use
    /// on public data.
    ///
    /// Recovers `x = √((y² − 1) / (d·y² + 1))` as `num · invsqrt(num·den)`,
    /// then picks the root whose sign is opposite to the encoded one.
    pub(crate) fn from_bytes_neg_vartime(s: &[u8; 32]) -> Option<Self> {
        let y = FieldElement::from_bytes(s);
        let z = FieldElement::ONE;

        let y2 = y.square();
        let num = y2 - z;
        let den = y2 * D + z;

        let (isr, is_square) = (num * den).invsqrt();
        if !is_square {
            return None;
        }

        let mut x = num * isr;
        if x.is_odd() == (s[31] >> 7) as u32 {
            x = -x;
        }
        let t = x * y;
        Some(Point { x, y, z, t })
    }

    /// Prepares the point to be the right-hand side of additions.
    pub(crate) fn cache(&self) -> CachedPoint {
        CachedPoint {
            yp: self.y + self.x,
            ym: self.y - self.x,
            z: self.z,
            t2: self.t * D2,
        }
    }

    /// Unified addition `self + q` (Hisil et al., "add-2008-hwcd-3").
    fn add_parts(
        &self,
        yp: &FieldElement,
        ym: &FieldElement,
        z2: FieldElement,
        t2: &FieldElement,
    ) -> Self {
        let a = (self.y + self.x) * *yp;
        let b = (self.y - self.x) * *ym;
        let sy = a + b;
        let sx = a - b;

        let sz = z2;
        let st = self.t * *t2;
        let a = sz + st;
        let b = sz - st;

        Point {
            t: sx * sy,
            x: sx * b,
            y: sy * a,
            z: a * b,
        }
    }

    /// `self + q`.
    pub(crate) fn add(&self, q: &CachedPoint) -> Self {
        self.add_parts(&q.yp, &q.ym, (self.z + self.z) * q.z, &q.t2)
    }

    /// `self − q`.
    pub(crate) fn sub(&self, q: &CachedPoint) -> Self {
        self.add(&q.neg())
    }

    /// `self + q`, with `q` affine.
    pub(crate) fn madd(&self, q: &PrecomputedPoint) -> Self {
        self.add_parts(&q.yp, &q.ym, self.z + self.z, &q.t2)
    }

    /// `self − q`, with `q` affine.
    pub(crate) fn msub(&self, q: &PrecomputedPoint) -> Self {
        self.madd(&q.neg())
    }

    /// `2 · self` ("dbl-2008-hwcd").
    pub(crate) fn double(&self) -> Self {
        let qx = self.x.square();
        let qy = self.y.square();
        let qz = self.z.square().mul_small(2);
        let sum_sq = (self.x + self.y).square();

        let qt = qy + qx;
        let qy = qy - qx;
        let qx = sum_sq - qt;
        let qz = qz - qy;

        Point {
            x: qx * qz,
            y: qt * qy,
            z: qy * qz,
            t: qx * qt,
        }
    }
}

/// Adds the comb entry selected by the four teeth at bits `i`, `i + 32`,
/// `i + 64` and `i + 96` of `scalar`, in constant time.
///
/// The scalar is in "all bits set" form, where a 0 bit stands for −1. The
/// top tooth picks the sign, the other three pick one of 8 entries.
fn lookup_add(p: &Point, comb: &[PrecomputedPoint; 8], scalar: &[u8; 32], i: i32) -> Point {
    let teeth = (scalar_bit(scalar, i)
        + (scalar_bit(scalar, i + 32) << 1)
        + (scalar_bit(scalar, i + 64) << 2)
        + (scalar_bit(scalar, i + 96) << 3)) as u8;
    let high = teeth >> 3;
    let index = (teeth ^ high.wrapping_sub(1)) & 7;

    let mut selected = PrecomputedPoint {
        yp: FieldElement::ONE,
        ym: FieldElement::ONE,
        t2: FieldElement::ZERO,
    };
    for (j, entry) in comb.iter().enumerate() {
        let select = (1 & (((j as i32) ^ (index as i32)) - 1) >> 8) as u32;
        selected.yp.conditional_move(&entry.yp, select);
        selected.ym.conditional_move(&entry.ym, select);
        selected.t2.conditional_move(&entry.t2, select);
    }

    // Negate the entry when the top tooth is clear
    let mut minus_t2 = -selected.t2;
    let flip = (high ^ 1) as u32;
    selected.t2.swap(&mut minus_t2, flip);
    selected.yp.swap(&mut selected.ym, flip);

    let sum = p.madd(&selected);
    minus_t2.zeroize();
    sum
}

/// `[scalar]B`, in constant time.
///
/// Twin 4-bit signed combs (Hamburg, "Fast and compact elliptic-curve
/// cryptography", 2012). The scalar is first rewritten as
/// `(scalar + (2^256 − 1)) / 2 mod L`, so that each bit selects +1 or −1.
/// All 256 bits are used, so scalars above 2^252 are handled too.
pub(crate) fn scalarmult_base(scalar: &[u8; 32]) -> Point {
    // 1 / 2 modulo L
    const HALF_MOD_L: [u8; 32] = [
        247, 233, 122, 46, 141, 49, 9, 44, 107, 206, 123, 81, 239, 124, 111, 10, 0, 0, 0, 0, 0,
        0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 8,
    ];
    // (2^256 - 1) / 2 modulo L
    const HALF_ONES: [u8; 32] = [
        142, 74, 204, 70, 186, 24, 118, 107, 184, 231, 190, 57, 250, 173, 119, 99, 255, 255, 255,
        255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 7,
    ];

    let s_scalar = Zeroizing::new(eddsa_mul_add(scalar, &HALF_MOD_L, &HALF_ONES));

    // Save a double on the first iteration
    let mut p = Point::identity();
    p = lookup_add(&p, &B_COMB_LOW, &s_scalar, 31);
    p = lookup_add(&p, &B_COMB_HIGH, &s_scalar, 31 + 128);

    for i in (0..31).rev() {
        p = p.double();
        p = lookup_add(&p, &B_COMB_LOW, &s_scalar, i);
        p = lookup_add(&p, &B_COMB_HIGH, &s_scalar, i + 128);
    }
    p
}

/// Computes `[scalar]B` and encodes the result.
///
/// # Parameters
///
/// - `scalar`: any 256-bit little-endian scalar, reduced or not
///
/// # Notes
///
/// Constant time. This is the public key of a trimmed EdDSA secret.
pub fn eddsa_scalarbase(scalar: &[u8; 32]) -> [u8; 32] {
    scalarmult_base(scalar).to_bytes()
}

/// Incremental left-to-right signed sliding window (Avanzi, 2005).
///
/// Yields, bit position by bit position from the top, the odd signed digit
/// that ends at that position, or 0.
struct Slide {
    next_index: i32,
    next_digit: i32,
    next_check: i32,
}

impl Slide {
    /// Starts at the highest set bit. The scalar must be below 2^253.
    fn new(scalar: &[u8; 32]) -> Self {
        let mut i = 252;
        while i > 0 && scalar_bit(scalar, i) == 0 {
            i -= 1;
        }
        Slide {
            next_index: -1,
            next_digit: -1,
            next_check: i + 1,
        }
    }

    fn step(&mut self, width: i32, i: i32, scalar: &[u8; 32]) -> i32 {
        if i == self.next_check {
            if scalar_bit(scalar, i) == scalar_bit(scalar, i - 1) {
                self.next_check -= 1;
            } else {
                // Digit of the next window
                let w = width.min(i + 1);
                let mut v = -(scalar_bit(scalar, i) << (w - 1));
                for j in 0..(w - 1) {
                    v += scalar_bit(scalar, i - (w - 1) + j) << j;
                }
                v += scalar_bit(scalar, i - w);

                let lsb = v & (!v + 1);
                let s = (((lsb & 0xAA) != 0) as i32)
                    | ((((lsb & 0xCC) != 0) as i32) << 1)
                    | ((((lsb & 0xF0) != 0) as i32) << 2);
                self.next_index = i - (w - 1) + s;
                self.next_digit = v >> s;
                self.next_check -= w;
            }
        }
        if i == self.next_index {
            self.next_digit
        } else {
            0
        }
    }
}

/// Window width for the variable point.
const P_W_WIDTH: i32 = 3;
/// Window width for the base point (matches [`B_WINDOW`]).
const B_W_WIDTH: i32 = 5;
const P_W_SIZE: usize = 1 << (P_W_WIDTH - 2);

/// Computes `[s]B + [h]P`, with `s` and `h` below 2^253.
///
/// # Parameters
///
/// - `h`: scalar for the variable point, width-3 window
/// - `p`: the variable point, usually a decoded (negated) public key
/// - `s`: scalar for the base point, width-5 window over [`B_WINDOW`]
///
/// # Notes
///
/// A single double-and-add ladder shared by both scalars. Variable time:
/// only use on public data.
pub(crate) fn double_scalarmult_vartime(h: &[u8; 32], p: &Point, s: &[u8; 32]) -> Point {
    // Odd multiples of P
    let p2 = p.double();
    let mut lut: [CachedPoint; P_W_SIZE] = core::array::from_fn(|_| p.cache());
    for i in 1..P_W_SIZE {
        lut[i] = p2.add(&lut[i - 1]).cache();
    }

    let mut h_slide = Slide::new(h);
    let mut s_slide = Slide::new(s);
    let mut i = h_slide.next_check.max(s_slide.next_check);

    let mut sum = Point::identity();
    while i >= 0 {
        sum = sum.double();

        let h_digit = h_slide.step(P_W_WIDTH, i, h);
        let s_digit = s_slide.step(B_W_WIDTH, i, s);
        if h_digit > 0 {
            sum = sum.add(&lut[(h_digit / 2) as usize]);
        }
        if h_digit < 0 {
            sum = sum.sub(&lut[(-h_digit / 2) as usize]);
        }
        if s_digit > 0 {
            sum = sum.madd(&B_WINDOW[(s_digit / 2) as usize]);
        }
        if s_digit < 0 {
            sum = sum.msub(&B_WINDOW[(-s_digit / 2) as usize]);
        }
        i -= 1;
    }
    sum
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE_POINT: [u8; 32] = [
        0x58, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66,
        0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66,
        0x66, 0x66,
    ];

    fn small(n: u8) -> [u8; 32] {
        let mut s = [0u8; 32];
        s[0] = n;
        s
    }

    #[test]
    fn scalarbase_one_is_base_point() {
        assert_eq!(eddsa_scalarbase(&small(1)), BASE_POINT);
        assert_eq!(Point::identity().to_bytes(), small(1));
        assert_eq!(eddsa_scalarbase(&small(0)), small(1));
    }

    #[test]
    fn double_matches_addition() {
        let b = scalarmult_base(&small(1));
        assert_eq!(b.double().to_bytes(), b.add(&b.cache()).to_bytes());
        assert_eq!(b.double().to_bytes(), eddsa_scalarbase(&small(2)));
    }

    #[test]
    fn decoding_negates() {
        let minus_b = Point::from_bytes_neg_vartime(&BASE_POINT).unwrap();
        let b = scalarmult_base(&small(1));
        assert_eq!(b.add(&minus_b.cache()).to_bytes(), small(1));
    }

    #[test]
    fn double_scalarmult_matches_base_mult() {
        // [5]B + [3](-B) = [2]B
        let minus_b = Point::from_bytes_neg_vartime(&BASE_POINT).unwrap();
        let sum = double_scalarmult_vartime(&small(3), &minus_b, &small(5));
        assert_eq!(sum.to_bytes(), eddsa_scalarbase(&small(2)));

        // Wider scalars
        let sum = double_scalarmult_vartime(&small(200), &minus_b, &small(251));
        assert_eq!(sum.to_bytes(), eddsa_scalarbase(&small(51)));
    }

    #[test]
    fn rejects_points_off_curve() {
        // y = 2 has no matching x
        assert!(Point::from_bytes_neg_vartime(&small(2)).is_none());
    }

    fn wiped_on_drop<T: ZeroizeOnDrop>() {}

    #[test]
    fn point_temporaries_wipe_on_drop() {
        wiped_on_drop::<Point>();
        wiped_on_drop::<CachedPoint>();
        wiped_on_drop::<PrecomputedPoint>();

        let mut cached = scalarmult_base(&small(7)).cache();
        cached.zeroize();
        for fe in [&cached.yp, &cached.ym, &cached.z, &cached.t2] {
            assert_eq!(fe.to_bytes(), [0u8; 32]);
        }
    }
}
