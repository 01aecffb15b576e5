//! Arithmetic modulo the group order
//!
//! ```text
//! L = 2^252 + 27742317777372353535851937790883648493
//! ```
//!
//! Scalars are handled as 8 little-endian `u32` words (16 for double-width
//! products). Two reductions are provided:
//!
//! - Barrett reduction (`mod_l`) for arbitrary 512-bit inputs, used to
//!   reduce hashes and products
//! - Montgomery reduction (`redc`) for the repeated multiplications of
//!   scalar inversion
//!
//! Everything here runs in constant time.

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::utils::bytes::{load32_le, load32_le_buf, store32_le, store32_le_buf};

/// The group order L.
pub(crate) const L: [u32; 8] = [
    0x5cf5d3ed, 0x5812631a, 0xa2f79cd6, 0x14def9de, 0x00000000, 0x00000000, 0x00000000,
    0x10000000,
];

/// L − 2, the exponent of Fermat inversion.
const L_MINUS_2: [u8; 32] = [
    0xeb, 0xd3, 0xf5, 0x5c, 0x1a, 0x63, 0x12, 0x58, 0xd6, 0x9c, 0xf7, 0xa2, 0xde, 0xf9, 0xde,
    0x14, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x10,
];

/// Bit `i` of a little-endian scalar. Negative positions read as 0.
#[inline(always)]
pub(crate) fn scalar_bit(s: &[u8; 32], i: i32) -> i32 {
    if i < 0 {
        return 0;
    }
    ((s[(i >> 3) as usize] >> (i & 7)) & 1) as i32
}

/// `p += a · b`, with `p[8..]` assumed zero on entry.
pub(crate) fn multiply(p: &mut [u32; 16], a: &[u32; 8], b: &[u32; 8]) {
    for i in 0..8 {
        let mut carry = 0u64;
        for j in 0..8 {
            carry += p[i + j] as u64 + a[i] as u64 * b[j] as u64;
            p[i + j] = carry as u32;
            carry >>= 32;
        }
        p[i + 8] = carry as u32;
    }
}

/// Returns 1 if `x ≥ L`, 0 otherwise.
///
/// Adds the two's complement of L and keeps the final carry.
pub(crate) fn is_above_l(x: &[u32; 8]) -> u32 {
    let mut carry = 1u64;
    for i in 0..8 {
        carry += x[i] as u64 + (!L[i]) as u64;
        carry >>= 32;
    }
    carry as u32
}

/// Subtracts L once if `x ≥ L`. Only correct for `x < 2L`.
fn remove_l(x: &[u32]) -> [u32; 8] {
    let mut words = [0u32; 8];
    words.copy_from_slice(&x[..8]);

    let mut carry = is_above_l(&words) as u64;
    let mask = 0u32.wrapping_sub(carry as u32);
    let mut r = [0u32; 8];
    for i in 0..8 {
        carry += words[i] as u64 + (!L[i] & mask) as u64;
        r[i] = carry as u32;
        carry >>= 32;
    }
    words.zeroize();
    r
}

/// Full reduction modulo L (Barrett).
///
/// Computes `q = ⌊x · r / 2^512⌋` with `r = ⌊2^512 / L⌋`, then
/// `x − q·L`, which lands below 2L and needs one conditional subtraction.
fn mod_l(x: &[u32; 16]) -> [u32; 8] {
    const R: [u32; 9] = [
        0x0a2c131b, 0xed9ce5a3, 0x086329a7, 0x2106215d, 0xffffffeb, 0xffffffff, 0xffffffff,
        0xffffffff, 0xf,
    ];

    // xr = x * r
    let mut xr = [0u32; 25];
    for i in 0..9 {
        let mut carry = 0u64;
        for j in 0..16 {
            carry += xr[i + j] as u64 + R[i] as u64 * x[j] as u64;
            xr[i + j] = carry as u32;
            carry >>= 32;
        }
        xr[i + 16] = carry as u32;
    }

    // xr = floor(xr / 2^512) * L, low 256 bits only
    xr[..8].fill(0);
    for i in 0..8 {
        let mut carry = 0u64;
        for j in 0..(8 - i) {
            carry += xr[i + j] as u64 + xr[i + 16] as u64 * L[j] as u64;
            xr[i + j] = carry as u32;
            carry >>= 32;
        }
    }

    // xr = x - xr
    let mut carry = 1u64;
    for i in 0..8 {
        carry += x[i] as u64 + (!xr[i]) as u64;
        xr[i] = carry as u32;
        carry >>= 32;
    }

    let reduced = remove_l(&xr[..8]);
    xr.zeroize();
    reduced
}

/// Montgomery reduction: `x / 2^256 mod L`, for `x < L · 2^256`.
///
/// With `k = −1/L mod 2^256`, `s = x·k mod 2^256` makes `x + s·L` a
/// multiple of 2^256, and the quotient is below 2L.
pub(crate) fn redc(x: &[u32; 16]) -> [u32; 8] {
    const K: [u32; 8] = [
        0x12547e1b, 0xd2b51da3, 0xfdba84ff, 0xb1a206f2, 0xffa36bea, 0x14e75438, 0x6fe91836,
        0x9db6c6f2,
    ];

    // s = x * k (modulo 2^256)
    let mut s = [0u32; 8];
    for i in 0..8 {
        let mut carry = 0u64;
        for j in 0..(8 - i) {
            carry += s[i + j] as u64 + x[i] as u64 * K[j] as u64;
            s[i + j] = carry as u32;
            carry >>= 32;
        }
    }

    let mut t = [0u32; 16];
    multiply(&mut t, &s, &L);

    let mut carry = 0u64;
    for i in 0..16 {
        carry += t[i] as u64 + x[i] as u64;
        t[i] = carry as u32;
        carry >>= 32;
    }

    let u = remove_l(&t[8..]);
    s.zeroize();
    t.zeroize();
    u
}

/// `s += (x mod 8) · L`.
///
/// Leaves `s` unchanged modulo L while setting its value modulo 8. Fits in
/// 256 bits as long as `s < 2^255`.
pub(crate) fn add_xl(s: &mut [u8; 32], x: u8) {
    let mod8 = (x & 7) as u64;
    let mut carry = 0u64;
    for i in 0..8 {
        carry = carry + load32_le(&s[4 * i..]) as u64 + L[i] as u64 * mod8;
        store32_le(&mut s[4 * i..], carry as u32);
        carry >>= 32;
    }
}

/// Clamps a 32-byte secret into an X25519 / EdDSA scalar.
///
/// Clears the 3 low bits (cofactor) and the top bit, and sets bit 254.
pub fn eddsa_trim_scalar(input: &[u8; 32]) -> [u8; 32] {
    let mut out = *input;
    out[0] &= 248;
    out[31] &= 127;
    out[31] |= 64;
    out
}

/// Reduces a 64-byte little-endian number (usually a hash) modulo L.
///
/// # Parameters
///
/// - `expanded`: any 512-bit value, typically a SHA-512 or BLAKE2b digest
///
/// # Notes
///
/// The result is canonical (below L), so reducing it again is a no-op.
/// Constant time.
pub fn eddsa_reduce(expanded: &[u8; 64]) -> [u8; 32] {
    let mut x = [0u32; 16];
    load32_le_buf(&mut x, expanded);
    let mut reduced = mod_l(&x);

    let mut out = [0u8; 32];
    store32_le_buf(&mut out, &reduced);
    x.zeroize();
    reduced.zeroize();
    out
}

/// Computes `(a · b + c) mod L`.
///
/// # Parameters
///
/// - `a`, `b`: factors, any 256-bit values
/// - `c`: addend, any 256-bit value
///
/// # Notes
///
/// Used for the signature scalar `r + h·a`. The 512-bit product never
/// overflows because `a · b + c < 2^512`.
pub fn eddsa_mul_add(a: &[u8; 32], b: &[u8; 32], c: &[u8; 32]) -> [u8; 32] {
    let mut aw = [0u32; 8];
    let mut bw = [0u32; 8];
    let mut p = [0u32; 16];
    load32_le_buf(&mut aw, a);
    load32_le_buf(&mut bw, b);
    load32_le_buf(&mut p[..8], c);

    multiply(&mut p, &aw, &bw);
    let mut reduced = mod_l(&p);

    let mut out = [0u8; 32];
    store32_le_buf(&mut out, &reduced);
    aw.zeroize();
    bw.zeroize();
    p.zeroize();
    reduced.zeroize();
    out
}

/// A scalar modulo L, wiped on drop.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Scalar([u8; 32]);

impl Scalar {
    /// Reduces a 256-bit little-endian value modulo L.
    pub fn from_bytes_mod_order(bytes: &[u8; 32]) -> Self {
        let mut wide = [0u8; 64];
        wide[..32].copy_from_slice(bytes);
        let out = Scalar(eddsa_reduce(&wide));
        wide.zeroize();
        out
    }

    /// Canonical little-endian encoding.
    pub fn to_bytes(&self) -> [u8; 32] {
        self.0
    }

    /// Multiplicative inverse modulo L (zero maps to zero).
    ///
    /// Computes `self^(L−2)` with a square-and-multiply ladder in Montgomery
    /// form, so that every step reduces with [`redc`]. The exponent is
    /// public, so the ladder may branch on its bits.
    pub fn invert(&self) -> Self {
        // 1 in Montgomery form (2^256 mod L)
        let mut m_inv: [u32; 8] = [
            0x8d98951d, 0xd6ec3174, 0x737dcf70, 0xc6ef5bf4, 0xfffffffe, 0xffffffff, 0xffffffff,
            0x0fffffff,
        ];

        // m_scl = self * 2^256 (modulo L)
        let mut tmp = [0u32; 16];
        load32_le_buf(&mut tmp[8..], &self.0);
        let mut m_scl = mod_l(&tmp);

        let mut product = [0u32; 16];
        for i in (0..=252).rev() {
            product.fill(0);
            multiply(&mut product, &m_inv, &m_inv);
            m_inv = redc(&product);
            if scalar_bit(&L_MINUS_2, i) == 1 {
                product.fill(0);
                multiply(&mut product, &m_inv, &m_scl);
                m_inv = redc(&product);
            }
        }

        // Back out of Montgomery form
        product.fill(0);
        product[..8].copy_from_slice(&m_inv);
        m_inv = redc(&product);

        let mut out = [0u8; 32];
        store32_le_buf(&mut out, &m_inv);

        tmp.zeroize();
        m_scl.zeroize();
        product.zeroize();
        m_inv.zeroize();
        Scalar(out)
    }
}
