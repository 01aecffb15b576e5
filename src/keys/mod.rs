//! Curve25519 and Edwards25519 arithmetic.
//!
//! This module groups the asymmetric building blocks shared by key
//! exchange and signatures:
//!
//! - `field`: arithmetic modulo `p = 2²⁵⁵ − 19`, 10 limbs of 25.5 bits
//! - `scalar`: arithmetic modulo the prime group order `L`
//! - `group`: Edwards25519 points in extended coordinates, base point
//!   multiplication (constant time) and double scalar multiplication
//!   (variable time, for verification)
//! - `x25519`: the Montgomery ladder (RFC 7748) and its variants
//! - `elligator`: Elligator 2 encoding of Curve25519 points
//!
//! ## Constant time
//!
//! Everything that touches secrets is branch-free and free of
//! secret-indexed memory accesses. The only variable-time routines are
//! point decoding and the double scalar multiplication, which only ever
//! see public data (public keys, signatures).
//!
//! ## Low level API
//!
//! `eddsa_trim_scalar`, `eddsa_reduce`, `eddsa_mul_add` and
//! `eddsa_scalarbase` are exposed to build custom EdDSA variants (other
//! hashes, prehashing, threshold schemes). Misuse is easy; prefer the
//! `signatures` module.

pub mod elligator;
pub(crate) mod field;
pub(crate) mod group;
pub mod scalar;
mod table;
pub mod x25519;

pub use self::elligator::{elligator_key_pair, elligator_map, elligator_rev};
pub use self::group::eddsa_scalarbase;
pub use self::scalar::{Scalar, eddsa_mul_add, eddsa_reduce, eddsa_trim_scalar};
pub use self::x25519::{
    eddsa_to_x25519, x25519, x25519_dirty_fast, x25519_dirty_small, x25519_inverse,
    x25519_public_key, x25519_to_eddsa,
};
