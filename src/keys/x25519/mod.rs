//! X25519 key exchange and related Curve25519 operations.
//!
//! Structure:
//!
//! - `core`: the Montgomery ladder, [`x25519`] (RFC 7748) and
//!   [`x25519_public_key`]
//! - `dirty`: public keys that keep the cofactor, for use with Elligator 2
//! - `inverse`: multiplication by the inverse of a private scalar
//! - `convert`: maps between EdDSA and X25519 public keys

mod convert;
mod core;
mod dirty;
mod inverse;

pub use self::convert::{eddsa_to_x25519, x25519_to_eddsa};
pub use self::core::{x25519, x25519_public_key};
pub use self::dirty::{x25519_dirty_fast, x25519_dirty_small};
pub use self::inverse::x25519_inverse;
