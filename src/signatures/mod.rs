//! Digital signatures over Edwards25519.
//!
//! - `eddsa`: EdDSA with BLAKE2b-512, the default
//! - `ed25519`: Ed25519 and Ed25519ph with SHA-512 (RFC 8032)
//!
//! Both share key generation, signing and the verification equation; only
//! the hash (and, for Ed25519ph, a domain prefix) differs.

pub mod ed25519;
pub mod eddsa;

pub use self::ed25519::{
    ed25519_check, ed25519_key_pair, ed25519_ph_check, ed25519_ph_sign, ed25519_sign,
};
pub use self::eddsa::{eddsa_check, eddsa_check_equation, eddsa_key_pair, eddsa_sign};
