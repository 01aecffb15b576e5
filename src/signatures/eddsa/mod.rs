//! EdDSA over Edwards25519 with BLAKE2b-512.
//!
//! Same curve and equations as Ed25519 (RFC 8032), with BLAKE2b in place
//! of SHA-512. Signatures are not interchangeable with Ed25519 ones; see
//! [`ed25519`](super::ed25519) for the standard flavour.
//!
//! Keys:
//!
//! - secret key: 64 bytes, `seed ‖ public_key`
//! - public key: 32 bytes, the encoded point `[scalar]B`
//!
//! Signatures are 64 bytes: `R ‖ S`.
//!
//! Verification is strict on `S` (it must be below L, which rules out
//! malleability) and cofactored (`[8]R == [8]([S]B − [h]A)`).

pub(crate) mod core;
mod verify;

pub use self::core::{eddsa_key_pair, eddsa_sign};
pub use self::verify::{eddsa_check, eddsa_check_equation};
