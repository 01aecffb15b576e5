//! Ed25519 and Ed25519ph signatures (RFC 8032).
//!
//! Compatible with every RFC 8032 implementation. Keys have the same
//! layout as in [`eddsa`](super::eddsa): the 64-byte secret key is
//! `seed ‖ public_key`.
//!
//! Ed25519ph signs a 64-byte SHA-512 hash of the message instead of the
//! message itself, with the domain prefix
//! `"SigEd25519 no Ed25519 collisions" ‖ 0x01 ‖ 0x00`. Hashing the message
//! is the caller's job.

use super::eddsa::core::{EddsaHash, challenge, key_pair, sign};
use super::eddsa::eddsa_check_equation;
use crate::error::Result;
use crate::hash::sha512::Sha512;

/// SHA-512, as mandated by RFC 8032.
struct Sha512Hash;

impl EddsaHash for Sha512Hash {
    fn digest(parts: &[&[u8]]) -> [u8; 64] {
        let mut ctx = Sha512::new();
        for part in parts {
            ctx.update(part);
        }
        ctx.finalize()
    }
}

/// Ed25519ph domain separation: `dom2(1, "")`.
const PH_DOMAIN: &[u8; 34] = b"SigEd25519 no Ed25519 collisions\x01\x00";

/// Generates an Ed25519 key pair from a random seed, wiping the seed.
pub fn ed25519_key_pair(seed: &mut [u8; 32]) -> ([u8; 64], [u8; 32]) {
    key_pair::<Sha512Hash>(seed)
}

/// Signs `message` with Ed25519.
pub fn ed25519_sign(secret_key: &[u8; 64], message: &[u8]) -> [u8; 64] {
    sign::<Sha512Hash>(secret_key, &[], message)
}

/// Verifies an Ed25519 signature.
///
/// # Errors
///
/// See [`eddsa_check_equation`].
pub fn ed25519_check(signature: &[u8; 64], public_key: &[u8; 32], message: &[u8]) -> Result<()> {
    let h = challenge::<Sha512Hash>(signature, public_key, &[], message);
    eddsa_check_equation(signature, public_key, &h)
}

/// Signs the SHA-512 hash of a message with Ed25519ph.
pub fn ed25519_ph_sign(secret_key: &[u8; 64], message_hash: &[u8; 64]) -> [u8; 64] {
    sign::<Sha512Hash>(secret_key, PH_DOMAIN, message_hash)
}

/// Verifies an Ed25519ph signature of a SHA-512 message hash.
///
/// # Errors
///
/// See [`eddsa_check_equation`].
pub fn ed25519_ph_check(
    signature: &[u8; 64],
    public_key: &[u8; 32],
    message_hash: &[u8; 64],
) -> Result<()> {
    let h = challenge::<Sha512Hash>(signature, public_key, PH_DOMAIN, message_hash);
    eddsa_check_equation(signature, public_key, &h)
}
