use zeroize::{Zeroize, Zeroizing};

use crate::hash::blake2b::blake2b_64;
use crate::keys::group::eddsa_scalarbase;
use crate::keys::scalar::{eddsa_mul_add, eddsa_reduce, eddsa_trim_scalar};
use crate::utils::bytes::array_from;

/// The 64-byte hash an EdDSA instance is built on.
///
/// Implemented by zero-sized markers. The hash sees the concatenation of
/// `parts`; a domain separation prefix, when used, is the first part.
pub(crate) trait EddsaHash {
    fn digest(parts: &[&[u8]]) -> [u8; 64];

    /// Hashes `parts` and reduces the result modulo L.
    fn digest_reduce(parts: &[&[u8]]) -> [u8; 32] {
        let hash = Zeroizing::new(Self::digest(parts));
        eddsa_reduce(&hash)
    }
}

/// BLAKE2b-512, the default hash.
pub(crate) struct Blake2bHash;

impl EddsaHash for Blake2bHash {
    fn digest(parts: &[&[u8]]) -> [u8; 64] {
        blake2b_64(parts)
    }
}

/// Derives `(secret_key, public_key)` from `seed` with the hash `H`.
///
/// The secret key is `seed ‖ public_key`. The public key is bundled with
/// the seed so signing never uses a mismatched pair.
pub(crate) fn key_pair<H: EddsaHash>(seed: &mut [u8; 32]) -> ([u8; 64], [u8; 32]) {
    let mut a = Zeroizing::new([0u8; 64]);
    a[..32].copy_from_slice(seed);
    seed.zeroize();

    let mut secret_key = [0u8; 64];
    secret_key[..32].copy_from_slice(&a[..32]);

    *a = H::digest(&[&a[..32]]);
    let scalar = Zeroizing::new(eddsa_trim_scalar(&array_from(&a[..32])));
    let public_key = eddsa_scalarbase(&scalar);
    secret_key[32..].copy_from_slice(&public_key);

    (secret_key, public_key)
}

/// Signs `message` with the hash `H`, prefixing every hash input with
/// `dom`.
///
/// ```text
/// scalar, prefix = H(seed)
/// r = H(dom ‖ prefix ‖ message) mod L
/// R = [r]B
/// h = H(dom ‖ R ‖ public_key ‖ message) mod L
/// S = (h·scalar + r) mod L
/// ```
pub(crate) fn sign<H: EddsaHash>(secret_key: &[u8; 64], dom: &[u8], message: &[u8]) -> [u8; 64] {
    let a = Zeroizing::new(H::digest(&[&secret_key[..32]]));
    let scalar = Zeroizing::new(eddsa_trim_scalar(&array_from(&a[..32])));
    let r = Zeroizing::new(H::digest_reduce(&[dom, &a[32..], message]));

    let big_r = eddsa_scalarbase(&r);
    let h = H::digest_reduce(&[dom, &big_r, &secret_key[32..], message]);

    let mut signature = [0u8; 64];
    signature[..32].copy_from_slice(&big_r);
    signature[32..].copy_from_slice(&eddsa_mul_add(&h, &scalar, &r));
    signature
}

/// Computes the `h` verification scalar for `signature` with the hash `H`.
pub(crate) fn challenge<H: EddsaHash>(
    signature: &[u8; 64],
    public_key: &[u8; 32],
    dom: &[u8],
    message: &[u8],
) -> [u8; 32] {
    H::digest_reduce(&[dom, &signature[..32], public_key, message])
}

/// Generates an EdDSA key pair (BLAKE2b flavour) from a random seed.
///
/// The seed is wiped. The returned secret key is `seed ‖ public_key`.
///
/// # Security
///
/// The seed must come from a CSPRNG. The secret key must stay secret; the
/// public key can be published.
pub fn eddsa_key_pair(seed: &mut [u8; 32]) -> ([u8; 64], [u8; 32]) {
    key_pair::<Blake2bHash>(seed)
}

/// Signs `message` with EdDSA over Edwards25519 and BLAKE2b-512.
///
/// Signing is deterministic: the nonce is derived from the secret key and
/// the message, so no randomness is needed and none can be misused.
pub fn eddsa_sign(secret_key: &[u8; 64], message: &[u8]) -> [u8; 64] {
    sign::<Blake2bHash>(secret_key, &[], message)
}
