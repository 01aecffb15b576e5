//! SHA-512 (FIPS 180-4).
//!
//! SHA-512 is the only big-endian primitive of the crate. It backs the
//! RFC 8032 Ed25519 signatures, HMAC-SHA-512 and HKDF-SHA-512.
//!
//! - `computations`: round constants and the 80-round block function
//! - `core`: the streaming [`Sha512`] state and the one-shot [`sha512`]

pub(crate) mod computations;
mod core;

pub use self::core::{Sha512, sha512};

/// SHA-512 initial hash value: first 64 bits of the fractional parts of the
/// square roots of the first 8 primes.
pub(crate) const H512_INIT: [u64; 8] = [
    0x6a09e667f3bcc908,
    0xbb67ae8584caa73b,
    0x3c6ef372fe94f82b,
    0xa54ff53a5f1d36f1,
    0x510e527fade682d1,
    0x9b05688c2b3e6c1f,
    0x1f83d9abfb41bd6b,
    0x5be0cd19137e2179,
];
