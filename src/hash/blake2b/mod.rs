//! BLAKE2b cryptographic hash (RFC 7693).
//!
//! BLAKE2b compresses 128-byte blocks through 12 rounds of the G mixing
//! function. It is the default hash of this crate: EdDSA signatures, the
//! Argon2 key derivation function and its variable-length `H'` construction
//! are all built on it.
//!
//! # Example
//!
//! ```rust
//! use microsui_crypto::hash::blake2b::Blake2b;
//!
//! let mut ctx = Blake2b::new(32);
//! ctx.update(b"hello ");
//! ctx.update(b"world");
//! let mut digest = [0u8; 32];
//! ctx.finalize(&mut digest);
//! ```

mod core;
pub(crate) mod extended;

pub use self::core::{Blake2b, blake2b, blake2b_keyed};
pub(crate) use self::core::blake2b_64;
