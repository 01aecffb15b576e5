//! Constant-time cryptographic primitives for embedded signers.
//!
//! This crate provides the cryptographic core of the MicroSui stack: the
//! primitives needed to derive keys, encrypt data and sign messages on
//! small devices, without leaking secrets through timing or memory access
//! patterns.
//!
//! The focus is on **clarity, predictability, and auditability**. Every
//! operation is a synchronous function over caller-owned buffers. Nothing
//! here allocates except [`derivation::Block::new_area`], a convenience for
//! callers that have an allocator.
//!
//! # Module overview
//!
//! - `encryption`
//!   ChaCha20 (djb, IETF and X nonces) and HChaCha20, Poly1305, and an
//!   authenticated encryption ratchet built from both.
//!
//! - `hash`
//!   BLAKE2b (keyed and streaming), SHA-512, HMAC-SHA-512 and HKDF-SHA-512.
//!
//! - `derivation`
//!   Argon2d, Argon2i and Argon2id over a caller-provided work area.
//!
//! - `keys`
//!   Field and scalar arithmetic for Curve25519, X25519 key exchange and
//!   its variants, Edwards25519 base point multiplication, and Elligator 2.
//!
//! - `signatures`
//!   EdDSA with BLAKE2b, and Ed25519 / Ed25519ph with SHA-512.
//!
//! - `utils`
//!   Constant-time comparisons and the secret wipe primitive.
//!
//! # Errors
//!
//! Fallible operations return [`Result`]. Errors carry no secret data and
//! are never logged.
//!
//! # Secret wiping
//!
//! Contexts and intermediate buffers holding secrets are wiped when they
//! go out of scope. Outputs (keys, shared secrets) are returned by value;
//! wiping them is the caller's job ([`utils::wipe`] or `zeroize`).
//!
//! # Logging
//!
//! The crate emits a few `tracing` events at trace level, with public data
//! only (Argon2 parameters, Elligator retry counts). No subscriber is
//! installed.

pub mod derivation;
pub mod encryption;
pub mod error;
pub mod hash;
pub mod keys;
pub mod signatures;
pub mod utils;

pub use error::{Argon2ConfigError, Error, Result};
