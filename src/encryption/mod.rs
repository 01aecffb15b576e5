//! Symmetric encryption and authentication.
//!
//! - `chacha20`: the ChaCha20 stream cipher in its djb, IETF and X forms
//! - `poly1305`: the Poly1305 one-time authenticator
//! - `aead`: ChaCha20-Poly1305 with per-message key ratcheting

pub mod aead;
pub mod chacha20;
pub mod poly1305;
