//! Authenticated encryption with associated data.
//!
//! ChaCha20 encrypts, Poly1305 authenticates, with the framing of RFC 8439:
//!
//! ```text
//! keys   = ChaCha20(key, nonce, counter)            first 64 keystream bytes
//! ct     = ChaCha20(key, nonce, counter + 1) ⊕ pt
//! tag    = Poly1305(keys[0..32],
//!                   ad ‖ pad16 ‖ ct ‖ pad16 ‖ le64(|ad|) ‖ le64(|ct|))
//! key'   = keys[32..64]
//! ```
//!
//! With an IETF nonce and a single message this is exactly RFC 8439
//! ChaCha20-Poly1305; with a 24-byte nonce it is XChaCha20-Poly1305.
//!
//! [`AeadContext`] turns the construction into a ratchet: the unused second
//! half of the first keystream block replaces the key after each message.
//! Messages must then be read in the order they were written.
//!
//! ## Security
//!
//! - Tags are compared in constant time.
//! - On authentication failure nothing is decrypted and the context is not
//!   modified.
//! - Nonce reuse under the same key is catastrophic.

mod core;

pub use self::core::{AeadContext, lock, unlock};
