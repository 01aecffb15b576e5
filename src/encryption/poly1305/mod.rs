//! Poly1305 one-time message authentication code (RFC 8439).
//!
//! Poly1305 evaluates the message, split into 16-byte blocks, as a
//! polynomial modulo the prime 2^130 - 5 at a secret point `r`, then masks
//! the result with a secret pad. The 32-byte key must authenticate a single
//! message only. In this crate the key is always derived from a ChaCha20
//! keystream block (see `aead`).
//!
//! Two interfaces are provided:
//!
//! - [`Poly1305`]: streaming `new` → `update`* → `finalize`
//! - [`poly1305`]: one-shot wrapper

mod mac;

pub use mac::Poly1305;

/// Computes the Poly1305 tag of `message` under a one-time `key`.
pub fn poly1305(message: &[u8], key: &[u8; 32]) -> [u8; 16] {
    let mut ctx = Poly1305::new(key);
    ctx.update(message);
    ctx.finalize()
}
