//! HMAC-SHA-512 (RFC 2104, RFC 4231).
//!
//! ```text
//! HMAC(K, m) = SHA-512((K' ⊕ opad) ‖ SHA-512((K' ⊕ ipad) ‖ m))
//! ```
//!
//! where `K'` is the key zero-padded to the 128-byte block size, or the
//! SHA-512 of the key when it is longer than a block.

use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use super::sha512::{Sha512, sha512};

const IPAD: u8 = 0x36;
const OPAD: u8 = 0x5c;

/// Incremental HMAC-SHA-512 state.
///
/// Keeps the padded key around until [`finalize`](Self::finalize), where
/// it is needed for the outer hash. Wiped on drop.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct HmacSha512 {
    key: [u8; 128],
    ctx: Sha512,
}

impl HmacSha512 {
    /// Starts an authenticator. Keys of any length are accepted.
    pub fn new(key: &[u8]) -> Self {
        // Padded in place
        let mut mac = Self {
            key: [0u8; 128],
            ctx: Sha512::new(),
        };
        if key.len() > 128 {
            let digest = Zeroizing::new(sha512(key));
            mac.key[..64].copy_from_slice(&digest[..]);
        } else {
            mac.key[..key.len()].copy_from_slice(key);
        }

        for byte in mac.key.iter_mut() {
            *byte ^= IPAD;
        }
        mac.ctx.update(&mac.key);
        mac
    }

    /// Feeds message bytes.
    pub fn update(&mut self, message: &[u8]) {
        self.ctx.update(message);
    }

    /// Returns the 64-byte tag and destroys the state.
    pub fn finalize(mut self) -> [u8; 64] {
        let mut inner = self.ctx.clone().finalize();

        // Turn the inner pad into the outer pad in place
        for byte in self.key.iter_mut() {
            *byte ^= IPAD ^ OPAD;
        }
        let mut outer = Sha512::new();
        outer.update(&self.key);
        outer.update(&inner);
        inner.zeroize();
        outer.finalize()
    }
}

/// One-shot HMAC-SHA-512 of `message` under `key`.
pub fn hmac_sha512(key: &[u8], message: &[u8]) -> [u8; 64] {
    let mut ctx = HmacSha512::new(key);
    ctx.update(message);
    ctx.finalize()
}
