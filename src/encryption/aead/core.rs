use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use crate::encryption::chacha20::{chacha20_djb, chacha20_h};
use crate::encryption::poly1305::Poly1305;
use crate::error::{Error, Result};
use crate::utils::bytes::{array_from, gap, load32_le, store64_le};
use crate::utils::ct::verify16;

const ZERO_PAD: [u8; 16] = [0; 16];

/// Ratcheting ChaCha20-Poly1305 session.
///
/// The context holds the current message key, the 8-byte nonce remainder
/// and the block counter base. Every successful [`write`](Self::write) or
/// [`read`](Self::read) replaces the key with fresh keystream material, so
/// a compromised context does not reveal earlier messages.
///
/// The context is wiped on drop.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct AeadContext {
    key: [u8; 32],
    nonce: [u8; 8],
    counter: u64,
}

impl AeadContext {
    /// Starts a session with a 24-byte nonce (XChaCha20-Poly1305).
    ///
    /// The session key is HChaCha20 of the key and the first 16 nonce bytes.
    pub fn init_x(key: &[u8; 32], nonce: &[u8; 24]) -> Self {
        Self {
            key: chacha20_h(key, &array_from(&nonce[..16])),
            nonce: array_from(&nonce[16..]),
            counter: 0,
        }
    }

    /// Starts a session with an 8-byte nonce (original ChaCha20 layout).
    pub fn init_djb(key: &[u8; 32], nonce: &[u8; 8]) -> Self {
        Self {
            key: *key,
            nonce: *nonce,
            counter: 0,
        }
    }

    /// Starts a session with a 12-byte nonce (RFC 8439 layout).
    ///
    /// The first nonce word becomes the high half of the block counter.
    pub fn init_ietf(key: &[u8; 32], nonce: &[u8; 12]) -> Self {
        Self {
            key: *key,
            nonce: array_from(&nonce[4..]),
            counter: (load32_le(nonce) as u64) << 32,
        }
    }

    /// Derives the per-message `auth_key ‖ next_key` block.
    fn message_keys(&self) -> Zeroizing<[u8; 64]> {
        let mut keys = Zeroizing::new([0u8; 64]);
        chacha20_djb(&mut keys[..], None, &self.key, &self.nonce, self.counter);
        keys
    }

    /// Encrypts `plain_text` into `cipher_text` and returns the tag.
    ///
    /// The tag authenticates `ad` and the ciphertext. The session key is
    /// ratcheted forward afterwards.
    ///
    /// # Panics
    ///
    /// Panics if `cipher_text` and `plain_text` differ in length.
    pub fn write(&mut self, cipher_text: &mut [u8], ad: &[u8], plain_text: &[u8]) -> [u8; 16] {
        let keys = self.message_keys();
        chacha20_djb(
            cipher_text,
            Some(plain_text),
            &self.key,
            &self.nonce,
            self.counter.wrapping_add(1),
        );
        let auth_key = Zeroizing::new(array_from(&keys[..32]));
        let mac = lock_auth(&auth_key, ad, cipher_text);
        self.key.copy_from_slice(&keys[32..]);
        mac
    }

    /// Authenticates and decrypts `cipher_text` into `plain_text`.
    ///
    /// The tag is checked in constant time before anything is decrypted.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AuthenticationFailed`] if the tag does not match.
    /// In that case `plain_text` is left untouched and the session key is
    /// not ratcheted, so the context can still read the genuine message.
    ///
    /// # Panics
    ///
    /// Panics if `plain_text` and `cipher_text` differ in length.
    pub fn read(
        &mut self,
        plain_text: &mut [u8],
        mac: &[u8; 16],
        ad: &[u8],
        cipher_text: &[u8],
    ) -> Result<()> {
        assert_eq!(
            plain_text.len(),
            cipher_text.len(),
            "input and output lengths differ"
        );

        let keys = self.message_keys();
        let auth_key = Zeroizing::new(array_from(&keys[..32]));
        let real_mac = Zeroizing::new(lock_auth(&auth_key, ad, cipher_text));
        if verify16(mac, &real_mac) != 0 {
            return Err(Error::AuthenticationFailed);
        }

        chacha20_djb(
            plain_text,
            Some(cipher_text),
            &self.key,
            &self.nonce,
            self.counter.wrapping_add(1),
        );
        self.key.copy_from_slice(&keys[32..]);
        Ok(())
    }
}

/// Poly1305 over `ad ‖ pad16 ‖ ct ‖ pad16 ‖ le64(|ad|) ‖ le64(|ct|)`.
fn lock_auth(auth_key: &[u8; 32], ad: &[u8], cipher_text: &[u8]) -> [u8; 16] {
    let mut sizes = [0u8; 16];
    store64_le(&mut sizes[..8], ad.len() as u64);
    store64_le(&mut sizes[8..], cipher_text.len() as u64);

    let mut poly = Poly1305::new(auth_key);
    poly.update(ad);
    poly.update(&ZERO_PAD[..gap(ad.len(), 16)]);
    poly.update(cipher_text);
    poly.update(&ZERO_PAD[..gap(cipher_text.len(), 16)]);
    poly.update(&sizes);
    poly.finalize()
}

/// One-shot XChaCha20-Poly1305 encryption.
///
/// Equivalent to [`AeadContext::init_x`] followed by a single
/// [`AeadContext::write`].
///
/// # Panics
///
/// Panics if `cipher_text` and `plain_text` differ in length.
pub fn lock(
    cipher_text: &mut [u8],
    key: &[u8; 32],
    nonce: &[u8; 24],
    ad: &[u8],
    plain_text: &[u8],
) -> [u8; 16] {
    AeadContext::init_x(key, nonce).write(cipher_text, ad, plain_text)
}

/// One-shot XChaCha20-Poly1305 decryption.
///
/// # Errors
///
/// Returns [`Error::AuthenticationFailed`] on a forged or corrupted
/// message, leaving `plain_text` untouched.
///
/// # Panics
///
/// Panics if `plain_text` and `cipher_text` differ in length.
pub fn unlock(
    plain_text: &mut [u8],
    mac: &[u8; 16],
    key: &[u8; 32],
    nonce: &[u8; 24],
    ad: &[u8],
    cipher_text: &[u8],
) -> Result<()> {
    AeadContext::init_x(key, nonce).read(plain_text, mac, ad, cipher_text)
}
