//! Hash functions, message authentication and key expansion.
//!
//! - [`blake2b`]: BLAKE2b, keyed or not, one-shot or streaming
//! - [`sha512`]: SHA-512, one-shot or streaming
//! - [`hmac`]: HMAC-SHA-512
//! - [`hkdf`]: HKDF-SHA-512
//!
//! Streaming contexts are consumed by `finalize`, which makes reuse after
//! finalization a compile error. They are wiped when dropped.

pub mod blake2b;
pub mod hkdf;
pub mod hmac;
pub mod sha512;

pub use self::blake2b::{Blake2b, blake2b, blake2b_keyed};
pub use self::hkdf::{hkdf, hkdf_expand};
pub use self::hmac::{HmacSha512, hmac_sha512};
pub use self::sha512::{Sha512, sha512};
