//! Variable-length BLAKE2b (Argon2's `H'`).
//!
//! Digests up to 64 bytes are a single BLAKE2b of `le32(size) ‖ input`.
//! Longer digests chain 64-byte BLAKE2b outputs, keeping the first 32 bytes
//! of each link and feeding the whole link into the next one:
//!
//! ```text
//! V1 = BLAKE2b-64(le32(size) ‖ input)
//! Vi = BLAKE2b-64(V(i-1))
//! digest = V1[..32] ‖ V2[..32] ‖ ... ‖ Vr
//! ```
//!
//! The construction never extracts more entropy than the underlying hash.

use zeroize::Zeroizing;

use super::core::{Blake2b, blake2b};

/// Fills `digest` with the variable-length hash of `input`.
///
/// The digest length must fit in 32 bits.
pub(crate) fn extended_hash(digest: &mut [u8], input: &[u8]) {
    let digest_size = digest.len() as u32;
    let first = digest.len().min(64);

    let mut ctx = Blake2b::new(first);
    ctx.update(&digest_size.to_le_bytes());
    ctx.update(input);
    ctx.finalize(&mut digest[..first]);

    if digest.len() > 64 {
        let r = (((digest_size as u64 + 31) >> 5) - 2) as usize;
        let mut window = Zeroizing::new([0u8; 64]);
        let mut input_at = 0usize;
        let mut output_at = 32usize;

        // Input and output windows overlap by 32 bytes
        for _ in 1..r {
            window.copy_from_slice(&digest[input_at..input_at + 64]);
            blake2b(&mut digest[output_at..output_at + 64], &window[..]);
            input_at += 32;
            output_at += 32;
        }

        window.copy_from_slice(&digest[input_at..input_at + 64]);
        blake2b(&mut digest[output_at..], &window[..]);
    }
}
