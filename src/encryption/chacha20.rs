//! ChaCha20 stream cipher.
//!
//! This module implements the ChaCha20 keystream in the three nonce
//! conventions in common use, plus the HChaCha20 subkey derivation:
//!
//! - `chacha20_djb`: 64-bit nonce, 64-bit block counter (original design)
//! - `chacha20_ietf`: 96-bit nonce, 32-bit block counter (RFC 8439)
//! - `chacha20_x`: 192-bit nonce (XChaCha20), built from HChaCha20 and the
//!   djb variant
//! - `chacha20_h`: HChaCha20, the one-way half of the permutation used to
//!   derive extended-nonce subkeys
//!
//! Every variant XORs the keystream into an optional input. When the input
//! is `None`, the raw keystream is written instead. Each call returns the
//! next unused block counter, so long streams can be produced by chaining
//! calls.
//!
//! ## Security
//!
//! - All operations are branch-free with respect to the key and the data.
//! - Internal state and keystream blocks are wiped before returning.
//! - A `(key, nonce)` pair must never encrypt two different messages.

use zeroize::Zeroizing;

use crate::utils::bytes::{load32_le, load32_le_buf, store32_le, store32_le_buf};

/// ChaCha20 constant words.
///
/// These are the ASCII string `"expand 32-byte k"` read as little-endian
/// `u32` words.
const CHACHA20_CONSTANTS: [u32; 4] = [
    0x6170_7865, // "expa"
    0x3320_646e, // "nd 3"
    0x7962_2d32, // "2-by"
    0x6b20_6574, // "te k"
];

#[inline(always)]
fn quarter_round(state: &mut [u32; 16], a: usize, b: usize, c: usize, d: usize) {
    state[a] = state[a].wrapping_add(state[b]);
    state[d] = (state[d] ^ state[a]).rotate_left(16);

    state[c] = state[c].wrapping_add(state[d]);
    state[b] = (state[b] ^ state[c]).rotate_left(12);

    state[a] = state[a].wrapping_add(state[b]);
    state[d] = (state[d] ^ state[a]).rotate_left(8);

    state[c] = state[c].wrapping_add(state[d]);
    state[b] = (state[b] ^ state[c]).rotate_left(7);
}

/// Applies the 20-round ChaCha permutation to `input`, without feed-forward.
fn permute(out: &mut [u32; 16], input: &[u32; 16]) {
    *out = *input;
    for _ in 0..10 {
        // Columns
        quarter_round(out, 0, 4, 8, 12);
        quarter_round(out, 1, 5, 9, 13);
        quarter_round(out, 2, 6, 10, 14);
        quarter_round(out, 3, 7, 11, 15);

        // Diagonals
        quarter_round(out, 0, 5, 10, 15);
        quarter_round(out, 1, 6, 11, 12);
        quarter_round(out, 2, 7, 8, 13);
        quarter_round(out, 3, 4, 9, 14);
    }
}

/// HChaCha20.
///
/// Runs the ChaCha permutation over `constant ‖ key ‖ input` and reveals
/// only words 0..4 and 12..16 of the result. Without the feed-forward and
/// with half of the state hidden, the permutation cannot be reversed, which
/// makes the output usable as a subkey.
///
/// # Parameters
///
/// - `key`: 256-bit secret key
/// - `input`: 128-bit input, usually the first 16 bytes of a 24-byte nonce
pub fn chacha20_h(key: &[u8; 32], input: &[u8; 16]) -> [u8; 32] {
    let mut block = Zeroizing::new([0u32; 16]);
    block[..4].copy_from_slice(&CHACHA20_CONSTANTS);
    load32_le_buf(&mut block[4..12], key);
    load32_le_buf(&mut block[12..16], input);

    let mut mixed = Zeroizing::new([0u32; 16]);
    permute(&mut mixed, &block);

    let mut out = [0u8; 32];
    store32_le_buf(&mut out[..16], &mixed[..4]);
    store32_le_buf(&mut out[16..], &mixed[12..16]);
    out
}

/// ChaCha20 with a 64-bit nonce and a 64-bit block counter.
///
/// Writes `out.len()` bytes of `input ⊕ keystream` (or bare keystream when
/// `input` is `None`) starting at block `ctr`.
///
/// # Returns
///
/// The counter of the next unused block. A trailing partial block counts
/// as used.
///
/// # Panics
///
/// Panics if `input` is present and its length differs from `out.len()`.
pub fn chacha20_djb(
    out: &mut [u8],
    input: Option<&[u8]>,
    key: &[u8; 32],
    nonce: &[u8; 8],
    ctr: u64,
) -> u64 {
    if let Some(input) = input {
        assert_eq!(input.len(), out.len(), "input and output lengths differ");
    }

    let mut state = Zeroizing::new([0u32; 16]);
    state[..4].copy_from_slice(&CHACHA20_CONSTANTS);
    load32_le_buf(&mut state[4..12], key);
    state[12] = ctr as u32;
    state[13] = (ctr >> 32) as u32;
    load32_le_buf(&mut state[14..16], nonce);

    let mut pool = Zeroizing::new([0u32; 16]);
    let mut offset = 0usize;

    // Whole blocks
    let mut blocks = out.chunks_exact_mut(64);
    for block in &mut blocks {
        permute(&mut pool, &state);
        for (j, word) in block.chunks_exact_mut(4).enumerate() {
            let key_word = pool[j].wrapping_add(state[j]);
            let plain = input.map_or(0, |input| load32_le(&input[offset + 4 * j..]));
            store32_le(word, key_word ^ plain);
        }
        offset += 64;

        state[12] = state[12].wrapping_add(1);
        if state[12] == 0 {
            state[13] = state[13].wrapping_add(1);
        }
    }

    // Last, incomplete block
    let tail = blocks.into_remainder();
    let partial = !tail.is_empty();
    if partial {
        permute(&mut pool, &state);
        let mut keystream = Zeroizing::new([0u8; 64]);
        for (j, word) in keystream.chunks_exact_mut(4).enumerate() {
            store32_le(word, pool[j].wrapping_add(state[j]));
        }
        for (i, byte) in tail.iter_mut().enumerate() {
            *byte = keystream[i] ^ input.map_or(0, |input| input[offset + i]);
        }
    }

    (state[12] as u64 + ((state[13] as u64) << 32)).wrapping_add(partial as u64)
}

/// ChaCha20 with a 96-bit nonce and a 32-bit block counter (RFC 8439).
///
/// The first 4 bytes of the nonce occupy the high half of the djb block
/// counter, so the stream is identical to [`chacha20_djb`] with
/// `nonce[4..12]` and counter `ctr + (nonce[0..4] << 32)`.
///
/// # Returns
///
/// The low 32 bits of the next unused block counter.
///
/// # Panics
///
/// Panics if `input` is present and its length differs from `out.len()`.
pub fn chacha20_ietf(
    out: &mut [u8],
    input: Option<&[u8]>,
    key: &[u8; 32],
    nonce: &[u8; 12],
    ctr: u32,
) -> u32 {
    let big_ctr = ctr as u64 + ((load32_le(nonce) as u64) << 32);
    let mut short_nonce = [0u8; 8];
    short_nonce.copy_from_slice(&nonce[4..]);
    chacha20_djb(out, input, key, &short_nonce, big_ctr) as u32
}

/// XChaCha20: ChaCha20 with a 192-bit nonce.
///
/// A subkey is derived with [`chacha20_h`] from the key and the first 16
/// nonce bytes, then the last 8 nonce bytes drive [`chacha20_djb`]. The
/// large nonce can be picked at random without fear of collisions.
///
/// # Panics
///
/// Panics if `input` is present and its length differs from `out.len()`.
pub fn chacha20_x(
    out: &mut [u8],
    input: Option<&[u8]>,
    key: &[u8; 32],
    nonce: &[u8; 24],
    ctr: u64,
) -> u64 {
    let (head, tail) = nonce.split_at(16);
    let mut head16 = [0u8; 16];
    head16.copy_from_slice(head);
    let mut tail8 = [0u8; 8];
    tail8.copy_from_slice(tail);

    let sub_key = Zeroizing::new(chacha20_h(key, &head16));
    chacha20_djb(out, input, &sub_key, &tail8, ctr)
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEY: [u8; 32] = [0x42; 32];

    #[test]
    fn quarter_round_rfc8439() {
        // RFC 8439, section 2.1.1
        let mut state = [0u32; 16];
        state[..4].copy_from_slice(&[0x11111111, 0x01020304, 0x9b8d6f43, 0x01234567]);
        quarter_round(&mut state, 0, 1, 2, 3);
        assert_eq!(
            state[..4],
            [0xea2a92f4, 0xcb1cf8ce, 0x4581472e, 0x5881c4bb]
        );
    }

    #[test]
    fn partial_block_counts_as_used() {
        let nonce = [1u8; 8];
        let mut out = [0u8; 64];
        assert_eq!(chacha20_djb(&mut out, None, &KEY, &nonce, 5), 6);

        let mut out = [0u8; 65];
        assert_eq!(chacha20_djb(&mut out, None, &KEY, &nonce, 5), 7);

        assert_eq!(chacha20_djb(&mut [], None, &KEY, &nonce, 5), 5);
    }

    #[test]
    fn counter_carries_into_high_word() {
        let nonce = [3u8; 8];
        let mut across = [0u8; 128];
        let next = chacha20_djb(&mut across, None, &KEY, &nonce, u32::MAX as u64);
        assert_eq!(next, 1 << 32 | 1);

        let mut second = [0u8; 64];
        chacha20_djb(&mut second, None, &KEY, &nonce, 1 << 32);
        assert_eq!(across[64..], second);
    }

    #[test]
    fn ietf_nonce_prefix_is_the_high_counter() {
        let nonce: [u8; 12] = [7, 0, 0, 0, 9, 9, 9, 9, 9, 9, 9, 9];
        let mut ietf = [0u8; 100];
        chacha20_ietf(&mut ietf, None, &KEY, &nonce, 2);

        let mut djb = [0u8; 100];
        chacha20_djb(&mut djb, None, &KEY, &[9; 8], 2 + (7 << 32));
        assert_eq!(ietf, djb);
    }

    #[test]
    fn xchacha_uses_the_hchacha_subkey() {
        let mut nonce = [0u8; 24];
        for (i, byte) in nonce.iter_mut().enumerate() {
            *byte = i as u8;
        }
        let mut head = [0u8; 16];
        head.copy_from_slice(&nonce[..16]);
        let mut tail = [0u8; 8];
        tail.copy_from_slice(&nonce[16..]);

        let mut x = [0u8; 80];
        chacha20_x(&mut x, None, &KEY, &nonce, 0);

        let sub_key = chacha20_h(&KEY, &head);
        let mut djb = [0u8; 80];
        chacha20_djb(&mut djb, None, &sub_key, &tail, 0);
        assert_eq!(x, djb);
    }
}
