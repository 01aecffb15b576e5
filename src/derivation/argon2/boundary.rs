//! Initialization and finalization for Argon2.
//!
//! H0 is computed from every input, the first two blocks of each lane are
//! expanded from it, and at the end the last blocks of all lanes are folded
//! into the output.

use zeroize::{Zeroize, Zeroizing};

use super::block::Block;
use super::memory::MemoryLayout;
use super::params::{Argon2Config, Argon2Extras, Argon2Inputs};
use crate::hash::blake2b::Blake2b;
use crate::hash::blake2b::extended::extended_hash;

/// Argon2 version 1.3.
const ARGON2_VERSION: u32 = 0x13;

/// Computes the 64-byte initial hash H0 (RFC 9106 §3.2).
///
/// ```text
/// H0 = BLAKE2b(p || T || m || t || v || y || |P| || P || |S| || S || |K| || K || |X| || X)
/// ```
///
/// `m` is the requested block count, before rounding. Input lengths are
/// checked by the caller.
pub(crate) fn init(
    hash_len: u32,
    config: &Argon2Config,
    inputs: &Argon2Inputs<'_>,
    extras: &Argon2Extras<'_>,
) -> Zeroizing<[u8; 64]> {
    let mut ctx = Blake2b::new(64);

    for word in [
        config.nb_lanes,
        hash_len,
        config.nb_blocks,
        config.nb_passes,
        ARGON2_VERSION,
        config.algorithm as u32,
    ] {
        ctx.update(&word.to_le_bytes());
    }

    for data in [inputs.pass, inputs.salt, extras.key, extras.ad] {
        ctx.update(&(data.len() as u32).to_le_bytes());
        ctx.update(data);
    }

    let mut h0 = Zeroizing::new([0u8; 64]);
    ctx.finalize(&mut h0[..]);
    h0
}

/// Fills the first two blocks of every lane:
/// `B[l][j] = H'^(1024)(H0 || le32(j) || le32(l))`.
pub(crate) fn fill_first_blocks(memory: &mut [Block], layout: &MemoryLayout, h0: &[u8; 64]) {
    let mut seed = Zeroizing::new([0u8; 72]);
    seed[..64].copy_from_slice(h0);
    let mut bytes = Zeroizing::new([0u8; 1024]);

    for lane in 0..layout.lanes {
        seed[68..72].copy_from_slice(&lane.to_le_bytes());
        for j in 0..2u32 {
            seed[64..68].copy_from_slice(&j.to_le_bytes());
            extended_hash(&mut bytes[..], &seed[..]);
            memory[layout.index(lane, j)] = Block::from_bytes(&bytes);
        }
    }
}

/// Folds the last block of every lane together and hashes the result into
/// `hash` with H'.
pub(crate) fn finalize(memory: &[Block], layout: &MemoryLayout, hash: &mut [u8]) {
    let mut final_block = Block::ZERO;
    for lane in 0..layout.lanes {
        final_block.in_place_xor(&memory[layout.index(lane, layout.lane_len - 1)]);
    }

    let mut bytes = Zeroizing::new([0u8; 1024]);
    final_block.to_bytes(&mut bytes);
    final_block.zeroize();

    extended_hash(hash, &bytes[..]);
}
