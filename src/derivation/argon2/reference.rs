//! Reference block selection for Argon2 (RFC 9106 §3.4.1.2).
//!
//! Each new block mixes the previous block with a reference block picked
//! from the already computed part of memory. The 64-bit pseudo-random
//! seed is split in two: its high half selects the lane, its low half
//! selects a position inside the allowed window with a quadratic bias
//! towards recent blocks.

use super::memory::MemoryLayout;

/// Returns `(reference_lane, reference_index)` for the block at
/// `index_in_segment` of `(pass, slice, lane)`.
///
/// The window arithmetic wraps on purpose: for a block at the start of a
/// segment referencing another lane, the window loses its last block,
/// which is computed concurrently in that other lane.
pub(crate) fn compute_reference_position(
    pass: u32,
    slice: u32,
    lane: u32,
    index_in_segment: u32,
    layout: &MemoryLayout,
    seed: u64,
) -> (u32, u32) {
    let segment_len = layout.segment_len;

    let next_slice = ((slice + 1) % 4) * segment_len;
    let window_start = if pass == 0 { 0 } else { next_slice };
    let nb_segments = if pass == 0 { slice } else { 3 };

    let ref_lane = if pass == 0 && slice == 0 {
        lane
    } else {
        ((seed >> 32) % layout.lanes as u64) as u32
    };

    let adjustment = if ref_lane == lane {
        index_in_segment.wrapping_sub(1)
    } else if index_in_segment == 0 {
        u32::MAX
    } else {
        0
    };
    let window_size = (nb_segments * segment_len).wrapping_add(adjustment) as u64;

    // Quadratic skew towards the end of the window
    let j1 = seed & 0xffff_ffff;
    let x = (j1 * j1) >> 32;
    let y = (window_size * x) >> 32;
    let z = (window_size - 1) - y;
    let ref_index = (window_start as u64 + z) % layout.lane_len as u64;

    (ref_lane, ref_index as u32)
}
