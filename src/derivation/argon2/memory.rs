//! Memory organization and filling for Argon2.
//!
//! Memory is a matrix of `lanes` rows. Each lane is cut into 4 slices, and
//! the part of a lane inside one slice is a segment. Slice boundaries are
//! synchronization points: a block may only reference other lanes in
//! slices that are already complete.

use zeroize::Zeroize;

use super::block::Block;
use super::params::{Argon2Algorithm, Argon2Config};
use super::reference::compute_reference_position;
use crate::error::{Argon2ConfigError, Result};

/// Caller-provided Argon2 working memory.
///
/// Construction checks that the slice holds at least
/// [`Argon2Config::rounded_blocks`] blocks, so the filling loop never
/// indexes out of range. Extra blocks are left untouched.
pub struct WorkArea<'a> {
    blocks: &'a mut [Block],
}

impl<'a> WorkArea<'a> {
    /// Wraps `blocks` after checking it against `config`.
    ///
    /// # Errors
    ///
    /// Any configuration error from [`Argon2Config::validate`], or
    /// [`Argon2ConfigError::WorkAreaTooSmall`].
    pub fn new(blocks: &'a mut [Block], config: &Argon2Config) -> Result<Self> {
        config.validate()?;
        let area = Self { blocks };
        area.check(config)?;
        Ok(area)
    }

    pub(crate) fn check(&self, config: &Argon2Config) -> core::result::Result<(), Argon2ConfigError> {
        let required = config.rounded_blocks();
        if self.blocks.len() < required {
            return Err(Argon2ConfigError::WorkAreaTooSmall {
                required,
                available: self.blocks.len(),
            });
        }
        Ok(())
    }

    /// Number of blocks in the area.
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Whether the area holds no block at all.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub(crate) fn blocks_mut(&mut self, count: usize) -> &mut [Block] {
        &mut self.blocks[..count]
    }
}

/// Memory layout parameters for Argon2.
#[derive(Debug, Clone)]
pub(crate) struct MemoryLayout {
    pub lanes: u32,
    pub lane_len: u32,
    pub segment_len: u32,
    pub total_blocks: u32,
}

impl MemoryLayout {
    pub(crate) fn new(config: &Argon2Config) -> Self {
        let lanes = config.nb_lanes;
        let segment_len = config.nb_blocks / lanes / 4;
        let lane_len = segment_len * 4;

        Self {
            lanes,
            lane_len,
            segment_len,
            total_blocks: lane_len * lanes,
        }
    }

    #[inline]
    pub(crate) fn index(&self, lane: u32, index_in_lane: u32) -> usize {
        (lane * self.lane_len + index_in_lane) as usize
    }

    /// Fills all memory blocks over `config.nb_passes` passes.
    ///
    /// Lanes are processed one after the other within each slice.
    pub(crate) fn fill(&self, memory: &mut [Block], config: &Argon2Config) {
        let mut constant_time = config.algorithm != Argon2Algorithm::D;

        for pass in 0..config.nb_passes {
            for slice in 0..4u32 {
                // Argon2id switches to data-dependent addressing for good
                if slice == 2 && config.algorithm == Argon2Algorithm::Id {
                    constant_time = false;
                }
                for lane in 0..self.lanes {
                    self.fill_segment(memory, config, pass, slice, lane, constant_time);
                }
            }
        }
    }

    /// Fills one segment (portion of a lane within a slice).
    ///
    /// For each block position, this function:
    /// 1. Reads the seed (from the index block or the previous block)
    /// 2. Computes the reference block position from the seed
    /// 3. Computes the new block as G(previous, reference) [⊕ existing on pass > 0]
    fn fill_segment(
        &self,
        memory: &mut [Block],
        config: &Argon2Config,
        pass: u32,
        slice: u32,
        lane: u32,
        constant_time: bool,
    ) {
        let mut index_block = Block::ZERO;
        let mut index_ctr = 1u64;

        // The first two blocks of each lane come from H0
        let start_idx = if pass == 0 && slice == 0 { 2 } else { 0 };

        for i in start_idx..self.segment_len {
            let index_in_lane = slice * self.segment_len + i;
            let prev_idx = if index_in_lane == 0 {
                self.lane_len - 1
            } else {
                index_in_lane - 1
            };
            let prev = self.index(lane, prev_idx);

            let seed = if constant_time {
                if i == start_idx || i % 128 == 0 {
                    index_block = Block::index_block(&[
                        pass as u64,
                        lane as u64,
                        slice as u64,
                        self.total_blocks as u64,
                        config.nb_passes as u64,
                        config.algorithm as u64,
                        index_ctr,
                    ]);
                    index_ctr += 1;
                }
                index_block.0[(i % 128) as usize]
            } else {
                memory[prev].0[0]
            };

            let (ref_lane, ref_idx) =
                compute_reference_position(pass, slice, lane, i, self, seed);

            let cur = self.index(lane, index_in_lane);
            let reference = self.index(ref_lane, ref_idx);

            let compressed = Block::compress(&memory[prev], &memory[reference]);

            if pass == 0 {
                memory[cur] = compressed;
            } else {
                memory[cur].in_place_xor(&compressed);
            }
        }
        index_block.zeroize();
    }
}
