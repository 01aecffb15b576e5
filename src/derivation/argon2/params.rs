//! Configuration types for Argon2.
//!
//! The public cost parameters live in [`Argon2Config`]. Secret and
//! context inputs are borrowed through [`Argon2Inputs`] and
//! [`Argon2Extras`], so nothing is copied or retained.

use crate::error::Argon2ConfigError;

/// Argon2 variant.
///
/// The discriminant is the numeric identifier hashed into H0.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Argon2Algorithm {
    /// Data-dependent addressing. Fastest to attack with side channels.
    D = 0,
    /// Data-independent addressing.
    I = 1,
    /// Data-independent for the first half of the first pass, then
    /// data-dependent (RFC 9106 recommendation).
    #[default]
    Id = 2,
}

/// Cost parameters of one Argon2 computation.
///
/// # Recommended Values
///
/// - `nb_blocks`: as many KiB as the platform can spare (100 000 ≈ 100 MiB)
/// - `nb_passes`: 3 (RFC 9106 second recommendation), or 1 with more memory
/// - `nb_lanes`: 1; lanes are computed sequentially here, so more lanes only
///   matter for compatibility with other implementations
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Argon2Config {
    /// Argon2 variant.
    pub algorithm: Argon2Algorithm,
    /// Requested memory in 1 KiB blocks (minimum 8 × lanes).
    ///
    /// The work area actually used is rounded down to a multiple of
    /// 4 × lanes blocks.
    pub nb_blocks: u32,
    /// Number of passes over memory (minimum 1).
    pub nb_passes: u32,
    /// Number of lanes (minimum 1).
    pub nb_lanes: u32,
}

impl Default for Argon2Config {
    /// Argon2id, 100 000 blocks, 3 passes, 1 lane.
    fn default() -> Self {
        Self {
            algorithm: Argon2Algorithm::Id,
            nb_blocks: 100_000,
            nb_passes: 3,
            nb_lanes: 1,
        }
    }
}

impl Argon2Config {
    /// Checks the structural requirements of the configuration.
    pub fn validate(&self) -> Result<(), Argon2ConfigError> {
        if self.nb_lanes < 1 {
            return Err(Argon2ConfigError::NoLanes);
        }

        if self.nb_passes < 1 {
            return Err(Argon2ConfigError::NoPasses);
        }

        if self.nb_blocks / 8 < self.nb_lanes {
            return Err(Argon2ConfigError::TooFewBlocks);
        }

        Ok(())
    }

    /// Number of blocks actually used: `nb_blocks` rounded down to a
    /// multiple of `4 × nb_lanes`.
    ///
    /// The work area must hold at least that many blocks
    /// (`128 ×` that many 64-bit words).
    pub fn rounded_blocks(&self) -> usize {
        let lanes = self.nb_lanes.max(1);
        (self.nb_blocks / lanes / 4 * 4 * lanes) as usize
    }
}

/// Password and salt.
#[derive(Clone, Copy, Debug)]
pub struct Argon2Inputs<'a> {
    /// Secret being hashed.
    pub pass: &'a [u8],
    /// Unique salt; 16 random bytes is the usual choice.
    pub salt: &'a [u8],
}

/// Optional secret key and associated data. Empty by default.
#[derive(Clone, Copy, Debug, Default)]
pub struct Argon2Extras<'a> {
    /// Secret key (pepper), hashed into H0.
    pub key: &'a [u8],
    /// Associated data, hashed into H0.
    pub ad: &'a [u8],
}

pub(crate) fn check_len(len: usize) -> Result<u32, Argon2ConfigError> {
    u32::try_from(len).map_err(|_| Argon2ConfigError::InputTooLong)
}
