use tracing::trace;

use super::boundary::{fill_first_blocks, finalize, init};
use super::memory::{MemoryLayout, WorkArea};
use super::params::{Argon2Config, Argon2Extras, Argon2Inputs, check_len};
use crate::error::{Argon2ConfigError, Result};

/// Computes an Argon2 hash into `hash`.
///
/// The output length is `hash.len()`, between 1 byte and 2^32 - 1 bytes.
/// Every block of the work area that was used is zeroed before returning.
///
/// # Arguments
///
/// * `hash` - Output buffer
/// * `work_area` - Working memory, checked against `config`
/// * `config` - Variant and cost parameters
/// * `inputs` - Password and salt
/// * `extras` - Optional key and associated data
///
/// # Errors
///
/// [`Error::InvalidArgon2Config`](crate::Error::InvalidArgon2Config) if the
/// configuration is invalid, the work area too small, an input longer than
/// 2^32 - 1 bytes, or the output length out of range.
///
/// # Example
///
/// ```rust
/// use microsui_crypto::derivation::argon2::{
///     Argon2Config, Argon2Extras, Argon2Inputs, Block, WorkArea, argon2,
/// };
///
/// let config = Argon2Config { nb_blocks: 64, nb_passes: 1, ..Default::default() };
/// let mut blocks = Block::new_area(config.rounded_blocks());
/// let inputs = Argon2Inputs { pass: b"my_password", salt: b"random_salt_16b!" };
///
/// let mut hash = [0u8; 32];
/// let work_area = WorkArea::new(&mut blocks, &config).unwrap();
/// argon2(&mut hash, work_area, &config, &inputs, &Argon2Extras::default()).unwrap();
/// ```
pub fn argon2(
    hash: &mut [u8],
    mut work_area: WorkArea<'_>,
    config: &Argon2Config,
    inputs: &Argon2Inputs<'_>,
    extras: &Argon2Extras<'_>,
) -> Result<()> {
    config.validate()?;
    work_area.check(config)?;

    let hash_len = check_len(hash.len()).map_err(|_| Argon2ConfigError::InvalidOutputLength)?;
    if hash_len == 0 {
        return Err(Argon2ConfigError::InvalidOutputLength.into());
    }
    for data in [inputs.pass, inputs.salt, extras.key, extras.ad] {
        check_len(data.len())?;
    }

    trace!(
        algorithm = ?config.algorithm,
        nb_blocks = config.nb_blocks,
        nb_passes = config.nb_passes,
        nb_lanes = config.nb_lanes,
        hash_len,
        "argon2"
    );

    let layout = MemoryLayout::new(config);
    let memory = work_area.blocks_mut(layout.total_blocks as usize);

    let h0 = init(hash_len, config, inputs, extras);
    fill_first_blocks(memory, &layout, &h0);

    layout.fill(memory, config);

    finalize(memory, &layout, hash);

    memory.iter_mut().for_each(zeroize::Zeroize::zeroize);
    Ok(())
}
