//! Argon2 memory-hard password hashing (RFC 9106), all three variants.
//!
//! Argon2 forces an attacker to dedicate a configurable amount of memory to
//! every guess. Argon2i resists side channels, Argon2d resists
//! time-memory trade-offs, and Argon2id combines both.
//!
//! # Algorithm Overview
//!
//! 1. **Initialization**: H0 = BLAKE2b(params || password || salt || ...)
//! 2. **Lane initialization**: the first two blocks of each lane are
//!    expanded from H0 with H' (variable-length BLAKE2b).
//! 3. **Memory filling**: every other block is G(previous, reference),
//!    where G is a BLAKE2b-like permutation with extra multiplications.
//! 4. **Finalization**: the last blocks of all lanes are XORed together and
//!    hashed with H' into the output.
//!
//! # Memory
//!
//! The memory is never allocated here. The caller lends a slice of
//! [`Block`]s through [`WorkArea`], which checks its size up front. Lanes
//! are computed sequentially.
//!
//! # Addressing Modes
//!
//! - **Data-independent** (Argon2i, and the first half of the first pass of
//!   Argon2id): reference positions come from pseudo-random index blocks.
//! - **Data-dependent** (Argon2d, and the rest of Argon2id): reference
//!   positions come from the previous block.

pub(crate) mod block;
pub(crate) mod boundary;
pub mod core;
pub(crate) mod memory;
pub(crate) mod params;
pub(crate) mod reference;

pub use self::core::argon2;
pub use block::Block;
pub use memory::WorkArea;
pub use params::{Argon2Algorithm, Argon2Config, Argon2Extras, Argon2Inputs};
