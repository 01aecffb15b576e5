//! Key derivation functions.
//!
//! - [`argon2`]: memory-hard password hashing, variants d, i and id

pub mod argon2;

pub use self::argon2::{Argon2Algorithm, Argon2Config, Argon2Extras, Argon2Inputs, Block, WorkArea, argon2};
