//! Low-level helpers shared by every primitive.
//!
//! - `bytes`: little/big-endian loads and stores over byte slices
//! - `ct`: constant-time comparisons and the secret wipe primitive
//!
//! None of these helpers allocate.

pub(crate) mod bytes;
pub mod ct;

pub use ct::{verify16, verify32, verify64, wipe};
