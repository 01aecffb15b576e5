//! Crate-wide error type.
//!
//! Every fallible operation in this crate reports failure through
//! [`Error`]. The variants mirror the three failure classes of the
//! primitives (decoding, authentication, encodability) plus the
//! configuration errors of the Argon2 key derivation function.
//!
//! Errors are returned to the immediate caller and never logged. They carry
//! no secret-dependent payload.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = core::result::Result<T, Error>;

/// Failures reported by the primitives of this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// A 32-byte string is not the encoding of a point on Edwards25519.
    #[error("bytes do not encode a curve point")]
    InvalidPoint,

    /// The `S` half of a signature is not below the group order `L`.
    #[error("signature scalar is not canonical")]
    NonCanonicalScalar,

    /// The signature equation does not hold.
    #[error("signature verification failed")]
    SignatureMismatch,

    /// An AEAD tag did not match the ciphertext and associated data.
    #[error("message authentication failed")]
    AuthenticationFailed,

    /// The point has no Elligator 2 representative; retry with another key.
    #[error("point cannot be represented by Elligator 2")]
    NotEncodable,

    /// The Argon2 configuration or work area is unusable.
    #[error("invalid Argon2 configuration: {0}")]
    InvalidArgon2Config(#[from] Argon2ConfigError),
}

/// Reasons an Argon2 configuration is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Argon2ConfigError {
    /// At least one lane is required.
    #[error("at least one lane is required")]
    NoLanes,

    /// At least one pass is required.
    #[error("at least one pass is required")]
    NoPasses,

    /// Fewer than 8 blocks per lane were requested.
    #[error("at least 8 blocks per lane are required")]
    TooFewBlocks,

    /// The caller-supplied work area cannot hold the requested blocks.
    #[error("work area holds {available} blocks, {required} required")]
    WorkAreaTooSmall {
        /// Blocks needed by the configuration.
        required: usize,
        /// Blocks present in the work area.
        available: usize,
    },

    /// An input is longer than 2^32 - 1 bytes.
    #[error("input length does not fit in 32 bits")]
    InputTooLong,

    /// The output length is zero or does not fit in 32 bits.
    #[error("output length must be between 1 and 2^32 - 1 bytes")]
    InvalidOutputLength,
}
