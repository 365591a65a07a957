//! Error kinds returned by every fallible operation in this crate.
//!
//! Nothing in the public API panics on caller-triggerable input; the one exception is
//! `debug_assert!`/`more_asserts` checks on values this crate itself constructed, which indicate
//! a bug in this crate rather than a caller error.

use thiserror::Error;

/// The errors that can arise while generating a CRS, evaluating the PPRF, running ElGamal, or
/// encrypting/decrypting/combining a batched ciphertext.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BtdError {
    /// A PPRF index fell outside `[0, B)` for the CRS's configured batch bound `B`.
    #[error("index {index} out of PPRF domain [0, {bound})")]
    IndexOutOfDomain { index: usize, bound: usize },

    /// A batch (or sub-batch) exceeded the CRS's configured bound `B`.
    #[error("batch of length {len} exceeds the CRS batch bound {bound}")]
    BatchTooLarge { len: usize, bound: usize },

    /// `PEval` was called with the punctured index equal to the evaluation index.
    #[error("punctured index {index} cannot equal the evaluation index")]
    PunctureConflict { index: usize },

    /// One of the three Sigma-protocol verification equations failed for the ciphertext at `slot`.
    #[error("Sigma proof verification failed for ciphertext at slot {slot}")]
    ProofFailed { slot: u32 },

    /// Fewer than `t` valid partial decryption shares were supplied to `Combine`.
    #[error("only {have} of the required {need} partial decryption shares were supplied")]
    ShareShortage { have: usize, need: usize },

    /// A share set passed to `Combine` contained an invalid index: either `0` (share indices must
    /// be `1, ..., n`) or a duplicate of another share's index in the same set.
    #[error("invalid share index {index}: share indices must be distinct and non-zero")]
    InvalidShareIndex { index: u64 },

    /// The recovered plaintext did not match the decryption-consistency check at `slot`.
    #[error("decryption failed on ciphertext at slot {slot}")]
    DecryptionMismatch { slot: u32 },

    /// A marshal/unmarshal of a wire-format value failed.
    #[error("serialization error: {0}")]
    Serialization(String),
}

pub type Result<T> = std::result::Result<T, BtdError>;
