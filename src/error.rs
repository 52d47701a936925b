//! Error types for secret sharing operations.
//!
//! Every failure is a contract violation by the caller (or an entropy
//! failure reported by the platform). Nothing is retried internally and
//! no partial output is ever returned alongside an error.

use thiserror::Error;

/// Result type alias using [`SharingError`].
pub type Result<T> = std::result::Result<T, SharingError>;

/// Errors that may occur while splitting, joining or maintaining shares.
#[derive(Debug, Error)]
pub enum SharingError {
    /// An argument does not have the shape the operation requires.
    ///
    /// Raised by [`split_with_mask`](crate::recovery::xorsecretsharing::split_with_mask)
    /// when the mask is not exactly as long as the secret.
    #[error("invalid input: expected {expected} bytes, got {actual}")]
    InvalidInput { expected: usize, actual: usize },

    /// The two shares have different lengths.
    #[error("share size mismatch: {left} bytes vs {right} bytes")]
    SizeMismatch { left: usize, right: usize },

    /// A share is empty or the tags do not form a usable combination.
    #[error("invalid shares: {0}")]
    InvalidShares(&'static str),

    /// The platform randomness source failed.
    #[error("entropy source failure: {0}")]
    Entropy(#[from] getrandom::Error),
}
