//! Cryptographic recovery primitives.
//!
//! This module holds mechanisms that keep a secret recoverable without a
//! single point of failure.
//!
//! # 2-of-3 XOR secret sharing
//!
//! The `xorsecretsharing` submodule splits a secret into exactly three
//! *shares* such that:
//!
//! - Any two shares reconstruct the original secret.
//! - A single share reveals nothing but the secret's length.
//!
//! Unlike general Shamir sharing there is no finite field arithmetic and
//! no configurable threshold: the scheme is fixed at 2-of-3 and uses only
//! XOR and nibble shifts, one mask byte per secret byte.
//!
//! ## Provided functionality
//!
//! - **Splitting** a secret into three tagged shares, with the mask drawn
//!   from an injectable [`RandomSource`](crate::rng::RandomSource).
//! - **Joining** any two shares, in either order.
//! - **Refreshing** a full set of shares without reconstructing the secret.
//! - **Reissuing** a lost share from the two remaining ones.
//!
//! Shares are bare `[tag, payload...]` bytes. Detecting a modified share,
//! encoding shares as text and deciding who holds which share are left to
//! the caller.

mod xor23;

pub use xor23::core as xorsecretsharing;
