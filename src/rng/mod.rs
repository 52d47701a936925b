//! Randomness sources
//!
//! Splitting a secret is the only operation in this crate that needs
//! non-deterministic input. That input is modelled as the
//! [`RandomSource`] trait so the caller decides where it comes from:
//!
//! - [`OsRandom`] draws from the platform CSPRNG and is what
//!   [`split`](crate::recovery::xorsecretsharing::split) uses by default
//! - any other implementation can be injected through the `*_with`
//!   variants, e.g. a hardware token or a seeded generator in tests
//!
//! Implementations must be cryptographically secure when used outside of
//! tests: output must never repeat across calls and must not be
//! predictable from earlier output.

mod os_random;

pub use os_random::OsRandom;

use crate::error::Result;

/// A source of cryptographically secure random bytes.
pub trait RandomSource {
    /// Fills `dest` entirely with random bytes.
    fn fill_bytes(&mut self, dest: &mut [u8]) -> Result<()>;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    #[inline]
    fn fill_bytes(&mut self, dest: &mut [u8]) -> Result<()> {
        (**self).fill_bytes(dest)
    }
}
