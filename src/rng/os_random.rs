//! Randomness drawn straight from the operating system.

use crate::{error::Result, os::sys_random, rng::RandomSource};

/// Randomness source backed by the platform CSPRNG.
///
/// This type is stateless: every call goes to the kernel (or to Web Crypto
/// on `wasm32` with the `js` feature), so there is no internal state that
/// could leak earlier output.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsRandom;

impl OsRandom {
    /// Creates a new handle to the operating system generator.
    pub fn new() -> Self {
        Self
    }
}

impl RandomSource for OsRandom {
    fn fill_bytes(&mut self, dest: &mut [u8]) -> Result<()> {
        sys_random(dest)?;

        Ok(())
    }
}
