//! Operating system abstraction layer
//!
//! This module gives the rest of the crate a single way to reach the
//! platform's cryptographically secure random generator.
//!
//! The concrete backend is chosen at compile time by `getrandom`, never
//! at runtime:
//!
//! - native targets (Linux, macOS, Windows, BSDs) read from the kernel
//!   CSPRNG
//! - `wasm32-unknown-unknown` reads from the browser's Web Crypto API,
//!   which requires the crate feature `js`

/// Fills a buffer with cryptographically secure random bytes from the OS.
///
/// Partial reads and interrupted syscalls are retried by `getrandom`
/// itself; on success the whole buffer is initialized. An empty buffer
/// is a no-op.
///
/// # Errors
///
/// Returns the backend error if the platform generator is unavailable.
pub(crate) fn sys_random(buf: &mut [u8]) -> Result<(), getrandom::Error> {
    getrandom::getrandom(buf)
}
