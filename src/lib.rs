//! (2,3) threshold secret sharing
//!
//! This crate splits a secret byte sequence into exactly three shares.
//! Any two of them reconstruct the secret exactly; any single one reveals
//! nothing but the secret's length.
//!
//! ```no_run
//! use xorshare::recovery::xorsecretsharing::{join, split};
//!
//! # fn main() -> xorshare::error::Result<()> {
//! let [high, _low, full] = split(b"correct horse")?;
//! let secret = join(full.as_bytes(), high.as_bytes())?;
//! assert_eq!(secret, b"correct horse");
//! # Ok(())
//! # }
//! ```
//!
//! # Module overview
//!
//! - `recovery`  
//!   The secret sharing scheme itself: share types, split, join, refresh
//!   and reissue. Every byte of the secret is blinded independently with
//!   one byte of a per-split random mask.
//!
//! - `rng`  
//!   The [`RandomSource`](rng::RandomSource) seam through which the mask is
//!   drawn, and [`OsRandom`](rng::OsRandom), the default source backed by
//!   the platform CSPRNG. Tests and embedders can inject their own.
//!
//! - `error`  
//!   [`SharingError`](error::SharingError) and the crate `Result` alias.
//!
//! # Integrity
//!
//! Shares carry no MAC or checksum. A modified share is not detected and
//! joins to a different secret. The wire format is a bare tag byte
//! followed by the payload, and stays that way for compatibility.
//!
//! # Features
//!
//! - `js`  
//!   Draw randomness from Web Crypto on `wasm32-unknown-unknown`.

mod os;

pub mod error;
pub mod recovery;
pub mod rng;
