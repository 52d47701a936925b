//! (2,3) XOR secret sharing implementation.
//!
//! The implementation is split into two layers:
//!
//! - [`core`]  
//!   Public API and protocol logic.
//!
//!   This module defines the externally visible types and operations:
//!   - tags and share representation
//!   - share parsing and validation
//!   - secret splitting and joining
//!   - share refresh and reissue
//!
//! - `nibble`  
//!   Per-byte blinding and recovery formulas.
//!
//!   Kept private so every share is built and validated through `core`.
//!
//! ## Security scope
//!
//! One share on its own is the secret (or one of its nibbles) XORed with a
//! uniformly random mask, so it leaks only the secret length. Two shares
//! cancel the mask. A flipped payload bit survives the XOR and lands in the
//! recovered secret unnoticed; the tag byte is the only thing checked.

pub mod core;
pub(crate) mod nibble;
