//! Byte-level blinding and recovery rules for the 2-of-3 XOR scheme.
//!
//! Every secret byte `x` is blinded with one mask byte `y` in three
//! different ways, one per share role:
//!
//! ```text
//! high = (x >> 4)        ^ y     high nibble moved to the low position
//! low  = (x & 0x0f) << 4 ^ y     low nibble moved to the high position
//! full =  x              ^ y
//! ```
//!
//! XORing any two of the three cancels `y`, and each pair leaves enough
//! of `x` behind to rebuild it exactly. This module holds only those
//! per-byte formulas; tags, lengths and validation live in `core`.
//!
//! All functions are branch-free over the data bytes.

/// Blinds the high nibble of `x`, shifted into the low position.
#[inline]
pub(crate) fn conceal_high(x: u8, y: u8) -> u8 {
    ((x & 0xf0) >> 4) ^ y
}

/// Blinds the low nibble of `x`, shifted into the high position.
#[inline]
pub(crate) fn conceal_low(x: u8, y: u8) -> u8 {
    ((x & 0x0f) << 4) ^ y
}

/// Blinds the whole of `x`.
#[inline]
pub(crate) fn conceal_full(x: u8, y: u8) -> u8 {
    x ^ y
}

/// Recovers a byte from its high-nibble and low-nibble shares.
///
/// `a ^ b` is `x` with its nibbles swapped; swapping them back restores it.
#[inline]
pub(crate) fn reveal_high_low(a: u8, b: u8) -> u8 {
    let c = a ^ b;
    ((c << 4) & 0xf0) | ((c >> 4) & 0x0f)
}

/// Recovers a byte from its high-nibble and full-byte shares.
///
/// The high nibble of `a ^ b` is untouched by the high share, so folding it
/// back down cancels the high share's contribution to the low nibble.
#[inline]
pub(crate) fn reveal_high_full(a: u8, b: u8) -> u8 {
    let c = a ^ b;
    ((c & 0xf0) >> 4) ^ c
}

/// Recovers a byte from its low-nibble and full-byte shares.
#[inline]
pub(crate) fn reveal_low_full(a: u8, b: u8) -> u8 {
    let c = a ^ b;
    ((c & 0x0f) << 4) ^ c
}
