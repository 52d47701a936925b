//! (2,3) XOR secret sharing core implementation.
//!
//! This module provides the public API for a fixed **2-of-3 threshold**
//! secret sharing scheme built entirely from XOR and nibble shifts.
//!
//! A secret is divided into exactly three *shares* such that:
//!
//! - Any two shares reconstruct the secret exactly.
//! - A single share reveals nothing about the secret except its length.
//!
//! Each byte of the secret is handled independently and blinded with one
//! byte of a fresh random mask drawn once per split.
//!
//! ## Wire format
//!
//! A share is a plain byte sequence:
//!
//! ```text
//! [tag, payload_0, payload_1, ..., payload_{n-1}]
//! ```
//!
//! where `tag` is `0x00`, `0x01` or `0x02` and `n` is the secret length.
//! There is no length prefix, checksum or version byte. Any text encoding
//! (hex, base64, ...) is left to the transport.
//!
//! ## Provided operations
//!
//! - [`split`], [`split_with`], [`split_with_mask`]
//!   Split a secret into three tagged shares.
//!
//! - [`join`], [`combine`]
//!   Reconstruct the secret from any two shares, in either order.
//!
//! - [`refresh`], [`refresh_with`]
//!   Re-randomise a full set of shares without reconstructing the secret.
//!
//! - [`reissue`]
//!   Rebuild a lost share from the two remaining ones.
//!
//! ## Scope and limitations
//!
//! This module provides **confidentiality through threshold secrecy only**.
//! It does **not** provide authentication or integrity protection: a
//! tampered share is not detected and simply yields a different secret.
//! Adding a MAC would change the wire format, so integrity has to be
//! handled by higher layers.

use std::fmt;

use subtle::ConstantTimeEq;
use tracing::{debug, trace};
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use crate::{
    error::{Result, SharingError},
    recovery::xor23::nibble,
    rng::{OsRandom, RandomSource},
};

/// Role of a share within a split, stored as its first byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Tag {
    /// Carries the high nibble of every secret byte.
    High = 0,

    /// Carries the low nibble of every secret byte.
    Low = 1,

    /// Carries every secret byte whole.
    Full = 2,
}

impl Tag {
    /// All tags, in the order [`split`] returns their shares.
    pub const ALL: [Tag; 3] = [Tag::High, Tag::Low, Tag::Full];

    /// Returns the wire value of the tag.
    #[inline]
    pub const fn as_byte(self) -> u8 {
        self as u8
    }

    #[inline]
    fn conceal(self, x: u8, y: u8) -> u8 {
        match self {
            Tag::High => nibble::conceal_high(x, y),
            Tag::Low => nibble::conceal_low(x, y),
            Tag::Full => nibble::conceal_full(x, y),
        }
    }
}

impl TryFrom<u8> for Tag {
    type Error = SharingError;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            0 => Ok(Tag::High),
            1 => Ok(Tag::Low),
            2 => Ok(Tag::Full),
            _ => Err(SharingError::InvalidShares("share tag must be 0, 1 or 2")),
        }
    }
}

/// A single share of a secret.
///
/// The share owns its wire bytes (tag followed by payload) and is always
/// valid: it is non-empty and its first byte is a known [`Tag`].
///
/// Share memory is wiped when the share is dropped. There is no way to
/// wipe a share in place, so a live share never loses its tag byte.
///
/// Equality compares payloads in constant time. The `Debug` output never
/// includes payload bytes.
#[derive(Clone)]
pub struct Share {
    tag: Tag,

    /// Wire bytes: `[tag, payload...]`.
    bytes: Vec<u8>,
}

/// The three shares produced by one split, ordered by tag.
pub type Shares = [Share; 3];

impl Share {
    /// Parses a share from its wire bytes.
    ///
    /// # Errors
    ///
    /// Returns [`SharingError::InvalidShares`] if `bytes` is empty or its
    /// first byte is not a valid tag.
    pub fn from_bytes(mut bytes: Vec<u8>) -> Result<Self> {
        let Some(&tag) = bytes.first() else {
            return Err(SharingError::InvalidShares("share is empty"));
        };

        match Tag::try_from(tag) {
            Ok(tag) => Ok(Self { tag, bytes }),
            Err(e) => {
                bytes.zeroize();
                Err(e)
            }
        }
    }

    /// Returns the role of this share.
    #[inline]
    pub fn tag(&self) -> Tag {
        self.tag
    }

    /// Returns the blinded payload, one byte per secret byte.
    #[inline]
    pub fn payload(&self) -> &[u8] {
        &self.bytes[1..]
    }

    /// Returns the length of the secret this share was split from.
    #[inline]
    pub fn secret_len(&self) -> usize {
        self.bytes.len() - 1
    }

    /// Returns the wire bytes (tag followed by payload).
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Consumes the share and returns its wire bytes.
    ///
    /// The returned vector is no longer wiped automatically.
    pub fn into_bytes(mut self) -> Vec<u8> {
        std::mem::take(&mut self.bytes)
    }

    /// Builds the share of role `tag` for `secret` under `mask`.
    ///
    /// Both slices must have the same length.
    fn conceal(tag: Tag, secret: &[u8], mask: &[u8]) -> Self {
        let mut bytes = Vec::with_capacity(secret.len() + 1);
        bytes.push(tag.as_byte());
        bytes.extend(
            secret
                .iter()
                .zip(mask)
                .map(|(&x, &y)| tag.conceal(x, y)),
        );

        Self { tag, bytes }
    }

    /// Returns a copy of this share with `delta` XORed into the payload.
    fn reblind(&self, delta: &[u8]) -> Self {
        let mut share = self.clone();
        for (byte, &d) in share.bytes[1..].iter_mut().zip(delta) {
            *byte ^= d;
        }

        share
    }
}

impl Drop for Share {
    fn drop(&mut self) {
        self.bytes.zeroize();
    }
}

impl ZeroizeOnDrop for Share {}

impl PartialEq for Share {
    fn eq(&self, other: &Self) -> bool {
        self.tag == other.tag
            && bool::from(self.bytes.as_slice().ct_eq(other.bytes.as_slice()))
    }
}

impl Eq for Share {}

impl fmt::Debug for Share {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Share")
            .field("tag", &self.tag)
            .field("secret_len", &self.secret_len())
            .finish_non_exhaustive()
    }
}

impl TryFrom<Vec<u8>> for Share {
    type Error = SharingError;

    fn try_from(bytes: Vec<u8>) -> Result<Self> {
        Self::from_bytes(bytes)
    }
}

impl TryFrom<&[u8]> for Share {
    type Error = SharingError;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        Self::from_bytes(bytes.to_vec())
    }
}

impl AsRef<[u8]> for Share {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

/// Splits a secret into three shares using the operating system CSPRNG.
///
/// This is [`split_with`] called with [`OsRandom`].
///
/// # Errors
///
/// Returns [`SharingError::Entropy`] if the platform generator fails.
pub fn split(secret: &[u8]) -> Result<Shares> {
    split_with(secret, &mut OsRandom)
}

/// Splits a secret into three shares, drawing the mask from `rng`.
///
/// # Arguments
///
/// - `secret`
///   The secret to split. May be empty, in which case every share
///   consists of its tag byte only.
/// - `rng`
///   Source of the one-time mask. Exactly `secret.len()` bytes are drawn.
///
/// # Returns
///
/// Shares tagged `0`, `1` and `2`, in that order, each `secret.len() + 1`
/// bytes long.
///
/// # Errors
///
/// Propagates any error reported by `rng`.
///
/// # Cryptographic notes
///
/// The mask is wiped before this function returns. Security rests on the
/// mask being uniformly random and never reused.
pub fn split_with<R: RandomSource + ?Sized>(secret: &[u8], rng: &mut R) -> Result<Shares> {
    let mut mask = Zeroizing::new(vec![0u8; secret.len()]);
    rng.fill_bytes(mask.as_mut_slice())?;

    split_with_mask(secret, &mask)
}

/// Splits a secret into three shares using a caller-supplied mask.
///
/// This is the deterministic core of [`split_with`]. It is meant for test
/// vectors and for callers that source the mask themselves; reusing a
/// mask across secrets destroys the scheme's secrecy.
///
/// # Errors
///
/// Returns [`SharingError::InvalidInput`] if `mask` is not exactly as long
/// as `secret`.
pub fn split_with_mask(secret: &[u8], mask: &[u8]) -> Result<Shares> {
    if mask.len() != secret.len() {
        return Err(SharingError::InvalidInput {
            expected: secret.len(),
            actual: mask.len(),
        });
    }

    trace!(secret_len = secret.len(), "splitting secret");

    Ok(Tag::ALL.map(|tag| Share::conceal(tag, secret, mask)))
}

/// Reconstructs a secret from the wire bytes of two shares.
///
/// The shares may be passed in either order.
///
/// # Errors
///
/// Returns:
/// - [`SharingError::InvalidShares`] if either share is empty
/// - [`SharingError::SizeMismatch`] if the shares have different lengths
/// - [`SharingError::InvalidShares`] if the tags are not two distinct
///   values from `{0, 1, 2}`
///
/// Nothing is recovered on error.
pub fn join(a: &[u8], b: &[u8]) -> Result<Vec<u8>> {
    let (Some(&tag_a), Some(&tag_b)) = (a.first(), b.first()) else {
        debug!(left = a.len(), right = b.len(), "rejecting empty share");
        return Err(SharingError::InvalidShares("share is empty"));
    };

    if a.len() != b.len() {
        debug!(left = a.len(), right = b.len(), "rejecting shares of different sizes");
        return Err(SharingError::SizeMismatch {
            left: a.len(),
            right: b.len(),
        });
    }

    let (tag_a, tag_b) = match (Tag::try_from(tag_a), Tag::try_from(tag_b)) {
        (Ok(tag_a), Ok(tag_b)) => (tag_a, tag_b),
        (Err(e), _) | (_, Err(e)) => {
            debug!(tag_a, tag_b, "rejecting unknown share tag");
            return Err(e);
        }
    };

    let (a, b, tag_a, tag_b) = if tag_a > tag_b {
        (b, a, tag_b, tag_a)
    } else {
        (a, b, tag_a, tag_b)
    };

    let reveal: fn(u8, u8) -> u8 = match (tag_a, tag_b) {
        (Tag::High, Tag::Low) => nibble::reveal_high_low,
        (Tag::High, Tag::Full) => nibble::reveal_high_full,
        (Tag::Low, Tag::Full) => nibble::reveal_low_full,
        _ => {
            debug!(?tag_a, "rejecting duplicate share tag");
            return Err(SharingError::InvalidShares("share tags must be distinct"));
        }
    };

    trace!(?tag_a, ?tag_b, secret_len = a.len() - 1, "joining shares");

    Ok(a[1..]
        .iter()
        .zip(&b[1..])
        .map(|(&x, &y)| reveal(x, y))
        .collect())
}

/// Reconstructs a secret from two parsed shares.
///
/// Equivalent to [`join`] on their wire bytes.
pub fn combine(a: &Share, b: &Share) -> Result<Vec<u8>> {
    join(a.as_bytes(), b.as_bytes())
}

/// Refreshes a full set of shares using the operating system CSPRNG.
///
/// This is [`refresh_with`] called with [`OsRandom`].
pub fn refresh(shares: &Shares) -> Result<Shares> {
    refresh_with(shares, &mut OsRandom)
}

/// Refreshes a full set of shares without reconstructing the secret.
///
/// # Arguments
///
/// - `shares`
///   All three shares of one split, ordered by tag as returned by
///   [`split`].
/// - `rng`
///   Source of the refresh delta.
///
/// # Returns
///
/// Three new shares for the same secret. Old and new shares cannot be
/// mixed: combining one of each yields garbage.
///
/// # Errors
///
/// Returns:
/// - [`SharingError::InvalidShares`] if the shares are not tagged `0`, `1`,
///   `2` in order
/// - [`SharingError::SizeMismatch`] if the shares have different lengths
/// - any error reported by `rng`
///
/// # Cryptographic notes
///
/// Every share is `f_tag(secret) ^ mask`. XORing one random delta into all
/// three payloads turns the mask into `mask ^ delta`:
///
/// ```text
/// share' = f_tag(secret) ^ (mask ^ delta)
/// ```
///
/// which is a fresh, uniformly random mask for the same secret.
pub fn refresh_with<R: RandomSource + ?Sized>(shares: &Shares, rng: &mut R) -> Result<Shares> {
    if shares.iter().zip(Tag::ALL).any(|(share, tag)| share.tag != tag) {
        return Err(SharingError::InvalidShares(
            "refresh requires shares tagged 0, 1, 2 in order",
        ));
    }

    let len = shares[0].bytes.len();
    if let Some(other) = shares[1..].iter().find(|share| share.bytes.len() != len) {
        return Err(SharingError::SizeMismatch {
            left: len,
            right: other.bytes.len(),
        });
    }

    let mut delta = Zeroizing::new(vec![0u8; len - 1]);
    rng.fill_bytes(delta.as_mut_slice())?;

    trace!(secret_len = len - 1, "refreshing shares");

    Ok(shares.each_ref().map(|share| share.reblind(&delta)))
}

/// Rebuilds the missing third share from two shares of the same split.
///
/// The result is bit-identical to the share originally produced by the
/// split, so it combines with either of the inputs.
///
/// # Errors
///
/// Same as [`combine`].
///
/// # Cryptographic notes
///
/// Two shares determine both the secret and the mask: once the secret is
/// known, `mask = share ^ f_tag(secret)`. Both are wiped before return.
pub fn reissue(a: &Share, b: &Share) -> Result<Share> {
    let secret = Zeroizing::new(combine(a, b)?);

    let missing = Tag::ALL
        .into_iter()
        .find(|&tag| tag != a.tag && tag != b.tag)
        .ok_or(SharingError::InvalidShares("share tags must be distinct"))?;

    let mask: Zeroizing<Vec<u8>> = Zeroizing::new(
        a.payload()
            .iter()
            .zip(secret.iter())
            .map(|(&s, &x)| s ^ a.tag.conceal(x, 0))
            .collect(),
    );

    debug!(?missing, "reissuing share");

    Ok(Share::conceal(missing, &secret, &mask))
}
