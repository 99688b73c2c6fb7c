// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! HMAC-MD5 per RFC 2104

use alloc::vec::Vec;

use rombound_md5::{BLOCK_LEN, DIGEST_LEN, digest};
use rombound_util::xor_bytes_with_pattern;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use crate::error::HmacError;
use crate::tag::Tag;

/// Longest accepted key: one MD5 block
pub const MAX_KEY_LEN: usize = BLOCK_LEN;

/// ipad byte per RFC 2104 Section 2
pub(crate) const IPAD: u8 = 0x36;

/// opad byte per RFC 2104 Section 2
pub(crate) const OPAD: u8 = 0x5c;

/// Key right-padded with zeros to one block
#[derive(Zeroize, ZeroizeOnDrop)]
pub(crate) struct KeyBlock([u8; BLOCK_LEN]);

impl KeyBlock {
    /// Build the key block, refusing keys longer than the block
    pub fn new(key: &[u8]) -> Result<Self, HmacError> {
        if key.len() > MAX_KEY_LEN {
            return Err(HmacError::KeyTooLong {
                len: key.len(),
                max: MAX_KEY_LEN,
            });
        }

        let mut block = [0u8; BLOCK_LEN];
        block[..key.len()].copy_from_slice(key);
        Ok(Self(block))
    }

    /// Write `K ^ pattern` into `pad`
    pub fn xor_into(&self, pad: &mut [u8], pattern: u8) {
        xor_bytes_with_pattern(pad, &self.0, pattern);
    }

    #[cfg(test)]
    pub fn as_bytes(&self) -> &[u8; BLOCK_LEN] {
        &self.0
    }
}

/// Compute HMAC-MD5(key, message).
///
/// `key` may be empty and at most [`MAX_KEY_LEN`] bytes. The inner input
/// `(K ^ ipad) || message` is built in an owned buffer reserved up front;
/// the outer input `(K ^ opad) || inner digest` is always 80 bytes.
///
/// # Errors
///
/// - [`HmacError::KeyTooLong`] if `key.len() > 64`. Nothing is hashed.
/// - [`HmacError::Allocation`] if the inner input cannot be allocated.
///
/// # Example
///
/// ```
/// use rombound_hmac::hmac;
///
/// let tag = hmac(b"key", b"The quick brown fox jumps over the lazy dog").unwrap();
/// assert_eq!(tag.expose()[..4], [0x80, 0x07, 0x07, 0x13]);
/// ```
pub fn hmac(key: &[u8], message: &[u8]) -> Result<Tag, HmacError> {
    let key_block = KeyBlock::new(key)?;

    // Inner: MD5((K ^ ipad) || message)
    let mut inner_input = Zeroizing::new(Vec::new());
    inner_input.try_reserve_exact(BLOCK_LEN + message.len())?;
    inner_input.resize(BLOCK_LEN, 0);
    key_block.xor_into(&mut inner_input[..BLOCK_LEN], IPAD);
    inner_input.extend_from_slice(message);

    let mut inner_digest = digest(&inner_input).into_bytes();

    // Outer: MD5((K ^ opad) || inner digest)
    let mut outer_input = Zeroizing::new([0u8; BLOCK_LEN + DIGEST_LEN]);
    key_block.xor_into(&mut outer_input[..BLOCK_LEN], OPAD);
    outer_input[BLOCK_LEN..].copy_from_slice(&inner_digest);
    inner_digest.zeroize();

    Ok(Tag::from_digest(digest(&outer_input[..])))
}

/// Recompute HMAC-MD5(key, message) and compare it to `expected` in
/// constant time.
///
/// Returns `Ok(false)` on mismatch, including when `expected` is not
/// 16 bytes long.
///
/// # Errors
///
/// Same as [`hmac`].
pub fn verify(key: &[u8], message: &[u8], expected: &[u8]) -> Result<bool, HmacError> {
    Ok(hmac(key, message)?.matches(expected))
}
