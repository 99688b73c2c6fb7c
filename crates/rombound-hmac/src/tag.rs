// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::fmt;

use rombound_md5::{DIGEST_LEN, Digest};
use rombound_util::constant_time_eq;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// A 16-byte HMAC-MD5 tag.
///
/// Tags double as derived secrets, so they are not `Copy`, print redacted
/// under `Debug`, compare in constant time and are zeroized on drop. Use
/// [`expose()`](Tag::expose) to read the bytes.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Tag([u8; DIGEST_LEN]);

impl Tag {
    pub(crate) fn from_digest(digest: Digest) -> Self {
        Self(digest.into_bytes())
    }

    /// Borrow the raw tag bytes
    #[inline]
    pub fn expose(&self) -> &[u8; DIGEST_LEN] {
        &self.0
    }

    /// Compare against a tag received as raw bytes, in constant time.
    ///
    /// Returns `false` when `other` is not 16 bytes long.
    pub fn matches(&self, other: &[u8]) -> bool {
        constant_time_eq(&self.0, other)
    }
}

impl PartialEq for Tag {
    fn eq(&self, other: &Self) -> bool {
        constant_time_eq(&self.0, &other.0)
    }
}

impl Eq for Tag {}

impl fmt::Debug for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED Tag]")
    }
}
