// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! MD5 message digest
//!
//! Implementation per RFC 1321. One call, one digest: there is no streaming
//! API and no state survives between calls. The hash state and the padded
//! tail are owned by the call and zeroized on drop.
//!
//! MD5 is broken as a collision-resistant hash. It is provided here for
//! compatibility with images and references that are already MD5-based.
//!
//! References:
//! - RFC 1321: The MD5 Message-Digest Algorithm
//!   <https://datatracker.ietf.org/doc/html/rfc1321>

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

#[cfg(test)]
mod tests;

mod consts;
mod digest;
mod error;
mod md5;
mod padding;

pub use consts::{BLOCK_LEN, DIGEST_LEN};
pub use digest::Digest;
pub use error::ParseDigestError;
pub use md5::digest;
