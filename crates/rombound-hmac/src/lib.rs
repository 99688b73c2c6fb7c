// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! HMAC-MD5
//!
//! Implementation per RFC 2104 with B = 64 and L = 16, built only on the
//! public one-shot [`rombound_md5::digest`].
//!
//! Keys longer than the 64-byte block are refused with
//! [`HmacError::KeyTooLong`] rather than hashed down, so a tag can only be
//! produced from key material that fits the key block as-is.
//!
//! References:
//! - RFC 2104: HMAC: Keyed-Hashing for Message Authentication
//!   <https://datatracker.ietf.org/doc/html/rfc2104>
//! - RFC 2202: Test Cases for HMAC-MD5 and HMAC-SHA-1
//!   <https://datatracker.ietf.org/doc/html/rfc2202>

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

extern crate alloc;

#[cfg(test)]
mod tests;

mod error;
mod hmac;
mod tag;

pub use error::HmacError;
pub use hmac::{MAX_KEY_LEN, hmac, verify};
pub use tag::Tag;
