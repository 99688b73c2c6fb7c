// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # rombound
//!
//! Gate a code image on its measurement before it runs.
//!
//! The image is measured with MD5 and compared against a reference digest.
//! On mismatch the caller is told to halt. On match a compound device
//! identifier (CDI) is derived as `HMAC-MD5(label, measurement)` and handed
//! back together with the measurement.
//!
//! ```
//! use rombound::{BootPolicy, BootError};
//!
//! let image = b"\x13\x05\x00\x00\x67\x80\x00\x00";
//! let expected = rombound::measure(image);
//!
//! let policy = BootPolicy::new(expected, "device-cdi").unwrap();
//! let attestation = policy.verify(image).unwrap();
//! assert_eq!(attestation.measurement(), &expected);
//!
//! let tampered = b"\x13\x05\x00\x00\x67\x80\x00\x01";
//! assert!(matches!(
//!     policy.verify(tampered),
//!     Err(BootError::MeasurementMismatch { .. })
//! ));
//! ```
//!
//! The building blocks are re-exported: [`digest`] (MD5, RFC 1321) and
//! [`hmac`] (HMAC-MD5, RFC 2104, keys up to one 64-byte block).

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

extern crate alloc;

#[cfg(test)]
mod tests;

mod boot;
mod error;

pub use boot::{Attestation, BootDecision, BootPolicy, derive_cdi, measure};
pub use error::BootError;

pub use rombound_hmac::{HmacError, MAX_KEY_LEN, Tag, hmac, verify};
pub use rombound_md5::{BLOCK_LEN, DIGEST_LEN, Digest, ParseDigestError, digest};
