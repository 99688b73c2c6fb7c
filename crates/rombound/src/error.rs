// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Boot verification error types

use thiserror::Error;

use rombound_hmac::HmacError;
use rombound_md5::{Digest, ParseDigestError};

/// Boot verification error
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BootError {
    /// The configured reference digest is not valid hex
    #[error("invalid expected digest: {0}")]
    InvalidExpectedDigest(#[from] ParseDigestError),

    /// CDI derivation failed (label too long, allocation)
    #[error(transparent)]
    Hmac(#[from] HmacError),

    /// The image does not match the reference; it must not run
    #[error("measurement {measured} does not match expected {expected}")]
    MeasurementMismatch {
        /// Reference digest from the policy
        expected: Digest,
        /// Digest of the supplied image
        measured: Digest,
    },
}
