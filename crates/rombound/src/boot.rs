// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Measure, compare, derive.

use alloc::vec::Vec;
use core::fmt;

use log::{debug, info, warn};
use rombound_hmac::{HmacError, MAX_KEY_LEN, Tag, hmac};
use rombound_md5::{Digest, digest};
use rombound_util::constant_time_eq;
use zeroize::Zeroizing;

use crate::error::BootError;

/// Measure an image: its MD5 digest
pub fn measure(image: &[u8]) -> Digest {
    let measurement = digest(image);
    debug!("measured {} bytes: {}", image.len(), measurement);
    measurement
}

/// Derive the CDI for a measurement: `HMAC-MD5(key = label, message = measurement)`.
///
/// # Errors
///
/// [`BootError::Hmac`] if `label` is longer than 64 bytes or the HMAC
/// buffer cannot be allocated.
pub fn derive_cdi(label: &[u8], measurement: &Digest) -> Result<Tag, BootError> {
    Ok(hmac(label, measurement.as_bytes())?)
}

/// Successful verification: the image may run.
#[derive(Debug)]
pub struct Attestation {
    measurement: Digest,
    cdi: Tag,
}

impl Attestation {
    /// Digest of the verified image
    pub fn measurement(&self) -> &Digest {
        &self.measurement
    }

    /// Compound device identifier derived from the measurement
    pub fn cdi(&self) -> &Tag {
        &self.cdi
    }
}

/// Outcome of [`BootPolicy::decide`]
#[derive(Debug)]
pub enum BootDecision {
    /// Measurement matched; run the image
    Proceed(Attestation),
    /// Measurement differs from the reference; do not run the image
    Halt {
        /// Reference digest
        expected: Digest,
        /// Digest of the supplied image
        measured: Digest,
    },
}

impl BootDecision {
    /// `true` for [`BootDecision::Proceed`]
    pub fn is_proceed(&self) -> bool {
        matches!(self, Self::Proceed(_))
    }
}

/// Reference measurement plus the label the CDI is keyed with.
pub struct BootPolicy {
    expected: Digest,
    label: Zeroizing<Vec<u8>>,
}

impl BootPolicy {
    /// Build a policy.
    ///
    /// # Errors
    ///
    /// [`BootError::Hmac`] with [`HmacError::KeyTooLong`] if `label` does not
    /// fit one HMAC key block (64 bytes). Checked here so a policy that
    /// exists can always derive.
    pub fn new(expected: Digest, label: impl Into<Vec<u8>>) -> Result<Self, BootError> {
        let label = Zeroizing::new(label.into());
        if label.len() > MAX_KEY_LEN {
            return Err(HmacError::KeyTooLong {
                len: label.len(),
                max: MAX_KEY_LEN,
            }
            .into());
        }

        Ok(Self { expected, label })
    }

    /// Build a policy from the reference digest in hex.
    ///
    /// # Errors
    ///
    /// [`BootError::InvalidExpectedDigest`] if `expected_hex` is not 32 hex
    /// digits, otherwise as [`BootPolicy::new`].
    pub fn from_hex(expected_hex: &str, label: impl Into<Vec<u8>>) -> Result<Self, BootError> {
        Self::new(Digest::from_hex(expected_hex)?, label)
    }

    /// Reference digest
    pub fn expected(&self) -> &Digest {
        &self.expected
    }

    /// Verify `image` against the reference and derive its CDI.
    ///
    /// # Errors
    ///
    /// - [`BootError::MeasurementMismatch`] if the image digest differs from
    ///   the reference. No CDI is derived.
    /// - [`BootError::Hmac`] if CDI derivation fails.
    pub fn verify(&self, image: &[u8]) -> Result<Attestation, BootError> {
        let measurement = measure(image);

        if !constant_time_eq(measurement.as_bytes(), self.expected.as_bytes()) {
            warn!(
                "measurement {} != expected {}; image will not be executed",
                measurement, self.expected
            );
            return Err(BootError::MeasurementMismatch {
                expected: self.expected,
                measured: measurement,
            });
        }

        info!("measurement {} matches; image will be executed", measurement);
        let cdi = derive_cdi(&self.label, &measurement)?;
        Ok(Attestation { measurement, cdi })
    }

    /// Like [`verify`](Self::verify), but a mismatch is a [`BootDecision::Halt`]
    /// rather than an error.
    ///
    /// # Errors
    ///
    /// [`BootError::Hmac`] if CDI derivation fails.
    pub fn decide(&self, image: &[u8]) -> Result<BootDecision, BootError> {
        match self.verify(image) {
            Ok(attestation) => Ok(BootDecision::Proceed(attestation)),
            Err(BootError::MeasurementMismatch { expected, measured }) => {
                Ok(BootDecision::Halt { expected, measured })
            }
            Err(e) => Err(e),
        }
    }
}

impl fmt::Debug for BootPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BootPolicy")
            .field("expected", &self.expected)
            .field("label", &"[REDACTED]")
            .finish()
    }
}
