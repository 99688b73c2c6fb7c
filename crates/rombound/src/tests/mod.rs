// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.


/// Deterministic 1000-byte stand-in for a RAM image
pub(crate) fn sample_image() -> Vec<u8> {
    (0..1000usize).map(|i| (i * 7 + 3) as u8).collect()
}

pub(crate) const SAMPLE_IMAGE_MD5: &str = "10046f077f2082ac19676b8079f1cb1a";

pub(crate) const SAMPLE_LABEL: &[u8] = b"boot-cdi";

/// HMAC-MD5(SAMPLE_LABEL, MD5(sample_image()))
pub(crate) const SAMPLE_CDI: &str = "54393cfc617ecdce55c3b99450f774f3";
