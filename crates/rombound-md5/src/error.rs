// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use thiserror::Error;

use rombound_util::HexError;

/// Error parsing a [`Digest`](crate::Digest) from its hex form
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseDigestError {
    /// The string is not exactly 32 hex digits
    #[error("invalid digest: {0}")]
    Hex(#[from] HexError),
}
