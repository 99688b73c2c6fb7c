// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use thiserror::Error;

/// Hex decoding error
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum HexError {
    /// Input length does not match the output buffer
    #[error("expected {expected} hex digits, got {actual}")]
    InvalidLength {
        /// Required number of hex digits
        expected: usize,
        /// Number of characters supplied
        actual: usize,
    },

    /// Non-hex character in input
    #[error("invalid hex digit at index {index}")]
    InvalidDigit {
        /// Byte offset of the first invalid character
        index: usize,
    },
}
