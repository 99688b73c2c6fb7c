// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::collections::TryReserveError;

use thiserror::Error;

/// HMAC error
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HmacError {
    /// Key does not fit the 64-byte key block
    #[error("key is {len} bytes, longer than the {max}-byte block")]
    KeyTooLong {
        /// Supplied key length
        len: usize,
        /// Block size
        max: usize,
    },

    /// The inner input buffer could not be allocated
    #[error("failed to allocate HMAC inner input")]
    Allocation(#[from] TryReserveError),
}
