// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Byte-level helpers shared by the rombound crates.
//!
//! Word conversions are explicit little-endian encoders and decoders working on
//! byte arrays; nothing here reinterprets memory through pointer casts, so the
//! results never depend on the host's native byte order.

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

extern crate alloc;

#[cfg(any(test, feature = "test-utils"))]
use alloc::vec::Vec;

use subtle::ConstantTimeEq;

mod error;

#[cfg(test)]
mod tests;

pub use error::HexError;

/// Writes `src[i] ^ pattern` into `dst[i]` for every byte of `src`.
///
/// Bytes of `dst` past `src.len()` are set to `pattern`, which is exactly the
/// value a zero byte XORed with `pattern` would produce. This is how HMAC pads
/// are built from a key shorter than the block.
///
/// # Panics
///
/// Panics if `src` is longer than `dst`.
///
/// # Example
///
/// ```
/// use rombound_util::xor_bytes_with_pattern;
///
/// let mut pad = [0u8; 4];
/// xor_bytes_with_pattern(&mut pad, &[0x01, 0x02], 0x36);
/// assert_eq!(pad, [0x37, 0x34, 0x36, 0x36]);
/// ```
#[inline]
pub fn xor_bytes_with_pattern(dst: &mut [u8], src: &[u8], pattern: u8) {
    let (head, tail) = dst.split_at_mut(src.len());
    for (d, s) in head.iter_mut().zip(src.iter()) {
        *d = s ^ pattern;
    }
    tail.fill(pattern);
}

/// Constant-time equality comparison for byte slices.
///
/// Returns `false` immediately on length mismatch; otherwise the comparison
/// does not short-circuit on the first differing byte.
///
/// # Example
///
/// ```
/// use rombound_util::constant_time_eq;
///
/// assert!(constant_time_eq(&[1, 2, 3], &[1, 2, 3]));
/// assert!(!constant_time_eq(&[1, 2, 3], &[1, 2, 4]));
/// assert!(!constant_time_eq(&[1, 2, 3], &[1, 2]));
/// ```
#[inline]
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    a.len() == b.len() && bool::from(a.ct_eq(b))
}

/// Decodes a hexadecimal string into `out`.
///
/// Accepts upper and lower case digits. The string must be exactly
/// `2 * out.len()` characters long.
///
/// # Errors
///
/// - [`HexError::InvalidLength`] if the string length does not match.
/// - [`HexError::InvalidDigit`] with the offending character index otherwise.
///
/// `out` is left untouched on error.
///
/// # Example
///
/// ```
/// use rombound_util::decode_hex_into;
///
/// let mut out = [0u8; 4];
/// decode_hex_into("deadBEEF", &mut out).unwrap();
/// assert_eq!(out, [0xde, 0xad, 0xbe, 0xef]);
/// ```
pub fn decode_hex_into(hex: &str, out: &mut [u8]) -> Result<(), HexError> {
    let digits = hex.as_bytes();
    if digits.len() != out.len() * 2 {
        return Err(HexError::InvalidLength {
            expected: out.len() * 2,
            actual: digits.len(),
        });
    }

    if let Some(index) = digits.iter().position(|&c| nibble(c).is_none()) {
        return Err(HexError::InvalidDigit { index });
    }

    for (byte, pair) in out.iter_mut().zip(digits.chunks_exact(2)) {
        // Both digits were validated above.
        let hi = nibble(pair[0]).unwrap_or_default();
        let lo = nibble(pair[1]).unwrap_or_default();
        *byte = (hi << 4) | lo;
    }

    Ok(())
}

#[inline(always)]
fn nibble(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

/// Writes `bytes` as lowercase hex into a formatter.
///
/// Used by the `Display` impls of digest types so log lines never need an
/// intermediate `String`.
pub fn write_hex(f: &mut core::fmt::Formatter<'_>, bytes: &[u8]) -> core::fmt::Result {
    for byte in bytes {
        write!(f, "{byte:02x}")?;
    }
    Ok(())
}

/// Parses a hexadecimal string into bytes.
///
/// # Panics
///
/// Panics if the string contains invalid hex characters or has odd length.
/// Only meant for test vectors.
///
/// # Example
///
/// ```
/// use rombound_util::hex_to_bytes;
///
/// let bytes = hex_to_bytes("deadbeef");
/// assert_eq!(bytes, vec![0xde, 0xad, 0xbe, 0xef]);
/// ```
#[cfg(any(test, feature = "test-utils"))]
pub fn hex_to_bytes(hex: &str) -> Vec<u8> {
    if hex.len() % 2 != 0 {
        panic!("hex string has odd length: {}", hex.len());
    }
    let mut out = alloc::vec![0u8; hex.len() / 2];
    if let Err(e) = decode_hex_into(hex, &mut out) {
        panic!("invalid hex string {hex:?}: {e}");
    }
    out
}

/// Generates `{type}_from_le` and `{type}_to_le` functions for integer types.
macro_rules! impl_le_conversions {
    ($type:ty, $size:expr, $fn_from:ident, $fn_to:ident) => {
        #[doc = concat!("Converts ", stringify!($size), " bytes to a little-endian `", stringify!($type), "`, zeroizing the source bytes.")]
        ///
        /// The integer is assembled with shifts, so the result is independent
        /// of the host byte order.
        #[inline(always)]
        pub fn $fn_from(dst: &mut $type, bytes: &mut [u8; $size]) {
            *dst = 0;
            for (i, byte) in bytes.iter_mut().enumerate() {
                *dst |= (*byte as $type) << (8 * i);
                *byte = 0;
            }
        }

        #[doc = concat!("Converts a `", stringify!($type), "` to little-endian bytes, zeroizing the source.")]
        #[inline(always)]
        pub fn $fn_to(src: &mut $type, bytes: &mut [u8; $size]) {
            for (i, byte) in bytes.iter_mut().enumerate() {
                *byte = (*src >> (8 * i)) as u8;
            }
            *src = 0;
        }
    };
}

impl_le_conversions!(u32, 4, u32_from_le, u32_to_le);
impl_le_conversions!(u64, 8, u64_from_le, u64_to_le);

/// Verifies that a slice is zeroized.
///
/// # Example
///
/// ```
/// use rombound_util::is_slice_zeroized;
///
/// assert!(is_slice_zeroized(&[0u8; 10]));
/// assert!(!is_slice_zeroized(&[0u8, 1, 0, 0]));
/// ```
#[inline(always)]
pub fn is_slice_zeroized(slice: &[u8]) -> bool {
    slice.iter().all(|&b| b == 0)
}
