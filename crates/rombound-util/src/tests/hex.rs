// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::fmt;

use crate::*;

struct Hex<'a>(&'a [u8]);

impl fmt::Display for Hex<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_hex(f, self.0)
    }
}

#[test]
fn test_decode_hex_mixed_case() {
    let mut out = [0u8; 3];
    decode_hex_into("0aFf10", &mut out).expect("Failed to decode_hex_into(..)");
    assert_eq!(out, [0x0a, 0xff, 0x10]);
}

#[test]
fn test_decode_hex_empty() {
    let mut out = [0u8; 0];
    assert_eq!(decode_hex_into("", &mut out), Ok(()));
}

#[test]
fn test_decode_hex_rejects_wrong_length() {
    let mut out = [0u8; 2];
    assert_eq!(
        decode_hex_into("abc", &mut out),
        Err(HexError::InvalidLength {
            expected: 4,
            actual: 3
        })
    );
}

#[test]
fn test_decode_hex_rejects_bad_digit_and_keeps_output() {
    let mut out = [0x11u8; 2];
    assert_eq!(
        decode_hex_into("12g4", &mut out),
        Err(HexError::InvalidDigit { index: 2 })
    );
    assert_eq!(out, [0x11, 0x11]);
}

#[test]
fn test_write_hex() {
    let rendered = format!("{}", Hex(&[0x00, 0x7f, 0xab]));
    assert_eq!(rendered, "007fab");
}

#[test]
fn test_hex_to_bytes() {
    assert_eq!(hex_to_bytes("deadbeef"), vec![0xde, 0xad, 0xbe, 0xef]);
}

#[test]
#[should_panic(expected = "odd length")]
fn test_hex_to_bytes_odd_length_panics() {
    hex_to_bytes("abc");
}
