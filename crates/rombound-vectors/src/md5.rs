// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use rombound_util::hex_to_bytes;

use crate::{report, to_hex};

/// A single MD5 test case
pub struct DigestTestCase {
    /// Unique test case identifier
    pub tc_id: usize,
    /// Human-readable description
    pub comment: &'static str,
    /// Message
    pub msg: Vec<u8>,
    /// Expected digest (hex)
    pub digest: &'static str,
}

fn case(tc_id: usize, comment: &'static str, msg: Vec<u8>, digest: &'static str) -> DigestTestCase {
    DigestTestCase {
        tc_id,
        comment,
        msg,
        digest,
    }
}

/// RFC 1321 test suite plus padding-boundary vectors.
///
/// Boundary cases use runs of `a` so the tail crosses each interesting
/// length: 55 bytes (marker and length fit in one block), 56 and 57 (second
/// block needed), 63, 64 (full extra padding block) and 65.
pub fn md5_test_vectors() -> Vec<DigestTestCase> {
    vec![
        // RFC 1321 A.5
        case(1, "empty", b"".to_vec(), "d41d8cd98f00b204e9800998ecf8427e"),
        case(2, "a", b"a".to_vec(), "0cc175b9c0f1b6a831c399e269772661"),
        case(3, "abc", b"abc".to_vec(), "900150983cd24fb0d6963f7d28e17f72"),
        case(
            4,
            "message digest",
            b"message digest".to_vec(),
            "f96b697d7cb7938d525a2f31aaf161d0",
        ),
        case(
            5,
            "lowercase alphabet",
            b"abcdefghijklmnopqrstuvwxyz".to_vec(),
            "c3fcd3d76192e4007dfb496cca67e13b",
        ),
        case(
            6,
            "alphanumeric, 62 bytes",
            b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789".to_vec(),
            "d174ab98d277d9f5a5611c2c9f419d9f",
        ),
        case(
            7,
            "digits, 80 bytes",
            b"1234567890".repeat(8),
            "57edf4a22be3c955ac49da2e2107b67a",
        ),
        // Padding boundaries
        case(8, "55 bytes", vec![b'a'; 55], "ef1772b6dff9a122358552954ad0df65"),
        case(9, "56 bytes", vec![b'a'; 56], "3b0c8ac703f828b04c6c197006d17218"),
        case(10, "57 bytes", vec![b'a'; 57], "652b906d60af96844ebd21b674f35e93"),
        case(11, "63 bytes", vec![b'a'; 63], "b06521f39153d618550606be297466d5"),
        case(12, "64 bytes", vec![b'a'; 64], "014842d480b571495a4a0363793f7367"),
        case(13, "65 bytes", vec![b'a'; 65], "c743a45e0d2e6a95cb859adae0248435"),
        case(14, "119 bytes", vec![b'a'; 119], "8a7bd0732ed6a28ce75f6dabc90e1613"),
        case(15, "120 bytes", vec![b'a'; 120], "5f61c0ccad4cac44c75ff505e1f1e537"),
        case(16, "128 bytes", vec![b'a'; 128], "e510683b3f5ffe4093d021808bc6ff70"),
        // Assorted
        case(
            17,
            "pangram",
            b"The quick brown fox jumps over the lazy dog".to_vec(),
            "9e107d9d372bb6826bd81d3542a419d6",
        ),
        case(
            18,
            "pangram, one extra byte",
            b"The quick brown fox jumps over the lazy dog.".to_vec(),
            "e4d909c290d0fb1ca068ffaddf22cbd0",
        ),
        case(19, "64 zero bytes", vec![0u8; 64], "3b5d3c7d207e37dceeedd301e35e2e58"),
        case(
            20,
            "bytes 0x00..=0xff",
            (0..=255u8).collect(),
            "e2c865db4162bed963bfaa9ef6ac18f0",
        ),
        case(
            21,
            "one million a",
            vec![b'a'; 1_000_000],
            "7707d6ae4e027c70eea2a935c2296f21",
        ),
    ]
}

/// Run every MD5 vector against `digest`.
///
/// Collects all mismatches instead of stopping at the first one.
pub fn run_md5_vectors<F>(digest: F) -> Result<(), String>
where
    F: Fn(&[u8]) -> [u8; 16],
{
    let vectors = md5_test_vectors();
    let failures = vectors
        .iter()
        .filter_map(|tc| {
            let expected = hex_to_bytes(tc.digest);
            let computed = digest(&tc.msg);
            (computed[..] != expected[..]).then(|| {
                format!(
                    "tc_id {} ({}): digest mismatch\n  expected: {}\n  got:      {}",
                    tc.tc_id,
                    tc.comment,
                    tc.digest,
                    to_hex(&computed)
                )
            })
        })
        .collect();

    report("MD5", vectors.len(), failures)
}
