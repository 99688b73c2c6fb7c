// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use rombound_util::hex_to_bytes;

use crate::{TestResult, report, to_hex};

/// A single HMAC-MD5 test case
pub struct HmacTestCase {
    /// Unique test case identifier
    pub tc_id: usize,
    /// Human-readable description
    pub comment: &'static str,
    /// Key
    pub key: Vec<u8>,
    /// Message
    pub msg: Vec<u8>,
    /// Expected tag (hex), full 16 bytes
    pub tag: &'static str,
    /// Expected result
    pub result: TestResult,
}

/// RFC 2202 HMAC-MD5 cases plus block-size key edge cases.
///
/// RFC 2202 cases 6 and 7 use 80-byte keys. Keys longer than the 64-byte
/// block are refused by rombound, so those cases are `Rejected`; their
/// published tags are kept for reference.
pub fn hmac_md5_test_vectors() -> Vec<HmacTestCase> {
    vec![
        HmacTestCase {
            tc_id: 1,
            comment: "RFC 2202 case 1",
            key: vec![0x0b; 16],
            msg: b"Hi There".to_vec(),
            tag: "9294727a3638bb1c13f48ef8158bfc9d",
            result: TestResult::Valid,
        },
        HmacTestCase {
            tc_id: 2,
            comment: "RFC 2202 case 2, key shorter than tag",
            key: b"Jefe".to_vec(),
            msg: b"what do ya want for nothing?".to_vec(),
            tag: "750c783e6ab0b503eaa86e310a5db738",
            result: TestResult::Valid,
        },
        HmacTestCase {
            tc_id: 3,
            comment: "RFC 2202 case 3",
            key: vec![0xaa; 16],
            msg: vec![0xdd; 50],
            tag: "56be34521d144c88dbb8c733f0e8b3f6",
            result: TestResult::Valid,
        },
        HmacTestCase {
            tc_id: 4,
            comment: "RFC 2202 case 4, 25-byte key",
            key: hex_to_bytes("0102030405060708090a0b0c0d0e0f10111213141516171819"),
            msg: vec![0xcd; 50],
            tag: "697eaf0aca3a3aea3a75164746ffaa79",
            result: TestResult::Valid,
        },
        HmacTestCase {
            tc_id: 5,
            comment: "RFC 2202 case 5",
            key: vec![0x0c; 16],
            msg: b"Test With Truncation".to_vec(),
            tag: "56461ef2342edc00f9bab995690efd4c",
            result: TestResult::Valid,
        },
        HmacTestCase {
            tc_id: 6,
            comment: "RFC 2202 case 6, 80-byte key",
            key: vec![0xaa; 80],
            msg: b"Test Using Larger Than Block-Size Key - Hash Key First".to_vec(),
            tag: "6b1ab7fe4bd7bf8f0b62e6ce61b9d0cd",
            result: TestResult::Rejected,
        },
        HmacTestCase {
            tc_id: 7,
            comment: "RFC 2202 case 7, 80-byte key",
            key: vec![0xaa; 80],
            msg: b"Test Using Larger Than Block-Size Key and Larger Than One Block-Size Data"
                .to_vec(),
            tag: "6f630fad67cda0ee1fb1f562db3aa53e",
            result: TestResult::Rejected,
        },
        HmacTestCase {
            tc_id: 8,
            comment: "pangram keyed with 'key'",
            key: b"key".to_vec(),
            msg: b"The quick brown fox jumps over the lazy dog".to_vec(),
            tag: "80070713463e7749b90c2dc24911e275",
            result: TestResult::Valid,
        },
        HmacTestCase {
            tc_id: 9,
            comment: "empty key, empty message",
            key: Vec::new(),
            msg: Vec::new(),
            tag: "74e6f7298a9c2d168935f58c001bad88",
            result: TestResult::Valid,
        },
        HmacTestCase {
            tc_id: 10,
            comment: "key exactly one block",
            key: (0..64u8).collect(),
            msg: b"Sample message for keylen=blocklen".to_vec(),
            tag: "fdec0f1ba4d1af508bbab18ff0a32108",
            result: TestResult::Valid,
        },
        HmacTestCase {
            tc_id: 11,
            comment: "key exactly one block, empty message",
            key: vec![0x5a; 64],
            msg: Vec::new(),
            tag: "4e96d32ed8ad82e4ea0e5dff2ecc6d56",
            result: TestResult::Valid,
        },
        HmacTestCase {
            tc_id: 12,
            comment: "key one byte over block",
            key: vec![0x01; 65],
            msg: b"abc".to_vec(),
            tag: "",
            result: TestResult::Rejected,
        },
    ]
}

/// Run every HMAC-MD5 vector against `hmac`.
///
/// `hmac` returns `None` when it refuses the key.
pub fn run_hmac_md5_vectors<F>(hmac: F) -> Result<(), String>
where
    F: Fn(&[u8], &[u8]) -> Option<[u8; 16]>,
{
    let vectors = hmac_md5_test_vectors();
    let failures = vectors
        .iter()
        .filter_map(|tc| {
            let computed = hmac(&tc.key, &tc.msg);

            match (tc.result, computed) {
                (TestResult::Valid, Some(tag)) => {
                    let expected = hex_to_bytes(tc.tag);
                    (tag[..] != expected[..]).then(|| {
                        format!(
                            "tc_id {} ({}): MAC mismatch\n  expected: {}\n  got:      {}",
                            tc.tc_id,
                            tc.comment,
                            tc.tag,
                            to_hex(&tag)
                        )
                    })
                }
                (TestResult::Valid, None) => Some(format!(
                    "tc_id {} ({}): key of {} bytes refused",
                    tc.tc_id,
                    tc.comment,
                    tc.key.len()
                )),
                (TestResult::Rejected, Some(tag)) => Some(format!(
                    "tc_id {} ({}): expected rejection, got tag {}",
                    tc.tc_id,
                    tc.comment,
                    to_hex(&tag)
                )),
                (TestResult::Rejected, None) => None,
            }
        })
        .collect();

    report("HMAC-MD5", vectors.len(), failures)
}
