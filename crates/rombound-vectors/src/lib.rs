// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Published MD5 and HMAC-MD5 test vectors with backend-agnostic runners.
//!
//! Runners take the implementation under test as a closure, so this crate
//! never depends on the crates it validates and can be a dev-dependency of
//! all of them.
//!
//! References:
//! [1] RFC 1321, Appendix A.5 - Test suite
//!     <https://datatracker.ietf.org/doc/html/rfc1321#appendix-A.5>
//! [2] RFC 2202, Section 2 - Test Cases for HMAC-MD5
//!     <https://datatracker.ietf.org/doc/html/rfc2202#section-2>

#![warn(missing_docs)]

mod hmac_md5;
mod md5;

pub use hmac_md5::{HmacTestCase, hmac_md5_test_vectors, run_hmac_md5_vectors};
pub use md5::{DigestTestCase, md5_test_vectors, run_md5_vectors};

/// Expected outcome of a test case
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TestResult {
    /// Implementation must produce the expected output
    Valid,
    /// Implementation must refuse the input (e.g. over-length HMAC key)
    Rejected,
}

/// Render bytes as lowercase hex for failure messages
pub(crate) fn to_hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}

/// Join collected failures into one report, or `Ok` if there were none
pub(crate) fn report(kind: &str, total: usize, failures: Vec<String>) -> Result<(), String> {
    if failures.is_empty() {
        return Ok(());
    }

    Err(format!(
        "{} of {} {} vectors failed:\n{}",
        failures.len(),
        total,
        kind,
        failures.join("\n")
    ))
}
