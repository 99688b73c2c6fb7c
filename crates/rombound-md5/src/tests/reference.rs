// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Cross-check against a naive whole-message padder.
//!
//! The reference copies the entire message, pads it in one buffer and
//! compresses every block from that copy, so it has no message/tail seam.

use proptest::prelude::*;

use crate::md5::{Md5State, digest};

fn reference_digest(message: &[u8]) -> [u8; 16] {
    let mut padded = message.to_vec();
    padded.push(0x80);
    while padded.len() % 64 != 56 {
        padded.push(0);
    }
    padded.extend_from_slice(&((message.len() as u64) * 8).to_le_bytes());
    assert_eq!(padded.len() % 64, 0);

    let mut state = Md5State::new();
    for block in padded.chunks_exact(64) {
        let block: &[u8; 64] = block.try_into().expect("Failed to convert block");
        state.compress(block);
    }

    let mut out = [0u8; 16];
    state.finalize(&mut out);
    out
}

#[test]
fn matches_reference_around_block_boundaries() {
    for len in 0..=200usize {
        let message: Vec<u8> = (0..len).map(|i| (i * 31 + 7) as u8).collect();
        assert_eq!(
            digest(&message).into_bytes(),
            reference_digest(&message),
            "length {len}"
        );
    }
}

proptest! {
    #[test]
    fn matches_reference(message in proptest::collection::vec(any::<u8>(), 0..1024)) {
        prop_assert_eq!(digest(&message).into_bytes(), reference_digest(&message));
    }
}
