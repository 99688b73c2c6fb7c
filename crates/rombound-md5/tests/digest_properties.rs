// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use proptest::prelude::*;

use rombound_md5::{DIGEST_LEN, Digest, digest};

fn bit_distance(a: &Digest, b: &Digest) -> u32 {
    a.as_bytes()
        .iter()
        .zip(b.as_bytes())
        .map(|(x, y)| (x ^ y).count_ones())
        .sum()
}

#[test]
fn one_bit_flip_avalanche_spot_check() {
    // 'c' (0x63) and 'b' (0x62) differ in the lowest bit only
    let abc = digest(b"abc");
    let abb = digest(b"abb");

    assert_eq!(abb.to_string(), "ea01e5fd8e4d8832825acdd20eac5104");
    assert_ne!(abc, abb);
    assert_eq!(bit_distance(&abc, &abb), 65);
}

#[test]
fn digest_len_is_fixed() {
    for len in [0usize, 1, 63, 64, 65, 4096] {
        assert_eq!(digest(&vec![0u8; len]).as_bytes().len(), DIGEST_LEN);
    }
}

#[test]
fn trailing_zero_byte_changes_digest() {
    // The length field separates "m" from "m || 0x00"
    assert_ne!(digest(b"abc"), digest(b"abc\0"));
    assert_ne!(digest(b""), digest(&[0u8]));
}

proptest! {
    #[test]
    fn digest_is_deterministic(message in proptest::collection::vec(any::<u8>(), 0..512)) {
        prop_assert_eq!(digest(&message), digest(&message));
    }

    #[test]
    fn single_bit_flip_changes_digest(
        message in proptest::collection::vec(any::<u8>(), 1..512),
        index in any::<prop::sample::Index>(),
        bit in 0u8..8,
    ) {
        let mut flipped = message.clone();
        let i = index.index(flipped.len());
        flipped[i] ^= 1 << bit;

        let a = digest(&message);
        let b = digest(&flipped);
        prop_assert_ne!(a, b);
        // Far from 0 or 128 differing bits for any sane input
        let distance = bit_distance(&a, &b);
        prop_assert!((16..=112).contains(&distance), "distance {}", distance);
    }
}
