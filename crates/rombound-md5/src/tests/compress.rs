// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::consts::{H0, K, R};
use crate::md5::{Md5State, f, g, h, i, schedule_index};

const TEST_VALUES: [u32; 5] = [
    0x0000_0000,
    0xFFFF_FFFF,
    0x0123_4567,
    0xFEDC_BA98,
    0x0F0F_0F0F,
];

#[test]
fn mixing_functions_match_rfc1321() {
    for &x in &TEST_VALUES {
        for &y in &TEST_VALUES {
            for &z in &TEST_VALUES {
                // Bitwise selector / majority-like forms
                assert_eq!(f(x, y, z), (x & y) | (!x & z), "F x={x:#010x} y={y:#010x} z={z:#010x}");
                assert_eq!(g(x, y, z), (x & z) | (y & !z), "G x={x:#010x} y={y:#010x} z={z:#010x}");
                assert_eq!(h(x, y, z), x ^ y ^ z, "H x={x:#010x} y={y:#010x} z={z:#010x}");
                assert_eq!(i(x, y, z), y ^ (x | !z), "I x={x:#010x} y={y:#010x} z={z:#010x}");
            }
        }
    }
}

#[test]
fn f_selects_y_where_x_set() {
    assert_eq!(f(0xFFFF_0000, 0x1234_5678, 0x9ABC_DEF0), 0x1234_DEF0);
}

#[test]
fn schedule_index_per_quarter() {
    let first: Vec<usize> = (0..16).map(schedule_index).collect();
    assert_eq!(first, (0..16).collect::<Vec<_>>());

    let second: Vec<usize> = (16..32).map(schedule_index).collect();
    assert_eq!(second, [1, 6, 11, 0, 5, 10, 15, 4, 9, 14, 3, 8, 13, 2, 7, 12]);

    let third: Vec<usize> = (32..48).map(schedule_index).collect();
    assert_eq!(third, [5, 8, 11, 14, 1, 4, 7, 10, 13, 0, 3, 6, 9, 12, 15, 2]);

    let fourth: Vec<usize> = (48..64).map(schedule_index).collect();
    assert_eq!(fourth, [0, 7, 14, 5, 12, 3, 10, 1, 8, 15, 6, 13, 4, 11, 2, 9]);
}

#[test]
fn schedule_visits_every_word_once_per_quarter() {
    for quarter in 0..4 {
        let mut seen = [false; 16];
        for round in quarter * 16..(quarter + 1) * 16 {
            seen[schedule_index(round)] = true;
        }
        assert!(seen.iter().all(|&s| s), "quarter {quarter} skips a word");
    }
}

#[test]
fn tables_spot_check() {
    assert_eq!(H0, [0x67452301, 0xefcdab89, 0x98badcfe, 0x10325476]);
    assert_eq!(K[0], 0xd76aa478);
    assert_eq!(K[63], 0xeb86d391);
    assert_eq!(&R[..4], &[7, 12, 17, 22]);
    assert_eq!(&R[16..20], &[5, 9, 14, 20]);
    assert_eq!(&R[32..36], &[4, 11, 16, 23]);
    assert_eq!(&R[48..52], &[6, 10, 15, 21]);
}

#[test]
fn compress_single_padded_block_abc() {
    // "abc" padded by hand: marker at 3, bit length 24 at offset 56
    let mut block = [0u8; 64];
    block[..3].copy_from_slice(b"abc");
    block[3] = 0x80;
    block[56] = 24;

    let mut state = Md5State::new();
    state.compress(&block);

    assert_eq!(
        state.chaining_state(),
        [0x98500190, 0xb04fd23c, 0x7d3f96d6, 0x727fe128]
    );
}

#[test]
fn finalize_is_little_endian_and_clears_state() {
    let mut block = [0u8; 64];
    block[0] = 0x80;

    let mut state = Md5State::new();
    state.compress(&block);

    let mut out = [0u8; 16];
    state.finalize(&mut out);

    assert_eq!(
        out,
        [
            0xd4, 0x1d, 0x8c, 0xd9, 0x8f, 0x00, 0xb2, 0x04, 0xe9, 0x80, 0x09, 0x98, 0xec, 0xf8,
            0x42, 0x7e
        ]
    );
    assert_eq!(state.chaining_state(), [0; 4]);
}
