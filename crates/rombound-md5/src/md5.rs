// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! MD5 compression per RFC 1321 Section 3.4

use rombound_util::{u32_from_le, u32_to_le};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::consts::{BLOCK_LEN, DIGEST_LEN, H0, K, R};
use crate::digest::Digest;
use crate::padding::PaddedTail;

/// F(X,Y,Z) = XY v not(X) Z
#[inline(always)]
pub(crate) fn f(x: u32, y: u32, z: u32) -> u32 {
    (x & y) | (!x & z)
}

/// G(X,Y,Z) = XZ v Y not(Z)
#[inline(always)]
pub(crate) fn g(x: u32, y: u32, z: u32) -> u32 {
    (x & z) | (y & !z)
}

/// H(X,Y,Z) = X xor Y xor Z
#[inline(always)]
pub(crate) fn h(x: u32, y: u32, z: u32) -> u32 {
    x ^ y ^ z
}

/// I(X,Y,Z) = Y xor (X v not(Z))
#[inline(always)]
pub(crate) fn i(x: u32, y: u32, z: u32) -> u32 {
    y ^ (x | !z)
}

/// Message word consumed by `round`
#[inline(always)]
pub(crate) const fn schedule_index(round: usize) -> usize {
    match round {
        0..16 => round,
        16..32 => (5 * round + 1) % 16,
        32..48 => (3 * round + 5) % 16,
        _ => (7 * round) % 16,
    }
}

/// MD5 state for one digest computation.
///
/// Working words and the decoded block live in the struct so they are
/// zeroized together when the call ends.
#[derive(Zeroize, ZeroizeOnDrop)]
pub(crate) struct Md5State {
    // Chaining state (A, B, C, D)
    h: [u32; 4],

    // Decoded message block M[0..15]
    m: [u32; 16],

    // Working variables (a, b, c, d)
    wv: [u32; 4],

    tmp_word: [u8; 4],
}

impl Md5State {
    /// Create new state initialized with H0
    pub fn new() -> Self {
        Self {
            h: H0,
            m: [0u32; 16],
            wv: [0u32; 4],
            tmp_word: [0u8; 4],
        }
    }

    /// Compress one 64-byte block into the chaining state
    pub fn compress(&mut self, block: &[u8; BLOCK_LEN]) {
        // M[0..15] from block (little-endian)
        for (word, bytes) in self.m.iter_mut().zip(block.as_chunks::<4>().0) {
            self.tmp_word.copy_from_slice(bytes);
            u32_from_le(word, &mut self.tmp_word);
        }

        self.wv = self.h;

        for round in 0..64 {
            let [a, b, c, d] = self.wv;

            let mix = match round {
                0..16 => f(b, c, d),
                16..32 => g(b, c, d),
                32..48 => h(b, c, d),
                _ => i(b, c, d),
            };

            let rotated = a
                .wrapping_add(mix)
                .wrapping_add(K[round])
                .wrapping_add(self.m[schedule_index(round)])
                .rotate_left(R[round]);

            self.wv = [d, b.wrapping_add(rotated), b, c];
        }

        // H += wv (take zeroizes wv)
        for (word, wv) in self.h.iter_mut().zip(self.wv.iter_mut()) {
            *word = word.wrapping_add(core::mem::take(wv));
        }
        self.m.zeroize();
    }

    /// Write the chaining state out as the digest, zeroizing it
    pub fn finalize(&mut self, out: &mut [u8; DIGEST_LEN]) {
        for (word, bytes) in self.h.iter_mut().zip(out.as_chunks_mut::<4>().0) {
            u32_to_le(word, bytes);
        }
    }

    /// Current chaining state (test only)
    #[cfg(test)]
    pub fn chaining_state(&self) -> [u32; 4] {
        self.h
    }
}

/// Compute the MD5 digest of `message`.
///
/// Full 64-byte blocks are read straight from `message`; the final partial
/// block is copied into a padded tail of one or two blocks. Both sources feed
/// the same block loop, so a block boundary that falls on the message/padding
/// seam needs no special case. No byte past `message.len()` is ever read.
///
/// # Example
///
/// ```
/// use rombound_md5::digest;
///
/// assert_eq!(
///     digest(b"abc").to_string(),
///     "900150983cd24fb0d6963f7d28e17f72"
/// );
/// ```
pub fn digest(message: &[u8]) -> Digest {
    let (body, _) = message.as_chunks::<BLOCK_LEN>();
    let tail = PaddedTail::new(message);

    let mut state = Md5State::new();
    for block in body.iter().chain(tail.blocks()) {
        state.compress(block);
    }

    let mut out = [0u8; DIGEST_LEN];
    state.finalize(&mut out);
    Digest::new(out)
}
