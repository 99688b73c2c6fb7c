// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Message padding per RFC 1321 Sections 3.1 and 3.2

use rombound_util::u64_to_le;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::consts::{BLOCK_LEN, LENGTH_FIELD_LEN, PADDING_MARKER};

/// Largest tail the padding can produce: 63 message bytes need a second block.
const MAX_TAIL_LEN: usize = 2 * BLOCK_LEN;

/// The last partial block of a message plus its padding.
///
/// Holds the bytes after the last full 64-byte boundary, the `0x80` marker,
/// zero fill and the 64-bit little-endian bit length. Its used length is
/// always 64 or 128 bytes.
#[derive(Zeroize, ZeroizeOnDrop)]
pub(crate) struct PaddedTail {
    buf: [u8; MAX_TAIL_LEN],
    len: usize,
}

impl PaddedTail {
    /// Build the padded tail for `message`.
    ///
    /// Only the final `message.len() % 64` bytes are copied; full blocks stay
    /// in caller memory and are compressed from there.
    pub fn new(message: &[u8]) -> Self {
        let body_len = message.len() - message.len() % BLOCK_LEN;
        let tail = &message[body_len..];

        // Marker and length field must both fit after the tail.
        let len = if tail.len() + 1 + LENGTH_FIELD_LEN <= BLOCK_LEN {
            BLOCK_LEN
        } else {
            MAX_TAIL_LEN
        };
        debug_assert!(len % BLOCK_LEN == 0 && len <= MAX_TAIL_LEN);

        let mut buf = [0u8; MAX_TAIL_LEN];
        buf[..tail.len()].copy_from_slice(tail);
        buf[tail.len()] = PADDING_MARKER;

        let mut field = [0u8; LENGTH_FIELD_LEN];
        encode_length_field(message.len() as u64, &mut field);
        buf[len - LENGTH_FIELD_LEN..len].copy_from_slice(&field);

        Self { buf, len }
    }

    /// Padded blocks, in order
    pub fn blocks(&self) -> impl Iterator<Item = &[u8; BLOCK_LEN]> {
        let (blocks, rest) = self.buf[..self.len].as_chunks::<BLOCK_LEN>();
        debug_assert!(rest.is_empty());
        blocks.iter()
    }

    /// Used length in bytes (64 or 128)
    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Used bytes
    #[cfg(test)]
    pub fn as_slice(&self) -> &[u8] {
        &self.buf[..self.len]
    }
}

/// Encode a message length as the trailing bit-length field.
///
/// The bit count is taken modulo 2^64, so all 64 bits of the field are used.
pub(crate) fn encode_length_field(message_len: u64, out: &mut [u8; LENGTH_FIELD_LEN]) {
    let mut bit_len = message_len.wrapping_mul(8);
    u64_to_le(&mut bit_len, out);
}
