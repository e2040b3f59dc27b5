// Copyright 2025 Karpeles Lab Inc.
// Based on the Snappy compression format by Google
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

use crate::constants::MAX_VARINT_LEN;
use crate::error::{Error, Result};

/// Decode the 32-bit varint length prefix from the beginning of the slice.
/// Returns (value, bytes_read).
///
/// Fails if the slice ends before a terminating byte, if a fifth byte
/// still has its continuation bit set, or if the value does not fit in
/// 32 bits.
pub fn decode_u32(src: &[u8]) -> Result<(u32, usize)> {
    let mut value: u32 = 0;
    let mut shift = 0;

    for (i, &byte) in src.iter().take(MAX_VARINT_LEN).enumerate() {
        if byte < 0x80 {
            // The fifth byte carries bits 28..35; anything above bit 31
            // overflows the 32-bit length.
            if i == MAX_VARINT_LEN - 1 && byte > 0x0f {
                return Err(Error::InvalidLength);
            }
            value |= (byte as u32) << shift;
            return Ok((value, i + 1));
        }

        value |= ((byte & 0x7f) as u32) << shift;
        shift += 7;
    }

    Err(Error::InvalidLength)
}

/// Encode a 32-bit varint into the buffer.
/// Returns the number of bytes written (1-5).
pub fn encode_u32(dst: &mut [u8], mut value: u32) -> usize {
    let mut i = 0;

    while value >= 0x80 {
        dst[i] = (value as u8) | 0x80;
        value >>= 7;
        i += 1;
    }

    dst[i] = value as u8;
    i + 1
}
