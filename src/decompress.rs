// Copyright 2025 Karpeles Lab Inc.
// Based on the Snappy compression format by Google
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

use crate::error::{Error, Result};
use crate::tags::{decode_tag, Op};
use crate::varint::decode_u32;

/// Decode returns the decoded form of src.
pub fn decode(src: &[u8]) -> Result<Vec<u8>> {
    let (dlen, header_len) = decode_len(src)?;

    let mut dst = vec![0u8; dlen];
    decode_body(&mut dst, &src[header_len..])?;

    Ok(dst)
}

/// Decode into a pre-allocated destination buffer.
/// Returns the number of bytes written to dst.
pub fn decode_into(dst: &mut [u8], src: &[u8]) -> Result<usize> {
    let (dlen, header_len) = decode_len(src)?;

    if dst.len() < dlen {
        return Err(Error::BufferTooSmall);
    }

    decode_body(&mut dst[..dlen], &src[header_len..])?;

    Ok(dlen)
}

/// Returns the length of the decoded block and the number of bytes the
/// length header occupied. Reads at most five bytes.
pub fn decode_len(src: &[u8]) -> Result<(usize, usize)> {
    let (v, n) = decode_u32(src)?;

    #[cfg(target_pointer_width = "32")]
    {
        if v > 0x7fffffff {
            return Err(Error::TooLarge);
        }
    }

    Ok((v as usize, n))
}

/// Interpret the tag stream in src, materializing exactly dst.len() bytes.
///
/// Every literal is checked against both cursors and every copy against
/// the bytes produced so far; src is never read past its end and dst is
/// never written past its end, whatever the input.
pub(crate) fn decode_body(dst: &mut [u8], src: &[u8]) -> Result<()> {
    let mut s = 0; // source cursor
    let mut d = 0; // destination cursor

    while s < src.len() {
        let (op, consumed) = decode_tag(&src[s..])?;
        s += consumed;

        match op {
            Op::Literal { len } => {
                if len > src.len() - s || len > dst.len() - d {
                    return Err(Error::Corrupt);
                }
                dst[d..d + len].copy_from_slice(&src[s..s + len]);
                s += len;
                d += len;
            }
            Op::Copy { len, offset } => {
                if offset == 0 || offset > d || len > dst.len() - d {
                    return Err(Error::Corrupt);
                }
                copy_within(dst, d, offset, len);
                d += len;
            }
        }
    }

    // The stream must produce the declared length exactly.
    if d != dst.len() {
        return Err(Error::Corrupt);
    }

    Ok(())
}

/// Copy `length` bytes ending the window at `d` from `offset` back.
/// Overlapping copies replay what the copy itself wrote, which is how
/// runs are encoded; a plain memmove would be wrong for offset < length.
#[inline]
fn copy_within(dst: &mut [u8], d: usize, offset: usize, length: usize) {
    let src_start = d - offset;

    if offset >= length {
        dst.copy_within(src_start..src_start + length, d);
    } else {
        for i in 0..length {
            dst[d + i] = dst[src_start + i];
        }
    }
}
