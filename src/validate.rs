// Copyright 2025 Karpeles Lab Inc.
// Based on the Snappy compression format by Google
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

use crate::decompress::decode_len;
use crate::error::{Error, Result};
use crate::tags::{decode_tag, Op};

/// Returns true iff decoding src into a correctly-sized buffer would
/// succeed. Walks the tag stream with the decoder's bounds checks but
/// produces no output.
pub fn is_valid(src: &[u8]) -> bool {
    validate(src).is_ok()
}

fn validate(src: &[u8]) -> Result<()> {
    let (dlen, header_len) = decode_len(src)?;
    let body = &src[header_len..];

    let mut s = 0;
    let mut produced = 0; // bytes a real decode would have written

    while s < body.len() {
        let (op, consumed) = decode_tag(&body[s..])?;
        s += consumed;

        match op {
            Op::Literal { len } => {
                if len > body.len() - s || len > dlen - produced {
                    return Err(Error::Corrupt);
                }
                s += len;
                produced += len;
            }
            Op::Copy { len, offset } => {
                if offset == 0 || offset > produced || len > dlen - produced {
                    return Err(Error::Corrupt);
                }
                produced += len;
            }
        }
    }

    if produced != dlen {
        return Err(Error::Corrupt);
    }

    Ok(())
}
