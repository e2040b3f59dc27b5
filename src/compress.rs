// Copyright 2025 Karpeles Lab Inc.
// Based on the Snappy compression format by Google
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

use crate::bytes::{load32, load64};
use crate::constants::*;
use crate::error::{Error, Result};
use crate::table::MatchTable;
use crate::tags::{emit_copy, emit_literal};
use crate::varint::encode_u32;

/// Compression level
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Level {
    /// Greedy hash-table match search tuned for throughput
    #[default]
    Fast,
    /// Reserved for a denser match search; currently selects the same
    /// encoder as `Fast`. Output stays format-compliant either way.
    Better,
}

/// Returns the maximum length of an encoded block for a `src_len` byte
/// input. The bound holds for any input; a conforming encoder never
/// exceeds it.
pub fn max_encoded_len(src_len: usize) -> usize {
    32 + src_len + src_len / 6
}

/// Encode src into dst, returning the number of bytes written.
///
/// dst must hold at least `max_encoded_len(src.len())` bytes.
pub fn encode_into(dst: &mut [u8], src: &[u8], level: Level) -> Result<usize> {
    if src.len() as u64 > MAX_INPUT_SIZE {
        return Err(Error::TooLarge);
    }
    if dst.len() < max_encoded_len(src.len()) {
        return Err(Error::BufferTooSmall);
    }

    // Write the varint-encoded length of the decompressed bytes
    let mut d = encode_u32(dst, src.len() as u32);

    // Each fragment gets a fresh hash table; positions are fragment-relative
    // so they fit the table's 16-bit slots.
    for fragment in src.chunks(MAX_FRAGMENT_SIZE) {
        d += match level {
            Level::Fast | Level::Better => compress_fragment(&mut dst[d..], fragment),
        };
    }

    Ok(d)
}

/// Encode returns the encoded form of src.
pub fn encode(src: &[u8]) -> Result<Vec<u8>> {
    encode_with_level(src, Level::Fast)
}

/// Encode with the reserved `Better` level. See [`Level::Better`].
pub fn encode_better(src: &[u8]) -> Result<Vec<u8>> {
    encode_with_level(src, Level::Better)
}

fn encode_with_level(src: &[u8], level: Level) -> Result<Vec<u8>> {
    if src.len() as u64 > MAX_INPUT_SIZE {
        return Err(Error::TooLarge);
    }
    let mut dst = vec![0u8; max_encoded_len(src.len())];
    let n = encode_into(&mut dst, src, level)?;
    dst.truncate(n);
    Ok(dst)
}

/// Compress one fragment of at most 64 KiB into dst, returning the number
/// of bytes written. The emitted tag stream reconstructs the fragment
/// exactly.
fn compress_fragment(dst: &mut [u8], src: &[u8]) -> usize {
    let n = src.len();
    debug_assert!(n <= MAX_FRAGMENT_SIZE);

    if n < MIN_MATCH_LEN {
        return emit_literal(dst, src);
    }

    let mut table = MatchTable::new(n);
    let mut d = 0;
    let mut next_emit = 0;

    if n > INPUT_MARGIN {
        let ip_limit = n - INPUT_MARGIN;
        let mut next_ip = 1;

        'fragment: loop {
            let mut ip;
            let mut candidate;

            // Search for the next match. The stride grows with the
            // distance scanned since the last emit, so incompressible
            // regions are skipped over in amortized linear time.
            loop {
                ip = next_ip;
                next_ip = ip + 1 + (ip - next_emit) / 32;
                if next_ip > ip_limit {
                    break 'fragment;
                }

                let slot = table.hash(load32(src, ip));
                candidate = table.get(slot);
                table.set(slot, ip);

                // Slot 0 doubles as "empty"; position 0 is covered by the
                // initial literal, so it is never a candidate. The offset
                // guard cannot fire within one fragment but stays anyway.
                if candidate != 0
                    && ip - candidate <= MAX_COPY2_OFFSET
                    && load32(src, candidate) == load32(src, ip)
                {
                    break;
                }
            }

            // Everything up to the match is a literal.
            if ip > next_emit {
                d += emit_literal(&mut dst[d..], &src[next_emit..ip]);
            }

            let len =
                MIN_MATCH_LEN + match_extent(src, candidate + MIN_MATCH_LEN, ip + MIN_MATCH_LEN);
            d += emit_copy(&mut dst[d..], ip - candidate, len);

            let ip = ip + len;
            next_emit = ip;
            next_ip = ip + 1;

            // Seed one position behind the cursor so an immediately
            // repeating pattern is found on the next probe. This is the
            // only insert besides the per-probe one above.
            if ip < ip_limit {
                let slot = table.hash(load32(src, ip - 1));
                table.set(slot, ip - 1);
            }
        }
    }

    if next_emit < n {
        d += emit_literal(&mut dst[d..], &src[next_emit..]);
    }

    d
}

/// Count the bytes equal at positions `a` and `b`, scanning forward to the
/// end of src in 8-, 4- and 1-byte steps. Requires `a < b`.
fn match_extent(src: &[u8], mut a: usize, mut b: usize) -> usize {
    let start = b;

    while b + 8 <= src.len() {
        let diff = load64(src, a) ^ load64(src, b);
        if diff != 0 {
            return b - start + (diff.trailing_zeros() >> 3) as usize;
        }
        a += 8;
        b += 8;
    }

    if b + 4 <= src.len() && load32(src, a) == load32(src, b) {
        a += 4;
        b += 4;
    }

    while b < src.len() && src[a] == src[b] {
        a += 1;
        b += 1;
    }

    b - start
}
