// Copyright 2025 Karpeles Lab Inc.
// Based on the Snappy compression format by Google
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

/// Tag for literal chunks
pub const TAG_LITERAL: u8 = 0x00;

/// Tag for copy with 1-byte offset (11 bits)
pub const TAG_COPY1: u8 = 0x01;

/// Tag for copy with 2-byte offset (16 bits)
pub const TAG_COPY2: u8 = 0x02;

/// Tag for copy with 4-byte offset (32 bits)
pub const TAG_COPY4: u8 = 0x03;

/// Largest input the block format can describe (the length prefix is 32-bit)
pub const MAX_INPUT_SIZE: u64 = u32::MAX as u64;

/// The input is compressed in independent fragments of at most this size
pub const MAX_FRAGMENT_SIZE: usize = 1 << 16;

/// Matches shorter than this are never emitted
pub const MIN_MATCH_LEN: usize = 4;

/// Longest copy a single tag can carry
pub const MAX_COPY_LEN: usize = 64;

/// Copy-1 reaches offsets up to 2047
pub const MAX_COPY1_OFFSET: usize = (1 << 11) - 1;

/// Copy-2 reaches offsets up to 65535
pub const MAX_COPY2_OFFSET: usize = (1 << 16) - 1;

/// The match search stops this many bytes before the fragment end so that
/// 4- and 8-byte loads stay in bounds
pub const INPUT_MARGIN: usize = 15;

/// Hash table slot count bounds, both powers of two
pub const MIN_TABLE_SIZE: usize = 1 << 8;
pub const MAX_TABLE_SIZE: usize = 1 << 14;

/// Multiplier for the 4-byte window hash
pub const HASH_MUL: u32 = 0x1e35_a7bd;

/// Longest varint encoding of a 32-bit length prefix
pub const MAX_VARINT_LEN: usize = 5;
