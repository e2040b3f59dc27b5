// Copyright 2025 Karpeles Lab Inc.
// Based on the Snappy compression format by Google
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

use std::fmt;

/// Result type for Snappy operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for Snappy compression/decompression
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The compressed data violates the tag-stream grammar or its bounds
    Corrupt,

    /// The length prefix is malformed or does not fit in 32 bits
    InvalidLength,

    /// The destination buffer is smaller than required
    BufferTooSmall,

    /// The source exceeds the 2^32 - 1 byte format limit
    TooLarge,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Corrupt => write!(f, "snappy: corrupt input"),
            Error::InvalidLength => write!(f, "snappy: invalid length prefix"),
            Error::BufferTooSmall => write!(f, "snappy: buffer too small"),
            Error::TooLarge => write!(f, "snappy: input too large"),
        }
    }
}

impl std::error::Error for Error {}
