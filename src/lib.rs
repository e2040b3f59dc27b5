// Copyright 2025 Karpeles Lab Inc.
// Based on the Snappy compression format by Google
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

//! # Snappy Block Compression
//!
//! This library implements the Snappy block compression format. It is
//! binary compatible with Google's C++ implementation (v1.2.2): blocks
//! produced here decompress with any conforming Snappy decoder, and any
//! conforming encoder's blocks decompress here.
//!
//! Snappy trades compression ratio for speed: a greedy, hash-driven LZ77
//! match search over independent 64 KiB fragments, and a tagged-token
//! decoder that validates every length and offset before touching memory.
//!
//! Only the block format is implemented. The framing/streaming format and
//! its CRCs are separate layers and out of scope here.
//!
//! ## Block Format Example
//!
//! ```rust
//! use minsnap::{decode, encode};
//!
//! let data = b"Hello, World! This is a test of Snappy compression.";
//! let compressed = encode(data).expect("compression failed");
//! let decompressed = decode(&compressed).expect("decompression failed");
//! assert_eq!(data, &decompressed[..]);
//! ```

mod bytes;
mod compress;
mod constants;
mod decompress;
mod error;
mod table;
mod tags;
mod validate;
mod varint;

pub use compress::{encode, encode_better, encode_into, max_encoded_len, Level};
pub use decompress::{decode, decode_into, decode_len};
pub use error::{Error, Result};
pub use validate::is_valid;

/// Crate version string
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
