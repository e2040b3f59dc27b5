// Copyright 2025 Karpeles Lab Inc.
// Based on the Snappy compression format by Google
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

use crate::constants::{HASH_MUL, MAX_TABLE_SIZE, MIN_TABLE_SIZE};

/// Candidate table for the match search.
///
/// Slots hold fragment-relative positions of the most recent 4-byte window
/// that hashed there; zero means "no candidate". Positions must fit in 16
/// bits, so the table is scoped to a single fragment and never reused
/// across fragment boundaries.
pub struct MatchTable {
    slots: Vec<u16>,
    shift: u32,
}

impl MatchTable {
    /// Allocate a zeroed table sized for a fragment of `fragment_len` bytes:
    /// the smallest power of two in [256, 16384] that covers the fragment.
    pub fn new(fragment_len: usize) -> Self {
        let mut size = MIN_TABLE_SIZE;
        while size < MAX_TABLE_SIZE && size < fragment_len {
            size <<= 1;
        }

        MatchTable {
            slots: vec![0u16; size],
            shift: 32 - size.trailing_zeros(),
        }
    }

    /// Slot index for a 4-byte window
    #[inline]
    pub fn hash(&self, word: u32) -> usize {
        (word.wrapping_mul(HASH_MUL) >> self.shift) as usize
    }

    #[inline]
    pub fn get(&self, slot: usize) -> usize {
        self.slots[slot] as usize
    }

    #[inline]
    pub fn set(&mut self, slot: usize, pos: usize) {
        debug_assert!(pos <= u16::MAX as usize);
        self.slots[slot] = pos as u16;
    }
}
