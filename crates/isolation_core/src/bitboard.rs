//! Bitboard representation of board occupancy.
//!
//! A bitboard is a 64-bit integer where each bit represents a cell. Cells are
//! numbered row-major: bit `row * width + col`. Iterating a bitboard yields
//! indices in ascending order, which is top-to-bottom, left-to-right.

use std::ops::{BitAnd, Not};

/// Maximum number of cells a bitboard can address.
pub const MAX_CELLS: usize = 64;

/// A set of cell indices.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Bitboard(pub u64);

impl Bitboard {
    pub const EMPTY: Bitboard = Bitboard(0);

    /// Bitboard with the lowest `cells` bits set.
    #[inline(always)]
    pub const fn first_n(cells: usize) -> Self {
        if cells >= MAX_CELLS {
            Bitboard(!0)
        } else {
            Bitboard((1u64 << cells) - 1)
        }
    }

    /// Check if a specific cell is set.
    #[inline(always)]
    pub const fn contains(self, sq: u8) -> bool {
        (self.0 & (1u64 << sq)) != 0
    }

    #[inline(always)]
    pub fn set(&mut self, sq: u8) {
        self.0 |= 1u64 << sq;
    }

    /// Count the number of set bits (population count).
    #[inline(always)]
    pub const fn popcount(self) -> u32 {
        self.0.count_ones()
    }

    /// Get and remove the least significant bit. Returns the cell index.
    #[inline(always)]
    pub fn pop_lsb(&mut self) -> Option<u8> {
        if self.0 == 0 {
            None
        } else {
            let sq = self.0.trailing_zeros() as u8;
            self.0 &= self.0 - 1;
            Some(sq)
        }
    }
}

impl BitAnd for Bitboard {
    type Output = Bitboard;
    #[inline(always)]
    fn bitand(self, rhs: Bitboard) -> Bitboard {
        Bitboard(self.0 & rhs.0)
    }
}

impl Not for Bitboard {
    type Output = Bitboard;
    #[inline(always)]
    fn not(self) -> Bitboard {
        Bitboard(!self.0)
    }
}

/// Iterates set cells in ascending index order.
impl Iterator for Bitboard {
    type Item = u8;

    #[inline(always)]
    fn next(&mut self) -> Option<u8> {
        self.pop_lsb()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.popcount() as usize;
        (n, Some(n))
    }
}

#[cfg(test)]
#[path = "bitboard_tests.rs"]
mod bitboard_tests;
