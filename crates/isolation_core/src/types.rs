use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the two players. `One` moves first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Player {
    One,
    Two,
}
impl Player {
    /// The opponent.
    pub fn other(self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }
    /// Slot index: 0 for `One`, 1 for `Two`.
    pub fn idx(self) -> usize {
        match self {
            Player::One => 0,
            Player::Two => 1,
        }
    }
}

/// A cell on the board in `(column, row)` order.
///
/// Column 0 is the left edge and row 0 is the top edge; rows grow downward.
/// Serialises as a two-element array, e.g. `[2, 1]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord(pub u8, pub u8);

impl Coord {
    pub const fn new(col: u8, row: u8) -> Self {
        Coord(col, row)
    }
    pub const fn col(self) -> u8 {
        self.0
    }
    pub const fn row(self) -> u8 {
        self.1
    }

    /// Step by a signed delta, returning `None` when either component would go negative.
    pub fn offset(self, dcol: i8, drow: i8) -> Option<Coord> {
        let col = self.0.checked_add_signed(dcol)?;
        let row = self.1.checked_add_signed(drow)?;
        Some(Coord(col, row))
    }
}

impl From<(u8, u8)> for Coord {
    fn from((col, row): (u8, u8)) -> Self {
        Coord(col, row)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.0, self.1)
    }
}

/// A move is the destination cell of the active player.
pub type Move = Coord;
