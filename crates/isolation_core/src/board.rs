use crate::bitboard::Bitboard;
use crate::config::BoardConfig;
use crate::error::{Error, Result};
use crate::movegen::{get_legal_moves, legal_moves_into};
use crate::types::*;

/// Fixed-size occupancy grid. A cell is either open or blocked.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    width: u8,
    height: u8,
    blocked: Bitboard,
}

impl Board {
    /// Build a board from a configuration that has already been validated.
    fn from_config(config: &BoardConfig) -> Self {
        let mut board = Board {
            width: config.width,
            height: config.height,
            blocked: Bitboard::EMPTY,
        };
        for &c in &config.initial_blocked_cells {
            board.block(c);
        }
        board
    }

    pub fn width(&self) -> u8 {
        self.width
    }
    pub fn height(&self) -> u8 {
        self.height
    }

    pub fn on_board(&self, c: Coord) -> bool {
        c.col() < self.width && c.row() < self.height
    }

    /// Row-major cell index, or `None` off the board.
    pub fn index_of(&self, c: Coord) -> Option<u8> {
        if self.on_board(c) {
            Some(c.row() * self.width + c.col())
        } else {
            None
        }
    }

    pub fn coord_of(&self, sq: u8) -> Coord {
        Coord(sq % self.width, sq / self.width)
    }

    /// True when `c` is on the board and not blocked.
    pub fn is_open(&self, c: Coord) -> bool {
        match self.index_of(c) {
            Some(sq) => !self.blocked.contains(sq),
            None => false,
        }
    }

    pub fn is_blocked(&self, c: Coord) -> bool {
        self.index_of(c).is_some_and(|sq| self.blocked.contains(sq))
    }

    pub fn blocked_count(&self) -> u32 {
        self.blocked.popcount()
    }

    /// Open cells as a bitboard, in enumeration order when iterated.
    pub fn open_bitboard(&self) -> Bitboard {
        !self.blocked & Bitboard::first_n(self.width as usize * self.height as usize)
    }

    /// Open cells, top-to-bottom then left-to-right.
    pub fn open_cells(&self) -> impl Iterator<Item = Coord> + '_ {
        self.open_bitboard().map(|sq| self.coord_of(sq))
    }

    fn block(&mut self, c: Coord) {
        if let Some(sq) = self.index_of(c) {
            self.blocked.set(sq);
        }
    }
}

/// A node of the game tree.
///
/// `GameState` is `Copy`: every forecast produces an independent value and the
/// parent is never modified.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GameState {
    board: Board,
    active_player: Player,
    player_locations: [Option<Coord>; 2],
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Initial state on the default 3x2 board with the bottom-right corner blocked.
    pub fn new() -> Self {
        Self::initial(&BoardConfig::default())
    }

    /// Initial state for a caller-supplied board. Both players start unplaced
    /// and player one moves first.
    pub fn from_config(config: &BoardConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::initial(config))
    }

    fn initial(config: &BoardConfig) -> Self {
        GameState {
            board: Board::from_config(config),
            active_player: Player::One,
            player_locations: [None, None],
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active_player(&self) -> Player {
        self.active_player
    }

    /// Current cell of `p`, or `None` if `p` has not moved yet.
    pub fn player_location(&self, p: Player) -> Option<Coord> {
        self.player_locations[p.idx()]
    }

    pub fn player_locations(&self) -> [Option<Coord>; 2] {
        self.player_locations
    }

    /// Legal destinations for the active player. See [`crate::movegen`].
    pub fn get_legal_moves(&self) -> Vec<Move> {
        get_legal_moves(self)
    }

    /// True when the active player has no legal move.
    pub fn is_terminal(&self) -> bool {
        let mut moves = Vec::new();
        legal_moves_into(self, &mut moves);
        moves.is_empty()
    }

    /// Successor state after the active player moves to `mv`.
    ///
    /// Returns [`Error::IllegalMove`] unless `mv` is one of [`Self::get_legal_moves`].
    pub fn forecast_move(&self, mv: Move) -> Result<GameState> {
        if !self.get_legal_moves().contains(&mv) {
            log::debug!(
                "rejected forecast of {} for player {}",
                mv,
                self.active_player.idx()
            );
            return Err(Error::IllegalMove { mv });
        }
        Ok(self.apply(mv))
    }

    /// Every legal move paired with its successor, in legal-move order.
    pub fn successors(&self) -> impl Iterator<Item = (Move, GameState)> + '_ {
        self.get_legal_moves()
            .into_iter()
            .map(move |mv| (mv, self.apply(mv)))
    }

    /// Apply a move already known to be legal.
    fn apply(&self, mv: Move) -> GameState {
        let mut next = *self;
        next.board.block(mv);
        next.player_locations[self.active_player.idx()] = Some(mv);
        next.active_player = self.active_player.other();
        next
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
