//! Isolation game core
//!
//! Board state, legal-move generation and the engine interface for a
//! two-player game on a small grid: each player in turn slides any distance
//! along a row, column or diagonal, every visited destination becomes
//! blocked, and the player left without a move loses.

pub mod bitboard;
pub mod board;
pub mod config;
pub mod error;
pub mod movegen;
pub mod perft;
pub mod types;

// Re-export core game logic (not engine-specific)
pub use bitboard::*;
pub use board::*;
pub use config::*;
pub use error::{Error, Result};
pub use movegen::*;
pub use perft::perft;
pub use types::*;

// =============================================================================
// Engine trait — implemented by every decision source
// =============================================================================

/// Result of a search operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// The best move found (None if no legal moves)
    pub best_move: Option<Move>,
    /// Game value from the mover's perspective: 1 win, -1 loss, 0 unresolved
    pub score: i32,
    /// Search depth used
    pub depth: u8,
    /// Number of nodes searched
    pub nodes: u64,
}

/// Trait that all engines must implement.
///
/// A game driver asks one or two engines for moves in turn and applies them
/// with [`GameState::forecast_move`].
pub trait Engine: Send {
    /// Search the state to the given depth in plies.
    fn search(&mut self, state: &GameState, depth: u8) -> SearchResult;

    /// Returns the engine's name
    fn name(&self) -> &str;

    /// Reset internal state for a new game
    fn new_game(&mut self) {}
}
