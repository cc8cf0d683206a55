//! Minimax Isolation Engine
//!
//! Exhaustive depth-limited minimax over the isolation game tree. No pruning,
//! no move ordering: every legal move is expanded to the requested depth.

mod search;

use isolation_core::{Engine, GameState, SearchResult};

/// Isolation engine using plain depth-limited minimax.
#[derive(Debug, Clone, Default)]
pub struct MinimaxEngine {
    /// Node counter for statistics
    nodes: u64,
}

impl MinimaxEngine {
    pub fn new() -> Self {
        Self { nodes: 0 }
    }
}

impl Engine for MinimaxEngine {
    fn search(&mut self, state: &GameState, depth: u8) -> SearchResult {
        self.nodes = 0;
        let result = search::pick_best_move(state, depth, &mut self.nodes);

        SearchResult {
            best_move: result.map(|(mv, _)| mv),
            score: result.map(|(_, s)| s).unwrap_or(search::LOSS),
            depth,
            nodes: self.nodes,
        }
    }

    fn name(&self) -> &str {
        "Minimax v1.0"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }
}

pub use search::{
    max_value, min_value, minimax_decision, pick_best_move, terminal_test, LOSS, UNRESOLVED, WIN,
};
