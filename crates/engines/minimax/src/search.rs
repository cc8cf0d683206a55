//! Depth-limited minimax search
//!
//! `max_value` scores states where the searching player is to move and
//! `min_value` scores states where the opponent is to move. Values are from
//! the searching player's perspective: 1 win, -1 loss, 0 unresolved at the
//! depth cutoff.

use isolation_core::{Error, GameState, Move, Result};

pub const WIN: i32 = 1;
pub const LOSS: i32 = -1;
pub const UNRESOLVED: i32 = 0;

/// True when the player to move has no legal move and has therefore lost.
pub fn terminal_test(state: &GameState) -> bool {
    state.is_terminal()
}

/// Value of a state where the opponent is to move.
pub fn min_value(state: &GameState, depth: u8) -> i32 {
    min_node(state, depth, &mut 0)
}

/// Value of a state where the searching player is to move.
pub fn max_value(state: &GameState, depth: u8) -> i32 {
    max_node(state, depth, &mut 0)
}

/// Best move for the player to move, searching `depth` plies.
///
/// `depth` should be at least 1. Ties go to the first move in legal-move
/// order. Returns [`Error::NoLegalMoves`] on a terminal state.
pub fn minimax_decision(state: &GameState, depth: u8) -> Result<Move> {
    let mut nodes = 0;
    pick_best_move(state, depth, &mut nodes)
        .map(|(mv, _)| mv)
        .ok_or(Error::NoLegalMoves)
}

/// Searches the state and returns the best move with its value.
///
/// # Arguments
/// * `state` - The state to search
/// * `depth` - Maximum search depth in plies
/// * `nodes` - Counter for states forecast during the search
///
/// # Returns
/// `None` when the player to move has no legal move
pub fn pick_best_move(state: &GameState, depth: u8, nodes: &mut u64) -> Option<(Move, i32)> {
    let mut best: Option<(Move, i32)> = None;

    for (mv, child) in state.successors() {
        *nodes += 1;
        let score = min_node(&child, depth.saturating_sub(1), nodes);
        log::trace!("root move {} scored {}", mv, score);

        // Strict comparison keeps the first move that reaches the maximum.
        if best.map_or(true, |(_, best_score)| score > best_score) {
            best = Some((mv, score));
        }
    }

    if let Some((mv, score)) = best {
        log::debug!(
            "depth {}: best move {} value {} ({} nodes)",
            depth,
            mv,
            score,
            nodes
        );
    }
    best
}

fn min_node(state: &GameState, depth: u8, nodes: &mut u64) -> i32 {
    if terminal_test(state) {
        return WIN;
    }
    if depth == 0 {
        return UNRESOLVED;
    }
    state
        .successors()
        .map(|(_, child)| {
            *nodes += 1;
            max_node(&child, depth - 1, nodes)
        })
        .min()
        .unwrap_or(WIN)
}

fn max_node(state: &GameState, depth: u8, nodes: &mut u64) -> i32 {
    if terminal_test(state) {
        return LOSS;
    }
    if depth == 0 {
        return UNRESOLVED;
    }
    state
        .successors()
        .map(|(_, child)| {
            *nodes += 1;
            min_node(&child, depth - 1, nodes)
        })
        .max()
        .unwrap_or(LOSS)
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
