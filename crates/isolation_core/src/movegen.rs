use crate::{board::GameState, types::*};

/// Direction deltas `(dcol, drow)` in the order rays are walked.
///
/// Rows grow downward, so `-1` in the row component points toward the top edge.
pub const RAYS: [(i8, i8); 8] = [
    (1, 0),
    (1, -1),
    (0, -1),
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Generate all legal moves, returning a freshly allocated vector.
pub fn get_legal_moves(state: &GameState) -> Vec<Move> {
    let mut out = Vec::with_capacity(state.board().open_bitboard().popcount() as usize);
    legal_moves_into(state, &mut out);
    out
}

/// Generate all legal moves into the provided buffer, reusing it across calls.
///
/// An unplaced player may go to any open cell, listed top-to-bottom then
/// left-to-right. A placed player slides any distance along one of the eight
/// rays; each ray ends at the first blocked cell or the board edge.
pub fn legal_moves_into(state: &GameState, out: &mut Vec<Move>) {
    out.clear();
    match state.player_location(state.active_player()) {
        None => out.extend(state.board().open_cells()),
        Some(from) => gen_rays(state, from, out),
    }
}

fn gen_rays(state: &GameState, from: Coord, out: &mut Vec<Move>) {
    let board = state.board();
    for &(dcol, drow) in &RAYS {
        let mut cur = from;
        while let Some(to) = cur.offset(dcol, drow) {
            if !board.is_open(to) {
                break;
            }
            out.push(to);
            cur = to;
        }
    }
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
