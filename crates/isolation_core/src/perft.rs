use crate::board::GameState;

/// Pure perft node count.
/// Counts the lines of play exactly `depth` plies long; lines that reach a
/// terminal state sooner contribute nothing.
pub fn perft(state: &GameState, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }
    state
        .successors()
        .map(|(_, child)| perft(&child, depth - 1))
        .sum()
}
