use rayon::prelude::*;

use isolation_core::{BoardConfig, Coord, GameState};
use minimax_engine::{max_value, min_value, minimax_decision, terminal_test, LOSS, WIN};

/// Exhaustive solve with no depth limit: does the player to move win?
fn mover_wins(state: &GameState) -> bool {
    state.successors().any(|(_, child)| !mover_wins(&child))
}

/// Every state reachable from `root`, root included.
fn reachable(root: GameState) -> Vec<GameState> {
    let mut out = vec![root];
    let mut i = 0;
    while i < out.len() {
        let next: Vec<GameState> = out[i].successors().map(|(_, s)| s).collect();
        out.extend(next);
        i += 1;
    }
    out
}

fn check_against_brute_force(root: GameState, depth: u8) {
    let states = reachable(root);
    states.par_iter().for_each(|state| {
        let expected = if mover_wins(state) { WIN } else { LOSS };
        assert_eq!(max_value(state, depth), expected, "max_value at {state:?}");
        assert_eq!(min_value(state, depth), -expected, "min_value at {state:?}");
        assert_eq!(terminal_test(state), state.get_legal_moves().is_empty());
    });
}

#[test]
fn default_board_matches_brute_force() {
    check_against_brute_force(GameState::new(), 6);
}

#[test]
fn three_by_three_matches_brute_force() {
    let config = BoardConfig::new(3, 3, vec![Coord(1, 1)]);
    let root = GameState::from_config(&config).unwrap();
    check_against_brute_force(root, 8);
}

#[test]
fn values_stay_in_range_under_cutoff() {
    let config = BoardConfig::new(3, 3, vec![Coord(2, 2)]);
    let states = reachable(GameState::from_config(&config).unwrap());
    states.par_iter().for_each(|state| {
        for depth in 0..4 {
            assert!((-1..=1).contains(&max_value(state, depth)));
            assert!((-1..=1).contains(&min_value(state, depth)));
        }
    });
}

#[test]
fn full_depth_decision_is_a_winning_move_when_one_exists() {
    let config = BoardConfig::new(3, 3, vec![Coord(1, 1)]);
    let states = reachable(GameState::from_config(&config).unwrap());
    states.par_iter().for_each(|state| {
        if terminal_test(state) {
            return;
        }
        let mv = minimax_decision(state, 8).unwrap();
        let child = state.forecast_move(mv).unwrap();
        if mover_wins(state) {
            assert!(!mover_wins(&child), "decision {mv} throws away a win at {state:?}");
        }
    });
}

#[test]
fn self_play_alternates_until_terminal() {
    let mut state = GameState::new();
    let mut plies = 0;
    while !terminal_test(&state) {
        let mv = minimax_decision(&state, 6).unwrap();
        state = state.forecast_move(mv).unwrap();
        plies += 1;
    }
    // Player one wins the default board with perfect play, so the game ends
    // with player two to move.
    assert_eq!(plies % 2, 1);
    assert_eq!(state.active_player(), isolation_core::Player::Two);
}
