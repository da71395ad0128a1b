use std::collections::HashMap;

use twistycore::error::EngineError;
use twistycore::executor::{apply_move, apply_moves};
use twistycore::scramble::{new_rng, scramble};
use twistycore::solver::{solve, CancelToken, SolverConfig, Strategy};
use twistycore::spec::Turn;
use twistycore::validate::is_plausible;
use twistycore::{puzzle, FaceletState, Puzzle};

fn scrambled(p: &Puzzle, length: usize, seed: u64) -> (FaceletState, Vec<usize>) {
    scramble(&p.solved, &p.spec, &p.tables, length, &mut new_rng(seed))
}

#[test]
fn move_then_inverse_restores_reachable_states() {
    for p in twistycore::catalog().unwrap() {
        let (start, _) = scrambled(&p, 10, 1);
        for id in p.tables.ids() {
            let there = apply_move(&start, id, &p.tables);
            assert_eq!(apply_move(&there, p.tables.inverse(id), &p.tables), start, "{}", p.id());
        }
    }
}

#[test]
fn full_turns_are_identity() {
    for p in twistycore::catalog().unwrap() {
        let (start, _) = scrambled(&p, 6, 2);
        for id in p.tables.ids() {
            let times = match p.tables.get(id).turn {
                Turn::Half => 2,
                _ => p.spec.turn_order(),
            };
            let repeated = vec![id; times];
            assert_eq!(apply_moves(&start, &repeated, &p.tables), start);
        }
    }
}

#[test]
fn classic_cube_r_scenario() {
    let p = puzzle("3x3").unwrap();
    let solved = p.solved.to_map(&p.spec);
    assert_eq!(solved.len(), 54);
    for i in 0..9 {
        assert_eq!(solved[&format!("F{}", i)], "#ff6b35");
    }

    let r = p.parse_moves("R").unwrap()[0];
    let r_inv = p.parse_moves("R'").unwrap()[0];
    let back: HashMap<String, String> = apply_moves(&p.solved, &[r, r_inv], &p.tables).to_map(&p.spec);
    assert_eq!(back, solved);

    let four = apply_moves(&p.solved, &[r, r, r, r], &p.tables);
    assert_eq!(four.to_map(&p.spec), solved);
    assert_ne!(apply_move(&p.solved, r, &p.tables), p.solved);
}

#[test]
fn seeded_pocket_scramble_is_deterministic_and_plausible() {
    let p = puzzle("2x2").unwrap();
    let (a, moves_a) = scrambled(&p, 5, 42);
    let (b, moves_b) = scrambled(&p, 5, 42);
    assert_eq!(a, b);
    assert_eq!(moves_a, moves_b);
    assert_eq!(a.len(), 24);
    assert!(is_plausible(&a, &p.spec));
}

#[test]
fn plausibility_of_solved_and_recolored_states() {
    for p in twistycore::catalog().unwrap() {
        assert!(is_plausible(&p.solved, &p.spec));

        let mut colors = p.solved.colors().to_vec();
        colors[0] = if colors[0] == 0 { 1 } else { 0 };
        let recolored = FaceletState::from_colors(&p.spec, colors).unwrap();
        assert!(!is_plausible(&recolored, &p.spec), "{}", p.id());
    }
}

#[test]
fn scramble_then_solve_short_lengths() {
    let config = SolverConfig::default();
    for id in ["2x2", "3x3", "pyramid", "mirror"] {
        let p = puzzle(id).unwrap();
        for length in [0, 1, 4] {
            let (state, _) = scrambled(&p, length, 9);
            let report = solve(&p, &state, &config, &CancelToken::new()).unwrap();
            assert!(report.moves.len() <= length);
            assert!(p.is_goal(&apply_moves(&state, &report.moves, &p.tables)));
        }
    }
}

#[test]
fn scramble_then_solve_long_lengths() {
    let config = SolverConfig { strategy: Strategy::Bidirectional, ..SolverConfig::default() };
    for id in ["2x2", "pyramid"] {
        let p = puzzle(id).unwrap();
        for length in [20, p.spec.scramble_length()] {
            let (state, _) = scrambled(&p, length, 5);
            let report = solve(&p, &state, &config, &CancelToken::new()).unwrap();
            assert!(report.moves.len() <= length);
            assert!(p.is_goal(&apply_moves(&state, &report.moves, &p.tables)), "{} at {}", id, length);
        }
    }
}

#[test]
fn exhausted_budget_is_reported_not_guessed() {
    // A deep 3x3 scramble does not fit in a small budget; the solver reports
    // exhaustion instead of looping or returning a wrong answer.
    let p = puzzle("3x3").unwrap();
    for strategy in [Strategy::Bidirectional, Strategy::Guided] {
        let config = SolverConfig { strategy, max_depth: 20, node_limit: 20_000 };
        for length in [20, p.spec.scramble_length()] {
            let (state, _) = scrambled(&p, length, 5);
            match solve(&p, &state, &config, &CancelToken::new()) {
                Ok(report) => assert!(p.is_goal(&apply_moves(&state, &report.moves, &p.tables))),
                Err(EngineError::UnsolvableOrExhausted { explored, .. }) => assert!(explored <= 20_001),
                Err(e) => panic!("unexpected {}", e),
            }
        }
    }
}

#[test]
fn big_cubes_solve_short_scrambles() {
    for id in ["4x4", "5x5"] {
        let p = puzzle(id).unwrap();
        let (state, _) = scrambled(&p, 2, 3);
        let report = solve(&p, &state, &SolverConfig::default(), &CancelToken::new()).unwrap();
        assert!(p.is_goal(&apply_moves(&state, &report.moves, &p.tables)));
    }
}
