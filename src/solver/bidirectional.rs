// Meet-in-the-middle breadth-first search.
//
// One tree grows from the scrambled state, the other from the solved state.
// Each round expands a full layer of whichever frontier is smaller; the search
// ends when a newly generated state is already known to the other tree.

use std::collections::HashMap;

use tracing::debug;

use super::{follows, trace_back, CancelToken, SolveReport, SolverConfig};
use crate::error::{EngineError, Result};
use crate::executor::apply_move;
use crate::puzzle::Puzzle;
use crate::state::FaceletState;
use crate::tables::MoveId;

// Every known state of one tree, with the move that first produced it.
type Tree = HashMap<FaceletState, Option<MoveId>>;

struct Side {
    tree: Tree,
    frontier: Vec<FaceletState>,
    depth: usize,
}

impl Side {
    fn new(root: &FaceletState) -> Side {
        let mut tree = HashMap::new();
        tree.insert(root.clone(), None);
        Side { tree, frontier: vec![root.clone()], depth: 0 }
    }
}

enum Expansion {
    Met(FaceletState),
    Grown,
}

// Expands one layer of `side`, stopping as soon as a state of `other` is met.
fn expand(puzzle: &Puzzle,
          side: &mut Side,
          other: &Side,
          explored: &mut usize,
          config: &SolverConfig,
          cancel: &CancelToken) -> Result<Expansion> {
    let frontier = std::mem::take(&mut side.frontier);
    let mut next = Vec::new();

    for s in frontier.iter() {
        if cancel.is_cancelled() {
            return Err(EngineError::Cancelled);
        }
        let prev = side.tree.get(s).copied().flatten();

        for m in puzzle.tables.ids() {
            if !follows(puzzle, prev, m) {
                continue;
            }
            let t = apply_move(s, m, &puzzle.tables);
            if side.tree.contains_key(&t) {
                continue;
            }

            *explored += 1;
            if *explored > config.node_limit {
                return Err(EngineError::UnsolvableOrExhausted {
                    explored: *explored,
                    depth: side.depth + other.depth,
                });
            }

            side.tree.insert(t.clone(), Some(m));
            if other.tree.contains_key(&t) {
                side.depth += 1;
                return Ok(Expansion::Met(t));
            }
            next.push(t);
        }
    }

    side.frontier = next;
    side.depth += 1;
    Ok(Expansion::Grown)
}

pub fn search(puzzle: &Puzzle,
              start: &FaceletState,
              config: &SolverConfig,
              cancel: &CancelToken) -> Result<SolveReport> {
    let mut forward = Side::new(start);
    let mut backward = Side::new(&puzzle.solved);
    let mut explored = 0;

    if backward.tree.contains_key(start) {
        return Ok(SolveReport { moves: Vec::new(), explored });
    }

    loop {
        let exhausted = forward.frontier.is_empty() || backward.frontier.is_empty();
        if exhausted || forward.depth + backward.depth >= config.max_depth {
            debug!(puzzle = %puzzle.id(), explored, forward = forward.depth, backward = backward.depth,
                   "bidirectional search gave up");
            return Err(EngineError::UnsolvableOrExhausted {
                explored,
                depth: forward.depth + backward.depth,
            });
        }

        let grow_forward = forward.frontier.len() <= backward.frontier.len();
        let expansion = if grow_forward {
            expand(puzzle, &mut forward, &backward, &mut explored, config, cancel)?
        } else {
            expand(puzzle, &mut backward, &forward, &mut explored, config, cancel)?
        };

        debug!(puzzle = %puzzle.id(), explored, forward = forward.depth, backward = backward.depth,
               "expanded layer");

        if let Expansion::Met(meet) = expansion {
            let mut moves = trace_back(puzzle, &meet, |x| forward.tree.get(x).copied().flatten());
            moves.reverse();
            let tail = trace_back(puzzle, &meet, |x| backward.tree.get(x).copied().flatten());
            moves.extend(tail.into_iter().map(|m| puzzle.tables.inverse(m)));
            return Ok(SolveReport { moves, explored });
        }
    }
}

#[cfg(test)]
mod test {
    use super::search;
    use crate::error::EngineError;
    use crate::executor::apply_moves;
    use crate::families::{Cube, PuzzleFamily, Pyraminx};
    use crate::puzzle::Puzzle;
    use crate::scramble::{new_rng, scramble};
    use crate::solver::{CancelToken, SolverConfig};

    fn solves(puzzle: &Puzzle, scramble_moves: &str, max_len: usize) {
        let moves = puzzle.parse_moves(scramble_moves).unwrap();
        let state = apply_moves(&puzzle.solved, &moves, &puzzle.tables);
        let report = search(puzzle, &state, &SolverConfig::default(), &CancelToken::new()).unwrap();
        assert!(!report.moves.is_empty() && report.moves.len() <= max_len, "{}", puzzle.render_moves(&report.moves));
        assert!(puzzle.is_goal(&apply_moves(&state, &report.moves, &puzzle.tables)));
    }

    #[test]
    fn test_single_move() {
        let puzzle = Puzzle::new(Cube::new(3).spec()).unwrap();
        solves(&puzzle, "R", 1);
        solves(&puzzle, "U2", 1);
    }

    #[test]
    fn test_short_scrambles() {
        let puzzle = Puzzle::new(Cube::new(3).spec()).unwrap();
        solves(&puzzle, "R U F' L2 D", 5);

        let pocket = Puzzle::new(Cube::new(2).spec()).unwrap();
        solves(&pocket, "R U", 2);

        let pyraminx = Puzzle::new(Pyraminx::new().spec()).unwrap();
        solves(&pyraminx, "R L' u", 3);
    }

    #[test]
    fn test_seeded_pocket_scramble() {
        let puzzle = Puzzle::new(Cube::new(2).spec()).unwrap();
        let (state, moves) = scramble(&puzzle.solved, &puzzle.spec, &puzzle.tables, 6, &mut new_rng(11));
        let report = search(&puzzle, &state, &SolverConfig::default(), &CancelToken::new()).unwrap();
        assert!(report.moves.len() <= moves.len());
        assert!(puzzle.is_goal(&apply_moves(&state, &report.moves, &puzzle.tables)));
    }

    #[test]
    fn test_depth_cap() {
        let puzzle = Puzzle::new(Cube::new(3).spec()).unwrap();
        let state = apply_moves(&puzzle.solved, &puzzle.parse_moves("R U F").unwrap(), &puzzle.tables);
        let config = SolverConfig { max_depth: 2, ..SolverConfig::default() };
        let result = search(&puzzle, &state, &config, &CancelToken::new());
        assert!(matches!(result, Err(EngineError::UnsolvableOrExhausted { .. })));
    }

    #[test]
    fn test_node_limit() {
        let puzzle = Puzzle::new(Cube::new(3).spec()).unwrap();
        let state = apply_moves(&puzzle.solved, &puzzle.parse_moves("R U F D L B").unwrap(), &puzzle.tables);
        let config = SolverConfig { node_limit: 100, ..SolverConfig::default() };
        match search(&puzzle, &state, &config, &CancelToken::new()) {
            Err(EngineError::UnsolvableOrExhausted { explored, .. }) => assert_eq!(explored, 101),
            other => panic!("unexpected {:?}", other),
        }
    }
}
