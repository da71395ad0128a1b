// Best-first A* search.
//
// A single move displaces at most `max_support` facelets, so a state with k
// misplaced facelets needs at least ceil(k / max_support) more moves. The
// bound never overestimates and changes by at most one per move.

use std::cmp::Reverse;
use std::collections::{HashMap, HashSet};

use priority_queue::PriorityQueue;
use tracing::debug;

use super::{follows, trace_back, CancelToken, SolveReport, SolverConfig};
use crate::error::{EngineError, Result};
use crate::executor::apply_move;
use crate::puzzle::Puzzle;
use crate::state::FaceletState;
use crate::tables::MoveId;

fn lower_bound(puzzle: &Puzzle, state: &FaceletState, max_support: usize) -> usize {
    let misplaced = state.colors().iter().zip(puzzle.solved.colors()).filter(|(a, b)| a != b).count();
    (misplaced + max_support - 1) / max_support
}

pub fn search(puzzle: &Puzzle,
              start: &FaceletState,
              config: &SolverConfig,
              cancel: &CancelToken) -> Result<SolveReport> {
    let max_support = puzzle.tables.max_support().max(1);

    // Best known distance from the start and the move that achieved it.
    let mut best: HashMap<FaceletState, (usize, Option<MoveId>)> = HashMap::new();
    let mut closed: HashSet<FaceletState> = HashSet::new();
    let mut open = PriorityQueue::new();
    let mut explored = 0;
    let mut deepest = 0;

    let h = lower_bound(puzzle, start, max_support);
    best.insert(start.clone(), (0, None));
    open.push(start.clone(), Reverse((h, h)));

    while let Some((s, _)) = open.pop() {
        if cancel.is_cancelled() {
            return Err(EngineError::Cancelled);
        }

        let (g, prev) = match best.get(&s) {
            Some(&entry) => entry,
            None => continue,
        };
        deepest = deepest.max(g);

        if puzzle.is_goal(&s) {
            let mut moves = trace_back(puzzle, &s, |x| best.get(x).and_then(|e| e.1));
            moves.reverse();
            debug!(puzzle = %puzzle.id(), explored, length = moves.len(), "guided search reached goal");
            return Ok(SolveReport { moves, explored });
        }

        closed.insert(s.clone());
        if g >= config.max_depth {
            continue;
        }

        for m in puzzle.tables.ids() {
            if !follows(puzzle, prev, m) {
                continue;
            }
            let t = apply_move(&s, m, &puzzle.tables);
            if closed.contains(&t) {
                continue;
            }
            if let Some(&(known, _)) = best.get(&t) {
                if known <= g + 1 {
                    continue;
                }
            }

            explored += 1;
            if explored > config.node_limit {
                return Err(EngineError::UnsolvableOrExhausted { explored, depth: deepest });
            }

            let h = lower_bound(puzzle, &t, max_support);
            best.insert(t.clone(), (g + 1, Some(m)));
            open.push(t, Reverse((g + 1 + h, h)));
        }
    }

    debug!(puzzle = %puzzle.id(), explored, "guided search exhausted its depth");
    Err(EngineError::UnsolvableOrExhausted { explored, depth: deepest })
}
