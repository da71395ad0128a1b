// Search for move sequences that bring a state back to solved.

pub mod bidirectional;
pub mod guided;
pub mod worker;

pub use worker::{spawn_solve, SolveHandle};

use core::str::FromStr;
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tracing::info;

use crate::error::{EngineError, Result};
use crate::executor::{apply_move, apply_moves};
use crate::puzzle::Puzzle;
use crate::state::FaceletState;
use crate::tables::MoveId;
use crate::validate::check_plausible;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Breadth-first from both the scrambled and the solved state.
    Bidirectional,
    /// A* under a misplaced-facelet bound.
    Guided,
}

impl FromStr for Strategy {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Strategy> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bidirectional" => Ok(Strategy::Bidirectional),
            "guided" => Ok(Strategy::Guided),
            other => Err(EngineError::Configuration(format!("unknown solver strategy {:?}", other))),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Bidirectional => write!(f, "bidirectional"),
            Strategy::Guided => write!(f, "guided"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolverConfig {
    pub strategy: Strategy,
    /// Longest solution searched for.
    pub max_depth: usize,
    /// Number of states the search may generate before giving up.
    pub node_limit: usize,
}

pub const DEFAULT_MAX_DEPTH: usize = 20;
pub const DEFAULT_NODE_LIMIT: usize = 1_000_000;

impl Default for SolverConfig {
    fn default() -> SolverConfig {
        SolverConfig {
            strategy: Strategy::Bidirectional,
            max_depth: DEFAULT_MAX_DEPTH,
            node_limit: DEFAULT_NODE_LIMIT,
        }
    }
}

/// Cooperative cancellation flag shared between a search and its owner.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> CancelToken {
        CancelToken::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolveReport {
    pub moves: Vec<MoveId>,
    /// States generated during the search.
    pub explored: usize,
}

/// Whether `next` may follow `prev` in a search path. Repeating the same face
/// and layers never helps, and moves on opposite faces commute, so only the
/// lower face goes first.
pub(crate) fn follows(puzzle: &Puzzle, prev: Option<MoveId>, next: MoveId) -> bool {
    let prev = match prev {
        Some(p) => puzzle.tables.get(p),
        None => return true,
    };
    let next = puzzle.tables.get(next);

    if prev.face == next.face && prev.layers == next.layers {
        return false;
    }
    !(puzzle.spec.faces[next.face].opposite == Some(prev.face) && next.face < prev.face)
}

// Walks parent links back to the root: `parent(x)` is the move that produced
// `x`, and undoing it yields the previous state.
pub(crate) fn trace_back<F>(puzzle: &Puzzle, from: &FaceletState, parent: F) -> Vec<MoveId>
where
    F: Fn(&FaceletState) -> Option<MoveId>,
{
    let mut moves = Vec::new();
    let mut x = from.clone();
    while let Some(m) = parent(&x) {
        moves.push(m);
        x = apply_move(&x, puzzle.tables.inverse(m), &puzzle.tables);
    }
    moves
}

/// Searches for a move sequence taking `state` to the solved state of
/// `puzzle`. Implausible states are rejected before any search; the returned
/// moves have been replayed against the tables.
pub fn solve(puzzle: &Puzzle,
             state: &FaceletState,
             config: &SolverConfig,
             cancel: &CancelToken) -> Result<SolveReport> {
    check_plausible(state, &puzzle.spec)?;

    let report = if puzzle.is_goal(state) {
        SolveReport { moves: Vec::new(), explored: 0 }
    } else {
        match config.strategy {
            Strategy::Bidirectional => bidirectional::search(puzzle, state, config, cancel)?,
            Strategy::Guided => guided::search(puzzle, state, config, cancel)?,
        }
    };

    if !puzzle.is_goal(&apply_moves(state, &report.moves, &puzzle.tables)) {
        return Err(EngineError::Configuration(
            format!("{} search returned moves that do not solve {}", config.strategy, puzzle.id())));
    }

    info!(puzzle = %puzzle.id(), strategy = %config.strategy, length = report.moves.len(),
          explored = report.explored, "solved");
    Ok(report)
}
