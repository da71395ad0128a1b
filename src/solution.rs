// Annotated move lists handed to the presentation layer.

use crate::error::{EngineError, Result};
use crate::executor::apply_moves;
use crate::puzzle::Puzzle;
use crate::state::FaceletState;
use crate::tables::MoveId;

pub const PHASE_SCRAMBLE: &str = "Scramble";
pub const PHASE_SOLVE: &str = "Solve";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolutionStep {
    pub mv: MoveId,
    pub notation: String,
    pub description: String,
    pub phase: String,
}

impl SolutionStep {
    pub fn new(puzzle: &Puzzle, mv: MoveId, phase: &str) -> SolutionStep {
        let m = puzzle.tables.get(mv);
        SolutionStep {
            mv,
            notation: puzzle.spec.notation(m),
            description: puzzle.spec.describe(m),
            phase: phase.to_string(),
        }
    }
}

pub fn annotate(puzzle: &Puzzle, moves: &[MoveId], phase: &str) -> Vec<SolutionStep> {
    moves.iter().map(|&m| SolutionStep::new(puzzle, m, phase)).collect()
}

/// A move list known to take its start state to solved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    steps: Vec<SolutionStep>,
}

impl Solution {
    /// Replays `moves` from `start` and only builds the solution if they end
    /// on the solved state.
    pub fn verified(puzzle: &Puzzle, start: &FaceletState, moves: &[MoveId]) -> Result<Solution> {
        if let Some(&bad) = moves.iter().find(|&&m| m >= puzzle.tables.len()) {
            return Err(EngineError::Notation(format!("move id {} is not a move of {}", bad, puzzle.id())));
        }
        if !puzzle.is_goal(&apply_moves(start, moves, &puzzle.tables)) {
            return Err(EngineError::InvalidState(
                format!("{} does not solve the given {} state", puzzle.render_moves(moves), puzzle.spec.name)));
        }
        Ok(Solution { steps: annotate(puzzle, moves, PHASE_SOLVE) })
    }

    pub fn steps(&self) -> &[SolutionStep] {
        &self.steps
    }

    pub fn moves(&self) -> Vec<MoveId> {
        self.steps.iter().map(|s| s.mv).collect()
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}
