// One user's view of a puzzle: the current state plus undo/redo snapshots.

use std::collections::HashMap;
use std::sync::Arc;

use crate::error::{EngineError, Result};
use crate::executor::apply_move;
use crate::puzzle::Puzzle;
use crate::scramble::{new_rng, scramble, MAX_SCRAMBLE_LENGTH};
use crate::solution::{annotate, Solution, SolutionStep, PHASE_SCRAMBLE};
use crate::solver::{solve, CancelToken, SolverConfig};
use crate::state::FaceletState;
use crate::tables::MoveId;
use crate::validate::check_plausible;

pub struct Session {
    puzzle: Arc<Puzzle>,
    state: FaceletState,
    undo: Vec<FaceletState>,
    redo: Vec<FaceletState>,
}

impl Session {
    pub fn new(puzzle: Arc<Puzzle>) -> Session {
        let state = puzzle.solved.clone();
        Session { puzzle, state, undo: Vec::new(), redo: Vec::new() }
    }

    pub fn puzzle(&self) -> &Arc<Puzzle> {
        &self.puzzle
    }

    pub fn state(&self) -> &FaceletState {
        &self.state
    }

    pub fn is_solved(&self) -> bool {
        self.state.is_solved(&self.puzzle.spec)
    }

    // Replaces the current state, keeping the old one for undo.
    fn commit(&mut self, next: FaceletState) {
        let prev = std::mem::replace(&mut self.state, next);
        self.undo.push(prev);
        self.redo.clear();
    }

    pub fn apply(&mut self, mv: MoveId) -> Result<()> {
        if mv >= self.puzzle.tables.len() {
            return Err(EngineError::Notation(format!("move id {} is not a move of {}", mv, self.puzzle.id())));
        }
        let next = apply_move(&self.state, mv, &self.puzzle.tables);
        self.commit(next);
        Ok(())
    }

    /// Applies every move of a notation string, one undo step per move. Nothing
    /// is applied if any token fails to parse.
    pub fn apply_notation(&mut self, s: &str) -> Result<Vec<MoveId>> {
        let moves = self.puzzle.parse_moves(s)?;
        for &m in moves.iter() {
            self.apply(m)?;
        }
        Ok(moves)
    }

    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    pub fn undo(&mut self) -> bool {
        match self.undo.pop() {
            Some(prev) => {
                let current = std::mem::replace(&mut self.state, prev);
                self.redo.push(current);
                true
            }
            None => false,
        }
    }

    pub fn redo(&mut self) -> bool {
        match self.redo.pop() {
            Some(next) => {
                let current = std::mem::replace(&mut self.state, next);
                self.undo.push(current);
                true
            }
            None => false,
        }
    }

    pub fn reset(&mut self) {
        let solved = self.puzzle.solved.clone();
        self.commit(solved);
    }

    /// Scrambles from the current state. `length` defaults to the puzzle's
    /// selector length.
    pub fn scramble(&mut self, seed: u64, length: Option<usize>) -> Result<Vec<SolutionStep>> {
        let length = length.unwrap_or_else(|| self.puzzle.spec.scramble_length());
        if length > MAX_SCRAMBLE_LENGTH {
            return Err(EngineError::Configuration(
                format!("scramble length must be at most {}, got {}", MAX_SCRAMBLE_LENGTH, length)));
        }
        let mut rng = new_rng(seed);
        let (next, moves) = scramble(&self.state, &self.puzzle.spec, &self.puzzle.tables, length, &mut rng);
        self.commit(next);
        Ok(annotate(&self.puzzle, &moves, PHASE_SCRAMBLE))
    }

    /// Accepts an externally supplied state once it passes the plausibility checks.
    pub fn load(&mut self, state: FaceletState) -> Result<()> {
        check_plausible(&state, &self.puzzle.spec)?;
        self.commit(state);
        Ok(())
    }

    pub fn load_map(&mut self, map: &HashMap<String, String>) -> Result<()> {
        let state = FaceletState::from_map(&self.puzzle.spec, map)?;
        self.load(state)
    }

    /// Searches for a solution of the current state without changing it.
    pub fn solve(&self, config: &SolverConfig, cancel: &CancelToken) -> Result<Solution> {
        let report = solve(&self.puzzle, &self.state, config, cancel)?;
        Solution::verified(&self.puzzle, &self.state, &report.moves)
    }
}

#[cfg(test)]
mod test {
    use std::sync::Arc;

    use super::Session;
    use crate::error::EngineError;
    use crate::families::{Cube, PuzzleFamily};
    use crate::puzzle::Puzzle;
    use crate::solver::{CancelToken, SolverConfig};
    use crate::state::FaceletState;

    fn session(size: usize) -> Session {
        Session::new(Arc::new(Puzzle::new(Cube::new(size).spec()).unwrap()))
    }

    #[test]
    fn test_undo_redo() {
        let mut s = session(3);
        assert!(!s.undo());
        s.apply_notation("R U").unwrap();
        let after = s.state().clone();

        assert!(s.undo());
        assert!(s.undo());
        assert!(s.is_solved());
        assert!(s.redo());
        assert!(s.redo());
        assert_eq!(s.state(), &after);
        assert!(!s.redo());

        // A new move drops the redo history.
        s.undo();
        s.apply_notation("F").unwrap();
        assert!(!s.can_redo());
    }

    #[test]
    fn test_bad_notation_applies_nothing() {
        let mut s = session(3);
        assert!(s.apply_notation("R Q").is_err());
        assert!(!s.can_undo());
        assert!(s.apply(10_000).is_err());
    }

    #[test]
    fn test_scramble_and_solve() {
        let mut s = session(2);
        let steps = s.scramble(5, Some(4)).unwrap();
        assert_eq!(steps.len(), 4);
        assert!(steps.iter().all(|step| step.phase == "Scramble"));

        let solution = s.solve(&SolverConfig::default(), &CancelToken::new()).unwrap();
        for m in solution.moves() {
            s.apply(m).unwrap();
        }
        assert!(s.is_solved());
        assert_eq!(s.state(), &s.puzzle().solved);
    }

    #[test]
    fn test_oversized_scramble_is_rejected() {
        let mut s = session(2);
        assert!(matches!(s.scramble(1, Some(usize::MAX)), Err(EngineError::Configuration(_))));
        assert!(!s.can_undo());
        assert_eq!(s.scramble(1, None).unwrap().len(), s.puzzle().spec.scramble_length());
    }

    #[test]
    fn test_load() {
        let mut s = session(3);
        let mut colors = s.puzzle().solved.colors().to_vec();
        colors[0] = 5;
        let bad = FaceletState::from_colors(&s.puzzle().spec, colors).unwrap();
        assert!(s.load(bad).is_err());
        assert!(!s.can_undo());

        let map = s.puzzle().solved.to_map(&s.puzzle().spec);
        s.load_map(&map).unwrap();
        assert!(s.can_undo());
        s.reset();
        assert!(s.is_solved());
    }
}
