// Runs a solve off the calling thread.

use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use tracing::warn;

use super::{solve, CancelToken, SolveReport, SolverConfig};
use crate::error::{EngineError, Result};
use crate::puzzle::Puzzle;
use crate::state::FaceletState;

/// Owner side of a running search.
pub struct SolveHandle {
    cancel: CancelToken,
    receiver: Receiver<Result<SolveReport>>,
    worker: Option<JoinHandle<()>>,
    outcome: Option<Result<SolveReport>>,
}

impl SolveHandle {
    /// Asks the search to stop at its next node boundary.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    /// The result, if the search has finished. Once available it is returned
    /// on every later call.
    pub fn try_result(&mut self) -> Option<Result<SolveReport>> {
        if self.outcome.is_none() {
            match self.receiver.try_recv() {
                Ok(result) => self.outcome = Some(result),
                Err(TryRecvError::Empty) => return None,
                Err(TryRecvError::Disconnected) => self.outcome = Some(Err(EngineError::Cancelled)),
            }
            self.join();
        }
        self.outcome.clone()
    }

    /// Blocks until the search finishes.
    pub fn wait(mut self) -> Result<SolveReport> {
        if let Some(result) = self.outcome.take() {
            return result;
        }
        let result = self.receiver.recv().unwrap_or(Err(EngineError::Cancelled));
        self.join();
        result
    }

    fn join(&mut self) {
        if let Some(worker) = self.worker.take() {
            if worker.join().is_err() {
                warn!("solver thread panicked");
            }
        }
    }
}

impl Drop for SolveHandle {
    // Nobody can read the result any more.
    fn drop(&mut self) {
        if self.outcome.is_none() {
            self.cancel.cancel();
        }
    }
}

pub fn spawn_solve(puzzle: Arc<Puzzle>, state: FaceletState, config: SolverConfig) -> SolveHandle {
    let cancel = CancelToken::new();
    let (sender, receiver) = mpsc::channel();

    let token = cancel.clone();
    let worker = thread::spawn(move || {
        let result = solve(&puzzle, &state, &config, &token);
        // The handle may already be gone.
        let _ = sender.send(result);
    });

    SolveHandle { cancel, receiver, worker: Some(worker), outcome: None }
}

#[cfg(test)]
mod test {
    use std::sync::Arc;

    use super::spawn_solve;
    use crate::error::EngineError;
    use crate::executor::apply_moves;
    use crate::families::{Cube, PuzzleFamily};
    use crate::puzzle::Puzzle;
    use crate::solver::SolverConfig;

    #[test]
    fn test_background_solve() {
        let puzzle = Arc::new(Puzzle::new(Cube::new(3).spec()).unwrap());
        let state = apply_moves(&puzzle.solved, &puzzle.parse_moves("R U2 F'").unwrap(), &puzzle.tables);
        let handle = spawn_solve(puzzle.clone(), state.clone(), SolverConfig::default());
        let report = handle.wait().unwrap();
        assert!(puzzle.is_goal(&apply_moves(&state, &report.moves, &puzzle.tables)));
    }

    #[test]
    fn test_result_can_be_polled_repeatedly() {
        let puzzle = Arc::new(Puzzle::new(Cube::new(2).spec()).unwrap());
        let state = apply_moves(&puzzle.solved, &puzzle.parse_moves("R U").unwrap(), &puzzle.tables);
        let mut handle = spawn_solve(puzzle, state, SolverConfig::default());

        let first = loop {
            if let Some(result) = handle.try_result() {
                break result;
            }
            std::thread::yield_now();
        };
        assert!(first.is_ok());
        assert_eq!(handle.try_result(), Some(first.clone()));
        assert_eq!(handle.wait(), first);
    }

    #[test]
    fn test_drop_cancels_search() {
        let puzzle = Arc::new(Puzzle::new(Cube::new(5).spec()).unwrap());
        let state = apply_moves(&puzzle.solved,
                                &puzzle.parse_moves("R U F D L B 2R 2U 2F Rw Uw Fw").unwrap(),
                                &puzzle.tables);
        let config = SolverConfig { node_limit: usize::MAX, max_depth: 40, ..SolverConfig::default() };
        let handle = spawn_solve(puzzle, state, config);
        let token = handle.cancel.clone();
        drop(handle);
        assert!(token.is_cancelled());
    }

    #[test]
    fn test_cancel() {
        // Far enough from solved that the search cannot finish before it is cancelled.
        let puzzle = Arc::new(Puzzle::new(Cube::new(5).spec()).unwrap());
        let state = apply_moves(&puzzle.solved,
                                &puzzle.parse_moves("R U F D L B 2R 2U 2F Rw Uw Fw").unwrap(),
                                &puzzle.tables);
        let config = SolverConfig { node_limit: usize::MAX, max_depth: 40, ..SolverConfig::default() };
        let mut handle = spawn_solve(puzzle, state, config);
        handle.cancel();

        let result = loop {
            if let Some(result) = handle.try_result() {
                break result;
            }
            std::thread::yield_now();
        };
        assert_eq!(result, Err(EngineError::Cancelled));
    }
}
