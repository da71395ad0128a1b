use std::time::Instant;

use tracing::{error, info};

use twistycore::error::EngineError;
use twistycore::executor::apply_moves;
use twistycore::scramble::{new_rng, scramble};
use twistycore::solver::{solve, CancelToken};
use twistycore::EngineConfig;

fn main() {
    tracing_subscriber::fmt::init();

    let config = match EngineConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "invalid configuration");
            std::process::exit(2);
        }
    };
    let puzzles = match twistycore::catalog() {
        Ok(puzzles) => puzzles,
        Err(e) => {
            error!(error = %e, "could not build the puzzle catalog");
            std::process::exit(1);
        }
    };

    println!("Found {} puzzles.", puzzles.len());

    for puzzle in puzzles.iter() {
        println!("Benchmarking {} ({})...", puzzle.spec.name, config.solver.strategy);
        let length = config.scramble_length.unwrap_or_else(|| puzzle.spec.scramble_length());
        let mut n_successes = 0;
        let mut explored = 0;
        let started = Instant::now();

        for i in 0..config.bench_problems {
            let (state, moves) = scramble(&puzzle.solved, &puzzle.spec, &puzzle.tables, length, &mut new_rng(i as u64));

            match solve(puzzle, &state, &config.solver, &CancelToken::new()) {
                Ok(report) => {
                    debug_assert!(puzzle.is_goal(&apply_moves(&state, &report.moves, &puzzle.tables)));
                    n_successes += 1;
                    explored += report.explored;
                }
                Err(EngineError::UnsolvableOrExhausted { explored: e, .. }) => explored += e,
                Err(e) => {
                    error!(puzzle = %puzzle.id(), scramble = %puzzle.render_moves(&moves), error = %e, "solve failed");
                }
            }
        }

        let problems = config.bench_problems.max(1) as f32;
        info!(puzzle = %puzzle.id(), elapsed_ms = started.elapsed().as_millis() as u64, "benchmark finished");
        println!("Success rate: {}, Avg. explored states: {}",
                 n_successes as f32 / problems,
                 explored as f32 / problems);
    }
}
