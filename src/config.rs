// Engine configuration parsed from environment variables.

use crate::error::{EngineError, Result};
use crate::scramble::MAX_SCRAMBLE_LENGTH;
use crate::solver::{SolverConfig, Strategy, DEFAULT_MAX_DEPTH, DEFAULT_NODE_LIMIT};

pub const DEFAULT_BENCH_PROBLEMS: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    /// Scramble length; each puzzle's own length when absent.
    pub scramble_length: Option<usize>,
    pub solver: SolverConfig,
    pub bench_problems: usize,
}

impl Default for EngineConfig {
    fn default() -> EngineConfig {
        EngineConfig {
            scramble_length: None,
            solver: SolverConfig::default(),
            bench_problems: DEFAULT_BENCH_PROBLEMS,
        }
    }
}

impl EngineConfig {
    /// Build typed config from environment variables.
    ///
    /// Optional:
    /// - `TWISTY_SCRAMBLE_LENGTH`: per-puzzle default (min(25, 5 * grid size)), at most 10000
    /// - `TWISTY_SOLVER_STRATEGY`: `bidirectional` (default) or `guided`
    /// - `TWISTY_SOLVER_MAX_DEPTH`: default 20
    /// - `TWISTY_SOLVER_NODE_LIMIT`: default 1000000
    /// - `TWISTY_BENCH_PROBLEMS`: default 20
    pub fn from_env() -> Result<EngineConfig> {
        EngineConfig::from_vars(|key| std::env::var(key).ok())
    }

    pub fn from_vars<F>(var: F) -> Result<EngineConfig>
    where
        F: Fn(&str) -> Option<String>,
    {
        let strategy = match var("TWISTY_SOLVER_STRATEGY") {
            Some(raw) => raw.parse::<Strategy>()?,
            None => Strategy::Bidirectional,
        };
        let solver = SolverConfig {
            strategy,
            max_depth: parse_usize(&var, "TWISTY_SOLVER_MAX_DEPTH")?.unwrap_or(DEFAULT_MAX_DEPTH),
            node_limit: parse_usize(&var, "TWISTY_SOLVER_NODE_LIMIT")?.unwrap_or(DEFAULT_NODE_LIMIT),
        };

        let scramble_length = parse_usize(&var, "TWISTY_SCRAMBLE_LENGTH")?;
        if let Some(length) = scramble_length {
            if length > MAX_SCRAMBLE_LENGTH {
                return Err(EngineError::Configuration(
                    format!("TWISTY_SCRAMBLE_LENGTH must be at most {}, got {}", MAX_SCRAMBLE_LENGTH, length)));
            }
        }

        Ok(EngineConfig {
            scramble_length,
            solver,
            bench_problems: parse_usize(&var, "TWISTY_BENCH_PROBLEMS")?.unwrap_or(DEFAULT_BENCH_PROBLEMS),
        })
    }
}

fn parse_usize<F>(var: &F, key: &str) -> Result<Option<usize>>
where
    F: Fn(&str) -> Option<String>,
{
    match var(key) {
        Some(raw) => raw.trim().parse::<usize>().map(Some).map_err(|_| {
            EngineError::Configuration(format!("{} must be a non-negative integer, got {:?}", key, raw))
        }),
        None => Ok(None),
    }
}
