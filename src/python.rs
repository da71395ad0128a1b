// Python bindings, built with the `python` feature.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::wrap_pyfunction;

use crate::config::EngineConfig;
use crate::error::EngineError;
use crate::executor::apply_moves;
use crate::scramble::{new_rng, MAX_SCRAMBLE_LENGTH};
use crate::solver::{solve as run_solver, CancelToken, Strategy};
use crate::state::FaceletState;
use crate::validate;

fn to_py(e: EngineError) -> PyErr {
    PyValueError::new_err(e.to_string())
}

/// Lists the catalog as (id, name, difficulty).
#[pyfunction]
fn puzzles() -> PyResult<Vec<(String, String, String)>> {
    Ok(crate::catalog()
        .map_err(to_py)?
        .iter()
        .map(|p| (p.spec.id.clone(), p.spec.name.clone(), p.spec.difficulty.to_string()))
        .collect())
}

/// Solved state of a puzzle in text form.
#[pyfunction]
fn solved(puzzle: String) -> PyResult<String> {
    let p = crate::puzzle(&puzzle).map_err(to_py)?;
    Ok(p.solved.render(&p.spec))
}

/// Scrambles the solved state, returning the state and the moves used.
#[pyfunction]
fn scramble(puzzle: String, seed: u64, length: Option<usize>) -> PyResult<(String, Vec<String>)> {
    let p = crate::puzzle(&puzzle).map_err(to_py)?;
    let length = length.unwrap_or_else(|| p.spec.scramble_length());
    if length > MAX_SCRAMBLE_LENGTH {
        return Err(PyValueError::new_err(format!("scramble length must be at most {}", MAX_SCRAMBLE_LENGTH)));
    }
    let (state, moves) = crate::scramble::scramble(&p.solved, &p.spec, &p.tables, length, &mut new_rng(seed));
    Ok((state.render(&p.spec), moves.iter().map(|&m| p.spec.notation(p.tables.get(m))).collect()))
}

/// Applies a notation string to a state.
#[pyfunction]
fn apply(puzzle: String, state: String, moves: String) -> PyResult<String> {
    let p = crate::puzzle(&puzzle).map_err(to_py)?;
    let s = FaceletState::parse(&p.spec, &state).map_err(to_py)?;
    let ids = p.parse_moves(&moves).map_err(to_py)?;
    Ok(apply_moves(&s, &ids, &p.tables).render(&p.spec))
}

#[pyfunction]
fn is_plausible(puzzle: String, state: String) -> PyResult<bool> {
    let p = crate::puzzle(&puzzle).map_err(to_py)?;
    let s = FaceletState::parse(&p.spec, &state).map_err(to_py)?;
    Ok(validate::is_plausible(&s, &p.spec))
}

/// Solves a state, returning (notation, description) per move.
#[pyfunction]
fn solve(puzzle: String, state: String, strategy: Option<String>) -> PyResult<Vec<(String, String)>> {
    let p = crate::puzzle(&puzzle).map_err(to_py)?;
    let s = FaceletState::parse(&p.spec, &state).map_err(to_py)?;
    let mut config = EngineConfig::from_env().map_err(to_py)?.solver;
    if let Some(strategy) = strategy {
        config.strategy = strategy.parse::<Strategy>().map_err(to_py)?;
    }

    let report = run_solver(&p, &s, &config, &CancelToken::new()).map_err(to_py)?;
    Ok(report.moves
        .iter()
        .map(|&m| (p.spec.notation(p.tables.get(m)), p.spec.describe(p.tables.get(m))))
        .collect())
}

/// A Python module implemented in Rust.
#[pymodule]
fn twistycore(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(puzzles, m)?)?;
    m.add_function(wrap_pyfunction!(solved, m)?)?;
    m.add_function(wrap_pyfunction!(scramble, m)?)?;
    m.add_function(wrap_pyfunction!(apply, m)?)?;
    m.add_function(wrap_pyfunction!(is_plausible, m)?)?;
    m.add_function(wrap_pyfunction!(solve, m)?)?;

    Ok(())
}
