use std::sync::{Arc, OnceLock};

pub mod config;
pub mod error;
pub mod executor;
pub mod families;
pub mod geometry;
pub mod notation;
pub mod puzzle;
pub mod scramble;
pub mod session;
pub mod solution;
pub mod solver;
pub mod spec;
pub mod state;
pub mod tables;
pub mod validate;

#[cfg(feature = "python")]
mod python;

pub use crate::config::EngineConfig;
pub use crate::error::{EngineError, Result};
pub use crate::puzzle::Puzzle;
pub use crate::session::Session;
pub use crate::state::FaceletState;

extern crate pest;
#[macro_use]
extern crate pest_derive;

// Built once on first use; every caller shares the same immutable tables.
static CATALOG: OnceLock<Result<Vec<Arc<Puzzle>>>> = OnceLock::new();

fn registry() -> Result<&'static [Arc<Puzzle>]> {
    let built = CATALOG.get_or_init(|| {
        families::catalog()
            .iter()
            .map(|family| Puzzle::from_family(&**family).map(Arc::new))
            .collect()
    });

    match built {
        Ok(puzzles) => Ok(puzzles),
        Err(e) => Err(e.clone()),
    }
}

/// Every catalog puzzle, in selector order.
pub fn catalog() -> Result<Vec<Arc<Puzzle>>> {
    Ok(registry()?.to_vec())
}

/// Looks up a catalog puzzle by id, e.g. `3x3` or `pyramid`.
pub fn puzzle(id: &str) -> Result<Arc<Puzzle>> {
    registry()?
        .iter()
        .find(|p| p.id() == id)
        .cloned()
        .ok_or_else(|| EngineError::UnknownPuzzle(id.to_string()))
}

#[cfg(test)]
mod test {
    use std::sync::Arc;

    use crate::error::EngineError;

    #[test]
    fn test_registry() {
        let ids: Vec<String> = super::catalog().unwrap().iter().map(|p| p.id().to_string()).collect();
        assert_eq!(ids, vec!["2x2", "3x3", "4x4", "5x5", "pyramid", "mirror"]);

        let a = super::puzzle("pyramid").unwrap();
        let b = super::puzzle("pyramid").unwrap();
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(super::puzzle("megaminx").unwrap_err(), EngineError::UnknownPuzzle("megaminx".to_string()));
    }
}
