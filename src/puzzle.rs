// A puzzle spec bundled with its move tables and solved state.

use tracing::debug;

use crate::error::{EngineError, Result};
use crate::families::PuzzleFamily;
use crate::notation;
use crate::spec::PuzzleSpec;
use crate::state::FaceletState;
use crate::tables::{build_move_tables, MoveId, MoveTables};

#[derive(Debug, Clone)]
pub struct Puzzle {
    pub spec: PuzzleSpec,
    pub tables: MoveTables,
    pub solved: FaceletState,
}

impl Puzzle {
    pub fn new(spec: PuzzleSpec) -> Result<Puzzle> {
        let tables = build_move_tables(&spec)?;
        let solved = FaceletState::solved(&spec);
        debug!(puzzle = %spec.id, "puzzle ready");
        Ok(Puzzle { spec, tables, solved })
    }

    pub fn from_family(family: &dyn PuzzleFamily) -> Result<Puzzle> {
        Puzzle::new(family.spec())
    }

    pub fn id(&self) -> &str {
        &self.spec.id
    }

    /// Parses notation into legal move ids of this puzzle.
    pub fn parse_moves(&self, s: &str) -> Result<Vec<MoveId>> {
        notation::parse(&self.spec, s)?
            .iter()
            .map(|mv| {
                self.tables.id_of(mv).ok_or_else(|| {
                    EngineError::Notation(format!("{} is not a legal move of {}",
                                                  self.spec.notation(mv), self.spec.name))
                })
            })
            .collect()
    }

    pub fn render_moves(&self, moves: &[MoveId]) -> String {
        moves.iter()
            .map(|&id| self.spec.notation(self.tables.get(id)))
            .collect::<Vec<String>>()
            .join(" ")
    }

    pub fn is_goal(&self, state: &FaceletState) -> bool {
        *state == self.solved
    }
}
