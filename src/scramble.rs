// Random scrambles built only from legal moves.

use rand::seq::SliceRandom;
use rand::Rng;
use rand_pcg::Pcg64;
use tracing::debug;

use crate::executor::apply_moves;
use crate::spec::PuzzleSpec;
use crate::state::FaceletState;
use crate::tables::{MoveId, MoveTables};

/// Longest scramble accepted from configuration or callers.
pub const MAX_SCRAMBLE_LENGTH: usize = 10_000;

pub fn new_rng(seed: u64) -> Pcg64 {
    Pcg64::new((0xcafef00dd15ea5e5 + seed as u128).into(),
               0xa02bdbf7bb3c0a7ac28fa16a64abf96)
}

// Whether `candidate` may follow `history`: never the face just turned, and
// on puzzles with opposite faces never X Y X where Y is opposite X.
fn allowed(spec: &PuzzleSpec, tables: &MoveTables, history: &[MoveId], candidate: MoveId) -> bool {
    let face = tables.get(candidate).face;
    let prev = match history.last() {
        Some(&p) => tables.get(p).face,
        None => return true,
    };
    if prev == face {
        return false;
    }
    if history.len() >= 2 {
        let before = tables.get(history[history.len() - 2]).face;
        if before == face && spec.faces[face].opposite == Some(prev) {
            return false;
        }
    }
    true
}

/// Applies `length` random legal moves to `state`. The returned state is
/// reachable by construction; the move list replays it.
pub fn scramble<R: Rng>(state: &FaceletState,
                        spec: &PuzzleSpec,
                        tables: &MoveTables,
                        length: usize,
                        rng: &mut R) -> (FaceletState, Vec<MoveId>) {
    let all: Vec<MoveId> = tables.ids().collect();
    let mut moves: Vec<MoveId> = Vec::with_capacity(length.min(MAX_SCRAMBLE_LENGTH));

    while moves.len() < length {
        let candidates: Vec<MoveId> = all.iter().copied()
            .filter(|&m| allowed(spec, tables, &moves, m))
            .collect();
        let pool = if candidates.is_empty() { &all } else { &candidates };
        match pool.choose(rng) {
            Some(&m) => moves.push(m),
            None => break,
        }
    }

    debug!(puzzle = %spec.id, length = moves.len(), "scrambled");
    (apply_moves(state, &moves, tables), moves)
}
