// Applies moves to facelet states through the precomputed tables.

use crate::state::FaceletState;
use crate::tables::{MoveId, MoveTables};

/// Returns the state after `id`: the color on every facelet `f` moves to the
/// permutation's image of `f`. The input is left untouched.
pub fn apply_move(state: &FaceletState, id: MoveId, tables: &MoveTables) -> FaceletState {
    let permutation = tables.permutation(id);
    let colors = state.colors();
    FaceletState::from_raw((0..colors.len()).map(|f| colors[permutation.source(f)]).collect())
}

pub fn apply_moves(state: &FaceletState, moves: &[MoveId], tables: &MoveTables) -> FaceletState {
    moves.iter().fold(state.clone(), |s, &id| apply_move(&s, id, tables))
}
