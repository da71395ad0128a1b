// Necessary-condition checks on externally supplied states.
//
// A state passing these checks may still be unreachable: a single pair of
// swapped stickers keeps every count intact. Full group membership is not
// decided here.

use std::collections::HashSet;

use crate::error::{EngineError, Result};
use crate::spec::PuzzleSpec;
use crate::state::FaceletState;

/// Reports the first reason `state` cannot have come from the solved state.
pub fn check_plausible(state: &FaceletState, spec: &PuzzleSpec) -> Result<()> {
    if state.len() != spec.facelet_count() {
        return Err(EngineError::InvalidState(
            format!("expected {} facelets, got {}", spec.facelet_count(), state.len())));
    }

    let per_face = spec.facelets_per_face();
    let mut counts = vec![0usize; spec.palette.len()];
    for f in 0..state.len() {
        let c = state.color_at(f);
        if c >= counts.len() {
            return Err(EngineError::InvalidState(format!("facelet {} has unknown color {}", spec.facelet_name(f), c)));
        }
        counts[c] += 1;
    }

    for face in spec.faces.iter() {
        if counts[face.color] != per_face {
            return Err(EngineError::InvalidState(
                format!("{} appears on {} facelets instead of {}",
                        spec.palette[face.color].name, counts[face.color], per_face)));
        }
    }

    if let Some(center) = spec.shape.center(spec.grid_size) {
        let mut seen = HashSet::new();
        for face in 0..spec.faces.len() {
            let c = state.color_at(spec.facelet(face, center));
            if !seen.insert(c) {
                return Err(EngineError::InvalidState(
                    format!("center color {} repeats on face {}", spec.palette[c].name, spec.faces[face].letter)));
            }
        }
    }

    Ok(())
}

pub fn is_plausible(state: &FaceletState, spec: &PuzzleSpec) -> bool {
    check_plausible(state, spec).is_ok()
}
