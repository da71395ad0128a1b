// Facelet colors of one puzzle instance.

use std::collections::{HashMap, HashSet};

use tracing::warn;

use crate::error::{EngineError, Result};
use crate::spec::{FaceletId, PuzzleSpec};

/// Palette index of every facelet, in facelet-id order.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FaceletState {
    colors: Vec<u8>,
}

impl FaceletState {
    /// Every face painted with its own base color.
    pub fn solved(spec: &PuzzleSpec) -> FaceletState {
        let per_face = spec.facelets_per_face();
        let mut colors = Vec::with_capacity(spec.facelet_count());
        for face in spec.faces.iter() {
            colors.extend(std::iter::repeat(face.color as u8).take(per_face));
        }
        FaceletState { colors }
    }

    pub fn from_colors(spec: &PuzzleSpec, colors: Vec<u8>) -> Result<FaceletState> {
        if colors.len() != spec.facelet_count() {
            return Err(EngineError::InvalidState(
                format!("expected {} facelets, got {}", spec.facelet_count(), colors.len())));
        }
        if let Some((f, c)) = colors.iter().enumerate().find(|(_, c)| **c as usize >= spec.palette.len()) {
            return Err(EngineError::InvalidState(
                format!("facelet {} has unknown color {}", spec.facelet_name(f), c)));
        }
        Ok(FaceletState { colors })
    }

    pub(crate) fn from_raw(colors: Vec<u8>) -> FaceletState {
        FaceletState { colors }
    }

    pub fn colors(&self) -> &[u8] {
        &self.colors
    }

    pub fn color_at(&self, f: FaceletId) -> usize {
        self.colors[f] as usize
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// True when every face shows a single color.
    pub fn is_solved(&self, spec: &PuzzleSpec) -> bool {
        let per_face = spec.facelets_per_face();
        self.colors.chunks(per_face).all(|face| face.iter().all(|c| *c == face[0]))
    }

    /// Parses the text form `F000000000fB111111111b...`: per face its letter,
    /// one palette digit per facelet, then the lowercase letter.
    pub fn parse(spec: &PuzzleSpec, s: &str) -> Result<FaceletState> {
        let per_face = spec.facelets_per_face();
        let mut chars = s.chars().filter(|c| !c.is_whitespace());
        let mut colors = Vec::with_capacity(spec.facelet_count());

        for face in spec.faces.iter() {
            match chars.next() {
                Some(c) if c == face.letter => {}
                other => {
                    return Err(EngineError::InvalidState(
                        format!("expected face {} to begin, found {:?}", face.letter, other)));
                }
            }
            for i in 0..per_face {
                let digit = chars.next().and_then(|c| c.to_digit(10)).ok_or_else(|| {
                    EngineError::InvalidState(format!("missing color for facelet {}{}", face.letter, i))
                })?;
                colors.push(digit as u8);
            }
            let end = face.letter.to_ascii_lowercase();
            if chars.next() != Some(end) {
                return Err(EngineError::InvalidState(format!("face {} is not closed by {}", face.letter, end)));
            }
        }

        if let Some(c) = chars.next() {
            return Err(EngineError::InvalidState(format!("trailing input starting at {:?}", c)));
        }

        FaceletState::from_colors(spec, colors)
    }

    pub fn render(&self, spec: &PuzzleSpec) -> String {
        let per_face = spec.facelets_per_face();
        let mut s = String::with_capacity(self.colors.len() + 2 * spec.faces.len());
        for (face, chunk) in spec.faces.iter().zip(self.colors.chunks(per_face)) {
            s.push(face.letter);
            for c in chunk {
                s.push_str(&c.to_string());
            }
            s.push(face.letter.to_ascii_lowercase());
        }
        s
    }

    /// Ingests a mapping from facelet names (`F0`, `U8`) to palette names or
    /// hex values. Every facelet must be present exactly once.
    pub fn from_map(spec: &PuzzleSpec, map: &HashMap<String, String>) -> Result<FaceletState> {
        let mut colors = Vec::with_capacity(spec.facelet_count());
        let mut seen = HashSet::new();

        for f in 0..spec.facelet_count() {
            let name = spec.facelet_name(f);
            let label = match map.get(&name) {
                Some(label) => label,
                None => {
                    warn!(puzzle = %spec.id, facelet = %name, "rejected state with missing facelet");
                    return Err(EngineError::InvalidState(format!("facelet {} is missing", name)));
                }
            };
            let color = spec.color_by_label(label).ok_or_else(|| {
                warn!(puzzle = %spec.id, facelet = %name, color = %label, "rejected state with unknown color");
                EngineError::InvalidState(format!("facelet {} has unknown color {}", name, label))
            })?;
            colors.push(color as u8);
            seen.insert(name);
        }

        if let Some(extra) = map.keys().find(|k| !seen.contains(*k)) {
            return Err(EngineError::InvalidState(format!("{} is not a facelet of {}", extra, spec.id)));
        }

        Ok(FaceletState { colors })
    }

    /// Facelet names mapped to palette hex values, the form renderers consume.
    pub fn to_map(&self, spec: &PuzzleSpec) -> HashMap<String, String> {
        self.colors
            .iter()
            .enumerate()
            .map(|(f, c)| (spec.facelet_name(f), spec.palette[*c as usize].hex.clone()))
            .collect()
    }
}
