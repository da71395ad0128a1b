// Precomputed facelet permutations for every legal move of a puzzle.

use std::collections::HashMap;

use tracing::debug;

use crate::error::{EngineError, Result};
use crate::spec::{FaceId, FaceletId, Layers, Move, PuzzleSpec, Turn};

pub type MoveId = usize;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovePermutation {
    image: Vec<FaceletId>,
    source: Vec<FaceletId>,
}

impl MovePermutation {
    pub fn identity(n: usize) -> MovePermutation {
        MovePermutation { image: (0..n).collect(), source: (0..n).collect() }
    }

    /// Builds a permutation from the image of every facelet, failing if two
    /// facelets share an image.
    pub fn from_image(image: Vec<FaceletId>) -> Result<MovePermutation> {
        let n = image.len();
        let mut source = vec![n; n];

        for (f, &to) in image.iter().enumerate() {
            if to >= n || source[to] != n {
                return Err(EngineError::Configuration(
                    format!("facelet {} is not the image of exactly one facelet", to)));
            }
            source[to] = f;
        }

        Ok(MovePermutation { image, source })
    }

    /// Where the color on `f` moves to.
    pub fn image(&self, f: FaceletId) -> FaceletId {
        self.image[f]
    }

    /// Which facelet's color lands on `f`.
    pub fn source(&self, f: FaceletId) -> FaceletId {
        self.source[f]
    }

    pub fn len(&self) -> usize {
        self.image.len()
    }

    pub fn is_empty(&self) -> bool {
        self.image.is_empty()
    }

    /// Number of facelets the permutation moves.
    pub fn support(&self) -> usize {
        self.image.iter().enumerate().filter(|(f, to)| f != *to).count()
    }

    /// `self` followed by `next`.
    pub fn then(&self, next: &MovePermutation) -> Result<MovePermutation> {
        MovePermutation::from_image(self.image.iter().map(|&to| next.image[to]).collect())
    }

    pub fn inverse(&self) -> MovePermutation {
        MovePermutation { image: self.source.clone(), source: self.image.clone() }
    }
}

#[derive(Debug, Clone)]
pub struct MoveTables {
    moves: Vec<Move>,
    permutations: Vec<MovePermutation>,
    inverses: Vec<MoveId>,
    index: HashMap<Move, MoveId>,
}

impl MoveTables {
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    pub fn ids(&self) -> std::ops::Range<MoveId> {
        0..self.moves.len()
    }

    pub fn get(&self, id: MoveId) -> &Move {
        &self.moves[id]
    }

    pub fn permutation(&self, id: MoveId) -> &MovePermutation {
        &self.permutations[id]
    }

    pub fn inverse(&self, id: MoveId) -> MoveId {
        self.inverses[id]
    }

    pub fn id_of(&self, mv: &Move) -> Option<MoveId> {
        self.index.get(mv).copied()
    }

    /// Largest number of facelets a single move displaces.
    pub fn max_support(&self) -> usize {
        self.permutations.iter().map(|p| p.support()).max().unwrap_or(0)
    }
}

// One clockwise step of `layers` around `face`: the face grid rotates when the
// outer layer takes part, and each layer's ring of neighbor strips shifts one
// neighbor clockwise.
fn clockwise_step(spec: &PuzzleSpec, face: FaceId, layers: Layers) -> Result<MovePermutation> {
    let n = spec.grid_size;
    let count = spec.facelet_count();
    let mut image: Vec<Option<FaceletId>> = vec![None; count];

    let mut assign = |from: FaceletId, to: FaceletId| -> Result<()> {
        if image[from].is_some() {
            return Err(EngineError::Configuration(
                format!("facelet {} is moved twice by face {}", spec.facelet_name(from), spec.faces[face].letter)));
        }
        image[from] = Some(to);
        Ok(())
    };

    if layers.contains(0) {
        for cell in 0..spec.facelets_per_face() {
            assign(spec.facelet(face, cell), spec.facelet(face, spec.shape.rotate_cw(n, cell)))?;
        }
    }

    let neighbors = &spec.faces[face].neighbors;
    for depth in layers.start..layers.end {
        let mut ring = Vec::with_capacity(neighbors.len());

        for link in neighbors.iter() {
            if link.face >= spec.faces.len() || link.face == face {
                return Err(EngineError::Configuration(
                    format!("face {} has an invalid neighbor {}", spec.faces[face].letter, link.face)));
            }
            let strip: Vec<FaceletId> = spec.shape
                .strip(n, link.side, depth)
                .into_iter()
                .map(|cell| spec.facelet(link.face, cell))
                .collect();
            if strip.is_empty() {
                return Err(EngineError::Configuration(
                    format!("face {} has no {:?} strip at depth {}", spec.faces[link.face].letter, link.side, depth)));
            }
            ring.push(strip);
        }

        for k in 0..ring.len() {
            let (from, to) = (&ring[k], &ring[(k + 1) % ring.len()]);
            if from.len() != to.len() {
                return Err(EngineError::Configuration(
                    format!("strips around face {} differ in length", spec.faces[face].letter)));
            }
            for i in 0..from.len() {
                assign(from[i], to[i])?;
            }
        }
    }

    MovePermutation::from_image(image.iter().enumerate().map(|(f, to)| to.unwrap_or(f)).collect())
}

/// Builds the permutation of every legal move of `spec`. Fails if the
/// adjacency declaration yields a permutation that is not a bijection, or if
/// the move set is not closed under inverses.
pub fn build_move_tables(spec: &PuzzleSpec) -> Result<MoveTables> {
    let order = spec.turn_order();
    let mut steps: HashMap<(FaceId, Layers), MovePermutation> = HashMap::new();
    let mut permutations = Vec::with_capacity(spec.moves.len());
    let mut index = HashMap::new();

    for (id, mv) in spec.moves.iter().enumerate() {
        if mv.face >= spec.faces.len() {
            return Err(EngineError::Configuration(format!("move {} turns an unknown face", id)));
        }
        if mv.layers.start >= mv.layers.end || mv.layers.end > spec.layer_limit() {
            return Err(EngineError::Configuration(
                format!("move {} turns layers {}..{} of a puzzle with {} turnable layers",
                        spec.notation(mv), mv.layers.start, mv.layers.end, spec.layer_limit())));
        }
        if mv.turn == Turn::Half && order % 2 != 0 {
            return Err(EngineError::Configuration(
                format!("move {} is a half turn of an order-{} face", spec.notation(mv), order)));
        }
        if index.insert(*mv, id).is_some() {
            return Err(EngineError::Configuration(format!("move {} is declared twice", spec.notation(mv))));
        }

        let step = match steps.get(&(mv.face, mv.layers)) {
            Some(step) => step.clone(),
            None => {
                let step = clockwise_step(spec, mv.face, mv.layers)?;
                steps.insert((mv.face, mv.layers), step.clone());
                step
            }
        };

        let mut permutation = MovePermutation::identity(spec.facelet_count());
        for _ in 0..mv.turn.steps(order) {
            permutation = permutation.then(&step)?;
        }
        permutations.push(permutation);
    }

    let mut inverses = Vec::with_capacity(spec.moves.len());
    for mv in spec.moves.iter() {
        match index.get(&mv.inverse()) {
            Some(&inv) => inverses.push(inv),
            None => {
                return Err(EngineError::Configuration(
                    format!("move {} has no inverse in the move set", spec.notation(mv))));
            }
        }
    }

    debug!(puzzle = %spec.id, moves = spec.moves.len(), facelets = spec.facelet_count(), "built move tables");

    Ok(MoveTables { moves: spec.moves.clone(), permutations, inverses, index })
}
