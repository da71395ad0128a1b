// Static description of a puzzle family: faces, adjacency, palette, moves.

use std::fmt;

use crate::geometry::{FaceShape, Side};

pub type FaceId = usize;
pub type FaceletId = usize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Difficulty::Beginner => "Beginner",
            Difficulty::Intermediate => "Intermediate",
            Difficulty::Advanced => "Advanced",
            Difficulty::Expert => "Expert",
        };
        write!(f, "{}", s)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorSpec {
    pub name: String,
    pub hex: String,
}

impl ColorSpec {
    pub fn new(name: &str, hex: &str) -> ColorSpec {
        ColorSpec { name: name.to_string(), hex: hex.to_string() }
    }
}

/// One side of a face's ring: the neighbor `face` touches the turning face
/// along the neighbor's own `side`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeLink {
    pub face: FaceId,
    pub side: Side,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaceSpec {
    pub name: String,
    pub letter: char,
    pub color: usize,
    pub opposite: Option<FaceId>,
    /// Neighbors in clockwise order as seen from outside this face.
    pub neighbors: Vec<EdgeLink>,
}

/// A small corner piece turned on its own, named after its vertex.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TipSpec {
    pub letter: char,
    pub name: String,
    /// The face opposite the vertex; the tip turns around this face's axis.
    pub face: FaceId,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Turn {
    Clockwise,
    CounterClockwise,
    Half,
}

impl Turn {
    pub fn inverse(&self) -> Turn {
        match self {
            Turn::Clockwise => Turn::CounterClockwise,
            Turn::CounterClockwise => Turn::Clockwise,
            Turn::Half => Turn::Half,
        }
    }

    /// Number of clockwise steps this turn amounts to on a face of `order`.
    pub fn steps(&self, order: usize) -> usize {
        match self {
            Turn::Clockwise => 1,
            Turn::Half => 2,
            Turn::CounterClockwise => order - 1,
        }
    }

    fn suffix(&self) -> &'static str {
        match self {
            Turn::Clockwise => "",
            Turn::CounterClockwise => "'",
            Turn::Half => "2",
        }
    }
}

/// Half-open range of layers counted from the turning face (outermost = 0).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Layers {
    pub start: usize,
    pub end: usize,
}

impl Layers {
    pub const OUTER: Layers = Layers { start: 0, end: 1 };

    pub fn wide(count: usize) -> Layers {
        Layers { start: 0, end: count }
    }

    pub fn slice(depth: usize) -> Layers {
        Layers { start: depth, end: depth + 1 }
    }

    pub fn contains(&self, depth: usize) -> bool {
        self.start <= depth && depth < self.end
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub face: FaceId,
    pub turn: Turn,
    pub layers: Layers,
}

impl Move {
    pub fn new(face: FaceId, turn: Turn, layers: Layers) -> Move {
        Move { face, turn, layers }
    }

    pub fn outer(face: FaceId, turn: Turn) -> Move {
        Move { face, turn, layers: Layers::OUTER }
    }

    pub fn inverse(&self) -> Move {
        Move { turn: self.turn.inverse(), ..*self }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PuzzleSpec {
    pub id: String,
    pub name: String,
    pub description: String,
    pub difficulty: Difficulty,
    pub shape: FaceShape,
    pub grid_size: usize,
    pub faces: Vec<FaceSpec>,
    pub palette: Vec<ColorSpec>,
    pub tips: Vec<TipSpec>,
    pub moves: Vec<Move>,
}

impl PuzzleSpec {
    pub fn facelets_per_face(&self) -> usize {
        self.shape.cells(self.grid_size)
    }

    pub fn facelet_count(&self) -> usize {
        self.faces.len() * self.facelets_per_face()
    }

    pub fn facelet(&self, face: FaceId, index: usize) -> FaceletId {
        face * self.facelets_per_face() + index
    }

    /// Face and in-face position of a facelet.
    pub fn locate(&self, facelet: FaceletId) -> (FaceId, usize) {
        (facelet / self.facelets_per_face(), facelet % self.facelets_per_face())
    }

    /// Key used by external collaborators, e.g. `F4`.
    pub fn facelet_name(&self, facelet: FaceletId) -> String {
        let (face, index) = self.locate(facelet);
        format!("{}{}", self.faces[face].letter, index)
    }

    pub fn face_by_letter(&self, letter: char) -> Option<FaceId> {
        self.faces.iter().position(|f| f.letter == letter)
    }

    pub fn tip_by_letter(&self, letter: char) -> Option<&TipSpec> {
        self.tips.iter().find(|t| t.letter == letter)
    }

    pub fn color_by_label(&self, label: &str) -> Option<usize> {
        let label = label.trim();
        if let Some(i) = self.palette.iter().position(|c| c.name.eq_ignore_ascii_case(label)) {
            return Some(i);
        }

        // A hex shared by several labels (mirror cube) identifies none of them.
        let mut by_hex = self.palette.iter().enumerate().filter(|(_, c)| c.hex.eq_ignore_ascii_case(label));
        match (by_hex.next(), by_hex.next()) {
            (Some((i, _)), None) => Some(i),
            _ => None,
        }
    }

    /// Clockwise steps in a full turn of any face.
    pub fn turn_order(&self) -> usize {
        self.shape.order()
    }

    /// Exclusive upper bound on the layers a move may turn. Square faces stop
    /// short of the opposite face, triangular faces reach the opposite tip.
    pub fn layer_limit(&self) -> usize {
        match self.shape {
            FaceShape::Square => (self.grid_size - 1).max(1),
            FaceShape::Triangle => self.grid_size,
        }
    }

    /// Scramble length the selector uses for this puzzle.
    pub fn scramble_length(&self) -> usize {
        (self.grid_size * 5).min(25)
    }

    fn tip_for(&self, mv: &Move) -> Option<&TipSpec> {
        if mv.layers == Layers::slice(self.grid_size - 1) && self.shape == FaceShape::Triangle {
            self.tips.iter().find(|t| t.face == mv.face)
        } else {
            None
        }
    }

    /// Standard notation for a move, e.g. `R'`, `Rw2`, `2R`, `u'`.
    pub fn notation(&self, mv: &Move) -> String {
        if let Some(tip) = self.tip_for(mv) {
            // Tips are named from their vertex, which looks at the face from behind.
            return format!("{}{}", tip.letter, mv.turn.inverse().suffix());
        }

        let letter = self.faces[mv.face].letter;
        let Layers { start, end } = mv.layers;
        let base = if start == 0 && end == 1 {
            letter.to_string()
        } else if start == 0 && end == 2 {
            format!("{}w", letter)
        } else if start == 0 {
            format!("{}{}w", end, letter)
        } else if end == start + 1 {
            format!("{}{}", start + 1, letter)
        } else {
            format!("{}-{}{}w", start + 1, end, letter)
        };

        format!("{}{}", base, mv.turn.suffix())
    }

    /// Human readable description, e.g. "Turn right face clockwise 90°".
    pub fn describe(&self, mv: &Move) -> String {
        let quarter = 360 / self.turn_order();

        if let Some(tip) = self.tip_for(mv) {
            let turn = mv.turn.inverse();
            return match turn {
                Turn::Clockwise => format!("Turn {} tip clockwise {}°", tip.name, quarter),
                Turn::CounterClockwise => format!("Turn {} tip counter-clockwise {}°", tip.name, quarter),
                Turn::Half => format!("Turn {} tip {}°", tip.name, 2 * quarter),
            };
        }

        let face = self.faces[mv.face].name.to_lowercase();
        let Layers { start, end } = mv.layers;
        let part = if start == 0 && end == 1 {
            format!("{} face", face)
        } else if start == 0 {
            format!("{} {} layers", face, end)
        } else {
            format!("{} inner slice {}", face, start + 1)
        };

        match mv.turn {
            Turn::Clockwise => format!("Turn {} clockwise {}°", part, quarter),
            Turn::CounterClockwise => format!("Turn {} counter-clockwise {}°", part, quarter),
            Turn::Half => format!("Turn {} {}°", part, 2 * quarter),
        }
    }
}

#[cfg(test)]
mod test {
    use super::{Layers, Move, Turn};
    use crate::families::{Cube, PuzzleFamily, Pyraminx};

    #[test]
    fn test_notation() {
        let spec = Cube::new(4).spec();
        let r = spec.face_by_letter('R').unwrap();
        assert_eq!(spec.notation(&Move::outer(r, Turn::Clockwise)), "R");
        assert_eq!(spec.notation(&Move::outer(r, Turn::CounterClockwise)), "R'");
        assert_eq!(spec.notation(&Move::new(r, Turn::Half, Layers::wide(2))), "Rw2");
        assert_eq!(spec.notation(&Move::new(r, Turn::Clockwise, Layers::slice(1))), "2R");
    }

    #[test]
    fn test_describe() {
        let spec = Cube::new(3).spec();
        let r = spec.face_by_letter('R').unwrap();
        assert_eq!(spec.describe(&Move::outer(r, Turn::Clockwise)), "Turn right face clockwise 90°");
        assert_eq!(spec.describe(&Move::outer(r, Turn::Half)), "Turn right face 180°");

        let pyraminx = Pyraminx::new().spec();
        let bottom = pyraminx.face_by_letter('B').unwrap();
        let tip = Move::new(bottom, Turn::CounterClockwise, Layers::slice(2));
        assert_eq!(pyraminx.notation(&tip), "u");
        assert_eq!(pyraminx.describe(&tip), "Turn top tip clockwise 120°");
    }

    #[test]
    fn test_labels() {
        let spec = Cube::new(3).spec();
        assert_eq!(spec.color_by_label("#FF6B35"), Some(0));
        assert_eq!(spec.color_by_label("white"), Some(5));
        assert_eq!(spec.color_by_label("purple"), None);
        assert_eq!(spec.facelet_name(spec.facelet(4, 8)), "U8");
    }
}
