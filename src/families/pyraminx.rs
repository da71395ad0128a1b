// Pyraminx, modelled by face-layer turns and tip turns.
//
// Vertices: top (U), front-left (L), front-right (R), back (B). Each face is
// viewed from outside with its apex on top: Front (U,R,L), Left (U,L,B),
// Right (U,B,R) and Bottom, whose apex is the back vertex (B,L,R).

use crate::geometry::{FaceShape, Side};
use crate::spec::{ColorSpec, Difficulty, EdgeLink, FaceSpec, Layers, Move, PuzzleSpec, TipSpec, Turn};

use super::PuzzleFamily;

pub const FRONT: usize = 0;
pub const LEFT: usize = 1;
pub const RIGHT: usize = 2;
pub const BOTTOM: usize = 3;

const SIZE: usize = 3;

const FACE_NAMES: [&str; 4] = ["Front", "Left", "Right", "Bottom"];
const FACE_LETTERS: [char; 4] = ['F', 'L', 'R', 'B'];

const NEIGHBORS: [[(usize, Side); 3]; 4] = [
    [(RIGHT, Side::Left), (BOTTOM, Side::Bottom), (LEFT, Side::Right)],
    [(FRONT, Side::Left), (BOTTOM, Side::Right), (RIGHT, Side::Right)],
    [(LEFT, Side::Left), (BOTTOM, Side::Left), (FRONT, Side::Right)],
    [(LEFT, Side::Bottom), (FRONT, Side::Bottom), (RIGHT, Side::Bottom)],
];

// Tip letter, vertex name, face opposite the vertex.
const TIPS: [(char, &str, usize); 4] = [
    ('u', "top", BOTTOM),
    ('l', "left", RIGHT),
    ('r', "right", LEFT),
    ('b', "back", FRONT),
];

pub struct Pyraminx;

impl Pyraminx {
    pub fn new() -> Pyraminx {
        Pyraminx
    }
}

impl Default for Pyraminx {
    fn default() -> Self {
        Pyraminx::new()
    }
}

impl PuzzleFamily for Pyraminx {
    fn id(&self) -> String {
        String::from("pyramid")
    }

    fn spec(&self) -> PuzzleSpec {
        let faces = (0..4)
            .map(|f| FaceSpec {
                name: FACE_NAMES[f].to_string(),
                letter: FACE_LETTERS[f],
                color: f,
                opposite: None,
                neighbors: NEIGHBORS[f].iter().map(|&(face, side)| EdgeLink { face, side }).collect(),
            })
            .collect();

        let tips: Vec<TipSpec> = TIPS
            .iter()
            .map(|&(letter, name, face)| TipSpec { letter, name: name.to_string(), face })
            .collect();

        let mut moves = Vec::new();
        for face in 0..4 {
            moves.push(Move::outer(face, Turn::Clockwise));
            moves.push(Move::outer(face, Turn::CounterClockwise));
        }
        for tip in tips.iter() {
            moves.push(Move::new(tip.face, Turn::Clockwise, Layers::slice(SIZE - 1)));
            moves.push(Move::new(tip.face, Turn::CounterClockwise, Layers::slice(SIZE - 1)));
        }

        PuzzleSpec {
            id: self.id(),
            name: "Pyraminx".to_string(),
            description: "Triangular puzzle with unique solving mechanics".to_string(),
            difficulty: Difficulty::Intermediate,
            shape: FaceShape::Triangle,
            grid_size: SIZE,
            faces,
            palette: vec![
                ColorSpec::new("orange", "#ff6b35"),
                ColorSpec::new("green", "#00b894"),
                ColorSpec::new("blue", "#0984e3"),
                ColorSpec::new("yellow", "#fdcb6e"),
            ],
            tips,
            moves,
        }
    }
}
