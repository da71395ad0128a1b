// N×N×N cubes.

use crate::geometry::{FaceShape, Side};
use crate::spec::{ColorSpec, Difficulty, EdgeLink, FaceSpec, Layers, Move, PuzzleSpec, Turn};

use super::PuzzleFamily;

pub const FRONT: usize = 0;
pub const BACK: usize = 1;
pub const RIGHT: usize = 2;
pub const LEFT: usize = 3;
pub const UP: usize = 4;
pub const DOWN: usize = 5;

const FACE_NAMES: [&str; 6] = ["Front", "Back", "Right", "Left", "Up", "Down"];
const FACE_LETTERS: [char; 6] = ['F', 'B', 'R', 'L', 'U', 'D'];
const OPPOSITES: [usize; 6] = [BACK, FRONT, LEFT, RIGHT, DOWN, UP];

// Each face is viewed from outside with Up on top for the four side faces,
// Back on top for Up, and Front on top for Down.
const NEIGHBORS: [[(usize, Side); 4]; 6] = [
    [(UP, Side::Bottom), (RIGHT, Side::Left), (DOWN, Side::Top), (LEFT, Side::Right)],
    [(UP, Side::Top), (LEFT, Side::Left), (DOWN, Side::Bottom), (RIGHT, Side::Right)],
    [(UP, Side::Right), (BACK, Side::Left), (DOWN, Side::Right), (FRONT, Side::Right)],
    [(UP, Side::Left), (FRONT, Side::Left), (DOWN, Side::Left), (BACK, Side::Right)],
    [(BACK, Side::Top), (RIGHT, Side::Top), (FRONT, Side::Top), (LEFT, Side::Top)],
    [(FRONT, Side::Bottom), (RIGHT, Side::Bottom), (BACK, Side::Bottom), (LEFT, Side::Bottom)],
];

const TURNS: [Turn; 3] = [Turn::Clockwise, Turn::CounterClockwise, Turn::Half];

pub struct Cube {
    size: usize,
}

impl Cube {
    pub fn new(size: usize) -> Cube {
        Cube { size }
    }

    fn faces() -> Vec<FaceSpec> {
        (0..6)
            .map(|f| FaceSpec {
                name: FACE_NAMES[f].to_string(),
                letter: FACE_LETTERS[f],
                color: f,
                opposite: Some(OPPOSITES[f]),
                neighbors: NEIGHBORS[f].iter().map(|&(face, side)| EdgeLink { face, side }).collect(),
            })
            .collect()
    }

    /// Outer turns, plus wide turns and inner slices from size 4 up.
    fn moves(size: usize) -> Vec<Move> {
        let mut layers = vec![Layers::OUTER];

        if size >= 4 {
            for count in 2..=size / 2 {
                layers.push(Layers::wide(count));
            }
            for depth in 1..=(size - 1) / 2 {
                layers.push(Layers::slice(depth));
            }
        }

        let mut moves = Vec::new();
        for face in 0..6 {
            for l in layers.iter() {
                for turn in TURNS.iter() {
                    moves.push(Move::new(face, *turn, *l));
                }
            }
        }
        moves
    }
}

impl PuzzleFamily for Cube {
    fn id(&self) -> String {
        format!("{}x{}", self.size, self.size)
    }

    fn spec(&self) -> PuzzleSpec {
        let (name, description, difficulty) = match self.size {
            2 => ("2×2 Pocket Cube", "Perfect for beginners - fewer pieces, faster solves", Difficulty::Beginner),
            3 => ("3×3 Classic Cube", "The original and most popular Rubiks cube", Difficulty::Intermediate),
            4 => ("4×4 Revenge Cube", "More complex with additional center pieces", Difficulty::Advanced),
            5 => ("5×5 Professor Cube", "The ultimate challenge for cube masters", Difficulty::Expert),
            _ => ("Cube", "N×N×N cube", Difficulty::Expert),
        };

        PuzzleSpec {
            id: self.id(),
            name: name.to_string(),
            description: description.to_string(),
            difficulty,
            shape: FaceShape::Square,
            grid_size: self.size,
            faces: Cube::faces(),
            palette: vec![
                ColorSpec::new("orange", "#ff6b35"),
                ColorSpec::new("red", "#d63031"),
                ColorSpec::new("green", "#00b894"),
                ColorSpec::new("blue", "#0984e3"),
                ColorSpec::new("yellow", "#fdcb6e"),
                ColorSpec::new("white", "#ffffff"),
            ],
            tips: Vec::new(),
            moves: Cube::moves(self.size),
        }
    }
}
