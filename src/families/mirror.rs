// Mirror cube: a 3×3 whose pieces differ in shape rather than color.

use crate::spec::{ColorSpec, Difficulty, PuzzleSpec};

use super::{Cube, PuzzleFamily};

const SILVER: &str = "#c0c0c0";

pub struct MirrorCube;

impl MirrorCube {
    pub fn new() -> MirrorCube {
        MirrorCube
    }
}

impl Default for MirrorCube {
    fn default() -> Self {
        MirrorCube::new()
    }
}

impl PuzzleFamily for MirrorCube {
    fn id(&self) -> String {
        String::from("mirror")
    }

    fn spec(&self) -> PuzzleSpec {
        // Each label stands for the thickness of the layer a sticker faces.
        let palette = ["front-layer", "back-layer", "right-layer", "left-layer", "up-layer", "down-layer"]
            .iter()
            .map(|name| ColorSpec::new(name, SILVER))
            .collect();

        PuzzleSpec {
            id: self.id(),
            name: "Mirror Cube".to_string(),
            description: "Shape-shifting cube solved by form, not color".to_string(),
            difficulty: Difficulty::Advanced,
            palette,
            ..Cube::new(3).spec()
        }
    }
}
