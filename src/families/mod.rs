// Puzzle families offered by the selector.

pub mod cube;
pub mod mirror;
pub mod pyraminx;

pub use cube::Cube;
pub use mirror::MirrorCube;
pub use pyraminx::Pyraminx;

use crate::spec::PuzzleSpec;

pub trait PuzzleFamily {
    /// Catalog id, e.g. `3x3` or `pyramid`.
    fn id(&self) -> String;

    // Builds the static geometry and legal move set of the puzzle.
    fn spec(&self) -> PuzzleSpec;
}

/// Every family in selector order.
pub fn catalog() -> Vec<Box<dyn PuzzleFamily + Send + Sync>> {
    vec![
        Box::new(Cube::new(2)),
        Box::new(Cube::new(3)),
        Box::new(Cube::new(4)),
        Box::new(Cube::new(5)),
        Box::new(Pyraminx::new()),
        Box::new(MirrorCube::new()),
    ]
}

#[cfg(test)]
mod test {
    use std::collections::HashSet;

    #[test]
    fn test_catalog_ids() {
        let ids: Vec<String> = super::catalog().iter().map(|f| f.id()).collect();
        assert_eq!(ids, vec!["2x2", "3x3", "4x4", "5x5", "pyramid", "mirror"]);
    }

    #[test]
    fn test_adjacency_is_symmetric() {
        // Whenever face A lists B as a neighbor, B lists A.
        for family in super::catalog() {
            let spec = family.spec();
            for (a, face) in spec.faces.iter().enumerate() {
                for link in face.neighbors.iter() {
                    assert!(spec.faces[link.face].neighbors.iter().any(|l| l.face == a),
                            "{}: {} -> {}", spec.id, face.letter, spec.faces[link.face].letter);
                }
            }
        }
    }

    #[test]
    fn test_moves_closed_under_inverse() {
        for family in super::catalog() {
            let spec = family.spec();
            let moves: HashSet<_> = spec.moves.iter().cloned().collect();
            assert_eq!(moves.len(), spec.moves.len());
            for m in spec.moves.iter() {
                assert!(moves.contains(&m.inverse()));
            }
        }
    }
}
