// Parsing of move sequences written in standard twisty puzzle notation.

use pest::iterators::Pair;
use pest::Parser;

use crate::error::{EngineError, Result};
use crate::geometry::FaceShape;
use crate::spec::{Layers, Move, PuzzleSpec, Turn};

#[derive(Parser)]
#[grammar = "grammars/notation.pest"]
struct NotationParser;

/// Parses a whitespace or comma separated move sequence and resolves every
/// token against `spec`. Resolution only checks that the puzzle can physically
/// turn the named layers; membership in the legal move set is checked by the
/// caller holding the move tables.
pub fn parse(spec: &PuzzleSpec, s: &str) -> Result<Vec<Move>> {
    let root = NotationParser::parse(Rule::sequence, s)
        .map_err(|e| EngineError::Notation(e.to_string()))?
        .next()
        .ok_or_else(|| EngineError::Notation(format!("empty parse of {:?}", s)))?;

    root.into_inner()
        .filter(|pair| pair.as_rule() == Rule::token)
        .map(|pair| resolve(spec, pair))
        .collect()
}

fn resolve(spec: &PuzzleSpec, token: Pair<Rule>) -> Result<Move> {
    let text = token.as_str().to_string();
    let mut depth: Option<usize> = None;
    let mut letter = ' ';
    let mut wide = false;
    let mut turn = Turn::Clockwise;

    for part in token.into_inner() {
        match part.as_rule() {
            Rule::depth => {
                let d = part.as_str().parse::<usize>()
                    .map_err(|_| EngineError::Notation(format!("layer count too large in {}", text)))?;
                depth = Some(d);
            }
            Rule::letter => letter = part.as_str().chars().next().unwrap_or(' '),
            Rule::wide => wide = true,
            Rule::amount => {
                turn = match part.as_str() {
                    "'" => Turn::CounterClockwise,
                    _ => Turn::Half,
                }
            }
            _ => unreachable!(),
        }
    }

    if turn == Turn::Half && spec.turn_order() % 2 != 0 {
        return Err(EngineError::Notation(format!("{} has no half turns: {}", spec.name, text)));
    }

    if letter.is_ascii_lowercase() && !spec.tips.is_empty() {
        let tip = spec.tip_by_letter(letter)
            .ok_or_else(|| EngineError::Notation(format!("unknown tip in {}", text)))?;
        if depth.is_some() || wide {
            return Err(EngineError::Notation(format!("tip turns take no layer count: {}", text)));
        }
        // A tip is seen from its vertex, i.e. from behind the face it turns around.
        return Ok(Move::new(tip.face, turn.inverse(), Layers::slice(spec.grid_size - 1)));
    }

    let face = spec.face_by_letter(letter.to_ascii_uppercase())
        .ok_or_else(|| EngineError::Notation(format!("unknown face in {}", text)))?;
    let wide = wide || letter.is_ascii_lowercase();

    let layers = match (depth, wide) {
        (Some(0), _) => return Err(EngineError::Notation(format!("zero layers in {}", text))),
        (Some(d), true) => Layers::wide(d),
        (None, true) => Layers::wide(2),
        (Some(d), false) => Layers::slice(d - 1),
        (None, false) => Layers::OUTER,
    };

    if layers.end > spec.layer_limit() || (spec.shape == FaceShape::Triangle && layers != Layers::OUTER) {
        return Err(EngineError::Notation(format!("{} cannot turn the layers of {}", spec.name, text)));
    }

    Ok(Move::new(face, turn, layers))
}

/// Renders a move sequence back to notation.
pub fn render(spec: &PuzzleSpec, moves: &[Move]) -> String {
    moves.iter().map(|m| spec.notation(m)).collect::<Vec<String>>().join(" ")
}

#[cfg(test)]
mod test {
    use super::{parse, render};
    use crate::error::EngineError;
    use crate::families::{Cube, PuzzleFamily, Pyraminx};
    use crate::spec::{Layers, Move, Turn};

    #[test]
    fn test_parse_cube() {
        let spec = Cube::new(5).spec();
        let r = spec.face_by_letter('R').unwrap();
        let u = spec.face_by_letter('U').unwrap();

        assert_eq!(parse(&spec, "R U' R2").unwrap(),
                   vec![Move::outer(r, Turn::Clockwise),
                        Move::outer(u, Turn::CounterClockwise),
                        Move::outer(r, Turn::Half)]);
        assert_eq!(parse(&spec, "Rw r2' 3Rw 2R").unwrap(),
                   vec![Move::new(r, Turn::Clockwise, Layers::wide(2)),
                        Move::new(r, Turn::Half, Layers::wide(2)),
                        Move::new(r, Turn::Clockwise, Layers::wide(3)),
                        Move::new(r, Turn::Clockwise, Layers::slice(1))]);
        assert_eq!(parse(&spec, "R,U").unwrap().len(), 2);
        assert!(parse(&spec, "").unwrap().is_empty());
    }

    #[test]
    fn test_parse_errors() {
        let spec = Cube::new(3).spec();
        assert!(matches!(parse(&spec, "X"), Err(EngineError::Notation(_))));
        assert!(matches!(parse(&spec, "R3"), Err(EngineError::Notation(_))));
        assert!(matches!(parse(&spec, "3R"), Err(EngineError::Notation(_))));
        assert!(matches!(parse(&spec, "0R"), Err(EngineError::Notation(_))));
        assert!(matches!(parse(&spec, "R ?"), Err(EngineError::Notation(_))));

        let pyraminx = Pyraminx::new().spec();
        assert!(matches!(parse(&pyraminx, "R2"), Err(EngineError::Notation(_))));
        assert!(matches!(parse(&pyraminx, "Rw"), Err(EngineError::Notation(_))));
        assert!(matches!(parse(&pyraminx, "x"), Err(EngineError::Notation(_))));
    }

    #[test]
    fn test_tips_round_trip() {
        let spec = Pyraminx::new().spec();
        let moves = parse(&spec, "u l' R B' r b").unwrap();
        assert_eq!(moves[0], Move::new(spec.face_by_letter('B').unwrap(), Turn::CounterClockwise, Layers::slice(2)));
        assert_eq!(render(&spec, &moves), "u l' R B' r b");

        let cube = Cube::new(4).spec();
        assert_eq!(render(&cube, &parse(&cube, "Rw2 2U' F").unwrap()), "Rw2 2U' F");
    }
}
