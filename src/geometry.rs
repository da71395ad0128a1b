// Facelet grids for square and triangular faces.
//
// A face of grid size n holds n*n cells. Square cells are indexed row-major.
// Triangular cells are indexed row by row from the apex, row r holding 2r+1
// alternating up/down triangles. Every triangle also has lattice coordinates
// (a, b, c): its distance from the bottom, left and right sides, with
// a+b+c == n-1 for up triangles and n-2 for down triangles.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FaceShape {
    Square,
    Triangle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Top,
    Right,
    Bottom,
    Left,
}

const SQUARE_SIDES: [Side; 4] = [Side::Top, Side::Right, Side::Bottom, Side::Left];
const TRIANGLE_SIDES: [Side; 3] = [Side::Right, Side::Bottom, Side::Left];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct TriangleCell {
    a: usize,
    b: usize,
    c: usize,
    down: bool,
}

impl FaceShape {
    /// Sides in clockwise order as seen from outside the face.
    pub fn sides(&self) -> &'static [Side] {
        match self {
            FaceShape::Square => &SQUARE_SIDES,
            FaceShape::Triangle => &TRIANGLE_SIDES,
        }
    }

    /// Number of clockwise steps that make a full turn of the face.
    pub fn order(&self) -> usize {
        self.sides().len()
    }

    pub fn cells(&self, n: usize) -> usize {
        n * n
    }

    /// The cell that never leaves its position, if the grid has one.
    pub fn center(&self, n: usize) -> Option<usize> {
        match self {
            FaceShape::Square if n % 2 == 1 => Some((n / 2) * n + n / 2),
            _ => None,
        }
    }

    /// Where `cell` lands after one clockwise step of the face.
    pub fn rotate_cw(&self, n: usize, cell: usize) -> usize {
        match self {
            FaceShape::Square => {
                let (i, j) = (cell / n, cell % n);
                j * n + (n - 1 - i)
            }
            FaceShape::Triangle => {
                let t = triangle_cell(n, cell);
                triangle_index(n, TriangleCell { a: t.c, b: t.a, c: t.b, down: t.down })
            }
        }
    }

    // Distance of `cell` from `side`, counted in layers.
    fn distance(&self, n: usize, cell: usize, side: Side) -> usize {
        match self {
            FaceShape::Square => {
                let (row, col) = (cell / n, cell % n);
                match side {
                    Side::Top => row,
                    Side::Right => n - 1 - col,
                    Side::Bottom => n - 1 - row,
                    Side::Left => col,
                }
            }
            FaceShape::Triangle => {
                let t = triangle_cell(n, cell);
                match side {
                    Side::Bottom => t.a,
                    Side::Left => t.b,
                    Side::Right => t.c,
                    Side::Top => unreachable!("triangular faces have no top side"),
                }
            }
        }
    }

    /// The band of cells `depth` layers in from `side`, read clockwise around
    /// the face. Returns an empty strip if the face has no such side.
    pub fn strip(&self, n: usize, side: Side, depth: usize) -> Vec<usize> {
        let sides = self.sides();
        let pos = match sides.iter().position(|s| *s == side) {
            Some(p) => p,
            None => return Vec::new(),
        };
        let prev = sides[(pos + sides.len() - 1) % sides.len()];

        let mut keyed: Vec<(usize, usize)> = (0..self.cells(n))
            .filter(|&cell| self.distance(n, cell, side) == depth)
            .map(|cell| {
                let key = match self {
                    FaceShape::Square => self.distance(n, cell, prev),
                    FaceShape::Triangle => {
                        2 * self.distance(n, cell, prev) + triangle_cell(n, cell).down as usize
                    }
                };
                (key, cell)
            })
            .collect();

        keyed.sort_unstable();
        keyed.into_iter().map(|(_, cell)| cell).collect()
    }
}

fn triangle_cell(n: usize, cell: usize) -> TriangleCell {
    let mut r = 0;
    while (r + 1) * (r + 1) <= cell {
        r += 1;
    }
    let k = cell - r * r;
    let m = k / 2;

    if k % 2 == 0 {
        TriangleCell { a: n - 1 - r, b: m, c: r - m, down: false }
    } else {
        TriangleCell { a: n - 1 - r, b: m, c: r - 1 - m, down: true }
    }
}

fn triangle_index(n: usize, t: TriangleCell) -> usize {
    let r = n - 1 - t.a;
    r * r + 2 * t.b + t.down as usize
}
