//! Piece catalog - shape matrices and rotation
//!
//! The catalog is a fixed ordered set of 7 shapes, each tied to one
//! [`PieceKind`] (and through it, one color). Shapes are rectangular boolean
//! matrices; rotation builds a new matrix (transpose then reverse each row)
//! rather than looking up precomputed orientations. There are no wall kicks:
//! a rotation that would collide is simply rejected by the placement engine.

use arrayvec::ArrayVec;

use crate::core::rng::SimpleRng;
use crate::types::PieceKind;

/// Largest shape dimension in the catalog (the I piece spans 4 cells)
pub const MAX_SHAPE_DIM: usize = 4;

type ShapeRow = ArrayVec<bool, MAX_SHAPE_DIM>;

/// An immutable rectangular boolean matrix describing a piece's filled cells.
///
/// Local coordinates: `(x, y)` with `(0, 0)` the top-left cell. Rotation
/// produces a fresh `Shape`; an existing matrix is never patched in place.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Shape {
    rows: ArrayVec<ShapeRow, MAX_SHAPE_DIM>,
}

impl Shape {
    fn from_template(rows: &[&[u8]]) -> Self {
        let mut out: ArrayVec<ShapeRow, MAX_SHAPE_DIM> = ArrayVec::new();
        for row in rows {
            let mut cells = ShapeRow::new();
            for &cell in *row {
                cells.push(cell != 0);
            }
            out.push(cells);
        }
        Self { rows: out }
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, |row| row.len())
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Whether the local cell `(x, y)` is filled (false outside the matrix)
    pub fn is_filled(&self, x: usize, y: usize) -> bool {
        self.rows
            .get(y)
            .and_then(|row| row.get(x))
            .copied()
            .unwrap_or(false)
    }

    /// Iterate the filled local cells as `(x, y)` offsets
    pub fn filled(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        self.rows.iter().enumerate().flat_map(|(y, row)| {
            row.iter()
                .enumerate()
                .filter(|&(_, &filled)| filled)
                .map(move |(x, _)| (x as i8, y as i8))
        })
    }

    /// Rotate clockwise: an RxC matrix becomes CxR with
    /// `result[i][j] = self[R-1-j][i]`.
    pub fn rotate_cw(&self) -> Self {
        let r = self.height();
        let c = self.width();
        let mut rows: ArrayVec<ShapeRow, MAX_SHAPE_DIM> = ArrayVec::new();
        for i in 0..c {
            let mut row = ShapeRow::new();
            for j in 0..r {
                row.push(self.rows[r - 1 - j][i]);
            }
            rows.push(row);
        }
        Self { rows }
    }
}

/// Spawn-orientation matrix for each catalog entry.
///
/// Order and cell layout mirror the fixed external contract; the associated
/// colors live on [`PieceKind`].
fn template(kind: PieceKind) -> &'static [&'static [u8]] {
    match kind {
        PieceKind::I => &[&[1, 1, 1, 1]],
        PieceKind::T => &[&[1, 1, 1], &[0, 1, 0]],
        PieceKind::L => &[&[1, 1, 1], &[1, 0, 0]],
        PieceKind::J => &[&[1, 1, 1], &[0, 0, 1]],
        PieceKind::O => &[&[1, 1], &[1, 1]],
        PieceKind::Z => &[&[1, 1, 0], &[0, 1, 1]],
        PieceKind::S => &[&[0, 1, 1], &[1, 1, 0]],
    }
}

/// Build the spawn-orientation shape for a piece kind
pub fn spawn_shape(kind: PieceKind) -> Shape {
    Shape::from_template(template(kind))
}

/// Uniform random pick among the 7 catalog entries (one draw per spawn)
pub fn pick_random(rng: &mut SimpleRng) -> PieceKind {
    PieceKind::ALL[rng.next_range(PieceKind::ALL.len() as u32) as usize]
}
