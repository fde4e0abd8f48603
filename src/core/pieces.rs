//! Pieces module - tetromino base shapes and matrix rotation
//!
//! Each piece instance carries its current rotation as a 2-D boolean matrix
//! (rows x columns). Rotation rewrites the matrix; there is no rotation-state
//! table and no wall kicks.

use arrayvec::ArrayVec;

use crate::core::rng::PieceSource;
use crate::types::PieceKind;

/// A piece's occupancy matrix for its current rotation.
///
/// At most 4x4: the I piece is 1x4 in its base rotation and 4x1 rotated.
pub type PieceMatrix = ArrayVec<ArrayVec<bool, 4>, 4>;

/// Build a matrix from row slices.
fn matrix(rows: &[&[bool]]) -> PieceMatrix {
    rows.iter()
        .map(|row| row.iter().copied().collect())
        .collect()
}

/// The canonical base rotation for a piece kind.
pub fn base_matrix(kind: PieceKind) -> PieceMatrix {
    const X: bool = true;
    const O: bool = false;
    match kind {
        PieceKind::I => matrix(&[&[X, X, X, X]]),
        PieceKind::J => matrix(&[&[X, O, O], &[X, X, X]]),
        PieceKind::L => matrix(&[&[O, O, X], &[X, X, X]]),
        PieceKind::O => matrix(&[&[X, X], &[X, X]]),
        PieceKind::S => matrix(&[&[O, X, X], &[X, X, O]]),
        PieceKind::T => matrix(&[&[O, X, O], &[X, X, X]]),
        PieceKind::Z => matrix(&[&[X, X, O], &[O, X, X]]),
    }
}

/// Rotate a matrix 90 degrees clockwise (transpose, then reverse each row).
///
/// Pure: the input is left untouched. Validity at the piece's position is the
/// caller's concern. O and I produce geometrically equivalent shapes under
/// this algorithm; that is accepted behavior, not a special case.
pub fn rotate(m: &PieceMatrix) -> PieceMatrix {
    let rows = m.len();
    let cols = m[0].len();

    let mut out = PieceMatrix::new();
    for col in 0..cols {
        let mut out_row = ArrayVec::new();
        for row in (0..rows).rev() {
            out_row.push(m[row][col]);
        }
        debug_assert_eq!(out_row.len(), rows);
        out.push(out_row);
    }
    out
}

/// A piece without a board position: its kind and current rotation matrix.
///
/// Position is assigned at spawn time by the game state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Piece {
    pub kind: PieceKind,
    pub matrix: PieceMatrix,
}

impl Piece {
    /// A piece in its base rotation.
    pub fn new(kind: PieceKind) -> Self {
        Self {
            kind,
            matrix: base_matrix(kind),
        }
    }

    /// Draw a piece from the source, uniformly random for the shipping source.
    pub fn draw(source: &mut dyn PieceSource) -> Self {
        Self::new(source.next_kind())
    }

    /// The piece rotated 90 degrees clockwise. Does not mutate `self`.
    pub fn rotated(&self) -> Self {
        Self {
            kind: self.kind,
            matrix: rotate(&self.matrix),
        }
    }

    /// Number of occupied cells (always 4 for a tetromino).
    pub fn cell_count(&self) -> usize {
        self.matrix
            .iter()
            .map(|row| row.iter().filter(|&&c| c).count())
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_kind_has_four_cells() {
        for kind in PieceKind::ALL {
            assert_eq!(Piece::new(kind).cell_count(), 4, "{:?}", kind);
        }
    }

    #[test]
    fn rotate_is_clockwise() {
        // J base:        rotated:
        // X . .          X X
        // X X X          X .
        //                X .
        let j = base_matrix(PieceKind::J);
        let r = rotate(&j);
        assert_eq!(r.len(), 3);
        assert_eq!(r[0].as_slice(), &[true, true]);
        assert_eq!(r[1].as_slice(), &[true, false]);
        assert_eq!(r[2].as_slice(), &[true, false]);
    }

    #[test]
    fn rotate_transposes_dimensions() {
        let i = base_matrix(PieceKind::I);
        assert_eq!(i.len(), 1);
        let r = rotate(&i);
        assert_eq!(r.len(), 4);
        assert_eq!(r[0].len(), 1);
    }

    #[test]
    fn o_piece_rotation_is_identity() {
        let o = base_matrix(PieceKind::O);
        assert_eq!(rotate(&o), o);
    }

    #[test]
    fn four_rotations_round_trip() {
        for kind in PieceKind::ALL {
            let base = Piece::new(kind);
            let back = base.rotated().rotated().rotated().rotated();
            assert_eq!(back.matrix, base.matrix, "{:?}", kind);
        }
    }
}
