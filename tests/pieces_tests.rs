//! Pieces tests - base shapes and matrix rotation

use blockfall::core::{base_matrix, rotate, Piece};
use blockfall::types::PieceKind;

fn occupied(piece: &Piece) -> usize {
    piece
        .matrix
        .iter()
        .map(|row| row.iter().filter(|&&c| c).count())
        .sum()
}

#[test]
fn test_base_shapes() {
    let i = base_matrix(PieceKind::I);
    assert_eq!(i.len(), 1);
    assert_eq!(i[0].as_slice(), &[true, true, true, true]);

    let o = base_matrix(PieceKind::O);
    assert_eq!(o.len(), 2);
    assert_eq!(o[0].as_slice(), &[true, true]);
    assert_eq!(o[1].as_slice(), &[true, true]);

    let t = base_matrix(PieceKind::T);
    assert_eq!(t[0].as_slice(), &[false, true, false]);
    assert_eq!(t[1].as_slice(), &[true, true, true]);

    let s = base_matrix(PieceKind::S);
    assert_eq!(s[0].as_slice(), &[false, true, true]);
    assert_eq!(s[1].as_slice(), &[true, true, false]);

    let z = base_matrix(PieceKind::Z);
    assert_eq!(z[0].as_slice(), &[true, true, false]);
    assert_eq!(z[1].as_slice(), &[false, true, true]);
}

#[test]
fn test_all_pieces_have_four_cells_in_every_rotation() {
    for kind in PieceKind::ALL {
        let mut piece = Piece::new(kind);
        for _ in 0..4 {
            assert_eq!(occupied(&piece), 4, "{:?}", kind);
            piece = piece.rotated();
        }
    }
}

#[test]
fn test_rotation_round_trip() {
    for kind in PieceKind::ALL {
        let base = Piece::new(kind);
        let back = base.rotated().rotated().rotated().rotated();
        assert_eq!(back, base, "{:?}", kind);
    }
}

#[test]
fn test_rotated_does_not_mutate_original() {
    let base = Piece::new(PieceKind::L);
    let copy = base.clone();

    let _rotated = base.rotated();
    assert_eq!(base, copy);
}

#[test]
fn test_i_rotation_swaps_orientation() {
    let horizontal = base_matrix(PieceKind::I);
    let vertical = rotate(&horizontal);

    assert_eq!(vertical.len(), 4);
    assert!(vertical.iter().all(|row| row.as_slice() == [true]));

    // Rotating again restores the horizontal bar; for the I this is
    // geometrically equivalent to the start.
    assert_eq!(rotate(&vertical), horizontal);
}

#[test]
fn test_o_rotation_is_geometrically_identical() {
    let o = base_matrix(PieceKind::O);
    assert_eq!(rotate(&o), o);
}

#[test]
fn test_j_rotation_steps() {
    // J base:       cw:        cw again:
    // X . .         X X        X X X
    // X X X         X .        . . X
    //               X .
    let j = base_matrix(PieceKind::J);

    let once = rotate(&j);
    assert_eq!(once[0].as_slice(), &[true, true]);
    assert_eq!(once[1].as_slice(), &[true, false]);
    assert_eq!(once[2].as_slice(), &[true, false]);

    let twice = rotate(&once);
    assert_eq!(twice[0].as_slice(), &[true, true, true]);
    assert_eq!(twice[1].as_slice(), &[false, false, true]);
}
