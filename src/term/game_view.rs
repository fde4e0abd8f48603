//! Pure presentation helpers: piece palette and preview layout.
//!
//! No I/O here, so everything is unit-testable; `screen` does the drawing.

use crossterm::style::Color;

use crate::core::PieceMatrix;
use crate::types::PieceKind;

/// Color identity per piece kind.
pub fn piece_color(kind: PieceKind) -> Color {
    match kind {
        PieceKind::I => Color::Rgb {
            r: 24,
            g: 144,
            b: 255,
        },
        PieceKind::J => Color::Rgb {
            r: 19,
            g: 194,
            b: 194,
        },
        PieceKind::L => Color::Rgb {
            r: 250,
            g: 140,
            b: 22,
        },
        PieceKind::O => Color::Rgb {
            r: 250,
            g: 219,
            b: 20,
        },
        PieceKind::S => Color::Rgb {
            r: 82,
            g: 196,
            b: 26,
        },
        PieceKind::T => Color::Rgb {
            r: 114,
            g: 46,
            b: 209,
        },
        PieceKind::Z => Color::Rgb {
            r: 245,
            g: 34,
            b: 45,
        },
    }
}

/// Pad a piece matrix into a fixed 4x4 grid for the next-piece preview box.
pub fn next_preview(matrix: &PieceMatrix) -> [[bool; 4]; 4] {
    let mut grid = [[false; 4]; 4];
    for (y, row) in matrix.iter().enumerate() {
        for (x, &occupied) in row.iter().enumerate() {
            grid[y][x] = occupied;
        }
    }
    grid
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::base_matrix;

    #[test]
    fn preview_pads_to_4x4() {
        let grid = next_preview(&base_matrix(PieceKind::I));

        assert_eq!(grid[0], [true, true, true, true]);
        assert_eq!(grid[1], [false; 4]);
        assert_eq!(grid[3], [false; 4]);
    }

    #[test]
    fn every_kind_has_a_distinct_color() {
        let colors: Vec<Color> = PieceKind::ALL.iter().map(|&k| piece_color(k)).collect();
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
