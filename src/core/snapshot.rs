//! Read-only state export for hosts.
//!
//! The host renders from a snapshot taken after each transition instead of
//! holding mutable references into the engine.

use crate::core::game_state::GameState;
use crate::core::pieces::PieceMatrix;
use crate::types::{Cell, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub matrix: PieceMatrix,
    pub x: i8,
    pub y: i8,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    pub board: [[Cell; BOARD_WIDTH]; BOARD_HEIGHT],
    pub current: ActiveSnapshot,
    pub next_kind: PieceKind,
    pub next_matrix: PieceMatrix,
    pub score: u32,
    pub level: u32,
    pub paused: bool,
    pub game_over: bool,
    pub fast_drop: bool,
    pub drop_interval_ms: u32,
}

impl GameSnapshot {
    pub fn playable(&self) -> bool {
        !self.game_over && !self.paused
    }
}

impl GameState {
    pub fn snapshot(&self) -> GameSnapshot {
        let mut board = [[None; BOARD_WIDTH]; BOARD_HEIGHT];
        for (y, row) in board.iter_mut().enumerate() {
            for (x, cell) in row.iter_mut().enumerate() {
                *cell = self.board().get(x as i8, y as i8).unwrap_or(None);
            }
        }

        let current = self.current();
        GameSnapshot {
            board,
            current: ActiveSnapshot {
                kind: current.piece.kind,
                matrix: current.piece.matrix.clone(),
                x: current.x,
                y: current.y,
            },
            next_kind: self.next().kind,
            next_matrix: self.next().matrix.clone(),
            score: self.score(),
            level: self.level(),
            paused: self.paused(),
            game_over: self.game_over(),
            fast_drop: self.fast_drop(),
            drop_interval_ms: self.drop_interval_ms(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_reflects_state() {
        let state = GameState::new(9);
        let snap = state.snapshot();

        assert_eq!(snap.score, 0);
        assert_eq!(snap.level, 1);
        assert!(snap.playable());
        assert_eq!(snap.current.kind, state.current().piece.kind);
        assert_eq!(snap.drop_interval_ms, state.drop_interval_ms());
        assert!(snap.board.iter().flatten().all(|cell| cell.is_none()));
    }
}
