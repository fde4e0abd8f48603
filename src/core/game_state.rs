//! Game state module - the tick/command state machine
//!
//! Owns all game state and exposes the command surface. Every invalid intent
//! (blocked move, blocked rotation) is a silent no-op, not an error; the only
//! terminal condition is game over, after which nothing but restart changes
//! the board, current piece, score, or level.

use std::fmt;

use arrayvec::ArrayVec;

use crate::core::board::Board;
use crate::core::pieces::Piece;
use crate::core::rng::{PieceSource, UniformSource};
use crate::types::{
    BASE_DROP_MS, FAST_DROP_MS, LEVEL_UP_SCORE, LINE_CLEAR_SCORE, MIN_DROP_MS, SPAWN_X,
    SPEED_STEP_MS,
};

/// The falling piece: a piece plus the board position of its matrix's
/// top-left cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivePiece {
    pub piece: Piece,
    pub x: i8,
    pub y: i8,
}

impl ActivePiece {
    /// A freshly spawned piece: horizontally centered, top row.
    pub fn at_spawn(piece: Piece) -> Self {
        Self {
            piece,
            x: SPAWN_X,
            y: 0,
        }
    }

    /// Absolute board coordinates of the piece's occupied cells.
    pub fn cells(&self) -> ArrayVec<(i8, i8), 4> {
        let mut out = ArrayVec::new();
        for (row, cells) in self.piece.matrix.iter().enumerate() {
            for (col, &occupied) in cells.iter().enumerate() {
                if occupied {
                    out.push((self.x + col as i8, self.y + row as i8));
                }
            }
        }
        out
    }
}

/// Complete game state and command surface.
pub struct GameState {
    board: Board,
    current: ActivePiece,
    next: Piece,
    score: u32,
    level: u32,
    game_over: bool,
    paused: bool,
    fast_drop: bool,
    source: Box<dyn PieceSource>,
}

impl GameState {
    /// A new game using the shipping uniform randomizer with the given seed.
    pub fn new(seed: u32) -> Self {
        Self::with_source(Box::new(UniformSource::new(seed)))
    }

    /// A new game drawing pieces from an arbitrary source.
    pub fn with_source(mut source: Box<dyn PieceSource>) -> Self {
        let current = ActivePiece::at_spawn(Piece::draw(source.as_mut()));
        let next = Piece::draw(source.as_mut());
        Self {
            board: Board::new(),
            current,
            next,
            score: 0,
            level: 1,
            game_over: false,
            paused: false,
            fast_drop: false,
            source,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current(&self) -> &ActivePiece {
        &self.current
    }

    pub fn next(&self) -> &Piece {
        &self.next
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn fast_drop(&self) -> bool {
        self.fast_drop
    }

    /// Interval until the next gravity tick, derived from level and the
    /// fast-descent flag. The host re-arms its timer from this after every
    /// tick, so changes take effect on the next tick only.
    pub fn drop_interval_ms(&self) -> u32 {
        if self.fast_drop {
            FAST_DROP_MS
        } else {
            BASE_DROP_MS
                .saturating_sub((self.level - 1) * SPEED_STEP_MS)
                .max(MIN_DROP_MS)
        }
    }

    /// Gravity step. Moves the current piece down one row, or locks it when
    /// it cannot descend: merge, clear lines, update score and level, then
    /// either end the game (top row occupied) or promote the next piece.
    ///
    /// Returns false when paused or the game is over.
    pub fn tick(&mut self) -> bool {
        if self.paused || self.game_over {
            return false;
        }

        if self
            .board
            .can_place(&self.current.piece.matrix, self.current.x, self.current.y + 1)
        {
            self.current.y += 1;
            return true;
        }

        self.lock_current();
        true
    }

    fn lock_current(&mut self) {
        let ActivePiece { x, y, .. } = self.current;
        let matrix = self.current.piece.matrix.clone();
        self.board.write_piece(&matrix, x, y, self.current.piece.kind);

        let cleared = self.board.clear_full_rows().len() as u32;
        if cleared > 0 {
            // Multiplier uses the level in effect before this clear.
            self.score += cleared * LINE_CLEAR_SCORE * self.level;
            self.level = self.score / LEVEL_UP_SCORE + 1;
        }

        if self.board.top_row_occupied() {
            // Board stays as merged; no new piece spawns.
            self.game_over = true;
            return;
        }

        let next = std::mem::replace(&mut self.next, Piece::draw(self.source.as_mut()));
        self.current = ActivePiece::at_spawn(next);
    }

    /// Move the current piece one column left. Silent no-op when blocked.
    pub fn move_left(&mut self) -> bool {
        self.try_shift(-1)
    }

    /// Move the current piece one column right. Silent no-op when blocked.
    pub fn move_right(&mut self) -> bool {
        self.try_shift(1)
    }

    fn try_shift(&mut self, dx: i8) -> bool {
        if self.paused || self.game_over {
            return false;
        }
        if self
            .board
            .can_place(&self.current.piece.matrix, self.current.x + dx, self.current.y)
        {
            self.current.x += dx;
            return true;
        }
        false
    }

    /// Rotate the current piece 90 degrees clockwise in place. No wall kicks:
    /// the rotation fails outright near walls or settled cells.
    pub fn rotate(&mut self) -> bool {
        if self.paused || self.game_over {
            return false;
        }
        let rotated = self.current.piece.rotated();
        if self
            .board
            .can_place(&rotated.matrix, self.current.x, self.current.y)
        {
            self.current.piece = rotated;
            return true;
        }
        false
    }

    /// Drop the current piece to the lowest valid row. Does not merge; the
    /// next tick performs the lock.
    pub fn hard_drop(&mut self) -> bool {
        if self.paused || self.game_over {
            return false;
        }
        let mut moved = false;
        while self
            .board
            .can_place(&self.current.piece.matrix, self.current.x, self.current.y + 1)
        {
            self.current.y += 1;
            moved = true;
        }
        moved
    }

    /// Set the held fast-descent intent. Affects only the tick interval.
    pub fn set_fast_drop(&mut self, active: bool) {
        self.fast_drop = active;
    }

    /// Toggle pause. While paused, tick and all movement commands are no-ops.
    pub fn toggle_pause(&mut self) {
        if self.game_over {
            return;
        }
        self.paused = !self.paused;
    }

    /// Discard the current game and start fresh, unconditionally. The piece
    /// source carries over so a seeded session stays one deterministic
    /// stream.
    pub fn restart(&mut self) {
        let source = std::mem::replace(&mut self.source, Box::new(UniformSource::new(1)));
        *self = Self::with_source(source);
    }
}

impl fmt::Debug for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GameState")
            .field("current", &self.current)
            .field("next", &self.next.kind)
            .field("score", &self.score)
            .field("level", &self.level)
            .field("game_over", &self.game_over)
            .field("paused", &self.paused)
            .field("fast_drop", &self.fast_drop)
            .finish_non_exhaustive()
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}
