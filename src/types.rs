//! Core types shared across the application
//! This module contains pure data types with no external dependencies

/// Board dimensions
pub const BOARD_WIDTH: usize = 10;
pub const BOARD_HEIGHT: usize = 20;

/// Spawn column for a freshly promoted piece (horizontally centered).
pub const SPAWN_X: i8 = (BOARD_WIDTH / 2 - 1) as i8;

/// Descent timing (in milliseconds)
pub const BASE_DROP_MS: u32 = 800;
pub const SPEED_STEP_MS: u32 = 50;
pub const FAST_DROP_MS: u32 = 50;
pub const MIN_DROP_MS: u32 = 100;

/// Scoring
pub const LINE_CLEAR_SCORE: u32 = 100;
pub const LEVEL_UP_SCORE: u32 = 1000;

/// Tetromino piece kinds
///
/// The kind doubles as the color identity written into settled board cells;
/// the host maps kinds to actual colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    J,
    L,
    O,
    S,
    T,
    Z,
}

impl PieceKind {
    /// All seven kinds, in a fixed order for uniform selection.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::J,
        PieceKind::L,
        PieceKind::O,
        PieceKind::S,
        PieceKind::T,
        PieceKind::Z,
    ];

    pub fn as_char(&self) -> char {
        match self {
            PieceKind::I => 'I',
            PieceKind::J => 'J',
            PieceKind::L => 'L',
            PieceKind::O => 'O',
            PieceKind::S => 'S',
            PieceKind::T => 'T',
            PieceKind::Z => 'Z',
        }
    }
}

/// Cell on the board (None = empty, Some = settled piece of that kind)
pub type Cell = Option<PieceKind>;

/// Player-intent commands
///
/// Fast descent is not an action: it is a held flag the host sets via
/// `GameState::set_fast_drop`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    MoveLeft,
    MoveRight,
    Rotate,
    HardDrop,
    TogglePause,
    Restart,
}
