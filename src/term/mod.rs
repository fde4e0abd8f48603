//! Terminal rendering for the game host.

pub mod game_view;
pub mod screen;

pub use screen::Screen;
