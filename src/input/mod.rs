//! Input module - key mapping and held-key tracking for terminal hosts.

pub mod handler;

pub use handler::{should_quit, InputHandler};
