//! blockfall: a falling-block puzzle game for the terminal.
//!
//! The engine (`core`) is a pure state machine: the host drives gravity via
//! `tick()` on a timer derived from `drop_interval_ms()`, forwards player
//! intents as commands, and renders from read access to the state. The
//! `input` and `term` modules are one such host, built on crossterm.

pub mod core;
pub mod input;
pub mod term;
pub mod types;
