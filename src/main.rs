//! Terminal blockfall runner.
//!
//! The loop polls input with a deadline derived from the engine's
//! `drop_interval_ms`, so the gravity timer is re-armed with the freshly
//! computed interval after every tick: level and fast-drop changes apply to
//! the next tick only, and quitting simply drops the loop-local deadline.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use blockfall::core::GameState;
use blockfall::input::{should_quit, InputHandler};
use blockfall::term::Screen;
use blockfall::types::GameAction;

fn main() -> Result<()> {
    let mut screen = Screen::new();
    screen.enter()?;

    let result = run(&mut screen);

    // Always try to restore terminal state.
    let _ = screen.exit();
    result
}

fn run(screen: &mut Screen) -> Result<()> {
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos())
        .unwrap_or(1);
    let mut game = GameState::new(seed);
    let mut input = InputHandler::new();

    let mut next_tick = Instant::now() + interval(&game);

    loop {
        screen.draw(&game)?;

        let timeout = next_tick.saturating_duration_since(Instant::now());
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                match key.kind {
                    KeyEventKind::Press | KeyEventKind::Repeat => {
                        if should_quit(key) {
                            return Ok(());
                        }
                        if let Some(action) = input.key_press(key.code) {
                            apply(&mut game, action);
                        }
                    }
                    KeyEventKind::Release => input.key_release(key.code),
                }
            }
        }

        game.set_fast_drop(input.fast_drop_active());

        if Instant::now() >= next_tick {
            game.tick();
            next_tick = Instant::now() + interval(&game);
        }
    }
}

fn interval(game: &GameState) -> Duration {
    Duration::from_millis(game.drop_interval_ms() as u64)
}

fn apply(game: &mut GameState, action: GameAction) {
    // Blocked moves and rotations are normal outcomes; nothing to report.
    match action {
        GameAction::MoveLeft => {
            game.move_left();
        }
        GameAction::MoveRight => {
            game.move_right();
        }
        GameAction::Rotate => {
            game.rotate();
        }
        GameAction::HardDrop => {
            game.hard_drop();
        }
        GameAction::TogglePause => game.toggle_pause(),
        GameAction::Restart => game.restart(),
    }
}
