//! Key mapping and press-and-hold fast-drop tracking.
//!
//! The engine only knows a boolean fast-descent flag; this handler turns raw
//! key events into that flag plus discrete commands. Terminals frequently
//! deliver no key-release events, so a held Down key is modeled as "pressed
//! recently": auto-repeat refreshes the timestamp, and a timeout releases the
//! flag once repeats stop.

use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::types::GameAction;

// Long enough to bridge the gap between terminal auto-repeat events, short
// enough that the piece stops fast-dropping promptly after the key is let go.
const DEFAULT_RELEASE_TIMEOUT_MS: u64 = 150;

/// Tracks the held fast-drop key and maps key codes to commands.
#[derive(Debug, Clone)]
pub struct InputHandler {
    fast_drop_held: bool,
    last_down_press: Instant,
    release_timeout: Duration,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::with_release_timeout_ms(DEFAULT_RELEASE_TIMEOUT_MS)
    }

    pub fn with_release_timeout_ms(timeout_ms: u64) -> Self {
        Self {
            fast_drop_held: false,
            last_down_press: Instant::now(),
            release_timeout: Duration::from_millis(timeout_ms),
        }
    }

    /// Map a key press (or auto-repeat) to a command. The Down key returns
    /// no command: it only refreshes the held fast-drop state.
    pub fn key_press(&mut self, code: KeyCode) -> Option<GameAction> {
        match code {
            KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(GameAction::MoveLeft),
            KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => {
                Some(GameAction::MoveRight)
            }
            KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Some(GameAction::Rotate),
            KeyCode::Char(' ') => Some(GameAction::HardDrop),
            KeyCode::Char('p') | KeyCode::Char('P') => Some(GameAction::TogglePause),
            KeyCode::Char('r') | KeyCode::Char('R') => Some(GameAction::Restart),
            KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => {
                self.fast_drop_held = true;
                self.last_down_press = Instant::now();
                None
            }
            _ => None,
        }
    }

    /// Handle a key release, for terminals that do emit them.
    pub fn key_release(&mut self, code: KeyCode) {
        if matches!(
            code,
            KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S')
        ) {
            self.fast_drop_held = false;
        }
    }

    /// Whether the fast-descent intent is currently held. Applies the
    /// auto-release timeout for terminals without release events.
    pub fn fast_drop_active(&mut self) -> bool {
        if self.fast_drop_held && self.last_down_press.elapsed() > self.release_timeout {
            self.fast_drop_held = false;
        }
        self.fast_drop_held
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

/// Quit keys: q, Esc, or Ctrl-C.
pub fn should_quit(key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => true,
        KeyCode::Char('c') | KeyCode::Char('C') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_mapping() {
        let mut ih = InputHandler::new();

        assert_eq!(ih.key_press(KeyCode::Left), Some(GameAction::MoveLeft));
        assert_eq!(ih.key_press(KeyCode::Char('d')), Some(GameAction::MoveRight));
        assert_eq!(ih.key_press(KeyCode::Up), Some(GameAction::Rotate));
        assert_eq!(ih.key_press(KeyCode::Char(' ')), Some(GameAction::HardDrop));
        assert_eq!(ih.key_press(KeyCode::Char('p')), Some(GameAction::TogglePause));
        assert_eq!(ih.key_press(KeyCode::Char('r')), Some(GameAction::Restart));
        assert_eq!(ih.key_press(KeyCode::Char('x')), None);
    }

    #[test]
    fn test_down_press_holds_fast_drop() {
        let mut ih = InputHandler::new();
        assert!(!ih.fast_drop_active());

        assert_eq!(ih.key_press(KeyCode::Down), None);
        assert!(ih.fast_drop_active());
    }

    #[test]
    fn test_release_clears_fast_drop() {
        let mut ih = InputHandler::new();
        ih.key_press(KeyCode::Down);
        assert!(ih.fast_drop_active());

        ih.key_release(KeyCode::Down);
        assert!(!ih.fast_drop_active());
    }

    #[test]
    fn test_auto_release_after_timeout_without_release_events() {
        let mut ih = InputHandler::with_release_timeout_ms(50);
        ih.key_press(KeyCode::Down);

        // Simulate repeats stopping: move the last press into the past.
        ih.last_down_press = Instant::now() - Duration::from_millis(51);
        assert!(!ih.fast_drop_active());
    }

    #[test]
    fn test_auto_repeat_refreshes_hold() {
        let mut ih = InputHandler::with_release_timeout_ms(50);
        ih.key_press(KeyCode::Down);
        ih.last_down_press = Instant::now() - Duration::from_millis(40);

        // A repeat press arrives before the timeout: still held.
        ih.key_press(KeyCode::Down);
        assert!(ih.fast_drop_active());
    }

    #[test]
    fn test_should_quit() {
        use crossterm::event::KeyEvent;

        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('q'),
            KeyModifiers::NONE
        )));
        assert!(should_quit(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE)));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::NONE
        )));
    }
}
