//! Screen: raw-mode terminal lifecycle and per-frame drawing.
//!
//! The playfield is a small fixed region, so every frame is a full redraw of
//! queued crossterm commands flushed once; no diffing is needed at this size.

use std::io::{self, Write};

use anyhow::Result;
use crossterm::{
    cursor,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    terminal, QueueableCommand,
};

use crate::core::GameState;
use crate::term::game_view::{next_preview, piece_color};
use crate::types::{BOARD_HEIGHT, BOARD_WIDTH};

/// Terminal column where the side panel starts (board is 2 columns per cell
/// plus the frame).
const PANEL_X: u16 = (BOARD_WIDTH as u16) * 2 + 4;

pub struct Screen {
    stdout: io::Stdout,
}

impl Screen {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.stdout.queue(terminal::EnterAlternateScreen)?;
        self.stdout.queue(cursor::Hide)?;
        self.stdout.flush()?;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.stdout.queue(ResetColor)?;
        self.stdout.queue(SetAttribute(Attribute::Reset))?;
        self.stdout.queue(cursor::Show)?;
        self.stdout.queue(terminal::LeaveAlternateScreen)?;
        self.stdout.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Render the full game state: board with the current piece overlaid,
    /// next-piece preview, score/level, and status overlays.
    pub fn draw(&mut self, state: &GameState) -> Result<()> {
        self.stdout
            .queue(terminal::Clear(terminal::ClearType::All))?;

        self.draw_frame()?;
        self.draw_cells(state)?;
        self.draw_panel(state)?;

        self.stdout.queue(ResetColor)?;
        self.stdout.flush()?;
        Ok(())
    }

    fn draw_frame(&mut self) -> Result<()> {
        let inner = (BOARD_WIDTH as u16) * 2;

        self.stdout.queue(cursor::MoveTo(0, 0))?;
        self.stdout.queue(SetForegroundColor(Color::Grey))?;
        self.stdout
            .queue(Print(format!("┌{}┐", "─".repeat(inner as usize))))?;

        for y in 0..BOARD_HEIGHT as u16 {
            self.stdout.queue(cursor::MoveTo(0, y + 1))?;
            self.stdout.queue(Print("│"))?;
            self.stdout.queue(cursor::MoveTo(inner + 1, y + 1))?;
            self.stdout.queue(Print("│"))?;
        }

        self.stdout.queue(cursor::MoveTo(0, BOARD_HEIGHT as u16 + 1))?;
        self.stdout
            .queue(Print(format!("└{}┘", "─".repeat(inner as usize))))?;
        Ok(())
    }

    fn draw_cells(&mut self, state: &GameState) -> Result<()> {
        let current_cells = state.current().cells();
        let current_kind = state.current().piece.kind;

        for y in 0..BOARD_HEIGHT as i8 {
            self.stdout.queue(cursor::MoveTo(1, y as u16 + 1))?;
            for x in 0..BOARD_WIDTH as i8 {
                // Settled cell wins, then the falling piece, then empty.
                let kind = state
                    .board()
                    .get(x, y)
                    .flatten()
                    .or_else(|| current_cells.contains(&(x, y)).then_some(current_kind));

                match kind {
                    Some(kind) => {
                        self.stdout.queue(SetForegroundColor(piece_color(kind)))?;
                        self.stdout.queue(Print("██"))?;
                    }
                    None => {
                        self.stdout.queue(SetForegroundColor(Color::DarkGrey))?;
                        self.stdout.queue(Print("· "))?;
                    }
                }
            }
        }
        Ok(())
    }

    fn draw_panel(&mut self, state: &GameState) -> Result<()> {
        self.stdout.queue(SetForegroundColor(Color::White))?;
        self.stdout.queue(cursor::MoveTo(PANEL_X, 1))?;
        self.stdout.queue(Print("NEXT"))?;

        let preview = next_preview(&state.next().matrix);
        let color = piece_color(state.next().kind);
        for (row, cells) in preview.iter().enumerate() {
            self.stdout.queue(cursor::MoveTo(PANEL_X, 2 + row as u16))?;
            self.stdout.queue(SetForegroundColor(color))?;
            for &occupied in cells {
                self.stdout
                    .queue(Print(if occupied { "██" } else { "  " }))?;
            }
        }

        self.stdout.queue(SetForegroundColor(Color::White))?;
        self.stdout.queue(cursor::MoveTo(PANEL_X, 7))?;
        self.stdout
            .queue(Print(format!("SCORE  {}", state.score())))?;
        self.stdout.queue(cursor::MoveTo(PANEL_X, 8))?;
        self.stdout
            .queue(Print(format!("LEVEL  {}", state.level())))?;

        if state.game_over() {
            self.stdout.queue(cursor::MoveTo(PANEL_X, 10))?;
            self.stdout.queue(Print("GAME OVER"))?;
            self.stdout.queue(cursor::MoveTo(PANEL_X, 11))?;
            self.stdout.queue(Print("r: restart  q: quit"))?;
        } else if state.paused() {
            self.stdout.queue(cursor::MoveTo(PANEL_X, 10))?;
            self.stdout.queue(Print("PAUSED"))?;
        }

        self.stdout
            .queue(cursor::MoveTo(0, BOARD_HEIGHT as u16 + 2))?;
        self.stdout.queue(SetForegroundColor(Color::DarkGrey))?;
        self.stdout
            .queue(Print("←/→ move  ↑ rotate  ↓ fast drop  space drop  p pause"))?;
        Ok(())
    }
}

impl Default for Screen {
    fn default() -> Self {
        Self::new()
    }
}
