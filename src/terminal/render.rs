//! Board drawing with crossterm.

use super::{BoardSnapshot, Renderer};
use crate::error::GameError;
use crate::game::{Cell, Direction, PlayerId, QUIT_KEY, key_for};
use crossterm::{
    cursor::MoveTo,
    queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{Clear, ClearType},
};
use std::io::Write;
use strum::IntoEnumIterator;

/// Draws onto any writer that understands ANSI sequences (normally stdout).
///
/// Lines end in `\r\n` because raw mode turns off newline translation.
pub struct TerminalRenderer<W: Write + Send> {
    out: W,
}

impl<W: Write + Send> TerminalRenderer<W> {
    /// Wraps a writer.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Gives back the writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn flush(&mut self) -> Result<(), GameError> {
        self.out
            .flush()
            .map_err(|e| GameError::render(format!("Failed to flush terminal: {}", e)))
    }
}

fn help_line() -> String {
    let mut parts: Vec<String> = PlayerId::iter()
        .map(|player| {
            let keys: Vec<String> = Direction::iter()
                .map(|dir| key_for(player, dir).to_string())
                .collect();
            format!("{}: {}", player, keys.join(" "))
        })
        .collect();
    parts.push(format!("Quit: {}", QUIT_KEY));
    parts.join("   ")
}

impl<W: Write + Send> Renderer for TerminalRenderer<W> {
    fn clear_screen(&mut self) -> Result<(), GameError> {
        queue!(self.out, Clear(ClearType::All), Clear(ClearType::Purge), MoveTo(0, 0))
            .map_err(|e| GameError::render(format!("Failed to clear screen: {}", e)))?;
        self.flush()
    }

    fn draw_board(&mut self, snapshot: &BoardSnapshot) -> Result<(), GameError> {
        let separator = format!("-{}", "----".repeat(snapshot.size));
        let map_err = |e: std::io::Error| GameError::render(format!("Failed to draw board: {}", e));

        queue!(self.out, Print(&separator), Print("\r\n")).map_err(map_err)?;
        for row in 0..snapshot.size {
            queue!(self.out, Print("| ")).map_err(map_err)?;
            for cell in snapshot.row(row) {
                let drawn = match cell {
                    Cell::Empty => queue!(self.out, Print(' ')),
                    Cell::ZoneMarker => queue!(
                        self.out,
                        SetForegroundColor(Color::Red),
                        Print('*'),
                        ResetColor
                    ),
                    Cell::PlayerMark(player) => queue!(self.out, Print(player.mark())),
                };
                drawn.map_err(map_err)?;
                queue!(self.out, Print(" | ")).map_err(map_err)?;
            }
            queue!(self.out, Print("\r\n"), Print(&separator), Print("\r\n")).map_err(map_err)?;
        }

        let status = match snapshot.occupant {
            Some(player) => format!("{} is holding the hill!", player),
            None => "The hill is free.".to_string(),
        };
        queue!(
            self.out,
            Print(status),
            Print("\r\n"),
            Print(help_line()),
            Print("\r\n")
        )
        .map_err(map_err)?;
        self.flush()
    }

    fn announce(&mut self, message: &str) -> Result<(), GameError> {
        queue!(self.out, Print(message), Print("\r\n"))
            .map_err(|e| GameError::render(format!("Failed to announce: {}", e)))?;
        self.flush()
    }
}
