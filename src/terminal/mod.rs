//! Keyboard and screen primitives the engine drives.
//!
//! The engine only ever talks to [`KeySource`] and [`Renderer`]; the
//! crossterm-backed implementations live in submodules.

mod keys;
mod render;

pub use keys::{CrosstermKeys, RawModeGuard};
pub use render::TerminalRenderer;

use crate::error::GameError;
use crate::game::{Board, Cell, PlayerId};
use tracing::instrument;

/// Source of raw keystrokes.
pub trait KeySource: Send {
    /// Returns the next key, or `None` if none arrived within the poll
    /// interval. Never echoes and never waits for a line.
    fn next_key(&mut self) -> Result<Option<char>, GameError>;
}

/// Sink for everything shown to the players. Calls arrive in the order the
/// engine queued them.
pub trait Renderer: Send {
    /// Wipes the screen and homes the cursor.
    fn clear_screen(&mut self) -> Result<(), GameError>;

    /// Draws the grid and the hill status.
    fn draw_board(&mut self, snapshot: &BoardSnapshot) -> Result<(), GameError>;

    /// Prints a one-line message under the board.
    fn announce(&mut self, message: &str) -> Result<(), GameError>;
}

/// Copy of the board taken under the state lock, drawn outside it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardSnapshot {
    /// Side length.
    pub size: usize,
    /// Row-major cells.
    pub cells: Vec<Cell>,
    /// Who holds the hill.
    pub occupant: Option<PlayerId>,
}

impl BoardSnapshot {
    /// Captures `board` together with the current occupant.
    #[instrument(skip(board))]
    pub fn capture(board: &Board, occupant: Option<PlayerId>) -> Self {
        Self {
            size: board.size(),
            cells: board.cells().to_vec(),
            occupant,
        }
    }

    /// Cells of one row.
    pub fn row(&self, row: usize) -> &[Cell] {
        &self.cells[row * self.size..(row + 1) * self.size]
    }
}
