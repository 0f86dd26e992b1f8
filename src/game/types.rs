//! Core domain types for the hill.

use derive_more::Display;
use derive_new::new;
use serde::{Deserialize, Serialize};
use strum::EnumIter;
use tracing::instrument;

/// One of the two contestants.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Display,
    Serialize,
    Deserialize,
    EnumIter,
)]
pub enum PlayerId {
    /// Player 0, moves with `w a s d`, starts top-left.
    #[display("Player 0")]
    Zero,
    /// Player 1, moves with `i j k l`, starts bottom-right.
    #[display("Player 1")]
    One,
}

impl PlayerId {
    /// Slot index (0 or 1) used by per-player tables.
    pub fn index(self) -> usize {
        match self {
            PlayerId::Zero => 0,
            PlayerId::One => 1,
        }
    }

    /// Digit drawn on the board for this player.
    pub fn mark(self) -> char {
        match self {
            PlayerId::Zero => '0',
            PlayerId::One => '1',
        }
    }
}

/// A single-step move on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize, EnumIter)]
pub enum Direction {
    /// Row - 1.
    Up,
    /// Col - 1.
    Left,
    /// Row + 1.
    Down,
    /// Col + 1.
    Right,
}

/// A cell coordinate, always inside the grid it was produced for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize, new)]
#[display("({}, {})", row, col)]
pub struct Position {
    /// Row index.
    pub row: usize,
    /// Column index.
    pub col: usize,
}

impl Position {
    /// Steps one cell in `direction` on an `size`×`size` torus.
    #[instrument]
    pub fn step(self, direction: Direction, size: usize) -> Self {
        let Position { row, col } = self;
        match direction {
            Direction::Up => Self::new(if row == 0 { size - 1 } else { row - 1 }, col),
            Direction::Down => Self::new((row + 1) % size, col),
            Direction::Left => Self::new(row, if col == 0 { size - 1 } else { col - 1 }),
            Direction::Right => Self::new(row, (col + 1) % size),
        }
    }
}

/// Contents of one grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Plain ground.
    Empty,
    /// Part of the hill.
    ZoneMarker,
    /// A player is standing here.
    PlayerMark(PlayerId),
}

impl Cell {
    /// Whether this cell is terrain (never a player).
    pub fn is_terrain(self) -> bool {
        !matches!(self, Cell::PlayerMark(_))
    }
}
