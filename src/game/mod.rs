mod board;
mod keys;
mod types;
mod zone;

pub use board::{Board, MoveOutcome};
pub use keys::{Command, QUIT_KEY, key_for};
pub use types::{Cell, Direction, PlayerId, Position};
pub use zone::{ZoneOccupancy, ZoneTransition};
