//! Keyboard table: two independent movement sets and a quit key.

use super::types::{Direction, PlayerId};
use tracing::instrument;

/// Key that ends the match.
pub const QUIT_KEY: char = 'x';

/// What a recognized key asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Queue a move for a player.
    Move(PlayerId, Direction),
    /// Stop the match.
    Quit,
}

impl Command {
    /// Maps a raw key to a command. Unrecognized keys map to `None`.
    #[instrument]
    pub fn from_key(key: char) -> Option<Self> {
        use Direction::*;
        use PlayerId::*;

        let command = match key {
            'w' => Command::Move(Zero, Up),
            'a' => Command::Move(Zero, Left),
            's' => Command::Move(Zero, Down),
            'd' => Command::Move(Zero, Right),
            'i' => Command::Move(One, Up),
            'j' => Command::Move(One, Left),
            'k' => Command::Move(One, Down),
            'l' => Command::Move(One, Right),
            QUIT_KEY => Command::Quit,
            _ => return None,
        };
        Some(command)
    }
}

/// The key that moves `player` in `direction`; inverse of [`Command::from_key`].
#[instrument]
pub fn key_for(player: PlayerId, direction: Direction) -> char {
    match (player, direction) {
        (PlayerId::Zero, Direction::Up) => 'w',
        (PlayerId::Zero, Direction::Left) => 'a',
        (PlayerId::Zero, Direction::Down) => 's',
        (PlayerId::Zero, Direction::Right) => 'd',
        (PlayerId::One, Direction::Up) => 'i',
        (PlayerId::One, Direction::Left) => 'j',
        (PlayerId::One, Direction::Down) => 'k',
        (PlayerId::One, Direction::Right) => 'l',
    }
}
