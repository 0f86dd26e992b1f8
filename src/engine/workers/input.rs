//! Turns keystrokes into queued moves or a quit.

use crate::engine::Arena;
use crate::error::GameError;
use crate::game::Command;
use crate::terminal::KeySource;
use tracing::{debug, info, instrument};

/// Reads keys until the match ends or someone quits.
///
/// A read failure is returned as an error; the caller treats it like a quit.
#[instrument(skip_all)]
pub fn run(arena: &Arena, keys: &mut dyn KeySource) -> Result<(), GameError> {
    info!("Input worker started");

    while !arena.is_over() {
        let Some(key) = keys.next_key()? else {
            continue;
        };
        match Command::from_key(key) {
            Some(Command::Move(player, direction)) => {
                debug!(?key, %player, ?direction, "Key mapped to move");
                arena.enqueue_move(player, direction);
            }
            Some(Command::Quit) => {
                info!("Quit requested");
                arena.end_game();
                break;
            }
            None => debug!(?key, "Ignoring unmapped key"),
        }
    }

    info!("Input worker stopped");
    Ok(())
}
