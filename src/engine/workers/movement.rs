//! Applies one player's queued moves in the order they were typed.

use crate::engine::Arena;
use crate::engine::RenderRequest;
use crate::error::GameError;
use crate::game::{PlayerId, ZoneTransition};
use tracing::{debug, info, instrument};

/// Drains `player`'s move queue until the match ends.
#[instrument(skip(arena))]
pub fn run(arena: &Arena, player: PlayerId) -> Result<(), GameError> {
    info!("Movement worker started");

    while let Some(direction) = arena.moves.wait_pop(player, &arena.lifecycle)? {
        let Some(transition) = arena.apply_move(player, direction)? else {
            break;
        };
        match transition {
            ZoneTransition::Changed { from, to, seq } => {
                info!(?from, ?to, seq, "Hill changed hands");
            }
            ZoneTransition::Unchanged => debug!(?direction, "Hill unchanged"),
        }
        arena.request_render(RenderRequest::RedrawBoard);
    }

    info!("Movement worker stopped");
    Ok(())
}
