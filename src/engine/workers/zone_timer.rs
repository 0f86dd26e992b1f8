//! Countdown for continuous occupancy of the hill.
//!
//! Idle until someone holds the hill, then Watching with a deadline. A
//! change of the occupancy counter before the deadline sends the timer back
//! to Idle (announcing the departure); reaching the deadline with the
//! counter untouched ends the match with the holder as winner.

use crate::engine::Arena;
use crate::engine::RenderRequest;
use crate::error::GameError;
use std::time::Instant;
use tracing::{debug, info, instrument};

/// Watches the hill until the match ends.
#[instrument(skip(arena))]
pub fn run(arena: &Arena) -> Result<(), GameError> {
    info!("Zone timer started");
    let win_duration = arena.config.win_duration();
    let mut state = arena.state.lock();

    loop {
        // Idle
        arena
            .zone_changed
            .wait_while(&mut state, |s| s.zone.occupant().is_none() && !arena.is_over());
        if arena.is_over() {
            break;
        }

        // Watching
        let holder = state
            .zone
            .occupant()
            .ok_or_else(|| GameError::invariant("zone timer woke with an empty hill"))?;
        let seq = state.zone.change_seq();
        let deadline = Instant::now() + win_duration;
        debug!(%holder, seq, ?win_duration, "Countdown armed");

        let wait = arena.zone_changed.wait_while_until(
            &mut state,
            |s| s.zone.change_seq() == seq && !arena.is_over(),
            deadline,
        );
        if arena.is_over() {
            break;
        }

        if wait.timed_out() && state.zone.change_seq() == seq {
            let won = arena.lifecycle.conclude(Some(holder), || {
                arena.renders.push(RenderRequest::AnnouncePlayerWon(holder));
            });
            drop(state);
            if won {
                info!(winner = %holder, "Hill held to the end");
                arena.broadcast_shutdown();
            }
            return Ok(());
        }

        info!(%holder, "Hill lost before the countdown ran out");
        arena.request_render(RenderRequest::AnnouncePlayerLeftZone(holder));
    }

    info!("Zone timer stopped");
    Ok(())
}
