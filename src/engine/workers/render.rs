//! Serializes all terminal output.

use crate::engine::Arena;
use crate::engine::RenderRequest;
use crate::error::GameError;
use crate::terminal::Renderer;
use tracing::{debug, info, instrument};

/// Processes render requests one at a time until the match is over and
/// the queue is empty, so a final win announcement is always shown.
#[instrument(skip_all)]
pub fn run(arena: &Arena, renderer: &mut dyn Renderer) -> Result<(), GameError> {
    info!("Render worker started");

    while let Some(request) = arena.renders.wait_pop(&arena.lifecycle) {
        debug!(?request, "Rendering");
        match request {
            RenderRequest::RedrawBoard => {
                let snapshot = arena.snapshot();
                renderer.clear_screen()?;
                renderer.draw_board(&snapshot)?;
            }
            RenderRequest::AnnouncePlayerLeftZone(player) => {
                renderer.announce(&format!("{} left the hill!", player))?;
            }
            RenderRequest::AnnouncePlayerWon(player) => {
                renderer.announce(&format!("{} held the hill and wins!", player))?;
            }
        }
    }

    info!("Render worker stopped");
    Ok(())
}
