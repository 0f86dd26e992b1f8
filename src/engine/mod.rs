//! Concurrent coordination core.
//!
//! A match runs five threads around one [`Arena`]:
//!
//! - **input**: keys → per-player move queues, or quit
//! - **movement** (one per player): move queue → board + hill occupancy
//! - **zone timer**: occupancy changes → win countdown
//! - **render**: render queue → terminal
//!
//! Every blocking wait re-checks its predicate together with the game-over
//! flag, and every place that ends the match broadcasts to all conditions.

mod arena;
mod lifecycle;
mod queues;
pub mod workers;

pub use arena::{Arena, PlayState};
pub use lifecycle::GameLifecycle;
pub use queues::{MoveQueues, RenderQueue, RenderRequest};

use crate::config::GameConfig;
use crate::error::{GameError, GameErrorKind};
use crate::game::PlayerId;
use crate::terminal::{KeySource, Renderer};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use strum::IntoEnumIterator;
use tracing::{error, info, info_span, instrument};

/// How a match ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchOutcome {
    /// The player who held the hill, or `None` after a quit.
    pub winner: Option<PlayerId>,
}

type WorkerHandle = JoinHandle<Result<(), GameError>>;

/// Ends the match when a worker leaves for any reason, panics included.
struct EndOnExit<'a>(&'a Arena);

impl Drop for EndOnExit<'_> {
    fn drop(&mut self) {
        self.0.end_game();
    }
}

fn spawn_worker<F>(name: &str, arena: &Arc<Arena>, work: F) -> Result<WorkerHandle, GameError>
where
    F: FnOnce(&Arena) -> Result<(), GameError> + Send + 'static,
{
    let shared = Arc::clone(arena);
    let worker = name.to_string();
    thread::Builder::new()
        .name(worker.clone())
        .spawn(move || {
            let arena: &Arena = &shared;
            let _span = info_span!("worker", name = %worker).entered();
            let _end = EndOnExit(arena);
            let result = work(arena);
            if let Err(e) = &result {
                error!(error = %e, "Worker failed, ending match");
            }
            result
        })
        .map_err(|e| {
            GameError::new(GameErrorKind::Thread(format!(
                "Failed to spawn {}: {}",
                name, e
            )))
        })
}

fn join_all(handles: Vec<WorkerHandle>) -> Result<(), GameError> {
    let mut first_error = None;
    for handle in handles {
        let name = handle.thread().name().unwrap_or("worker").to_string();
        let result = handle.join().unwrap_or_else(|_| {
            Err(GameError::new(GameErrorKind::Thread(format!(
                "{} panicked",
                name
            ))))
        });
        if let Err(e) = result {
            first_error.get_or_insert(e);
        }
    }
    first_error.map_or(Ok(()), Err)
}

/// Plays one match to completion.
///
/// Draws the starting board, runs every worker on its own thread and
/// returns once all of them have observed the end of the match.
#[instrument(skip(keys, renderer))]
pub fn run_match<K, R>(config: GameConfig, keys: K, renderer: R) -> Result<MatchOutcome, GameError>
where
    K: KeySource + 'static,
    R: Renderer + 'static,
{
    let arena = Arc::new(Arena::new(config));
    arena.request_render(RenderRequest::RedrawBoard);
    info!("Match starting");

    let mut handles = Vec::new();
    let spawned = spawn_all(&arena, keys, renderer, &mut handles);
    if spawned.is_err() {
        arena.end_game();
    }
    let joined = join_all(handles);
    spawned?;
    joined?;

    let outcome = MatchOutcome {
        winner: arena.winner(),
    };
    info!(winner = ?outcome.winner, "Match finished");
    Ok(outcome)
}

fn spawn_all<K, R>(
    arena: &Arc<Arena>,
    mut keys: K,
    mut renderer: R,
    handles: &mut Vec<WorkerHandle>,
) -> Result<(), GameError>
where
    K: KeySource + 'static,
    R: Renderer + 'static,
{
    handles.push(spawn_worker("render", arena, move |arena| {
        workers::render::run(arena, &mut renderer)
    })?);
    handles.push(spawn_worker("zone-timer", arena, workers::zone_timer::run)?);
    for player in PlayerId::iter() {
        handles.push(spawn_worker(&format!("movement-{}", player.index()), arena, move |arena| {
            workers::movement::run(arena, player)
        })?);
    }
    handles.push(spawn_worker("input", arena, move |arena| {
        workers::input::run(arena, &mut keys)
    })?);
    Ok(())
}
