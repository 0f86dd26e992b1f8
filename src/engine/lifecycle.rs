//! Process-wide "game over" flag and the winner slot.

use crate::game::PlayerId;
use parking_lot::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::{info, instrument};

/// End-of-match state shared by every worker.
///
/// `over` never goes back to `false`, and `winner` is written at most once,
/// always before `over` becomes visible. Concluding only flips the flag;
/// waking blocked workers is the caller's job (see `Arena::broadcast_shutdown`).
#[derive(Debug, Default)]
pub struct GameLifecycle {
    over: AtomicBool,
    winner: Mutex<Option<PlayerId>>,
}

impl GameLifecycle {
    /// A match that is still running.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the match has ended.
    pub fn is_over(&self) -> bool {
        self.over.load(Ordering::Acquire)
    }

    /// Who won, if the match ended with a winner.
    pub fn winner(&self) -> Option<PlayerId> {
        *self.winner.lock()
    }

    /// Ends the match, recording `winner` (or none, for a quit).
    ///
    /// `before_over` runs after the winner is recorded but before `over`
    /// is published, so anything it queues is visible to a worker that
    /// observes the end. Returns `false` without running `before_over` if
    /// the match had already ended.
    #[instrument(skip(self, before_over))]
    pub fn conclude(&self, winner: Option<PlayerId>, before_over: impl FnOnce()) -> bool {
        let mut slot = self.winner.lock();
        if self.is_over() {
            return false;
        }
        *slot = winner;
        before_over();
        self.over.store(true, Ordering::Release);
        info!(winner = ?winner, "Match concluded");
        true
    }
}
