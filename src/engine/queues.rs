//! Per-player move queues and the render request queue.

use super::lifecycle::GameLifecycle;
use crate::error::GameError;
use crate::game::{Direction, PlayerId};
use parking_lot::{Condvar, Mutex};
use std::collections::VecDeque;
use tracing::trace;

/// Work for the render worker, processed strictly in the order queued.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderRequest {
    /// Clear the screen and draw the current board.
    RedrawBoard,
    /// The hill holder stepped off (or was pushed off) before winning.
    AnnouncePlayerLeftZone(PlayerId),
    /// The hill holder stayed long enough.
    AnnouncePlayerWon(PlayerId),
}

/// One unbounded FIFO of directions per player, sharing a single condition.
#[derive(Debug, Default)]
pub struct MoveQueues {
    queues: Mutex<[VecDeque<Direction>; 2]>,
    ready: Condvar,
}

impl MoveQueues {
    /// Two empty queues.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a move and wakes every movement worker.
    pub fn push(&self, player: PlayerId, direction: Direction) {
        self.queues.lock()[player.index()].push_back(direction);
        self.ready.notify_all();
        trace!(%player, ?direction, "Move queued");
    }

    /// Blocks until `player` has a move or the match is over.
    ///
    /// Returns `None` once the match is over; moves still queued then are
    /// dropped.
    pub fn wait_pop(
        &self,
        player: PlayerId,
        lifecycle: &GameLifecycle,
    ) -> Result<Option<Direction>, GameError> {
        let slot = player.index();
        let mut queues = self.queues.lock();
        self.ready
            .wait_while(&mut queues, |q| q[slot].is_empty() && !lifecycle.is_over());
        if lifecycle.is_over() {
            return Ok(None);
        }
        queues[slot]
            .pop_front()
            .map(Some)
            .ok_or_else(|| GameError::invariant(format!("{} woke to an empty move queue", player)))
    }

    /// Moves waiting for `player`.
    pub fn pending(&self, player: PlayerId) -> usize {
        self.queues.lock()[player.index()].len()
    }

    /// Wakes every waiter so it re-checks the game-over flag.
    pub fn wake_all(&self) {
        drop(self.queues.lock());
        self.ready.notify_all();
    }
}

/// FIFO of render requests with one consumer.
#[derive(Debug, Default)]
pub struct RenderQueue {
    requests: Mutex<VecDeque<RenderRequest>>,
    ready: Condvar,
}

impl RenderQueue {
    /// Empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a request and wakes the render worker.
    pub fn push(&self, request: RenderRequest) {
        self.requests.lock().push_back(request);
        self.ready.notify_all();
        trace!(?request, "Render requested");
    }

    /// Blocks until a request is available or the match is over.
    ///
    /// Requests queued before the end are still handed out; `None` means
    /// the match is over and nothing is left.
    pub fn wait_pop(&self, lifecycle: &GameLifecycle) -> Option<RenderRequest> {
        let mut requests = self.requests.lock();
        self.ready
            .wait_while(&mut requests, |q| q.is_empty() && !lifecycle.is_over());
        requests.pop_front()
    }

    /// Requests not yet drawn.
    pub fn pending(&self) -> usize {
        self.requests.lock().len()
    }

    /// Wakes the consumer so it re-checks the game-over flag.
    pub fn wake_all(&self) {
        drop(self.requests.lock());
        self.ready.notify_all();
    }
}
