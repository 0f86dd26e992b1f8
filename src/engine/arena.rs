//! Shared-state handle passed to every worker.

use super::lifecycle::GameLifecycle;
use super::queues::{MoveQueues, RenderQueue, RenderRequest};
use crate::config::GameConfig;
use crate::error::GameError;
use crate::game::{Board, Direction, PlayerId, Position, ZoneOccupancy, ZoneTransition};
use crate::terminal::BoardSnapshot;
use parking_lot::{Condvar, Mutex};
use tracing::{debug, info, instrument};

/// Board and hill occupancy, always mutated together under one lock so a
/// move and its zone re-evaluation are observed as a single step.
#[derive(Debug, Clone)]
pub struct PlayState {
    pub(super) board: Board,
    pub(super) zone: ZoneOccupancy,
}

impl PlayState {
    /// The board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Hill occupancy.
    pub fn zone(&self) -> &ZoneOccupancy {
        &self.zone
    }
}

/// Everything the workers share.
///
/// Lock order is `state` → lifecycle winner slot → render queue. The move
/// queue lock is never held together with any other.
#[derive(Debug)]
pub struct Arena {
    pub(super) config: GameConfig,
    pub(super) state: Mutex<PlayState>,
    /// Signalled whenever occupancy changes, and on shutdown.
    pub(super) zone_changed: Condvar,
    pub(super) moves: MoveQueues,
    pub(super) renders: RenderQueue,
    pub(super) lifecycle: GameLifecycle,
}

impl Arena {
    /// Fresh board, empty queues, empty hill, match running.
    #[instrument(skip(config))]
    pub fn new(config: GameConfig) -> Self {
        let board = Board::new(&config);
        Self {
            config,
            state: Mutex::new(PlayState {
                board,
                zone: ZoneOccupancy::new(),
            }),
            zone_changed: Condvar::new(),
            moves: MoveQueues::new(),
            renders: RenderQueue::new(),
            lifecycle: GameLifecycle::new(),
        }
    }

    /// Match settings.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Whether the match has ended.
    pub fn is_over(&self) -> bool {
        self.lifecycle.is_over()
    }

    /// Winner, once the match ended with one.
    pub fn winner(&self) -> Option<PlayerId> {
        self.lifecycle.winner()
    }

    /// Copy of the current occupancy.
    pub fn occupancy(&self) -> ZoneOccupancy {
        self.state.lock().zone
    }

    /// Current position of `player`.
    pub fn position(&self, player: PlayerId) -> Position {
        self.state.lock().board.position(player)
    }

    /// Runs `f` with the shared state locked.
    pub fn with_state<T>(&self, f: impl FnOnce(&PlayState) -> T) -> T {
        f(&self.state.lock())
    }

    /// Board plus occupant, for drawing outside the lock.
    pub fn snapshot(&self) -> BoardSnapshot {
        let state = self.state.lock();
        BoardSnapshot::capture(&state.board, state.zone.occupant())
    }

    /// Queues a move typed by `player`.
    pub fn enqueue_move(&self, player: PlayerId, direction: Direction) {
        self.moves.push(player, direction);
    }

    /// Moves waiting for `player`.
    pub fn pending_moves(&self, player: PlayerId) -> usize {
        self.moves.pending(player)
    }

    /// Queues something for the render worker.
    pub fn request_render(&self, request: RenderRequest) {
        self.renders.push(request);
    }

    /// Render requests not yet drawn.
    pub fn pending_renders(&self) -> usize {
        self.renders.pending()
    }

    /// Applies one move and re-evaluates the hill in the same critical
    /// section, waking the zone timer only if the occupant changed.
    ///
    /// Returns `None` without touching the board if the match ended while
    /// waiting for the lock.
    #[instrument(skip(self))]
    pub fn apply_move(
        &self,
        player: PlayerId,
        direction: Direction,
    ) -> Result<Option<ZoneTransition>, GameError> {
        let mut state = self.state.lock();
        if self.is_over() {
            debug!("Match already over, move discarded");
            return Ok(None);
        }
        let PlayState { board, zone } = &mut *state;
        board.apply_move(player, direction)?;
        let transition = zone.reevaluate(board);
        if transition.changed() {
            self.zone_changed.notify_all();
        }
        Ok(Some(transition))
    }

    /// Ends the match without a winner and wakes everyone. Safe to call
    /// repeatedly; returns `true` only for the call that ended it.
    #[instrument(skip(self))]
    pub fn end_game(&self) -> bool {
        let ended = self.lifecycle.conclude(None, || {});
        if ended {
            info!("Match stopped without a winner");
        }
        self.broadcast_shutdown();
        ended
    }

    /// Wakes every blocked worker so it observes the game-over flag.
    ///
    /// Each waiter's lock is taken before notifying, so a worker that has
    /// checked its predicate but not yet parked cannot miss the signal.
    pub fn broadcast_shutdown(&self) {
        self.moves.wake_all();
        self.renders.wake_all();
        drop(self.state.lock());
        self.zone_changed.notify_all();
        debug!("Shutdown broadcast sent");
    }
}
