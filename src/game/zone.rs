//! Who holds the hill, and how often that has changed.

use super::board::Board;
use super::types::PlayerId;
use strum::IntoEnumIterator;
use tracing::{debug, instrument};

/// Result of re-evaluating occupancy after a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoneTransition {
    /// Same occupant as before; nobody needs waking.
    Unchanged,
    /// The occupant changed (including to or from nobody).
    Changed {
        /// Previous occupant.
        from: Option<PlayerId>,
        /// New occupant.
        to: Option<PlayerId>,
        /// Change counter after the bump.
        seq: u64,
    },
}

impl ZoneTransition {
    /// Whether waiters on occupancy must be woken.
    pub fn changed(&self) -> bool {
        matches!(self, ZoneTransition::Changed { .. })
    }
}

/// Current hill occupant plus a change counter.
///
/// `change_seq` is bumped exactly once per change of `occupant` and never
/// on a re-evaluation that keeps the same occupant. Waiters compare the
/// counter rather than a dirty flag so two quick changes cannot collapse
/// into a single observation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ZoneOccupancy {
    occupant: Option<PlayerId>,
    change_seq: u64,
}

impl ZoneOccupancy {
    /// Empty hill, counter at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Who holds the hill right now.
    pub fn occupant(&self) -> Option<PlayerId> {
        self.occupant
    }

    /// Number of occupant changes so far.
    pub fn change_seq(&self) -> u64 {
        self.change_seq
    }

    /// Recomputes the occupant from player positions.
    ///
    /// A recorded occupant who is still on the hill keeps it even if the
    /// opponent also climbs on. When a new occupant must be picked and both
    /// players qualify, player 0 wins the tie.
    #[instrument(skip(self, board), fields(occupant = ?self.occupant, seq = self.change_seq))]
    pub fn reevaluate(&mut self, board: &Board) -> ZoneTransition {
        let still_held = self
            .occupant
            .is_some_and(|player| board.player_in_zone(player));
        if still_held {
            return ZoneTransition::Unchanged;
        }

        let next = PlayerId::iter().find(|player| board.player_in_zone(*player));
        if next == self.occupant {
            return ZoneTransition::Unchanged;
        }

        let from = self.occupant;
        self.occupant = next;
        self.change_seq += 1;
        debug!(?from, to = ?next, seq = self.change_seq, "Zone occupancy changed");
        ZoneTransition::Changed {
            from,
            to: next,
            seq: self.change_seq,
        }
    }
}
