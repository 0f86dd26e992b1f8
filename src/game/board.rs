//! Grid contents, terrain snapshot and player positions.

use super::types::{Cell, Direction, PlayerId, Position};
use crate::config::GameConfig;
use crate::error::GameError;
use strum::IntoEnumIterator;
use tracing::{debug, instrument};

/// Result of applying one move to the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    /// Where the mover ended up.
    pub to: Position,
    /// The opponent's new position, if the mover pushed them.
    pub pushed: Option<Position>,
}

/// The playing field.
///
/// `original` is the terrain before anyone stood on it and only ever holds
/// [`Cell::Empty`] or [`Cell::ZoneMarker`]; it is used to restore a cell
/// when a player steps off it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    zone_start: usize,
    zone_end: usize,
    cells: Vec<Cell>,
    original: Vec<Cell>,
    positions: [Position; 2],
}

impl Board {
    /// Lays out terrain with the centered hill and places both players in
    /// opposite corners.
    #[instrument(
        skip(config),
        fields(grid_size = config.grid_size(), zone_size = config.zone_size())
    )]
    pub fn new(config: &GameConfig) -> Self {
        let size = *config.grid_size();
        let zone_start = config.zone_start();
        let zone_end = config.zone_end();
        let zone = zone_start..zone_end;

        let original: Vec<Cell> = (0..size * size)
            .map(|i| {
                if zone.contains(&(i / size)) && zone.contains(&(i % size)) {
                    Cell::ZoneMarker
                } else {
                    Cell::Empty
                }
            })
            .collect();

        let positions = [Position::new(0, 0), Position::new(size - 1, size - 1)];
        let mut board = Self {
            size,
            zone_start,
            zone_end,
            cells: original.clone(),
            original,
            positions,
        };
        for player in PlayerId::iter() {
            board.set(board.position(player), Cell::PlayerMark(player));
        }
        board
    }

    /// Side length of the grid.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Cell contents at `pos`.
    pub fn get(&self, pos: Position) -> Cell {
        self.cells[self.index(pos)]
    }

    /// Terrain at `pos` ignoring players.
    pub fn terrain(&self, pos: Position) -> Cell {
        self.original[self.index(pos)]
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Where `player` currently stands.
    pub fn position(&self, player: PlayerId) -> Position {
        self.positions[player.index()]
    }

    /// Whether `pos` lies inside the hill.
    pub fn in_zone(&self, pos: Position) -> bool {
        let band = self.zone_start..self.zone_end;
        band.contains(&pos.row) && band.contains(&pos.col)
    }

    /// Whether `player` is standing on the hill.
    #[instrument(skip(self))]
    pub fn player_in_zone(&self, player: PlayerId) -> bool {
        self.in_zone(self.position(player))
    }

    /// Moves `player` one step in `direction`, wrapping at the edges.
    ///
    /// An opponent standing on the destination is shoved one further step
    /// the same way. The shove never chains: with only two players and a
    /// grid of at least three cells per side, the shove target is always
    /// vacant, and anything else is reported as an invariant violation.
    #[instrument(skip(self))]
    pub fn apply_move(
        &mut self,
        player: PlayerId,
        direction: Direction,
    ) -> Result<MoveOutcome, GameError> {
        let from = self.position(player);
        let to = from.step(direction, self.size);

        let pushed = match self.get(to) {
            Cell::PlayerMark(other) if other == player => {
                return Err(GameError::invariant(format!(
                    "{} found its own mark at destination {}",
                    player, to
                )));
            }
            Cell::PlayerMark(other) => {
                let target = to.step(direction, self.size);
                if !self.get(target).is_terrain() {
                    return Err(GameError::invariant(format!(
                        "push target {} for {} is occupied",
                        target, other
                    )));
                }
                self.set(target, Cell::PlayerMark(other));
                self.positions[other.index()] = target;
                debug!(pusher = %player, pushed = %other, %target, "Player pushed");
                Some(target)
            }
            Cell::Empty | Cell::ZoneMarker => None,
        };

        self.set(to, Cell::PlayerMark(player));
        self.set(from, self.terrain(from));
        self.positions[player.index()] = to;

        debug!(%player, %from, %to, "Move applied");
        Ok(MoveOutcome { to, pushed })
    }

    fn set(&mut self, pos: Position, cell: Cell) {
        let idx = self.index(pos);
        self.cells[idx] = cell;
    }

    fn index(&self, pos: Position) -> usize {
        pos.row * self.size + pos.col
    }
}
