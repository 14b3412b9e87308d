//! Game board state: grid cells, owned fleet, and shot resolution.

use std::collections::HashSet;

use rand::Rng;

use crate::common::{BoardError, ShotOutcome};
use crate::config::{BOARD_SIZE, MAX_PLACEMENT_ATTEMPTS};
use crate::ship::{Orientation, Ship};

/// Display state of a single grid cell, decoupled from any rendering glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellState {
    /// Open water, never fired at.
    Empty,
    /// Part of a ship, not yet hit.
    Occupied,
    /// Part of a ship, hit.
    Hit,
    /// Fired at, no ship there.
    Miss,
}

/// One side's board: the grid, the fleet it owns, and every shot resolved
/// against it.
///
/// Invariant: each ship's cells are in bounds and exclusive to that ship,
/// enforced at placement time. `cells` mirrors fleet and shot state exactly.
pub struct Board {
    size: usize,
    cells: Vec<CellState>,
    ships: Vec<Ship>,
    shots: HashSet<(usize, usize)>,
}

impl Board {
    /// Create an empty board with no ships placed.
    pub fn new() -> Self {
        Board {
            size: BOARD_SIZE,
            cells: vec![CellState::Empty; BOARD_SIZE * BOARD_SIZE],
            ships: Vec::new(),
            shots: HashSet::new(),
        }
    }

    /// Side length of the grid.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Immutable view of the fleet.
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    fn index(&self, row: usize, col: usize) -> usize {
        row * self.size + col
    }

    fn in_bounds(&self, row: usize, col: usize) -> bool {
        row < self.size && col < self.size
    }

    /// Cell state at (`row`, `col`).
    pub fn cell(&self, row: usize, col: usize) -> Result<CellState, BoardError> {
        if !self.in_bounds(row, col) {
            return Err(BoardError::OutOfBounds { row, col });
        }
        Ok(self.cells[self.index(row, col)])
    }

    /// Cell state as shown to the opponent: with `hide_ships` set, unsunk
    /// ship cells read as `Empty` to preserve hidden-fleet semantics.
    pub fn visible_cell(
        &self,
        row: usize,
        col: usize,
        hide_ships: bool,
    ) -> Result<CellState, BoardError> {
        match self.cell(row, col)? {
            CellState::Occupied if hide_ships => Ok(CellState::Empty),
            state => Ok(state),
        }
    }

    /// True when every cell of `ship` is in bounds and currently empty.
    /// Pure predicate, no mutation.
    pub fn is_valid_placement(&self, ship: &Ship) -> bool {
        ship.cells().all(|(row, col)| {
            self.in_bounds(row, col) && self.cells[self.index(row, col)] == CellState::Empty
        })
    }

    /// Place `ship` on the grid and add it to the fleet.
    pub fn place_ship(&mut self, ship: Ship) -> Result<(), BoardError> {
        if !self.is_valid_placement(&ship) {
            return Err(BoardError::InvalidPlacement);
        }
        for (row, col) in ship.cells() {
            let idx = self.index(row, col);
            self.cells[idx] = CellState::Occupied;
        }
        self.ships.push(ship);
        Ok(())
    }

    /// Place one ship of `length` at a uniformly random bow and orientation,
    /// resampling on invalid positions. Fails with `BoardTooSmall` once the
    /// attempt budget is exhausted.
    pub fn auto_place_ship<R: Rng>(&mut self, rng: &mut R, length: usize) -> Result<(), BoardError> {
        for attempt in 1..=MAX_PLACEMENT_ATTEMPTS {
            let bow = (
                rng.random_range(0..self.size),
                rng.random_range(0..self.size),
            );
            let orientation = if rng.random() {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            };
            let ship = Ship::new(bow, length, orientation);
            if self.is_valid_placement(&ship) {
                log::debug!(
                    "placed ship of length {} at {:?} {:?} after {} attempt(s)",
                    length,
                    bow,
                    orientation,
                    attempt
                );
                return self.place_ship(ship);
            }
        }
        Err(BoardError::BoardTooSmall)
    }

    /// Resolve a shot at (`row`, `col`), marking the grid and reporting the
    /// outcome. At most one ship can contain the cell since placements are
    /// disjoint.
    pub fn receive_shot(&mut self, row: usize, col: usize) -> Result<ShotOutcome, BoardError> {
        if !self.in_bounds(row, col) {
            return Err(BoardError::OutOfBounds { row, col });
        }
        if !self.shots.insert((row, col)) {
            return Err(BoardError::DuplicateShot { row, col });
        }
        let idx = self.index(row, col);
        for ship in &mut self.ships {
            if ship.resolve_shot(row, col) {
                self.cells[idx] = CellState::Hit;
                if ship.is_sunk() {
                    return Ok(ShotOutcome::Sunk(ship.length()));
                }
                return Ok(ShotOutcome::Hit);
            }
        }
        self.cells[idx] = CellState::Miss;
        Ok(ShotOutcome::Miss)
    }

    /// Returns `true` when every ship in the fleet is sunk. Vacuously true on
    /// an empty fleet, so callers must check only after setup has completed.
    pub fn all_sunk(&self) -> bool {
        self.ships.iter().all(Ship::is_sunk)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
