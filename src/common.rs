//! Common types for sea battle: shot outcomes and board errors.

use core::fmt;

/// Result of resolving a shot against a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotOutcome {
    /// Shot hit a ship segment, leaving the ship still afloat.
    Hit,
    /// Shot hit the last afloat segment of a ship, carrying its length.
    Sunk(usize),
    /// Shot landed in open water.
    Miss,
}

/// Errors returned by board operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// Explicit placement is out of bounds or overlaps another ship.
    InvalidPlacement,
    /// Random placement exhausted its attempt budget.
    BoardTooSmall,
    /// Shot coordinate lies outside the grid.
    OutOfBounds { row: usize, col: usize },
    /// This cell has already been fired at.
    DuplicateShot { row: usize, col: usize },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::InvalidPlacement => {
                write!(f, "Ship placement is out of bounds or overlaps another ship")
            }
            BoardError::BoardTooSmall => {
                write!(f, "Unable to place ship: board too small for its fleet")
            }
            BoardError::OutOfBounds { row, col } => {
                write!(f, "Shot out of bounds: row={}, col={}", row, col)
            }
            BoardError::DuplicateShot { row, col } => {
                write!(f, "Cell already fired at: row={}, col={}", row, col)
            }
        }
    }
}

impl std::error::Error for BoardError {}
