//! Ship model: fixed footprint with per-segment hit tracking.

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// A single vessel anchored at its bow cell.
///
/// Segment `i` sits `i` cells from the bow along the orientation axis; the
/// `hits` vector is parallel to that segment sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ship {
    bow: (usize, usize),
    length: usize,
    orientation: Orientation,
    hits: Vec<bool>,
}

impl Ship {
    /// Create a ship with no segments hit. `length` must be at least 1.
    pub fn new(bow: (usize, usize), length: usize, orientation: Orientation) -> Self {
        Ship {
            bow,
            length,
            orientation,
            hits: vec![false; length],
        }
    }

    /// Cells occupied by the ship, bow first.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let (row, col) = self.bow;
        let orientation = self.orientation;
        (0..self.length).map(move |i| match orientation {
            Orientation::Horizontal => (row, col + i),
            Orientation::Vertical => (row + i, col),
        })
    }

    /// Whether the ship occupies (`row`, `col`).
    pub fn contains(&self, row: usize, col: usize) -> bool {
        self.cells().any(|cell| cell == (row, col))
    }

    /// Register a shot at (`row`, `col`). Returns `true` and marks the
    /// matching segment hit when the ship occupies that cell; otherwise
    /// returns `false` without effect. Re-marking a hit segment keeps it
    /// hit; duplicate shots are rejected at the board level, not here.
    pub fn resolve_shot(&mut self, row: usize, col: usize) -> bool {
        let segment = self.cells().position(|cell| cell == (row, col));
        match segment {
            Some(i) => {
                self.hits[i] = true;
                true
            }
            None => false,
        }
    }

    /// Check if the ship is sunk (all segments hit).
    pub fn is_sunk(&self) -> bool {
        self.hits.iter().all(|&hit| hit)
    }

    /// Anchor cell of the ship (row, col).
    pub fn bow(&self) -> (usize, usize) {
        self.bow
    }

    /// Number of segments.
    pub fn length(&self) -> usize {
        self.length
    }

    /// Orientation of the ship.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Hit flags parallel to `cells()`, bow first.
    pub fn hits(&self) -> &[bool] {
        &self.hits
    }
}
