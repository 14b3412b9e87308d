//! Fixed game configuration: board size and fleet composition.

/// Side length of the square board.
pub const BOARD_SIZE: usize = 6;

/// Lengths of the ships making up one side's fleet.
pub const FLEET: [usize; 7] = [3, 2, 2, 1, 1, 1, 1];

/// Number of cells a fully placed fleet occupies.
pub const TOTAL_SHIP_CELLS: usize = 11;

/// Upper bound on random placement attempts for a single ship before the
/// board is declared too small for its fleet.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 1_000;
