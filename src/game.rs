//! Game orchestration: two boards, alternating turns, win detection.

use rand::Rng;

use crate::board::Board;
use crate::common::{BoardError, ShotOutcome};
use crate::config::FLEET;

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    PlayerWon,
    ComputerWon,
}

/// Holds both fleets and resolves one shot at a time.
///
/// Turn sequencing lives in the caller's loop: one player shot, then, if the
/// player has not already won, one computer shot.
pub struct Game {
    player_board: Board,
    computer_board: Board,
}

impl Game {
    /// Create a game with both fleets placed independently at random.
    pub fn new<R: Rng>(rng: &mut R) -> Result<Self, BoardError> {
        let mut player_board = Board::new();
        let mut computer_board = Board::new();
        for &length in FLEET.iter() {
            player_board.auto_place_ship(rng, length)?;
            computer_board.auto_place_ship(rng, length)?;
        }
        Ok(Game {
            player_board,
            computer_board,
        })
    }

    /// The human player's own board.
    pub fn player_board(&self) -> &Board {
        &self.player_board
    }

    /// The computer's board, targeted by the player.
    pub fn computer_board(&self) -> &Board {
        &self.computer_board
    }

    /// Resolve the player's shot against the computer's board.
    ///
    /// `DuplicateShot` and `OutOfBounds` are surfaced so the caller can
    /// re-prompt without consuming the turn.
    pub fn player_shot(&mut self, row: usize, col: usize) -> Result<ShotOutcome, BoardError> {
        self.computer_board.receive_shot(row, col)
    }

    /// Take the computer's turn: a uniformly random target, silently
    /// resampling cells already fired at so no turn is consumed by a
    /// duplicate. Returns the chosen coordinate alongside the outcome.
    ///
    /// Must only be called while the game is in progress; a finished game
    /// has no guarantee of an unshot cell remaining.
    pub fn computer_shot<R: Rng>(
        &mut self,
        rng: &mut R,
    ) -> Result<((usize, usize), ShotOutcome), BoardError> {
        loop {
            let row = rng.random_range(0..self.player_board.size());
            let col = rng.random_range(0..self.player_board.size());
            match self.player_board.receive_shot(row, col) {
                Ok(outcome) => return Ok(((row, col), outcome)),
                Err(BoardError::DuplicateShot { .. }) => {
                    log::debug!("computer resampled duplicate target ({}, {})", row, col);
                    continue;
                }
                Err(e) => return Err(e),
            }
        }
    }

    /// Evaluate the game status. The player's win is checked first, matching
    /// the turn order: the computer takes no shot in a round the player has
    /// already won.
    pub fn status(&self) -> GameStatus {
        if self.computer_board.all_sunk() {
            GameStatus::PlayerWon
        } else if self.player_board.all_sunk() {
            GameStatus::ComputerWon
        } else {
            GameStatus::InProgress
        }
    }
}
