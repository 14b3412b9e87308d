use std::collections::HashSet;

use rand::rngs::SmallRng;
use rand::SeedableRng;
use seabattle::{BoardError, Game, GameStatus, BOARD_SIZE, FLEET, TOTAL_SHIP_CELLS};

#[test]
fn test_setup_places_full_fleets_on_both_boards() {
    let mut rng = SmallRng::seed_from_u64(1);
    let game = Game::new(&mut rng).unwrap();

    for board in [game.player_board(), game.computer_board()] {
        assert_eq!(board.ships().len(), FLEET.len());
        let cells: usize = board.ships().iter().map(|s| s.length()).sum();
        assert_eq!(cells, TOTAL_SHIP_CELLS);
        assert!(!board.all_sunk());
    }
    assert_eq!(game.status(), GameStatus::InProgress);
}

#[test]
fn test_player_duplicate_shot_is_surfaced() {
    let mut rng = SmallRng::seed_from_u64(2);
    let mut game = Game::new(&mut rng).unwrap();

    game.player_shot(0, 0).unwrap();
    assert_eq!(
        game.player_shot(0, 0).unwrap_err(),
        BoardError::DuplicateShot { row: 0, col: 0 }
    );
}

#[test]
fn test_player_shot_out_of_bounds_is_rejected() {
    let mut rng = SmallRng::seed_from_u64(3);
    let mut game = Game::new(&mut rng).unwrap();

    assert_eq!(
        game.player_shot(BOARD_SIZE, 0).unwrap_err(),
        BoardError::OutOfBounds {
            row: BOARD_SIZE,
            col: 0
        }
    );
}

#[test]
fn test_computer_never_repeats_a_shot() {
    let mut rng = SmallRng::seed_from_u64(4);
    let mut game = Game::new(&mut rng).unwrap();

    let mut seen = HashSet::new();
    while game.status() == GameStatus::InProgress {
        let (coord, _) = game.computer_shot(&mut rng).unwrap();
        assert!(seen.insert(coord), "computer repeated shot at {:?}", coord);
    }
    assert_eq!(game.status(), GameStatus::ComputerWon);
    assert!(seen.len() <= BOARD_SIZE * BOARD_SIZE);
}

#[test]
fn test_full_game_terminates_with_a_winner() {
    let mut rng = SmallRng::seed_from_u64(5);
    let mut game = Game::new(&mut rng).unwrap();

    let mut winner = None;
    'game: for row in 0..BOARD_SIZE {
        for col in 0..BOARD_SIZE {
            game.player_shot(row, col).unwrap();
            if game.status() == GameStatus::PlayerWon {
                winner = Some(GameStatus::PlayerWon);
                break 'game;
            }
            game.computer_shot(&mut rng).unwrap();
            if game.status() == GameStatus::ComputerWon {
                winner = Some(GameStatus::ComputerWon);
                break 'game;
            }
        }
    }
    // sweeping every cell guarantees one side's fleet goes down
    assert!(winner.is_some());
    assert_eq!(game.status(), winner.unwrap());
}
