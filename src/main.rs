use clap::Parser;
use rand::rngs::SmallRng;
use rand::SeedableRng;

use seabattle::{cli, ui, BoardError, Game, GameStatus, ShotOutcome};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Fix RNG seed for reproducible games (e.g., --seed 12345)
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    seabattle::init_logging();
    let args = Cli::parse();

    let mut rng = match args.seed {
        Some(seed) => {
            log::info!("using fixed seed {}", seed);
            SmallRng::seed_from_u64(seed)
        }
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    };

    let mut game = Game::new(&mut rng)?;
    println!("Sea battle! Sink the computer's fleet before it sinks yours.");

    loop {
        println!();
        ui::print_player_view(&game);
        println!();

        let outcome = player_turn(&mut game)?;
        println!("{}", ui::outcome_message(outcome));
        if game.status() == GameStatus::PlayerWon {
            println!("\nYou win! The computer's fleet is destroyed.");
            break;
        }

        let ((row, col), outcome) = game.computer_shot(&mut rng)?;
        match outcome {
            ShotOutcome::Miss => println!("The computer missed at {} {}.", row + 1, col + 1),
            _ => println!(
                "The computer fired at {} {}: {}",
                row + 1,
                col + 1,
                ui::outcome_message(outcome)
            ),
        }
        if game.status() == GameStatus::ComputerWon {
            println!("\nThe computer wins. Your fleet is destroyed.");
            break;
        }
    }

    println!("\nFinal boards:");
    ui::print_player_view(&game);
    Ok(())
}

/// Prompt for the player's shot, re-prompting on cells already fired at, and
/// resolve it. Malformed and out-of-range input never reaches the game.
fn player_turn(game: &mut Game) -> anyhow::Result<ShotOutcome> {
    loop {
        let (row, col) = cli::read_shot()?;
        match game.player_shot(row, col) {
            Ok(outcome) => return Ok(outcome),
            Err(err @ BoardError::DuplicateShot { .. }) => println!("{}", err),
            Err(err) => return Err(err.into()),
        }
    }
}
