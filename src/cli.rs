//! Stdin input for the player's shots.
//!
//! Coordinates are entered 1-based as "row col" and converted to the
//! zero-based indices the core works with. Everything malformed or out of
//! range is rejected here with a re-prompt; the core only ever sees valid
//! coordinates.

use std::io::{self, BufRead, Write};

use crate::config::BOARD_SIZE;

/// Parse a 1-based "row col" pair into zero-based indices. Returns `None`
/// on malformed input, zeros, out-of-range values, or trailing tokens.
pub fn parse_shot(input: &str) -> Option<(usize, usize)> {
    let mut parts = input.split_whitespace();
    let row: usize = parts.next()?.parse().ok()?;
    let col: usize = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    if row == 0 || col == 0 || row > BOARD_SIZE || col > BOARD_SIZE {
        return None;
    }
    Some((row - 1, col - 1))
}

/// Prompt until the user enters an in-range coordinate pair.
pub fn read_shot() -> io::Result<(usize, usize)> {
    let stdin = io::stdin();
    let mut line = String::new();
    loop {
        print!("Enter shot coordinates (row col, e.g. 1 2): ");
        io::stdout().flush()?;
        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "stdin closed"));
        }
        match parse_shot(line.trim()) {
            Some(coord) => return Ok(coord),
            None => println!(
                "Invalid input: enter two numbers between 1 and {}.",
                BOARD_SIZE
            ),
        }
    }
}
