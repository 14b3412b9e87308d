//! Console sea battle: human versus a randomized computer opponent on a
//! fixed 6×6 grid.
//!
//! The core model (`Ship`, `Board`, `Game`) is free of I/O; rendering and
//! input live in [`ui`] and [`cli`] and only consume structured results.

mod board;
pub mod cli;
mod common;
mod config;
mod game;
mod logging;
mod ship;
pub mod ui;

pub use board::*;
pub use common::*;
pub use config::*;
pub use game::*;
pub use logging::init_logging;
pub use ship::*;
