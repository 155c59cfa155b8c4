//! A Connect 4 engine with beginner, intermediate and advanced computer opponents
//!
//! The advanced opponent runs a depth-limited minimax search with alpha-beta
//! pruning over cheap copies of the board, scoring quiet positions with a
//! positional heuristic. The beginner plays uniformly random legal moves and
//! the intermediate mixes the two styles move by move.
//!
//! # Basic Usage
//!
//! ```
//! use connect4_engine::{Color, CpuPlayer, Difficulty, Grid};
//!
//!# use std::error::Error;
//!# fn main() -> Result<(), Box<dyn Error>> {
//! let grid = Grid::from_moves("445", Color::Red)?;
//! let cpu = CpuPlayer::with_depth(Color::Yellow, Difficulty::Advanced, 4);
//! let column = cpu.choose_move(&grid, &mut rand::thread_rng());
//!
//! assert!(column.is_some());
//!# Ok(())
//!# }
//! ```

use static_assertions::*;
pub use anyhow;

pub mod grid;

pub mod rules;

pub mod eval;

pub mod search;

pub mod cpu;


pub use cpu::{CpuPlayer, Difficulty};
pub use eval::evaluate;
pub use grid::{Cell, Color, Grid};
pub use rules::{has_four_in_a_row, outcome, Outcome};
pub use search::{Score, Searcher, DEFAULT_DEPTH};

/// The width of the game board in tiles
pub const WIDTH: usize = 7;

/// The height of the game board in tiles
pub const HEIGHT: usize = 6;

/// The number of aligned tiles that win the game
pub const CONNECT: usize = 4;

// a winning run must fit along every scan axis
const_assert!(CONNECT <= WIDTH);
const_assert!(CONNECT <= HEIGHT);
// move transcripts address each column with a single digit
const_assert!(WIDTH <= 9);
