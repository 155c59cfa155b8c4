use anyhow::anyhow;
use rand::Rng;

use std::fmt;
use std::str::FromStr;

use crate::{search::Searcher, Color, Grid, DEFAULT_DEPTH, WIDTH};

// how often the intermediate opponent plays a random move instead of searching
const MIXED_RANDOM_CHANCE: f32 = 0.3;

/// The three playing strengths of the computer opponent
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl FromStr for Difficulty {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "b" | "beginner" => Ok(Difficulty::Beginner),
            "i" | "intermediate" => Ok(Difficulty::Intermediate),
            "a" | "advanced" => Ok(Difficulty::Advanced),
            other => Err(anyhow!(
                "unknown difficulty '{}', expected beginner, intermediate or advanced",
                other
            )),
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Beginner => write!(f, "beginner"),
            Difficulty::Intermediate => write!(f, "intermediate"),
            Difficulty::Advanced => write!(f, "advanced"),
        }
    }
}

/// A computer opponent: a color, a difficulty and a search depth for its
/// calculated moves
///
/// The configuration is fixed at construction and nothing leaks between
/// games; randomness comes from whatever generator the caller passes in.
pub struct CpuPlayer {
    color: Color,
    difficulty: Difficulty,
    depth: u8,
}

impl CpuPlayer {
    /// Creates an opponent playing `color` at the default search depth
    pub fn new(color: Color, difficulty: Difficulty) -> Self {
        Self::with_depth(color, difficulty, DEFAULT_DEPTH)
    }

    /// Creates an opponent playing `color` with a specific search depth
    pub fn with_depth(color: Color, difficulty: Difficulty, depth: u8) -> Self {
        Self {
            color,
            difficulty,
            depth,
        }
    }

    /// Picks a column for the current position
    ///
    /// Beginner plays a uniformly random open column, advanced always
    /// searches, and intermediate redraws a 30/70 mix between the two on
    /// every single move. `None` means the grid is full and no move exists.
    pub fn choose_move<R: Rng>(&self, grid: &Grid, rng: &mut R) -> Option<usize> {
        match self.difficulty {
            Difficulty::Beginner => self.random_move(grid, rng),
            Difficulty::Intermediate => {
                if rng.gen::<f32>() < MIXED_RANDOM_CHANCE {
                    self.random_move(grid, rng)
                } else {
                    self.searched_move(grid)
                }
            }
            Difficulty::Advanced => self.searched_move(grid),
        }
    }

    fn random_move<R: Rng>(&self, grid: &Grid, rng: &mut R) -> Option<usize> {
        if grid.is_full() {
            return None;
        }
        // rejection sampling: an open column exists, so the retry loop ends
        loop {
            let column = rng.gen_range(0..WIDTH);
            if grid.is_legal_move(column) {
                return Some(column);
            }
        }
    }

    fn searched_move(&self, grid: &Grid) -> Option<usize> {
        Searcher::with_depth(self.color, self.depth).choose_column(grid)
    }
}
