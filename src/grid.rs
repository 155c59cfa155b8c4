use anyhow::{anyhow, Result};

use std::fmt;
use std::str::FromStr;

use crate::{rules, HEIGHT, WIDTH};

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Cell {
    Empty,
    Red,
    Yellow,
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        match self {
            Cell::Empty => true,
            _ => false,
        }
    }
}

/// A player identity, two per game
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Color {
    Red,
    Yellow,
}

impl Color {
    pub fn opponent(&self) -> Color {
        match self {
            Color::Red => Color::Yellow,
            Color::Yellow => Color::Red,
        }
    }

    pub fn cell(&self) -> Cell {
        match self {
            Color::Red => Cell::Red,
            Color::Yellow => Cell::Yellow,
        }
    }
}

impl FromStr for Color {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "r" | "red" => Ok(Color::Red),
            "y" | "yellow" => Ok(Color::Yellow),
            other => Err(anyhow!("unknown color '{}', expected red or yellow", other)),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Red => write!(f, "Red"),
            Color::Yellow => write!(f, "Yellow"),
        }
    }
}

/// The playing grid, row 0 at the top and row 5 at the bottom
///
/// The search forks a hypothetical branch by copying the whole grid, so the
/// cells live in a flat `Copy` array instead of behind an allocation.
#[derive(Copy, Clone, Eq, PartialEq)]
pub struct Grid {
    cells: [Cell; WIDTH * HEIGHT], // cells are stored left-to-right, top-to-bottom
}

impl Grid {
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; WIDTH * HEIGHT],
        }
    }

    /// Builds a grid by replaying a transcript of 1-indexed columns with
    /// colors alternating from `first`
    pub fn from_moves<S: AsRef<str>>(moves: S, first: Color) -> Result<Self> {
        let mut grid = Self::new();
        let mut to_move = first;

        for column_char in moves.as_ref().chars() {
            // abort if the position was won at any earlier point
            if rules::has_four_in_a_row(&grid, to_move.opponent()) {
                return Err(anyhow!("Invalid position, game is over"));
            }
            match column_char.to_digit(10).map(|c| c as usize) {
                Some(column @ 1..=WIDTH) => {
                    let column = column - 1;
                    if !grid.place_move(column, to_move) {
                        return Err(anyhow!("Invalid move, column {} full", column + 1));
                    }
                    to_move = to_move.opponent();
                }
                _ => return Err(anyhow!("could not parse '{}' as a valid move", column_char)),
            }
        }
        Ok(grid)
    }

    /// The cell at (row, column)
    pub fn get(&self, row: usize, column: usize) -> Cell {
        self.cells[row * WIDTH + column]
    }

    /// A column is open iff it is in range and its top cell is empty
    pub fn is_legal_move(&self, column: usize) -> bool {
        column < WIDTH && self.cells[column].is_empty()
    }

    /// Drops a token into a column, filling the lowest open cell
    ///
    /// Returns false and leaves the grid untouched when the column is out of
    /// range or full.
    pub fn place_move(&mut self, column: usize, color: Color) -> bool {
        if !self.is_legal_move(column) {
            return false;
        }
        for row in (0..HEIGHT).rev() {
            if self.cells[row * WIDTH + column].is_empty() {
                self.cells[row * WIDTH + column] = color.cell();
                return true;
            }
        }
        false
    }

    /// Gravity makes a full top row imply a full grid
    pub fn is_full(&self) -> bool {
        (0..WIDTH).all(|column| !self.cells[column].is_empty())
    }

    /// The number of open cells left anywhere in the grid
    pub fn moves_remaining(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_empty()).count()
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

// compact rows instead of the derived 42-element array dump
impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        for row in 0..HEIGHT {
            for column in 0..WIDTH {
                write!(
                    f,
                    "{}",
                    match self.get(row, column) {
                        Cell::Empty => '.',
                        Cell::Red => 'R',
                        Cell::Yellow => 'Y',
                    }
                )?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
