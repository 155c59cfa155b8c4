use crate::{grid::Cell, Color, Grid, CONNECT, HEIGHT, WIDTH};

// one scan step per orientation: vertical, horizontal and the two diagonals
const ORIENTATIONS: [(i32, i32); 4] = [(1, 0), (0, 1), (1, 1), (1, -1)];

/// A finished game
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Outcome {
    Win(Color),
    Draw,
}

/// True iff `color` has four aligned tokens anywhere in the grid
///
/// A pure predicate over the whole grid: every in-grid 4-window is checked
/// from its starting cell, in all four orientations.
pub fn has_four_in_a_row(grid: &Grid, color: Color) -> bool {
    let target = color.cell();
    for row in 0..HEIGHT {
        for column in 0..WIDTH {
            if grid.get(row, column) != target {
                continue;
            }
            for &(dr, dc) in ORIENTATIONS.iter() {
                if window_filled(grid, target, row, column, dr, dc) {
                    return true;
                }
            }
        }
    }
    false
}

/// The result of a finished game, or None while play can continue
pub fn outcome(grid: &Grid) -> Option<Outcome> {
    if has_four_in_a_row(grid, Color::Red) {
        Some(Outcome::Win(Color::Red))
    } else if has_four_in_a_row(grid, Color::Yellow) {
        Some(Outcome::Win(Color::Yellow))
    } else if grid.is_full() {
        Some(Outcome::Draw)
    } else {
        None
    }
}

// the start cell already matched, so only the remaining three are checked
fn window_filled(grid: &Grid, target: Cell, row: usize, column: usize, dr: i32, dc: i32) -> bool {
    let last_row = row as i32 + (CONNECT as i32 - 1) * dr;
    let last_column = column as i32 + (CONNECT as i32 - 1) * dc;
    // steps are unit, so an in-grid last cell keeps the whole window in-grid
    if !in_grid(last_row, last_column) {
        return false;
    }
    (1..CONNECT as i32).all(|step| {
        let r = (row as i32 + step * dr) as usize;
        let c = (column as i32 + step * dc) as usize;
        grid.get(r, c) == target
    })
}

pub(crate) fn in_grid(row: i32, column: i32) -> bool {
    row >= 0 && row < HEIGHT as i32 && column >= 0 && column < WIDTH as i32
}
