//! Positional scoring for quiet positions

use crate::{grid::Cell, rules::in_grid, Color, Grid, CONNECT, HEIGHT, WIDTH};

// primary scan direction per orientation: down, right, down-left, down-right
const ORIENTATIONS: [(i32, i32); 4] = [(1, 0), (0, 1), (1, -1), (1, 1)];

/// Scores a grid for `side` by scanning a 4-cell window from every cell
/// `side` occupies, in all four orientations
///
/// Each window counts `side`'s tokens and the open cells around them; a
/// window holding any opponent token is worth nothing. A window with `own`
/// tokens and `open` holes contributes `open * 10^own + moves_remaining`,
/// so longer runs dominate and looser boards edge out cramped ones. The
/// score is never negative.
///
/// The `moves_remaining` bias repeats for every contributing window rather
/// than counting once per grid, so a board with many partial runs stacks it
/// several times over. Kept as-is: rebalancing it would shift playing
/// strength, and strength changes get measured with the matchup tool first.
///
/// Only `side`'s runs score. Opponent progress is invisible here and is
/// punished instead by the decisive outcomes the search returns.
pub fn evaluate(grid: &Grid, side: Color) -> i32 {
    let own_cell = side.cell();
    let moves_remaining = grid.moves_remaining() as i32;

    let mut score = 0;
    for row in 0..HEIGHT {
        for column in 0..WIDTH {
            if grid.get(row, column) != own_cell {
                continue;
            }
            for &(dr, dc) in ORIENTATIONS.iter() {
                score += window_score(grid, own_cell, row, column, dr, dc, moves_remaining);
            }
        }
    }
    score
}

fn window_score(
    grid: &Grid,
    own_cell: Cell,
    row: usize,
    column: usize,
    dr: i32,
    dc: i32,
    moves_remaining: i32,
) -> i32 {
    let span = CONNECT as i32 - 1;
    // scan whichever direction keeps the window in-grid, preferring the
    // primary one; corner-adjacent diagonal anchors may fit neither way
    let (dr, dc) = if in_grid(row as i32 + span * dr, column as i32 + span * dc) {
        (dr, dc)
    } else if in_grid(row as i32 - span * dr, column as i32 - span * dc) {
        (-dr, -dc)
    } else {
        return 0;
    };

    let mut own = 0u32;
    let mut open = 0i32;
    for step in 0..CONNECT as i32 {
        let r = (row as i32 + step * dr) as usize;
        let c = (column as i32 + step * dc) as usize;
        let cell = grid.get(r, c);
        if cell == own_cell {
            own += 1;
        } else if cell.is_empty() {
            open += 1;
        } else {
            // an opponent token voids the whole window
            return 0;
        }
    }
    open * 10i32.pow(own) + moves_remaining
}
