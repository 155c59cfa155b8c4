use anyhow::Result;
use crossterm::{
    style::{style, Attribute, Color, PrintStyledContent},
    QueueableCommand,
};

use std::io::{stdout, Write};

use crate::{Cell, Grid, HEIGHT, WIDTH};

/// Draws the grid as a coloured block with a 1-indexed column header
pub fn draw_grid(grid: &Grid) -> Result<()> {
    let mut stdout = stdout();

    let header: String = (1..=WIDTH).map(|x| x.to_string()).collect();
    stdout.queue(PrintStyledContent(style(header + "\n")))?;

    // row 0 is the top of the board, so rows print in index order
    for row in 0..HEIGHT {
        for column in 0..WIDTH {
            stdout.queue(PrintStyledContent(
                style("O")
                    .attribute(Attribute::Bold)
                    .on(Color::DarkBlue)
                    .with(match grid.get(row, column) {
                        Cell::Red => Color::Red,
                        Cell::Yellow => Color::Yellow,
                        Cell::Empty => Color::DarkBlue,
                    }),
            ))?;
        }
        stdout.queue(PrintStyledContent(style("\n")))?;
    }
    stdout.flush()?;
    Ok(())
}

/// Win/tie/loss tallies for one sitting, counted from the player's side
#[derive(Default)]
pub struct ScoreBoard {
    pub wins: u32,
    pub ties: u32,
    pub losses: u32,
}

impl ScoreBoard {
    pub fn new() -> Self {
        Self::default()
    }

    fn games(&self) -> u32 {
        self.wins + self.ties + self.losses
    }

    /// Share of completed games the player won, 0.0 before any game ends
    pub fn win_percent(&self) -> f64 {
        if self.games() == 0 {
            return 0.0;
        }
        self.wins as f64 / self.games() as f64 * 100.0
    }
}

/// The end-of-session summary
pub fn show_stats(scores: &ScoreBoard) -> Result<()> {
    let mut stdout = stdout();
    stdout.queue(PrintStyledContent(
        style("\nGAME STATS\n").attribute(Attribute::Bold),
    ))?;
    stdout.flush()?;

    println!("Games won:  {}", scores.wins);
    println!("Games tied: {}", scores.ties);
    println!("Games lost: {}", scores.losses);
    println!("Win rate:   {:.1}%", scores.win_percent());
    Ok(())
}

pub fn show_rules() {
    println!("How to play:");
    println!(
        "Enter a column from 1 to {} to drop a token into it. Tokens fall to",
        WIDTH
    );
    println!("the lowest open cell. Connect four of your tokens in a line, in any");
    println!("direction, before the computer does.");
    println!();
    println!("At the move prompt you can also enter:");
    println!("  h - show these rules");
    println!("  a - about this game");
    println!("  r - reset the board, forfeiting the game");
    println!("  q - quit and show your session stats");
}

pub fn show_about() {
    println!("Connect 4 v{}", env!("CARGO_PKG_VERSION"));
    println!("A terminal remake of the classic board game with three computer opponents.");
}
