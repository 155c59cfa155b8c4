//! Plays a series of computer-vs-computer games and reports the tallies
//!
//! This is the measuring stick for difficulty and heuristic tuning: run a
//! series before and after a change to see the strength shift.

use anyhow::{anyhow, Result};
use indicatif::*;
use rayon::prelude::*;

use std::env;
use std::sync::mpsc::*;
use std::thread;
use std::time::*;

use connect4_engine::*;

// one finished game from side A's point of view
#[derive(Copy, Clone)]
enum GameResult {
    Win,
    Loss,
    Tie,
}

enum Message {
    Result(GameResult),
    Finish,
}

fn print_usage() {
    println!("Plays a series of computer-vs-computer games and reports the tallies.");
    println!();
    println!("Usage:");
    println!("  matchup <difficulty-a> <difficulty-b> [--games N] [--depth D]");
    println!();
    println!("Difficulties: beginner, intermediate, advanced (or b/i/a)");
    println!();
    println!("Example:");
    println!("  matchup advanced beginner --games 200 --depth 6");
}

fn main() -> Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();
    if args.len() < 2 {
        print_usage();
        return Err(anyhow!("two difficulties are required"));
    }

    let side_a: Difficulty = args[0].parse()?;
    let side_b: Difficulty = args[1].parse()?;

    let mut games: u32 = 100;
    let mut depth: u8 = DEFAULT_DEPTH;

    let mut i = 2;
    while i < args.len() {
        match args[i].as_str() {
            "--games" | "-g" => {
                i += 1;
                games = args
                    .get(i)
                    .ok_or_else(|| anyhow!("--games needs a value"))?
                    .parse()?;
            }
            "--depth" | "-d" => {
                i += 1;
                depth = args
                    .get(i)
                    .ok_or_else(|| anyhow!("--depth needs a value"))?
                    .parse()?;
            }
            other => {
                print_usage();
                return Err(anyhow!("unknown argument '{}'", other));
            }
        }
        i += 1;
    }

    println!(
        "{} vs {}, {} games at search depth {}",
        side_a, side_b, games, depth
    );

    let start = Instant::now();
    let mut next_time = start;

    let (tx, rx) = channel();
    thread::spawn(move || {
        (0..games)
            .into_par_iter()
            .for_each_with(tx.clone(), |tx, game| {
                // alternate who moves first so neither side keeps the tempo edge
                let result = play_game(side_a, side_b, depth, game % 2 == 0);
                tx.send(Message::Result(result)).unwrap();
            });
        tx.send(Message::Finish).unwrap();
    });

    let progress = ProgressBar::new(games as u64);
    progress.set_style(
        ProgressStyle::default_bar()
            .template("Playing games: {bar:40.cyan/blue} {msg} ~{eta} remaining")
            .progress_chars("█▓▒░  "),
    );

    let mut wins = 0u32;
    let mut losses = 0u32;
    let mut ties = 0u32;
    let mut delta = 0;

    let mut running = true;
    while running {
        match rx.recv()? {
            Message::Finish => running = false,
            Message::Result(result) => {
                match result {
                    GameResult::Win => wins += 1,
                    GameResult::Loss => losses += 1,
                    GameResult::Tie => ties += 1,
                }
                delta += 1;
            }
        }
        if Instant::now() > next_time {
            progress.inc(delta);
            delta = 0;
            progress.set_message(&format!("({} / {})", progress.position(), progress.length()));
            next_time += Duration::from_millis(100);
        }
    }
    progress.finish();

    let finish = Instant::now();
    let win_rate = if games == 0 {
        0.0
    } else {
        wins as f64 / games as f64 * 100.0
    };
    println!(
        "{} vs {}: {} wins, {} losses, {} ties",
        side_a, side_b, wins, losses, ties
    );
    println!("Win rate for {}: {:.1}%", side_a, win_rate);
    println!("Series completed in {}", HumanDuration(finish - start));

    Ok(())
}

// one full game; red always opens, `a_first` says whether side A holds red
fn play_game(side_a: Difficulty, side_b: Difficulty, depth: u8, a_first: bool) -> GameResult {
    let (first, second) = if a_first {
        (side_a, side_b)
    } else {
        (side_b, side_a)
    };
    let red = CpuPlayer::with_depth(Color::Red, first, depth);
    let yellow = CpuPlayer::with_depth(Color::Yellow, second, depth);

    let mut rng = rand::thread_rng();
    let mut grid = Grid::new();
    let mut to_move = Color::Red;

    // 42 tokens fill the grid, so the loop is bounded
    for _ in 0..WIDTH * HEIGHT {
        let mover = match to_move {
            Color::Red => &red,
            Color::Yellow => &yellow,
        };
        let column = match mover.choose_move(&grid, &mut rng) {
            Some(column) => column,
            None => break,
        };
        if !grid.place_move(column, to_move) {
            break;
        }
        if has_four_in_a_row(&grid, to_move) {
            let a_won = (to_move == Color::Red) == a_first;
            return if a_won {
                GameResult::Win
            } else {
                GameResult::Loss
            };
        }
        if grid.is_full() {
            break;
        }
        to_move = to_move.opponent();
    }
    GameResult::Tie
}
