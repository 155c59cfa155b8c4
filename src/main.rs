use anyhow::{bail, Result};

use std::io::{stdin, stdout, Stdin, Write};

use connect4_engine::*;

mod screen;
use screen::*;

fn main() -> Result<()> {
    let stdin = stdin();
    let mut rng = rand::thread_rng();

    println!("Welcome to Connect 4\n");
    show_rules();
    println!();

    // choose a color; the player always moves first
    let player_color = loop {
        let mut buffer = String::new();
        print!("Play as (r)ed or (y)ellow? ");
        stdout().flush().expect("failed to flush to stdout!");
        stdin.read_line(&mut buffer)?;
        match buffer.parse::<Color>() {
            Ok(color) => break color,
            Err(err) => println!("{}", err),
        }
    };
    let cpu_color = player_color.opponent();

    // choose an opponent strength
    let difficulty = loop {
        let mut buffer = String::new();
        print!("Difficulty, (b)eginner, (i)ntermediate or (a)dvanced? ");
        stdout().flush().expect("failed to flush to stdout!");
        stdin.read_line(&mut buffer)?;
        match buffer.parse::<Difficulty>() {
            Ok(difficulty) => break difficulty,
            Err(err) => println!("{}", err),
        }
    };

    let cpu = CpuPlayer::new(cpu_color, difficulty);
    let mut scores = ScoreBoard::new();

    println!(
        "\nYou play {} against a {} computer. You move first.\n",
        player_color, difficulty
    );

    // one game per pass
    'session: loop {
        let mut grid = Grid::new();

        // one player move and one computer reply per pass
        'game: loop {
            draw_grid(&grid).expect("Failed to draw board!");

            // read a column, handling the letter commands at the same prompt
            let column = loop {
                let mut input_str = String::new();
                print!("Column > ");
                stdout().flush().expect("failed to flush to stdout!");
                stdin.read_line(&mut input_str)?;

                if let Ok(column) = input_str.trim().parse::<usize>() {
                    break column;
                }
                match input_str.to_lowercase().chars().next() {
                    Some(_letter @ 'h') => show_rules(),
                    Some(_letter @ 'a') => show_about(),
                    Some(_letter @ 'r') => {
                        if confirm(
                            &stdin,
                            "Resetting forfeits this game to the computer. Continue? y/n: ",
                        )? {
                            println!("Game forfeited\n");
                            scores.losses += 1;
                            continue 'session;
                        }
                    }
                    Some(_letter @ 'q') => {
                        if confirm(&stdin, "Quit and show your stats? y/n: ")? {
                            break 'session;
                        }
                    }
                    _ => println!("Invalid number: {}", input_str),
                }
            };

            if column < 1 || column > WIDTH {
                println!(
                    "Invalid move, column {} out of range. Columns must be between 1 and {}",
                    column, WIDTH
                );
                continue 'game;
            }
            if !grid.place_move(column - 1, player_color) {
                println!("Invalid move, column {} full", column);
                continue 'game;
            }

            if has_four_in_a_row(&grid, player_color) {
                draw_grid(&grid).expect("Failed to draw board!");
                println!("You win!");
                scores.wins += 1;
                break 'game;
            }
            if grid.is_full() {
                draw_grid(&grid).expect("Failed to draw board!");
                println!("Draw!");
                scores.ties += 1;
                break 'game;
            }

            println!("Computer is thinking...");
            let reply = match cpu.choose_move(&grid, &mut rng) {
                Some(column) => column,
                None => bail!("the computer was asked to move on a finished game"),
            };
            if !grid.place_move(reply, cpu_color) {
                bail!("the computer chose unplayable column {}", reply + 1);
            }
            println!("Computer drops a token in column {}", reply + 1);

            if has_four_in_a_row(&grid, cpu_color) {
                draw_grid(&grid).expect("Failed to draw board!");
                println!("Computer wins!");
                scores.losses += 1;
                break 'game;
            }
            if grid.is_full() {
                draw_grid(&grid).expect("Failed to draw board!");
                println!("Draw!");
                scores.ties += 1;
                break 'game;
            }
        }

        println!(
            "Session so far: {} won, {} tied, {} lost\n",
            scores.wins, scores.ties, scores.losses
        );

        loop {
            let mut buffer = String::new();
            print!("Play another game? y/n: ");
            stdout().flush().expect("failed to flush to stdout!");
            stdin.read_line(&mut buffer)?;
            match buffer.to_lowercase().chars().next() {
                Some(_letter @ 'y') => continue 'session,
                Some(_letter @ 'n') => break 'session,
                _ => println!("Unknown answer given"),
            }
        }
    }

    show_stats(&scores)?;
    Ok(())
}

// a yes/no question, asked until answered
fn confirm(stdin: &Stdin, prompt: &str) -> Result<bool> {
    loop {
        let mut buffer = String::new();
        print!("{}", prompt);
        stdout().flush().expect("failed to flush to stdout!");
        stdin.read_line(&mut buffer)?;
        match buffer.to_lowercase().chars().next() {
            Some(_letter @ 'y') => return Ok(true),
            Some(_letter @ 'n') => return Ok(false),
            _ => println!("Unknown answer given"),
        }
    }
}
