use anyhow::Result;
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use std::io::{stdin, stdout, Write};
use std::path::PathBuf;

use connect4_core::*;

mod display;
use display::*;

/// Two-player Connect 4 in the terminal
#[derive(Parser, Debug)]
#[command(name = "connect4", version)]
struct Cli {
    /// Session configuration file (TOML)
    #[arg(long, default_value = "connect4.toml")]
    config: PathBuf,

    /// Columns (1-indexed digits) to play before reading moves from stdin
    #[arg(long, default_value = "")]
    moves: String,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    let config = SessionConfig::load_or_default(&cli.config)?;
    debug!(?config, "loaded configuration");
    let mut session = GameSession::from_config(&config)?;

    println!("Welcome to Connect 4\n");

    let mut scripted = cli.moves.chars().filter(|c| !c.is_whitespace());
    let stdin = stdin();

    // game loop
    loop {
        if session.state() == SessionState::RoundOver {
            if !ask_yes_no("Play another round? y/n: ")? {
                break;
            }
            session.start_new_round();
        }

        draw_board(session.board())?;
        print!("{} > ", session.current_player());
        stdout().flush()?;

        let input = match scripted.next() {
            Some(c) => {
                println!("{}", c);
                c.to_string()
            }
            None => {
                let mut buffer = String::new();
                if stdin.read_line(&mut buffer)? == 0 {
                    break;
                }
                buffer
            }
        };
        let input = input.trim();
        if input.eq_ignore_ascii_case("q") {
            break;
        }

        let column_one_indexed = match input.parse::<usize>() {
            Ok(column @ 1..=WIDTH) => column,
            _ => {
                println!("Invalid move '{}', columns must be between 1 and {}", input, WIDTH);
                continue;
            }
        };

        match session.submit_move_index(column_one_indexed - 1) {
            Ok(MoveOutcome::Moved(_)) => {}
            Ok(MoveOutcome::Ignored) => println!("Column {} is full", column_one_indexed),
            Ok(MoveOutcome::Won(player)) => {
                println!("{} won!", player);
                draw_score(session.score())?;
            }
            Ok(MoveOutcome::Tie) => {
                println!("Tie!");
                draw_score(session.score())?;
            }
            Err(err) => println!("{}", err),
        }
    }

    println!();
    draw_score(session.score())?;
    Ok(())
}

fn ask_yes_no(prompt: &str) -> Result<bool> {
    let stdin = stdin();
    loop {
        let mut buffer = String::new();
        print!("{}", prompt);
        stdout().flush()?;
        if stdin.read_line(&mut buffer)? == 0 {
            return Ok(false);
        }
        match buffer.to_lowercase().chars().next() {
            Some(_letter @ 'y') => return Ok(true),
            Some(_letter @ 'n') => return Ok(false),
            _ => println!("Unknown answer given"),
        }
    }
}
