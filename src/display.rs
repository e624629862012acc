use anyhow::Result;
use crossterm::{
    style::{style, Attribute, Color, PrintStyledContent},
    QueueableCommand,
};

use std::io::{stdout, Write};

use connect4_core::{Board, Cell, Player, Score, WIDTH};

/// Draws the board with column numbers (1-indexed) above it.
pub fn draw_board(board: &Board) -> Result<()> {
    let mut stdout = stdout();

    let cols: String = (1..=WIDTH).map(|x| x.to_string()).collect();
    stdout.queue(PrintStyledContent(style(cols + "\n")))?;

    for row in board.rows() {
        for cell in row.iter() {
            stdout.queue(PrintStyledContent(
                style("O")
                    .attribute(Attribute::Bold)
                    .on(Color::DarkBlue)
                    .with(match cell {
                        Cell::PlayerOne => Color::Red,
                        Cell::PlayerTwo => Color::Yellow,
                        Cell::Empty => Color::DarkBlue,
                    }),
            ))?;
        }
        stdout.queue(PrintStyledContent(style("\n")))?;
    }
    stdout.flush()?;
    Ok(())
}

/// Prints both tallies, crowning the player in the lead.
pub fn draw_score(score: &Score) -> Result<()> {
    let mut stdout = stdout();
    let leader = score.leader();

    for &player in [Player::One, Player::Two].iter() {
        let label = format!("{}: {}  ", player, score.get(player));
        let styled = if leader == Some(player) {
            style(format!("\u{1F451}{}", label)).attribute(Attribute::Bold)
        } else {
            style(label)
        };
        stdout.queue(PrintStyledContent(styled))?;
    }
    if score.draws() > 0 {
        stdout.queue(PrintStyledContent(style(format!("Ties: {}", score.draws()))))?;
    }
    stdout.queue(PrintStyledContent(style("\n")))?;
    stdout.flush()?;
    Ok(())
}
