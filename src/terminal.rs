//! Line-based terminal front end.

use anyhow::{Context, Result};
use random_tictactoe::{Board, Coord, Mark, MoveOutcome, Participant, Side};
use random_tictactoe_cli::{GameEvent, Orchestrator};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tracing::{debug, instrument};

/// A line of user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// Play at (row, col), zero-indexed.
    Cell(usize, usize),
    /// Start another round.
    New,
    /// Show the commands.
    Help,
    /// Leave.
    Quit,
}

/// Parses `row col`, `row,col`, `new`, `help` or `quit`.
pub fn parse_input(line: &str) -> Option<Input> {
    let line = line.trim().to_lowercase();
    match line.as_str() {
        "new" | "n" => return Some(Input::New),
        "help" | "h" | "?" => return Some(Input::Help),
        "quit" | "q" | "exit" => return Some(Input::Quit),
        _ => {}
    }

    let mut parts = line
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|part| !part.is_empty());
    let row = parts.next()?.parse().ok()?;
    let col = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some(Input::Cell(row, col))
}

/// Renders the board with row and column labels, starring `highlight` cells.
pub fn render_board(board: &Board, highlight: &[Coord]) -> String {
    let size = board.size();
    let header = (0..size)
        .map(|col| format!(" {} ", col))
        .collect::<Vec<_>>()
        .join(" ");
    let separator = vec!["---"; size].join("+");

    let mut out = format!("   {}\n", header);
    for (row, cells) in board.rows().enumerate() {
        if row > 0 {
            out.push_str(&format!("   {}\n", separator));
        }
        let line = cells
            .iter()
            .enumerate()
            .map(|(col, cell)| {
                if highlight.contains(&Coord::new(row, col)) {
                    format!("*{}*", cell)
                } else {
                    format!(" {} ", cell)
                }
            })
            .collect::<Vec<_>>()
            .join("|");
        out.push_str(&format!("{}  {}\n", row, line));
    }
    out
}

const HELP: &str = "Commands: '<row> <col>' to play (e.g. '1 1' for the center), 'new', 'quit'.";

/// Runs the session until the user quits or stdin closes.
#[instrument(skip_all)]
pub async fn run(
    mut orchestrator: Orchestrator,
    events: mpsc::UnboundedReceiver<GameEvent>,
) -> Result<()> {
    let human = orchestrator.game().human().symbol();
    let computer = orchestrator.game().computer().symbol();
    let printer = tokio::spawn(print_events(events, human, computer));

    println!("{}", HELP);
    orchestrator.start().await?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await.context("Failed to read input")? {
        debug!(%line, "Input");
        match parse_input(&line) {
            Some(Input::Cell(row, col)) => {
                orchestrator.handle_cell(row, col).await?;
            }
            Some(Input::New) => orchestrator.new_round().await?,
            Some(Input::Help) => println!("{}", HELP),
            Some(Input::Quit) => break,
            None => println!("Didn't understand '{}'. {}", line.trim(), HELP),
        }
    }

    let tally = orchestrator.tally();
    drop(orchestrator);
    printer.await.context("Event printer panicked")?;
    println!("Final score: {}", tally);
    Ok(())
}

async fn print_events(mut events: mpsc::UnboundedReceiver<GameEvent>, human: Mark, computer: Mark) {
    let mut last_board = Board::default();
    while let Some(event) = events.recv().await {
        match event {
            GameEvent::Started => println!("You are {}, the computer is {}.", human, computer),
            GameEvent::BoardChanged(board) => {
                print!("\n{}", render_board(&board, &[]));
                last_board = board;
            }
            GameEvent::TurnChanged(Side::Human) => println!("Your move ({}).", human),
            GameEvent::TurnChanged(Side::Computer) => {}
            GameEvent::ComputerThinking => println!("Computer ({}) is thinking...", computer),
            GameEvent::Rejected(reason) => println!("{}", reason),
            GameEvent::RoundOver {
                outcome,
                message,
                tally,
            } => {
                if let MoveOutcome::Win { cells, .. } = &outcome {
                    print!("\n{}", render_board(&last_board, cells));
                }
                println!("{} ({})", message, tally);
                println!("Type 'new' to play again or 'quit' to leave.");
            }
        }
    }
}
