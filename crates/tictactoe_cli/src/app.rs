//! Line-oriented play loop.
//!
//! Reads one command per line: `row col` (0-based), a keypad digit 1-9,
//! `r` to restart or `q` to quit. Rejected moves change nothing; the loop
//! prints a short hint and asks again.

use anyhow::Result;
use std::io::{BufRead, Write};
use tictactoe_core::{GameEngine, Mark, Mode, Outcome};
use tracing::{debug, instrument};

/// One parsed line of input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// Place a mark at row, column.
    Cell(usize, usize),
    /// Start a new game with the same settings.
    Restart,
    /// Leave the loop.
    Quit,
    /// Nothing recognisable.
    Unknown,
}

/// Parses a line of user input.
#[instrument]
pub fn parse_input(line: &str) -> Input {
    let line = line.trim().to_lowercase();
    match line.as_str() {
        "q" | "quit" | "exit" => return Input::Quit,
        "r" | "restart" | "new" => return Input::Restart,
        _ => {}
    }

    let numbers: Vec<usize> = match line
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|s| !s.is_empty())
        .map(str::parse)
        .collect()
    {
        Ok(numbers) => numbers,
        Err(_) => return Input::Unknown,
    };

    match numbers.as_slice() {
        [digit @ 1..=9] => Input::Cell((digit - 1) / 3, (digit - 1) % 3),
        [row, col] => Input::Cell(*row, *col),
        _ => Input::Unknown,
    }
}

/// Tally of finished games in one session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    /// Games won by X.
    pub x_wins: usize,
    /// Games won by O.
    pub o_wins: usize,
    /// Drawn games.
    pub draws: usize,
}

impl SessionSummary {
    fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Won(Mark::X) => self.x_wins += 1,
            Outcome::Won(Mark::O) => self.o_wins += 1,
            Outcome::Draw => self.draws += 1,
            Outcome::Ongoing => {}
        }
    }
}

/// Renders the board with row and column labels.
pub fn render<R>(engine: &GameEngine<R>) -> String {
    let mut out = String::from("   0 1 2\n");
    for (row, squares) in engine.board_snapshot().iter().enumerate() {
        let cells: Vec<String> = squares.iter().map(|s| s.symbol().to_string()).collect();
        out.push_str(&format!("{}  {}\n", row, cells.join(" ")));
    }
    out
}

/// Describes whose turn it is or how the game ended.
pub fn status<R>(engine: &GameEngine<R>) -> String {
    let header = match engine.mode() {
        Mode::HumanVsHuman => "Human vs human".to_string(),
        Mode::HumanVsComputer => format!("Human vs computer ({})", engine.difficulty()),
    };
    let state = match engine.outcome() {
        Outcome::Ongoing => format!("{} to move", engine.current_turn()),
        Outcome::Won(mark) if engine.computer_mark() == Some(mark) => "Computer wins!".to_string(),
        Outcome::Won(mark) => format!("{} wins!", mark),
        Outcome::Draw => "Draw!".to_string(),
    };
    format!("{header}: {state}")
}

/// Runs the loop until `q` or end of input.
#[instrument(skip_all)]
pub fn run<B: BufRead, W: Write, R: rand::Rng>(
    engine: &mut GameEngine<R>,
    input: B,
    out: &mut W,
) -> Result<SessionSummary> {
    let mut summary = SessionSummary::default();
    let mut lines = input.lines();

    loop {
        write!(out, "\n{}{}\n> ", render(engine), status(engine))?;
        out.flush()?;

        let Some(line) = lines.next() else {
            writeln!(out)?;
            break;
        };

        match parse_input(&line?) {
            Input::Quit => break,
            Input::Restart => engine.reset(),
            Input::Unknown => writeln!(out, "Enter `row col`, a digit 1-9, r or q.")?,
            Input::Cell(row, col) => match engine.try_apply_move(row, col) {
                Ok(report) => {
                    if let Some(reply) = report.computer {
                        writeln!(out, "Computer plays {}", reply.position)?;
                    }
                    if report.outcome.is_terminal() {
                        summary.record(report.outcome);
                        debug!(outcome = %report.outcome, "Game over");
                        writeln!(out, "Press r to play again or q to quit.")?;
                    }
                }
                Err(e) => writeln!(out, "Ignored: {e}")?,
            },
        }
    }

    writeln!(
        out,
        "X won {}, O won {}, {} drawn.",
        summary.x_wins, summary.o_wins, summary.draws
    )?;
    Ok(summary)
}
