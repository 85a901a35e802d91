//! Line-based front end
//!
//! Command-line options and a [`GameInterface`] that reads guesses from any
//! `BufRead` and prints rows as `G`/`Y`/`X` markers with a marked keyboard.

use clap::Parser;
use crate::feedback::{KeyboardState, feedback_to_string};
use crate::game_state::{
    Board, DEFAULT_MAX_GUESSES, GameInterface, GuessRejection, GuessRow, RoundInfo, RoundStatus,
    SessionSummary, UserAction,
};
use crate::keyboard::{Key, keyboard_rows};
use crate::info_log;
use std::io::{BufRead, ErrorKind};

/// Wordle feedback CLI options
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Target words, played in order
    pub targets: Vec<String>,

    /// Path to a newline-delimited file of target words
    #[arg(short = 'i', long = "input")]
    pub targets_path: Option<String>,

    /// Number of guesses allowed per round
    #[arg(short = 'm', long, default_value_t = DEFAULT_MAX_GUESSES)]
    pub max_guesses: usize,

    /// Use the terminal UI instead of line-based prompts
    #[arg(long)]
    pub tui: bool,

    /// Log at debug level
    #[arg(short, long)]
    pub verbose: bool,
}

#[must_use]
pub fn parse_cli() -> Cli {
    Cli::parse()
}

fn parse_action(input: &str) -> Option<UserAction> {
    let input = input.trim().to_uppercase();
    match input.as_str() {
        "" => None,
        "EXIT" => Some(UserAction::Exit),
        "NEXT" => Some(UserAction::NewGame),
        _ => Some(UserAction::Guess(input)),
    }
}

/// A guess and its feedback, e.g. `SHEEP  XXYYX`.
#[must_use]
pub fn format_row(row: &GuessRow) -> String {
    let word: String = row.letters.iter().collect();
    format!("{word}  {}", feedback_to_string(&row.feedback))
}

/// Keyboard rows with a state marker after each letter: `+` confirmed, `-` eliminated.
#[must_use]
pub fn format_keyboard(state: &KeyboardState) -> Vec<String> {
    keyboard_rows(state)
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let keys: Vec<String> = row
                .iter()
                .filter_map(|key| match key {
                    Key::Letter(c, s) => Some(format!("{c}{}", s.marker())),
                    Key::Enter | Key::Backspace => None,
                })
                .collect();
            format!("{}{}", " ".repeat(i), keys.join(" ").trim_end())
        })
        .collect()
}

/// Line-based implementation of [`GameInterface`] over any `BufRead`.
pub struct CliInterface<R: BufRead> {
    reader: R,
}

impl<R: BufRead> CliInterface<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> GameInterface for CliInterface<R> {
    fn display_round_start(&mut self, info: &RoundInfo) {
        if info.number > 1 {
            println!("\nNew game started.");
        }
        println!(
            "Round {}: guess the {}-letter word in {} tries.",
            info.number, info.word_length, info.max_guesses
        );
    }

    fn read_guess(&mut self) -> Option<UserAction> {
        println!("\nEnter your guess (or 'exit' to quit, or 'next' to start a new game):");
        let mut input = String::new();
        match self.reader.read_line(&mut input) {
            Ok(0) => Some(UserAction::Exit),
            Ok(_) => parse_action(&input),
            // The bad line has been consumed, so the next read starts fresh
            Err(e) if e.kind() == ErrorKind::InvalidData => {
                info_log!("read_guess() - Skipping unreadable line: {}", e);
                println!("Invalid input: not valid UTF-8 text.");
                None
            }
            Err(e) => {
                info_log!("read_guess() - Input error: {}, exiting", e);
                eprintln!("Failed to read input: {e}");
                Some(UserAction::Exit)
            }
        }
    }

    fn display_board(&mut self, board: &Board) {
        for row in &board.rows {
            println!("{}", format_row(row));
        }
        let remaining = board.max_guesses.saturating_sub(board.rows.len());
        println!("({remaining} guesses left)");
        for line in format_keyboard(&board.keyboard) {
            println!("{line}");
        }
    }

    fn display_invalid_guess(&mut self, rejection: &GuessRejection) {
        println!("Invalid guess. {rejection}");
    }

    fn display_round_over(&mut self, status: RoundStatus, target: &str) {
        match status {
            RoundStatus::Won { attempts } => {
                println!("Solved in {attempts} guesses! The word was {target}.");
            }
            RoundStatus::Lost => println!("Out of guesses. The word was {target}."),
            RoundStatus::InProgress => {}
        }
        println!("Type 'next' for a new round or 'exit' to quit.");
    }

    fn display_exit_message(&mut self, summary: &SessionSummary) {
        println!(
            "Exiting. Won {} of {} rounds.",
            summary.rounds_won, summary.rounds_played
        );
    }
}
