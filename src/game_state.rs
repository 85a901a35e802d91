//! Round controller
//!
//! Owns the target and guess history for a round, validates raw input before
//! it reaches the feedback engine, and drives a [`GameInterface`].

use crate::feedback::{Feedback, KeyboardState, classify_guess_row};
use crate::{debug_log, info_log};
use std::fmt;

pub const DEFAULT_MAX_GUESSES: usize = 6;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserAction {
    Guess(String),
    Exit,
    NewGame,
}

/// Ordered guesses of the current round. Append-only until cleared.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GuessHistory {
    guesses: Vec<String>,
}

impl GuessHistory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, guess: String) {
        self.guesses.push(guess);
    }

    pub fn clear(&mut self) {
        self.guesses.clear();
    }

    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.guesses
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.guesses.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.guesses.is_empty()
    }

    #[must_use]
    pub fn last(&self) -> Option<&str> {
        self.guesses.last().map(String::as_str)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundStatus {
    InProgress,
    Won { attempts: usize },
    Lost,
}

impl RoundStatus {
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// Why a raw guess was not recorded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessRejection {
    WrongLength { expected: usize, actual: usize },
    NotAlphabetic,
    RoundOver,
}

impl fmt::Display for GuessRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongLength { expected, .. } => {
                write!(f, "Guess must be exactly {expected} letters.")
            }
            Self::NotAlphabetic => write!(f, "Only letters are allowed."),
            Self::RoundOver => {
                write!(f, "Round is over. Type 'next' for a new round or 'exit' to quit.")
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessRow {
    pub letters: Vec<char>,
    pub feedback: Vec<Feedback>,
}

/// Snapshot handed to the rendering surface after every change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    pub rows: Vec<GuessRow>,
    pub keyboard: KeyboardState,
    pub word_length: usize,
    pub max_guesses: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundInfo {
    pub number: usize,
    pub word_length: usize,
    pub max_guesses: usize,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub rounds_played: usize,
    pub rounds_won: usize,
}

impl SessionSummary {
    fn record(&mut self, status: RoundStatus) {
        match status {
            RoundStatus::Won { .. } => {
                self.rounds_played += 1;
                self.rounds_won += 1;
            }
            RoundStatus::Lost => self.rounds_played += 1,
            RoundStatus::InProgress => {}
        }
    }
}

/// One round against a fixed target.
///
/// The keyboard classification is cached and extended on every accepted guess.
/// Since the history only grows within a round, this always equals
/// `classify_keyboard(target, history)`.
#[derive(Debug, Clone)]
pub struct Round {
    target: String,
    history: GuessHistory,
    max_guesses: usize,
    keyboard: KeyboardState,
}

impl Round {
    /// A round always allows at least one guess; a limit of 0 is raised to 1.
    #[must_use]
    pub fn new(target: &str, max_guesses: usize) -> Self {
        Self {
            target: target.to_uppercase(),
            history: GuessHistory::new(),
            max_guesses: max_guesses.max(1),
            keyboard: KeyboardState::new(),
        }
    }

    /// Start over against a new target. Clears the history.
    pub fn reset(&mut self, target: &str) {
        self.target = target.to_uppercase();
        self.history.clear();
        self.keyboard = KeyboardState::new();
    }

    #[must_use]
    pub fn target(&self) -> &str {
        &self.target
    }

    #[must_use]
    pub fn word_length(&self) -> usize {
        self.target.chars().count()
    }

    #[must_use]
    pub fn max_guesses(&self) -> usize {
        self.max_guesses
    }

    #[must_use]
    pub fn history(&self) -> &GuessHistory {
        &self.history
    }

    #[must_use]
    pub fn keyboard(&self) -> &KeyboardState {
        &self.keyboard
    }

    #[must_use]
    pub fn status(&self) -> RoundStatus {
        match self.history.last() {
            Some(last) if last == self.target => RoundStatus::Won {
                attempts: self.history.len(),
            },
            _ if self.history.len() >= self.max_guesses => RoundStatus::Lost,
            _ => RoundStatus::InProgress,
        }
    }

    /// Normalise and validate raw input, then append it to the history.
    pub fn submit(&mut self, input: &str) -> Result<RoundStatus, GuessRejection> {
        if self.status().is_over() {
            return Err(GuessRejection::RoundOver);
        }
        let guess = input.trim().to_uppercase();
        if !guess.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(GuessRejection::NotAlphabetic);
        }
        let actual = guess.chars().count();
        let expected = self.word_length();
        if actual != expected {
            return Err(GuessRejection::WrongLength { expected, actual });
        }

        self.keyboard.record(&self.target, &guess);
        self.history.push(guess);
        Ok(self.status())
    }

    #[must_use]
    pub fn board(&self) -> Board {
        let rows = self
            .history
            .as_slice()
            .iter()
            .map(|guess| GuessRow {
                letters: guess.chars().collect(),
                feedback: classify_guess_row(&self.target, guess),
            })
            .collect();
        Board {
            rows,
            keyboard: self.keyboard.clone(),
            word_length: self.word_length(),
            max_guesses: self.max_guesses,
        }
    }

    fn info(&self, number: usize) -> RoundInfo {
        RoundInfo {
            number,
            word_length: self.word_length(),
            max_guesses: self.max_guesses,
        }
    }
}

/// Rendering surface driven by [`game_loop`].
pub trait GameInterface {
    fn display_round_start(&mut self, info: &RoundInfo);
    /// `None` means the input was not actionable and the loop should ask again.
    fn read_guess(&mut self) -> Option<UserAction>;
    fn display_board(&mut self, board: &Board);
    fn display_invalid_guess(&mut self, rejection: &GuessRejection);
    fn display_round_over(&mut self, status: RoundStatus, target: &str);
    fn display_exit_message(&mut self, summary: &SessionSummary);
}

/// Play rounds over `targets` in order until the interface asks to exit.
///
/// `NewGame` moves on to the next target, wrapping around at the end.
pub fn game_loop<I: GameInterface>(
    targets: &[String],
    max_guesses: usize,
    interface: &mut I,
) -> SessionSummary {
    let mut summary = SessionSummary::default();
    let Some(first) = targets.first() else {
        info_log!("game_loop() - No targets, nothing to play");
        interface.display_exit_message(&summary);
        return summary;
    };

    let mut index = 0;
    let mut number = 1;
    let mut round = Round::new(first, max_guesses);
    info_log!(
        "game_loop() - Starting round {} ({} letters, {} guesses)",
        number,
        round.word_length(),
        round.max_guesses()
    );
    interface.display_round_start(&round.info(number));
    interface.display_board(&round.board());

    loop {
        let Some(action) = interface.read_guess() else {
            continue;
        };
        debug_log!("game_loop() - Action: {:?}", action);

        match action {
            UserAction::Exit => {
                info_log!(
                    "game_loop() - Exiting after {} rounds ({} won)",
                    summary.rounds_played,
                    summary.rounds_won
                );
                interface.display_exit_message(&summary);
                break;
            }
            UserAction::NewGame => {
                index = (index + 1) % targets.len();
                number += 1;
                round.reset(&targets[index]);
                info_log!("game_loop() - Starting round {}", number);
                interface.display_round_start(&round.info(number));
                interface.display_board(&round.board());
            }
            UserAction::Guess(guess) => match round.submit(&guess) {
                Err(rejection) => {
                    debug_log!("game_loop() - Rejected '{}': {:?}", guess, rejection);
                    interface.display_invalid_guess(&rejection);
                }
                Ok(status) => {
                    interface.display_board(&round.board());
                    if status.is_over() {
                        info_log!("game_loop() - Round {} over: {:?}", number, status);
                        summary.record(status);
                        interface.display_round_over(status, round.target());
                    }
                }
            },
        }
    }
    summary
}
