//! Guess feedback engine
//!
//! Pure functions that classify guesses against a fixed target word:
//! - [`classify_guess_row`] colours the tiles of one submitted guess
//! - [`classify_keyboard`] aggregates every guess so far into per-letter key states
//!
//! Nothing here holds state between calls. The guess history is owned by the
//! caller and passed in on every call.

use std::collections::BTreeSet;

/// Per-position classification of a guessed letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feedback {
    /// Right letter, right position (green)
    Match,
    /// Letter exists somewhere in the target, not at this position (yellow)
    PartialMatch,
    /// Letter does not occur in the target (gray)
    NoMatch,
}

impl Feedback {
    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            Self::Match => 'G',
            Self::PartialMatch => 'Y',
            Self::NoMatch => 'X',
        }
    }
}

/// Render a row classification as a `G`/`Y`/`X` string, e.g. `"XYGXX"`.
#[must_use]
pub fn feedback_to_string(feedback: &[Feedback]) -> String {
    feedback.iter().map(|f| f.to_char()).collect()
}

/// Keyboard-level state of a letter, aggregated over the whole guess history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum KeyState {
    /// No evidence yet
    #[default]
    Untested,
    /// Guessed, never matched a position, and absent from the target
    Eliminated,
    /// Matched its target position in at least one guess
    Confirmed,
}

/// Evidence gathered from a guess history.
///
/// The two sets are kept apart and only resolved in [`KeyboardState::state`],
/// so a later elimination can never hide an earlier confirmation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyboardState {
    confirmed: BTreeSet<char>,
    eliminated: BTreeSet<char>,
}

impl KeyboardState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve a letter: Confirmed > Eliminated > Untested.
    #[must_use]
    pub fn state(&self, letter: char) -> KeyState {
        if self.confirmed.contains(&letter) {
            KeyState::Confirmed
        } else if self.eliminated.contains(&letter) {
            KeyState::Eliminated
        } else {
            KeyState::Untested
        }
    }

    /// States for `A..=Z` in alphabetical order.
    pub fn alphabet(&self) -> impl Iterator<Item = (char, KeyState)> + '_ {
        ('A'..='Z').map(|letter| (letter, self.state(letter)))
    }

    /// Fold one guess into the evidence sets.
    ///
    /// Positions past the end of the target are ignored.
    pub fn record(&mut self, target: &str, guess: &str) {
        for (g, t) in guess.chars().zip(target.chars()) {
            if g == t {
                self.confirmed.insert(g);
            } else if !target.contains(g) {
                self.eliminated.insert(g);
            }
        }
    }

    /// Letters that resolve to [`KeyState::Eliminated`].
    pub fn eliminated(&self) -> impl Iterator<Item = char> + '_ {
        self.eliminated
            .iter()
            .copied()
            .filter(|c| !self.confirmed.contains(c))
    }
}

/// Classify every letter of the keyboard against `target` given all `guesses`.
///
/// Guesses are expected to be pre-validated (same length, uppercase). Any letter
/// not seen in a guess resolves to [`KeyState::Untested`].
#[must_use]
pub fn classify_keyboard<S: AsRef<str>>(target: &str, guesses: &[S]) -> KeyboardState {
    let mut state = KeyboardState::new();
    for guess in guesses {
        state.record(target, guess.as_ref());
    }
    state
}

/// Classify each position of `guess` against `target`.
///
/// Every occurrence of a letter that exists anywhere in the target is a
/// [`Feedback::PartialMatch`] unless it sits on its own position. Repeated
/// letters are not budgeted against the number of occurrences in the target.
#[must_use]
pub fn classify_guess_row(target: &str, guess: &str) -> Vec<Feedback> {
    let target_chars: Vec<char> = target.chars().collect();
    guess
        .chars()
        .enumerate()
        .map(|(i, g)| {
            if target_chars.get(i) == Some(&g) {
                Feedback::Match
            } else if target_chars.contains(&g) {
                Feedback::PartialMatch
            } else {
                Feedback::NoMatch
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use Feedback::{Match, NoMatch, PartialMatch};

    #[test]
    fn test_empty_history_is_untested() {
        let guesses: [&str; 0] = [];
        let state = classify_keyboard("CRANE", &guesses);
        assert!(state.alphabet().all(|(_, s)| s == KeyState::Untested));
    }

    #[test]
    fn test_exact_guess_confirms_every_letter() {
        let state = classify_keyboard("CRANE", &["CRANE"]);
        for c in "CRANE".chars() {
            assert_eq!(state.state(c), KeyState::Confirmed);
        }
        assert_eq!(classify_guess_row("CRANE", "CRANE"), vec![Match; 5]);
    }

    #[test]
    fn test_sheep_against_crane() {
        let row = classify_guess_row("CRANE", "SHEEP");
        // Both E's are displaced: neither lands on index 4
        assert_eq!(row, vec![NoMatch, NoMatch, PartialMatch, PartialMatch, NoMatch]);

        let state = classify_keyboard("CRANE", &["SHEEP"]);
        assert_eq!(state.state('E'), KeyState::Untested);
        assert_eq!(state.state('S'), KeyState::Eliminated);
        assert_eq!(state.state('H'), KeyState::Eliminated);
        assert_eq!(state.state('P'), KeyState::Eliminated);
    }

    #[test]
    fn test_train_then_crane() {
        let state = classify_keyboard("CRANE", &["TRAIN"]);
        assert_eq!(state.state('R'), KeyState::Confirmed);
        assert_eq!(state.state('A'), KeyState::Confirmed);
        assert_eq!(state.state('T'), KeyState::Eliminated);
        assert_eq!(state.state('I'), KeyState::Eliminated);
        assert_eq!(state.state('N'), KeyState::Untested);

        let state = classify_keyboard("CRANE", &["TRAIN", "CRANE"]);
        for c in "CRANE".chars() {
            assert_eq!(state.state(c), KeyState::Confirmed);
        }
        assert_eq!(state.state('T'), KeyState::Eliminated);
        assert_eq!(state.state('I'), KeyState::Eliminated);
    }

    #[test]
    fn test_confirmation_is_monotonic() {
        let mut guesses = vec!["CLOTH"];
        assert_eq!(classify_keyboard("CRANE", &guesses).state('C'), KeyState::Confirmed);
        guesses.push("ROUND");
        guesses.push("BACON");
        assert_eq!(classify_keyboard("CRANE", &guesses).state('C'), KeyState::Confirmed);
    }

    #[test]
    fn test_absent_letter_never_confirmed() {
        let state = classify_keyboard("CRANE", &["ZZZZZ", "FUZZY"]);
        assert_eq!(state.state('Z'), KeyState::Eliminated);
        assert_eq!(classify_guess_row("CRANE", "ZZZZZ"), vec![NoMatch; 5]);
    }

    #[test]
    fn test_confirmed_beats_eliminated_on_lookup() {
        let mut state = KeyboardState::new();
        state.confirmed.insert('Q');
        state.eliminated.insert('Q');
        assert_eq!(state.state('Q'), KeyState::Confirmed);
        assert_eq!(state.eliminated().count(), 0);
    }

    #[test]
    fn test_duplicate_letters_are_not_budgeted() {
        // Target has a single L, both displaced L's are still yellow
        let row = classify_guess_row("CLOTH", "LLAMA");
        assert_eq!(row, vec![PartialMatch, Match, NoMatch, NoMatch, NoMatch]);
    }

    #[test]
    fn test_long_guess_positions_ignored_by_keyboard() {
        let state = classify_keyboard("CAT", &["CATSZ"]);
        assert_eq!(state.state('S'), KeyState::Untested);
        assert_eq!(state.state('Z'), KeyState::Untested);
        assert_eq!(state.state('C'), KeyState::Confirmed);
    }

    #[test]
    fn test_unknown_letters_resolve_untested() {
        let state = classify_keyboard("CRANE", &["CRANE"]);
        assert_eq!(state.state('?'), KeyState::Untested);
        assert_eq!(state.state('c'), KeyState::Untested);
    }

    #[test]
    fn test_classify_keyboard_idempotent() {
        let guesses = ["TRAIN", "SHEEP"];
        assert_eq!(
            classify_keyboard("CRANE", &guesses),
            classify_keyboard("CRANE", &guesses)
        );
    }

    #[test]
    fn test_feedback_to_string() {
        assert_eq!(feedback_to_string(&[NoMatch, PartialMatch, Match]), "XYG");
        assert_eq!(Match.to_char(), 'G');
    }
}
