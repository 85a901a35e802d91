//! On-screen keyboard layout
//!
//! QWERTY rows with ENTER and BACKSPACE on the bottom row. Letter keys carry
//! the [`KeyState`] derived from the guess history.

use crate::feedback::{KeyState, KeyboardState};

pub const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Letter(char, KeyState),
    Enter,
    Backspace,
}

impl Key {
    #[must_use]
    pub fn label(self) -> String {
        match self {
            Self::Letter(c, _) => c.to_string(),
            Self::Enter => "ENTER".to_string(),
            Self::Backspace => "BKSP".to_string(),
        }
    }
}

impl KeyState {
    /// Visual state of a key: default, disabled or correct.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Untested => "default",
            Self::Eliminated => "disabled",
            Self::Confirmed => "correct",
        }
    }

    /// Single-character marker used by the line-based interface.
    #[must_use]
    pub const fn marker(self) -> char {
        match self {
            Self::Untested => ' ',
            Self::Eliminated => '-',
            Self::Confirmed => '+',
        }
    }
}

/// Lay out the keyboard with each letter resolved against `state`.
#[must_use]
pub fn keyboard_rows(state: &KeyboardState) -> Vec<Vec<Key>> {
    KEYBOARD_ROWS
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let mut keys: Vec<Key> = row
                .chars()
                .map(|c| Key::Letter(c, state.state(c)))
                .collect();
            if i == KEYBOARD_ROWS.len() - 1 {
                keys.insert(0, Key::Enter);
                keys.push(Key::Backspace);
            }
            keys
        })
        .collect()
}
