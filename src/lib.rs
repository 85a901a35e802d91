// Library interface for wordle-feedback
// The feedback engine is pure; everything else is a front end consuming it

pub mod cli;
pub mod feedback;
pub mod game_state;
pub mod keyboard;
pub mod logging;
pub mod targets;
pub mod tui;

// Re-export commonly used items for easier testing
pub use feedback::{
    Feedback, KeyState, KeyboardState, classify_guess_row, classify_keyboard, feedback_to_string,
};
pub use game_state::{GameInterface, GuessHistory, Round, RoundStatus, SessionSummary, game_loop};
pub use keyboard::{KEYBOARD_ROWS, Key, keyboard_rows};
pub use targets::{load_targets_from_args, load_targets_from_file, load_targets_from_str};
