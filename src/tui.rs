//! TUI (Terminal User Interface) module
//!
//! Renders the guess rows and the on-screen keyboard with Ratatui.
//!
//! # State Machine
//! - `EnteringGuess` → (round won or lost) → `RoundOver` → (N) → `EnteringGuess`
//! - ESC exits from any state

use crate::feedback::{Feedback, KeyState};
use crate::game_state::{
    Board, GameInterface, GuessRejection, RoundInfo, RoundStatus, SessionSummary, UserAction,
};
use crate::keyboard::{Key, keyboard_rows};
use crate::{debug_log, info_log};
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use std::io;
use std::time::Duration;

const EVENT_POLL_TIMEOUT_MS: u64 = 100;
const ROW_SPACING: u16 = 2;
const KEYBOARD_HEIGHT: u16 = 8;

const HEADER_STYLE: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);
const ERROR_STYLE: Style = Style::new().fg(Color::Red);
const MESSAGE_STYLE: Style = Style::new().fg(Color::Cyan);

/// Height of the guess board: one spaced row per allowed guess plus borders.
fn board_height(max_guesses: usize) -> u16 {
    u16::try_from(max_guesses)
        .unwrap_or(u16::MAX)
        .saturating_mul(ROW_SPACING)
        .saturating_add(2)
}

/// Vertical offset of a row inside a panel.
fn row_offset(row_index: usize) -> u16 {
    u16::try_from(row_index)
        .unwrap_or(u16::MAX)
        .saturating_mul(ROW_SPACING)
}

/// (background, foreground) for a tile.
fn tile_colors(feedback: Feedback) -> (Color, Color) {
    match feedback {
        Feedback::Match => (Color::Green, Color::Black),
        Feedback::PartialMatch => (Color::Yellow, Color::Black),
        Feedback::NoMatch => (Color::Gray, Color::White),
    }
}

/// (background, foreground) for a keyboard key.
fn key_colors(state: KeyState) -> (Color, Color) {
    match state {
        KeyState::Untested => (Color::Gray, Color::Black),
        KeyState::Eliminated => (Color::DarkGray, Color::White),
        KeyState::Confirmed => (Color::Green, Color::White),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TuiState {
    EnteringGuess,
    RoundOver,
}

struct RenderContext<'a> {
    board: Option<&'a Board>,
    current_input: &'a str,
    state: TuiState,
    message: &'a str,
    error_message: &'a str,
    status: &'a str,
}

/// Terminal interface for playing rounds.
pub struct TuiInterface {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    board: Option<Board>,
    current_input: String,
    state: TuiState,
    message: String,
    error_message: String,
    status: String,
}

impl TuiInterface {
    pub fn new() -> Result<Self, io::Error> {
        info_log!("TuiInterface::new() - Initializing TUI");
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, cursor::Hide)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        info_log!("Terminal setup complete");

        Ok(Self {
            terminal,
            board: None,
            current_input: String::new(),
            state: TuiState::EnteringGuess,
            message: String::new(),
            error_message: String::new(),
            status: "Ready to start".to_string(),
        })
    }

    pub fn cleanup(&mut self) -> Result<(), io::Error> {
        disable_raw_mode()?;
        execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            cursor::Show
        )?;
        Ok(())
    }

    fn draw(&mut self) -> Result<(), io::Error> {
        let ctx = RenderContext {
            board: self.board.as_ref(),
            current_input: &self.current_input,
            state: self.state,
            message: &self.message,
            error_message: &self.error_message,
            status: &self.status,
        };

        self.terminal.draw(|f| {
            Self::render_static(f, &ctx);
        })?;
        Ok(())
    }

    fn draw_or_log(&mut self) {
        if let Err(e) = self.draw() {
            debug_log!("Draw error: {}", e);
        }
    }

    fn render_static(f: &mut Frame, ctx: &RenderContext) {
        let guess_rows_height = ctx.board.map_or(12, |b| board_height(b.max_guesses));
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),                 // Title
                Constraint::Length(guess_rows_height), // Guess rows
                Constraint::Length(KEYBOARD_HEIGHT),   // Keyboard
                Constraint::Min(3),                    // Messages
                Constraint::Length(3),                 // Status line
                Constraint::Length(3),                 // Instructions
            ])
            .split(f.area());

        Self::render_title(f, chunks[0]);
        if let Some(board) = ctx.board {
            Self::render_board(f, chunks[1], board, ctx.current_input, ctx.state);
            Self::render_keyboard(f, chunks[2], board);
        }
        Self::render_info(f, chunks[3], ctx.message, ctx.error_message);
        Self::render_status(f, chunks[4], ctx.status);
        Self::render_instructions(f, chunks[5], ctx.state);
    }

    fn render_title(f: &mut Frame, area: Rect) {
        let title = Paragraph::new("WORDLE")
            .style(HEADER_STYLE)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(title, area);
    }

    fn render_board(
        f: &mut Frame,
        area: Rect,
        board: &Board,
        current_input: &str,
        state: TuiState,
    ) {
        let block = Block::default().title("Guesses").borders(Borders::ALL);
        let inner = block.inner(area);
        f.render_widget(block, area);

        for row_index in 0..board.max_guesses {
            let y = inner.y.saturating_add(row_offset(row_index));
            if y >= inner.bottom() {
                return;
            }

            let mut spans = vec![Span::raw("  ")];
            if let Some(row) = board.rows.get(row_index) {
                for (letter, feedback) in row.letters.iter().zip(&row.feedback) {
                    let (bg, fg) = tile_colors(*feedback);
                    spans.push(Span::styled(
                        format!(" {letter} "),
                        Style::default().fg(fg).bg(bg).add_modifier(Modifier::BOLD),
                    ));
                    spans.push(Span::raw(" "));
                }
            } else {
                let is_input_row =
                    row_index == board.rows.len() && state == TuiState::EnteringGuess;
                for i in 0..board.word_length {
                    let letter = if is_input_row {
                        current_input.chars().nth(i).unwrap_or(' ')
                    } else {
                        ' '
                    };
                    spans.push(Span::styled(
                        format!(" {letter} "),
                        Style::default().fg(Color::White).bg(Color::DarkGray),
                    ));
                    spans.push(Span::raw(" "));
                }
            }

            Self::render_line(f, inner, y, Line::from(spans));
        }
    }

    fn render_keyboard(f: &mut Frame, area: Rect, board: &Board) {
        let block = Block::default().title("Keyboard").borders(Borders::ALL);
        let inner = block.inner(area);
        f.render_widget(block, area);

        for (row_index, keys) in keyboard_rows(&board.keyboard).iter().enumerate() {
            let y = inner.y.saturating_add(row_offset(row_index));
            if y >= inner.bottom() {
                return;
            }
            let mut spans = Vec::new();
            for key in keys {
                let (bg, fg) = match key {
                    Key::Letter(_, state) => key_colors(*state),
                    Key::Enter => (Color::Yellow, Color::Black),
                    Key::Backspace => (Color::Gray, Color::Black),
                };
                spans.push(Span::styled(
                    format!(" {} ", key.label()),
                    Style::default().fg(fg).bg(bg).add_modifier(Modifier::BOLD),
                ));
                spans.push(Span::raw(" "));
            }
            Self::render_line(f, inner, y, Line::from(spans).alignment(Alignment::Center));
        }
    }

    fn render_line(f: &mut Frame, area: Rect, y: u16, line: Line) {
        f.render_widget(
            Paragraph::new(line),
            Rect {
                x: area.x,
                y,
                width: area.width,
                height: 1,
            },
        );
    }

    fn render_info(f: &mut Frame, area: Rect, message: &str, error_message: &str) {
        let mut lines = Vec::new();
        if !message.is_empty() {
            lines.push(Line::from(vec![Span::styled(message, MESSAGE_STYLE)]));
        }
        if !error_message.is_empty() {
            lines.push(Line::from(vec![Span::styled(error_message, ERROR_STYLE)]));
        }
        let paragraph = Paragraph::new(lines)
            .block(Block::default().title("Information").borders(Borders::ALL))
            .wrap(Wrap { trim: true });
        f.render_widget(paragraph, area);
    }

    fn render_status(f: &mut Frame, area: Rect, status: &str) {
        let status_text = if status.is_empty() { "Ready" } else { status };
        let paragraph = Paragraph::new(status_text)
            .style(HEADER_STYLE)
            .block(Block::default().borders(Borders::ALL).title("Status"));
        f.render_widget(paragraph, area);
    }

    fn render_instructions(f: &mut Frame, area: Rect, state: TuiState) {
        let text = match state {
            TuiState::EnteringGuess => "Type your guess | ENTER: Submit | BACKSPACE: Delete | ESC: Quit",
            TuiState::RoundOver => "N: New Game | ESC: Quit",
        };
        let paragraph = Paragraph::new(text)
            .style(Style::default().fg(Color::Gray))
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(paragraph, area);
    }

    fn handle_input(&mut self) -> Result<Option<UserAction>, io::Error> {
        if !event::poll(Duration::from_millis(EVENT_POLL_TIMEOUT_MS))? {
            return Ok(None);
        }

        let Event::Key(key) = event::read()? else {
            return Ok(None);
        };
        // Only Press events, Release and Repeat would double the input
        if key.kind != event::KeyEventKind::Press {
            return Ok(None);
        }
        debug_log!("handle_input() - Key event: {:?}", key.code);

        match self.state {
            TuiState::EnteringGuess => {
                let word_length = self.word_length();
                Ok(Self::handle_guess_input(
                    &mut self.current_input,
                    &mut self.error_message,
                    word_length,
                    key,
                ))
            }
            TuiState::RoundOver => Ok(Self::handle_round_over_input(key)),
        }
    }

    fn has_modifier_keys(key: &KeyEvent) -> bool {
        key.modifiers.contains(event::KeyModifiers::ALT)
            || key.modifiers.contains(event::KeyModifiers::CONTROL)
    }

    fn word_length(&self) -> usize {
        self.board.as_ref().map_or(0, |b| b.word_length)
    }

    /// Apply one key to the guess being typed.
    ///
    /// Letters past `word_length` are dropped. Enter hands the buffer over as a
    /// guess and leaves it empty; length checks happen in the round controller.
    fn handle_guess_input(
        current_input: &mut String,
        error_message: &mut String,
        word_length: usize,
        key: KeyEvent,
    ) -> Option<UserAction> {
        error_message.clear();
        match key.code {
            KeyCode::Esc => return Some(UserAction::Exit),
            _ if Self::has_modifier_keys(&key) => {}
            KeyCode::Char(c) if c.is_ascii_alphabetic() && current_input.len() < word_length => {
                current_input.push(c.to_ascii_uppercase());
            }
            KeyCode::Char(c) if !c.is_ascii_alphabetic() => {
                *error_message = format!("Only letters are allowed! ('{c}' is not a letter)");
            }
            KeyCode::Backspace => {
                current_input.pop();
            }
            KeyCode::Enter => {
                let guess = std::mem::take(current_input);
                info_log!("handle_guess_input() - Submitting '{}'", guess);
                return Some(UserAction::Guess(guess));
            }
            _ => {}
        }
        None
    }

    fn handle_round_over_input(key: KeyEvent) -> Option<UserAction> {
        match key.code {
            KeyCode::Char('n' | 'N') => Some(UserAction::NewGame),
            KeyCode::Esc => Some(UserAction::Exit),
            _ => None,
        }
    }
}

impl GameInterface for TuiInterface {
    fn display_round_start(&mut self, info: &RoundInfo) {
        self.current_input.clear();
        self.error_message.clear();
        self.state = TuiState::EnteringGuess;
        self.message = format!(
            "Round {}: guess the {}-letter word in {} tries.",
            info.number, info.word_length, info.max_guesses
        );
        self.status = "Enter your first guess".to_string();
        self.draw_or_log();
    }

    fn read_guess(&mut self) -> Option<UserAction> {
        loop {
            if self.draw().is_err() {
                info_log!("read_guess() - Draw failed, returning Exit");
                return Some(UserAction::Exit);
            }
            match self.handle_input() {
                Ok(Some(action)) => return Some(action),
                Ok(None) => {}
                Err(e) => {
                    info_log!("read_guess() - Input error: {}, returning Exit", e);
                    return Some(UserAction::Exit);
                }
            }
        }
    }

    fn display_board(&mut self, board: &Board) {
        let remaining = board.max_guesses.saturating_sub(board.rows.len());
        self.status = format!("{remaining} guesses left");
        self.board = Some(board.clone());
        self.draw_or_log();
    }

    fn display_invalid_guess(&mut self, rejection: &GuessRejection) {
        self.error_message = rejection.to_string();
        self.draw_or_log();
    }

    fn display_round_over(&mut self, status: RoundStatus, target: &str) {
        self.state = TuiState::RoundOver;
        self.message = match status {
            RoundStatus::Won { attempts } => format!("✓ Solved in {attempts} guesses: {target}"),
            RoundStatus::Lost | RoundStatus::InProgress => format!("Out of guesses. The word was {target}"),
        };
        self.status = "Game Over".to_string();
        self.draw_or_log();
    }

    fn display_exit_message(&mut self, summary: &SessionSummary) {
        self.message = format!(
            "Exiting. Won {} of {} rounds.",
            summary.rounds_won, summary.rounds_played
        );
        self.status = "Exiting application...".to_string();
        self.draw_or_log();
    }
}

impl Drop for TuiInterface {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}
