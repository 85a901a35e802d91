// Integration tests for wordle-feedback
// These tests drive the public API and the game loop end to end

use std::io::Cursor;
use wordle_feedback::cli::CliInterface;
use wordle_feedback::*;

fn words(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_keyboard_and_rows_over_a_full_round() {
    let target = "CRANE";
    let mut round = Round::new(target, 6);

    round.submit("sheep").unwrap();
    let keyboard = round.keyboard();
    assert_eq!(keyboard.state('S'), KeyState::Eliminated);
    assert_eq!(keyboard.state('E'), KeyState::Untested);

    round.submit("train").unwrap();
    let keyboard = round.keyboard();
    assert_eq!(keyboard.state('R'), KeyState::Confirmed);
    assert_eq!(keyboard.state('N'), KeyState::Untested);

    assert_eq!(round.submit("crane"), Ok(RoundStatus::Won { attempts: 3 }));
    let board = round.board();
    assert_eq!(board.rows.len(), 3);
    assert_eq!(board.rows[2].feedback, vec![Feedback::Match; 5]);
    for c in target.chars() {
        assert_eq!(board.keyboard.state(c), KeyState::Confirmed);
    }
    // Earlier eliminations survive the winning guess
    assert_eq!(board.keyboard.state('T'), KeyState::Eliminated);
    assert_eq!(board.keyboard.state('H'), KeyState::Eliminated);
}

#[test]
fn test_row_classification_is_independent_of_history() {
    let first = classify_guess_row("CRANE", "NACRE");
    let keyboard = classify_keyboard("CRANE", &["NACRE", "CRANE"]);
    assert_eq!(classify_guess_row("CRANE", "NACRE"), first);
    assert_eq!(feedback_to_string(&first), "YYYYG");
    assert_eq!(keyboard.state('N'), KeyState::Confirmed);
}

#[test]
fn test_confirmed_letter_guessed_elsewhere_stays_confirmed() {
    // E confirmed at index 4, later guessed displaced
    let keyboard = classify_keyboard("CRANE", &["SLATE", "EERIE"]);
    assert_eq!(keyboard.state('E'), KeyState::Confirmed);
    assert_eq!(keyboard.state('A'), KeyState::Confirmed);
    assert_eq!(keyboard.state('L'), KeyState::Eliminated);
}

#[test]
fn test_keyboard_layout_reflects_history() {
    let keyboard = classify_keyboard("CRANE", &["TRAIN", "CRANE"]);
    let rows = keyboard_rows(&keyboard);
    let states: Vec<(char, KeyState)> = rows
        .iter()
        .flatten()
        .filter_map(|k| match k {
            Key::Letter(c, s) => Some((*c, *s)),
            Key::Enter | Key::Backspace => None,
        })
        .collect();
    assert_eq!(states.len(), 26);
    let confirmed: Vec<char> = states
        .iter()
        .filter(|(_, s)| *s == KeyState::Confirmed)
        .map(|(c, _)| *c)
        .collect();
    assert_eq!(confirmed, vec!['E', 'R', 'A', 'C', 'N']);
    assert_eq!(keyboard.eliminated().collect::<Vec<_>>(), vec!['I', 'T']);
}

#[test]
fn test_end_to_end_cli_win() {
    let targets = words(&["CRANE"]);
    let input = "TRAIN\nCRANE\nexit\n";
    let mut interface = CliInterface::new(Cursor::new(input));

    let summary = game_loop(&targets, 6, &mut interface);
    assert_eq!(summary.rounds_played, 1);
    assert_eq!(summary.rounds_won, 1);
}

#[test]
fn test_end_to_end_cli_eof_exits() {
    let targets = words(&["CRANE"]);
    let mut interface = CliInterface::new(Cursor::new("TRAIN\n"));

    let summary = game_loop(&targets, 6, &mut interface);
    assert_eq!(summary, SessionSummary::default());
}

#[test]
fn test_end_to_end_cli_invalid_guesses_not_counted() {
    let targets = words(&["CRANE"]);
    // Wrong length, digits and blank lines are rejected, then two real guesses lose
    let input = "CRAN\nCR4NE\n\nTRAIN\nSLATE\nexit\n";
    let mut interface = CliInterface::new(Cursor::new(input));

    let summary = game_loop(&targets, 2, &mut interface);
    assert_eq!(summary.rounds_played, 1);
    assert_eq!(summary.rounds_won, 0);
}

#[test]
fn test_end_to_end_multiple_rounds() {
    let targets = words(&["CRANE", "SLATE"]);
    let input = "crane\nnext\nslate\nnext\nTRAIN\nexit\n";
    let mut interface = CliInterface::new(Cursor::new(input));

    let summary = game_loop(&targets, 6, &mut interface);
    assert_eq!(summary.rounds_played, 2);
    assert_eq!(summary.rounds_won, 2);
}

#[test]
fn test_targets_file_to_game() {
    use std::fs::File;
    use std::io::Write;

    let path = std::env::temp_dir().join("wordle_feedback_test_targets.txt");
    {
        let mut file = File::create(&path).unwrap();
        writeln!(file, "apple").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "  lemon ").unwrap();
    }

    let targets = load_targets_from_file(&path).unwrap();
    assert_eq!(targets, words(&["APPLE", "LEMON"]));

    let input = "APPLE\nnext\nMELON\nLEMON\n";
    let mut interface = CliInterface::new(Cursor::new(input));
    let summary = game_loop(&targets, 6, &mut interface);
    assert_eq!(summary.rounds_won, 2);

    std::fs::remove_file(&path).unwrap();
}

#[test]
fn test_variable_word_length() {
    let mut round = Round::new("CAT", 6);
    assert!(round.submit("CRANE").is_err());
    assert_eq!(round.submit("ACT"), Ok(RoundStatus::InProgress));
    assert_eq!(
        classify_guess_row("CAT", "ACT"),
        vec![Feedback::PartialMatch, Feedback::PartialMatch, Feedback::Match]
    );
    assert_eq!(round.keyboard().state('T'), KeyState::Confirmed);
    assert_eq!(round.keyboard().state('A'), KeyState::Untested);
}

#[test]
fn test_guess_history_append_and_clear() {
    let mut history = GuessHistory::new();
    history.push("TRAIN".to_string());
    history.push("CRANE".to_string());
    assert_eq!(history.len(), 2);
    assert_eq!(history.last(), Some("CRANE"));
    let keyboard = classify_keyboard("CRANE", history.as_slice());
    assert_eq!(keyboard.state('C'), KeyState::Confirmed);
    history.clear();
    assert!(history.is_empty());
}
