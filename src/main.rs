use std::io;
use std::process::ExitCode;
use wordle_feedback::cli::{CliInterface, parse_cli};
use wordle_feedback::logging::init_logging;
use wordle_feedback::tui::TuiInterface;
use wordle_feedback::{game_loop, info_log, load_targets_from_args, load_targets_from_file};

fn main() -> ExitCode {
    let cli = parse_cli();

    match init_logging(cli.verbose) {
        Ok(Some(path)) => info_log!("Logging to {}", path.display()),
        Ok(None) => {}
        Err(e) => eprintln!("Failed to initialise logging: {e}"),
    }

    let mut targets = load_targets_from_args(&cli.targets);
    if let Some(path) = &cli.targets_path {
        match load_targets_from_file(path) {
            Ok(words) => targets.extend(words),
            Err(e) => {
                eprintln!("Failed to load targets from '{path}': {e}");
                return ExitCode::FAILURE;
            }
        }
    }
    if targets.is_empty() {
        eprintln!("No target words given. Pass words as arguments or use --input <FILE>.");
        return ExitCode::FAILURE;
    }
    if cli.max_guesses == 0 {
        eprintln!("--max-guesses must be at least 1.");
        return ExitCode::FAILURE;
    }
    info_log!("Loaded {} targets", targets.len());

    if cli.tui {
        let mut interface = match TuiInterface::new() {
            Ok(interface) => interface,
            Err(e) => {
                eprintln!("Failed to initialise terminal: {e}");
                return ExitCode::FAILURE;
            }
        };
        game_loop(&targets, cli.max_guesses, &mut interface);
    } else {
        let stdin = io::stdin();
        let mut interface = CliInterface::new(stdin.lock());
        game_loop(&targets, cli.max_guesses, &mut interface);
    }
    ExitCode::SUCCESS
}
