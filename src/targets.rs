//! Round targets
//!
//! Target words come from the command line or a newline-delimited file. Input
//! is trimmed and uppercased; anything that is not a plain run of ASCII letters
//! is skipped. No dictionary check is made.

use std::fs;
use std::io;
use std::path::Path;

fn normalize_target(line: &str) -> Option<String> {
    let word = line.trim().to_uppercase();
    if !word.is_empty() && word.chars().all(|c| c.is_ascii_alphabetic()) {
        Some(word)
    } else {
        None
    }
}

pub fn load_targets_from_str(data: &str) -> Vec<String> {
    data.lines().filter_map(normalize_target).collect()
}

pub fn load_targets_from_args(args: &[String]) -> Vec<String> {
    args.iter().filter_map(|a| normalize_target(a)).collect()
}

pub fn load_targets_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let data = fs::read_to_string(path)?;
    Ok(load_targets_from_str(&data))
}
