//! Interactive confirmation
//!
//! Destructive restores are gated behind a yes/no question. The question is
//! an injected capability so tests can script the answers instead of
//! touching the terminal.

use std::io::{self, BufRead, Write};

use crate::error::{SnapError, SnapResult};

/// A yes/no question with an optional default answer
pub trait Confirm {
    /// Ask `question`; returns the user's decision
    ///
    /// `default` is returned on empty input; with no default, empty input
    /// re-asks the question.
    fn confirm(&self, question: &str, default: Option<bool>) -> SnapResult<bool>;
}

/// Terminal-backed confirmation reading answers from stdin
pub struct StdinConfirm;

impl Confirm for StdinConfirm {
    fn confirm(&self, question: &str, default: Option<bool>) -> SnapResult<bool> {
        let hint = match default {
            Some(true) => "[Y/n]",
            Some(false) => "[y/N]",
            None => "[y/n]",
        };

        let stdin = io::stdin();
        let mut line = String::new();
        loop {
            print!("{} {} ", question, hint);
            io::stdout()
                .flush()
                .map_err(|e| SnapError::Io(format!("Failed to flush stdout: {}", e)))?;

            line.clear();
            let bytes = stdin
                .lock()
                .read_line(&mut line)
                .map_err(|e| SnapError::Io(format!("Failed to read answer: {}", e)))?;
            if bytes == 0 {
                return Err(SnapError::Io("Unexpected end of input".to_string()));
            }

            match parse_answer(line.trim(), default) {
                Some(answer) => return Ok(answer),
                None => println!("Please respond with \"yes\" or \"no\" (or \"y\" or \"n\")."),
            }
        }
    }
}

/// Interpret one line of input; `None` means ask again
fn parse_answer(answer: &str, default: Option<bool>) -> Option<bool> {
    if answer.is_empty() {
        return default;
    }
    match answer.to_lowercase().as_str() {
        "y" | "ye" | "yes" => Some(true),
        "n" | "no" => Some(false),
        _ => None,
    }
}
