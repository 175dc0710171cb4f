//! Child-process execution
//!
//! Small wrapper around `std::process::Command` that renders the command
//! line for verbose output and turns a non-zero exit status into an error.

use std::process::Command;

use crate::error::{SnapError, SnapResult};

/// Runs external commands as blocking child processes
#[derive(Debug, Clone, Copy, Default)]
pub struct CommandRunner {
    /// Echo every executed command line
    pub verbose: bool,
}

impl CommandRunner {
    /// Create a new CommandRunner
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    /// Run `program` with `args` and wait for it to finish
    ///
    /// When `simulate` is set, the command line is printed instead of being
    /// executed and the call reports success.
    pub fn run(&self, program: &str, args: &[String], simulate: bool) -> SnapResult<()> {
        let rendered = render_command(program, args);

        if simulate {
            println!("Skipping command: {}", rendered);
            return Ok(());
        }
        if self.verbose {
            println!("Executing command: {}", rendered);
        }

        let status = Command::new(program)
            .args(args)
            .status()
            .map_err(|e| SnapError::Execution(format!("Failed to run '{}': {}", program, e)))?;

        if !status.success() {
            return Err(SnapError::Execution(format!(
                "Command failed ({}): {}",
                status, rendered
            )));
        }
        Ok(())
    }
}

/// Render a command line for display
fn render_command(program: &str, args: &[String]) -> String {
    let mut rendered = String::from(program);
    for arg in args {
        rendered.push(' ');
        rendered.push_str(arg);
    }
    rendered
}
