//! Blocking execution of a single planned command.
//!
//! Subprocess failures are data here, not errors: every invocation produces an
//! [`ExecutionResult`] whose [`Outcome`] tags the failure class, so a caller
//! can keep attempting the rest of its plan and aggregate a summary at the end.

use std::io::ErrorKind;
use std::path::Path;
use std::process::Command;

use log::debug;

use crate::plan::CommandSpec;

/// How a single command invocation ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Success {
        exit_code: i32,
        stdout: String,
        stderr: String,
    },
    /// The process ran but exited non-zero.
    CommandFailed {
        exit_code: i32,
        stdout: String,
        stderr: String,
    },
    /// The program could not be found on the execution path.
    ToolMissing { program: String },
    /// Any other error while spawning or waiting on the process.
    Unexpected { message: String },
}

impl Outcome {
    #[must_use]
    pub fn succeeded(&self) -> bool {
        matches!(self, Outcome::Success { .. })
    }
}

/// The outcome of one planned command, paired with the command itself.
#[derive(Debug, Clone)]
pub struct ExecutionResult {
    pub command: CommandSpec,
    pub outcome: Outcome,
}

/// Runs one command in the given working directory, blocking until it exits,
/// and classifies the outcome.
///
/// Standard output and standard error are captured as text (lossily decoded,
/// trimmed). There is no timeout: a hung process hangs the caller.
#[must_use]
pub fn run_command(spec: &CommandSpec, working_directory: &Path) -> ExecutionResult {
    debug!(
        "Running `{spec}` in `{}`",
        working_directory.display()
    );

    let output = Command::new(&spec.program)
        .args(&spec.args)
        .current_dir(working_directory)
        .output();

    let outcome = match output {
        Ok(output) => {
            // Signal-terminated processes carry no exit code
            let exit_code = output.status.code().unwrap_or(-1);
            let stdout = String::from_utf8_lossy(&output.stdout).trim().to_string();
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();

            if output.status.success() {
                Outcome::Success {
                    exit_code,
                    stdout,
                    stderr,
                }
            } else {
                Outcome::CommandFailed {
                    exit_code,
                    stdout,
                    stderr,
                }
            }
        }
        Err(error) if error.kind() == ErrorKind::NotFound => Outcome::ToolMissing {
            program: spec.program.clone(),
        },
        Err(error) => Outcome::Unexpected {
            message: error.to_string(),
        },
    };

    ExecutionResult {
        command: spec.clone(),
        outcome,
    }
}
