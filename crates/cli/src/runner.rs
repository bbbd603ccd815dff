//! Sequential plan execution with per-command reporting.
//!
//! The run loop attempts every command in the plan exactly once, in order.
//! Failures are reported as they happen and never abort the remaining
//! commands; the caller decides the process exit code from the summary.

use std::path::Path;

use crossterm::style::Stylize;
use log::info;
use release_runner_core::execution::{run_command, ExecutionResult, Outcome};
use release_runner_core::plan::CommandSpec;

const TOOLCHAIN_HINT: &str = "Please ensure the .NET 8.x SDK is installed.";
const TOOLCHAIN_DOWNLOAD_URL: &str = "https://dotnet.microsoft.com/en-us/download/dotnet/8.0";

/// Runs every command in the plan, in order, reporting each outcome as it
/// lands. Returns the result for every attempted command.
pub fn run_plan(plan: &[CommandSpec], working_directory: &Path) -> Vec<ExecutionResult> {
    plan.iter()
        .map(|command| {
            println!("\nExecuting: {command}");
            println!("Target directory: {}", working_directory.display());
            info!("Running `{command}`");

            let result = run_command(command, working_directory);
            report_result(&result);
            result
        })
        .collect()
}

fn report_result(result: &ExecutionResult) {
    match &result.outcome {
        Outcome::Success { stdout, stderr, .. } => {
            print_streams(stdout, stderr);
        }
        Outcome::CommandFailed {
            exit_code,
            stdout,
            stderr,
        } => {
            println!(
                "{}",
                format!("Error executing command: {}", result.command).red()
            );
            println!("Return code: {exit_code}");
            print_streams(stdout, stderr);
            print_toolchain_hint();
        }
        Outcome::ToolMissing { program } => {
            println!("{}", format!("Error: command `{program}` not found.").red());
            print_toolchain_hint();
        }
        Outcome::Unexpected { message } => {
            println!(
                "{}",
                format!("An unexpected error occurred: {message}").red()
            );
            print_toolchain_hint();
        }
    }
}

fn print_streams(stdout: &str, stderr: &str) {
    if !stdout.is_empty() {
        println!("StdOut:\n{stdout}\n");
    }
    if !stderr.is_empty() {
        println!("StdErr:\n{stderr}\n");
    }
}

fn print_toolchain_hint() {
    println!("{TOOLCHAIN_HINT}");
    println!("Download link:\n{TOOLCHAIN_DOWNLOAD_URL}");
}

/// Prints the per-command summary line and totals. Returns whether every
/// command succeeded.
pub fn summarize(results: &[ExecutionResult]) -> bool {
    println!("\nSummary:");
    for result in results {
        let status = if result.outcome.succeeded() {
            "ok".green()
        } else {
            "failed".red()
        };
        println!("  [{status}] {}", result.command);
    }

    let failed = results
        .iter()
        .filter(|result| !result.outcome.succeeded())
        .count();
    println!("{} command(s) attempted, {} failed.", results.len(), failed);

    failed == 0
}
