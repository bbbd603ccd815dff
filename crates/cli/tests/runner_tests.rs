//! Integration tests for the sequential run loop and summary.

use release_runner_cli::runner::{run_plan, summarize};
use release_runner_core::execution::Outcome;
use release_runner_core::plan::CommandSpec;

#[test]
fn test_failing_command_does_not_stop_the_plan() {
    let temp_dir = tempfile::tempdir().unwrap();
    let plan = vec![
        CommandSpec::new("echo", &["one"]),
        CommandSpec::new("sh", &["-c", "exit 2"]),
        CommandSpec::new("echo", &["three"]),
    ];

    let results = run_plan(&plan, temp_dir.path());

    assert_eq!(results.len(), 3, "every command must be attempted");
    assert!(results[0].outcome.succeeded());
    assert!(matches!(
        results[1].outcome,
        Outcome::CommandFailed { exit_code: 2, .. }
    ));
    assert!(results[2].outcome.succeeded());
}

#[test]
fn test_missing_tool_does_not_stop_the_plan() {
    let temp_dir = tempfile::tempdir().unwrap();
    let plan = vec![
        CommandSpec::new("no-such-toolchain-binary-0000", &["publish"]),
        CommandSpec::new("echo", &["still runs"]),
    ];

    let results = run_plan(&plan, temp_dir.path());

    assert_eq!(results.len(), 2);
    assert_eq!(
        results[0].outcome,
        Outcome::ToolMissing {
            program: "no-such-toolchain-binary-0000".to_string()
        }
    );
    assert!(results[1].outcome.succeeded());
}

#[test]
fn test_summary_reflects_failures() {
    let temp_dir = tempfile::tempdir().unwrap();

    let clean_plan = vec![
        CommandSpec::new("echo", &["a"]),
        CommandSpec::new("echo", &["b"]),
    ];
    let clean_results = run_plan(&clean_plan, temp_dir.path());
    assert!(summarize(&clean_results));

    let failing_plan = vec![
        CommandSpec::new("echo", &["a"]),
        CommandSpec::new("sh", &["-c", "exit 1"]),
    ];
    let failing_results = run_plan(&failing_plan, temp_dir.path());
    assert!(!summarize(&failing_results));
}

#[test]
fn test_empty_plan_summary_is_clean() {
    assert!(summarize(&[]));
}
