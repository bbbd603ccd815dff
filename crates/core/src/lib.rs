//! Release Runner Core Library
//!
//! This crate provides the core functionality for release-runner, a menu-driven
//! launcher that sequences `dotnet` publish and package commands for a set of
//! target platforms and reports per-command success or failure.
//!
//! # Key Features
//!
//! - **Target Table**: The fixed set of publishable platforms and their menu options
//! - **Plan Derivation**: Deterministic mapping from a selection to an ordered command plan
//! - **Execution**: Blocking single-command invocation with tagged outcome classification
//! - **Working Directory Resolution**: Tilde expansion and current-directory fallback
//! - **Error Handling**: Error types for the failure modes around prompting and paths
//!
//! # Examples
//!
//! Deriving and running the plan for a single platform:
//!
//! ```no_run
//! use release_runner_core::config::resolve_working_directory;
//! use release_runner_core::execution::run_command;
//! use release_runner_core::plan::plan_for;
//! use release_runner_core::target::{Platform, Selection};
//!
//! let plan = plan_for(Selection::Single(Platform::WinX64));
//! let working_directory = resolve_working_directory("~/projects/my-app")?;
//! for command in &plan {
//!     let result = run_command(command, &working_directory);
//!     println!("{}: succeeded = {}", result.command, result.outcome.succeeded());
//! }
//! # Ok::<(), release_runner_core::error::Error>(())
//! ```

pub mod config;
pub mod error;
pub mod execution;
pub mod plan;
pub mod target;
