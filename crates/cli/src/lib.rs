//! Release Runner CLI Library
//!
//! This crate provides the command-line interface for release-runner, a
//! menu-driven launcher for `dotnet` publish and package commands. It handles
//! user interaction, plan execution with per-command reporting, and the final
//! run summary.
//!
//! # Key Features
//!
//! - **Interactive Menu**: Numbered platform menu with validation and a quit path
//! - **Direct Selection**: Pass a menu option number to skip the menu entirely
//! - **Sequential Execution**: Every planned command is attempted, failures never
//!   abort the rest of the plan
//! - **Failure Reporting**: Per-command classification (command failure, missing
//!   toolchain, unexpected error) with a remediation hint
//!
//! # Examples
//!
//! The CLI binary (`rr`) can be used in several ways:
//!
//! ```bash
//! # Interactive mode - shows the platform menu, then asks for a directory
//! rr
//!
//! # Publish win-x64 directly from a given project directory
//! rr 2 --directory ~/projects/my-app
//!
//! # Dry run (derive and print the plan, execute nothing)
//! rr 1 --dry-run
//! ```

pub mod cli_args;
pub mod menu;
pub mod runner;
