//! Command-line argument parsing.
//!
//! This module defines the command-line interface structure for the `rr`
//! binary using the `clap` crate. Anything not given here is gathered
//! interactively instead.

use clap::Parser;

/// Command-line arguments for the release-runner CLI tool.
///
/// All arguments are optional: with none given, the platform menu and the
/// directory prompt run interactively.
#[derive(Parser, Debug)]
#[command(term_width = 0)] // Just to make testing across clap features easier
pub struct Args {
    /// Menu option number to run without showing the menu.
    ///
    /// 1 publishes every platform; 2-7 publish a single platform. Out-of-range
    /// values are an error rather than a re-prompt.
    #[arg(num_args(1))]
    pub option: Option<usize>,

    /// Directory containing the project file, used as the working directory.
    ///
    /// If not provided, an interactive prompt asks for it. Blank means the
    /// current directory; `~` is expanded.
    #[arg(long, short = 'C')]
    pub directory: Option<String>,

    /// Perform a dry run, which just prints out the command plan but does not execute it.
    #[arg(long, short = 'd', action)]
    pub dry_run: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_args_default_values() {
        let args = Args::parse_from(["rr"]);

        assert!(args.option.is_none());
        assert!(args.directory.is_none());
        assert!(!args.dry_run);
    }

    #[test]
    fn test_args_option_number() {
        let args = Args::parse_from(["rr", "4"]);
        assert_eq!(args.option, Some(4));
    }

    #[test]
    fn test_args_short_flags() {
        let args = Args::parse_from(["rr", "2", "-C", "/projects/app", "-d"]);

        assert_eq!(args.option, Some(2));
        assert_eq!(args.directory, Some("/projects/app".to_string()));
        assert!(args.dry_run);
    }

    #[test]
    fn test_args_long_flags() {
        let args = Args::parse_from(["rr", "--directory", "~/app", "--dry-run"]);

        assert!(args.option.is_none());
        assert_eq!(args.directory, Some("~/app".to_string()));
        assert!(args.dry_run);
    }

    #[test]
    fn test_args_non_numeric_option_is_rejected() {
        assert!(Args::try_parse_from(["rr", "everything"]).is_err());
    }
}
