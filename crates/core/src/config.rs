//! Working-directory resolution for plan execution.
//!
//! The user supplies the directory as free text; this module turns it into a
//! usable path, expanding shell variables like `~`.

use std::env;
use std::path::PathBuf;

use crate::error::{Error, Result};

/// Resolves the user-supplied working directory.
///
/// Empty or whitespace-only input falls back to the process's current
/// directory. Shell expansions like `~` are resolved.
///
/// # Errors
///
/// Returns an error if the current directory cannot be determined, or if the
/// resolved path does not name a directory.
pub fn resolve_working_directory(input: &str) -> Result<PathBuf> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return env::current_dir().map_err(Error::CurrentDir);
    }

    let expanded = shellexpand::tilde(trimmed).to_string();
    let path = PathBuf::from(expanded);

    if path.is_dir() {
        Ok(path)
    } else {
        Err(Error::NotADirectory {
            path: path.display().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_resolves_to_current_directory() {
        let result = resolve_working_directory("").unwrap();
        assert_eq!(result, env::current_dir().unwrap());
    }

    #[test]
    fn test_whitespace_only_input_resolves_to_current_directory() {
        let result = resolve_working_directory("   ").unwrap();
        assert_eq!(result, env::current_dir().unwrap());
    }

    #[test]
    fn test_existing_directory_is_returned_as_is() {
        let temp_dir = tempfile::tempdir().unwrap();
        let input = temp_dir.path().to_str().unwrap();

        let result = resolve_working_directory(input).unwrap();
        assert_eq!(result, temp_dir.path());
    }

    #[test]
    fn test_tilde_is_expanded() {
        let result = resolve_working_directory("~").unwrap();
        assert!(!result.to_string_lossy().starts_with('~'));
    }

    #[test]
    fn test_missing_directory_is_an_error() {
        let temp_dir = tempfile::tempdir().unwrap();
        let missing = temp_dir.path().join("does-not-exist");

        let result = resolve_working_directory(missing.to_str().unwrap());
        assert!(matches!(result, Err(Error::NotADirectory { .. })));
    }
}
