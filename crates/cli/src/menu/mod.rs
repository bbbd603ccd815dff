//! Interactive menu selection and user input handling.
//!
//! This module provides the prompt-based user interface for release-runner:
//! the numbered platform menu and the working-directory prompt.
//!
//! # Behavior
//!
//! - Options render as `index. label` lines
//! - Input outside `[1, N]` or non-numeric input re-prompts with a message
//! - `q`/`quit`, or end-of-input on stdin, leaves the menu without a selection

// Export public items from submodules
pub mod input;
pub mod types;

// Re-exports for convenience
pub use input::{prompt_for_choice, prompt_for_directory};
pub use types::{parse_choice, ChoiceParse, MenuChoice};
