//! Type definitions and input validation for menu selection.

/// Represents the user's menu choice.
pub enum MenuChoice {
    /// 1-based menu index of the selected option
    Index(usize),
    Quit,
}

/// Result of validating one line of raw menu input.
#[derive(Debug, PartialEq, Eq)]
pub enum ChoiceParse {
    Selected(usize),
    Quit,
    /// Non-numeric or out-of-range input; the caller should re-prompt
    Invalid,
}

/// Validates one line of menu input against an `option_count`-entry menu.
///
/// Accepts an integer strictly within `[1, option_count]`, or `q`/`quit`
/// (case-insensitive) to leave the menu.
#[must_use]
pub fn parse_choice(input: &str, option_count: usize) -> ChoiceParse {
    let trimmed = input.trim();

    if trimmed.eq_ignore_ascii_case("q") || trimmed.eq_ignore_ascii_case("quit") {
        return ChoiceParse::Quit;
    }

    match trimmed.parse::<usize>() {
        Ok(index) if (1..=option_count).contains(&index) => ChoiceParse::Selected(index),
        _ => ChoiceParse::Invalid,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_indices_are_returned_exactly() {
        for index in 1..=7 {
            assert_eq!(
                parse_choice(&index.to_string(), 7),
                ChoiceParse::Selected(index)
            );
        }
    }

    #[test]
    fn test_surrounding_whitespace_is_ignored() {
        assert_eq!(parse_choice("  3\n", 7), ChoiceParse::Selected(3));
    }

    #[test]
    fn test_out_of_range_input_is_invalid() {
        assert_eq!(parse_choice("0", 7), ChoiceParse::Invalid);
        assert_eq!(parse_choice("8", 7), ChoiceParse::Invalid);
        assert_eq!(parse_choice("-1", 7), ChoiceParse::Invalid);
        assert_eq!(parse_choice("100", 7), ChoiceParse::Invalid);
    }

    #[test]
    fn test_non_numeric_input_is_invalid() {
        assert_eq!(parse_choice("", 7), ChoiceParse::Invalid);
        assert_eq!(parse_choice("one", 7), ChoiceParse::Invalid);
        assert_eq!(parse_choice("2.5", 7), ChoiceParse::Invalid);
        assert_eq!(parse_choice("3 4", 7), ChoiceParse::Invalid);
    }

    #[test]
    fn test_quit_inputs() {
        assert_eq!(parse_choice("q", 7), ChoiceParse::Quit);
        assert_eq!(parse_choice("Q", 7), ChoiceParse::Quit);
        assert_eq!(parse_choice("quit", 7), ChoiceParse::Quit);
        assert_eq!(parse_choice(" QUIT \n", 7), ChoiceParse::Quit);
    }
}
