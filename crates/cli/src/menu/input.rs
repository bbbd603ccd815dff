use std::io::{stdin, stdout, Write};

use log::debug;
use release_runner_core::error::Result;
use release_runner_core::target::MenuOption;

use super::types::{parse_choice, ChoiceParse, MenuChoice};

/// Renders the menu as one `index. label` line per option.
#[must_use]
pub fn render_menu(options: &[MenuOption]) -> String {
    options
        .iter()
        .map(|option| format!("{option}\n"))
        .collect()
}

/// Prompts until the user picks a valid option or quits.
///
/// Invalid input re-prompts with a message; `q`/`quit` or a closed stdin end
/// the loop without a selection.
pub fn prompt_for_choice(options: &[MenuOption]) -> Result<MenuChoice> {
    let menu_text = render_menu(options);

    loop {
        println!(
            "Please choose an option between 1 and {} from the menu below, or [q]uit.\n",
            options.len()
        );
        print!("{menu_text}\n> ");
        stdout().flush()?;

        let mut input = String::new();
        let bytes_read = stdin().read_line(&mut input)?;
        if bytes_read == 0 {
            // stdin closed; treat like quitting
            debug!("End of input while prompting for a menu choice");
            return Ok(MenuChoice::Quit);
        }

        match parse_choice(&input, options.len()) {
            ChoiceParse::Selected(index) => return Ok(MenuChoice::Index(index)),
            ChoiceParse::Quit => return Ok(MenuChoice::Quit),
            ChoiceParse::Invalid => println!("Invalid choice.\n"),
        }
    }
}

/// Prompts for the directory to run the plan from.
///
/// Blank input means the process's current directory; resolution happens later.
pub fn prompt_for_directory() -> Result<String> {
    print!("Please enter the path containing your project file (blank for the current directory): ");
    stdout().flush()?;

    let mut input = String::new();
    stdin().read_line(&mut input)?;

    Ok(input.trim().to_string())
}
