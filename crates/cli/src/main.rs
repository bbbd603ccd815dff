use std::process::ExitCode;

use clap::Parser;
use log::debug;
use release_runner_core::config::resolve_working_directory;
use release_runner_core::error::{Error, Result};
use release_runner_core::plan::plan_for;
use release_runner_core::target::{menu_options, MenuOption, Selection};

use release_runner_cli::cli_args::Args;
use release_runner_cli::menu::{self, MenuChoice};
use release_runner_cli::runner;

/// Determine which menu option to run, from the argument if given, otherwise
/// interactively.
fn determine_choice(args: &Args, options: &[MenuOption]) -> Result<MenuChoice> {
    match args.option {
        Some(index) => {
            if (1..=options.len()).contains(&index) {
                Ok(MenuChoice::Index(index))
            } else {
                Err(Error::OptionOutOfRange {
                    index,
                    max: options.len(),
                })
            }
        }
        None => {
            println!("Welcome to the Release Runner\n");
            menu::prompt_for_choice(options)
        }
    }
}

/// Gather the working-directory input, from the argument if given, otherwise
/// interactively. Dry runs skip the prompt and use the current directory.
fn determine_directory_input(args: &Args) -> Result<String> {
    if let Some(directory) = &args.directory {
        return Ok(directory.clone());
    }
    if args.dry_run {
        return Ok(String::new());
    }
    menu::prompt_for_directory()
}

fn execute() -> Result<bool> {
    let args = Args::parse();
    let options = menu_options();

    let selection: Selection = match determine_choice(&args, &options)? {
        MenuChoice::Index(index) => options[index - 1].selection,
        MenuChoice::Quit => return Ok(true),
    };

    let plan = plan_for(selection);
    debug!("Planned {} command(s)", plan.len());

    let directory_input = determine_directory_input(&args)?;
    let working_directory = resolve_working_directory(&directory_input)?;

    if args.dry_run {
        println!(
            "Dry run; would execute in `{}`:",
            working_directory.display()
        );
        for command in &plan {
            println!("  {command}");
        }
        return Ok(true);
    }

    let results = runner::run_plan(&plan, &working_directory);
    Ok(runner::summarize(&results))
}

fn main() -> ExitCode {
    env_logger::init();

    match execute() {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
