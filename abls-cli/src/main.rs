//! Main entry point for the abls CLI.
//!
//! Prints every input as an absolute path, one per line. Inputs come from
//! standard input (when piped) and from arguments; see `abls --help`.

mod cli;
mod commands;
mod error;
mod utils;

use clap::{CommandFactory, Parser};
use cli::Cli;
use utils::GlobalOptions;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging based on verbosity. Installing only fails when a
    // logger is already set, and nothing else in this process sets one.
    abls::init_logger(cli.verbose, cli.quiet).install().ok();

    let global = GlobalOptions::new();

    // Execute the command
    let result = cli.list.execute(&global);

    // Handle errors and set exit code
    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            if e.is_usage() {
                eprintln!();
                eprintln!("{}", Cli::command().render_help());
            }
            std::process::exit(e.exit_code());
        }
    }
}
