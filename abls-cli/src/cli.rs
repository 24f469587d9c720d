//! CLI structure and argument definitions.
//!
//! This module defines the main CLI structure using clap's derive macros.
//! `abls` has no subcommands: the listing arguments are flattened into the
//! top-level parser next to the logging options.

use crate::commands::ListCommand;
use clap::Parser;

/// Print inputs as absolute filesystem paths.
#[derive(Parser)]
#[command(name = "abls")]
#[command(
    about = "Print inputs as absolute filesystem paths",
    long_about = "Print each input as an absolute path, one per line. Inputs are read \
                  from standard input (when piped) and from arguments. A single directory \
                  is listed instead of printed; no input lists the current directory.",
    disable_version_flag = true
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long)]
    pub quiet: bool,

    #[command(flatten)]
    pub list: ListCommand,
}
