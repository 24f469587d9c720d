//! List command implementation.
//!
//! This module implements the default (and only) action: collect inputs from
//! standard input and arguments, run them through the library pipeline, and
//! print the surviving absolute paths to standard output.

use crate::commands::version;
use crate::error::CliError;
use crate::utils::GlobalOptions;
use abls::pipeline::collect;
use abls::FilterConfig;
use clap::Args;
use std::io;
use std::path::PathBuf;

/// Print inputs as absolute paths.
#[derive(Args)]
pub struct ListCommand {
    /// Show only directories
    #[arg(short = 'd', long = "dirs")]
    pub dirs: bool,

    /// Show only files
    #[arg(short = 'f', long = "files")]
    pub files: bool,

    /// Show hidden entries
    #[arg(short = 'a', long = "all")]
    pub all: bool,

    /// Print version information and exit
    #[arg(short = 'v', long = "version")]
    pub version: bool,

    /// Paths to print; a single directory is listed instead
    #[arg(value_name = "FILES")]
    pub paths: Vec<PathBuf>,
}

impl ListCommand {
    /// Build the filter configuration for these flags.
    pub fn filter_config(&self) -> Result<FilterConfig, CliError> {
        Ok(FilterConfig::new(self.all, self.dirs, self.files)?)
    }

    /// Execute the list command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        // 1. Reject conflicting filters before anything else
        let config = self.filter_config()?;

        // 2. The banner bypasses the pipeline
        if self.version {
            let stdout = io::stdout();
            version::write_banner(&global.program, &mut stdout.lock())?;
            return Ok(());
        }

        // 3. Collect inputs: piped stdin first, then arguments
        let mut inputs = collect::from_stdin();
        inputs.extend(collect::from_arguments(self.paths));
        log::debug!("collected {} inputs", inputs.len());

        // 4. Run the pipeline straight into stdout
        let stdout = io::stdout();
        let mut out = stdout.lock();
        abls::run(inputs, &config, &mut out)?;

        Ok(())
    }
}
