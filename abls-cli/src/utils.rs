//! Utility functions for CLI operations.

use std::env;
use std::path::Path;

/// Fallback program name when `argv[0]` is unavailable.
const DEFAULT_PROGRAM: &str = "abls";

/// Global CLI options shared across commands.
///
/// Logging flags are consumed by the logger in `main.rs` and are not carried
/// here.
#[derive(Debug, Clone)]
pub struct GlobalOptions {
    /// The program name as invoked (`argv[0]`).
    pub program: String,
}

impl GlobalOptions {
    /// Build options from the process arguments.
    pub fn new() -> Self {
        Self {
            program: program_name(),
        }
    }
}

impl Default for GlobalOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// The program name as invoked, falling back to `abls`.
pub fn program_name() -> String {
    env::args_os()
        .next()
        .filter(|arg| !arg.is_empty())
        .map_or_else(
            || DEFAULT_PROGRAM.to_string(),
            |arg| Path::new(&arg).display().to_string(),
        )
}
