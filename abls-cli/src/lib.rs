//! Library exports for abls-cli.
//!
//! This module exports the CLI structure for use by tests and tooling that
//! need the argument definitions without running the binary.

pub mod cli;
pub mod commands;
pub mod error;
pub mod utils;

pub use cli::Cli;
