#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # abls
//!
//! A library for turning a set of inputs into a list of absolute paths.
//!
//! Inputs come from piped standard input and from arguments. A single
//! directory input is listed instead of printed, and no input at all lists
//! the current directory. Every entry is then stat'd and printed as an
//! absolute path, subject to hidden/directory/file filters.
//!
//! ## Core Types
//!
//! - [`Entry`] and [`EntryList`]: candidate paths in input order
//! - [`FilterConfig`]: which entries get printed
//! - [`pipeline`]: the collect, expand, resolve, and render stages
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use abls::{pipeline, FilterConfig};
//!
//! let inputs = pipeline::collect::from_arguments(["."]);
//! let config = FilterConfig::default().with_only_directories();
//!
//! let mut out = Vec::new();
//! pipeline::run(inputs, &config, &mut out).unwrap();
//! assert!(String::from_utf8(out).unwrap().lines().all(|l| l.ends_with('/')));
//! ```

pub mod config;
pub mod entry;
pub mod error;
pub mod logging;
pub mod path;
pub mod pipeline;

// Re-export key types at crate root for convenience
pub use config::FilterConfig;
pub use entry::{Entry, EntryList, EntryMetadata};
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use pipeline::{prepare, render, run, OutputLine};
