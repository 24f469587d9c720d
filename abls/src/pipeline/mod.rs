//! The path-resolution pipeline.
//!
//! # Stages
//!
//! 1. **Collect**: standard input lines (when piped), then arguments
//! 2. **Expand**: a lone directory input becomes its immediate children
//! 3. **Fall back**: no input at all lists the current directory
//! 4. **Resolve**: every entry not produced by a listing is stat'd
//! 5. **Render**: entries are filtered and printed, in input order
//!
//! Every stage before rendering fails fast; rendering never fails.
//!
//! # Examples
//!
//! ```no_run
//! use abls::pipeline::{self, collect};
//! use abls::FilterConfig;
//!
//! let mut inputs = collect::from_stdin();
//! inputs.extend(collect::from_arguments(std::env::args_os().skip(1)));
//!
//! let config = FilterConfig::default();
//! let mut stdout = std::io::stdout().lock();
//! let printed = pipeline::run(inputs, &config, &mut stdout).unwrap();
//! eprintln!("{printed} paths");
//! ```

pub mod collect;
pub mod expand;
pub mod render;
pub mod resolve;

#[cfg(all(test, unix, feature = "property-tests"))]
mod proptests;

use std::io::Write;

use crate::config::FilterConfig;
use crate::entry::EntryList;
use crate::error::Result;

pub use render::{render, write_lines, OutputLine, Render};

/// Run the expansion, fallback, and resolution stages.
///
/// The current directory is listed only when there were no inputs at all; a
/// lone empty directory yields an empty list. The returned list is fully
/// resolved and in print order.
///
/// # Errors
///
/// Returns the first stat, listing, or current-directory error.
pub fn prepare(inputs: EntryList) -> Result<EntryList> {
    let mut list = if inputs.is_empty() {
        expand::expand_current_directory()?
    } else {
        expand::expand_if_single_directory(inputs)?
    };

    resolve::resolve_all(&mut list)?;
    Ok(list)
}

/// Prepare `inputs` and write the filtered lines to `out`.
///
/// Returns the number of lines written. Output errors end the output early
/// but are not reported as failures.
///
/// # Errors
///
/// Returns any error from [`prepare`]; nothing is written in that case.
pub fn run<W: Write + ?Sized>(
    inputs: EntryList,
    config: &FilterConfig,
    out: &mut W,
) -> Result<usize> {
    let list = prepare(inputs)?;
    let written = write_lines(render(&list, config), out);
    log::debug!("printed {written} of {} entries", list.len());
    Ok(written)
}
