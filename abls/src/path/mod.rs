//! Path handling for the abls pipeline.
//!
//! # Key Concepts
//!
//! ## Normalization
//!
//! Normalization turns a path as given by the operator into an absolute,
//! lexically clean path: relative paths are joined onto the current
//! directory and `.`/`..` components are resolved. Symlinks are preserved.
//!
//! ## Hidden entries
//!
//! An entry is hidden when its base name starts with a dot. The base name is
//! taken after trailing separators are removed, so `dir/.` and `..` are
//! hidden too.
//!
//! ## Filesystem access
//!
//! [`stat`] and [`read_dir`] wrap the standard library calls and map their
//! failures onto [`crate::Error`] variants that carry the offending path.
//!
//! # Examples
//!
//! ```
//! use abls::path::normalize;
//! use std::path::Path;
//!
//! assert!(normalize::is_hidden_path(Path::new("project/.env")));
//! assert!(normalize::absolute(Path::new("project")).unwrap().is_absolute());
//! ```

pub mod normalize;
mod stat;

#[cfg(all(test, unix, feature = "property-tests"))]
mod proptests;

pub use normalize::{absolute, base_name, is_hidden_name, is_hidden_path};
pub use stat::{read_dir, stat};
