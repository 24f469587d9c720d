//! CLI command implementations.
//!
//! - `list`: print inputs as absolute paths
//! - `version`: print the build banner

pub mod list;
pub mod version;

pub use list::ListCommand;
