//! Filesystem access with path-carrying errors.

use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

/// Stat a path, following symlinks.
///
/// # Errors
///
/// Returns `PathNotFound`, `PermissionDenied`, or `Io` depending on why the
/// call failed.
///
/// # Examples
///
/// ```
/// use abls::path::stat;
/// use std::path::Path;
///
/// assert!(stat(Path::new(".")).unwrap().is_dir());
/// assert!(stat(Path::new("does/not/exist")).unwrap_err().is_not_found());
/// ```
pub fn stat(path: &Path) -> Result<fs::Metadata> {
    fs::metadata(path).map_err(|e| Error::from_io(path, e))
}

/// Open a directory for enumeration.
///
/// # Errors
///
/// Returns `PathNotFound`, `PermissionDenied`, or `Io` (including "not a
/// directory") depending on why the call failed.
pub fn read_dir(path: &Path) -> Result<fs::ReadDir> {
    fs::read_dir(path).map_err(|e| Error::from_io(path, e))
}
