//! Path normalization functions.
//!
//! This module provides functionality to normalize paths by:
//! - Converting relative paths to absolute paths
//! - Resolving `.` and `..` components lexically
//!
//! It also answers the "is this entry hidden" question from a path's base
//! name. Nothing here touches the filesystem except reading the current
//! directory.

use std::env;
use std::ffi::OsStr;
use std::path::{is_separator, Component, Path, PathBuf, MAIN_SEPARATOR_STR};

use crate::error::{Error, Result};

/// Resolve `.` and `..` components in an absolute path.
///
/// A `..` at the root stays at the root, so `/..` resolves to `/`.
///
/// # Examples
///
/// ```
/// use abls::path::normalize::resolve_components;
/// use std::path::{Path, PathBuf};
///
/// let resolved = resolve_components(Path::new("/a/./b/../c"));
/// assert_eq!(resolved, PathBuf::from("/a/c"));
///
/// let resolved = resolve_components(Path::new("/a/../../c"));
/// assert_eq!(resolved, PathBuf::from("/c"));
/// ```
#[must_use]
pub fn resolve_components(path: &Path) -> PathBuf {
    let mut result = PathBuf::new();

    for component in path.components() {
        match component {
            Component::Prefix(prefix) => {
                // Windows prefix
                result.push(prefix.as_os_str());
            }
            Component::RootDir => {
                result.push(component);
            }
            Component::Normal(c) => {
                result.push(c);
            }
            Component::CurDir => {}
            Component::ParentDir => {
                // Popping fails at the root, which is where `..` should stop.
                result.pop();
            }
        }
    }

    result
}

/// Normalize a path to absolute form.
///
/// Relative paths are joined onto the current directory; the result then
/// has its `.` and `..` components resolved. Symlinks are not followed.
///
/// # Errors
///
/// Returns an error if the path is relative and the current directory cannot
/// be determined.
///
/// # Examples
///
/// ```
/// use abls::path::normalize::absolute;
/// use std::path::Path;
///
/// let normalized = absolute(Path::new("./src")).unwrap();
/// assert!(normalized.is_absolute());
/// assert!(normalized.ends_with("src"));
/// ```
pub fn absolute(path: &Path) -> Result<PathBuf> {
    if path.as_os_str().is_empty() {
        return Err(Error::InvalidPath {
            path: path.to_path_buf(),
            reason: "Path is empty".to_string(),
        });
    }

    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        let cwd = env::current_dir().map_err(|source| Error::CurrentDirectory { source })?;
        cwd.join(path)
    };

    Ok(resolve_components(&joined))
}

/// The last element of a path, after trailing separators are removed.
///
/// Unlike [`Path::file_name`], `.` and `..` are returned as-is, and a path
/// made only of separators yields a single separator. Non-UTF-8 bytes are
/// replaced, which is harmless for the leading-dot check this feeds.
///
/// # Examples
///
/// ```
/// use abls::path::normalize::base_name;
/// use std::path::Path;
///
/// assert_eq!(base_name(Path::new("dir/file.txt")), "file.txt");
/// assert_eq!(base_name(Path::new("dir/sub/")), "sub");
/// assert_eq!(base_name(Path::new("dir/.")), ".");
/// ```
#[must_use]
pub fn base_name(path: &Path) -> String {
    let lossy = path.to_string_lossy();
    let trimmed = lossy.trim_end_matches(is_separator);
    if trimmed.is_empty() {
        return if lossy.is_empty() {
            String::new()
        } else {
            MAIN_SEPARATOR_STR.to_string()
        };
    }

    match trimmed.rfind(is_separator) {
        Some(idx) => trimmed[idx + 1..].to_string(),
        None => trimmed.to_string(),
    }
}

/// Returns true if `name` starts with a dot.
///
/// # Examples
///
/// ```
/// use abls::path::normalize::is_hidden_name;
/// use std::ffi::OsStr;
///
/// assert!(is_hidden_name(OsStr::new(".git")));
/// assert!(!is_hidden_name(OsStr::new("src")));
/// ```
#[must_use]
pub fn is_hidden_name(name: &OsStr) -> bool {
    name.as_encoded_bytes().first() == Some(&b'.')
}

/// Returns true if the base name of `path` starts with a dot.
#[must_use]
pub fn is_hidden_path(path: &Path) -> bool {
    base_name(path).starts_with('.')
}
