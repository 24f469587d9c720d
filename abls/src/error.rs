//! Error types for the abls library.
//!
//! Every failure in the pipeline is fatal to the invocation, so a single
//! error enum built with `thiserror` covers all stages.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Result type alias for operations that may fail with an abls error.
///
/// # Examples
///
/// ```
/// use abls::{Error, Result};
///
/// fn example_operation() -> Result<usize> {
///     Ok(3)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the abls library.
#[derive(Debug, Error)]
pub enum Error {
    /// A path does not exist.
    #[error("path not found: {}", path.display())]
    PathNotFound {
        /// The path that was not found.
        path: PathBuf,
    },

    /// Permission denied accessing a path.
    #[error("permission denied: {}", path.display())]
    PermissionDenied {
        /// The path that could not be accessed.
        path: PathBuf,
    },

    /// Any other I/O failure while reading a path.
    #[error("I/O error at {}: {source}", path.display())]
    Io {
        /// The path being accessed.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: io::Error,
    },

    /// A path could not be turned into an absolute path.
    #[error("invalid path {}: {reason}", path.display())]
    InvalidPath {
        /// The invalid path.
        path: PathBuf,
        /// The reason the path is invalid.
        reason: String,
    },

    /// The current working directory could not be determined.
    #[error("cannot determine current directory: {source}")]
    CurrentDirectory {
        /// The underlying error.
        #[source]
        source: io::Error,
    },

    /// The only-directories and only-files filters were both requested.
    #[error("only-directories and only-files filters are mutually exclusive")]
    ConflictingFilters,
}

impl Error {
    /// Map an I/O error raised while accessing `path` to the matching variant.
    ///
    /// # Examples
    ///
    /// ```
    /// use abls::Error;
    /// use std::io;
    /// use std::path::Path;
    ///
    /// let err = Error::from_io(Path::new("missing"), io::Error::from(io::ErrorKind::NotFound));
    /// assert!(err.is_not_found());
    /// ```
    #[must_use]
    pub fn from_io(path: &Path, err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => Self::PathNotFound {
                path: path.to_path_buf(),
            },
            io::ErrorKind::PermissionDenied => Self::PermissionDenied {
                path: path.to_path_buf(),
            },
            _ => Self::Io {
                path: path.to_path_buf(),
                source: err,
            },
        }
    }

    /// Returns true if this error means the path does not exist.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::PathNotFound { .. })
    }

    /// Returns true if this error is a permission failure.
    #[must_use]
    pub fn is_permission_denied(&self) -> bool {
        matches!(self, Self::PermissionDenied { .. })
    }

    /// The path this error occurred at, if applicable.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::PathNotFound { path }
            | Self::PermissionDenied { path }
            | Self::Io { path, .. }
            | Self::InvalidPath { path, .. } => Some(path),
            Self::CurrentDirectory { .. } | Self::ConflictingFilters => None,
        }
    }
}
