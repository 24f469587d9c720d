//! Print-time filter configuration.
//!
//! The CLI builds one [`FilterConfig`] from its flags and hands it to the
//! pipeline by reference; nothing in the library reads process-wide state.

use crate::error::{Error, Result};

/// Which entries the renderer lets through.
///
/// `only_directories` and `only_files` are mutually exclusive; the checked
/// constructor [`FilterConfig::new`] enforces this.
///
/// # Examples
///
/// ```
/// use abls::FilterConfig;
///
/// let config = FilterConfig::new(true, true, false).unwrap();
/// assert!(config.show_hidden());
/// assert!(config.only_directories());
///
/// assert!(FilterConfig::new(false, true, true).is_err());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterConfig {
    show_hidden: bool,
    only_directories: bool,
    only_files: bool,
}

impl FilterConfig {
    /// Build a configuration, rejecting the only-dirs/only-files conflict.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConflictingFilters`] if both `only_directories` and
    /// `only_files` are set.
    pub fn new(show_hidden: bool, only_directories: bool, only_files: bool) -> Result<Self> {
        if only_directories && only_files {
            return Err(Error::ConflictingFilters);
        }
        Ok(Self {
            show_hidden,
            only_directories,
            only_files,
        })
    }

    /// Include entries whose base name starts with a dot.
    #[must_use]
    pub fn with_hidden(mut self, show: bool) -> Self {
        self.show_hidden = show;
        self
    }

    /// Print only directories. Clears the only-files filter.
    #[must_use]
    pub fn with_only_directories(mut self) -> Self {
        self.only_directories = true;
        self.only_files = false;
        self
    }

    /// Print only non-directories. Clears the only-directories filter.
    #[must_use]
    pub fn with_only_files(mut self) -> Self {
        self.only_files = true;
        self.only_directories = false;
        self
    }

    /// Whether hidden entries are printed.
    #[must_use]
    pub const fn show_hidden(&self) -> bool {
        self.show_hidden
    }

    /// Whether only directories are printed.
    #[must_use]
    pub const fn only_directories(&self) -> bool {
        self.only_directories
    }

    /// Whether only non-directories are printed.
    #[must_use]
    pub const fn only_files(&self) -> bool {
        self.only_files
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_shows_everything_but_hidden() {
        let config = FilterConfig::default();
        assert!(!config.show_hidden());
        assert!(!config.only_directories());
        assert!(!config.only_files());
    }

    #[test]
    fn test_new_rejects_conflict() {
        let err = FilterConfig::new(true, true, true).unwrap_err();
        assert!(matches!(err, Error::ConflictingFilters));
    }

    #[test]
    fn test_builders_keep_filters_exclusive() {
        let config = FilterConfig::default()
            .with_only_directories()
            .with_only_files();
        assert!(config.only_files());
        assert!(!config.only_directories());

        let config = config.with_only_directories().with_hidden(true);
        assert!(config.only_directories());
        assert!(!config.only_files());
        assert!(config.show_hidden());
    }
}
