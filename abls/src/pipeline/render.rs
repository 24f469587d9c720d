//! Print-time filtering and output.
//!
//! Filtering never mutates the list: [`render`] walks it lazily and yields an
//! [`OutputLine`] for every entry the [`FilterConfig`] lets through.

use std::fmt;
use std::io::{self, Write};
use std::iter::FusedIterator;
use std::path::{is_separator, Path, MAIN_SEPARATOR_STR};
use std::slice;

use crate::config::FilterConfig;
use crate::entry::{Entry, EntryList};

/// One line of output: an absolute path, suffixed with a separator for
/// directories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputLine<'a> {
    path: &'a Path,
    is_dir: bool,
}

impl<'a> OutputLine<'a> {
    /// The absolute path printed on this line.
    #[must_use]
    pub fn path(&self) -> &'a Path {
        self.path
    }

    /// Whether the line names a directory.
    #[must_use]
    pub fn is_dir(&self) -> bool {
        self.is_dir
    }

    /// Whether a trailing separator is appended.
    ///
    /// Directories get one unless the path already ends in a separator, which
    /// only happens for the filesystem root.
    #[must_use]
    pub fn has_trailing_separator(&self) -> bool {
        self.is_dir
            && !self
                .path
                .as_os_str()
                .as_encoded_bytes()
                .last()
                .is_some_and(|b| is_separator(char::from(*b)))
    }

    /// Write the line, terminator included.
    ///
    /// On Unix the path's raw bytes are written unchanged.
    ///
    /// # Errors
    ///
    /// Returns any error from the underlying writer.
    pub fn write_to<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        write_path(self.path, out)?;
        if self.has_trailing_separator() {
            out.write_all(MAIN_SEPARATOR_STR.as_bytes())?;
        }
        out.write_all(b"\n")
    }
}

impl fmt::Display for OutputLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path.display())?;
        if self.has_trailing_separator() {
            f.write_str(MAIN_SEPARATOR_STR)?;
        }
        Ok(())
    }
}

#[cfg(unix)]
fn write_path<W: Write + ?Sized>(path: &Path, out: &mut W) -> io::Result<()> {
    use std::os::unix::ffi::OsStrExt;

    out.write_all(path.as_os_str().as_bytes())
}

#[cfg(not(unix))]
fn write_path<W: Write + ?Sized>(path: &Path, out: &mut W) -> io::Result<()> {
    out.write_all(path.to_string_lossy().as_bytes())
}

/// Lazy iterator over the lines to print. See [`render`].
#[derive(Debug, Clone)]
pub struct Render<'a> {
    entries: slice::Iter<'a, Entry>,
    config: &'a FilterConfig,
}

impl<'a> Iterator for Render<'a> {
    type Item = OutputLine<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        self.entries.by_ref().find_map(|entry| select(entry, self.config))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.entries.size_hint().1)
    }
}

impl FusedIterator for Render<'_> {}

/// Iterate the lines `config` lets through, in list order.
///
/// Hidden entries are skipped unless hidden entries are shown. Directories
/// are skipped when only files are wanted, and non-directories when only
/// directories are wanted. Unresolved entries are skipped silently.
///
/// # Examples
///
/// ```
/// use abls::{Entry, EntryList, EntryMetadata, FilterConfig};
/// use abls::pipeline::render::render;
/// use std::path::PathBuf;
///
/// let list: EntryList = vec![
///     Entry::resolved(EntryMetadata { absolute_path: PathBuf::from("/t/dir"), is_dir: true, is_hidden: false }),
///     Entry::resolved(EntryMetadata { absolute_path: PathBuf::from("/t/.env"), is_dir: false, is_hidden: true }),
///     Entry::resolved(EntryMetadata { absolute_path: PathBuf::from("/t/file"), is_dir: false, is_hidden: false }),
/// ].into();
///
/// let config = FilterConfig::default();
/// let lines: Vec<String> = render(&list, &config).map(|l| l.to_string()).collect();
/// assert_eq!(lines, vec!["/t/dir/", "/t/file"]);
/// ```
#[must_use]
pub fn render<'a>(list: &'a EntryList, config: &'a FilterConfig) -> Render<'a> {
    Render {
        entries: list.iter(),
        config,
    }
}

fn select<'a>(entry: &'a Entry, config: &FilterConfig) -> Option<OutputLine<'a>> {
    let metadata = entry.metadata()?;

    if metadata.is_hidden && !config.show_hidden() {
        return None;
    }

    let wanted = if metadata.is_dir {
        !config.only_files()
    } else {
        !config.only_directories()
    };

    wanted.then_some(OutputLine {
        path: &metadata.absolute_path,
        is_dir: metadata.is_dir,
    })
}

/// Write every line to `out` and flush, best-effort.
///
/// The first write error stops output and is logged, not returned. Returns
/// the number of lines fully written.
pub fn write_lines<'a, I, W>(lines: I, out: &mut W) -> usize
where
    I: IntoIterator<Item = OutputLine<'a>>,
    W: Write + ?Sized,
{
    let mut written = 0;
    for line in lines {
        if let Err(e) = line.write_to(out) {
            log::debug!("output stopped after {written} line(s): {e}");
            return written;
        }
        written += 1;
    }

    if let Err(e) = out.flush() {
        log::debug!("flushing output failed: {e}");
    }
    written
}
