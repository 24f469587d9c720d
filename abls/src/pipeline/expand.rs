//! Directory expansion: listing a directory's immediate children.
//!
//! Used twice by the pipeline: when the only input is a directory, and when
//! there is no input at all and the current directory is listed instead.

use std::env;
use std::path::Path;

use crate::entry::{Entry, EntryList, EntryMetadata};
use crate::error::{Error, Result};
use crate::path::{self, normalize};

/// List the immediate children of `dir` as resolved entries.
///
/// Children come back in filesystem enumeration order; no sorting is applied
/// and nothing is filtered out. Each child's path is the absolute form of
/// `dir` joined with the child's name. The directory flag comes from the
/// directory entry itself, so a symlink to a directory is not a directory
/// here.
///
/// A child whose type cannot be read is skipped with a warning.
///
/// # Errors
///
/// Returns `PathNotFound`, `PermissionDenied`, or `Io` if the directory
/// cannot be opened or enumeration fails part way.
pub fn expand_directory(dir: &Path) -> Result<EntryList> {
    let dir = normalize::absolute(dir)?;
    let mut list = EntryList::new();

    for child in path::read_dir(&dir)? {
        let child = child.map_err(|e| Error::from_io(&dir, e))?;

        let file_type = match child.file_type() {
            Ok(file_type) => file_type,
            Err(e) => {
                log::warn!("skipping {}: {e}", child.path().display());
                continue;
            }
        };

        let name = child.file_name();
        list.push(Entry::resolved(EntryMetadata {
            absolute_path: dir.join(&name),
            is_dir: file_type.is_dir(),
            is_hidden: normalize::is_hidden_name(&name),
        }));
    }

    log::debug!("listed {} entries in {}", list.len(), dir.display());
    Ok(list)
}

/// Replace a lone directory input by its children.
///
/// Lists with zero or several entries are returned untouched. A single entry
/// that is not a directory is returned untouched too.
///
/// # Errors
///
/// Returns an error if the single entry cannot be stat'd, or if it is a
/// directory that cannot be listed.
pub fn expand_if_single_directory(list: EntryList) -> Result<EntryList> {
    let Some(only) = list.single() else {
        return Ok(list);
    };

    let given = only.given_path().to_path_buf();
    if !path::stat(&given)?.is_dir() {
        return Ok(list);
    }

    log::debug!("expanding single directory {}", given.display());
    expand_directory(&given)
}

/// List the current working directory.
///
/// # Errors
///
/// Returns `CurrentDirectory` if the working directory cannot be determined,
/// or the listing error if it cannot be read.
pub fn expand_current_directory() -> Result<EntryList> {
    let cwd = env::current_dir().map_err(|source| Error::CurrentDirectory { source })?;
    log::debug!("no inputs given, listing {}", cwd.display());
    expand_directory(&cwd)
}
