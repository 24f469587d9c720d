//! Metadata resolution for entries that were given by the operator.

use crate::entry::{Entry, EntryList, EntryMetadata};
use crate::error::Result;
use crate::path::{self, normalize};

/// Stat one entry and record its metadata.
///
/// Already-resolved entries are left exactly as they are. The hidden flag is
/// taken from the given path's base name, so `testdir/.` counts as hidden.
///
/// # Errors
///
/// Returns `PathNotFound`, `PermissionDenied`, or `Io` if the stat fails,
/// or `CurrentDirectory` if a relative path cannot be made absolute.
///
/// # Examples
///
/// ```
/// use abls::Entry;
/// use abls::pipeline::resolve::resolve_entry;
///
/// let mut entry = Entry::unresolved(".");
/// resolve_entry(&mut entry).unwrap();
/// assert!(entry.is_dir());
/// assert!(entry.is_hidden());
/// assert!(entry.absolute_path().unwrap().is_absolute());
/// ```
pub fn resolve_entry(entry: &mut Entry) -> Result<()> {
    if entry.is_resolved() {
        return Ok(());
    }

    let given = entry.given_path();
    let metadata = path::stat(given)?;
    let resolved = EntryMetadata {
        absolute_path: normalize::absolute(given)?,
        is_dir: metadata.is_dir(),
        is_hidden: normalize::is_hidden_path(given),
    };

    entry.set_metadata(resolved);
    Ok(())
}

/// Resolve every unresolved entry in order, stopping at the first failure.
///
/// # Errors
///
/// Returns the error of the first entry that cannot be resolved. Entries
/// before it keep their new metadata; nothing after it is touched.
pub fn resolve_all(list: &mut EntryList) -> Result<()> {
    for entry in list.iter_mut() {
        resolve_entry(entry)?;
    }
    Ok(())
}
