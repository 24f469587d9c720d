//! Entry types tracked by the pipeline.
//!
//! An [`Entry`] is one candidate path. It starts either unresolved (from
//! standard input or an argument) or resolved (from a directory listing). An
//! [`EntryList`] keeps entries in input order, which is also print order.

use std::path::{Path, PathBuf};

/// Filesystem facts recorded for a resolved entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryMetadata {
    /// Absolute, lexically clean path.
    pub absolute_path: PathBuf,
    /// Whether the entry is a directory.
    pub is_dir: bool,
    /// Whether the entry's base name starts with a dot.
    pub is_hidden: bool,
}

/// One candidate path.
///
/// # Examples
///
/// ```
/// use abls::{Entry, EntryMetadata};
/// use std::path::PathBuf;
///
/// let entry = Entry::unresolved("testdir/file0");
/// assert!(!entry.is_resolved());
/// assert_eq!(entry.absolute_path(), None);
///
/// let entry = Entry::resolved(EntryMetadata {
///     absolute_path: PathBuf::from("/srv/testdir"),
///     is_dir: true,
///     is_hidden: false,
/// });
/// assert_eq!(entry.given_path(), entry.absolute_path().unwrap());
/// assert!(entry.is_dir());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    given_path: PathBuf,
    metadata: Option<EntryMetadata>,
}

impl Entry {
    /// An entry for a path exactly as it was supplied.
    pub fn unresolved(given_path: impl Into<PathBuf>) -> Self {
        Self {
            given_path: given_path.into(),
            metadata: None,
        }
    }

    /// An entry that is already resolved; its given path is its absolute path.
    #[must_use]
    pub fn resolved(metadata: EntryMetadata) -> Self {
        Self {
            given_path: metadata.absolute_path.clone(),
            metadata: Some(metadata),
        }
    }

    /// The path as supplied.
    #[must_use]
    pub fn given_path(&self) -> &Path {
        &self.given_path
    }

    /// The resolved metadata, if any.
    #[must_use]
    pub fn metadata(&self) -> Option<&EntryMetadata> {
        self.metadata.as_ref()
    }

    /// The absolute path, once resolved.
    #[must_use]
    pub fn absolute_path(&self) -> Option<&Path> {
        self.metadata.as_ref().map(|m| m.absolute_path.as_path())
    }

    /// Whether resolved metadata is present.
    #[must_use]
    pub fn is_resolved(&self) -> bool {
        self.metadata.is_some()
    }

    /// Whether the entry is a directory. False until resolved.
    #[must_use]
    pub fn is_dir(&self) -> bool {
        self.metadata.as_ref().is_some_and(|m| m.is_dir)
    }

    /// Whether the entry is hidden. False until resolved.
    #[must_use]
    pub fn is_hidden(&self) -> bool {
        self.metadata.as_ref().is_some_and(|m| m.is_hidden)
    }

    pub(crate) fn set_metadata(&mut self, metadata: EntryMetadata) {
        self.metadata = Some(metadata);
    }
}

/// An ordered list of entries.
///
/// # Examples
///
/// ```
/// use abls::{Entry, EntryList};
///
/// let mut list = EntryList::new();
/// list.push(Entry::unresolved("a"));
/// list.extend(EntryList::from(vec![Entry::unresolved("b")]));
///
/// let given: Vec<_> = list.iter().map(|e| e.given_path().to_path_buf()).collect();
/// assert_eq!(given, vec!["a", "b"].into_iter().map(Into::into).collect::<Vec<std::path::PathBuf>>());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryList {
    entries: Vec<Entry>,
}

impl EntryList {
    /// An empty list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one entry.
    pub fn push(&mut self, entry: Entry) {
        self.entries.push(entry);
    }

    /// Append every entry of `other`, keeping its order.
    pub fn extend(&mut self, other: EntryList) {
        self.entries.extend(other.entries);
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the list has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Entry> {
        self.entries.iter()
    }

    /// Iterate entries mutably in order.
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Entry> {
        self.entries.iter_mut()
    }

    /// The entries as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[Entry] {
        &self.entries
    }

    /// The only entry, if the list has exactly one.
    #[must_use]
    pub fn single(&self) -> Option<&Entry> {
        match self.entries.as_slice() {
            [only] => Some(only),
            _ => None,
        }
    }

    /// Consume the list into its entries.
    #[must_use]
    pub fn into_vec(self) -> Vec<Entry> {
        self.entries
    }
}

impl From<Vec<Entry>> for EntryList {
    fn from(entries: Vec<Entry>) -> Self {
        Self { entries }
    }
}

impl FromIterator<Entry> for EntryList {
    fn from_iter<I: IntoIterator<Item = Entry>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a EntryList {
    type Item = &'a Entry;
    type IntoIter = std::slice::Iter<'a, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl IntoIterator for EntryList {
    type Item = Entry;
    type IntoIter = std::vec::IntoIter<Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
