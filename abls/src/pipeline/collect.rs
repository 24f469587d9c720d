//! Input collection from standard input and arguments.

use std::io::{self, BufRead, IsTerminal};
use std::path::PathBuf;

use crate::entry::{Entry, EntryList};

/// Read one path per line from standard input, unless it is a terminal.
///
/// Read errors end the input; whatever was read before them is kept.
#[must_use]
pub fn from_stdin() -> EntryList {
    let stdin = io::stdin();
    if stdin.is_terminal() {
        log::debug!("standard input is a terminal, not reading paths from it");
        return EntryList::new();
    }

    let list = from_reader(stdin.lock());
    log::debug!("read {} path(s) from standard input", list.len());
    list
}

/// Read one unresolved entry per line from `reader`.
///
/// The line terminator (`\n`, optionally preceded by `\r`) is stripped and
/// nothing else is trimmed. A final line without a terminator still counts.
///
/// # Examples
///
/// ```
/// use abls::pipeline::collect::from_reader;
/// use std::path::Path;
///
/// let list = from_reader("testdir/file0\r\n my file \n".as_bytes());
/// let given: Vec<&Path> = list.iter().map(|e| e.given_path()).collect();
/// assert_eq!(given, vec![Path::new("testdir/file0"), Path::new(" my file ")]);
/// ```
pub fn from_reader<R: BufRead>(mut reader: R) -> EntryList {
    let mut list = EntryList::new();
    let mut line = Vec::new();

    loop {
        line.clear();
        match reader.read_until(b'\n', &mut line) {
            Ok(0) => break,
            Ok(_) => {
                if line.last() == Some(&b'\n') {
                    line.pop();
                }
                if line.last() == Some(&b'\r') {
                    line.pop();
                }
                list.push(Entry::unresolved(path_from_bytes(std::mem::take(&mut line))));
            }
            Err(e) => {
                log::debug!("stopped reading input after {} line(s): {e}", list.len());
                break;
            }
        }
    }

    list
}

/// One unresolved entry per argument, verbatim and in order.
///
/// # Examples
///
/// ```
/// use abls::pipeline::collect::from_arguments;
///
/// let list = from_arguments(["b", "a/../a"]);
/// assert_eq!(list.len(), 2);
/// assert_eq!(list.as_slice()[1].given_path().to_str(), Some("a/../a"));
/// ```
pub fn from_arguments<I, S>(args: I) -> EntryList
where
    I: IntoIterator<Item = S>,
    S: Into<PathBuf>,
{
    args.into_iter().map(Entry::unresolved).collect()
}

#[cfg(unix)]
fn path_from_bytes(bytes: Vec<u8>) -> PathBuf {
    use std::ffi::OsString;
    use std::os::unix::ffi::OsStringExt;

    PathBuf::from(OsString::from_vec(bytes))
}

#[cfg(not(unix))]
fn path_from_bytes(bytes: Vec<u8>) -> PathBuf {
    PathBuf::from(String::from_utf8_lossy(&bytes).into_owned())
}
