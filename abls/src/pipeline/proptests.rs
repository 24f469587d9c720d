//! Property-based tests for the pipeline.

use std::collections::BTreeSet;
use std::fs;
use std::path::PathBuf;

use proptest::prelude::*;

use super::collect::{from_arguments, from_reader};
use super::render::render;
use super::prepare;
use crate::config::FilterConfig;
use crate::entry::{Entry, EntryList, EntryMetadata};

fn name_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        3 => "[a-z0-9_-]{1,12}",
        1 => "\\.[a-z0-9_-]{1,8}",
    ]
}

fn entry_strategy() -> impl Strategy<Value = Entry> {
    (name_strategy(), any::<bool>()).prop_map(|(name, is_dir)| {
        Entry::resolved(EntryMetadata {
            absolute_path: PathBuf::from("/t").join(&name),
            is_dir,
            is_hidden: name.starts_with('.'),
        })
    })
}

fn config_strategy() -> impl Strategy<Value = FilterConfig> {
    (any::<bool>(), 0..3u8).prop_map(|(hidden, mode)| {
        let config = FilterConfig::default().with_hidden(hidden);
        match mode {
            0 => config,
            1 => config.with_only_directories(),
            _ => config.with_only_files(),
        }
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    // Stdin entries come first, then arguments, each in their own order
    #[test]
    fn prepare_preserves_stdin_then_argument_order(
        names in prop::collection::btree_set("[a-z0-9]{1,10}", 2..12),
        split in 0..12usize,
    ) {
        let temp = tempfile::tempdir().unwrap();
        let paths: Vec<PathBuf> = names
            .iter()
            .rev()
            .map(|name| {
                let path = temp.path().join(name);
                fs::write(&path, "").unwrap();
                path
            })
            .collect();
        let split = split.min(paths.len());

        let piped: String = paths[..split]
            .iter()
            .map(|p| format!("{}\n", p.display()))
            .collect();
        let mut inputs = from_reader(piped.as_bytes());
        inputs.extend(from_arguments(paths[split..].iter()));

        let list = prepare(inputs).unwrap();
        let resolved: Vec<PathBuf> = list
            .iter()
            .map(|e| e.absolute_path().unwrap().to_path_buf())
            .collect();
        prop_assert_eq!(resolved, paths);
    }

    // Printed lines honour every filter and keep list order
    #[test]
    fn render_respects_filters(
        entries in prop::collection::vec(entry_strategy(), 0..30),
        config in config_strategy(),
    ) {
        let list: EntryList = entries.clone().into();
        let lines: Vec<_> = render(&list, &config).collect();

        for line in &lines {
            if config.only_directories() {
                prop_assert!(line.is_dir());
                prop_assert!(line.to_string().ends_with('/'));
            }
            if config.only_files() {
                prop_assert!(!line.is_dir());
            }
            if !config.show_hidden() {
                let name = line.path().file_name().unwrap().to_string_lossy().into_owned();
                prop_assert!(!name.starts_with('.'));
            }
        }

        let expected: Vec<&std::path::Path> = entries
            .iter()
            .filter(|e| config.show_hidden() || !e.is_hidden())
            .filter(|e| if e.is_dir() { !config.only_files() } else { !config.only_directories() })
            .map(|e| e.absolute_path().unwrap())
            .collect();
        let printed: Vec<&std::path::Path> = lines.iter().map(|l| l.path()).collect();
        prop_assert_eq!(printed, expected);
    }

    // A lone directory input resolves to exactly its children
    #[test]
    fn single_directory_yields_its_children(
        names in prop::collection::btree_set(name_strategy(), 0..10),
    ) {
        let temp = tempfile::tempdir().unwrap();
        let dir = temp.path().join("root");
        fs::create_dir(&dir).unwrap();
        for name in &names {
            fs::write(dir.join(name), "").unwrap();
        }

        let list = prepare(from_arguments([&dir])).unwrap();
        let children: BTreeSet<String> = list
            .iter()
            .map(|e| e.absolute_path().unwrap().file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        prop_assert_eq!(children, names.clone());
        prop_assert!(list.iter().all(|e| e.is_hidden() == e.given_path().file_name().unwrap().to_string_lossy().starts_with('.')));
    }
}
