//! Property-based tests for path handling.

use super::normalize::{base_name, is_hidden_path, resolve_components};
use proptest::prelude::*;
use std::path::{Component, PathBuf};

fn path_component_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        4 => "[a-z0-9_-]{1,20}",
        1 => "\\.[a-z0-9_-]{0,10}",
        1 => Just("..".to_string()),
        1 => Just(".".to_string()),
    ]
}

fn absolute_path_strategy() -> impl Strategy<Value = PathBuf> {
    prop::collection::vec(path_component_strategy(), 1..8).prop_map(|parts| {
        let mut path = PathBuf::from("/");
        for part in parts {
            path.push(part);
        }
        path
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    // resolve_components(resolve_components(p)) == resolve_components(p)
    #[test]
    fn resolve_components_idempotent(path in absolute_path_strategy()) {
        let once = resolve_components(&path);
        let twice = resolve_components(&once);
        prop_assert_eq!(once, twice);
    }

    // Resolved paths stay absolute and carry no `.` or `..`
    #[test]
    fn resolved_paths_are_clean(path in absolute_path_strategy()) {
        let resolved = resolve_components(&path);
        prop_assert!(resolved.is_absolute());
        for component in resolved.components() {
            prop_assert_ne!(component, Component::CurDir);
            prop_assert_ne!(component, Component::ParentDir);
        }
    }

    // Hidden iff the last pushed component starts with a dot
    #[test]
    fn hidden_follows_last_component(
        parent in absolute_path_strategy(),
        name in path_component_strategy(),
    ) {
        let path = parent.join(&name);
        prop_assert_eq!(is_hidden_path(&path), name.starts_with('.'));
    }

    // Trailing separators never change the base name
    #[test]
    fn base_name_ignores_trailing_separators(
        parent in absolute_path_strategy(),
        name in "[a-z0-9_.-]{1,20}",
        slashes in 1..4usize,
    ) {
        let plain = parent.join(&name);
        let with_slashes = PathBuf::from(format!("{}{}", plain.display(), "/".repeat(slashes)));
        prop_assert_eq!(base_name(&plain), base_name(&with_slashes));
    }
}
