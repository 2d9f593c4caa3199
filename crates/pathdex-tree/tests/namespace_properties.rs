//! Property tests for building and querying a namespace.
//!
//! Record paths are drawn so that directory names (`a`..`c`) never collide
//! with leaf names (`f0.txt`..`f9.txt`); duplicate leaf paths are allowed
//! and must resolve last-write-wins.

use std::collections::{BTreeMap, BTreeSet};

use pathdex_tree::{Namespace, NamespaceError, TreeOptions};
use proptest::prelude::*;

#[derive(Debug, Clone, PartialEq, Eq)]
struct Record {
    path: String,
    id: usize,
}

fn record_paths() -> impl Strategy<Value = Vec<String>> {
    let path = (prop::collection::vec("[a-c]", 0..5), "f[0-9]\\.txt")
        .prop_map(|(dirs, leaf)| {
            let mut parts = dirs;
            parts.push(leaf);
            parts.join("\\")
        });
    prop::collection::vec(path, 0..40)
}

fn build(paths: &[String]) -> Namespace<Record> {
    let records = paths.iter().enumerate().map(|(id, path)| Record {
        path: path.clone(),
        id,
    });
    Namespace::build(records, |r| r.path.clone(), TreeOptions::default())
}

/// Expected survivors: last record id per distinct path.
fn survivors(paths: &[String]) -> BTreeMap<String, usize> {
    paths
        .iter()
        .enumerate()
        .map(|(id, path)| (path.clone(), id))
        .collect()
}

/// Every path that must resolve: leaves plus their synthesized ancestors.
fn known_paths(paths: &[String]) -> BTreeSet<String> {
    let mut known = BTreeSet::new();
    known.insert(String::new());
    for path in paths {
        let parts: Vec<&str> = path.split('\\').collect();
        for end in 1..=parts.len() {
            known.insert(parts[..end].join("\\"));
        }
    }
    known
}

proptest! {
    #[test]
    fn every_surviving_leaf_resolves(paths in record_paths()) {
        let ns = build(&paths);
        for (path, id) in survivors(&paths) {
            let resolved = ns.lookup(&path).unwrap();
            prop_assert!(resolved.node.is_leaf());
            prop_assert_eq!(resolved.node.payload().map(|r| r.id), Some(id));
            prop_assert_eq!(resolved.name, path.rsplit('\\').next());
        }
    }

    #[test]
    fn walk_visits_survivors_exactly_once(paths in record_paths()) {
        let ns = build(&paths);
        let mut visited: Vec<usize> = Vec::new();
        ns.walk(|r| visited.push(r.id));
        visited.sort_unstable();

        let mut expected: Vec<usize> = survivors(&paths).into_values().collect();
        expected.sort_unstable();
        prop_assert_eq!(visited, expected);
    }

    #[test]
    fn unknown_paths_are_not_found(
        paths in record_paths(),
        probe in prop::collection::vec("[a-d]|f[0-9]\\.txt", 1..6),
    ) {
        let ns = build(&paths);
        let probe = probe.join("\\");
        if known_paths(&paths).contains(&probe) {
            prop_assert!(ns.exists(&probe));
        } else {
            prop_assert_eq!(
                ns.lookup(&probe).unwrap_err(),
                NamespaceError::NotFound(probe.clone())
            );
        }
    }

    #[test]
    fn separators_around_paths_are_ignored(paths in record_paths()) {
        let ns = build(&paths);
        for path in survivors(&paths).keys() {
            let padded = format!("\\\\{}\\", path.replace('\\', "\\\\"));
            prop_assert!(ns.exists(&padded));
        }
    }

    #[test]
    fn listing_star_matches_children(paths in record_paths()) {
        let ns = build(&paths);
        for path in known_paths(&paths) {
            let node = ns.lookup(&path).unwrap().node;
            match ns.list_all(&path) {
                Ok(entries) => prop_assert_eq!(entries.len(), node.len()),
                Err(err) => prop_assert_eq!(err, NamespaceError::NotADirectory(path.clone())),
            }
        }
    }
}

#[test]
fn empty_snapshot_has_only_a_root() {
    let ns = build(&[]);
    assert!(ns.root().is_directory());
    assert!(ns.root().is_empty());
    assert!(std::ptr::eq(ns.lookup("").unwrap().node, ns.root()));
    assert!(ns.lookup("a").unwrap_err().is_not_found());
    assert!(ns.lookup("a\\f1.txt").unwrap_err().is_not_found());
}

#[test]
fn archive_layout_example() {
    let paths = vec!["a\\b\\c.txt".to_string(), "a\\d.txt".to_string()];
    let ns = build(&paths);

    let names: Vec<_> = ns.list_all("a").unwrap().iter().map(|e| e.name).collect();
    assert_eq!(names, vec!["b", "d.txt"]);
    assert!(ns.lookup("a\\b").unwrap().node.is_directory());
    assert!(ns.lookup("a\\d.txt").unwrap().node.is_leaf());
    assert!(ns.lookup("a").unwrap().node.payload().is_none());
}

#[test]
fn drive_letter_root() {
    let paths = vec!["C:\\x.txt".to_string()];
    let ns = build(&paths);
    let names: Vec<_> = ns.list_all("").unwrap().iter().map(|e| e.name).collect();
    assert_eq!(names, vec!["C"]);
}
