//! Tree construction from a flat record sequence.
//!
//! Directories do not need their own records: any directory named in a
//! record's path is synthesized the first time it is needed. Construction
//! happens in two phases:
//!
//! 1. **Collect**: records land in an arena of pending directories, with an
//!    auxiliary map from full directory path to arena slot. Ancestors are
//!    created top-down, so a directory's slot is always after its parent's.
//! 2. **Assemble**: the arena is folded back to front into owned [`Node`]s.
//!    Every child slot is finished before its parent, so no recursion is
//!    needed however deep the paths go.
//!
//! The auxiliary map is dropped once the tree is assembled.
//!
//! # Collisions
//!
//! A leaf always replaces whatever held its name (last write wins). A leaf
//! that replaces a directory detaches it, but the path map still points at
//! the detached directory, so records that later land under that path are
//! not reachable from the root. This mirrors the overwrite order exactly;
//! well-formed archives never contain such collisions.

use std::collections::HashMap;

use indexmap::IndexMap;

use crate::node::{Children, Node};
use crate::options::TreeOptions;

/// Counters collected while building one tree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildStats {
    /// Records pushed, including skipped ones.
    pub records: usize,
    /// Leaf records inserted.
    pub leaves: usize,
    /// Directory records attached.
    pub directories: usize,
    /// Directories created only because a path mentioned them.
    pub synthesized: usize,
    /// Insertions that replaced an existing child.
    pub overwritten: usize,
    /// Records that could not be placed (empty leaf paths).
    pub skipped: usize,
}

/// A child slot while building: leaves are stored inline, directories by arena index.
#[derive(Debug)]
enum Slot<T> {
    Leaf(T),
    Dir(usize),
}

#[derive(Debug)]
struct PendingDir<T> {
    payload: Option<T>,
    children: IndexMap<String, Slot<T>>,
}

impl<T> PendingDir<T> {
    fn new(payload: Option<T>) -> Self {
        Self {
            payload,
            children: IndexMap::new(),
        }
    }
}

const ROOT: usize = 0;

/// Incremental builder for one namespace tree.
///
/// Push records in source order, then call [`TreeBuilder::finish`].
#[derive(Debug)]
pub struct TreeBuilder<T> {
    options: TreeOptions,
    dirs: Vec<PendingDir<T>>,
    by_path: HashMap<String, usize>,
    stats: BuildStats,
}

impl<T> TreeBuilder<T> {
    /// Create a builder holding only the root.
    pub fn new(options: TreeOptions) -> Self {
        let mut by_path = HashMap::new();
        by_path.insert(String::new(), ROOT);
        Self {
            options,
            dirs: vec![PendingDir::new(None)],
            by_path,
            stats: BuildStats::default(),
        }
    }

    /// Options this builder splits paths with.
    pub fn options(&self) -> &TreeOptions {
        &self.options
    }

    /// Add a record, dispatching on whether it describes a directory.
    pub fn push(&mut self, path: &str, record: T, is_directory: bool) {
        if is_directory {
            self.push_directory(path, record);
        } else {
            self.push_leaf(path, record);
        }
    }

    /// Add a plain record as a leaf at `path`.
    ///
    /// Any existing entry with the same name is replaced.
    pub fn push_leaf(&mut self, path: &str, record: T) {
        self.stats.records += 1;

        let path = self.normalize(path);
        let (parent, name) = self.split(&path);
        if name.is_empty() {
            tracing::warn!("skipping leaf record with an empty path");
            self.stats.skipped += 1;
            return;
        }

        let parent = self.resolve_dir(parent);
        self.insert_child(parent, name, Slot::Leaf(record));
        self.stats.leaves += 1;
    }

    /// Attach a directory record to the directory at `path`.
    ///
    /// The directory is created if no earlier record or path mentioned it;
    /// otherwise the record becomes (or replaces) its payload. An empty path
    /// names the root.
    pub fn push_directory(&mut self, path: &str, record: T) {
        self.stats.records += 1;
        self.stats.directories += 1;

        let path = self.normalize(path);
        let (parent, name) = self.split(&path);
        let parent = self.resolve_dir(parent);

        if let Some(&existing) = self.by_path.get(path.as_str()) {
            self.dirs[existing].payload = Some(record);
            return;
        }

        let index = self.alloc(Some(record));
        self.insert_child(parent, name, Slot::Dir(index));
        self.by_path.insert(path, index);
    }

    /// Assemble the tree and return its root with the build counters.
    pub fn finish(self) -> (Node<T>, BuildStats) {
        let Self { dirs, stats, .. } = self;

        let mut built: Vec<Option<Node<T>>> = Vec::new();
        built.resize_with(dirs.len(), || None);

        for (index, dir) in dirs.into_iter().enumerate().rev() {
            let mut children = Children::with_capacity(dir.children.len());
            for (name, slot) in dir.children {
                let node = match slot {
                    Slot::Leaf(record) => Node::Leaf(record),
                    // Child slots come after their parent and have one owner.
                    Slot::Dir(child) => match built[child].take() {
                        Some(node) => node,
                        None => continue,
                    },
                };
                children.insert(name, node);
            }
            built[index] = Some(Node::Directory {
                payload: dir.payload,
                children,
            });
        }

        tracing::debug!(
            "namespace built: records={}, leaves={}, directories={}, synthesized={}, overwritten={}, skipped={}",
            stats.records,
            stats.leaves,
            stats.directories,
            stats.synthesized,
            stats.overwritten,
            stats.skipped
        );

        let root = built
            .get_mut(ROOT)
            .and_then(Option::take)
            .unwrap_or_else(Node::empty_directory);
        (root, stats)
    }

    /// Drop empty components so `\a\\b\` and `a\b` name the same entry.
    fn normalize(&self, path: &str) -> String {
        let separator = self.options.separator;
        let mut normalized = String::with_capacity(path.len());
        for component in path.split(separator).filter(|c| !c.is_empty()) {
            if !normalized.is_empty() {
                normalized.push(separator);
            }
            normalized.push_str(component);
        }
        normalized
    }

    /// Split a normalized path into parent path and trailing name.
    fn split<'p>(&self, path: &'p str) -> (&'p str, &'p str) {
        match path.rfind(self.options.separator) {
            Some(at) => (&path[..at], &path[at + self.options.separator.len_utf8()..]),
            None => ("", path),
        }
    }

    /// Find the directory at `path`, synthesizing it and any missing ancestors.
    fn resolve_dir(&mut self, path: &str) -> usize {
        if let Some(&index) = self.by_path.get(path) {
            return index;
        }

        // Walk up to the nearest known ancestor; the root is always known.
        let mut missing = vec![path];
        let mut current = path;
        let mut parent = loop {
            let (up, _) = self.split(current);
            if let Some(&index) = self.by_path.get(up) {
                break index;
            }
            missing.push(up);
            current = up;
        };

        for dir_path in missing.into_iter().rev() {
            let (_, segment) = self.split(dir_path);
            let name = self.options.directory_name(segment).to_string();
            let index = self.alloc(None);
            self.insert_child(parent, &name, Slot::Dir(index));
            self.by_path.insert(dir_path.to_string(), index);
            self.stats.synthesized += 1;
            parent = index;
        }
        parent
    }

    fn alloc(&mut self, payload: Option<T>) -> usize {
        self.dirs.push(PendingDir::new(payload));
        self.dirs.len() - 1
    }

    fn insert_child(&mut self, parent: usize, name: &str, slot: Slot<T>) {
        if self.dirs[parent]
            .children
            .insert(name.to_string(), slot)
            .is_some()
        {
            tracing::trace!("replaced existing entry {:?}", name);
            self.stats.overwritten += 1;
        }
    }
}

impl<T> Default for TreeBuilder<T> {
    fn default() -> Self {
        Self::new(TreeOptions::default())
    }
}

/// Build a tree where every record is a leaf.
pub fn build_tree<T, I, P, S>(records: I, path_of: P, options: TreeOptions) -> (Node<T>, BuildStats)
where
    I: IntoIterator<Item = T>,
    P: Fn(&T) -> S,
    S: AsRef<str>,
{
    build_tree_with_directories(records, path_of, |_: &T| false, options)
}

/// Build a tree, attaching records for which `is_directory` holds to directories.
pub fn build_tree_with_directories<T, I, P, S, D>(
    records: I,
    path_of: P,
    is_directory: D,
    options: TreeOptions,
) -> (Node<T>, BuildStats)
where
    I: IntoIterator<Item = T>,
    P: Fn(&T) -> S,
    S: AsRef<str>,
    D: Fn(&T) -> bool,
{
    let mut builder = TreeBuilder::new(options);
    for record in records {
        let path = path_of(&record);
        let directory = is_directory(&record);
        builder.push(path.as_ref(), record, directory);
    }
    builder.finish()
}
