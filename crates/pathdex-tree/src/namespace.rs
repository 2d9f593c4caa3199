//! One built namespace snapshot.
//!
//! A `Namespace` owns the tree for a single snapshot of its record source
//! (one opened archive, one manifest) together with the options it was
//! built with. It is immutable once built, so it can be shared between
//! threads behind an `Arc` without locking. Dropping it releases the whole
//! tree.

use std::fmt;

use pathdex_glob::{WildcardMatcher, is_bad_name};

use crate::builder::{BuildStats, build_tree_with_directories};
use crate::error::{NamespaceError, Result};
use crate::listing::{ListEntry, list_matching};
use crate::lookup::{Resolved, components, lookup};
use crate::node::Node;
use crate::options::TreeOptions;
use crate::walker::Leaves;

/// An immutable namespace built from one record snapshot.
pub struct Namespace<T> {
    root: Node<T>,
    options: TreeOptions,
    stats: BuildStats,
}

impl<T> Namespace<T> {
    /// Build a namespace in which every record is a leaf.
    pub fn build<I, P, S>(records: I, path_of: P, options: TreeOptions) -> Self
    where
        I: IntoIterator<Item = T>,
        P: Fn(&T) -> S,
        S: AsRef<str>,
    {
        Self::build_with_directories(records, path_of, |_: &T| false, options)
    }

    /// Build a namespace, treating records that satisfy `is_directory` as
    /// directory entries.
    pub fn build_with_directories<I, P, S, D>(
        records: I,
        path_of: P,
        is_directory: D,
        options: TreeOptions,
    ) -> Self
    where
        I: IntoIterator<Item = T>,
        P: Fn(&T) -> S,
        S: AsRef<str>,
        D: Fn(&T) -> bool,
    {
        let (root, stats) =
            build_tree_with_directories(records, path_of, is_directory, options.clone());
        Self {
            root,
            options,
            stats,
        }
    }

    pub fn root(&self) -> &Node<T> {
        &self.root
    }

    pub fn options(&self) -> &TreeOptions {
        &self.options
    }

    pub fn stats(&self) -> &BuildStats {
        &self.stats
    }

    /// Resolve `path` to a node and its trailing name.
    pub fn lookup<'a, 'p>(&'a self, path: &'p str) -> Result<Resolved<'a, 'p, T>> {
        lookup(&self.root, path, self.options.separator)
    }

    /// Returns true if `path` names an entry or a synthesized directory.
    pub fn exists(&self, path: &str) -> bool {
        self.lookup(path).is_ok()
    }

    /// Resolve a path that must name one concrete entry.
    ///
    /// Unlike [`Namespace::lookup`], a path with wildcard characters in any
    /// component is rejected as [`NamespaceError::InvalidName`] before the
    /// tree is consulted.
    pub fn stat(&self, path: &str) -> Result<&Node<T>> {
        if components(path, self.options.separator).any(is_bad_name) {
            return Err(NamespaceError::InvalidName(path.to_string()));
        }
        Ok(self.lookup(path)?.node)
    }

    /// Children of the directory at `path` whose names match `pattern`.
    pub fn list(&self, path: &str, pattern: &str) -> Result<Vec<ListEntry<'_, T>>> {
        self.list_matching(path, &WildcardMatcher::new(pattern))
    }

    /// Children of the directory at `path` accepted by `matcher`.
    pub fn list_matching(
        &self,
        path: &str,
        matcher: &WildcardMatcher,
    ) -> Result<Vec<ListEntry<'_, T>>> {
        list_matching(&self.root, path, matcher, self.options.separator)
    }

    /// Every child of the directory at `path`.
    pub fn list_all(&self, path: &str) -> Result<Vec<ListEntry<'_, T>>> {
        self.list_matching(path, &WildcardMatcher::any())
    }

    /// Iterator over every leaf payload in the namespace.
    pub fn leaves(&self) -> Leaves<'_, T> {
        Leaves::new(&self.root)
    }

    /// Hand every leaf payload to `visitor`.
    pub fn walk(&self, visitor: impl FnMut(&T)) {
        crate::walker::walk(&self.root, visitor);
    }
}

// Summarizes instead of printing the tree.
impl<T> fmt::Debug for Namespace<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Namespace")
            .field("entries", &self.root.len())
            .field("options", &self.options)
            .field("stats", &self.stats)
            .finish()
    }
}

impl<T> Default for Namespace<T> {
    fn default() -> Self {
        Self {
            root: Node::empty_directory(),
            options: TreeOptions::default(),
            stats: BuildStats::default(),
        }
    }
}
