//! Directory listings filtered by a wildcard search expression.
//!
//! This is the "find files under `path` matching `pattern`" query a
//! filesystem adapter answers on every directory enumeration. The path is
//! resolved exactly; the pattern is matched case-insensitively against each
//! direct child's name.

use pathdex_glob::WildcardMatcher;

use crate::error::{NamespaceError, Result};
use crate::lookup::lookup;
use crate::node::Node;

/// One entry of a directory listing.
#[derive(Debug)]
pub struct ListEntry<'a, T> {
    /// Name of the child (not a full path).
    pub name: &'a str,
    pub node: &'a Node<T>,
}

impl<'a, T> ListEntry<'a, T> {
    pub fn is_directory(&self) -> bool {
        self.node.is_directory()
    }

    pub fn payload(&self) -> Option<&'a T> {
        self.node.payload()
    }
}

impl<T> Clone for ListEntry<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for ListEntry<'_, T> {}

/// List the children of the directory at `path` whose names match `pattern`.
pub fn list<'a, T>(
    root: &'a Node<T>,
    path: &str,
    pattern: &str,
    separator: char,
) -> Result<Vec<ListEntry<'a, T>>> {
    list_matching(root, path, &WildcardMatcher::new(pattern), separator)
}

/// Like [`list`], with an already compiled matcher.
pub fn list_matching<'a, T>(
    root: &'a Node<T>,
    path: &str,
    matcher: &WildcardMatcher,
    separator: char,
) -> Result<Vec<ListEntry<'a, T>>> {
    let resolved = lookup(root, path, separator)?;
    let children = resolved
        .node
        .children()
        .ok_or_else(|| NamespaceError::NotADirectory(path.to_string()))?;

    let entries: Vec<_> = children
        .iter()
        .filter(|(name, _)| matcher.matches(name))
        .map(|(name, node)| ListEntry {
            name: name.as_str(),
            node,
        })
        .collect();

    tracing::trace!(
        "listed {:?}: {} of {} entries",
        path,
        entries.len(),
        children.len()
    );
    Ok(entries)
}
