//! Path resolution.

use crate::error::{NamespaceError, Result};
use crate::node::Node;

/// A successfully resolved path.
#[derive(Debug)]
pub struct Resolved<'a, 'p, T> {
    /// The node the path names.
    pub node: &'a Node<T>,
    /// The trailing path component; `None` when the path named the root.
    pub name: Option<&'p str>,
}

// Manual impls: the derives would require `T: Clone`/`T: Copy`.
impl<T> Clone for Resolved<'_, '_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Resolved<'_, '_, T> {}

/// Non-empty components of `path`, in order.
///
/// Leading, trailing and doubled separators produce no components.
pub fn components(path: &str, separator: char) -> impl Iterator<Item = &str> {
    path.split(separator).filter(|component| !component.is_empty())
}

/// Resolve `path` starting at `root`.
///
/// Each component must name a child of a directory by exact key. The walk
/// stops at the first missing component or leaf in the middle of the path;
/// nothing partial is returned. The empty path resolves to `root` itself.
pub fn lookup<'a, 'p, T>(root: &'a Node<T>, path: &'p str, separator: char) -> Result<Resolved<'a, 'p, T>> {
    let mut node = root;
    let mut name = None;

    for component in components(path, separator) {
        node = match node.child(component) {
            Some(child) => child,
            None => {
                tracing::debug!("lookup miss at {:?} in {:?}", component, path);
                return Err(NamespaceError::NotFound(path.to_string()));
            }
        };
        name = Some(component);
    }

    Ok(Resolved { node, name })
}
