//! Tree nodes.
//!
//! A node is either a leaf carrying one record, or a directory that owns its
//! children and may carry a record of its own (a directory entry with its own
//! timestamps). Every child is owned by exactly one parent; there are no back
//! pointers.

use std::fmt;

use indexmap::IndexMap;

/// Children of a directory, keyed by exact (case-sensitive) name.
///
/// Iteration follows insertion order. Replacing an existing name keeps the
/// slot of the first insertion.
pub type Children<T> = IndexMap<String, Node<T>>;

/// A node of the namespace tree.
///
/// Nodes are neither `Clone` nor `PartialEq`: both would have to follow
/// every level of an arbitrarily deep tree. Compare through
/// [`Node::payload`] and [`Node::children`] instead.
pub enum Node<T> {
    /// A record with no further structure.
    Leaf(T),
    /// A container; `payload` is set when a record describes the directory itself.
    Directory {
        payload: Option<T>,
        children: Children<T>,
    },
}

impl<T> Node<T> {
    /// An empty directory without a payload.
    pub fn empty_directory() -> Self {
        Node::Directory {
            payload: None,
            children: Children::new(),
        }
    }

    /// The record attached to this node, if any.
    pub fn payload(&self) -> Option<&T> {
        match self {
            Node::Leaf(payload) => Some(payload),
            Node::Directory { payload, .. } => payload.as_ref(),
        }
    }

    /// The children map, or `None` for a leaf.
    pub fn children(&self) -> Option<&Children<T>> {
        match self {
            Node::Leaf(_) => None,
            Node::Directory { children, .. } => Some(children),
        }
    }

    /// Look up a direct child by exact name.
    pub fn child(&self, name: &str) -> Option<&Node<T>> {
        self.children()?.get(name)
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf(_))
    }

    pub fn is_directory(&self) -> bool {
        matches!(self, Node::Directory { .. })
    }

    /// Number of direct children (0 for leaves).
    pub fn len(&self) -> usize {
        self.children().map_or(0, Children::len)
    }

    /// True for leaves and for directories without children.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// One level only: directories list their child names, not the children.
impl<T: fmt::Debug> fmt::Debug for Node<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Leaf(payload) => f.debug_tuple("Leaf").field(payload).finish(),
            Node::Directory { payload, children } => f
                .debug_struct("Directory")
                .field("payload", payload)
                .field("children", &children.keys().collect::<Vec<_>>())
                .finish(),
        }
    }
}

// Archive paths can nest arbitrarily deep; unlink children onto a heap
// stack so dropping never recurses.
impl<T> Drop for Node<T> {
    fn drop(&mut self) {
        let Node::Directory { children, .. } = self else {
            return;
        };
        if children.is_empty() {
            return;
        }

        let mut stack: Vec<Node<T>> = children.drain(..).map(|(_, child)| child).collect();
        while let Some(mut node) = stack.pop() {
            if let Node::Directory { children, .. } = &mut node {
                stack.extend(children.drain(..).map(|(_, child)| child));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dir(entries: Vec<(&str, Node<u32>)>) -> Node<u32> {
        Node::Directory {
            payload: None,
            children: entries
                .into_iter()
                .map(|(name, node)| (name.to_string(), node))
                .collect(),
        }
    }

    #[test]
    fn leaf_has_payload_and_no_children() {
        let leaf = Node::Leaf(7u32);
        assert_eq!(leaf.payload(), Some(&7));
        assert!(leaf.children().is_none());
        assert!(leaf.is_leaf());
        assert!(leaf.is_empty());
    }

    #[test]
    fn directory_payload_is_optional() {
        let bare: Node<u32> = Node::empty_directory();
        assert_eq!(bare.payload(), None);
        assert!(bare.is_directory());

        let described = Node::Directory {
            payload: Some(1u32),
            children: Children::new(),
        };
        assert_eq!(described.payload(), Some(&1));
    }

    #[test]
    fn child_lookup_is_exact() {
        let root = dir(vec![("Readme.md", Node::Leaf(1))]);
        assert!(root.child("Readme.md").is_some());
        assert!(root.child("readme.md").is_none());
        assert!(Node::Leaf(1u32).child("x").is_none());
    }

    fn chain(depth: u32) -> Node<u32> {
        let mut node = Node::Leaf(0u32);
        for level in 0..depth {
            node = Node::Directory {
                payload: Some(level),
                children: std::iter::once(("d".to_string(), node)).collect(),
            };
        }
        node
    }

    #[test]
    fn debug_shows_one_level() {
        let root = dir(vec![
            ("a", dir(vec![("b", Node::Leaf(2))])),
            ("c.txt", Node::Leaf(1)),
        ]);
        assert_eq!(
            format!("{:?}", root),
            r#"Directory { payload: None, children: ["a", "c.txt"] }"#
        );
        assert_eq!(format!("{:?}", Node::Leaf(7u32)), "Leaf(7)");
    }

    #[test]
    fn debug_of_a_deep_chain_does_not_overflow() {
        let node = chain(200_000);
        assert_eq!(
            format!("{:?}", node),
            r#"Directory { payload: Some(199999), children: ["d"] }"#
        );
    }

    #[test]
    fn dropping_a_deep_chain_does_not_overflow() {
        let node = chain(200_000);
        assert_eq!(node.len(), 1);
        drop(node);
    }
}
