//! Full-tree traversal.
//!
//! Depth-first over an explicit stack of child iterators, so the depth of a
//! walk is bounded by memory rather than by the call stack.
//!
//! Only leaf payloads are produced. A directory's own record is not a leaf
//! and is skipped; empty directories produce nothing.
//!
//! Sibling order follows the children maps, which is insertion order today.
//! Callers must not rely on it staying that way.

use indexmap::map::Values;

use crate::node::Node;

/// Iterator over every leaf payload under a node.
pub struct Leaves<'a, T> {
    start: Option<&'a Node<T>>,
    stack: Vec<Values<'a, String, Node<T>>>,
}

impl<'a, T> Leaves<'a, T> {
    pub fn new(root: &'a Node<T>) -> Self {
        Self {
            start: Some(root),
            stack: Vec::new(),
        }
    }
}

impl<'a, T> Iterator for Leaves<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if let Some(start) = self.start.take() {
            match start {
                Node::Leaf(payload) => return Some(payload),
                Node::Directory { children, .. } => self.stack.push(children.values()),
            }
        }

        loop {
            let cursor = self.stack.last_mut()?;
            match cursor.next() {
                Some(Node::Leaf(payload)) => return Some(payload),
                Some(Node::Directory { children, .. }) => self.stack.push(children.values()),
                None => {
                    self.stack.pop();
                }
            }
        }
    }
}

/// Hand every leaf payload under `root` to `visitor`, each exactly once.
pub fn walk<T>(root: &Node<T>, mut visitor: impl FnMut(&T)) {
    for payload in Leaves::new(root) {
        visitor(payload);
    }
}
