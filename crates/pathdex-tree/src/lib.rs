//! pathdex-tree (索): the namespace index.
//!
//! Turns a flat snapshot of path-bearing records (archive entries, rows of a
//! manifest, anything enumerable) into an immutable in-memory tree that a
//! filesystem adapter can query without rescanning the source:
//!
//! - **Node**: leaf or directory, generic over the record payload
//! - **TreeBuilder**: one pass over the records, synthesizing directories
//! - **lookup**: resolve a separator-delimited path to a node
//! - **list**: direct children of a directory filtered by a wildcard
//! - **Leaves / walk**: iterative traversal of every leaf payload
//! - **Namespace**: owns one built tree per snapshot
//!
//! # Case sensitivity
//!
//! Child maps are keyed by exact names, so `lookup` is case-sensitive.
//! Listings go through [`pathdex_glob::WildcardMatcher`], which is not.

pub mod builder;
pub mod error;
pub mod listing;
pub mod lookup;
pub mod namespace;
pub mod node;
pub mod options;
pub mod walker;

pub use builder::{BuildStats, TreeBuilder, build_tree, build_tree_with_directories};
pub use error::{NamespaceError, Result};
pub use listing::{ListEntry, list, list_matching};
pub use lookup::{Resolved, components, lookup};
pub use namespace::Namespace;
pub use node::{Children, Node};
pub use options::TreeOptions;
pub use walker::{Leaves, walk};
