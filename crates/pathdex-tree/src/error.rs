//! Errors returned by namespace queries.
//!
//! Building never fails; collisions resolve by overwrite. Only queries
//! report errors, and they are local signals for the caller to translate
//! into its own protocol status.

/// A failed namespace query.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NamespaceError {
    /// A path component is absent, or an intermediate component is a leaf.
    #[error("not found: {0}")]
    NotFound(String),

    /// A listing was requested on a leaf.
    #[error("not a directory: {0}")]
    NotADirectory(String),

    /// The path contains wildcard characters and cannot name an entry.
    #[error("invalid name: {0}")]
    InvalidName(String),
}

impl NamespaceError {
    /// Returns true for [`NamespaceError::NotFound`].
    pub fn is_not_found(&self) -> bool {
        matches!(self, NamespaceError::NotFound(_))
    }
}

pub type Result<T> = std::result::Result<T, NamespaceError>;
