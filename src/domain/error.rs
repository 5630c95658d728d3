//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent violations of the clue-tree encoding or layout rules.
/// These are independent of infrastructure concerns.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum DomainError {
    /// A child value that is neither a nested node nor a leaf string.
    #[error("structural violation at '{path}': expected object or string, found {found}")]
    StructuralViolation { path: String, found: &'static str },

    /// A node must be encoded as an object with exactly one entry.
    #[error("node at '{path}' must have exactly one key, found {count}")]
    NodeArity { path: String, count: usize },

    /// The single entry of a node must map edge labels to children.
    #[error("node '{key}' at '{path}' must map to an object, found {found}")]
    NodeBodyNotMapping {
        path: String,
        key: String,
        found: &'static str,
    },

    #[error("invalid layout policy: {0}")]
    InvalidLayout(String),
}
