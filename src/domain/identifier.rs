//! Anchor ids for rendered sections
//!
//! A section id spells out the path taken from the root: the root key,
//! then every edge label followed, joined with `-`. Ids are unique as long
//! as no edge label can be confused with a joined pair (see
//! `analysis::TreeReport::collisions`).

use crate::domain::Node;

pub const ID_SEPARATOR: &str = "-";

/// The edge a non-root node was reached by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge<'a> {
    pub parent_id: &'a str,
    pub label: &'a str,
}

impl<'a> Edge<'a> {
    pub fn new(parent_id: &'a str, label: &'a str) -> Self {
        Self { parent_id, label }
    }
}

/// Id of `node`'s section: its key for the root, otherwise `parent-label`.
pub fn section_id(edge: Option<Edge<'_>>, node: &Node) -> String {
    match edge {
        None => node.key.clone(),
        Some(edge) => child_id(edge.parent_id, edge.label),
    }
}

/// Id of the child reached from `parent_id` via `label`.
pub fn child_id(parent_id: &str, label: &str) -> String {
    format!("{parent_id}{ID_SEPARATOR}{label}")
}
