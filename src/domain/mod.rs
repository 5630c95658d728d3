//! Domain layer: the clue tree, anchor ids and table layout
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod analysis;
pub mod entities;
pub mod error;
pub mod identifier;
pub mod layout;
pub mod outline;

pub use analysis::TreeReport;
pub use entities::{ChildValue, Node};
pub use error::DomainError;
pub use identifier::{child_id, section_id, Edge, ID_SEPARATOR};
pub use layout::{LayoutPolicy, Table, TableBuilder};
pub use outline::ToOutline;
