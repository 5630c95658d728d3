//! Application layer: rendering, page assembly and services
//!
//! This layer orchestrates domain logic and depends on I/O boundary traits.

pub mod document;
pub mod error;
pub mod error_ext;
pub mod markup;
pub mod render;
pub mod services;

pub use document::DocumentAssembler;
pub use error::{ApplicationError, ApplicationResult};
pub use error_ext::IoResultExt;
pub use render::{CellContent, NodeRenderer, Section, SectionSink};
