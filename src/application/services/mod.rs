//! Application services
//!
//! Concrete service implementations that orchestrate domain logic.
//! Services depend on I/O boundary traits (FileSystem, Viewer)
//! but are themselves concrete structs, not traits.

mod clue_tree;

pub use clue_tree::{ClueTreeService, RenderReport, RenderedDocument};
