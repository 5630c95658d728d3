//! acornle: render a branching clue tree into one navigable HTML page.
//!
//! Layers, innermost first:
//! - [`domain`]: the clue tree, anchor ids, table layout
//! - [`application`]: section rendering, page assembly, services
//! - [`infrastructure`]: filesystem and viewer implementations, wiring
//! - [`cli`]: argument parsing and command dispatch

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;
