//! Clue tree service
//!
//! Loads a clue tree from JSON, renders it to a single HTML page, writes
//! the page and optionally hands it to a viewer.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde_json::Value;
use termtree::Tree;
use tracing::{debug, info, instrument};

use crate::application::document::DocumentAssembler;
use crate::application::render::{NodeRenderer, Section};
use crate::application::{ApplicationError, ApplicationResult, IoResultExt};
use crate::config::Settings;
use crate::domain::{Node, ToOutline, TreeReport};
use crate::infrastructure::traits::{FileSystem, Viewer};

/// A rendered page and the sections it contains.
#[derive(Debug, Clone)]
pub struct RenderedDocument {
    pub html: String,
    /// Section ids in document order
    pub section_ids: Vec<String>,
}

/// Outcome of [`ClueTreeService::publish`].
#[derive(Debug, Clone)]
pub struct RenderReport {
    pub output: PathBuf,
    pub sections: usize,
    pub bytes: usize,
    /// Whether the viewer hook ran
    pub opened: bool,
}

/// Service turning clue trees into pages.
pub struct ClueTreeService {
    fs: Arc<dyn FileSystem>,
    viewer: Arc<dyn Viewer>,
    settings: Arc<Settings>,
}

impl ClueTreeService {
    /// Create a new clue tree service.
    pub fn new(
        fs: Arc<dyn FileSystem>,
        viewer: Arc<dyn Viewer>,
        settings: Arc<Settings>,
    ) -> Self {
        Self {
            fs,
            viewer,
            settings,
        }
    }

    /// Read and decode the clue tree at `input`.
    pub fn load(&self, input: &Path) -> ApplicationResult<Node> {
        debug!("load: input={}", input.display());
        if !self.fs.exists(input) {
            return Err(ApplicationError::InputNotFound(input.to_path_buf()));
        }

        let content = self
            .fs
            .read_to_string(input)
            .with_path_context("read clue tree", input)?;
        let value: Value =
            serde_json::from_str(&content).map_err(|source| ApplicationError::InvalidInput {
                path: input.to_path_buf(),
                source,
            })?;

        Ok(Node::from_json(&value)?)
    }

    /// Render every section of `root`, pre-order.
    pub fn render_sections(&self, root: &Node) -> Vec<Section> {
        let renderer = NodeRenderer::new(self.settings.render.clone(), self.settings.layout);
        let mut sections: Vec<Section> = Vec::new();
        renderer.render_tree(root, &mut sections);
        debug!("render_sections: {} sections", sections.len());
        sections
    }

    /// Render `root` into a complete page.
    pub fn render(&self, root: &Node) -> RenderedDocument {
        let sections = self.render_sections(root);
        let html = DocumentAssembler::new(self.settings.page.clone()).assemble(&sections);
        RenderedDocument {
            html,
            section_ids: sections.into_iter().map(|s| s.id).collect(),
        }
    }

    /// Write `html` to `output`.
    ///
    /// An existing file is replaced when `force_overwrite` is set and is an
    /// error otherwise.
    pub fn write(&self, output: &Path, html: &str) -> ApplicationResult<()> {
        debug!("write: output={}, bytes={}", output.display(), html.len());
        if self.fs.exists(output) {
            if !self.settings.force_overwrite {
                return Err(ApplicationError::OutputExists(output.to_path_buf()));
            }
            self.fs
                .remove_file(output)
                .with_path_context("remove previous document", output)?;
        }
        self.fs
            .ensure_parent(output)
            .with_path_context("create output directory", output)?;
        self.fs
            .write(output, html)
            .with_path_context("write document", output)
    }

    /// Load, render and write; then run the viewer hook if `open` is set.
    ///
    /// Nothing is written when loading fails, and the viewer only runs after
    /// a successful write.
    #[instrument(skip(self))]
    pub fn publish(&self, input: &Path, output: &Path, open: bool) -> ApplicationResult<RenderReport> {
        let root = self.load(input)?;
        let document = self.render(&root);
        self.write(output, &document.html)?;
        info!(
            "wrote {} sections to {}",
            document.section_ids.len(),
            output.display()
        );

        if open {
            self.viewer
                .open(output)
                .with_path_context("open document", output)?;
        }

        Ok(RenderReport {
            output: output.to_path_buf(),
            sections: document.section_ids.len(),
            bytes: document.html.len(),
            opened: open,
        })
    }

    /// Terminal outline of `root`.
    pub fn outline(&self, root: &Node) -> Tree<String> {
        root.to_outline(&self.settings.render.leaf_marker)
    }

    /// Shape and anchor collisions of `root`.
    pub fn check(&self, root: &Node) -> TreeReport {
        TreeReport::analyze(root)
    }
}
