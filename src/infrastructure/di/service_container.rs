//! Service container for dependency injection
//!
//! Wires settings and I/O implementations into the clue tree service.

use std::sync::Arc;

use crate::application::services::ClueTreeService;
use crate::config::Settings;
use crate::infrastructure::traits::{FileSystem, RealFileSystem, SystemViewer, Viewer};

/// Container holding all application services.
pub struct ServiceContainer {
    pub clue_tree: ClueTreeService,
}

impl ServiceContainer {
    /// Create a new service container with real implementations.
    pub fn new(settings: Settings) -> Self {
        let viewer = SystemViewer::new(settings.viewer.clone());
        Self::with_deps(settings, Arc::new(RealFileSystem), Arc::new(viewer))
    }

    /// Create a service container with custom dependencies (for testing).
    pub fn with_deps(settings: Settings, fs: Arc<dyn FileSystem>, viewer: Arc<dyn Viewer>) -> Self {
        Self {
            clue_tree: ClueTreeService::new(fs, viewer, Arc::new(settings)),
        }
    }
}
