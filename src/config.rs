//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/acornle/acornle.toml`
//! 3. Local config: `<project_dir>/.acornle.toml`
//! 4. Environment variables: `ACORNLE_*` prefix, `__` between nested keys
//!    (e.g. `ACORNLE_RENDER__TOP_ANCHOR=root`)

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment, File};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::application::ApplicationError;
use crate::domain::LayoutPolicy;

/// Page shell settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PageConfig {
    /// Document title
    pub title: String,
    /// `lang` attribute of the `<html>` element
    pub lang: String,
    /// Contents of the `<style>` element
    pub style: String,
    /// Link appended after the last section (omitted when unset or empty)
    pub repository_url: Option<String>,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            title: "acornle".into(),
            lang: "ja".into(),
            style: "h2, h3, a, td {font-family: monospace;}".into(),
            repository_url: Some("https://github.com/hand-accident/acornle".into()),
        }
    }
}

/// Section rendering settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RenderConfig {
    /// Appended to every leaf cell
    pub leaf_marker: String,
    /// Target of the "top" link in every section.
    ///
    /// Defaults to `slate`, a fixed anchor that is not derived from the tree;
    /// a warning is logged when it differs from the root section id.
    pub top_anchor: String,
    pub top_label: String,
    pub up_label: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            leaf_marker: "🌰".into(),
            top_anchor: "slate".into(),
            top_label: "🌰".into(),
            up_label: "↑".into(),
        }
    }
}

/// Unified configuration for acornle.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Clue tree JSON (relative paths resolve against the project dir)
    pub input: PathBuf,
    /// Rendered HTML document
    pub output: PathBuf,
    /// Replace an existing output instead of refusing to write
    pub force_overwrite: bool,
    /// Open the document in a viewer after a successful write
    pub open_after_render: bool,
    /// Viewer program (default: platform opener)
    pub viewer: Option<String>,
    pub page: PageConfig,
    pub render: RenderConfig,
    pub layout: LayoutPolicy,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            input: PathBuf::from("acorn.json"),
            output: PathBuf::from("index_link.html"),
            force_overwrite: true,
            open_after_render: true,
            viewer: None,
            page: PageConfig::default(),
            render: RenderConfig::default(),
            layout: LayoutPolicy::default(),
        }
    }
}

/// Get the XDG config directory for acornle.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "acornle").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("acornle.toml"))
}

/// Get the path to the local config file in a project directory.
pub fn local_config_path(project_dir: &Path) -> PathBuf {
    project_dir.join(".acornle.toml")
}

impl Settings {
    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `project_dir` - Optional directory holding a local `.acornle.toml`
    ///
    /// Each layer replaces the values it specifies; unspecified keys fall
    /// through to the layer below.
    pub fn load(project_dir: Option<&Path>) -> Result<Self, ApplicationError> {
        let defaults = Config::try_from(&Settings::default()).map_err(config_err)?;
        let mut builder = Config::builder().add_source(defaults);

        if let Some(global_path) = global_config_path() {
            if global_path.exists() {
                builder = builder.add_source(File::from(global_path).required(false));
            }
        }

        if let Some(dir) = project_dir {
            let local_path = local_config_path(dir);
            if local_path.exists() {
                builder = builder.add_source(File::from(local_path).required(true));
            }
        }

        builder = builder.add_source(
            Environment::with_prefix("ACORNLE")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build().map_err(config_err)?;
        let mut settings: Self = config.try_deserialize().map_err(config_err)?;

        // Expand ~ and $VAR in path-like fields
        settings.expand_paths();
        settings.page.repository_url = settings
            .page
            .repository_url
            .take()
            .filter(|url| !url.is_empty());
        settings
            .layout
            .validate()
            .map_err(|e| ApplicationError::Config {
                message: e.to_string(),
            })?;

        Ok(settings)
    }

    /// Expand shell variables and tilde in path-like fields.
    fn expand_paths(&mut self) {
        self.input = PathBuf::from(expand(&self.input.to_string_lossy()));
        self.output = PathBuf::from(expand(&self.output.to_string_lossy()));
        self.viewer = self.viewer.as_deref().map(expand);
    }

    /// Input path, anchored at `base` when relative.
    pub fn input_path(&self, base: &Path) -> PathBuf {
        anchored(base, &self.input)
    }

    /// Output path, anchored at `base` when relative.
    pub fn output_path(&self, base: &Path) -> PathBuf {
        anchored(base, &self.output)
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize config: {e}"),
        })
    }

    /// Generate a template config file.
    pub fn template() -> String {
        r#"# acornle configuration
#
# Locations (by precedence, lowest to highest):
#   Global: ~/.config/acornle/acornle.toml
#   Local:  <project_dir>/.acornle.toml
#   Env:    ACORNLE_* environment variables, e.g. ACORNLE_RENDER__TOP_ANCHOR

# Clue tree JSON and rendered page (relative to the project dir)
# input = "acorn.json"
# output = "index_link.html"

# Replace an existing page; when false an existing page is an error
# force_overwrite = true

# Open the page after rendering, optionally with a specific program
# open_after_render = true
# viewer = "firefox"

[page]
# title = "acornle"
# lang = "ja"
# style = "h2, h3, a, td {font-family: monospace;}"
# Link after the last section; set to "" to leave it out
# repository_url = "https://github.com/hand-accident/acornle"

[render]
# leaf_marker = "🌰"
# Every section links here; set it to the root key to link the first section
# top_anchor = "slate"
# top_label = "🌰"
# up_label = "↑"

[layout]
# Column height by number of edges: <= medium_above -> small_chunk,
# <= large_above -> medium_chunk, otherwise large_chunk
# small_chunk = 9
# medium_chunk = 18
# large_chunk = 27
# medium_above = 54
# large_above = 81
"#
        .to_string()
    }
}

fn expand(value: &str) -> String {
    shellexpand::full(value)
        .map(|expanded| expanded.into_owned())
        .unwrap_or_else(|_| value.to_string())
}

fn anchored(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}
