use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::application::dto::run_config::{Verbosity, DEFAULT_CACHE_DIR, DEFAULT_OUTPUT};
use crate::domain::services::manifest_parser::DEFAULT_MANIFEST_MARKER;
use crate::domain::services::region_resolver::{DEFAULT_FILE_NAME_COLUMN, DEFAULT_REGION_COLUMN};

/// Optional JSON config file. Every field falls back to its default, and
/// command-line flags override whatever is set here.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub cache_dir: String,
    pub keep_cache: bool,
    pub output: String,
    pub verbosity: Verbosity,

    // Vendor format
    pub manifest_marker: String,
    pub region_column: String,
    pub file_name_column: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cache_dir: DEFAULT_CACHE_DIR.to_string(),
            keep_cache: false,
            output: DEFAULT_OUTPUT.to_string(),
            verbosity: Verbosity::default(),
            manifest_marker: DEFAULT_MANIFEST_MARKER.to_string(),
            region_column: DEFAULT_REGION_COLUMN.to_string(),
            file_name_column: DEFAULT_FILE_NAME_COLUMN.to_string(),
        }
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Config = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        Ok(config)
    }

    /// Loads `path` when given, otherwise returns the defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::load(p),
            None => Ok(Self::default()),
        }
    }
}
