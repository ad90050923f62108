//! JSON persistence for the term library.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::debug;

use lexdrill_core::model::Library;

/// Load/save wrapper around one library JSON file.
pub struct LibraryStore {
    path: PathBuf,
}

impl LibraryStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the library. A missing file is an empty library, not an error.
    pub fn load(&self) -> Result<Library> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "no library file yet, starting empty");
            return Ok(Library::new());
        }
        let content = std::fs::read_to_string(&self.path)
            .with_context(|| format!("failed to read library from {}", self.path.display()))?;
        let library: Library =
            serde_json::from_str(&content).context("failed to parse library JSON")?;
        debug!(path = %self.path.display(), terms = library.len(), "library loaded");
        Ok(library)
    }

    /// Save the library as pretty JSON, creating parent directories.
    pub fn save(&self, library: &Library) -> Result<()> {
        let json = serde_json::to_string_pretty(library).context("failed to serialize library")?;
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, json)
            .with_context(|| format!("failed to write library to {}", self.path.display()))?;
        debug!(path = %self.path.display(), terms = library.len(), "library saved");
        Ok(())
    }
}
