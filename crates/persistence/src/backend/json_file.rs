// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::SlotBackend;
use crate::data_models::StoreDocument;
use crate::error::PersistenceError;
use parkhost_domain::SlotStore;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Stores slots as a versioned JSON document.
///
/// A missing file loads as an empty store. Saves write a sibling
/// temporary file and rename it over the target, so readers see either
/// the old or the new document.
#[derive(Debug, Clone)]
pub struct JsonFileBackend {
    path: PathBuf,
}

impl JsonFileBackend {
    /// Creates a backing for the document at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the document path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        self.path.with_extension("json.tmp")
    }
}

impl SlotBackend for JsonFileBackend {
    fn load(&mut self) -> Result<SlotStore, PersistenceError> {
        if !self.path.exists() {
            info!(
                "No store document at {}, starting empty",
                self.path.display()
            );
            return Ok(SlotStore::new());
        }

        let content: String = std::fs::read_to_string(&self.path)?;
        let document: StoreDocument = serde_json::from_str(&content)?;
        let store: SlotStore = document.into_store()?;
        info!("Loaded {} slots from {}", store.len(), self.path.display());
        Ok(store)
    }

    fn save(&mut self, store: &SlotStore) -> Result<(), PersistenceError> {
        let content: String = serde_json::to_string_pretty(&StoreDocument::from_store(store))?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        let temp_path: PathBuf = self.temp_path();
        std::fs::write(&temp_path, content)?;
        std::fs::rename(&temp_path, &self.path)?;

        debug!("Saved {} slots to {}", store.len(), self.path.display());
        Ok(())
    }

    fn describe(&self) -> String {
        format!("json file {}", self.path.display())
    }
}
