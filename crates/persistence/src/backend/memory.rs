// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::SlotBackend;
use crate::error::PersistenceError;
use parkhost_domain::SlotStore;
use tracing::debug;

/// Keeps the last flushed store in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryBackend {
    store: SlotStore,
    saves: usize,
}

impl InMemoryBackend {
    /// Creates an empty backing.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            store: SlotStore::new(),
            saves: 0,
        }
    }

    /// Creates a backing that loads `store`.
    #[must_use]
    pub const fn seeded(store: SlotStore) -> Self {
        Self { store, saves: 0 }
    }

    /// Returns the last flushed (or seeded) store.
    #[must_use]
    pub const fn stored(&self) -> &SlotStore {
        &self.store
    }

    /// Returns how many times the store has been flushed.
    #[must_use]
    pub const fn save_count(&self) -> usize {
        self.saves
    }
}

impl SlotBackend for InMemoryBackend {
    fn load(&mut self) -> Result<SlotStore, PersistenceError> {
        debug!("Loading {} slots from memory", self.store.len());
        Ok(self.store.clone())
    }

    fn save(&mut self, store: &SlotStore) -> Result<(), PersistenceError> {
        self.store = store.clone();
        self.saves += 1;
        debug!("Saved {} slots to memory (save #{})", store.len(), self.saves);
        Ok(())
    }

    fn describe(&self) -> String {
        String::from("in-memory")
    }
}
