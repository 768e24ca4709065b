// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::PersistenceError;
use parkhost_domain::{Slot, SlotStore};
use serde::{Deserialize, Serialize};

/// Current on-disk format version.
pub const STORE_DOCUMENT_VERSION: u32 = 1;

/// Serializable representation of a `SlotStore`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreDocument {
    pub version: u32,
    pub next_id: u64,
    pub slots: Vec<Slot>,
}

impl StoreDocument {
    /// Captures `store` in the current format.
    #[must_use]
    pub fn from_store(store: &SlotStore) -> Self {
        Self {
            version: STORE_DOCUMENT_VERSION,
            next_id: store.next_id(),
            slots: store.iter().cloned().collect(),
        }
    }

    /// Rebuilds the store, re-checking every slot invariant.
    ///
    /// # Errors
    ///
    /// Returns an error if the version is unknown or any slot is invalid.
    pub fn into_store(self) -> Result<SlotStore, PersistenceError> {
        if self.version != STORE_DOCUMENT_VERSION {
            return Err(PersistenceError::UnsupportedVersion {
                found: self.version,
                expected: STORE_DOCUMENT_VERSION,
            });
        }
        SlotStore::from_slots(self.slots, self.next_id).map_err(PersistenceError::InvalidDocument)
    }
}
