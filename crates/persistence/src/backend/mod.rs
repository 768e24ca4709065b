// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Slot store backings.
//!
//! A backing loads the store once when a session opens and receives a
//! full copy of the store on every flush. Backings never see partial
//! updates.
//!
//! ## Backings
//!
//! - `memory`: keeps the last flushed store in memory (tests, embedding)
//! - `json_file`: a versioned JSON document on disk

pub mod json_file;
pub mod memory;

use crate::error::PersistenceError;
use parkhost_domain::SlotStore;

/// Trait for pluggable slot store backings.
///
/// All call sites share the same conflict and lifecycle guarantees
/// regardless of which backing is plugged in; a backing only stores
/// and returns whole stores.
pub trait SlotBackend {
    /// Loads the stored slots.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing cannot be read or holds invalid data.
    fn load(&mut self) -> Result<SlotStore, PersistenceError>;

    /// Replaces the stored slots with `store`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing cannot be written.
    fn save(&mut self, store: &SlotStore) -> Result<(), PersistenceError>;

    /// Describes the backing for logs.
    fn describe(&self) -> String;
}
