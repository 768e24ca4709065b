// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod apply;
mod command;
mod error;
mod state;

#[cfg(test)]
mod tests;

use parkhost_domain::{ConflictPolicy, DomainError, Slot, SlotStore, overlaps};

// Re-export public types and functions
pub use apply::apply;
pub use command::Command;
pub use error::CoreError;
pub use state::{BatchResult, Outcome, SessionState, TransitionResult};

/// Checks that no two slots that block under `policy` overlap on the same date.
///
/// This is a read-only check over the whole store, used after loading
/// external data and in tests.
///
/// # Errors
///
/// Returns `DomainError::InconsistentSlot` naming the later of the first
/// overlapping pair found.
pub fn validate_no_overlaps(store: &SlotStore, policy: ConflictPolicy) -> Result<(), DomainError> {
    for date in store.dates() {
        let active: Vec<&Slot> = store
            .slots_on(date)
            .iter()
            .filter(|slot| policy.blocks(slot.status))
            .collect();
        for (index, slot) in active.iter().enumerate() {
            if let Some(other) = active[..index]
                .iter()
                .find(|other| overlaps(&other.range, &slot.range))
            {
                return Err(DomainError::InconsistentSlot {
                    slot_id: slot.id,
                    reason: format!("overlaps slot {} on {date}", other.id),
                });
            }
        }
    }
    Ok(())
}
