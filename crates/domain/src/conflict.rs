// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Conflict resolution for batch slot creation.
//!
//! Resolution partitions the target dates; it never fails because of a
//! conflict. Conflicting dates are reported back and left out of the batch.

use crate::error::DomainError;
use crate::overlap::overlaps;
use crate::selection::SelectionSet;
use crate::slot_store::SlotStore;
use crate::types::{DateKey, Slot, SlotId, SlotStatus, TimeRange};
use crate::validation::validate_target_dates;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Which existing slots block a candidate range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConflictPolicy {
    /// Every slot that is not cancelled blocks, including disabled ones.
    #[default]
    NonCancelled,
    /// Only available and booked slots block.
    ActiveOnly,
}

impl ConflictPolicy {
    /// Returns true if a slot with `status` blocks its time range.
    #[must_use]
    pub const fn blocks(&self, status: SlotStatus) -> bool {
        match self {
            Self::NonCancelled => !matches!(status, SlotStatus::Cancelled),
            Self::ActiveOnly => matches!(status, SlotStatus::Available | SlotStatus::Booked),
        }
    }

    /// Returns the string representation of the policy.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::NonCancelled => "non-cancelled",
            Self::ActiveOnly => "active-only",
        }
    }
}

impl std::fmt::Display for ConflictPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ConflictPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "non-cancelled" | "non_cancelled" => Ok(Self::NonCancelled),
            "active-only" | "active_only" => Ok(Self::ActiveOnly),
            _ => Err(format!(
                "unknown conflict policy '{s}', expected 'non-cancelled' or 'active-only'"
            )),
        }
    }
}

/// A target date left out of a batch because an existing slot overlaps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conflict {
    /// The skipped date.
    pub date: DateKey,
    /// Existing slots on that date overlapping the candidate range.
    pub blocking: Vec<SlotId>,
    /// Human-readable explanation.
    pub reason: String,
}

/// Outcome of resolving a candidate range against a set of dates.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ConflictResolution {
    /// Dates that can take the new slot, ascending.
    pub applicable: Vec<DateKey>,
    /// Dates that cannot, ascending.
    pub conflicting: Vec<Conflict>,
}

impl ConflictResolution {
    /// Returns the conflicting dates.
    #[must_use]
    pub fn conflicting_dates(&self) -> Vec<DateKey> {
        self.conflicting.iter().map(|c| c.date).collect()
    }

    /// Returns true if no target date conflicts.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.conflicting.is_empty()
    }
}

/// Returns the slots on `date` that block `candidate` under `policy`.
#[must_use]
pub fn blocking_slots<'a>(
    candidate: &TimeRange,
    date: &DateKey,
    store: &'a SlotStore,
    policy: ConflictPolicy,
) -> Vec<&'a Slot> {
    store
        .slots_on(date)
        .iter()
        .filter(|slot| policy.blocks(slot.status) && overlaps(candidate, &slot.range))
        .collect()
}

/// Partitions `targets` into dates that can take `candidate` and dates
/// that already hold an overlapping slot.
///
/// # Errors
///
/// Returns `DomainError::EmptySelection` if `targets` is empty.
pub fn resolve_conflicts(
    candidate: &TimeRange,
    targets: &SelectionSet,
    store: &SlotStore,
    policy: ConflictPolicy,
) -> Result<ConflictResolution, DomainError> {
    validate_target_dates(targets)?;

    let mut resolution: ConflictResolution = ConflictResolution::default();
    for date in targets.iter() {
        let blocking: Vec<&Slot> = blocking_slots(candidate, date, store, policy);
        if blocking.is_empty() {
            resolution.applicable.push(*date);
        } else {
            let ranges: Vec<String> = blocking
                .iter()
                .map(|slot| format!("{} ({})", slot.range, slot.status))
                .collect();
            resolution.conflicting.push(Conflict {
                date: *date,
                blocking: blocking.iter().map(|slot| slot.id).collect(),
                reason: format!("{candidate} overlaps existing {}", ranges.join(", ")),
            });
        }
    }

    Ok(resolution)
}
