// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use parkhost_domain::{
    CalendarGrid, CalendarMonth, Conflict, ConflictPolicy, SelectionSet, Slot, SlotStore,
};
use serde::Serialize;

/// Everything one editing session owns.
///
/// The session is the single owner of the slot store and the selection;
/// transitions always produce a new value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    /// The displayed month.
    pub month: CalendarMonth,
    /// Whether clicks add to the selection instead of replacing it.
    pub multi_select: bool,
    /// Dates picked for the next batch operation.
    pub selection: SelectionSet,
    /// All slots.
    pub store: SlotStore,
    /// Which existing slots block new ones.
    pub policy: ConflictPolicy,
}

impl SessionState {
    /// Creates a session showing `month` over `store`, with nothing selected
    /// and multi-select off.
    #[must_use]
    pub const fn new(month: CalendarMonth, store: SlotStore, policy: ConflictPolicy) -> Self {
        Self {
            month,
            multi_select: false,
            selection: SelectionSet::new(),
            store,
            policy,
        }
    }

    /// Projects the displayed month.
    #[must_use]
    pub fn grid(&self) -> CalendarGrid {
        CalendarGrid::project(&self.month, &self.store, &self.selection)
    }
}

/// Per-batch report handed back to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct BatchResult {
    /// Slots created, in date order.
    pub applied: Vec<Slot>,
    /// Dates skipped because an existing slot overlaps.
    pub conflicts: Vec<Conflict>,
}

impl BatchResult {
    /// Returns true if at least one slot was created.
    #[must_use]
    pub fn is_success(&self) -> bool {
        !self.applied.is_empty()
    }
}

/// What a transition did, beyond producing the new state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The displayed month changed.
    Navigated,
    /// Only the selection or the selection mode changed.
    SelectionChanged,
    /// A batch or quick-add ran.
    BatchApplied(BatchResult),
    /// One slot changed; carries the updated slot.
    SlotUpdated(Slot),
    /// One slot was removed; carries the removed slot.
    SlotDeleted(Slot),
}

/// The result of a successful state transition.
///
/// Transitions are atomic: they either succeed completely or fail without side effects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionResult {
    /// The new state after the transition.
    pub new_state: SessionState,
    /// What happened.
    pub outcome: Outcome,
}
