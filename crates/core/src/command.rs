// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use parkhost_domain::{CalendarMonth, DateKey, SlotId, SlotTemplate};

/// A command represents host intent as data only.
///
/// Commands are the only way to request state changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Show a specific month.
    Navigate {
        /// The month to show.
        month: CalendarMonth,
    },
    /// Show the following month.
    NextMonth,
    /// Show the preceding month.
    PreviousMonth,
    /// Switch multi-select mode on or off.
    SetMultiSelect(bool),
    /// Click a single date.
    ClickDate(DateKey),
    /// Toggle a whole grid row (multi-select only).
    ToggleWeek(usize),
    /// Toggle every date on a weekday, Sunday is 0 (multi-select only).
    ToggleWeekday(usize),
    /// Drop the current selection.
    ClearSelection,
    /// Create a slot on every selected date that has room for it.
    ApplyToSelection {
        /// The slot to create.
        template: SlotTemplate,
    },
    /// Create a slot on one date, ignoring the selection.
    QuickAdd {
        /// The target date.
        date: DateKey,
        /// The slot to create.
        template: SlotTemplate,
    },
    /// Change a slot's capacity.
    EditCapacity {
        /// The slot's date.
        date: DateKey,
        /// The slot.
        slot_id: SlotId,
        /// The new capacity.
        capacity: u32,
    },
    /// Flip a slot between available and disabled.
    ToggleDisable {
        /// The slot's date.
        date: DateKey,
        /// The slot.
        slot_id: SlotId,
    },
    /// Permanently withdraw a slot.
    Cancel {
        /// The slot's date.
        date: DateKey,
        /// The slot.
        slot_id: SlotId,
        /// Why the slot is withdrawn.
        reason: String,
    },
    /// Remove an available or cancelled slot.
    Delete {
        /// The slot's date.
        date: DateKey,
        /// The slot.
        slot_id: SlotId,
    },
    /// Record spots taken by an accepted booking.
    RecordBooking {
        /// The slot's date.
        date: DateKey,
        /// The slot.
        slot_id: SlotId,
        /// Spots taken.
        count: u32,
    },
}

impl Command {
    /// Returns the command name used in logs.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Navigate { .. } => "Navigate",
            Self::NextMonth => "NextMonth",
            Self::PreviousMonth => "PreviousMonth",
            Self::SetMultiSelect(_) => "SetMultiSelect",
            Self::ClickDate(_) => "ClickDate",
            Self::ToggleWeek(_) => "ToggleWeek",
            Self::ToggleWeekday(_) => "ToggleWeekday",
            Self::ClearSelection => "ClearSelection",
            Self::ApplyToSelection { .. } => "ApplyToSelection",
            Self::QuickAdd { .. } => "QuickAdd",
            Self::EditCapacity { .. } => "EditCapacity",
            Self::ToggleDisable { .. } => "ToggleDisable",
            Self::Cancel { .. } => "Cancel",
            Self::Delete { .. } => "Delete",
            Self::RecordBooking { .. } => "RecordBooking",
        }
    }

    /// Returns true if the command can change the slot store.
    #[must_use]
    pub const fn mutates_store(&self) -> bool {
        matches!(
            self,
            Self::ApplyToSelection { .. }
                | Self::QuickAdd { .. }
                | Self::EditCapacity { .. }
                | Self::ToggleDisable { .. }
                | Self::Cancel { .. }
                | Self::Delete { .. }
                | Self::RecordBooking { .. }
        )
    }
}
