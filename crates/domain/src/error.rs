// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::types::{DateKey, SlotId, SlotStatus, TimeOfDay};

/// Broad classification of a `DomainError`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// User input that can be corrected and resubmitted.
    Validation,
    /// The referenced slot or date does not exist.
    NotFound,
    /// The operation would break a slot lifecycle invariant. It is refused
    /// and the store is left untouched.
    InvariantViolation,
}

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A start or end time was not supplied.
    MissingTime {
        /// Which field was missing (`start` or `end`).
        field: &'static str,
    },
    /// A time string could not be normalized.
    InvalidTimeFormat {
        /// The raw input.
        input: String,
        /// Why it was rejected.
        reason: String,
    },
    /// The range does not satisfy `start < end`.
    InvalidTimeRange {
        /// The requested start.
        start: TimeOfDay,
        /// The requested end.
        end: TimeOfDay,
    },
    /// A date string or component set is not a real date.
    InvalidDate {
        /// The raw input.
        input: String,
        /// Why it was rejected.
        reason: String,
    },
    /// The `(year, month)` pair is out of range. `month` is 0-based.
    InvalidMonth {
        /// The year.
        year: i32,
        /// The 0-based month.
        month: u8,
    },
    /// Capacity must be at least 1.
    InvalidCapacity {
        /// The rejected capacity.
        capacity: u32,
    },
    /// Capacity cannot drop below the number of spots already booked.
    CapacityBelowBooked {
        /// The slot being edited.
        slot_id: SlotId,
        /// The requested capacity.
        capacity: u32,
        /// Spots already booked.
        booked: u32,
    },
    /// No dates were selected for a batch operation.
    EmptySelection,
    /// The date is not part of the displayed month.
    DateOutsideMonth {
        /// The date.
        date: DateKey,
    },
    /// Cancellation requires a non-blank reason.
    MissingCancellationReason,
    /// A booking must take at least one spot.
    InvalidBookingCount {
        /// The rejected count.
        count: u32,
    },
    /// A booking would exceed the slot capacity.
    OverBooked {
        /// The slot being booked.
        slot_id: SlotId,
        /// The slot capacity.
        capacity: u32,
        /// Spots already booked.
        booked: u32,
        /// Spots requested.
        requested: u32,
    },
    /// A status string is not recognized.
    InvalidSlotStatus(String),
    /// A slot identifier string is not recognized.
    InvalidSlotId(String),
    /// No slot with this id exists on this date.
    SlotNotFound {
        /// The date searched.
        date: DateKey,
        /// The missing slot.
        slot_id: SlotId,
    },
    /// Booked slots must be cancelled, never deleted.
    DeleteBookedSlot {
        /// The slot.
        slot_id: SlotId,
    },
    /// Disabled slots must be re-enabled or cancelled before deletion.
    DeleteDisabledSlot {
        /// The slot.
        slot_id: SlotId,
    },
    /// The slot lifecycle does not allow this transition.
    InvalidStatusTransition {
        /// The current status.
        from: SlotStatus,
        /// The requested status.
        to: SlotStatus,
        /// Why the transition is refused.
        reason: String,
    },
    /// Cancelled slots are terminal and cannot be edited.
    CancelledSlotImmutable {
        /// The slot.
        slot_id: SlotId,
    },
    /// A slot id appears more than once in seeded data.
    DuplicateSlotId {
        /// The repeated id.
        slot_id: SlotId,
    },
    /// Seeded slot data violates a slot invariant.
    InconsistentSlot {
        /// The slot.
        slot_id: SlotId,
        /// The violated rule.
        reason: String,
    },
}

impl DomainError {
    /// Classifies this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingTime { .. }
            | Self::InvalidTimeFormat { .. }
            | Self::InvalidTimeRange { .. }
            | Self::InvalidDate { .. }
            | Self::InvalidMonth { .. }
            | Self::InvalidCapacity { .. }
            | Self::CapacityBelowBooked { .. }
            | Self::EmptySelection
            | Self::DateOutsideMonth { .. }
            | Self::MissingCancellationReason
            | Self::InvalidBookingCount { .. }
            | Self::OverBooked { .. }
            | Self::InvalidSlotStatus(_)
            | Self::InvalidSlotId(_) => ErrorKind::Validation,
            Self::SlotNotFound { .. } => ErrorKind::NotFound,
            Self::DeleteBookedSlot { .. }
            | Self::DeleteDisabledSlot { .. }
            | Self::InvalidStatusTransition { .. }
            | Self::CancelledSlotImmutable { .. }
            | Self::DuplicateSlotId { .. }
            | Self::InconsistentSlot { .. } => ErrorKind::InvariantViolation,
        }
    }
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingTime { field } => write!(f, "Missing {field} time"),
            Self::InvalidTimeFormat { input, reason } => {
                write!(f, "Invalid time '{input}': {reason}")
            }
            Self::InvalidTimeRange { start, end } => {
                write!(f, "End time {end} must be after start time {start}")
            }
            Self::InvalidDate { input, reason } => write!(f, "Invalid date '{input}': {reason}"),
            Self::InvalidMonth { year, month } => {
                write!(f, "Invalid month {month} for year {year}. Must be between 0 and 11")
            }
            Self::InvalidCapacity { capacity } => {
                write!(f, "Invalid capacity: {capacity}. Must be at least 1")
            }
            Self::CapacityBelowBooked {
                slot_id,
                capacity,
                booked,
            } => {
                write!(
                    f,
                    "Capacity {capacity} for slot {slot_id} is below the {booked} spots already booked"
                )
            }
            Self::EmptySelection => write!(f, "No dates selected"),
            Self::DateOutsideMonth { date } => {
                write!(f, "Date {date} is outside the displayed month")
            }
            Self::MissingCancellationReason => write!(f, "A cancellation reason is required"),
            Self::InvalidBookingCount { count } => {
                write!(f, "Invalid booking count: {count}. Must be at least 1")
            }
            Self::OverBooked {
                slot_id,
                capacity,
                booked,
                requested,
            } => {
                write!(
                    f,
                    "Cannot book {requested} spots on slot {slot_id}: {booked} of {capacity} already booked"
                )
            }
            Self::InvalidSlotStatus(status) => write!(f, "Invalid slot status: {status}"),
            Self::InvalidSlotId(id) => write!(f, "Invalid slot id: {id}"),
            Self::SlotNotFound { date, slot_id } => {
                write!(f, "Slot {slot_id} not found on {date}")
            }
            Self::DeleteBookedSlot { slot_id } => {
                write!(
                    f,
                    "Slot {slot_id} has bookings and cannot be deleted; cancel it instead"
                )
            }
            Self::DeleteDisabledSlot { slot_id } => {
                write!(
                    f,
                    "Slot {slot_id} is disabled and cannot be deleted; re-enable or cancel it first"
                )
            }
            Self::InvalidStatusTransition { from, to, reason } => {
                write!(f, "Cannot transition slot from {from} to {to}: {reason}")
            }
            Self::CancelledSlotImmutable { slot_id } => {
                write!(f, "Slot {slot_id} is cancelled and cannot be modified")
            }
            Self::DuplicateSlotId { slot_id } => write!(f, "Duplicate slot id {slot_id}"),
            Self::InconsistentSlot { slot_id, reason } => {
                write!(f, "Slot {slot_id} is inconsistent: {reason}")
            }
        }
    }
}

impl std::error::Error for DomainError {}
