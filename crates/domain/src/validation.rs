// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::selection::SelectionSet;
use crate::types::{Slot, SlotStatus};

/// Validates that a slot capacity is at least 1.
///
/// # Errors
///
/// Returns `DomainError::InvalidCapacity` if `capacity` is zero.
pub const fn validate_capacity(capacity: u32) -> Result<(), DomainError> {
    if capacity == 0 {
        return Err(DomainError::InvalidCapacity { capacity });
    }
    Ok(())
}

/// Validates and normalizes a cancellation reason.
///
/// # Returns
///
/// The trimmed reason.
///
/// # Errors
///
/// Returns `DomainError::MissingCancellationReason` if the reason is blank.
pub fn validate_cancellation_reason(reason: &str) -> Result<String, DomainError> {
    let trimmed: &str = reason.trim();
    if trimmed.is_empty() {
        return Err(DomainError::MissingCancellationReason);
    }
    Ok(trimmed.to_string())
}

/// Validates that a batch operation has at least one target date.
///
/// # Errors
///
/// Returns `DomainError::EmptySelection` if the selection is empty.
pub fn validate_target_dates(targets: &SelectionSet) -> Result<(), DomainError> {
    if targets.is_empty() {
        return Err(DomainError::EmptySelection);
    }
    Ok(())
}

/// Validates the invariants every stored slot must hold.
///
/// This covers data arriving from outside the session (seeding, loading).
///
/// # Errors
///
/// Returns `DomainError::InconsistentSlot` if:
/// - capacity is zero
/// - `booked > capacity`
/// - an available or disabled slot carries bookings
/// - a booked slot carries no bookings
/// - a cancellation reason is present on a slot that is not cancelled
pub fn validate_slot(slot: &Slot) -> Result<(), DomainError> {
    let inconsistent = |reason: &str| DomainError::InconsistentSlot {
        slot_id: slot.id,
        reason: reason.to_string(),
    };

    if slot.capacity == 0 {
        return Err(inconsistent("capacity must be at least 1"));
    }
    if slot.booked > slot.capacity {
        return Err(inconsistent("booked exceeds capacity"));
    }
    match slot.status {
        SlotStatus::Available | SlotStatus::Disabled if slot.booked > 0 => {
            return Err(inconsistent("only booked or cancelled slots may hold bookings"));
        }
        SlotStatus::Booked if slot.booked == 0 => {
            return Err(inconsistent("booked slots must hold at least one booking"));
        }
        _ => {}
    }
    if slot.cancellation_reason.is_some() && !slot.is_cancelled() {
        return Err(inconsistent("only cancelled slots carry a cancellation reason"));
    }
    Ok(())
}
