// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::march;
use crate::{DomainError, ErrorKind, SlotId, SlotStatus, TimeOfDay};

#[test]
fn test_error_display_messages() {
    assert_eq!(
        DomainError::MissingTime { field: "start" }.to_string(),
        "Missing start time"
    );
    assert_eq!(
        DomainError::InvalidTimeRange {
            start: TimeOfDay::from_hm(12, 0).unwrap(),
            end: TimeOfDay::from_hm(10, 0).unwrap(),
        }
        .to_string(),
        "End time 10:00 must be after start time 12:00"
    );
    assert_eq!(
        DomainError::InvalidCapacity { capacity: 0 }.to_string(),
        "Invalid capacity: 0. Must be at least 1"
    );
    assert_eq!(DomainError::EmptySelection.to_string(), "No dates selected");
    assert_eq!(
        DomainError::SlotNotFound {
            date: march(4),
            slot_id: SlotId::new(7),
        }
        .to_string(),
        "Slot 7 not found on 2024-03-04"
    );
    assert_eq!(
        DomainError::InvalidStatusTransition {
            from: SlotStatus::Cancelled,
            to: SlotStatus::Available,
            reason: String::from("cancelled slots cannot be reopened"),
        }
        .to_string(),
        "Cannot transition slot from cancelled to available: cancelled slots cannot be reopened"
    );
}

#[test]
fn test_error_kinds() {
    assert_eq!(
        DomainError::InvalidCapacity { capacity: 0 }.kind(),
        ErrorKind::Validation
    );
    assert_eq!(DomainError::EmptySelection.kind(), ErrorKind::Validation);
    assert_eq!(
        DomainError::SlotNotFound {
            date: march(1),
            slot_id: SlotId::new(1),
        }
        .kind(),
        ErrorKind::NotFound
    );
    assert_eq!(
        DomainError::DeleteBookedSlot {
            slot_id: SlotId::new(1),
        }
        .kind(),
        ErrorKind::InvariantViolation
    );
    assert_eq!(
        DomainError::DeleteDisabledSlot {
            slot_id: SlotId::new(1),
        }
        .kind(),
        ErrorKind::InvariantViolation
    );
    assert_eq!(
        DomainError::CancelledSlotImmutable {
            slot_id: SlotId::new(1),
        }
        .kind(),
        ErrorKind::InvariantViolation
    );
}

#[test]
fn test_domain_error_is_std_error() {
    let err: Box<dyn std::error::Error> = Box::new(DomainError::MissingCancellationReason);
    assert_eq!(err.to_string(), "A cancellation reason is required");
}
