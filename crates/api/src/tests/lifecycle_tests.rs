// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::ApiError;
use crate::tests::helpers::{add_booked_slot, add_slot, create_test_controller};
use parkhost_domain::{SlotId, SlotStatus};

const DATE: &str = "2024-03-04";

#[test]
fn test_edit_capacity() {
    let mut controller = create_test_controller();
    let slot = add_slot(&mut controller, DATE, "9:00", "10:00");

    let updated = controller.edit_capacity(DATE, slot.id, 6).unwrap();

    assert_eq!(updated.capacity, 6);
    assert_eq!(updated.available_spots(), 6);
}

#[test]
fn test_edit_capacity_below_booked_is_invalid_input() {
    let mut controller = create_test_controller();
    let slot_id = add_booked_slot(&mut controller, DATE);
    controller.record_booking(DATE, slot_id, 1).unwrap();

    let result = controller.edit_capacity(DATE, slot_id, 1);

    assert!(matches!(result, Err(ApiError::InvalidInput { field, .. }) if field == "capacity"));
}

#[test]
fn test_toggle_disable_round_trip() {
    let mut controller = create_test_controller();
    let slot = add_slot(&mut controller, DATE, "9:00", "10:00");

    let disabled = controller.toggle_disable(DATE, slot.id).unwrap();
    assert_eq!(disabled.status, SlotStatus::Disabled);
    assert_eq!(disabled.available_spots(), 0);

    let enabled = controller.toggle_disable(DATE, slot.id).unwrap();
    assert_eq!(enabled.status, SlotStatus::Available);
}

#[test]
fn test_delete_booked_slot_rejected_and_store_unchanged() {
    let mut controller = create_test_controller();
    let slot_id = add_booked_slot(&mut controller, DATE);
    let before = controller.store().clone();

    let result = controller.delete_slot(DATE, slot_id);

    assert!(matches!(result, Err(ApiError::Rejected { rule, .. }) if rule == "delete_booked_slot"));
    assert_eq!(controller.store(), &before);
}

#[test]
fn test_cancel_then_delete_booked_slot() {
    let mut controller = create_test_controller();
    let slot_id = add_booked_slot(&mut controller, DATE);

    let cancelled = controller
        .cancel_slot(DATE, slot_id, "Driveway blocked")
        .unwrap();
    assert_eq!(cancelled.status, SlotStatus::Cancelled);
    assert_eq!(cancelled.available_spots(), 0);

    let removed = controller.delete_slot(DATE, slot_id).unwrap();
    assert_eq!(removed.id, slot_id);
    assert!(controller.store().is_empty());
}

#[test]
fn test_delete_disabled_slot_rejected() {
    let mut controller = create_test_controller();
    let slot = add_slot(&mut controller, DATE, "9:00", "10:00");
    controller.toggle_disable(DATE, slot.id).unwrap();
    let before = controller.store().clone();

    let result = controller.delete_slot(DATE, slot.id);

    assert!(matches!(result, Err(ApiError::Rejected { rule, .. }) if rule == "delete_disabled_slot"));
    assert_eq!(controller.store(), &before);
}

#[test]
fn test_delete_cancelled_unbooked_slot() {
    let mut controller = create_test_controller();
    let slot = add_slot(&mut controller, DATE, "9:00", "10:00");
    controller.cancel_slot(DATE, slot.id, "Not needed").unwrap();

    let removed = controller.delete_slot(DATE, slot.id).unwrap();

    assert_eq!(removed.id, slot.id);
    assert!(controller.store().is_empty());
}

#[test]
fn test_cancelled_slot_cannot_be_reopened() {
    let mut controller = create_test_controller();
    let slot = add_slot(&mut controller, DATE, "9:00", "10:00");
    controller.cancel_slot(DATE, slot.id, "Rain").unwrap();

    let toggle = controller.toggle_disable(DATE, slot.id);
    assert!(matches!(toggle, Err(ApiError::Rejected { rule, .. }) if rule == "status_transition"));

    let edit = controller.edit_capacity(DATE, slot.id, 4);
    assert!(
        matches!(edit, Err(ApiError::Rejected { rule, .. }) if rule == "cancelled_slot_immutable")
    );
}

#[test]
fn test_blank_cancellation_reason_is_invalid_input() {
    let mut controller = create_test_controller();
    let slot = add_slot(&mut controller, DATE, "9:00", "10:00");

    let result = controller.cancel_slot(DATE, slot.id, "  ");

    assert!(matches!(result, Err(ApiError::InvalidInput { field, .. }) if field == "reason"));
}

#[test]
fn test_unknown_slot_not_found() {
    let mut controller = create_test_controller();

    let result = controller.toggle_disable(DATE, SlotId::new(42));

    assert_eq!(
        result,
        Err(ApiError::NotFound {
            message: String::from("Slot 42 not found on 2024-03-04"),
        })
    );
}

#[test]
fn test_booking_marks_date_booked_in_grid() {
    let mut controller = create_test_controller();
    let slot = add_slot(&mut controller, DATE, "9:00", "10:00");

    let booked = controller.record_booking(DATE, slot.id, 2).unwrap();
    assert_eq!(booked.status, SlotStatus::Booked);
    assert_eq!(booked.available_spots(), 0);

    let grid = controller.grid();
    let cell = grid
        .cells()
        .find(|cell| cell.date.to_string() == DATE)
        .unwrap();
    assert!(cell.is_booked);

    let result = controller.record_booking(DATE, slot.id, 1);
    assert!(matches!(result, Err(ApiError::InvalidInput { field, .. }) if field == "count"));
}
