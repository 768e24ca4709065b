// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use parkhost_domain::{CalendarMonth, Slot, SlotId};
use parkhost_persistence::InMemoryBackend;

use crate::{AvailabilityController, ControllerConfig, SlotRequest};

pub fn create_test_month() -> CalendarMonth {
    CalendarMonth::new(2024, 2).unwrap()
}

pub fn create_test_controller() -> AvailabilityController<InMemoryBackend> {
    AvailabilityController::open(
        InMemoryBackend::new(),
        create_test_month(),
        ControllerConfig::default(),
    )
    .unwrap()
}

pub fn create_multi_select_controller() -> AvailabilityController<InMemoryBackend> {
    let mut controller = create_test_controller();
    controller.set_multi_select(true).unwrap();
    controller
}

pub fn create_test_request() -> SlotRequest {
    SlotRequest::new("9:00 AM", "5:00 PM", 2)
}

/// Quick-adds a slot and returns it.
pub fn add_slot(
    controller: &mut AvailabilityController<InMemoryBackend>,
    date: &str,
    start: &str,
    end: &str,
) -> Slot {
    let response = controller
        .quick_add(date, &SlotRequest::new(start, end, 2))
        .unwrap();
    assert_eq!(response.applied.len(), 1, "{}", response.message);
    response.applied[0].clone()
}

/// Quick-adds a slot and books one spot on it.
pub fn add_booked_slot(
    controller: &mut AvailabilityController<InMemoryBackend>,
    date: &str,
) -> SlotId {
    let slot = add_slot(controller, date, "7:00", "8:00");
    controller.record_booking(date, slot.id, 1).unwrap();
    slot.id
}
