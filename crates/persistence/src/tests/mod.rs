// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]


use parkhost_domain::{DateKey, SlotStore, SlotTemplate, parse_time_range};

pub fn create_test_date(day: u8) -> DateKey {
    DateKey::from_ymd(2024, 3, day).expect("Valid test date")
}

pub fn create_test_template(start: &str, end: &str, capacity: u32) -> SlotTemplate {
    SlotTemplate::new(
        parse_time_range(Some(start), Some(end)).expect("Valid test range"),
        capacity,
        Some(String::from("Side gate")),
    )
    .expect("Valid test template")
}

/// A store with one booked, one cancelled and one plain slot.
pub fn create_test_store() -> SlotStore {
    let dates = [create_test_date(4), create_test_date(5), create_test_date(6)];
    let (store, created) =
        SlotStore::new().apply_slot(&dates, &create_test_template("9:00", "17:00", 3));
    let (store, _) = store
        .record_booking(&dates[0], created[0].id, 2)
        .expect("Valid booking");
    let (store, _) = store
        .cancel(&dates[1], created[1].id, "Resurfacing")
        .expect("Valid cancellation");
    store
}
