// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    CalendarGrid, CalendarMonth, DateKey, SelectionSet, SlotId, SlotStore, SlotTemplate,
    TimeRange, parse_time_range,
};

/// A date in March 2024 (March 1 is a Friday).
pub fn march(day: u8) -> DateKey {
    DateKey::from_ymd(2024, 3, day).unwrap()
}

pub fn march_2024() -> CalendarMonth {
    CalendarMonth::new(2024, 2).unwrap()
}

pub fn range(start: &str, end: &str) -> TimeRange {
    parse_time_range(Some(start), Some(end)).unwrap()
}

pub fn template(start: &str, end: &str, capacity: u32) -> SlotTemplate {
    SlotTemplate::new(range(start, end), capacity, None).unwrap()
}

pub fn grid(store: &SlotStore, selection: &SelectionSet) -> CalendarGrid {
    CalendarGrid::project(&march_2024(), store, selection)
}

/// Adds one slot on `date` and returns the new store with the slot id.
pub fn with_slot(store: &SlotStore, date: DateKey, start: &str, end: &str) -> (SlotStore, SlotId) {
    let (store, created) = store.apply_slot(&[date], &template(start, end, 1));
    (store, created[0].id)
}

/// Adds a slot on `date` and records one booking on it.
pub fn with_booked_slot(store: &SlotStore, date: DateKey) -> SlotStore {
    let (store, id) = with_slot(store, date, "8:00", "9:00");
    store.record_booking(&date, id, 1).unwrap().0
}
