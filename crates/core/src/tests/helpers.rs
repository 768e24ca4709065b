// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{Command, Outcome, SessionState, TransitionResult, apply};
use parkhost_domain::{
    CalendarMonth, ConflictPolicy, DateKey, Slot, SlotId, SlotStore, SlotTemplate,
    parse_time_range,
};

/// A date in March 2024 (March 1 is a Friday).
pub fn march(day: u8) -> DateKey {
    DateKey::from_ymd(2024, 3, day).unwrap()
}

pub fn create_test_session() -> SessionState {
    SessionState::new(
        CalendarMonth::new(2024, 2).unwrap(),
        SlotStore::new(),
        ConflictPolicy::NonCancelled,
    )
}

pub fn create_multi_select_session() -> SessionState {
    run(&create_test_session(), Command::SetMultiSelect(true)).new_state
}

pub fn template(start: &str, end: &str, capacity: u32) -> SlotTemplate {
    SlotTemplate::new(
        parse_time_range(Some(start), Some(end)).unwrap(),
        capacity,
        None,
    )
    .unwrap()
}

/// Applies a command that is expected to succeed.
pub fn run(state: &SessionState, command: Command) -> TransitionResult {
    apply(state, command).unwrap()
}

/// Quick-adds one slot and returns the new state and slot.
pub fn add_slot(state: &SessionState, date: DateKey, start: &str, end: &str) -> (SessionState, Slot) {
    let transition = run(
        state,
        Command::QuickAdd {
            date,
            template: template(start, end, 2),
        },
    );
    let Outcome::BatchApplied(batch) = transition.outcome else {
        panic!("expected a batch outcome");
    };
    assert_eq!(batch.applied.len(), 1, "quick-add conflicted: {batch:?}");
    (transition.new_state, batch.applied[0].clone())
}

/// Adds a slot on `date` and books one spot on it.
pub fn add_booked_slot(state: &SessionState, date: DateKey) -> (SessionState, SlotId) {
    let (state, slot) = add_slot(state, date, "8:00", "9:00");
    let transition = run(
        &state,
        Command::RecordBooking {
            date,
            slot_id: slot.id,
            count: 1,
        },
    );
    (transition.new_state, slot.id)
}
