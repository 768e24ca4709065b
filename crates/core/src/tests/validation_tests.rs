// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{create_multi_select_session, march, run, template};
use crate::{Command, SessionState, validate_no_overlaps};
use parkhost_domain::{
    ConflictPolicy, DomainError, Slot, SlotId, SlotStatus, SlotStore, SlotTemplate, overlaps,
};

#[test]
fn test_repeated_batches_never_commit_overlaps() {
    let ranges = [
        ("9:00", "17:00"),
        ("8:00", "9:00"),
        ("8:30", "10:00"),
        ("17:00", "18:30"),
        ("12:00", "12:30"),
        ("18:00", "20:00"),
        ("6:00 AM", "8:00 AM"),
    ];
    let mut state: SessionState = create_multi_select_session();

    for (round, (start, end)) in ranges.iter().enumerate() {
        state = run(&state, Command::ToggleWeek(round % 5)).new_state;
        state = run(&state, Command::ToggleWeekday(round % 7)).new_state;
        if state.selection.is_empty() {
            continue;
        }
        state = run(
            &state,
            Command::ApplyToSelection {
                template: template(start, end, 1),
            },
        )
        .new_state;
    }

    assert!(!state.store.is_empty());
    assert_eq!(
        validate_no_overlaps(&state.store, ConflictPolicy::NonCancelled),
        Ok(())
    );
    for date in state.store.dates() {
        let slots: Vec<&Slot> = state.store.slots_on(date).iter().collect();
        for (i, a) in slots.iter().enumerate() {
            for b in &slots[i + 1..] {
                assert!(!overlaps(&a.range, &b.range), "{a:?} overlaps {b:?}");
            }
        }
    }
}

#[test]
fn test_validate_no_overlaps_detects_seeded_overlap() {
    let first: SlotTemplate = template("10:00", "12:00", 1);
    let second: SlotTemplate = template("11:00", "13:00", 1);
    let store = SlotStore::from_slots(
        [
            first.instantiate(SlotId::new(1), march(4)),
            second.instantiate(SlotId::new(2), march(4)),
        ],
        0,
    )
    .unwrap();

    assert!(matches!(
        validate_no_overlaps(&store, ConflictPolicy::NonCancelled),
        Err(DomainError::InconsistentSlot { slot_id, .. }) if slot_id == SlotId::new(2)
    ));
}

#[test]
fn test_validate_no_overlaps_respects_policy() {
    let mut disabled: Slot = template("10:00", "12:00", 1).instantiate(SlotId::new(1), march(4));
    disabled.status = SlotStatus::Disabled;
    let active: Slot = template("11:00", "13:00", 1).instantiate(SlotId::new(2), march(4));
    let store = SlotStore::from_slots([disabled, active], 0).unwrap();

    assert!(validate_no_overlaps(&store, ConflictPolicy::NonCancelled).is_err());
    assert!(validate_no_overlaps(&store, ConflictPolicy::ActiveOnly).is_ok());
}
