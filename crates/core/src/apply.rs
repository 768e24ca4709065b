// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::command::Command;
use crate::error::CoreError;
use crate::state::{BatchResult, Outcome, SessionState, TransitionResult};
use parkhost_domain::{
    CalendarGrid, CalendarMonth, ConflictResolution, DateKey, DomainError, SelectionSet, Slot,
    SlotId, SlotStatus, SlotStore, SlotTemplate, blocking_slots, resolve_conflicts,
};

/// Applies a command to the session, producing a new session.
///
/// This is the only way the session changes. The input state is never
/// modified; on error it is still the current state.
///
/// # Arguments
///
/// * `state` - The current session (immutable)
/// * `command` - The command to apply
///
/// # Returns
///
/// * `Ok(TransitionResult)` containing the new state and what happened
/// * `Err(CoreError)` if the command is refused
///
/// # Errors
///
/// Returns an error if:
/// - A slot rule is violated (see `SlotStore`)
/// - A clicked date is outside the displayed month
/// - A batch has no selected dates
/// - A week or weekday toggle is requested outside multi-select mode
pub fn apply(state: &SessionState, command: Command) -> Result<TransitionResult, CoreError> {
    match command {
        Command::Navigate { month } => Ok(navigate(state, month)),
        Command::NextMonth => Ok(navigate(state, state.month.next()?)),
        Command::PreviousMonth => Ok(navigate(state, state.month.previous()?)),
        Command::SetMultiSelect(enabled) => {
            let mut new_state: SessionState = state.clone();
            new_state.multi_select = enabled;
            new_state.selection = state.selection.clear();
            Ok(selection_changed(new_state))
        }
        Command::ClickDate(date) => click_date(state, date),
        Command::ToggleWeek(week_index) => {
            require_multi_select(state)?;
            let grid: CalendarGrid = state.grid();
            Ok(with_selection(state, state.selection.toggle_row(&grid, week_index)))
        }
        Command::ToggleWeekday(weekday_index) => {
            require_multi_select(state)?;
            let grid: CalendarGrid = state.grid();
            Ok(with_selection(
                state,
                state.selection.toggle_column(&grid, weekday_index),
            ))
        }
        Command::ClearSelection => Ok(with_selection(state, state.selection.clear())),
        Command::ApplyToSelection { template } => {
            let (mut new_state, batch) = apply_batch(state, &state.selection, &template)?;
            // A batch that created nothing keeps the selection for another try.
            if batch.is_success() {
                new_state.selection = state.selection.clear();
            }
            Ok(TransitionResult {
                new_state,
                outcome: Outcome::BatchApplied(batch),
            })
        }
        Command::QuickAdd { date, template } => {
            let (new_state, batch) =
                apply_batch(state, &SelectionSet::from_dates([date]), &template)?;
            Ok(TransitionResult {
                new_state,
                outcome: Outcome::BatchApplied(batch),
            })
        }
        Command::EditCapacity {
            date,
            slot_id,
            capacity,
        } => Ok(slot_updated(
            state,
            state.store.edit_capacity(&date, slot_id, capacity)?,
        )),
        Command::ToggleDisable { date, slot_id } => {
            let (store, slot) = state.store.toggle_disable(&date, slot_id)?;
            ensure_reenabled_slot_is_clear(state, &slot)?;
            Ok(slot_updated(state, (store, slot)))
        }
        Command::Cancel {
            date,
            slot_id,
            reason,
        } => Ok(slot_updated(
            state,
            state.store.cancel(&date, slot_id, &reason)?,
        )),
        Command::Delete { date, slot_id } => {
            let (store, removed) = state.store.delete(&date, slot_id)?;
            let mut new_state: SessionState = state.clone();
            new_state.store = store;
            Ok(TransitionResult {
                new_state,
                outcome: Outcome::SlotDeleted(removed),
            })
        }
        Command::RecordBooking {
            date,
            slot_id,
            count,
        } => {
            let mut transition: TransitionResult = slot_updated(
                state,
                state.store.record_booking(&date, slot_id, count)?,
            );
            // A date that just became booked can no longer be selected.
            if transition.new_state.selection.contains(&date) {
                transition.new_state.selection = transition
                    .new_state
                    .selection
                    .difference(&SelectionSet::from_dates([date]));
            }
            Ok(transition)
        }
    }
}

fn navigate(state: &SessionState, month: CalendarMonth) -> TransitionResult {
    let mut new_state: SessionState = state.clone();
    new_state.month = month;
    new_state.selection = state.selection.clear();
    TransitionResult {
        new_state,
        outcome: Outcome::Navigated,
    }
}

fn click_date(state: &SessionState, date: DateKey) -> Result<TransitionResult, CoreError> {
    if !state.month.contains(&date) {
        return Err(DomainError::DateOutsideMonth { date }.into());
    }
    if state.store.is_date_booked(&date) {
        return Ok(selection_changed(state.clone()));
    }

    let selection: SelectionSet = if state.multi_select {
        state.selection.toggle_date(date)
    } else if state.selection.len() == 1 && state.selection.contains(&date) {
        state.selection.clear()
    } else {
        SelectionSet::from_dates([date])
    };
    Ok(with_selection(state, selection))
}

const fn require_multi_select(state: &SessionState) -> Result<(), CoreError> {
    if state.multi_select {
        Ok(())
    } else {
        Err(CoreError::MultiSelectRequired)
    }
}

/// Resolves conflicts for `targets` and commits the slot on every clean date.
fn apply_batch(
    state: &SessionState,
    targets: &SelectionSet,
    template: &SlotTemplate,
) -> Result<(SessionState, BatchResult), CoreError> {
    let resolution: ConflictResolution =
        resolve_conflicts(&template.range(), targets, &state.store, state.policy)?;
    let (store, applied): (SlotStore, Vec<Slot>) =
        state.store.apply_slot(&resolution.applicable, template);

    let mut new_state: SessionState = state.clone();
    new_state.store = store;
    Ok((
        new_state,
        BatchResult {
            applied,
            conflicts: resolution.conflicting,
        },
    ))
}

/// Refuses to re-enable a slot whose range was taken while it was disabled.
///
/// Only reachable under a policy where disabled slots do not block.
fn ensure_reenabled_slot_is_clear(state: &SessionState, slot: &Slot) -> Result<(), CoreError> {
    if slot.status != SlotStatus::Available {
        return Ok(());
    }
    let taken: Vec<SlotId> = blocking_slots(&slot.range, &slot.date, &state.store, state.policy)
        .iter()
        .filter(|other| other.id != slot.id)
        .map(|other| other.id)
        .collect();
    if let Some(first) = taken.first() {
        return Err(DomainError::InvalidStatusTransition {
            from: SlotStatus::Disabled,
            to: SlotStatus::Available,
            reason: format!("slot {first} now holds an overlapping range"),
        }
        .into());
    }
    Ok(())
}

fn with_selection(state: &SessionState, selection: SelectionSet) -> TransitionResult {
    let mut new_state: SessionState = state.clone();
    new_state.selection = selection;
    selection_changed(new_state)
}

const fn selection_changed(new_state: SessionState) -> TransitionResult {
    TransitionResult {
        new_state,
        outcome: Outcome::SelectionChanged,
    }
}

fn slot_updated(state: &SessionState, (store, slot): (SlotStore, Slot)) -> TransitionResult {
    let mut new_state: SessionState = state.clone();
    new_state.store = store;
    TransitionResult {
        new_state,
        outcome: Outcome::SlotUpdated(slot),
    }
}
