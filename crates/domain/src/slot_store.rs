// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Per-date slot storage and the slot lifecycle.
//!
//! Every operation takes `&self` and returns a new store; the receiver is
//! never modified. A refused operation therefore cannot leave a partially
//! updated store behind.

use crate::error::DomainError;
use crate::types::{DateKey, Slot, SlotId, SlotStatus, SlotTemplate};
use crate::validation::{validate_cancellation_reason, validate_capacity, validate_slot};
use std::collections::{BTreeMap, HashSet};

/// All slots of an editing session, keyed by date.
///
/// Within a date, slots keep creation order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotStore {
    by_date: BTreeMap<DateKey, Vec<Slot>>,
    next_id: u64,
}

impl SlotStore {
    /// Creates an empty store.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            by_date: BTreeMap::new(),
            next_id: 1,
        }
    }

    /// Rebuilds a store from externally supplied slots.
    ///
    /// Slots keep their relative order per date. The id counter resumes
    /// after the larger of `next_id` and the highest id seen.
    ///
    /// # Errors
    ///
    /// Returns an error if any slot violates a slot invariant or an id repeats.
    pub fn from_slots<I>(slots: I, next_id: u64) -> Result<Self, DomainError>
    where
        I: IntoIterator<Item = Slot>,
    {
        let mut seen: HashSet<SlotId> = HashSet::new();
        let mut by_date: BTreeMap<DateKey, Vec<Slot>> = BTreeMap::new();
        let mut highest: u64 = 0;

        for slot in slots {
            validate_slot(&slot)?;
            if !seen.insert(slot.id) {
                return Err(DomainError::DuplicateSlotId { slot_id: slot.id });
            }
            highest = highest.max(slot.id.value());
            by_date.entry(slot.date).or_default().push(slot);
        }

        Ok(Self {
            by_date,
            next_id: next_id.max(highest.saturating_add(1)).max(1),
        })
    }

    /// Returns the id the next created slot will receive.
    #[must_use]
    pub const fn next_id(&self) -> u64 {
        self.next_id
    }

    /// Returns the slots on `date` in creation order.
    #[must_use]
    pub fn slots_on(&self, date: &DateKey) -> &[Slot] {
        self.by_date.get(date).map_or(&[], Vec::as_slice)
    }

    /// Looks up a slot.
    #[must_use]
    pub fn get(&self, date: &DateKey, slot_id: SlotId) -> Option<&Slot> {
        self.slots_on(date).iter().find(|slot| slot.id == slot_id)
    }

    /// Iterates over all slots, ordered by date then creation.
    pub fn iter(&self) -> impl Iterator<Item = &Slot> {
        self.by_date.values().flatten()
    }

    /// Iterates over the dates that hold at least one slot.
    pub fn dates(&self) -> impl Iterator<Item = &DateKey> {
        self.by_date.keys()
    }

    /// Returns the total number of slots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_date.values().map(Vec::len).sum()
    }

    /// Returns true if the store holds no slots.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_date.is_empty()
    }

    /// Returns true if any slot on `date` has the booked status.
    #[must_use]
    pub fn is_date_booked(&self, date: &DateKey) -> bool {
        self.slots_on(date).iter().any(Slot::is_booked)
    }

    /// Appends a new slot built from `template` to each of `dates`.
    ///
    /// Existing slots are never replaced. Callers are expected to have run
    /// conflict resolution first.
    ///
    /// # Returns
    ///
    /// The new store and the created slots, in the order of `dates`.
    #[must_use]
    pub fn apply_slot(&self, dates: &[DateKey], template: &SlotTemplate) -> (Self, Vec<Slot>) {
        let mut new_store: Self = self.clone();
        let mut created: Vec<Slot> = Vec::with_capacity(dates.len());

        for date in dates {
            let slot: Slot = template.instantiate(new_store.issue_id(), *date);
            new_store.by_date.entry(*date).or_default().push(slot.clone());
            created.push(slot);
        }

        (new_store, created)
    }

    /// Changes the capacity of a slot.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The slot does not exist
    /// - The slot is cancelled
    /// - `capacity` is zero
    /// - `capacity` is below the spots already booked
    pub fn edit_capacity(
        &self,
        date: &DateKey,
        slot_id: SlotId,
        capacity: u32,
    ) -> Result<(Self, Slot), DomainError> {
        self.update_slot(date, slot_id, |slot| {
            if slot.is_cancelled() {
                return Err(DomainError::CancelledSlotImmutable { slot_id });
            }
            validate_capacity(capacity)?;
            if capacity < slot.booked {
                return Err(DomainError::CapacityBelowBooked {
                    slot_id,
                    capacity,
                    booked: slot.booked,
                });
            }
            slot.capacity = capacity;
            Ok(())
        })
    }

    /// Flips a slot between available and disabled.
    ///
    /// # Errors
    ///
    /// Returns an error if the slot does not exist or is booked or cancelled.
    pub fn toggle_disable(
        &self,
        date: &DateKey,
        slot_id: SlotId,
    ) -> Result<(Self, Slot), DomainError> {
        self.update_slot(date, slot_id, |slot| {
            let target: SlotStatus = match slot.status {
                SlotStatus::Disabled => SlotStatus::Available,
                SlotStatus::Available | SlotStatus::Booked | SlotStatus::Cancelled => {
                    SlotStatus::Disabled
                }
            };
            slot.status.validate_transition(target)?;
            slot.status = target;
            Ok(())
        })
    }

    /// Cancels a slot, recording why. Cancellation is terminal.
    ///
    /// Bookings already taken stay recorded; no spots remain open.
    ///
    /// # Errors
    ///
    /// Returns an error if the slot does not exist, is already cancelled,
    /// or the reason is blank.
    pub fn cancel(
        &self,
        date: &DateKey,
        slot_id: SlotId,
        reason: &str,
    ) -> Result<(Self, Slot), DomainError> {
        let reason: String = validate_cancellation_reason(reason)?;
        self.update_slot(date, slot_id, |slot| {
            slot.status.validate_transition(SlotStatus::Cancelled)?;
            slot.status = SlotStatus::Cancelled;
            slot.cancellation_reason = Some(reason);
            Ok(())
        })
    }

    /// Removes a slot entirely.
    ///
    /// # Returns
    ///
    /// The new store and the removed slot.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::DeleteBookedSlot` if the slot is booked,
    /// `DomainError::DeleteDisabledSlot` if it is disabled, and
    /// `DomainError::SlotNotFound` if it does not exist.
    pub fn delete(&self, date: &DateKey, slot_id: SlotId) -> Result<(Self, Slot), DomainError> {
        let existing: &Slot = self
            .get(date, slot_id)
            .ok_or(DomainError::SlotNotFound {
                date: *date,
                slot_id,
            })?;

        match existing.status {
            SlotStatus::Booked => return Err(DomainError::DeleteBookedSlot { slot_id }),
            SlotStatus::Disabled => return Err(DomainError::DeleteDisabledSlot { slot_id }),
            SlotStatus::Available | SlotStatus::Cancelled => {}
        }

        let mut new_store: Self = self.clone();
        let mut removed: Option<Slot> = None;
        if let Some(slots) = new_store.by_date.get_mut(date) {
            if let Some(index) = slots.iter().position(|slot| slot.id == slot_id) {
                removed = Some(slots.remove(index));
            }
            if slots.is_empty() {
                new_store.by_date.remove(date);
            }
        }

        removed
            .map(|slot| (new_store, slot))
            .ok_or(DomainError::SlotNotFound {
                date: *date,
                slot_id,
            })
    }

    /// Records spots taken by an accepted booking.
    ///
    /// The slot moves to the booked status once it holds any booking.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The slot does not exist
    /// - `count` is zero
    /// - The slot is disabled or cancelled
    /// - The booking would exceed capacity
    pub fn record_booking(
        &self,
        date: &DateKey,
        slot_id: SlotId,
        count: u32,
    ) -> Result<(Self, Slot), DomainError> {
        if count == 0 {
            return Err(DomainError::InvalidBookingCount { count });
        }
        self.update_slot(date, slot_id, |slot| {
            if !slot.is_booked() {
                slot.status
                    .validate_transition(SlotStatus::Booked)
                    .map_err(|_| DomainError::InvalidStatusTransition {
                        from: slot.status,
                        to: SlotStatus::Booked,
                        reason: String::from("slot is not open for booking"),
                    })?;
            }
            let booked: u32 = slot
                .booked
                .checked_add(count)
                .filter(|total| *total <= slot.capacity)
                .ok_or(DomainError::OverBooked {
                    slot_id,
                    capacity: slot.capacity,
                    booked: slot.booked,
                    requested: count,
                })?;
            slot.booked = booked;
            slot.status = SlotStatus::Booked;
            Ok(())
        })
    }

    /// Hands out the next slot id.
    fn issue_id(&mut self) -> SlotId {
        let id: SlotId = SlotId::new(self.next_id);
        self.next_id = self.next_id.saturating_add(1);
        id
    }

    /// Applies `change` to a copy of one slot and returns the updated store.
    ///
    /// The receiver is untouched whether or not `change` succeeds.
    fn update_slot<F>(
        &self,
        date: &DateKey,
        slot_id: SlotId,
        change: F,
    ) -> Result<(Self, Slot), DomainError>
    where
        F: FnOnce(&mut Slot) -> Result<(), DomainError>,
    {
        let mut updated: Slot = self
            .get(date, slot_id)
            .cloned()
            .ok_or(DomainError::SlotNotFound {
                date: *date,
                slot_id,
            })?;

        change(&mut updated)?;

        let mut new_store: Self = self.clone();
        if let Some(slot) = new_store
            .by_date
            .get_mut(date)
            .and_then(|slots| slots.iter_mut().find(|slot| slot.id == slot_id))
        {
            *slot = updated.clone();
        }

        Ok((new_store, updated))
    }
}

impl Default for SlotStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::time_input::parse_time_range;

    fn date(day: u8) -> DateKey {
        DateKey::from_ymd(2024, 3, day).unwrap()
    }

    fn template(start: &str, end: &str, capacity: u32) -> SlotTemplate {
        SlotTemplate::new(parse_time_range(Some(start), Some(end)).unwrap(), capacity, None)
            .unwrap()
    }

    fn store_with_one_slot() -> (SlotStore, SlotId) {
        let (store, created) = SlotStore::new().apply_slot(&[date(4)], &template("9:00", "17:00", 2));
        (store, created[0].id)
    }

    #[test]
    fn test_apply_slot_is_additive_and_ordered() {
        let (store, _) = store_with_one_slot();
        let (store, created) = store.apply_slot(&[date(4), date(5)], &template("18:00", "20:00", 1));

        assert_eq!(created.len(), 2);
        assert_eq!(store.slots_on(&date(4)).len(), 2);
        assert_eq!(store.slots_on(&date(4))[1].start_time().minutes(), 1080);
        assert_eq!(store.slots_on(&date(5)).len(), 1);
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_apply_slot_issues_unique_ids() {
        let (store, first) = SlotStore::new().apply_slot(&[date(1), date(2)], &template("9:00", "10:00", 1));
        let (_, second) = store.apply_slot(&[date(1)], &template("10:00", "11:00", 1));

        let ids: HashSet<SlotId> = first.iter().chain(second.iter()).map(|s| s.id).collect();
        assert_eq!(ids.len(), 3);
    }

    #[test]
    fn test_new_slots_start_available_and_unbooked() {
        let (store, id) = store_with_one_slot();
        let slot = store.get(&date(4), id).unwrap();

        assert_eq!(slot.status, SlotStatus::Available);
        assert_eq!(slot.booked, 0);
        assert_eq!(slot.available_spots(), 2);
    }

    #[test]
    fn test_operations_leave_receiver_untouched() {
        let (store, id) = store_with_one_slot();
        let before = store.clone();

        let _ = store.edit_capacity(&date(4), id, 5).unwrap();
        let _ = store.toggle_disable(&date(4), id).unwrap();
        let _ = store.cancel(&date(4), id, "Lot closed").unwrap();
        let _ = store.delete(&date(4), id).unwrap();

        assert_eq!(store, before);
    }

    #[test]
    fn test_edit_capacity_rejects_below_booked() {
        let (store, id) = store_with_one_slot();
        let (store, _) = store.record_booking(&date(4), id, 2).unwrap();

        let result = store.edit_capacity(&date(4), id, 1);
        assert_eq!(
            result,
            Err(DomainError::CapacityBelowBooked {
                slot_id: id,
                capacity: 1,
                booked: 2
            })
        );

        let (store, slot) = store.edit_capacity(&date(4), id, 4).unwrap();
        assert_eq!(slot.capacity, 4);
        assert_eq!(slot.available_spots(), 2);
        assert_eq!(store.get(&date(4), id).unwrap().capacity, 4);
    }

    #[test]
    fn test_edit_capacity_rejects_zero_and_cancelled() {
        let (store, id) = store_with_one_slot();
        assert_eq!(
            store.edit_capacity(&date(4), id, 0),
            Err(DomainError::InvalidCapacity { capacity: 0 })
        );

        let (store, _) = store.cancel(&date(4), id, "Resurfacing").unwrap();
        assert_eq!(
            store.edit_capacity(&date(4), id, 3),
            Err(DomainError::CancelledSlotImmutable { slot_id: id })
        );
    }

    #[test]
    fn test_toggle_disable_round_trip() {
        let (store, id) = store_with_one_slot();

        let (disabled, slot) = store.toggle_disable(&date(4), id).unwrap();
        assert_eq!(slot.status, SlotStatus::Disabled);
        assert_eq!(slot.available_spots(), 0);

        let (enabled, slot) = disabled.toggle_disable(&date(4), id).unwrap();
        assert_eq!(slot.status, SlotStatus::Available);
        assert_eq!(enabled, store);
    }

    #[test]
    fn test_toggle_disable_rejects_booked_and_cancelled() {
        let (store, id) = store_with_one_slot();
        let (booked, _) = store.record_booking(&date(4), id, 1).unwrap();
        assert!(matches!(
            booked.toggle_disable(&date(4), id),
            Err(DomainError::InvalidStatusTransition {
                from: SlotStatus::Booked,
                ..
            })
        ));

        let (cancelled, _) = store.cancel(&date(4), id, "Event").unwrap();
        assert!(matches!(
            cancelled.toggle_disable(&date(4), id),
            Err(DomainError::InvalidStatusTransition {
                from: SlotStatus::Cancelled,
                ..
            })
        ));
    }

    #[test]
    fn test_cancel_records_reason_and_zeroes_availability() {
        let (store, id) = store_with_one_slot();
        let (store, slot) = store.cancel(&date(4), id, "  Snow removal  ").unwrap();

        assert_eq!(slot.status, SlotStatus::Cancelled);
        assert_eq!(slot.cancellation_reason.as_deref(), Some("Snow removal"));
        assert_eq!(slot.available_spots(), 0);
        assert_eq!(store.get(&date(4), id).unwrap(), &slot);
    }

    #[test]
    fn test_cancel_requires_reason_and_is_terminal() {
        let (store, id) = store_with_one_slot();
        assert_eq!(
            store.cancel(&date(4), id, "   "),
            Err(DomainError::MissingCancellationReason)
        );

        let (store, _) = store.cancel(&date(4), id, "Closed").unwrap();
        assert!(matches!(
            store.cancel(&date(4), id, "Again"),
            Err(DomainError::InvalidStatusTransition { .. })
        ));
    }

    #[test]
    fn test_cancel_booked_slot_keeps_bookings() {
        let (store, id) = store_with_one_slot();
        let (store, _) = store.record_booking(&date(4), id, 1).unwrap();
        let (_, slot) = store.cancel(&date(4), id, "Water main repair").unwrap();

        assert_eq!(slot.status, SlotStatus::Cancelled);
        assert_eq!(slot.booked, 1);
        assert_eq!(slot.available_spots(), 0);
    }

    #[test]
    fn test_delete_booked_slot_is_rejected() {
        let (store, id) = store_with_one_slot();
        let (store, _) = store.record_booking(&date(4), id, 1).unwrap();
        let before = store.clone();

        let result = store.delete(&date(4), id);

        assert_eq!(result, Err(DomainError::DeleteBookedSlot { slot_id: id }));
        assert_eq!(store, before);
    }

    #[test]
    fn test_cancel_then_delete_removes_formerly_booked_slot() {
        let (store, id) = store_with_one_slot();
        let (store, _) = store.record_booking(&date(4), id, 1).unwrap();
        let (store, cancelled) = store.cancel(&date(4), id, "Closed").unwrap();
        assert_eq!(cancelled.status, SlotStatus::Cancelled);

        let (after, removed) = store.delete(&date(4), id).unwrap();

        assert_eq!(removed.id, id);
        assert_eq!(removed.booked, 1);
        assert!(after.is_empty());
    }

    #[test]
    fn test_delete_available_and_cancelled() {
        let (store, id) = store_with_one_slot();
        let (after, removed) = store.delete(&date(4), id).unwrap();
        assert_eq!(removed.id, id);
        assert!(after.is_empty());

        let (cancelled, _) = store.cancel(&date(4), id, "Closed").unwrap();
        assert!(cancelled.delete(&date(4), id).is_ok());
    }

    #[test]
    fn test_delete_disabled_slot_is_rejected() {
        let (store, id) = store_with_one_slot();
        let (disabled, _) = store.toggle_disable(&date(4), id).unwrap();
        let before = disabled.clone();

        assert_eq!(
            disabled.delete(&date(4), id),
            Err(DomainError::DeleteDisabledSlot { slot_id: id })
        );
        assert_eq!(disabled, before);
    }

    #[test]
    fn test_delete_missing_slot() {
        let (store, id) = store_with_one_slot();
        assert_eq!(
            store.delete(&date(5), id),
            Err(DomainError::SlotNotFound {
                date: date(5),
                slot_id: id
            })
        );
    }

    #[test]
    fn test_record_booking_bounds() {
        let (store, id) = store_with_one_slot();
        assert_eq!(
            store.record_booking(&date(4), id, 0),
            Err(DomainError::InvalidBookingCount { count: 0 })
        );
        assert!(matches!(
            store.record_booking(&date(4), id, 3),
            Err(DomainError::OverBooked { requested: 3, .. })
        ));

        let (store, slot) = store.record_booking(&date(4), id, 1).unwrap();
        assert_eq!(slot.status, SlotStatus::Booked);
        assert_eq!(slot.available_spots(), 1);
        assert!(store.is_date_booked(&date(4)));

        let (_, slot) = store.record_booking(&date(4), id, 1).unwrap();
        assert_eq!(slot.booked, 2);
        assert_eq!(slot.available_spots(), 0);
    }

    #[test]
    fn test_record_booking_rejects_disabled() {
        let (store, id) = store_with_one_slot();
        let (store, _) = store.toggle_disable(&date(4), id).unwrap();
        assert!(matches!(
            store.record_booking(&date(4), id, 1),
            Err(DomainError::InvalidStatusTransition {
                from: SlotStatus::Disabled,
                to: SlotStatus::Booked,
                ..
            })
        ));
    }

    #[test]
    fn test_from_slots_resumes_id_counter() {
        let (store, _) = SlotStore::new().apply_slot(&[date(1), date(2)], &template("9:00", "10:00", 1));
        let slots: Vec<Slot> = store.iter().cloned().collect();

        let rebuilt = SlotStore::from_slots(slots, 0).unwrap();
        assert_eq!(rebuilt, store);
        assert_eq!(rebuilt.next_id(), 3);
    }

    #[test]
    fn test_from_slots_rejects_duplicates_and_overbooking() {
        let (store, id) = store_with_one_slot();
        let slot = store.get(&date(4), id).unwrap().clone();

        assert_eq!(
            SlotStore::from_slots(vec![slot.clone(), slot.clone()], 0),
            Err(DomainError::DuplicateSlotId { slot_id: id })
        );

        let mut overbooked = slot;
        overbooked.status = SlotStatus::Booked;
        overbooked.booked = 3;
        assert!(matches!(
            SlotStore::from_slots(vec![overbooked], 0),
            Err(DomainError::InconsistentSlot { .. })
        ));
    }
}
