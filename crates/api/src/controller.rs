// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The availability controller.
//!
//! The controller is the imperative shell around the pure session core.
//! It owns the current `SessionState` and the backing, turns raw host
//! input into commands, swaps in each new state, and hands out owned
//! snapshots. It is the only place that touches storage.

use crate::config::ControllerConfig;
use crate::error::ApiError;
use crate::request_response::{BatchResponse, SlotRequest, Snapshot};
use parkhost::{
    BatchResult, Command, Outcome, SessionState, TransitionResult, apply, validate_no_overlaps,
};
use parkhost_domain::{
    CalendarGrid, CalendarMonth, DateKey, SelectionSet, Slot, SlotId, SlotStore, SlotTemplate,
};
use parkhost_persistence::SlotBackend;
use tracing::{debug, info, warn};

/// Callback invoked with a fresh snapshot after every state change.
pub type Listener = Box<dyn FnMut(&Snapshot)>;

/// Owns one editing session over a slot backing.
pub struct AvailabilityController<B: SlotBackend> {
    state: SessionState,
    backend: B,
    config: ControllerConfig,
    listeners: Vec<Listener>,
    unsaved: bool,
}

impl<B: SlotBackend> std::fmt::Debug for AvailabilityController<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AvailabilityController")
            .field("state", &self.state)
            .field("config", &self.config)
            .field("listeners", &self.listeners.len())
            .field("unsaved", &self.unsaved)
            .finish_non_exhaustive()
    }
}

impl<B: SlotBackend> AvailabilityController<B> {
    /// Opens a session showing `month`, loading the store from `backend`.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Storage` if the backing cannot be loaded.
    pub fn open(
        mut backend: B,
        month: CalendarMonth,
        config: ControllerConfig,
    ) -> Result<Self, ApiError> {
        let store: SlotStore = backend.load()?;
        info!(
            "Opened session for {} with {} slots from {} (policy: {})",
            month,
            store.len(),
            backend.describe(),
            config.conflict_policy
        );
        if let Err(err) = validate_no_overlaps(&store, config.conflict_policy) {
            warn!("Loaded store already holds overlapping slots: {err}");
        }

        Ok(Self {
            state: SessionState::new(month, store, config.conflict_policy),
            backend,
            config,
            listeners: Vec::new(),
            unsaved: false,
        })
    }

    /// Shows `(year, month)` with `month` 0-based. Clears the selection.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::InvalidInput` if the month is out of range.
    pub fn navigate(&mut self, year: i32, month: u8) -> Result<Snapshot, ApiError> {
        debug!("navigate: year={year}, month={month}");
        let month: CalendarMonth = CalendarMonth::new(year, month).inspect_err(|err| {
            warn!("navigate rejected: {err}");
        })?;
        self.execute(Command::Navigate { month })?;
        Ok(self.snapshot())
    }

    /// Shows the following month. Clears the selection.
    ///
    /// # Errors
    ///
    /// Returns an error past the end of the supported calendar range.
    pub fn next_month(&mut self) -> Result<Snapshot, ApiError> {
        debug!("next_month");
        self.execute(Command::NextMonth)?;
        Ok(self.snapshot())
    }

    /// Shows the preceding month. Clears the selection.
    ///
    /// # Errors
    ///
    /// Returns an error past the start of the supported calendar range.
    pub fn previous_month(&mut self) -> Result<Snapshot, ApiError> {
        debug!("previous_month");
        self.execute(Command::PreviousMonth)?;
        Ok(self.snapshot())
    }

    /// Switches multi-select mode. Clears the selection.
    ///
    /// # Errors
    ///
    /// Never fails today; returns `Result` like every other operation.
    pub fn set_multi_select(&mut self, enabled: bool) -> Result<Snapshot, ApiError> {
        debug!("set_multi_select: {enabled}");
        self.execute(Command::SetMultiSelect(enabled))?;
        Ok(self.snapshot())
    }

    /// Handles a click on the date `date` (`YYYY-MM-DD`).
    ///
    /// # Errors
    ///
    /// Returns `ApiError::InvalidInput` if the date is malformed or outside
    /// the displayed month.
    pub fn click_date(&mut self, date: &str) -> Result<Snapshot, ApiError> {
        debug!("click_date: {date}");
        let date: DateKey = self.parse_date(date)?;
        self.execute(Command::ClickDate(date))?;
        Ok(self.snapshot())
    }

    /// Toggles grid row `week_index`.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Rejected` outside multi-select mode.
    pub fn toggle_week(&mut self, week_index: usize) -> Result<Snapshot, ApiError> {
        debug!("toggle_week: {week_index}");
        self.execute(Command::ToggleWeek(week_index))?;
        Ok(self.snapshot())
    }

    /// Toggles every date on weekday `weekday_index` (Sunday is 0).
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Rejected` outside multi-select mode.
    pub fn toggle_weekday(&mut self, weekday_index: usize) -> Result<Snapshot, ApiError> {
        debug!("toggle_weekday: {weekday_index}");
        self.execute(Command::ToggleWeekday(weekday_index))?;
        Ok(self.snapshot())
    }

    /// Drops the current selection.
    ///
    /// # Errors
    ///
    /// Never fails today; returns `Result` like every other operation.
    pub fn clear_selection(&mut self) -> Result<Snapshot, ApiError> {
        debug!("clear_selection");
        self.execute(Command::ClearSelection)?;
        Ok(self.snapshot())
    }

    /// Creates the requested slot on every selected date that has room.
    ///
    /// Conflicting dates are skipped and reported, not treated as errors.
    /// The selection is cleared only if at least one slot was created.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::InvalidInput` if the request is invalid or
    /// nothing is selected, and `ApiError::Storage` if autosave fails.
    pub fn apply_to_selected(&mut self, request: &SlotRequest) -> Result<BatchResponse, ApiError> {
        debug!(
            "apply_to_selected: {} dates, request={:?}",
            self.state.selection.len(),
            request
        );
        let template: SlotTemplate = Self::template_from(request)?;
        let outcome: Outcome = self.execute(Command::ApplyToSelection { template })?;
        Ok(Self::batch_response(outcome))
    }

    /// Creates the requested slot on the single date `date`.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::InvalidInput` if the date or request is invalid,
    /// and `ApiError::Storage` if autosave fails.
    pub fn quick_add(&mut self, date: &str, request: &SlotRequest) -> Result<BatchResponse, ApiError> {
        debug!("quick_add: date={date}, request={request:?}");
        let date: DateKey = self.parse_date(date)?;
        let template: SlotTemplate = Self::template_from(request)?;
        let outcome: Outcome = self.execute(Command::QuickAdd { date, template })?;
        Ok(Self::batch_response(outcome))
    }

    /// Changes a slot's capacity.
    ///
    /// # Errors
    ///
    /// Returns an error if the slot is missing or cancelled, or the
    /// capacity is zero or below the spots already booked.
    pub fn edit_capacity(
        &mut self,
        date: &str,
        slot_id: SlotId,
        capacity: u32,
    ) -> Result<Slot, ApiError> {
        debug!("edit_capacity: date={date}, slot={slot_id}, capacity={capacity}");
        let date: DateKey = self.parse_date(date)?;
        let outcome: Outcome = self.execute(Command::EditCapacity {
            date,
            slot_id,
            capacity,
        })?;
        Self::updated_slot(outcome)
    }

    /// Flips a slot between available and disabled.
    ///
    /// # Errors
    ///
    /// Returns an error if the slot is missing, booked or cancelled.
    pub fn toggle_disable(&mut self, date: &str, slot_id: SlotId) -> Result<Slot, ApiError> {
        debug!("toggle_disable: date={date}, slot={slot_id}");
        let date: DateKey = self.parse_date(date)?;
        let outcome: Outcome = self.execute(Command::ToggleDisable { date, slot_id })?;
        Self::updated_slot(outcome)
    }

    /// Permanently withdraws a slot.
    ///
    /// # Errors
    ///
    /// Returns an error if the slot is missing or already cancelled, or
    /// the reason is blank.
    pub fn cancel_slot(
        &mut self,
        date: &str,
        slot_id: SlotId,
        reason: &str,
    ) -> Result<Slot, ApiError> {
        debug!("cancel_slot: date={date}, slot={slot_id}");
        let date: DateKey = self.parse_date(date)?;
        let outcome: Outcome = self.execute(Command::Cancel {
            date,
            slot_id,
            reason: reason.to_string(),
        })?;
        Self::updated_slot(outcome)
    }

    /// Removes an available or cancelled slot.
    ///
    /// # Returns
    ///
    /// The removed slot.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Rejected` if the slot is booked or disabled, and
    /// `ApiError::NotFound` if it does not exist.
    pub fn delete_slot(&mut self, date: &str, slot_id: SlotId) -> Result<Slot, ApiError> {
        debug!("delete_slot: date={date}, slot={slot_id}");
        let date: DateKey = self.parse_date(date)?;
        match self.execute(Command::Delete { date, slot_id })? {
            Outcome::SlotDeleted(slot) => Ok(slot),
            other => Err(Self::unexpected(&other)),
        }
    }

    /// Records `count` spots taken by an accepted booking.
    ///
    /// # Errors
    ///
    /// Returns an error if the slot is missing, not open for booking, or
    /// lacks room for `count` more vehicles.
    pub fn record_booking(
        &mut self,
        date: &str,
        slot_id: SlotId,
        count: u32,
    ) -> Result<Slot, ApiError> {
        debug!("record_booking: date={date}, slot={slot_id}, count={count}");
        let date: DateKey = self.parse_date(date)?;
        let outcome: Outcome = self.execute(Command::RecordBooking {
            date,
            slot_id,
            count,
        })?;
        Self::updated_slot(outcome)
    }

    /// Projects the displayed month.
    #[must_use]
    pub fn grid(&self) -> CalendarGrid {
        self.state.grid()
    }

    /// Returns the current selection.
    #[must_use]
    pub const fn selection(&self) -> &SelectionSet {
        &self.state.selection
    }

    /// Returns the displayed month.
    #[must_use]
    pub const fn month(&self) -> CalendarMonth {
        self.state.month
    }

    /// Returns the current store.
    #[must_use]
    pub const fn store(&self) -> &SlotStore {
        &self.state.store
    }

    /// Returns the session configuration.
    #[must_use]
    pub const fn config(&self) -> ControllerConfig {
        self.config
    }

    /// Returns the backing.
    #[must_use]
    pub const fn backend(&self) -> &B {
        &self.backend
    }

    /// Returns true if the store changed since the last flush.
    #[must_use]
    pub const fn has_unsaved_changes(&self) -> bool {
        self.unsaved
    }

    /// Returns an owned copy of the session.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            year: self.state.month.year(),
            month: self.state.month.month_index(),
            multi_select: self.state.multi_select,
            grid: self.state.grid(),
            selection: self.state.selection.clone(),
            store: self.state.store.clone(),
        }
    }

    /// Registers `listener` to receive a snapshot after every state change.
    pub fn subscribe<F>(&mut self, listener: F)
    where
        F: FnMut(&Snapshot) + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    /// Flushes the store through the backing.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Storage` if the backing cannot be written.
    pub fn save(&mut self) -> Result<(), ApiError> {
        debug!("save: {} slots", self.state.store.len());
        self.backend.save(&self.state.store).inspect_err(|err| {
            warn!("Failed to save to {}: {err}", self.backend.describe());
        })?;
        self.unsaved = false;
        info!(
            "Saved {} slots to {}",
            self.state.store.len(),
            self.backend.describe()
        );
        Ok(())
    }

    /// Runs one command against the session.
    ///
    /// On error nothing changes: no new state, no flush, no notification.
    /// With autosave, a store change is flushed before it is committed.
    fn execute(&mut self, command: Command) -> Result<Outcome, ApiError> {
        let name: &'static str = command.name();
        let transition: TransitionResult = apply(&self.state, command).map_err(|err| {
            warn!("{name} rejected: {err}");
            ApiError::from(err)
        })?;

        let store_changed: bool = transition.new_state.store != self.state.store;
        if store_changed && self.config.autosave {
            self.backend.save(&transition.new_state.store).map_err(|err| {
                warn!("{name} not committed, autosave failed: {err}");
                ApiError::from(err)
            })?;
        }

        if let Outcome::BatchApplied(batch) = &transition.outcome {
            info!(
                "{name}: applied {} slot(s), {} conflict(s)",
                batch.applied.len(),
                batch.conflicts.len()
            );
        }

        self.state = transition.new_state;
        if store_changed {
            self.unsaved = !self.config.autosave;
        }
        self.notify();
        Ok(transition.outcome)
    }

    fn notify(&mut self) {
        if self.listeners.is_empty() {
            return;
        }
        let snapshot: Snapshot = self.snapshot();
        for listener in &mut self.listeners {
            listener(&snapshot);
        }
    }

    fn parse_date(&self, raw: &str) -> Result<DateKey, ApiError> {
        DateKey::parse(raw).map_err(|err| {
            warn!("Rejected date input '{raw}' in {}: {err}", self.state.month);
            ApiError::from(err)
        })
    }

    fn template_from(request: &SlotRequest) -> Result<SlotTemplate, ApiError> {
        request.to_template().map_err(|err| {
            warn!("Rejected slot request: {err}");
            ApiError::from(err)
        })
    }

    fn batch_response(outcome: Outcome) -> BatchResponse {
        match outcome {
            Outcome::BatchApplied(batch) => BatchResponse::from(batch),
            _ => BatchResponse::from(BatchResult::default()),
        }
    }

    fn updated_slot(outcome: Outcome) -> Result<Slot, ApiError> {
        match outcome {
            Outcome::SlotUpdated(slot) => Ok(slot),
            other => Err(Self::unexpected(&other)),
        }
    }

    fn unexpected(outcome: &Outcome) -> ApiError {
        ApiError::Rejected {
            rule: String::from("unexpected_outcome"),
            message: format!("Unexpected outcome: {outcome:?}"),
        }
    }
}
