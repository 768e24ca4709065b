// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod calendar;
mod conflict;
mod error;
mod overlap;
mod selection;
mod slot_store;
mod time_input;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use calendar::{CalendarGrid, CalendarMonth, DAYS_PER_WEEK, DayCell, Week, build_calendar_grid};
pub use conflict::{Conflict, ConflictPolicy, ConflictResolution, blocking_slots, resolve_conflicts};
pub use error::{DomainError, ErrorKind};
pub use overlap::overlaps;
pub use selection::SelectionSet;
pub use slot_store::SlotStore;
pub use time_input::{parse_time_of_day, parse_time_range};
pub use types::{
    DateKey, MINUTES_PER_DAY, Slot, SlotId, SlotStatus, SlotTemplate, TimeOfDay, TimeRange,
};
pub use validation::{
    validate_cancellation_reason, validate_capacity, validate_slot, validate_target_dates,
};
