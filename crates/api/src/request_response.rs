// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.

use parkhost::BatchResult;
use parkhost_domain::{
    CalendarGrid, Conflict, DateKey, DomainError, SelectionSet, Slot, SlotStore, SlotTemplate,
    TimeRange, parse_time_range,
};
use serde::Serialize;

/// API request describing a slot to create.
///
/// Times arrive as raw strings in any accepted form (`9:00`, `9am`,
/// `5:30 PM`, ...) and are normalized here, once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotRequest {
    /// Start time.
    pub start: Option<String>,
    /// End time (exclusive).
    pub end: Option<String>,
    /// Vehicle capacity.
    pub capacity: u32,
    /// Optional host notes.
    pub notes: Option<String>,
}

impl SlotRequest {
    /// Creates a request from raw start and end strings.
    pub fn new(start: impl Into<String>, end: impl Into<String>, capacity: u32) -> Self {
        Self {
            start: Some(start.into()),
            end: Some(end.into()),
            capacity,
            notes: None,
        }
    }

    /// Attaches notes.
    #[must_use]
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Normalizes the request into a slot template.
    ///
    /// # Errors
    ///
    /// Returns an error if a time is missing or malformed, the range is
    /// empty or reversed, or the capacity is zero.
    pub fn to_template(&self) -> Result<SlotTemplate, DomainError> {
        let range: TimeRange = parse_time_range(self.start.as_deref(), self.end.as_deref())?;
        SlotTemplate::new(range, self.capacity, self.notes.clone())
    }
}

/// A date skipped by a batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConflictInfo {
    /// The skipped date.
    pub date: DateKey,
    /// Why it was skipped.
    pub reason: String,
}

impl From<Conflict> for ConflictInfo {
    fn from(conflict: Conflict) -> Self {
        Self {
            date: conflict.date,
            reason: conflict.reason,
        }
    }
}

/// API response for a batch application or quick-add.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BatchResponse {
    /// Slots created, in date order.
    pub applied: Vec<Slot>,
    /// Dates skipped because an existing slot overlaps.
    pub conflicts: Vec<ConflictInfo>,
    /// A summary for the host.
    pub message: String,
}

impl From<BatchResult> for BatchResponse {
    fn from(result: BatchResult) -> Self {
        let message: String = match (result.applied.len(), result.conflicts.len()) {
            (0, 0) => String::from("No slots created"),
            (applied, 0) => format!("Created {applied} slot(s)"),
            (0, skipped) => format!("No slots created; {skipped} date(s) skipped due to conflicts"),
            (applied, skipped) => format!(
                "Created {applied} slot(s); {skipped} date(s) skipped due to conflicts"
            ),
        };
        Self {
            applied: result.applied,
            conflicts: result.conflicts.into_iter().map(ConflictInfo::from).collect(),
            message,
        }
    }
}

/// An owned copy of everything a renderer or persistence collaborator needs.
///
/// Nothing in a snapshot is shared with the controller; later controller
/// operations never change a snapshot already handed out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    /// Displayed year.
    pub year: i32,
    /// Displayed month, 0-based.
    pub month: u8,
    /// Whether multi-select mode is on.
    pub multi_select: bool,
    /// The month grid.
    pub grid: CalendarGrid,
    /// The selected dates.
    pub selection: SelectionSet,
    /// Every slot, by date then creation.
    #[serde(serialize_with = "serialize_store")]
    pub store: SlotStore,
}

fn serialize_store<S>(store: &SlotStore, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.collect_seq(store.iter())
}
