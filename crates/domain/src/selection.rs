// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Selection algebra over calendar dates.
//!
//! Every operation returns a new set. Row and column toggles are
//! all-or-nothing over the *selectable* (non-booked) dates they cover:
//! if all of them are already selected they are removed, otherwise the
//! missing ones are added. A row or column with no selectable date is
//! left alone.

use crate::calendar::{CalendarGrid, DayCell};
use crate::types::DateKey;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A set of highlighted dates pending a batch operation.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SelectionSet {
    dates: BTreeSet<DateKey>,
}

impl SelectionSet {
    /// Creates an empty selection.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            dates: BTreeSet::new(),
        }
    }

    /// Creates a selection holding exactly `dates`.
    pub fn from_dates<I>(dates: I) -> Self
    where
        I: IntoIterator<Item = DateKey>,
    {
        Self {
            dates: dates.into_iter().collect(),
        }
    }

    /// Returns true if `date` is selected.
    #[must_use]
    pub fn contains(&self, date: &DateKey) -> bool {
        self.dates.contains(date)
    }

    /// Returns the number of selected dates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// Returns true if nothing is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// Iterates over the selected dates in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = &DateKey> {
        self.dates.iter()
    }

    /// Returns the selected dates in ascending order.
    #[must_use]
    pub fn to_vec(&self) -> Vec<DateKey> {
        self.dates.iter().copied().collect()
    }

    /// Removes `date` if present, adds it otherwise.
    #[must_use]
    pub fn toggle_date(&self, date: DateKey) -> Self {
        let mut dates: BTreeSet<DateKey> = self.dates.clone();
        if !dates.remove(&date) {
            dates.insert(date);
        }
        Self { dates }
    }

    /// Toggles every selectable date in row `week_index` of `grid`.
    ///
    /// An index past the last row is a no-op.
    #[must_use]
    pub fn toggle_row(&self, grid: &CalendarGrid, week_index: usize) -> Self {
        let selectable: Vec<DateKey> = grid
            .week(week_index)
            .map(|week| selectable_dates(week.iter().flatten()))
            .unwrap_or_default();
        self.toggle_all(&selectable)
    }

    /// Toggles every selectable date of the month falling on `weekday_index`
    /// (Sunday is 0).
    ///
    /// An index above 6 is a no-op.
    #[must_use]
    pub fn toggle_column(&self, grid: &CalendarGrid, weekday_index: usize) -> Self {
        let selectable: Vec<DateKey> = selectable_dates(grid.column(weekday_index));
        self.toggle_all(&selectable)
    }

    /// Returns an empty selection.
    #[must_use]
    pub const fn clear(&self) -> Self {
        Self::new()
    }

    /// Returns the dates in either set.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        Self {
            dates: self.dates.union(&other.dates).copied().collect(),
        }
    }

    /// Returns the dates in this set but not in `other`.
    #[must_use]
    pub fn difference(&self, other: &Self) -> Self {
        Self {
            dates: self.dates.difference(&other.dates).copied().collect(),
        }
    }

    /// Returns true if every date in `dates` is selected.
    ///
    /// Vacuously true for an empty slice.
    #[must_use]
    pub fn contains_all(&self, dates: &[DateKey]) -> bool {
        dates.iter().all(|date| self.dates.contains(date))
    }

    fn toggle_all(&self, selectable: &[DateKey]) -> Self {
        if selectable.is_empty() {
            return self.clone();
        }
        let group: Self = Self::from_dates(selectable.iter().copied());
        if self.contains_all(selectable) {
            self.difference(&group)
        } else {
            self.union(&group)
        }
    }
}

impl FromIterator<DateKey> for SelectionSet {
    fn from_iter<I: IntoIterator<Item = DateKey>>(iter: I) -> Self {
        Self::from_dates(iter)
    }
}

fn selectable_dates<'a, I>(cells: I) -> Vec<DateKey>
where
    I: IntoIterator<Item = &'a DayCell>,
{
    cells
        .into_iter()
        .filter(|cell| !cell.is_booked)
        .map(|cell| cell.date)
        .collect()
}
