// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Month grid projection.
//!
//! A `CalendarGrid` is a read-only view derived from a month, the slot
//! store and the current selection. It is rebuilt whenever any of those
//! change and is never edited in place.

use crate::error::DomainError;
use crate::selection::SelectionSet;
use crate::slot_store::SlotStore;
use crate::types::{DateKey, Slot};
use serde::Serialize;
use time::{Date, Month};

/// Days in a grid row.
pub const DAYS_PER_WEEK: usize = 7;

/// A displayed month. `month` is 0-based (January is 0).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CalendarMonth {
    first: Date,
}

impl CalendarMonth {
    /// Creates a month from a year and a 0-based month index.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidMonth` if `month > 11` or the year is
    /// outside the supported calendar range.
    pub fn new(year: i32, month: u8) -> Result<Self, DomainError> {
        let invalid = DomainError::InvalidMonth { year, month };
        let calendar_month: Month = month
            .checked_add(1)
            .and_then(|m| Month::try_from(m).ok())
            .ok_or_else(|| invalid.clone())?;
        let first: Date =
            Date::from_calendar_date(year, calendar_month, 1).map_err(|_| invalid)?;
        Ok(Self { first })
    }

    /// Returns the month containing `date`.
    #[must_use]
    pub fn containing(date: DateKey) -> Self {
        let date: Date = date.date();
        Self {
            first: date.replace_day(1).unwrap_or(date),
        }
    }

    /// Returns the year.
    #[must_use]
    pub const fn year(&self) -> i32 {
        self.first.year()
    }

    /// Returns the 0-based month index.
    #[must_use]
    pub const fn month_index(&self) -> u8 {
        self.first.month() as u8 - 1
    }

    /// Returns the calendar month.
    #[must_use]
    pub const fn month(&self) -> Month {
        self.first.month()
    }

    /// Returns the first day of the month.
    #[must_use]
    pub const fn first_day(&self) -> DateKey {
        DateKey::new(self.first)
    }

    /// Returns the number of days in the month.
    #[must_use]
    pub const fn days_in_month(&self) -> u8 {
        match self.first.month() {
            Month::February => {
                if time::util::is_leap_year(self.first.year()) {
                    29
                } else {
                    28
                }
            }
            Month::April | Month::June | Month::September | Month::November => 30,
            Month::January
            | Month::March
            | Month::May
            | Month::July
            | Month::August
            | Month::October
            | Month::December => 31,
        }
    }

    /// Returns the weekday index of day 1, with Sunday as 0.
    #[must_use]
    pub const fn first_weekday_index(&self) -> usize {
        self.first.weekday().number_days_from_sunday() as usize
    }

    /// Returns the date for `day` of this month, if it exists.
    #[must_use]
    pub fn date(&self, day: u8) -> Option<DateKey> {
        if day == 0 || day > self.days_in_month() {
            return None;
        }
        self.first.replace_day(day).ok().map(DateKey::new)
    }

    /// Iterates over every date of the month in order.
    pub fn dates(&self) -> impl Iterator<Item = DateKey> + '_ {
        (1..=self.days_in_month()).filter_map(|day| self.date(day))
    }

    /// Returns true if `date` falls inside this month.
    #[must_use]
    pub fn contains(&self, date: &DateKey) -> bool {
        let date: Date = date.date();
        date.year() == self.first.year() && date.month() == self.first.month()
    }

    /// Returns the following month.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidMonth` past the end of the supported range.
    pub fn next(&self) -> Result<Self, DomainError> {
        match self.month_index() {
            11 => Self::new(self.year().saturating_add(1), 0),
            m => Self::new(self.year(), m + 1),
        }
    }

    /// Returns the preceding month.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidMonth` before the start of the supported range.
    pub fn previous(&self) -> Result<Self, DomainError> {
        match self.month_index() {
            0 => Self::new(self.year().saturating_sub(1), 11),
            m => Self::new(self.year(), m - 1),
        }
    }
}

impl std::fmt::Display for CalendarMonth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.first.month(), self.first.year())
    }
}

/// One day of the displayed month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayCell {
    /// Day of the month (1-based).
    pub day: u8,
    /// The date key.
    pub date: DateKey,
    /// Slots on this date, in creation order.
    pub slots: Vec<Slot>,
    /// Whether the date is in the current selection.
    pub is_selected: bool,
    /// Whether any slot on this date is booked. Booked dates are never selectable.
    pub is_booked: bool,
}

/// A grid row. `None` marks padding outside the month.
pub type Week = [Option<DayCell>; DAYS_PER_WEEK];

/// Week-aligned projection of a month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarGrid {
    #[serde(skip)]
    month: CalendarMonth,
    weeks: Vec<Week>,
}

impl CalendarGrid {
    /// Projects `month` with the slots in `store` and the flags from `selection`.
    ///
    /// Pure: the same inputs always produce the same grid.
    #[must_use]
    pub fn project(month: &CalendarMonth, store: &SlotStore, selection: &SelectionSet) -> Self {
        let leading: usize = month.first_weekday_index();
        let mut cells: Vec<Option<DayCell>> = Vec::with_capacity(6 * DAYS_PER_WEEK);
        cells.extend(std::iter::repeat_with(|| None).take(leading));

        for date in month.dates() {
            let slots: &[Slot] = store.slots_on(&date);
            cells.push(Some(DayCell {
                day: date.day(),
                date,
                slots: slots.to_vec(),
                is_selected: selection.contains(&date),
                is_booked: slots.iter().any(Slot::is_booked),
            }));
        }

        let trailing: usize = (DAYS_PER_WEEK - cells.len() % DAYS_PER_WEEK) % DAYS_PER_WEEK;
        cells.extend(std::iter::repeat_with(|| None).take(trailing));

        let mut weeks: Vec<Week> = Vec::with_capacity(cells.len() / DAYS_PER_WEEK);
        let mut cells = cells.into_iter();
        loop {
            let mut week: Week = Default::default();
            let mut filled: usize = 0;
            for (target, cell) in week.iter_mut().zip(cells.by_ref()) {
                *target = cell;
                filled += 1;
            }
            if filled == 0 {
                break;
            }
            weeks.push(week);
        }

        Self {
            month: *month,
            weeks,
        }
    }

    /// Returns the month this grid shows.
    #[must_use]
    pub const fn month(&self) -> CalendarMonth {
        self.month
    }

    /// Returns all rows.
    #[must_use]
    pub fn weeks(&self) -> &[Week] {
        &self.weeks
    }

    /// Returns one row, if it exists.
    #[must_use]
    pub fn week(&self, week_index: usize) -> Option<&Week> {
        self.weeks.get(week_index)
    }

    /// Iterates over the day cells in a column across every row.
    pub fn column(&self, weekday_index: usize) -> impl Iterator<Item = &DayCell> {
        self.weeks
            .iter()
            .filter_map(move |week| week.get(weekday_index).and_then(Option::as_ref))
    }

    /// Iterates over every non-padding cell in order.
    pub fn cells(&self) -> impl Iterator<Item = &DayCell> {
        self.weeks.iter().flatten().flatten()
    }

    /// Finds the cell for `date`.
    #[must_use]
    pub fn cell(&self, date: &DateKey) -> Option<&DayCell> {
        self.cells().find(|cell| &cell.date == date)
    }
}

/// Builds the grid for `(year, month)` with `month` 0-based.
///
/// # Errors
///
/// Returns `DomainError::InvalidMonth` if the month is out of range.
pub fn build_calendar_grid(
    year: i32,
    month: u8,
    store: &SlotStore,
    selection: &SelectionSet,
) -> Result<CalendarGrid, DomainError> {
    let month: CalendarMonth = CalendarMonth::new(year, month)?;
    Ok(CalendarGrid::project(&month, store, selection))
}
