// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use time::Date;
use time::macros::format_description;

/// Minutes in a full day. `TimeOfDay` values range over `0..=MINUTES_PER_DAY`.
pub const MINUTES_PER_DAY: u16 = 24 * 60;

/// A calendar date used as the key for everything stored per day.
///
/// Rendered and parsed as ISO `YYYY-MM-DD`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DateKey(Date);

impl DateKey {
    /// Wraps a calendar date.
    #[must_use]
    pub const fn new(date: Date) -> Self {
        Self(date)
    }

    /// Builds a date key from calendar components (`month` is 1-based).
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidDate` if the components do not form a real date.
    pub fn from_ymd(year: i32, month: u8, day: u8) -> Result<Self, DomainError> {
        let month: time::Month =
            time::Month::try_from(month).map_err(|err| DomainError::InvalidDate {
                input: format!("{year:04}-{month:02}-{day:02}"),
                reason: err.to_string(),
            })?;
        Date::from_calendar_date(year, month, day)
            .map(Self)
            .map_err(|err| DomainError::InvalidDate {
                input: format!("{year:04}-{:02}-{day:02}", u8::from(month)),
                reason: err.to_string(),
            })
    }

    /// Parses an ISO `YYYY-MM-DD` date key.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidDate` if the input is not a valid ISO date.
    pub fn parse(input: &str) -> Result<Self, DomainError> {
        let format = format_description!("[year]-[month]-[day]");
        Date::parse(input.trim(), &format)
            .map(Self)
            .map_err(|err| DomainError::InvalidDate {
                input: input.to_string(),
                reason: err.to_string(),
            })
    }

    /// Returns the underlying date.
    #[must_use]
    pub const fn date(&self) -> Date {
        self.0
    }

    /// Returns the day of the month (1-based).
    #[must_use]
    pub const fn day(&self) -> u8 {
        self.0.day()
    }

    /// Returns the weekday index with Sunday as 0 and Saturday as 6.
    #[must_use]
    pub const fn weekday_index(&self) -> usize {
        self.0.weekday().number_days_from_sunday() as usize
    }
}

impl std::fmt::Display for DateKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}",
            self.0.year(),
            u8::from(self.0.month()),
            self.0.day()
        )
    }
}

impl FromStr for DateKey {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for DateKey {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<DateKey> for String {
    fn from(value: DateKey) -> Self {
        value.to_string()
    }
}

/// A time of day normalized to minutes since midnight.
///
/// All ordering and overlap checks run on this type, never on strings.
/// `24:00` is representable so that a range may end at midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeOfDay(u16);

impl TimeOfDay {
    /// Midnight at the start of the day.
    pub const MIDNIGHT: Self = Self(0);
    /// Midnight at the end of the day (`24:00`).
    pub const END_OF_DAY: Self = Self(MINUTES_PER_DAY);

    /// Creates a time of day from minutes since midnight.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidTimeFormat` if `minutes` exceeds 1440.
    pub fn from_minutes(minutes: u16) -> Result<Self, DomainError> {
        if minutes > MINUTES_PER_DAY {
            return Err(DomainError::InvalidTimeFormat {
                input: minutes.to_string(),
                reason: String::from("minutes since midnight must be at most 1440"),
            });
        }
        Ok(Self(minutes))
    }

    /// Creates a time of day from 24-hour components.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidTimeFormat` if the components are out of range.
    pub fn from_hm(hour: u8, minute: u8) -> Result<Self, DomainError> {
        if minute > 59 || hour > 24 || (hour == 24 && minute != 0) {
            return Err(DomainError::InvalidTimeFormat {
                input: format!("{hour:02}:{minute:02}"),
                reason: String::from("hour must be 0-23 (or 24:00) and minute 0-59"),
            });
        }
        Ok(Self(u16::from(hour) * 60 + u16::from(minute)))
    }

    /// Returns minutes since midnight.
    #[must_use]
    pub const fn minutes(&self) -> u16 {
        self.0
    }

    /// Returns the hour component (0-24).
    #[must_use]
    pub const fn hour(&self) -> u8 {
        #[allow(clippy::cast_possible_truncation)]
        let hour = (self.0 / 60) as u8;
        hour
    }

    /// Returns the minute component (0-59).
    #[must_use]
    pub const fn minute(&self) -> u8 {
        #[allow(clippy::cast_possible_truncation)]
        let minute = (self.0 % 60) as u8;
        minute
    }

    /// Renders the time in 12-hour form, e.g. `9:00 AM`. The end of the day
    /// renders as `12:00 AM (+1)`.
    #[must_use]
    pub fn to_12h_string(&self) -> String {
        if *self == Self::END_OF_DAY {
            return String::from("12:00 AM (+1)");
        }
        let hour = self.hour() % 24;
        let suffix = if hour < 12 { "AM" } else { "PM" };
        let display_hour = match hour % 12 {
            0 => 12,
            h => h,
        };
        format!("{display_hour}:{:02} {suffix}", self.minute())
    }
}

impl std::fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl FromStr for TimeOfDay {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::time_input::parse_time_of_day(s)
    }
}

impl TryFrom<String> for TimeOfDay {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        crate::time_input::parse_time_of_day(&value)
    }
}

impl From<TimeOfDay> for String {
    fn from(value: TimeOfDay) -> Self {
        value.to_string()
    }
}

/// A half-open time-of-day range `[start, end)`.
///
/// Construction guarantees `start < end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawTimeRange", into = "RawTimeRange")]
pub struct TimeRange {
    start: TimeOfDay,
    end: TimeOfDay,
}

impl TimeRange {
    /// Creates a new time range.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidTimeRange` if `start >= end`.
    pub fn new(start: TimeOfDay, end: TimeOfDay) -> Result<Self, DomainError> {
        if start >= end {
            return Err(DomainError::InvalidTimeRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Returns the start of the range.
    #[must_use]
    pub const fn start(&self) -> TimeOfDay {
        self.start
    }

    /// Returns the (exclusive) end of the range.
    #[must_use]
    pub const fn end(&self) -> TimeOfDay {
        self.end
    }

    /// Returns the length of the range in minutes.
    #[must_use]
    pub const fn duration_minutes(&self) -> u16 {
        self.end.minutes() - self.start.minutes()
    }

    /// Returns true if this range overlaps `other`.
    ///
    /// Touching endpoints do not overlap.
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        crate::overlap::overlaps(self, other)
    }
}

impl std::fmt::Display for TimeRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

/// Serialized shape of a `TimeRange`; validated on the way in.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct RawTimeRange {
    start: TimeOfDay,
    end: TimeOfDay,
}

impl TryFrom<RawTimeRange> for TimeRange {
    type Error = DomainError;

    fn try_from(raw: RawTimeRange) -> Result<Self, Self::Error> {
        Self::new(raw.start, raw.end)
    }
}

impl From<TimeRange> for RawTimeRange {
    fn from(range: TimeRange) -> Self {
        Self {
            start: range.start,
            end: range.end,
        }
    }
}

/// Opaque slot identifier, issued by the `SlotStore`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SlotId(u64);

impl SlotId {
    /// Wraps a raw identifier.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the raw identifier.
    #[must_use]
    pub const fn value(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for SlotId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for SlotId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u64>()
            .map(Self)
            .map_err(|_| DomainError::InvalidSlotId(s.to_string()))
    }
}

/// A bookable time-range offer on a specific date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    /// Identifier, unique within the store.
    pub id: SlotId,
    /// The date this slot is offered on.
    pub date: DateKey,
    /// The offered time range.
    pub range: TimeRange,
    /// Vehicle capacity (at least 1).
    pub capacity: u32,
    /// Spots taken by accepted bookings (never above `capacity`).
    pub booked: u32,
    /// Lifecycle status.
    pub status: SlotStatus,
    /// Free-form host notes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Why the slot was cancelled. Set only for cancelled slots.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cancellation_reason: Option<String>,
}

impl Slot {
    /// Returns the start time.
    #[must_use]
    pub const fn start_time(&self) -> TimeOfDay {
        self.range.start()
    }

    /// Returns the end time.
    #[must_use]
    pub const fn end_time(&self) -> TimeOfDay {
        self.range.end()
    }

    /// Returns the spots still open for booking.
    ///
    /// Disabled and cancelled slots have none.
    #[must_use]
    pub const fn available_spots(&self) -> u32 {
        match self.status {
            SlotStatus::Available | SlotStatus::Booked => self.capacity.saturating_sub(self.booked),
            SlotStatus::Disabled | SlotStatus::Cancelled => 0,
        }
    }

    /// Returns true if the slot has been cancelled.
    #[must_use]
    pub const fn is_cancelled(&self) -> bool {
        matches!(self.status, SlotStatus::Cancelled)
    }

    /// Returns true if the slot has the booked status.
    #[must_use]
    pub const fn is_booked(&self) -> bool {
        matches!(self.status, SlotStatus::Booked)
    }
}

/// Slot lifecycle status.
///
/// ```text
/// available <-> disabled
/// available | disabled -> cancelled
/// booked -> cancelled
/// ```
///
/// `booked` is only ever entered through booking acceptance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlotStatus {
    /// Open for booking.
    Available,
    /// Holds at least one accepted booking.
    Booked,
    /// Temporarily withdrawn by the host.
    Disabled,
    /// Permanently withdrawn. Terminal.
    Cancelled,
}

impl SlotStatus {
    /// Returns the string representation of the status.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::Booked => "booked",
            Self::Disabled => "disabled",
            Self::Cancelled => "cancelled",
        }
    }

    /// Returns true if no further transition is possible.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Cancelled)
    }

    /// Validates a host-initiated transition from this status to `target`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidStatusTransition` if the lifecycle forbids it.
    pub fn validate_transition(&self, target: Self) -> Result<(), DomainError> {
        if self.is_terminal() {
            return Err(DomainError::InvalidStatusTransition {
                from: *self,
                to: target,
                reason: String::from("cancelled slots cannot be reopened"),
            });
        }

        let valid = matches!(
            (self, target),
            (Self::Available, Self::Disabled | Self::Cancelled | Self::Booked)
                | (Self::Disabled, Self::Available | Self::Cancelled)
                | (Self::Booked, Self::Cancelled)
        );

        if valid {
            Ok(())
        } else {
            Err(DomainError::InvalidStatusTransition {
                from: *self,
                to: target,
                reason: String::from("transition not permitted by slot lifecycle rules"),
            })
        }
    }
}

impl std::fmt::Display for SlotStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SlotStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "available" => Ok(Self::Available),
            "booked" => Ok(Self::Booked),
            "disabled" => Ok(Self::Disabled),
            "cancelled" => Ok(Self::Cancelled),
            _ => Err(DomainError::InvalidSlotStatus(s.to_string())),
        }
    }
}

/// The definition stamped onto each date by a batch application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlotTemplate {
    range: TimeRange,
    capacity: u32,
    notes: Option<String>,
}

impl SlotTemplate {
    /// Creates a slot template.
    ///
    /// Blank notes are dropped.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidCapacity` if `capacity` is zero.
    pub fn new(range: TimeRange, capacity: u32, notes: Option<String>) -> Result<Self, DomainError> {
        crate::validation::validate_capacity(capacity)?;
        let notes = notes
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty());
        Ok(Self {
            range,
            capacity,
            notes,
        })
    }

    /// Returns the time range.
    #[must_use]
    pub const fn range(&self) -> TimeRange {
        self.range
    }

    /// Returns the capacity.
    #[must_use]
    pub const fn capacity(&self) -> u32 {
        self.capacity
    }

    /// Returns the notes.
    #[must_use]
    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }

    /// Materializes a fresh, unbooked slot on `date`.
    #[must_use]
    pub fn instantiate(&self, id: SlotId, date: DateKey) -> Slot {
        Slot {
            id,
            date,
            range: self.range,
            capacity: self.capacity,
            booked: 0,
            status: SlotStatus::Available,
            notes: self.notes.clone(),
            cancellation_reason: None,
        }
    }
}
