// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Normalization of raw time strings.
//!
//! Every time value entering the system passes through here exactly once
//! and leaves as a `TimeOfDay`. Accepted forms:
//!
//! - 24-hour: `9`, `9:00`, `09:00`, `17:30`, `17:30:00`, `24:00`
//! - 12-hour: `9am`, `9 AM`, `9:00 AM`, `12:30 pm`, `9:30 p.m.`

use crate::error::DomainError;
use crate::types::{TimeOfDay, TimeRange};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Meridiem {
    Am,
    Pm,
}

/// Parses a raw time string into a `TimeOfDay`.
///
/// # Errors
///
/// Returns `DomainError::InvalidTimeFormat` if the input is blank, malformed,
/// or out of range.
pub fn parse_time_of_day(input: &str) -> Result<TimeOfDay, DomainError> {
    let invalid = |reason: &str| DomainError::InvalidTimeFormat {
        input: input.to_string(),
        reason: reason.to_string(),
    };

    let compact: String = input
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '.')
        .collect::<String>()
        .to_ascii_lowercase();

    if compact.is_empty() {
        return Err(invalid("time is empty"));
    }

    let (body, meridiem): (&str, Option<Meridiem>) =
        if let Some(rest) = compact.strip_suffix("am") {
            (rest, Some(Meridiem::Am))
        } else if let Some(rest) = compact.strip_suffix("pm") {
            (rest, Some(Meridiem::Pm))
        } else {
            (compact.as_str(), None)
        };

    let mut parts = body.split(':');
    let hour_part: &str = parts.next().unwrap_or_default();
    let minute_part: Option<&str> = parts.next();
    let second_part: Option<&str> = parts.next();
    if parts.next().is_some() {
        return Err(invalid("too many ':' separators"));
    }

    let hour: u8 =
        parse_component(hour_part, 1..=2).ok_or_else(|| invalid("hour must be 1-2 digits"))?;
    let minute: u8 = match minute_part {
        Some(m) => {
            parse_component(m, 2..=2).ok_or_else(|| invalid("minute must be 2 digits"))?
        }
        None => 0,
    };
    if let Some(s) = second_part {
        let seconds: u8 =
            parse_component(s, 2..=2).ok_or_else(|| invalid("seconds must be 2 digits"))?;
        if seconds != 0 {
            return Err(invalid("seconds are not supported"));
        }
    }
    if minute > 59 {
        return Err(invalid("minute must be between 00 and 59"));
    }

    match meridiem {
        Some(meridiem) => {
            if !(1..=12).contains(&hour) {
                return Err(invalid("12-hour times need an hour between 1 and 12"));
            }
            let hour_24: u8 = match (meridiem, hour) {
                (Meridiem::Am, 12) => 0,
                (Meridiem::Am, h) | (Meridiem::Pm, h @ 12) => h,
                (Meridiem::Pm, h) => h + 12,
            };
            TimeOfDay::from_hm(hour_24, minute)
        }
        None => TimeOfDay::from_hm(hour, minute).map_err(|_| {
            invalid("24-hour times need an hour between 0 and 23, or exactly 24:00")
        }),
    }
}

/// Parses optional raw start and end strings into a validated `TimeRange`.
///
/// # Errors
///
/// Returns:
/// - `DomainError::MissingTime` if either side is absent or blank
/// - `DomainError::InvalidTimeFormat` if either side is malformed
/// - `DomainError::InvalidTimeRange` if `end <= start`
pub fn parse_time_range(start: Option<&str>, end: Option<&str>) -> Result<TimeRange, DomainError> {
    let start: &str = start
        .filter(|s| !s.trim().is_empty())
        .ok_or(DomainError::MissingTime { field: "start" })?;
    let end: &str = end
        .filter(|s| !s.trim().is_empty())
        .ok_or(DomainError::MissingTime { field: "end" })?;

    TimeRange::new(parse_time_of_day(start)?, parse_time_of_day(end)?)
}

fn parse_component(raw: &str, digits: std::ops::RangeInclusive<usize>) -> Option<u8> {
    if !digits.contains(&raw.len()) || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse::<u8>().ok()
}
