// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Plain-text rendering for the terminal.

use parkhost_api::BatchResponse;
use parkhost_domain::{CalendarGrid, DayCell, Slot};
use std::fmt::Write;

const HEADER: &str = " Su   Mo   Tu   We   Th   Fr   Sa";

/// Renders a month grid.
///
/// Each day shows a marker: `#` booked, `+` has slots, `*` selected.
#[must_use]
pub fn render_grid(grid: &CalendarGrid) -> String {
    let mut out: String = format!("{}\n{HEADER}\n", grid.month());
    for week in grid.weeks() {
        let row: Vec<String> = week
            .iter()
            .map(|cell| cell.as_ref().map_or_else(|| String::from("    "), render_cell))
            .collect();
        out.push_str(row.join(" ").trim_end());
        out.push('\n');
    }
    out
}

fn render_cell(cell: &DayCell) -> String {
    let marker: char = if cell.is_booked {
        '#'
    } else if cell.is_selected {
        '*'
    } else if !cell.slots.is_empty() {
        '+'
    } else {
        ' '
    };
    format!("{:>3}{marker}", cell.day)
}

/// Renders one slot as a single line.
#[must_use]
pub fn render_slot(slot: &Slot) -> String {
    let mut line: String = format!(
        "#{:<4} {} {}-{}  cap {:>2}  booked {:>2}  open {:>2}  {}",
        slot.id.value(),
        slot.date,
        slot.start_time().to_12h_string(),
        slot.end_time().to_12h_string(),
        slot.capacity,
        slot.booked,
        slot.available_spots(),
        slot.status
    );
    if let Some(notes) = &slot.notes {
        let _ = write!(line, "  ({notes})");
    }
    if let Some(reason) = &slot.cancellation_reason {
        let _ = write!(line, "  cancelled: {reason}");
    }
    line
}

/// Renders a batch outcome.
#[must_use]
pub fn render_batch(response: &BatchResponse) -> String {
    let mut out: String = format!("{}\n", response.message);
    for slot in &response.applied {
        let _ = writeln!(out, "  + {}", render_slot(slot));
    }
    for conflict in &response.conflicts {
        let _ = writeln!(out, "  ! {} skipped: {}", conflict.date, conflict.reason);
    }
    out
}
