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
#![allow(clippy::multiple_crate_versions)]

mod render;

use clap::{Args, Parser, Subcommand};
use parkhost_api::{ApiError, AvailabilityController, ControllerConfig, SlotRequest};
use parkhost_domain::{CalendarMonth, ConflictPolicy, DateKey, DomainError, SlotId, SlotStore};
use parkhost_persistence::{JsonFileBackend, SlotBackend};
use std::collections::BTreeSet;
use std::path::PathBuf;
use tracing::{debug, info};

use crate::render::{render_batch, render_grid, render_slot};

/// ParkHost - host availability calendar for parking spots
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the JSON slot store. Created on first save.
    #[arg(short, long, default_value = "slots.json")]
    store: PathBuf,

    /// Which existing slots block new ones: `non-cancelled` or `active-only`.
    #[arg(long, default_value_t = ConflictPolicy::NonCancelled)]
    conflict_policy: ConflictPolicy,

    #[command(subcommand)]
    command: CliCommand,
}

/// A displayed month. Months are 1-based here.
#[derive(Args, Debug, Clone, Copy)]
struct MonthArgs {
    /// Year, e.g. 2024.
    #[arg(long)]
    year: i32,

    /// Month, 1-12.
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=12))]
    month: u8,
}

impl MonthArgs {
    fn to_month(self) -> Result<CalendarMonth, ApiError> {
        Ok(CalendarMonth::new(self.year, self.month - 1)?)
    }
}

/// The slot to create.
#[derive(Args, Debug, Clone)]
struct SlotArgs {
    /// Start time, e.g. `9:00`, `9am` or `09:00`.
    #[arg(long)]
    start: String,

    /// End time (exclusive), e.g. `17:00` or `5 PM`.
    #[arg(long)]
    end: String,

    /// Vehicle capacity.
    #[arg(long, default_value_t = 1)]
    capacity: u32,

    /// Notes shown to guests.
    #[arg(long)]
    notes: Option<String>,
}

impl SlotArgs {
    fn to_request(&self) -> SlotRequest {
        SlotRequest {
            start: Some(self.start.clone()),
            end: Some(self.end.clone()),
            capacity: self.capacity,
            notes: self.notes.clone(),
        }
    }
}

/// Identifies one existing slot.
#[derive(Args, Debug, Clone)]
struct SlotRef {
    /// The slot's date (`YYYY-MM-DD`).
    #[arg(long)]
    date: String,

    /// The slot id.
    #[arg(long)]
    slot: u64,
}

#[derive(Subcommand, Debug)]
enum CliCommand {
    /// Print a month grid.
    Grid {
        #[command(flatten)]
        month: MonthArgs,

        /// Print the grid as JSON.
        #[arg(long)]
        json: bool,
    },
    /// List slots, optionally for one date.
    List {
        /// Only this date (`YYYY-MM-DD`).
        #[arg(long)]
        date: Option<String>,
    },
    /// Create a slot on each of the given dates in one month.
    Apply {
        /// Target dates (`YYYY-MM-DD`), comma separated.
        #[arg(long, value_delimiter = ',', required = true)]
        dates: Vec<String>,

        #[command(flatten)]
        slot: SlotArgs,
    },
    /// Create a slot on every open date in one grid row.
    ApplyWeek {
        #[command(flatten)]
        month: MonthArgs,

        /// Grid row, 0 is the row holding the 1st.
        #[arg(long)]
        week: usize,

        #[command(flatten)]
        slot: SlotArgs,
    },
    /// Create a slot on every open date falling on one weekday.
    ApplyWeekday {
        #[command(flatten)]
        month: MonthArgs,

        /// Weekday, 0 is Sunday.
        #[arg(long, value_parser = clap::value_parser!(u8).range(0..=6))]
        weekday: u8,

        #[command(flatten)]
        slot: SlotArgs,
    },
    /// Create a slot on one date.
    Add {
        /// Target date (`YYYY-MM-DD`).
        #[arg(long)]
        date: String,

        #[command(flatten)]
        slot: SlotArgs,
    },
    /// Change a slot's capacity.
    Capacity {
        #[command(flatten)]
        target: SlotRef,

        /// The new capacity.
        #[arg(long)]
        capacity: u32,
    },
    /// Flip a slot between available and disabled.
    ToggleDisable {
        #[command(flatten)]
        target: SlotRef,
    },
    /// Permanently withdraw a slot.
    Cancel {
        #[command(flatten)]
        target: SlotRef,

        /// Why the slot is withdrawn.
        #[arg(long)]
        reason: String,
    },
    /// Remove an available or cancelled slot.
    Delete {
        #[command(flatten)]
        target: SlotRef,
    },
    /// Record spots taken by an accepted booking.
    Book {
        #[command(flatten)]
        target: SlotRef,

        /// Spots taken.
        #[arg(long, default_value_t = 1)]
        count: u32,
    },
}

type Controller = AvailabilityController<JsonFileBackend>;

fn open(cli: &Cli, month: CalendarMonth) -> Result<Controller, ApiError> {
    let config: ControllerConfig =
        ControllerConfig::default().with_conflict_policy(cli.conflict_policy);
    AvailabilityController::open(JsonFileBackend::new(cli.store.clone()), month, config)
}

/// Opens a session on the month holding `date`.
fn open_for_date(cli: &Cli, date: &str) -> Result<Controller, ApiError> {
    let date: DateKey = DateKey::parse(date)?;
    open(cli, CalendarMonth::containing(date))
}

/// Opens a session on `month` with multi-select on.
fn open_multi(cli: &Cli, month: MonthArgs) -> Result<Controller, ApiError> {
    let mut controller: Controller = open(cli, month.to_month()?)?;
    controller.set_multi_select(true)?;
    Ok(controller)
}

fn run(cli: &Cli) -> Result<String, ApiError> {
    debug!("Running {:?}", cli.command);
    match &cli.command {
        CliCommand::Grid { month, json } => {
            let controller: Controller = open(cli, month.to_month()?)?;
            if *json {
                serde_json::to_string_pretty(&controller.grid()).map_err(|err| {
                    ApiError::Storage {
                        message: err.to_string(),
                    }
                })
            } else {
                Ok(render_grid(&controller.grid()))
            }
        }
        CliCommand::List { date } => {
            let store: SlotStore = JsonFileBackend::new(cli.store.clone()).load()?;
            let filter: Option<DateKey> = date.as_deref().map(DateKey::parse).transpose()?;
            let lines: Vec<String> = store
                .iter()
                .filter(|slot| filter.is_none_or(|date| slot.date == date))
                .map(render_slot)
                .collect();
            Ok(if lines.is_empty() {
                String::from("No slots")
            } else {
                lines.join("\n")
            })
        }
        CliCommand::Apply { dates, slot } => {
            let targets: BTreeSet<DateKey> = dates
                .iter()
                .map(|date| DateKey::parse(date))
                .collect::<Result<_, _>>()?;
            let first: DateKey = targets
                .first()
                .copied()
                .ok_or(DomainError::EmptySelection)?;
            let mut controller: Controller = open(cli, CalendarMonth::containing(first))?;
            controller.set_multi_select(true)?;
            for date in &targets {
                controller.click_date(&date.to_string())?;
            }
            apply_and_save(controller, slot)
        }
        CliCommand::ApplyWeek { month, week, slot } => {
            let mut controller: Controller = open_multi(cli, *month)?;
            controller.toggle_week(*week)?;
            apply_and_save(controller, slot)
        }
        CliCommand::ApplyWeekday {
            month,
            weekday,
            slot,
        } => {
            let mut controller: Controller = open_multi(cli, *month)?;
            controller.toggle_weekday(usize::from(*weekday))?;
            apply_and_save(controller, slot)
        }
        CliCommand::Add { date, slot } => {
            let mut controller: Controller = open_for_date(cli, date)?;
            let response = controller.quick_add(date, &slot.to_request())?;
            controller.save()?;
            Ok(render_batch(&response))
        }
        CliCommand::Capacity { target, capacity } => {
            let mut controller: Controller = open_for_date(cli, &target.date)?;
            let slot = controller.edit_capacity(&target.date, SlotId::new(target.slot), *capacity)?;
            controller.save()?;
            Ok(render_slot(&slot))
        }
        CliCommand::ToggleDisable { target } => {
            let mut controller: Controller = open_for_date(cli, &target.date)?;
            let slot = controller.toggle_disable(&target.date, SlotId::new(target.slot))?;
            controller.save()?;
            Ok(render_slot(&slot))
        }
        CliCommand::Cancel { target, reason } => {
            let mut controller: Controller = open_for_date(cli, &target.date)?;
            let slot = controller.cancel_slot(&target.date, SlotId::new(target.slot), reason)?;
            controller.save()?;
            Ok(render_slot(&slot))
        }
        CliCommand::Delete { target } => {
            let mut controller: Controller = open_for_date(cli, &target.date)?;
            let slot = controller.delete_slot(&target.date, SlotId::new(target.slot))?;
            controller.save()?;
            Ok(format!("Deleted {}", render_slot(&slot)))
        }
        CliCommand::Book { target, count } => {
            let mut controller: Controller = open_for_date(cli, &target.date)?;
            let slot = controller.record_booking(&target.date, SlotId::new(target.slot), *count)?;
            controller.save()?;
            Ok(render_slot(&slot))
        }
    }
}

fn apply_and_save(mut controller: Controller, slot: &SlotArgs) -> Result<String, ApiError> {
    let response = controller.apply_to_selected(&slot.to_request())?;
    if controller.has_unsaved_changes() {
        controller.save()?;
    }
    Ok(render_batch(&response))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let cli: Cli = Cli::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    info!("Using slot store at {}", cli.store.display());

    let output: String = run(&cli)?;
    println!("{}", output.trim_end());
    Ok(())
}
