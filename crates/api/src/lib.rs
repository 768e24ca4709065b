// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API boundary for the ParkHost availability calendar.
//!
//! Hosts talk to an `AvailabilityController`. Raw input (dates, time
//! strings) is normalized here; everything past this crate works on
//! validated domain values.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

mod config;
mod controller;
mod error;
mod request_response;

#[cfg(test)]
mod tests;

pub use config::ControllerConfig;
pub use controller::{AvailabilityController, Listener};
pub use error::{ApiError, translate_core_error, translate_domain_error};
pub use request_response::{BatchResponse, ConflictInfo, SlotRequest, Snapshot};
