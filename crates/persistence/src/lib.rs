// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Persistence layer for the ParkHost availability calendar.
//!
//! The calendar core never performs I/O. An editing session loads its
//! store through a `SlotBackend` when it opens and flushes whole stores
//! back through it.
//!
//! ## Document Format
//!
//! `JsonFileBackend` writes:
//!
//! ```json
//! { "version": 1, "next_id": 4, "slots": [ ... ] }
//! ```
//!
//! Loading re-validates every slot, so a hand-edited document with
//! `booked > capacity` or a repeated id is refused rather than loaded.

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

mod backend;
mod data_models;
mod error;

#[cfg(test)]
mod tests;

pub use backend::SlotBackend;
pub use backend::json_file::JsonFileBackend;
pub use backend::memory::InMemoryBackend;
pub use data_models::{STORE_DOCUMENT_VERSION, StoreDocument};
pub use error::PersistenceError;
