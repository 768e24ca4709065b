// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use parkhost_domain::DomainError;
use thiserror::Error;

/// Errors that can occur during persistence operations.
#[derive(Debug, Error)]
pub enum PersistenceError {
    /// Reading or writing the backing file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The stored document could not be encoded or decoded.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The stored document was written by an unknown format version.
    #[error("Unsupported store document version {found} (expected {expected})")]
    UnsupportedVersion { found: u32, expected: u32 },

    /// The stored document decodes but violates a slot invariant.
    #[error("Invalid store document: {0}")]
    InvalidDocument(DomainError),
}
