// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use parkhost::CoreError;
use parkhost_domain::DomainError;
use parkhost_persistence::PersistenceError;

/// API-level errors.
///
/// These are distinct from domain/core errors and represent the API contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Invalid input was provided. The host can correct it and retry.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// The request was refused because it would break a slot rule.
    Rejected {
        /// The rule that refused it.
        rule: String,
        /// A human-readable description of the violation.
        message: String,
    },
    /// A requested slot was not found.
    NotFound {
        /// A human-readable description of what was not found.
        message: String,
    },
    /// The backing store could not be read or written.
    Storage {
        /// A description of the storage failure.
        message: String,
    },
}

impl ApiError {
    /// Returns true if the host can fix the input and resubmit.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::InvalidInput { .. })
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::Rejected { rule, message } => {
                write!(f, "Rejected ({rule}): {message}")
            }
            Self::NotFound { message } => write!(f, "Not found: {message}"),
            Self::Storage { message } => write!(f, "Storage error: {message}"),
        }
    }
}

impl std::error::Error for ApiError {}

fn invalid(field: &str, err: &DomainError) -> ApiError {
    ApiError::InvalidInput {
        field: field.to_string(),
        message: err.to_string(),
    }
}

fn rejected(rule: &str, err: &DomainError) -> ApiError {
    ApiError::Rejected {
        rule: rule.to_string(),
        message: err.to_string(),
    }
}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked directly.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    match &err {
        DomainError::MissingTime { field } => invalid(field, &err),
        DomainError::InvalidTimeFormat { .. } => invalid("time", &err),
        DomainError::InvalidTimeRange { .. } => invalid("end", &err),
        DomainError::InvalidDate { .. } | DomainError::DateOutsideMonth { .. } => {
            invalid("date", &err)
        }
        DomainError::InvalidMonth { .. } => invalid("month", &err),
        DomainError::InvalidCapacity { .. } | DomainError::CapacityBelowBooked { .. } => {
            invalid("capacity", &err)
        }
        DomainError::EmptySelection => invalid("selection", &err),
        DomainError::MissingCancellationReason => invalid("reason", &err),
        DomainError::InvalidBookingCount { .. } | DomainError::OverBooked { .. } => {
            invalid("count", &err)
        }
        DomainError::InvalidSlotStatus(_) => invalid("status", &err),
        DomainError::InvalidSlotId(_) => invalid("slot_id", &err),
        DomainError::SlotNotFound { .. } => ApiError::NotFound {
            message: err.to_string(),
        },
        DomainError::DeleteBookedSlot { .. } => rejected("delete_booked_slot", &err),
        DomainError::DeleteDisabledSlot { .. } => rejected("delete_disabled_slot", &err),
        DomainError::InvalidStatusTransition { .. } => rejected("status_transition", &err),
        DomainError::CancelledSlotImmutable { .. } => rejected("cancelled_slot_immutable", &err),
        DomainError::DuplicateSlotId { .. } => rejected("unique_slot_id", &err),
        DomainError::InconsistentSlot { .. } => rejected("slot_consistency", &err),
    }
}

/// Translates a core error into an API error.
#[must_use]
pub fn translate_core_error(err: CoreError) -> ApiError {
    match err {
        CoreError::DomainViolation(domain_err) => translate_domain_error(domain_err),
        CoreError::MultiSelectRequired => ApiError::Rejected {
            rule: String::from("multi_select_required"),
            message: CoreError::MultiSelectRequired.to_string(),
        },
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        translate_domain_error(err)
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        translate_core_error(err)
    }
}

impl From<PersistenceError> for ApiError {
    fn from(err: PersistenceError) -> Self {
        Self::Storage {
            message: err.to_string(),
        }
    }
}
