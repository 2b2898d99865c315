//! # Error Types
//!
//! Domain-specific error types for innkeeper-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  innkeeper-core errors (this file)                                     │
//! │  ├── CoreError        - Everything an operation can reject with        │
//! │  ├── ValidationError  - Room construction (type / value pass)          │
//! │  └── OccupancyError   - Check-in / check-out / move preconditions      │
//! │                                                                         │
//! │  front-desk errors (app)                                               │
//! │  └── DeskError        - Config loading, I/O, wraps CoreError           │
//! │                                                                         │
//! │  Flow: ValidationError ─┐                                              │
//! │        OccupancyError ──┴► CoreError → DeskError → operator output     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Diagnostic Lines
//! The `Display` text of every variant is the exact one-line diagnostic the
//! front desk shows for it ("type error", "Cannot check-out an empty room.",
//! "The drink cola was not found."). Callers branch on the variant, operators
//! read the text.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
///
/// None of these are fatal. A rejected operation leaves every room, guest
/// list and bill exactly as it was before the call.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoreError {
    /// Room construction failed the type or value pass.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Occupancy precondition of check-in, check-out or move was violated.
    #[error(transparent)]
    Occupancy(#[from] OccupancyError),

    /// Minibar lookup miss. `name` is already lowercased.
    ///
    /// ## User Workflow
    /// ```text
    /// Guest asks for "Cola"
    ///      │
    ///      ▼
    /// drink("Cola") → no "cola" in drinks
    ///      │
    ///      ▼
    /// ItemNotFound { kind: Drink, name: "cola" }
    ///      │
    ///      ▼
    /// Operator sees: "The drink cola was not found."
    /// ```
    #[error("The {kind} {name} was not found.")]
    ItemNotFound { kind: ItemKind, name: String },

    /// No room has a guest matching the (normalized) name.
    #[error("No guest named {0} is staying at the hotel.")]
    GuestNotFound(String),

    /// No unoccupied room of the requested class.
    #[error("No vacant {} available.", vacancy_label(.suite))]
    NoVacancy { suite: bool },

    /// The guest is already in the best room they can be moved to.
    #[error("No better room available for {0}.")]
    NoUpgradeAvailable(String),

    /// No room carries the requested number.
    #[error("Room {0} not found.")]
    RoomNotFound(i64),
}

impl CoreError {
    /// Returns true for lookup misses (guest, room, minibar item).
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            CoreError::ItemNotFound { .. }
                | CoreError::GuestNotFound(_)
                | CoreError::RoomNotFound(_)
        )
    }
}

fn vacancy_label(suite: &bool) -> &'static str {
    if *suite {
        "suite"
    } else {
        "room"
    }
}

// =============================================================================
// Minibar Item Kind
// =============================================================================

/// Which side of the minibar an item lives on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    Drink,
    Snack,
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemKind::Drink => write!(f, "drink"),
            ItemKind::Snack => write!(f, "snack"),
        }
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Room construction validation failures.
///
/// Validation runs in two ordered passes and only the first failing pass
/// reports, so a single construction yields at most one of these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A field has the wrong type (type pass).
    #[error("type error")]
    Type {
        field: &'static str,
        expected: &'static str,
    },

    /// A field has the right type but an invalid value (value pass).
    #[error("value error")]
    Value { field: &'static str, reason: String },
}

/// Which validation pass rejected a room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationKind {
    Type,
    Value,
}

impl ValidationError {
    /// Returns the pass that produced this error.
    pub fn kind(&self) -> ValidationKind {
        match self {
            ValidationError::Type { .. } => ValidationKind::Type,
            ValidationError::Value { .. } => ValidationKind::Value,
        }
    }

    /// Returns the offending field name.
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::Type { field, .. } | ValidationError::Value { field, .. } => field,
        }
    }
}

// =============================================================================
// Occupancy Error
// =============================================================================

/// Occupancy preconditions of the guest workflows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum OccupancyError {
    #[error("Cannot check-in new guests to an occupied room.")]
    CheckInOccupied,

    #[error("Cannot check-out an empty room.")]
    CheckOutEmpty,

    #[error("Cannot move guests from an empty room")]
    MoveFromEmpty,

    #[error("Cannot move guests into an occupied room")]
    MoveIntoOccupied,
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_not_found_message() {
        let err = CoreError::ItemNotFound {
            kind: ItemKind::Snack,
            name: "pringles".to_string(),
        };
        assert_eq!(err.to_string(), "The snack pringles was not found.");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_validation_messages() {
        let err = ValidationError::Type {
            field: "guests",
            expected: "a list of strings",
        };
        assert_eq!(err.to_string(), "type error");
        assert_eq!(err.kind(), ValidationKind::Type);

        let err = ValidationError::Value {
            field: "number",
            reason: "in-floor index must be 1-40".to_string(),
        };
        assert_eq!(err.to_string(), "value error");
        assert_eq!(err.field(), "number");
    }

    #[test]
    fn test_occupancy_messages_pass_through() {
        let err: CoreError = OccupancyError::CheckOutEmpty.into();
        assert_eq!(err.to_string(), "Cannot check-out an empty room.");
        assert!(!err.is_not_found());

        let err: CoreError = OccupancyError::MoveIntoOccupied.into();
        assert_eq!(err.to_string(), "Cannot move guests into an occupied room");
    }

    #[test]
    fn test_no_vacancy_message() {
        assert_eq!(
            CoreError::NoVacancy { suite: true }.to_string(),
            "No vacant suite available."
        );
        assert_eq!(
            CoreError::NoVacancy { suite: false }.to_string(),
            "No vacant room available."
        );
    }
}
