//! # Validation Module
//!
//! Room validation rules and name normalization for Innkeeper.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Passes                                  │
//! │                                                                         │
//! │  Pass 1: Type pass (loosely-typed records only)                        │
//! │  ├── guests        must be a list of strings                           │
//! │  ├── clean_level   must be an integer                                  │
//! │  ├── is_suite      must be a boolean                                   │
//! │  └── satisfaction  must be an integer or a float                       │
//! │           │                                                             │
//! │           ▼  (only if pass 1 succeeded)                                 │
//! │  Pass 2: Value pass (every room)                                       │
//! │  ├── number        3 digits, floor 1-9, in-floor index 1-40            │
//! │  └── satisfaction  within [0.0, 1.0]                                   │
//! │                                                                         │
//! │  The first failing check of the first failing pass is the only one     │
//! │  reported. The minibar is never validated here.                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use innkeeper_core::validation::{validate_room_number, normalize_guest_query};
//!
//! assert!(validate_room_number(101).is_ok());
//! assert!(validate_room_number(141).is_err());
//! assert_eq!(normalize_guest_query("  B o b "), "bob");
//! ```

use serde_json::Value;

use crate::error::ValidationError;
use crate::{MAX_ROOM_INDEX, MAX_SATISFACTION, MIN_ROOM_INDEX, MIN_SATISFACTION};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Value Pass
// =============================================================================

/// Validates a room number.
///
/// ## Rules
/// - Exactly three digits (100-999); the first digit is the floor
/// - The last two digits are the in-floor index, 1-40
///
/// ## Example
/// ```rust
/// use innkeeper_core::validation::validate_room_number;
///
/// assert!(validate_room_number(101).is_ok());
/// assert!(validate_room_number(940).is_ok());
/// assert!(validate_room_number(10).is_err());
/// assert!(validate_room_number(150).is_err());
/// assert!(validate_room_number(1041).is_err());
/// ```
pub fn validate_room_number(number: i64) -> ValidationResult<()> {
    if !(100..=999).contains(&number) {
        return Err(ValidationError::Value {
            field: "number",
            reason: format!("{} is not a three-digit room number", number),
        });
    }

    let index = number % 100;
    if !(MIN_ROOM_INDEX..=MAX_ROOM_INDEX).contains(&index) {
        return Err(ValidationError::Value {
            field: "number",
            reason: format!(
                "in-floor index {} must be between {} and {}",
                index, MIN_ROOM_INDEX, MAX_ROOM_INDEX
            ),
        });
    }

    Ok(())
}

/// Validates a satisfaction score.
///
/// ## Rules
/// - Must lie in [0.0, 1.0], bounds included
/// - NaN is rejected
pub fn validate_satisfaction(satisfaction: f64) -> ValidationResult<()> {
    if !(MIN_SATISFACTION..=MAX_SATISFACTION).contains(&satisfaction) {
        return Err(ValidationError::Value {
            field: "satisfaction",
            reason: format!(
                "{} is outside [{}, {}]",
                satisfaction, MIN_SATISFACTION, MAX_SATISFACTION
            ),
        });
    }

    Ok(())
}

// =============================================================================
// Type Pass
// =============================================================================

/// Runs the type pass over a loosely-typed room record.
///
/// Fields are checked in a fixed precedence: `guests`, `clean_level`,
/// `is_suite`, `satisfaction`. A missing `satisfaction` is fine (it defaults);
/// every other checked field must be present. Booleans are not integers here.
pub fn check_room_types(record: &Value) -> ValidationResult<()> {
    let guests_ok = record
        .get("guests")
        .and_then(Value::as_array)
        .is_some_and(|guests| guests.iter().all(Value::is_string));
    if !guests_ok {
        return Err(ValidationError::Type {
            field: "guests",
            expected: "a list of strings",
        });
    }

    let clean_level_ok = record
        .get("clean_level")
        .is_some_and(|v| v.is_i64() || v.is_u64());
    if !clean_level_ok {
        return Err(ValidationError::Type {
            field: "clean_level",
            expected: "an integer",
        });
    }

    if !record.get("is_suite").is_some_and(Value::is_boolean) {
        return Err(ValidationError::Type {
            field: "is_suite",
            expected: "a boolean",
        });
    }

    if let Some(satisfaction) = record.get("satisfaction") {
        if !satisfaction.is_number() {
            return Err(ValidationError::Type {
                field: "satisfaction",
                expected: "an integer or a float",
            });
        }
    }

    Ok(())
}

// =============================================================================
// Name Normalization
// =============================================================================

/// Normalizes a minibar item name for case-insensitive lookup.
#[inline]
pub fn normalize_item_name(name: &str) -> String {
    name.to_lowercase()
}

/// Normalizes a guest name for hotel-wide lookups.
///
/// Lowercases and drops every whitespace character, so `"  B o b  "` and
/// `"bob"` name the same guest.
pub fn normalize_guest_query(name: &str) -> String {
    name.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

// =============================================================================
// Unit Tests
// =============================================================================
