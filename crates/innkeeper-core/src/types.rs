//! # Domain Types
//!
//! Identity and configuration types shared by rooms and the hotel.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐        ┌──────────────────────────────┐           │
//! │  │   RoomNumber    │        │         RoomConfig           │           │
//! │  │  ─────────────  │        │  ──────────────────────────  │           │
//! │  │  i64            │        │  number       i64            │           │
//! │  │  312 = floor 3, │        │  guests       Vec<String>    │           │
//! │  │        index 12 │        │  clean_level  i64            │           │
//! │  └─────────────────┘        │  is_suite     bool           │           │
//! │                             │  satisfaction f64 (0.5)      │           │
//! │                             └──────────────────────────────┘           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! `RoomConfig` is the strongly-typed constructor record for a
//! [`Room`](crate::room::Room). Loosely-typed records (layout files, JSON)
//! enter through [`RoomConfig::from_value`], which runs the type pass.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ValidationError;
use crate::validation::{check_room_types, validate_room_number, validate_satisfaction, ValidationResult};
use crate::DEFAULT_SATISFACTION;

// =============================================================================
// Room Number
// =============================================================================

/// A room number: floor digit followed by a two-digit in-floor index.
///
/// The wrapper does not enforce validity. Malformed rooms keep their number
/// so the rest of the hotel can still operate on them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoomNumber(i64);

impl RoomNumber {
    #[inline]
    pub const fn new(number: i64) -> Self {
        RoomNumber(number)
    }

    #[inline]
    pub const fn get(&self) -> i64 {
        self.0
    }

    /// The floor (first of three digits).
    #[inline]
    pub const fn floor(&self) -> i64 {
        self.0 / 100
    }

    /// The in-floor index (last two digits).
    #[inline]
    pub const fn index(&self) -> i64 {
        self.0 % 100
    }

    pub fn is_valid(&self) -> bool {
        validate_room_number(self.0).is_ok()
    }
}

impl From<i64> for RoomNumber {
    fn from(number: i64) -> Self {
        RoomNumber(number)
    }
}

impl fmt::Display for RoomNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// Room Configuration
// =============================================================================

/// Constructor fields for a room (everything except its minibar).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomConfig {
    pub number: i64,

    #[serde(default)]
    pub guests: Vec<String>,

    #[serde(default)]
    pub clean_level: i64,

    #[serde(default)]
    pub is_suite: bool,

    #[serde(default = "default_satisfaction")]
    pub satisfaction: f64,
}

fn default_satisfaction() -> f64 {
    DEFAULT_SATISFACTION
}

impl RoomConfig {
    /// Creates a config for an empty regular room with default satisfaction.
    pub fn new(number: i64) -> Self {
        RoomConfig {
            number,
            guests: Vec::new(),
            clean_level: 0,
            is_suite: false,
            satisfaction: DEFAULT_SATISFACTION,
        }
    }

    pub fn with_guests<I, S>(mut self, guests: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.guests = guests.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_clean_level(mut self, clean_level: i64) -> Self {
        self.clean_level = clean_level;
        self
    }

    pub fn suite(mut self, is_suite: bool) -> Self {
        self.is_suite = is_suite;
        self
    }

    pub fn with_satisfaction(mut self, satisfaction: f64) -> Self {
        self.satisfaction = satisfaction;
        self
    }

    /// Runs the value pass: room number first, then satisfaction.
    pub fn validate(&self) -> ValidationResult<()> {
        validate_room_number(self.number)?;
        validate_satisfaction(self.satisfaction)?;
        Ok(())
    }

    /// Builds a config from a loosely-typed record, running the type pass.
    ///
    /// ## Flow
    /// ```text
    /// { "number": 101, "guests": [...], ... }
    ///      │
    ///      ▼
    /// check_room_types ── fails ──► Err(ValidationError::Type)  "type error"
    ///      │
    ///      ▼
    /// number not an integer? ─────► Err(ValidationError::Value) "value error"
    ///      │
    ///      ▼
    /// Ok(RoomConfig)  (value pass still pending, runs in Room::new)
    /// ```
    ///
    /// Guest names are kept as given here; the room lowercases them.
    pub fn from_value(record: &Value) -> ValidationResult<Self> {
        check_room_types(record)?;

        let number = record
            .get("number")
            .and_then(Value::as_i64)
            .ok_or_else(|| ValidationError::Value {
                field: "number",
                reason: "room number must be an integer".to_string(),
            })?;

        // The type pass guarantees the shapes below.
        let guests = record
            .get("guests")
            .and_then(Value::as_array)
            .map(|guests| {
                guests
                    .iter()
                    .filter_map(Value::as_str)
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();
        let clean_level = record
            .get("clean_level")
            .and_then(Value::as_i64)
            .unwrap_or_default();
        let is_suite = record
            .get("is_suite")
            .and_then(Value::as_bool)
            .unwrap_or_default();
        let satisfaction = record
            .get("satisfaction")
            .and_then(Value::as_f64)
            .unwrap_or(DEFAULT_SATISFACTION);

        Ok(RoomConfig {
            number,
            guests,
            clean_level,
            is_suite,
            satisfaction,
        })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
