//! # Room
//!
//! One hotel room: its guests, cleanliness, suite status, satisfaction score
//! and the minibar it owns.
//!
//! ## Guest Workflows
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Room Lifecycle                                  │
//! │                                                                         │
//! │        check_in(["Ann"])                 check_out()                    │
//! │  EMPTY ─────────────────────► OCCUPIED ─────────────────────► EMPTY     │
//! │    ▲   guests = ["ann"]          │       guests = []                    │
//! │    │   satisfaction = 0.5        │                                      │
//! │    │   bill = 0                  │ move_to(other)                       │
//! │    │                             │  guests, bill ──► other              │
//! │    └─────────────────────────────┘  other.satisfaction adjusted         │
//! │                                                                         │
//! │  clean() works in every state: +2 for suites, +1 otherwise              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Ranking
//! A suite always beats a regular room. Between rooms of the same class the
//! cleaner one wins. Equal rooms are not better than each other.

use std::cmp::Ordering;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{CoreResult, OccupancyError, ValidationError};
use crate::minibar::Minibar;
use crate::types::{RoomConfig, RoomNumber};
use crate::{DEFAULT_SATISFACTION, MAX_SATISFACTION, SATISFACTION_UPGRADE_BONUS};

/// A hotel room.
///
/// ## Invariants
/// - Guest names are stored lowercase
/// - The room is occupied exactly when `guests` is non-empty
/// - The room exclusively owns its minibar
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    number: RoomNumber,
    guests: Vec<String>,
    clean_level: i64,
    is_suite: bool,
    satisfaction: f64,
    minibar: Minibar,

    /// When the current guests checked in (carried along on a move).
    checked_in_at: Option<DateTime<Utc>>,

    /// Result of the value pass at construction, if it failed.
    #[serde(skip)]
    validation_issue: Option<ValidationError>,
}

impl Room {
    /// Builds a room from its minibar and configuration.
    ///
    /// Validation is advisory: a failing value pass is logged as
    /// "value error" and kept in [`Room::validation_issue`], and the room is
    /// built with the values as supplied. Cleaning and occupancy checks work
    /// the same on such a room.
    pub fn new(minibar: Minibar, config: RoomConfig) -> Self {
        let validation_issue = config.validate().err();
        if let Some(ref err) = validation_issue {
            warn!(room = config.number, field = err.field(), "{}", err);
        }

        Room {
            number: RoomNumber::new(config.number),
            guests: lowercase_all(&config.guests),
            clean_level: config.clean_level,
            is_suite: config.is_suite,
            satisfaction: config.satisfaction,
            minibar,
            checked_in_at: None,
            validation_issue,
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn number(&self) -> RoomNumber {
        self.number
    }

    pub fn guests(&self) -> &[String] {
        &self.guests
    }

    pub fn clean_level(&self) -> i64 {
        self.clean_level
    }

    pub fn is_suite(&self) -> bool {
        self.is_suite
    }

    pub fn satisfaction(&self) -> f64 {
        self.satisfaction
    }

    pub fn minibar(&self) -> &Minibar {
        &self.minibar
    }

    pub fn minibar_mut(&mut self) -> &mut Minibar {
        &mut self.minibar
    }

    pub fn checked_in_at(&self) -> Option<DateTime<Utc>> {
        self.checked_in_at
    }

    /// The construction-time validation failure, if any.
    pub fn validation_issue(&self) -> Option<&ValidationError> {
        self.validation_issue.as_ref()
    }

    /// True if any guest's normalized name equals `query` (already normalized).
    pub(crate) fn hosts(&self, query: &str) -> bool {
        self.guests
            .iter()
            .any(|g| crate::validation::normalize_guest_query(g) == query)
    }

    // =========================================================================
    // Operations
    // =========================================================================

    /// True when at least one guest is registered, whatever the names are.
    #[inline]
    pub fn is_occupied(&self) -> bool {
        !self.guests.is_empty()
    }

    /// Cleans the room: +2 for a suite, +1 otherwise.
    pub fn clean(&mut self) {
        self.clean_level += if self.is_suite { 2 } else { 1 };
        debug!(room = %self.number, clean_level = self.clean_level, "Room cleaned");
    }

    /// Checks new guests in.
    ///
    /// ## Behavior
    /// - Occupied: `Err(CheckInOccupied)`, nothing changes
    /// - Otherwise: guests = lowercased names, satisfaction = 0.5, bill = 0
    pub fn check_in<S: AsRef<str>>(&mut self, guests: &[S]) -> CoreResult<()> {
        if self.is_occupied() {
            let err = OccupancyError::CheckInOccupied;
            warn!(room = %self.number, "{}", err);
            return Err(err.into());
        }

        self.guests = lowercase_all(guests);
        self.satisfaction = DEFAULT_SATISFACTION;
        self.minibar.reset_bill();
        self.checked_in_at = Some(Utc::now());
        debug!(room = %self.number, guests = ?self.guests, "Guests checked in");
        Ok(())
    }

    /// Checks the current guests out.
    pub fn check_out(&mut self) -> CoreResult<()> {
        if !self.is_occupied() {
            let err = OccupancyError::CheckOutEmpty;
            warn!(room = %self.number, "{}", err);
            return Err(err.into());
        }

        self.guests.clear();
        self.checked_in_at = None;
        debug!(room = %self.number, "Guests checked out");
        Ok(())
    }

    /// Strict room ranking: suites first, then the higher clean level.
    pub fn better_than(&self, other: &Room) -> bool {
        self.rank_cmp(other) == Ordering::Greater
    }

    /// Total order behind [`Room::better_than`].
    pub fn rank_cmp(&self, other: &Room) -> Ordering {
        self.is_suite
            .cmp(&other.is_suite)
            .then(self.clean_level.cmp(&other.clean_level))
    }

    /// Moves this room's guests into `other`.
    ///
    /// ## Behavior
    /// ```text
    /// self empty?      → Err(MoveFromEmpty)
    /// other occupied?  → Err(MoveIntoOccupied)
    /// otherwise:
    ///   other.guests        = self.guests      self.guests = []
    ///   other.bill         += self.bill        self.bill   = 0
    ///   other.satisfaction  = min(1.0, self.satisfaction + 0.1)  if other was better
    ///                       = self.satisfaction                   otherwise
    /// ```
    pub fn move_to(&mut self, other: &mut Room) -> CoreResult<()> {
        if !self.is_occupied() {
            let err = OccupancyError::MoveFromEmpty;
            warn!(from = %self.number, to = %other.number, "{}", err);
            return Err(err.into());
        }
        if other.is_occupied() {
            let err = OccupancyError::MoveIntoOccupied;
            warn!(from = %self.number, to = %other.number, "{}", err);
            return Err(err.into());
        }

        let upgraded = other.better_than(self);

        other.guests = std::mem::take(&mut self.guests);
        other.checked_in_at = self.checked_in_at.take();
        other.minibar.absorb_bill(self.minibar.take_bill());
        other.satisfaction = if upgraded {
            (self.satisfaction + SATISFACTION_UPGRADE_BONUS).min(MAX_SATISFACTION)
        } else {
            self.satisfaction
        };

        debug!(
            from = %self.number,
            to = %other.number,
            upgraded,
            satisfaction = other.satisfaction,
            "Guests moved"
        );
        Ok(())
    }
}

fn lowercase_all<S: AsRef<str>>(names: &[S]) -> Vec<String> {
    names.iter().map(|n| n.as_ref().to_lowercase()).collect()
}

impl fmt::Display for Room {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Room number: {}", self.number)?;
        if self.guests.is_empty() {
            writeln!(f, "Guests: empty")?;
        } else {
            let mut guests = self.guests.clone();
            guests.sort();
            writeln!(f, "Guests: {}", guests.join(", "))?;
        }
        writeln!(f, "Clean level: {}", self.clean_level)?;
        writeln!(f, "Is suite: {}", self.is_suite)?;
        writeln!(f, "Satisfaction: {:?}", self.satisfaction)?;
        writeln!(f, "Minibar:")?;
        write!(f, "{}", self.minibar)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{CoreError, ValidationKind};
    use crate::money::Money;

    fn room(number: i64, clean_level: i64, is_suite: bool) -> Room {
        Room::new(
            Minibar::new([("Cola", 3)], [("Chips", Money::new(7))]),
            RoomConfig::new(number)
                .with_clean_level(clean_level)
                .suite(is_suite),
        )
    }

    #[test]
    fn test_valid_room_has_no_issue() {
        let room = room(101, 0, false);
        assert!(room.validation_issue().is_none());
        assert!(!room.is_occupied());
    }

    #[test]
    fn test_invalid_room_still_usable() {
        let mut room = Room::new(
            Minibar::empty(),
            RoomConfig::new(150).with_guests(["Ann"]).with_clean_level(1),
        );

        let issue = room.validation_issue().unwrap();
        assert_eq!(issue.kind(), ValidationKind::Value);
        assert_eq!(issue.to_string(), "value error");

        room.clean();
        assert_eq!(room.clean_level(), 2);
        assert!(room.is_occupied());
    }

    #[test]
    fn test_out_of_range_satisfaction_reported() {
        let room = Room::new(
            Minibar::empty(),
            RoomConfig::new(101).with_satisfaction(1.5),
        );
        assert_eq!(room.validation_issue().unwrap().field(), "satisfaction");
        assert_eq!(room.satisfaction(), 1.5);
    }

    #[test]
    fn test_construction_lowercases_guests() {
        let room = Room::new(Minibar::empty(), RoomConfig::new(101).with_guests(["Ann"]));
        assert_eq!(room.guests(), ["ann"]);
    }

    #[test]
    fn test_empty_string_guest_counts_as_occupied() {
        let room = Room::new(Minibar::empty(), RoomConfig::new(101).with_guests([""]));
        assert!(room.is_occupied());
    }

    #[test]
    fn test_clean_increments() {
        let mut regular = room(101, 0, false);
        let mut suite = room(102, 0, true);

        regular.clean();
        regular.clean();
        suite.clean();
        suite.clean();

        assert_eq!(regular.clean_level(), 2);
        assert_eq!(suite.clean_level(), 4);
    }

    #[test]
    fn test_check_in_resets_stay() {
        let mut room = room(101, 0, false);
        room.minibar_mut().eat("chips").unwrap();
        let mut room = Room {
            satisfaction: 0.9,
            ..room
        };

        room.check_in(&["Ann", "BOB"]).unwrap();

        assert_eq!(room.guests(), ["ann", "bob"]);
        assert_eq!(room.satisfaction(), DEFAULT_SATISFACTION);
        assert!(room.minibar().bill().is_zero());
        assert!(room.checked_in_at().is_some());
    }

    #[test]
    fn test_check_in_occupied_rejected() {
        let mut room = room(101, 0, false);
        room.check_in(&["ann"]).unwrap();

        let err = room.check_in(&["eve"]).unwrap_err();

        assert_eq!(err, CoreError::Occupancy(OccupancyError::CheckInOccupied));
        assert_eq!(
            err.to_string(),
            "Cannot check-in new guests to an occupied room."
        );
        assert_eq!(room.guests(), ["ann"]);
    }

    #[test]
    fn test_check_out() {
        let mut room = room(101, 0, false);
        room.check_in(&["ann"]).unwrap();

        room.check_out().unwrap();

        assert!(!room.is_occupied());
        assert!(room.checked_in_at().is_none());
    }

    #[test]
    fn test_check_out_empty_rejected() {
        let mut room = room(101, 0, false);
        let err = room.check_out().unwrap_err();
        assert_eq!(err.to_string(), "Cannot check-out an empty room.");
    }

    #[test]
    fn test_better_than() {
        let dirty_suite = room(101, 0, true);
        let clean_regular = room(102, 10, false);
        let cleaner_suite = room(103, 3, true);
        let twin_suite = room(104, 3, true);

        assert!(dirty_suite.better_than(&clean_regular));
        assert!(!clean_regular.better_than(&dirty_suite));
        assert!(cleaner_suite.better_than(&dirty_suite));
        assert!(!cleaner_suite.better_than(&twin_suite));
        assert!(!twin_suite.better_than(&cleaner_suite));
        assert!(!twin_suite.better_than(&twin_suite));
    }

    #[test]
    fn test_move_from_empty_rejected() {
        let mut from = room(101, 0, false);
        let mut to = room(102, 0, false);
        let err = from.move_to(&mut to).unwrap_err();
        assert_eq!(err.to_string(), "Cannot move guests from an empty room");
    }

    #[test]
    fn test_move_into_occupied_rejected() {
        let mut from = room(101, 0, false);
        let mut to = room(102, 0, false);
        from.check_in(&["ann"]).unwrap();
        to.check_in(&["bob"]).unwrap();

        let err = from.move_to(&mut to).unwrap_err();

        assert_eq!(err.to_string(), "Cannot move guests into an occupied room");
        assert_eq!(from.guests(), ["ann"]);
        assert_eq!(to.guests(), ["bob"]);
    }

    #[test]
    fn test_move_to_better_room() {
        let mut from = room(101, 0, false);
        let mut to = room(201, 0, true);
        from.check_in(&["Ann"]).unwrap();
        from.minibar_mut().eat("Chips").unwrap();
        from.minibar_mut().drink("Cola").unwrap();
        let carried = from.minibar().bill();

        from.move_to(&mut to).unwrap();

        assert!(!from.is_occupied());
        assert_eq!(to.guests(), ["ann"]);
        assert_eq!(to.minibar().bill(), carried);
        assert!(from.minibar().bill().is_zero());
        assert!((to.satisfaction() - 0.6).abs() < 1e-9);
        assert!(to.checked_in_at().is_some());
        assert!(from.checked_in_at().is_none());
    }

    #[test]
    fn test_move_bill_is_additive() {
        let mut from = room(101, 0, false);
        let mut to = room(102, 0, false);
        to.minibar_mut().eat("chips").unwrap();
        from.check_in(&["ann"]).unwrap();
        from.minibar_mut().eat("chips").unwrap();

        from.move_to(&mut to).unwrap();

        assert_eq!(to.minibar().bill(), Money::new(14));
    }

    #[test]
    fn test_move_to_equal_or_worse_copies_satisfaction() {
        let mut from = Room::new(
            Minibar::empty(),
            RoomConfig::new(101)
                .with_guests(["ann"])
                .with_clean_level(5)
                .with_satisfaction(0.8),
        );
        let mut same = room(102, 5, false);

        from.move_to(&mut same).unwrap();
        assert_eq!(same.satisfaction(), 0.8);

        let mut worse = room(103, 1, false);
        same.move_to(&mut worse).unwrap();
        assert_eq!(worse.satisfaction(), 0.8);
    }

    #[test]
    fn test_move_satisfaction_capped() {
        let mut from = Room::new(
            Minibar::empty(),
            RoomConfig::new(101)
                .with_guests(["ann"])
                .with_satisfaction(0.95),
        );
        let mut suite = room(201, 0, true);

        from.move_to(&mut suite).unwrap();

        assert_eq!(suite.satisfaction(), MAX_SATISFACTION);
    }

    #[test]
    fn test_display() {
        let mut room = room(101, 2, false);
        room.check_in(&["Bob", "Ann"]).unwrap();
        room.minibar_mut().eat("Chips").unwrap();

        assert_eq!(
            room.to_string(),
            "Room number: 101\n\
             Guests: ann, bob\n\
             Clean level: 2\n\
             Is suite: false\n\
             Satisfaction: 0.5\n\
             Minibar:\n\
             Drinks: Cola (3)\n\
             No snacks left\n\
             Bill: 7"
        );
    }

    #[test]
    fn test_display_empty_room() {
        let room = Room::new(Minibar::empty(), RoomConfig::new(340).suite(true).with_satisfaction(1.0));
        let shown = room.to_string();
        assert!(shown.contains("Guests: empty"));
        assert!(shown.contains("Is suite: true"));
        assert!(shown.contains("Satisfaction: 1.0"));
    }
}
