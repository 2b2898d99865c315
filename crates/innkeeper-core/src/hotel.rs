//! # Hotel
//!
//! The ordered room collection and the guest-facing front-desk operations.
//!
//! ## Operations
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Front Desk Operations                               │
//! │                                                                         │
//! │  check_in(names, suite)  best vacant room of that class ──► check_in    │
//! │                                                                         │
//! │  check_out(name)         first room hosting the guest ────► check_out   │
//! │                                                                         │
//! │  upgrade(name)           best vacant room strictly better                │
//! │                          than the guest's room ───────────► move_to     │
//! │                                                                         │
//! │  send_cleaner(name)      the guest's room ────────────────► clean       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Guest lookups lowercase the query and drop all whitespace before
//! comparing, so `"  B o b "` finds `"bob"`. When several rooms rank equally
//! best, the one listed first wins.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{CoreError, CoreResult};
use crate::room::Room;
use crate::types::RoomNumber;
use crate::validation::normalize_guest_query;

/// A hotel and its rooms, in the order they were listed.
///
/// ## Invariants
/// - The room collection never grows or shrinks after construction
/// - Duplicate room numbers are allowed; lookups by number find the first
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hotel {
    name: String,
    rooms: Vec<Room>,
}

impl Hotel {
    pub fn new(name: impl Into<String>, rooms: Vec<Room>) -> Self {
        Hotel {
            name: name.into(),
            rooms,
        }
    }

    // =========================================================================
    // Queries
    // =========================================================================

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    /// Number of rooms with at least one guest.
    pub fn occupied_count(&self) -> usize {
        self.rooms.iter().filter(|r| r.is_occupied()).count()
    }

    /// Unoccupied rooms of one class, in listing order.
    pub fn vacancies(&self, suite: bool) -> impl Iterator<Item = &Room> + '_ {
        self.rooms
            .iter()
            .filter(move |r| r.is_suite() == suite && !r.is_occupied())
    }

    /// First room carrying `number`.
    pub fn room(&self, number: i64) -> CoreResult<&Room> {
        let number = RoomNumber::new(number);
        self.rooms
            .iter()
            .find(|r| r.number() == number)
            .ok_or(CoreError::RoomNotFound(number.get()))
    }

    /// First room carrying `number`, mutably (minibar consumption).
    pub fn room_mut(&mut self, number: i64) -> CoreResult<&mut Room> {
        let number = RoomNumber::new(number);
        self.rooms
            .iter_mut()
            .find(|r| r.number() == number)
            .ok_or(CoreError::RoomNotFound(number.get()))
    }

    /// The room the guest is staying in.
    pub fn find_guest(&self, guest: &str) -> CoreResult<&Room> {
        let index = self.locate(guest)?;
        Ok(&self.rooms[index])
    }

    fn locate(&self, guest: &str) -> CoreResult<usize> {
        let query = normalize_guest_query(guest);
        self.rooms
            .iter()
            .position(|r| r.hosts(&query))
            .ok_or_else(|| {
                debug!(guest = %query, "Guest not found");
                CoreError::GuestNotFound(query)
            })
    }

    // =========================================================================
    // Front Desk Operations
    // =========================================================================

    /// Checks guests into the best vacant room of the requested class.
    ///
    /// ## Returns
    /// - `Ok(room)` the guests now occupy
    /// - `Err(NoVacancy)` when every room of that class is taken
    pub fn check_in<S: AsRef<str>>(&mut self, guests: &[S], want_suite: bool) -> CoreResult<&Room> {
        let best = best_index(
            self.rooms
                .iter()
                .enumerate()
                .filter(|(_, r)| r.is_suite() == want_suite && !r.is_occupied()),
        )
        .ok_or(CoreError::NoVacancy { suite: want_suite })?;

        let room = &mut self.rooms[best];
        room.check_in(guests)?;
        Ok(room)
    }

    /// Checks out the first room hosting the guest.
    pub fn check_out(&mut self, guest: &str) -> CoreResult<&Room> {
        let index = self.locate(guest)?;
        let room = &mut self.rooms[index];
        room.check_out()?;
        Ok(room)
    }

    /// Moves the guest's party to the best vacant room that is strictly
    /// better than the one they are in.
    ///
    /// ## Flow
    /// ```text
    /// locate guest ── miss ──► Err(GuestNotFound)
    ///      │
    ///      ▼
    /// vacant rooms strictly better than current
    ///      │
    ///      ├── none ──► Err(NoUpgradeAvailable)
    ///      │
    ///      ▼
    /// current.move_to(best) ──► Ok(best)
    /// ```
    pub fn upgrade(&mut self, guest: &str) -> CoreResult<&Room> {
        let current = self.locate(guest)?;

        let target = {
            let here = &self.rooms[current];
            best_index(
                self.rooms
                    .iter()
                    .enumerate()
                    .filter(|(i, r)| *i != current && !r.is_occupied() && r.better_than(here)),
            )
        }
        .ok_or_else(|| CoreError::NoUpgradeAvailable(normalize_guest_query(guest)))?;

        let (from, to) = pair_mut(&mut self.rooms, current, target);
        from.move_to(to)?;
        Ok(&self.rooms[target])
    }

    /// Sends a cleaner to the guest's room.
    pub fn send_cleaner(&mut self, guest: &str) -> CoreResult<&Room> {
        let index = self.locate(guest)?;
        let room = &mut self.rooms[index];
        room.clean();
        Ok(room)
    }
}

/// Index of the best-ranked room; the earliest wins among equals.
fn best_index<'a, I>(candidates: I) -> Option<usize>
where
    I: Iterator<Item = (usize, &'a Room)>,
{
    candidates
        .fold(None, |best: Option<(usize, &'a Room)>, (i, room)| match best {
            Some((_, leader)) if !room.better_than(leader) => best,
            _ => Some((i, room)),
        })
        .map(|(i, _)| i)
}

/// Two distinct rooms borrowed mutably at once.
fn pair_mut(rooms: &mut [Room], a: usize, b: usize) -> (&mut Room, &mut Room) {
    debug_assert_ne!(a, b);
    if a < b {
        let (left, right) = rooms.split_at_mut(b);
        (&mut left[a], &mut right[0])
    } else {
        let (left, right) = rooms.split_at_mut(a);
        (&mut right[0], &mut left[b])
    }
}

impl fmt::Display for Hotel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} Hotel has: {}/{} occupied rooms.",
            self.name,
            self.occupied_count(),
            self.rooms.len()
        )
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::minibar::Minibar;
    use crate::money::Money;
    use crate::types::RoomConfig;

    fn room(number: i64, clean_level: i64, is_suite: bool) -> Room {
        Room::new(
            Minibar::new([("Cola", 2)], [("Chips", Money::new(7))]),
            RoomConfig::new(number)
                .with_clean_level(clean_level)
                .suite(is_suite),
        )
    }

    fn hotel() -> Hotel {
        Hotel::new(
            "Seaside",
            vec![
                room(101, 1, false),
                room(102, 4, false),
                room(201, 0, true),
                room(202, 3, true),
            ],
        )
    }

    #[test]
    fn test_check_in_picks_cleanest_regular_room() {
        let mut hotel = hotel();

        let room = hotel.check_in(&["Eve"], false).unwrap();

        assert_eq!(room.number(), RoomNumber::new(102));
        assert_eq!(room.guests(), ["eve"]);
    }

    #[test]
    fn test_check_in_suite() {
        let mut hotel = hotel();
        let room = hotel.check_in(&["Ann"], true).unwrap();
        assert_eq!(room.number(), RoomNumber::new(202));
    }

    #[test]
    fn test_check_in_tie_goes_to_first_listed() {
        let mut hotel = Hotel::new("Twin", vec![room(101, 2, false), room(102, 2, false)]);
        let room = hotel.check_in(&["Ann"], false).unwrap();
        assert_eq!(room.number(), RoomNumber::new(101));
    }

    #[test]
    fn test_check_in_no_vacancy() {
        let mut hotel = hotel();
        hotel.check_in(&["a"], true).unwrap();
        hotel.check_in(&["b"], true).unwrap();

        let err = hotel.check_in(&["c"], true).unwrap_err();

        assert_eq!(err, CoreError::NoVacancy { suite: true });
        assert_eq!(hotel.occupied_count(), 2);
    }

    #[test]
    fn test_check_out_normalizes_query() {
        let mut hotel = hotel();
        hotel.check_in(&["Bob"], false).unwrap();

        let room = hotel.check_out("  B o b  ").unwrap();

        assert_eq!(room.number(), RoomNumber::new(102));
        assert!(!room.is_occupied());
        assert_eq!(hotel.occupied_count(), 0);
    }

    #[test]
    fn test_check_out_unknown_guest() {
        let mut hotel = hotel();
        let err = hotel.check_out("nobody").unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_upgrade_moves_to_best_better_room() {
        let mut hotel = hotel();
        hotel.check_in(&["Eve"], false).unwrap(); // 102

        let room = hotel.upgrade("eve").unwrap();

        assert_eq!(room.number(), RoomNumber::new(202));
        assert_eq!(room.guests(), ["eve"]);
        assert!((room.satisfaction() - 0.6).abs() < 1e-9);
        assert!(!hotel.room(102).unwrap().is_occupied());
    }

    #[test]
    fn test_upgrade_when_already_best() {
        let mut hotel = hotel();
        hotel.check_in(&["Ann"], true).unwrap(); // 202, best room

        let err = hotel.upgrade("Ann").unwrap_err();

        assert_eq!(err, CoreError::NoUpgradeAvailable("ann".to_string()));
        assert!(hotel.room(202).unwrap().is_occupied());
    }

    #[test]
    fn test_upgrade_skips_occupied_rooms() {
        let mut hotel = hotel();
        hotel.check_in(&["Ann"], true).unwrap(); // 202
        hotel.check_in(&["Eve"], false).unwrap(); // 102

        let room = hotel.upgrade("Eve").unwrap();

        assert_eq!(room.number(), RoomNumber::new(201));
    }

    #[test]
    fn test_upgrade_unknown_guest() {
        let mut hotel = hotel();
        assert!(matches!(
            hotel.upgrade("ghost"),
            Err(CoreError::GuestNotFound(_))
        ));
    }

    #[test]
    fn test_upgrade_towards_lower_index() {
        let mut hotel = Hotel::new(
            "Reverse",
            vec![room(101, 9, false), room(102, 0, false)],
        );
        hotel.room_mut(102).unwrap().check_in(&["ann"]).unwrap();

        let room = hotel.upgrade("ann").unwrap();

        assert_eq!(room.number(), RoomNumber::new(101));
        assert!(!hotel.room(102).unwrap().is_occupied());
    }

    #[test]
    fn test_send_cleaner() {
        let mut hotel = hotel();
        hotel.check_in(&["Ann"], true).unwrap(); // 202, clean 3

        let room = hotel.send_cleaner("ANN").unwrap();

        assert_eq!(room.clean_level(), 5);
        assert!(hotel.send_cleaner("nobody").is_err());
    }

    #[test]
    fn test_room_lookup_by_number() {
        let hotel = hotel();
        assert!(hotel.room(201).is_ok());
        assert_eq!(hotel.room(999).unwrap_err(), CoreError::RoomNotFound(999));
    }

    #[test]
    fn test_find_guest() {
        let mut hotel = hotel();
        hotel.check_in(&["Eve", "Adam"], true).unwrap(); // 202

        let room = hotel.find_guest(" A D A M ").unwrap();
        assert_eq!(room.number(), RoomNumber::new(202));
        assert!(room.is_occupied());

        assert_eq!(
            hotel.find_guest("Zoe").unwrap_err(),
            CoreError::GuestNotFound("zoe".to_string())
        );
        assert_eq!(hotel.occupied_count(), 1);
    }

    #[test]
    fn test_vacancies() {
        let mut hotel = hotel();
        hotel.check_in(&["Eve"], false).unwrap();
        let numbers: Vec<i64> = hotel.vacancies(false).map(|r| r.number().get()).collect();
        assert_eq!(numbers, vec![101]);
    }

    #[test]
    fn test_display() {
        let mut hotel = hotel();
        assert_eq!(hotel.to_string(), "Seaside Hotel has: 0/4 occupied rooms.");

        hotel.check_in(&["Eve"], false).unwrap();
        assert_eq!(hotel.to_string(), "Seaside Hotel has: 1/4 occupied rooms.");
    }
}
