//! # Scripted Day
//!
//! Builds the hotel from the config and runs the `[[actions]]` list
//! against it.
//!
//! ## Flow
//! ```text
//! DeskConfig.rooms ──► RoomConfig::from_value ── type error ─────────────┐
//!                              │               ── number not an integer ─┴► skipped (warn)
//!                              ▼
//!                      Room::new (value error stays advisory)
//!                              │
//!                              ▼
//!                           Hotel
//!                              │
//! DeskConfig.actions ──► perform ── Ok ──► outcome line
//!                              └──── Err ──► diagnostic line, go on
//! ```

use innkeeper_core::{CoreResult, Hotel, Minibar, Money, Room, RoomConfig, ValidationError};
use tracing::{debug, info, warn};

use crate::config::{Action, DeskConfig, RoomEntry};

/// Builds the hotel, skipping room records that fail the type pass or have
/// no integer room number.
pub fn build_hotel(config: &DeskConfig) -> Hotel {
    let drink_price = Money::new(config.minibar.drink_price);

    let rooms: Vec<Room> = config
        .rooms
        .iter()
        .enumerate()
        .filter_map(|(position, entry)| match RoomConfig::from_value(&entry.record_value()) {
            Ok(room_config) => Some(Room::new(stock_minibar(entry, drink_price), room_config)),
            Err(e) => {
                warn!(position, field = e.field(), "{}", skipped_record_line(position, &e));
                None
            }
        })
        .collect();

    info!(
        hotel = %config.hotel.name,
        rooms = rooms.len(),
        skipped = config.rooms.len() - rooms.len(),
        "Hotel opened"
    );
    Hotel::new(config.hotel.name.clone(), rooms)
}

/// Log line for a room record that never became a room.
fn skipped_record_line(position: usize, err: &ValidationError) -> String {
    format!("{} in room record #{}, record skipped", err, position + 1)
}

fn stock_minibar(entry: &RoomEntry, drink_price: Money) -> Minibar {
    Minibar::new(
        entry
            .minibar
            .drinks
            .iter()
            .map(|(name, quantity)| (name.as_str(), *quantity)),
        entry
            .minibar
            .snacks
            .iter()
            .map(|(name, price)| (name.as_str(), Money::new(*price))),
    )
    .with_drink_price(drink_price)
}

/// Runs every action in order and returns one output block per action.
///
/// A rejected action yields its diagnostic line; later actions still run.
pub fn run_actions(hotel: &mut Hotel, actions: &[Action]) -> Vec<String> {
    actions
        .iter()
        .map(|action| match perform(hotel, action) {
            Ok(outcome) => {
                debug!(op = action.op(), "Action done");
                outcome
            }
            Err(e) => {
                debug!(op = action.op(), error = %e, "Action rejected");
                e.to_string()
            }
        })
        .collect()
}

/// Runs one action and describes what happened.
pub fn perform(hotel: &mut Hotel, action: &Action) -> CoreResult<String> {
    match action {
        Action::CheckIn { guests, suite } => {
            let room = hotel.check_in(guests.as_slice(), *suite)?;
            Ok(format!(
                "Checked in {} to room {}.",
                guests.join(", "),
                room.number()
            ))
        }
        Action::CheckOut { guest } => {
            let room = hotel.check_out(guest)?;
            Ok(format!("Checked out room {}.", room.number()))
        }
        Action::Upgrade { guest } => {
            let room = hotel.upgrade(guest)?;
            Ok(format!("Upgraded {} to room {}.", guest, room.number()))
        }
        Action::SendCleaner { guest } => {
            let room = hotel.send_cleaner(guest)?;
            Ok(format!(
                "Cleaner sent to room {} (clean level {}).",
                room.number(),
                room.clean_level()
            ))
        }
        Action::Eat { room, item } => {
            let charged = hotel.room_mut(*room)?.minibar_mut().eat(item)?;
            Ok(format!("Room {} ate {} for {}.", room, item, charged))
        }
        Action::Drink { room, item } => {
            let charged = hotel.room_mut(*room)?.minibar_mut().drink(item)?;
            Ok(format!("Room {} drank {} for {}.", room, item, charged))
        }
        Action::Clean { room } => {
            let room = hotel.room_mut(*room)?;
            room.clean();
            Ok(format!(
                "Room {} cleaned (clean level {}).",
                room.number(),
                room.clean_level()
            ))
        }
        Action::Report { room: Some(number) } => Ok(hotel.room(*number)?.to_string()),
        Action::Report { room: None } => Ok(hotel.to_string()),
    }
}
