//! # innkeeper-core: Pure Hotel Model for Innkeeper
//!
//! This crate is the **heart** of Innkeeper. It models a small hotel's rooms,
//! their guests and their minibars, with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Innkeeper Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    front-desk (CLI)                             │   │
//! │  │    hotel.toml ──► layout ──► scripted actions ──► report        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ innkeeper-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   hotel   │  │   room    │  │  minibar  │  │ validation│  │   │
//! │  │   │  Hotel    │─►│  Room     │─►│  Minibar  │  │   rules   │  │   │
//! │  │   │ check_in  │  │ move_to   │  │  eat      │  │  normalize│  │   │
//! │  │   │ upgrade   │  │ better_.. │  │  drink    │  │           │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO PRINTING • SINGLE-THREADED • OWNED STATE          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`hotel`] - Room collection and front-desk operations
//! - [`room`] - Occupancy, cleaning, moves, ranking
//! - [`minibar`] - Drinks, snacks and the bill
//! - [`money`] - Integer money
//! - [`types`] - Room numbers and the room constructor record
//! - [`validation`] - Type/value passes and name normalization
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Explicit Errors**: every rejected operation returns a typed error
//!    whose text is the operator-facing diagnostic; the same line is emitted
//!    as a `tracing` warning
//! 2. **All or Nothing**: a rejected operation changes nothing
//! 3. **Advisory Validation**: a room that fails the value pass still exists
//!    and still works
//!
//! ## Example Usage
//!
//! ```rust
//! use innkeeper_core::{Hotel, Minibar, Money, Room, RoomConfig};
//!
//! let rooms = vec![
//!     Room::new(Minibar::empty(), RoomConfig::new(101).with_clean_level(1)),
//!     Room::new(Minibar::empty(), RoomConfig::new(102).with_clean_level(3)),
//!     Room::new(
//!         Minibar::new([("Cola", 2)], [("Chips", Money::new(7))]),
//!         RoomConfig::new(201).suite(true),
//!     ),
//! ];
//! let mut hotel = Hotel::new("Seaside", rooms);
//!
//! let room = hotel.check_in(&["Eve"], false).unwrap();
//! assert_eq!(room.number().get(), 102);
//!
//! let suite = hotel.upgrade("  E V E ").unwrap();
//! assert_eq!(suite.number().get(), 201);
//! assert_eq!(hotel.to_string(), "Seaside Hotel has: 1/3 occupied rooms.");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod hotel;
pub mod minibar;
pub mod money;
pub mod room;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ItemKind, OccupancyError, ValidationError, ValidationKind};
pub use hotel::Hotel;
pub use minibar::Minibar;
pub use money::Money;
pub use room::Room;
pub use types::{RoomConfig, RoomNumber};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Fixed charge for any drink, whatever is left in stock.
///
/// Minibars can override it with [`Minibar::with_drink_price`]; the front
/// desk reads it from `[minibar] drink_price`.
pub const DEFAULT_DRINK_PRICE: Money = Money::new(10);

/// Satisfaction of a freshly checked-in party.
pub const DEFAULT_SATISFACTION: f64 = 0.5;

/// Bounds of a satisfaction score.
pub const MIN_SATISFACTION: f64 = 0.0;
pub const MAX_SATISFACTION: f64 = 1.0;

/// Satisfaction gained when guests are moved into a strictly better room.
pub const SATISFACTION_UPGRADE_BONUS: f64 = 0.1;

/// Valid in-floor indexes (the last two digits of a room number).
pub const MIN_ROOM_INDEX: i64 = 1;
pub const MAX_ROOM_INDEX: i64 = 40;
