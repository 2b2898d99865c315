//! # Front Desk Configuration
//!
//! The hotel layout and the day's scripted actions.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     INNKEEPER_HOTEL_NAME=Seaside                                       │
//! │     INNKEEPER_DRINK_PRICE=12                                           │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     --config PATH, or                                                  │
//! │     ~/.config/front-desk/hotel.toml (Linux)                            │
//! │     ~/Library/Application Support/com.innkeeper.front-desk/hotel.toml  │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     "Grand" hotel, no rooms, drink price 10                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! [hotel]
//! name = "Grand"
//!
//! [minibar]
//! drink_price = 10
//!
//! [[rooms]]
//! number = 101
//! guests = []
//! clean_level = 3
//! is_suite = false
//!
//! [rooms.minibar]
//! drinks = { Cola = 2, Water = 1 }
//! snacks = { Chips = 7 }
//!
//! [[actions]]
//! op = "check_in"
//! guests = ["Eve", "Adam"]
//! ```
//!
//! Room records stay loosely typed until the hotel is built: a record with
//! `guests = "ann"` still parses here and is rejected by the room type pass.

use std::collections::BTreeMap;
use std::path::PathBuf;

use innkeeper_core::DEFAULT_DRINK_PRICE;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{debug, info, warn};

use crate::error::{DeskError, DeskResult};

// =============================================================================
// Hotel Settings
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HotelSettings {
    /// Name shown in the occupancy summary.
    #[serde(default = "default_hotel_name")]
    pub name: String,
}

fn default_hotel_name() -> String {
    "Grand".to_string()
}

impl Default for HotelSettings {
    fn default() -> Self {
        HotelSettings {
            name: default_hotel_name(),
        }
    }
}

// =============================================================================
// Minibar Settings
// =============================================================================

/// Settings shared by every minibar in the hotel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MinibarSettings {
    /// Flat charge per drink.
    #[serde(default = "default_drink_price")]
    pub drink_price: i64,
}

fn default_drink_price() -> i64 {
    DEFAULT_DRINK_PRICE.amount()
}

impl Default for MinibarSettings {
    fn default() -> Self {
        MinibarSettings {
            drink_price: default_drink_price(),
        }
    }
}

// =============================================================================
// Room Entries
// =============================================================================

/// Initial stock of one room's minibar.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MinibarStock {
    /// Drink name to quantity.
    #[serde(default)]
    pub drinks: BTreeMap<String, u32>,

    /// Snack name to price.
    #[serde(default)]
    pub snacks: BTreeMap<String, i64>,
}

/// One `[[rooms]]` entry: the minibar stock plus the loose room record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RoomEntry {
    #[serde(default)]
    pub minibar: MinibarStock,

    /// Every other key, checked later by the room type pass.
    #[serde(flatten)]
    pub record: Map<String, Value>,
}

impl RoomEntry {
    /// The room record as a JSON object.
    pub fn record_value(&self) -> Value {
        Value::Object(self.record.clone())
    }
}

// =============================================================================
// Scripted Actions
// =============================================================================

/// A front-desk operation from the `[[actions]]` list.
///
/// Guest-facing operations name a guest; housekeeping and minibar
/// operations name a room number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Action {
    CheckIn {
        guests: Vec<String>,
        #[serde(default)]
        suite: bool,
    },
    CheckOut {
        guest: String,
    },
    Upgrade {
        guest: String,
    },
    SendCleaner {
        guest: String,
    },
    Eat {
        room: i64,
        item: String,
    },
    Drink {
        room: i64,
        item: String,
    },
    Clean {
        room: i64,
    },
    /// Prints one room, or the hotel summary without a room number.
    Report {
        #[serde(default)]
        room: Option<i64>,
    },
}

impl Action {
    /// The `op` tag, used as a log field.
    pub fn op(&self) -> &'static str {
        match self {
            Action::CheckIn { .. } => "check_in",
            Action::CheckOut { .. } => "check_out",
            Action::Upgrade { .. } => "upgrade",
            Action::SendCleaner { .. } => "send_cleaner",
            Action::Eat { .. } => "eat",
            Action::Drink { .. } => "drink",
            Action::Clean { .. } => "clean",
            Action::Report { .. } => "report",
        }
    }
}

// =============================================================================
// Main Configuration
// =============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeskConfig {
    #[serde(default)]
    pub hotel: HotelSettings,

    #[serde(default)]
    pub minibar: MinibarSettings,

    /// Rooms in listing order; the order breaks ties between equal rooms.
    #[serde(default)]
    pub rooms: Vec<RoomEntry>,

    #[serde(default)]
    pub actions: Vec<Action>,
}

impl DeskConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (hotel.toml)
    /// 3. Environment variables
    pub fn load(config_path: Option<PathBuf>) -> DeskResult<Self> {
        let mut config = Self::default();

        if let Some(path) = config_path.or_else(Self::default_config_path) {
            if path.exists() {
                info!(?path, "Loading hotel config from file");
                let contents = std::fs::read_to_string(&path)?;
                config = Self::from_toml(&contents)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Parses a config document without touching the environment.
    pub fn from_toml(contents: &str) -> DeskResult<Self> {
        Ok(toml::from_str(contents)?)
    }

    pub fn validate(&self) -> DeskResult<()> {
        if self.hotel.name.trim().is_empty() {
            return Err(DeskError::InvalidConfig(
                "hotel name must not be empty".into(),
            ));
        }

        for entry in &self.rooms {
            if let Some((name, price)) = entry.minibar.snacks.iter().find(|(_, p)| **p < 0) {
                return Err(DeskError::InvalidConfig(format!(
                    "snack price must not be negative, got {} for {}",
                    price, name
                )));
            }
        }

        if self.minibar.drink_price <= 0 {
            return Err(DeskError::InvalidConfig(format!(
                "drink_price must be positive, got {}",
                self.minibar.drink_price
            )));
        }

        Ok(())
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(name) = std::env::var("INNKEEPER_HOTEL_NAME") {
            debug!(name = %name, "Overriding hotel name from environment");
            self.hotel.name = name;
        }

        if let Ok(price) = std::env::var("INNKEEPER_DRINK_PRICE") {
            match price.parse::<i64>() {
                Ok(p) => {
                    debug!(drink_price = p, "Overriding drink price from environment");
                    self.minibar.drink_price = p;
                }
                Err(_) => warn!(price = %price, "Ignoring non-numeric drink price in environment"),
            }
        }
    }

    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "innkeeper", "front-desk")
            .map(|dirs| dirs.config_dir().join("hotel.toml"))
    }
}
