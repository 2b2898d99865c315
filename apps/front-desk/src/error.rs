//! # Front Desk Error Types
//!
//! Failures that stop the front desk before or outside the scripted day.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Front Desk                         │
//! │                                                                         │
//! │  hotel.toml ── read ─────► Io            ┐                              │
//! │             ── parse ────► TomlParse     │  fatal: run() returns Err,   │
//! │             ── validate ─► InvalidConfig │  main prints it, exit 1      │
//! │  --json dump ────────────► Json          ┘                              │
//! │                                                                         │
//! │  scripted action ── rejected ──► CoreError                              │
//! │                                  printed as the outcome line,           │
//! │                                  the day goes on                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

/// Result type alias for front desk operations.
pub type DeskResult<T> = Result<T, DeskError>;

#[derive(Debug, Error)]
pub enum DeskError {
    /// Reading the config file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The config file is not valid TOML or does not match the layout.
    #[error("Failed to parse config: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Dumping the hotel state failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The config parsed but holds unusable values.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
