//! # Front Desk
//!
//! Command-line driver for the Innkeeper hotel model.
//!
//! ## Startup Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Front Desk Startup Flow                             │
//! │                                                                         │
//! │  1. Initialize Tracing ────────────────────────────────────────────────►│
//! │     • tracing-subscriber with env filter                                │
//! │     • Default: info,innkeeper=debug (debug with --verbose)              │
//! │     • RUST_LOG overrides both                                           │
//! │                                                                         │
//! │  2. Load Config ───────────────────────────────────────────────────────►│
//! │     • --config PATH or the platform config dir                          │
//! │     • env overrides, then validate()                                    │
//! │                                                                         │
//! │  3. Build Hotel ───────────────────────────────────────────────────────►│
//! │     • loose room records, type errors skipped                           │
//! │                                                                         │
//! │  4. Run Actions ───────────────────────────────────────────────────────►│
//! │     • one outcome line per action, rejections do not stop the day       │
//! │                                                                         │
//! │  5. Report ────────────────────────────────────────────────────────────►│
//! │     • occupancy summary, or the whole hotel as JSON with --json         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod config;
pub mod error;
pub mod script;

use std::path::PathBuf;

use tracing::info;
use tracing_subscriber::EnvFilter;

pub use config::{Action, DeskConfig};
pub use error::{DeskError, DeskResult};
pub use script::{build_hotel, perform, run_actions};

/// What to run and how to report it.
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    pub config: Option<PathBuf>,
    pub json: bool,
}

/// Runs the scripted day and returns everything to print, in order.
pub fn run(options: &RunOptions) -> DeskResult<Vec<String>> {
    info!("Starting Innkeeper front desk");

    let config = DeskConfig::load(options.config.clone())?;
    let mut hotel = build_hotel(&config);

    let mut output = run_actions(&mut hotel, &config.actions);
    output.push(hotel.to_string());

    if options.json {
        output.push(serde_json::to_string_pretty(&hotel)?);
    }

    info!(
        actions = config.actions.len(),
        occupied = hotel.occupied_count(),
        "Front desk closed"
    );
    Ok(output)
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=innkeeper_core=warn` - Only rejected operations from the model
/// - Default: `info,innkeeper=debug`, or `debug` with `verbose`
pub fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "info,innkeeper=debug" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
