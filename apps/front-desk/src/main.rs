//! # Front Desk Entry Point
//!
//! ```text
//! front-desk --config hotel.toml          outcome lines + occupancy summary
//! front-desk --config hotel.toml --json   ... followed by the hotel as JSON
//! front-desk --verbose                    debug logging on stderr
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use front_desk::RunOptions;
use tracing::error;

#[derive(Parser)]
#[command(name = "front-desk")]
#[command(about = "Runs a scripted day at the hotel front desk.")]
struct Cli {
    /// Hotel layout and actions (defaults to the platform config dir)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the final hotel state as JSON
    #[arg(long)]
    json: bool,

    /// Debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    front_desk::init_tracing(cli.verbose);

    let options = RunOptions {
        config: cli.config,
        json: cli.json,
    };

    match front_desk::run(&options) {
        Ok(lines) => {
            for line in lines {
                println!("{}", line);
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{}", e);
            eprintln!("front-desk: {}", e);
            ExitCode::FAILURE
        }
    }
}
