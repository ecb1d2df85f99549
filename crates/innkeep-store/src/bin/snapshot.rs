//! # Front Desk Snapshot
//!
//! Loads a property and prints the dashboard for the business date as JSON.
//!
//! ## Usage
//! ```bash
//! # Demo property around today
//! cargo run -p innkeep-store --bin snapshot
//!
//! # A seed file, for a given business date
//! cargo run -p innkeep-store --bin snapshot -- --seed ./hotel.json --date 2025-10-17
//!
//! # Dump the whole seed document instead of the dashboard
//! cargo run -p innkeep-store --bin snapshot -- --export
//! ```
//!
//! Logs go to stderr so stdout stays valid JSON.

use std::env;
use std::path::PathBuf;

use chrono::NaiveDate;
use innkeep_store::{PropertyStore, StoreConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let mut config = StoreConfig::from_env();
    let mut export = false;

    let args: Vec<String> = env::args().collect();
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--date" | "-d" => {
                if i + 1 < args.len() {
                    config.business_date = args[i + 1].parse::<NaiveDate>()?;
                    i += 1;
                }
            }
            "--seed" | "-s" => {
                if i + 1 < args.len() {
                    config.seed_path = Some(PathBuf::from(&args[i + 1]));
                    i += 1;
                }
            }
            "--export" | "-e" => export = true,
            "--help" | "-h" => {
                println!("Innkeep Front Desk Snapshot");
                println!();
                println!("Usage: snapshot [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -d, --date <YYYY-MM-DD>  Business date (default: today)");
                println!("  -s, --seed <PATH>        JSON seed file (default: demo property)");
                println!("  -e, --export             Print the full seed document");
                println!("  -h, --help               Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    let store = PropertyStore::from_seed(config.load_seed()?)?;
    info!(
        property = %config.property_name,
        business_date = %config.business_date,
        currency = %config.currency_code,
        "Store ready"
    );

    let json = if export {
        serde_json::to_string_pretty(&store.export())?
    } else {
        serde_json::to_string_pretty(&store.snapshot(config.business_date))?
    };
    println!("{json}");

    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=innkeep_store=trace` - Show trace for the store only
/// - Default: INFO, DEBUG for innkeep crates
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,innkeep_store=debug,innkeep_core=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
