//! # Watt Planner Entry Point
//!
//! ```bash
//! # Default catalog (demos/appliances.json), 1s simulated submit
//! cargo run -p watt-cli
//!
//! # Custom catalog, instant submit, debug logs
//! cargo run -p watt-cli -- --catalog ./my-appliances.json --submit-delay-ms 0 -v
//!
//! # Scripted session
//! printf 'add fridge\nplan green\nshow\n' | cargo run -p watt-cli
//! ```

use clap::Parser;
use watt_cli::cli::Cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // The actual setup is in lib.rs for better testability
    watt_cli::run(Cli::parse()).await
}
