//! # Watt Planner CLI Library
//!
//! Presentation layer for Watt Planner: an interactive terminal session over
//! the pure logic in `watt-core`.
//!
//! ## Module Organization
//! ```text
//! watt_cli/
//! ├── lib.rs          ◄─── You are here (startup & run)
//! ├── cli.rs          ◄─── Startup flags and session-line grammar (clap)
//! ├── session.rs      ◄─── Line loop and rendering
//! ├── state/          ◄─── EnergyStore, CatalogState, AppConfig
//! ├── commands/       ◄─── energy, catalog, profile
//! └── error.rs        ◄─── API error type for commands
//! ```

pub mod cli;
pub mod commands;
pub mod error;
pub mod session;
pub mod state;

use tokio::io::BufReader;
use tracing::info;
use tracing_subscriber::EnvFilter;

use cli::Cli;
use session::Session;
use state::{AppConfig, ConfigError, EnergyStore};

/// Runs the application.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Application Startup                               │
/// │                                                                         │
/// │  1. Initialize Logging (stderr, RUST_LOG or -v)                         │
/// │  2. Load configuration: defaults ◄ WATT_* env ◄ flags                   │
/// │  3. Load the appliance catalog once (failure → empty catalog)           │
/// │  4. Create the EnergyStore on the configured plan                       │
/// │  5. Run the session on stdin / stdout                                   │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    init_tracing(cli.verbose);

    info!("Starting Watt Planner session");

    let config = load_config(&cli)?;
    info!(
        catalog = %config.catalog_path.display(),
        plan = %config.initial_plan,
        submit_delay_ms = config.submit_delay_ms,
        "Configuration loaded"
    );

    let catalog = commands::catalog::load_catalog(&config.catalog_path).await;
    let store = EnergyStore::new(config.initial_plan);
    let session = Session::new(config, catalog, store);

    let stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = std::io::stdout();
    session.run(stdin, &mut stdout).await?;

    info!("Session ended");
    Ok(())
}

/// Environment over defaults, then command-line flags over both.
pub fn load_config(cli: &Cli) -> Result<AppConfig, ConfigError> {
    let mut config = AppConfig::from_env()?;

    if let Some(path) = &cli.catalog {
        config.catalog_path = path.clone();
    }
    if let Some(plan) = cli.plan {
        config.initial_plan = plan;
    }
    if let Some(delay) = cli.submit_delay_ms {
        config.submit_delay_ms = delay;
    }

    Ok(config)
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=watt=trace` - Show trace for watt crates only
/// - Default: WARN, `-v` DEBUG, `-vv` TRACE
///
/// Logs go to stderr; stdout carries the session.
fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info,watt=debug",
        _ => "debug,watt=trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
