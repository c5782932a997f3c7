//! # State Module
//!
//! Session state for the terminal app, split by responsibility.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌──────────────┐  ┌──────────────┐  ┌──────────────────┐              │
//! │  │ EnergyStore  │  │ CatalogState │  │    AppConfig     │              │
//! │  │              │  │              │  │                  │              │
//! │  │  Arc<Mutex<  │  │  Catalog     │  │  catalog_path    │              │
//! │  │  EnergyState │  │  + load      │  │  submit_delay    │              │
//! │  │  >>          │  │    status    │  │  currency        │              │
//! │  └──────────────┘  └──────────────┘  └──────────────────┘              │
//! │                                                                         │
//! │  • EnergyStore: the only mutable state; replaced per intent             │
//! │  • CatalogState: read-only after the startup load                       │
//! │  • AppConfig: read-only after startup                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod catalog;
mod config;
mod store;

pub use catalog::{CatalogState, CatalogStatus};
pub use config::{AppConfig, ConfigError};
pub use store::EnergyStore;
