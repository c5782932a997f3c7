//! # Session Commands
//!
//! Every operation the session can perform, one function per command.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (exports)
//! ├── catalog.rs  ◄─── One-time catalog load, listing
//! ├── energy.rs   ◄─── Add / remove appliance, change plan, read totals
//! └── profile.rs  ◄─── Profile submit (validate, delay, plan intent)
//! ```
//!
//! Each command declares only the state it needs:
//! ```rust,ignore
//! // Only needs the store
//! fn remove_appliance(store: &EnergyStore, ...)
//!
//! // Needs store and catalog
//! fn add_appliance(store: &EnergyStore, catalog: &CatalogState, ...)
//! ```

pub mod catalog;
pub mod energy;
pub mod profile;
