//! # watt-core: Pure Business Logic for Watt Planner
//!
//! This crate is the **heart** of Watt Planner. It holds the household
//! energy model, the state reducer and the bill calculator as pure functions
//! with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Watt Planner Architecture                          │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Presentation Layer (watt-cli)                   │   │
//! │  │    Profile ──► Catalog ──► Add / Remove ──► Bill display        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ EnergyAction                          │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ watt-core (THIS CRATE) ★                        │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │  reducer  │  │  billing  │  │  profile  │  │   │
//! │  │   │ Appliance │  │  reduce   │  │ daily load│  │ suggested │  │   │
//! │  │   │ EnergyState│ │  actions  │  │ monthly $ │  │   plan    │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO FILES • NO NETWORK • PURE FUNCTIONS              │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Appliance, PlanType, EnergyState)
//! - [`reducer`] - Intent type and state transitions
//! - [`billing`] - Daily load and monthly bill derivation
//! - [`money`] - Money type with integer cents
//! - [`catalog`] - Read-only appliance catalog
//! - [`ids`] - Appliance id generation
//! - [`profile`] - Customer profile and plan suggestion
//! - [`validation`] - Field validation rules
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use watt_core::billing::{estimated_monthly_bill, total_daily_load};
//! use watt_core::{Appliance, EnergyAction, EnergyState, PlanType, reduce};
//!
//! let state = EnergyState::default();
//! let fridge = Appliance::new("fridge-1", "Fridge", 2.4);
//! let state = reduce(&state, EnergyAction::AddDevice(fridge));
//!
//! assert_eq!(total_daily_load(&state), 2.4);
//! assert_eq!(estimated_monthly_bill(&state).amount_string(), "18.00");
//!
//! let state = reduce(&state, EnergyAction::ChangePlan(PlanType::Green));
//! assert_eq!(estimated_monthly_bill(&state).amount_string(), "21.60");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod billing;
pub mod catalog;
pub mod error;
pub mod ids;
pub mod money;
pub mod profile;
pub mod reducer;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use catalog::Catalog;
pub use error::{CoreError, CoreResult, ValidationError};
pub use ids::{IdGenerator, SequentialIdGenerator, UuidIdGenerator};
pub use money::Money;
pub use profile::{ConnectionType, CustomerProfile, SubmittedProfile};
pub use reducer::{reduce, EnergyAction};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Days in the billing month.
///
/// A flat 30-day approximation: no proration, no calendar months.
pub const BILLING_DAYS_PER_MONTH: u32 = 30;

/// Maximum length of a catalog appliance id, checked before the minted
/// `-{suffix}` is appended.
pub const MAX_APPLIANCE_ID_LEN: usize = 100;
