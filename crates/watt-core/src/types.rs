//! # Domain Types
//!
//! Core domain types used throughout Watt Planner.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │ CatalogAppliance│   │    Appliance    │   │   EnergyState   │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (catalog)   │──►│  id (minted)    │◄──│  plan           │       │
//! │  │  name           │   │  name           │   │  appliances[]   │       │
//! │  │  kwh            │   │  kwh            │   └─────────────────┘       │
//! │  └─────────────────┘   └─────────────────┘                              │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐                              │
//! │  │    PlanType     │   │    UnitRate     │                              │
//! │  │  ─────────────  │   │  ─────────────  │                              │
//! │  │  Standard       │──►│  cents per kWh  │                              │
//! │  │  Green          │   │  25 / 30        │                              │
//! │  └─────────────────┘   └─────────────────┘                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Two Kinds of Appliance
//! - `CatalogAppliance`: what CAN be added (read-only, loaded once)
//! - `Appliance`: what HAS been added (carries a freshly minted id)

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::error::ValidationError;
use crate::ids::IdGenerator;

// =============================================================================
// Unit Rate
// =============================================================================

/// Price of one kWh, in cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct UnitRate(u32);

impl UnitRate {
    /// Creates a rate from cents per kWh.
    #[inline]
    pub const fn from_cents_per_kwh(cents: u32) -> Self {
        UnitRate(cents)
    }

    /// Returns the rate in cents per kWh.
    #[inline]
    pub const fn cents_per_kwh(&self) -> u32 {
        self.0
    }

    /// Returns the rate in currency units per kWh; billing multiplies this.
    #[inline]
    pub fn per_kwh(&self) -> f64 {
        f64::from(self.0) / 100.0
    }
}

// =============================================================================
// Plan Type
// =============================================================================

/// The billing rate tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum PlanType {
    /// Standard rate.
    #[default]
    Standard,
    /// Eco-green rate.
    Green,
}

impl PlanType {
    /// Every plan, in display order.
    pub const ALL: [PlanType; 2] = [PlanType::Standard, PlanType::Green];

    /// Wire name, as used in JSON and on the command line.
    pub const fn as_str(&self) -> &'static str {
        match self {
            PlanType::Standard => "standard",
            PlanType::Green => "green",
        }
    }

    /// Human label shown next to the bill.
    pub const fn label(&self) -> &'static str {
        match self {
            PlanType::Standard => "Standard Rate",
            PlanType::Green => "Eco-Green Rate",
        }
    }
}

impl fmt::Display for PlanType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PlanType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "standard" => Ok(PlanType::Standard),
            "green" => Ok(PlanType::Green),
            _ => Err(ValidationError::NotAllowed {
                field: "plan".to_string(),
                allowed: PlanType::ALL.iter().map(|p| p.as_str().to_string()).collect(),
            }),
        }
    }
}

// =============================================================================
// Catalog Appliance
// =============================================================================

/// An entry of the read-only appliance catalog.
///
/// Matches the catalog JSON shape: `{"id": "...", "name": "...", "kwh": 1.5}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CatalogAppliance {
    /// Catalog identifier, unique within the catalog.
    pub id: String,

    /// Display label.
    pub name: String,

    /// Energy draw per hour of use, in kWh.
    pub kwh: f64,
}

// =============================================================================
// Appliance
// =============================================================================

/// An appliance the user has added to the household load.
///
/// Immutable value record: created by an add intent, destroyed by a remove
/// intent, never edited in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Appliance {
    /// Unique among currently-added appliances.
    pub id: String,

    /// Display label.
    pub name: String,

    /// Energy draw per hour, in kWh. Non-negative.
    pub kwh: f64,
}

impl Appliance {
    /// Creates an appliance from its parts.
    pub fn new(id: impl Into<String>, name: impl Into<String>, kwh: f64) -> Self {
        Appliance {
            id: id.into(),
            name: name.into(),
            kwh,
        }
    }

    /// Mints a new appliance from a catalog entry.
    ///
    /// Name and draw are copied; the id comes from `ids`, so adding the same
    /// catalog entry twice yields two distinct appliances.
    ///
    /// ## Example
    /// ```rust
    /// use watt_core::{Appliance, CatalogAppliance, SequentialIdGenerator};
    ///
    /// let kettle = CatalogAppliance { id: "kettle".into(), name: "Kettle".into(), kwh: 1.2 };
    /// let mut ids = SequentialIdGenerator::new();
    ///
    /// let first = Appliance::from_catalog(&kettle, &mut ids);
    /// let second = Appliance::from_catalog(&kettle, &mut ids);
    /// assert_eq!(first.id, "kettle-1");
    /// assert_eq!(second.id, "kettle-2");
    /// ```
    pub fn from_catalog<G>(entry: &CatalogAppliance, ids: &mut G) -> Self
    where
        G: IdGenerator + ?Sized,
    {
        Appliance {
            id: ids.next_id(&entry.id),
            name: entry.name.clone(),
            kwh: entry.kwh,
        }
    }
}

// =============================================================================
// Energy State
// =============================================================================

/// The aggregate root: selected plan plus the ordered list of added
/// appliances.
///
/// ## Invariants
/// - Appliance ids are unique when minted by an [`IdGenerator`]; duplicates are not rejected
/// - Insertion order is preserved: adds append, removes keep relative order
/// - Values are replaced, never mutated: see [`crate::reducer`]
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct EnergyState {
    pub plan: PlanType,
    pub appliances: Vec<Appliance>,
}

impl EnergyState {
    /// Creates an empty state on the given plan.
    pub fn new(plan: PlanType) -> Self {
        EnergyState {
            plan,
            appliances: Vec::new(),
        }
    }

    /// Returns the number of added appliances.
    pub fn appliance_count(&self) -> usize {
        self.appliances.len()
    }

    /// Checks if no appliance has been added.
    pub fn is_empty(&self) -> bool {
        self.appliances.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_default_is_standard() {
        assert_eq!(PlanType::default(), PlanType::Standard);
    }

    #[test]
    fn test_plan_from_str() {
        assert_eq!("green".parse::<PlanType>().unwrap(), PlanType::Green);
        assert_eq!(" Standard ".parse::<PlanType>().unwrap(), PlanType::Standard);
        assert!(matches!(
            "premium".parse::<PlanType>(),
            Err(ValidationError::NotAllowed { .. })
        ));
    }

    #[test]
    fn test_plan_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&PlanType::Green).unwrap(), "\"green\"");
        let plan: PlanType = serde_json::from_str("\"standard\"").unwrap();
        assert_eq!(plan, PlanType::Standard);
    }

    #[test]
    fn test_unit_rate() {
        let rate = UnitRate::from_cents_per_kwh(25);
        assert_eq!(rate.cents_per_kwh(), 25);
        assert!((rate.per_kwh() - 0.25).abs() < f64::EPSILON);
    }

    #[test]
    fn test_catalog_appliance_deserializes() {
        let entry: CatalogAppliance =
            serde_json::from_str(r#"{"id":"fridge","name":"Fridge","kwh":2.4}"#).unwrap();
        assert_eq!(entry.id, "fridge");
        assert_eq!(entry.kwh, 2.4);
    }

    #[test]
    fn test_state_counts() {
        let state = EnergyState {
            plan: PlanType::Standard,
            appliances: vec![Appliance::new("tv-1", "TV", 0.2)],
        };
        assert_eq!(state.appliance_count(), 1);
        assert!(!state.is_empty());
        assert!(EnergyState::default().is_empty());
    }
}
