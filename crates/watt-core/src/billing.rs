//! # Billing Calculator
//!
//! Pure derivation of load and cost from an [`EnergyState`]. Nothing is
//! cached: every read recomputes from the state it is given.
//!
//! ## Formula
//! ```text
//! daily load (kWh)  = Σ appliance.kwh
//! monthly bill      = daily load × rate(plan) × 30      → rounded to cents
//!
//! rate(standard) = $0.25 / kWh
//! rate(green)    = $0.30 / kWh
//! ```
//!
//! Flat 30-day month, no proration, no tiered pricing.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::types::{EnergyState, PlanType, UnitRate};
use crate::BILLING_DAYS_PER_MONTH;

/// Standard plan rate.
pub const STANDARD_RATE: UnitRate = UnitRate::from_cents_per_kwh(25);

/// Green plan rate.
pub const GREEN_RATE: UnitRate = UnitRate::from_cents_per_kwh(30);

/// Per-unit price for a plan.
pub const fn rate_per_unit(plan: PlanType) -> UnitRate {
    match plan {
        PlanType::Standard => STANDARD_RATE,
        PlanType::Green => GREEN_RATE,
    }
}

/// Sum of `kwh` over all added appliances, in insertion order; `0.0` when
/// none.
pub fn total_daily_load(state: &EnergyState) -> f64 {
    state.appliances.iter().fold(0.0, |sum, a| sum + a.kwh)
}

/// Estimated monthly cost under the state's plan, to the cent.
///
/// ## Example
/// ```rust
/// use watt_core::billing::estimated_monthly_bill;
/// use watt_core::{Appliance, EnergyState, PlanType};
///
/// let state = EnergyState::new(PlanType::Standard)
///     .add_device(Appliance::new("a", "Heater", 1.0))
///     .add_device(Appliance::new("b", "Dryer", 3.5));
///
/// assert_eq!(estimated_monthly_bill(&state).amount_string(), "33.75");
/// ```
pub fn estimated_monthly_bill(state: &EnergyState) -> Money {
    monthly_cost(total_daily_load(state), state.plan)
}

/// Monthly cost of a given daily load on a plan.
pub fn monthly_cost(daily_load_kwh: f64, plan: PlanType) -> Money {
    Money::energy_cost(daily_load_kwh, rate_per_unit(plan), BILLING_DAYS_PER_MONTH)
}

/// Everything the bill display needs, derived in one pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct BillingSummary {
    pub plan: PlanType,
    pub appliance_count: usize,
    pub daily_load_kwh: f64,
    pub rate: UnitRate,
    pub monthly_bill: Money,
}

impl From<&EnergyState> for BillingSummary {
    fn from(state: &EnergyState) -> Self {
        let daily_load_kwh = total_daily_load(state);
        BillingSummary {
            plan: state.plan,
            appliance_count: state.appliance_count(),
            daily_load_kwh,
            rate: rate_per_unit(state.plan),
            monthly_bill: monthly_cost(daily_load_kwh, state.plan),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
