//! # Energy Commands
//!
//! Appliance list and plan manipulation.
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  ┌──────────┐  add_appliance   ┌──────────┐                             │
//! │  │  Empty   │─────────────────►│  Loaded  │◄──┐ add_appliance            │
//! │  │  list    │◄─────────────────│  list    │───┘ remove_appliance         │
//! │  └──────────┘  remove last     └──────────┘                             │
//! │                                                                         │
//! │  change_plan: any time, list untouched; the bill is re-derived          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;
use watt_core::billing::BillingSummary;
use watt_core::{Appliance, EnergyAction, EnergyState, PlanType};

use crate::error::ApiError;
use crate::state::{CatalogState, EnergyStore};

/// Appliance list plus derived totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnergyResponse {
    pub appliances: Vec<Appliance>,
    pub totals: BillingSummary,
}

impl From<&EnergyState> for EnergyResponse {
    fn from(state: &EnergyState) -> Self {
        EnergyResponse {
            appliances: state.appliances.clone(),
            totals: BillingSummary::from(state),
        }
    }
}

/// Gets the current appliance list and bill.
pub fn get_energy(store: &EnergyStore) -> EnergyResponse {
    debug!("get_energy command");
    store.with_state(|s| EnergyResponse::from(s))
}

/// Adds a catalog appliance under a freshly minted id.
///
/// ## Errors
/// - `CATALOG_UNAVAILABLE` when the catalog failed to load
/// - `NOT_FOUND` when the catalog has no such id
///
/// Neither error touches the store.
pub fn add_appliance(
    store: &EnergyStore,
    catalog: &CatalogState,
    catalog_id: &str,
) -> Result<(Appliance, EnergyResponse), ApiError> {
    debug!(catalog_id = %catalog_id, "add_appliance command");

    let entry = catalog.resolve(catalog_id)?;
    let (appliance, state) = store.add_from_catalog(entry);

    Ok((appliance, EnergyResponse::from(&state)))
}

/// Removes an added appliance. Unknown ids leave the list as it was.
pub fn remove_appliance(store: &EnergyStore, appliance_id: &str) -> EnergyResponse {
    debug!(appliance_id = %appliance_id, "remove_appliance command");

    let state = store.dispatch(EnergyAction::RemoveDevice(appliance_id.to_string()));
    EnergyResponse::from(&state)
}

/// Switches the billing plan.
pub fn change_plan(store: &EnergyStore, plan: PlanType) -> EnergyResponse {
    debug!(plan = %plan, "change_plan command");

    let state = store.dispatch(EnergyAction::ChangePlan(plan));
    EnergyResponse::from(&state)
}
