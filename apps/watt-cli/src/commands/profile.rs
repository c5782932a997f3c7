//! # Profile Commands
//!
//! Profile submission: the only place the plan changes as a side effect.
//!
//! ## User Workflow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  profile --first-name Alinta --email a@b.io --postcode 3000 ...         │
//! │                    │                                                    │
//! │                    ▼                                                    │
//! │  1. Validate fields ──── invalid ──► VALIDATION_ERROR, nothing changes  │
//! │                    │                                                    │
//! │                    ▼                                                    │
//! │  2. Wait submit_delay (simulated network latency, default 1s)           │
//! │                    │                                                    │
//! │                    ▼                                                    │
//! │  3. Dispatch ChangePlan(suggested plan)                                 │
//! │       commercial → green, residential → standard                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::Utc;
use serde::Serialize;
use tracing::{debug, info};
use watt_core::{CustomerProfile, SubmittedProfile};

use super::energy::EnergyResponse;
use crate::error::ApiError;
use crate::state::{AppConfig, EnergyStore};

/// Accepted profile and the state after its plan intent.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileResponse {
    pub submitted: SubmittedProfile,
    pub energy: EnergyResponse,
}

/// Submits a profile.
pub async fn submit_profile(
    store: &EnergyStore,
    config: &AppConfig,
    profile: CustomerProfile,
) -> Result<ProfileResponse, ApiError> {
    debug!(
        connection_type = %profile.connection_type,
        has_smart_meter = profile.has_smart_meter,
        "submit_profile command"
    );

    profile.validate()?;

    tokio::time::sleep(config.submit_delay()).await;

    let submitted = SubmittedProfile::new(profile, Utc::now())?;
    let state = store.dispatch(submitted.profile.plan_intent());
    info!(plan = %submitted.plan, "Profile submitted");

    Ok(ProfileResponse {
        submitted,
        energy: EnergyResponse::from(&state),
    })
}
