//! # Customer Profile
//!
//! Profile data collected before the calculator is used, and the one rule
//! that links it to billing: the suggested plan.
//!
//! ## Plan Suggestion
//! ```text
//! connection type ──► suggested plan
//! ───────────────     ──────────────
//! commercial      ──► green
//! residential     ──► standard
//! ```
//! A submitted profile issues a `ChangePlan` intent with the suggestion,
//! overriding whatever plan was selected before.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::error::ValidationError;
use crate::reducer::EnergyAction;
use crate::types::PlanType;
use crate::validation::{validate_email, validate_first_name, validate_postcode, ValidationResult};

/// Type of premises being connected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum ConnectionType {
    #[default]
    Residential,
    Commercial,
}

impl ConnectionType {
    pub const fn as_str(&self) -> &'static str {
        match self {
            ConnectionType::Residential => "residential",
            ConnectionType::Commercial => "commercial",
        }
    }
}

impl fmt::Display for ConnectionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConnectionType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "residential" => Ok(ConnectionType::Residential),
            "commercial" => Ok(ConnectionType::Commercial),
            _ => Err(ValidationError::NotAllowed {
                field: "connection type".to_string(),
                allowed: vec!["residential".to_string(), "commercial".to_string()],
            }),
        }
    }
}

/// Profile form contents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CustomerProfile {
    pub first_name: String,
    pub email: String,
    pub postcode: String,
    #[serde(default)]
    pub connection_type: ConnectionType,
    #[serde(default)]
    pub has_smart_meter: bool,
}

impl CustomerProfile {
    /// Checks every field, reporting the first failure in form order.
    pub fn validate(&self) -> ValidationResult<()> {
        validate_first_name(&self.first_name)?;
        validate_email(&self.email)?;
        validate_postcode(&self.postcode)?;
        Ok(())
    }

    /// Plan implied by the connection type.
    pub const fn suggested_plan(&self) -> PlanType {
        match self.connection_type {
            ConnectionType::Commercial => PlanType::Green,
            ConnectionType::Residential => PlanType::Standard,
        }
    }

    /// The intent a submitted profile dispatches.
    pub fn plan_intent(&self) -> EnergyAction {
        EnergyAction::ChangePlan(self.suggested_plan())
    }
}

/// A profile that passed validation, stamped at submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct SubmittedProfile {
    pub profile: CustomerProfile,
    pub plan: PlanType,
    #[ts(as = "String")]
    pub submitted_at: DateTime<Utc>,
}

impl SubmittedProfile {
    /// Validates `profile` and records the plan it implies.
    ///
    /// The clock is an argument so this stays pure.
    pub fn new(profile: CustomerProfile, submitted_at: DateTime<Utc>) -> ValidationResult<Self> {
        profile.validate()?;
        Ok(SubmittedProfile {
            plan: profile.suggested_plan(),
            profile,
            submitted_at,
        })
    }
}
