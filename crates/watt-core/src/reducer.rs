//! # State Reducer
//!
//! Computes the next [`EnergyState`] from the current one and an intent.
//!
//! ## Transitions
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    EnergyAction → EnergyState                           │
//! │                                                                         │
//! │  Intent                    Field touched        Other field             │
//! │  ──────                    ─────────────        ───────────             │
//! │                                                                         │
//! │  AddDevice(appliance) ───► appliances.push ──── plan unchanged          │
//! │                                                                         │
//! │  RemoveDevice(id) ───────► appliances.retain ── plan unchanged          │
//! │                                                                         │
//! │  ChangePlan(plan) ───────► plan = plan ──────── appliances unchanged    │
//! │                                                                         │
//! │  Every transition is total: no intent is ever rejected.                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The input state is borrowed and a fresh value is returned, so a caller
//! holding the old state still sees it exactly as it was.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::types::{Appliance, EnergyState, PlanType};

/// A request to change the energy state.
///
/// Closed set: adding a variant forces every `match` on it to be revisited.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "type", content = "payload", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EnergyAction {
    AddDevice(Appliance),
    RemoveDevice(String),
    ChangePlan(PlanType),
}

/// Applies one intent.
///
/// ## Example
/// ```rust
/// use watt_core::{reduce, Appliance, EnergyAction, EnergyState};
///
/// let empty = EnergyState::default();
/// let one = reduce(&empty, EnergyAction::AddDevice(Appliance::new("tv-1", "TV", 0.2)));
/// let back = reduce(&one, EnergyAction::RemoveDevice("tv-1".to_string()));
///
/// assert_eq!(one.appliances.len(), 1);
/// assert_eq!(back, empty);
/// ```
pub fn reduce(state: &EnergyState, action: EnergyAction) -> EnergyState {
    match action {
        EnergyAction::AddDevice(appliance) => state.add_device(appliance),
        EnergyAction::RemoveDevice(id) => state.remove_device(&id),
        EnergyAction::ChangePlan(plan) => state.change_plan(plan),
    }
}

impl EnergyState {
    /// Returns a state with `appliance` appended.
    ///
    /// The id is NOT checked for uniqueness. Callers mint a fresh id per add
    /// (see [`Appliance::from_catalog`]); inserting an id that is already
    /// present is permitted and leaves two entries sharing it, and a later
    /// remove drops both.
    pub fn add_device(&self, appliance: Appliance) -> EnergyState {
        let mut appliances = Vec::with_capacity(self.appliances.len() + 1);
        appliances.extend(self.appliances.iter().cloned());
        appliances.push(appliance);

        EnergyState {
            plan: self.plan,
            appliances,
        }
    }

    /// Returns a state without the appliance whose id is `id`.
    ///
    /// A miss returns an equal state. Removing twice is the same as once.
    pub fn remove_device(&self, id: &str) -> EnergyState {
        EnergyState {
            plan: self.plan,
            appliances: self
                .appliances
                .iter()
                .filter(|a| a.id != id)
                .cloned()
                .collect(),
        }
    }

    /// Returns a state on `plan` with the same appliances.
    pub fn change_plan(&self, plan: PlanType) -> EnergyState {
        EnergyState {
            plan,
            appliances: self.appliances.clone(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn fridge() -> Appliance {
        Appliance::new("fridge-1", "Fridge", 2.4)
    }

    #[test]
    fn test_add_appends_and_keeps_plan() {
        let state = EnergyState::new(PlanType::Green);
        let tv = Appliance::new("tv-1", "TV", 0.2);

        let next = reduce(&state, EnergyAction::AddDevice(fridge()));
        let next = reduce(&next, EnergyAction::AddDevice(tv.clone()));

        assert_eq!(next.plan, PlanType::Green);
        assert_eq!(next.appliances, vec![fridge(), tv]);
    }

    #[test]
    fn test_add_leaves_input_untouched() {
        let state = EnergyState::default();
        let next = state.add_device(fridge());

        assert!(state.is_empty());
        assert_eq!(next.appliance_count(), 1);
    }

    #[test]
    fn test_remove_keeps_relative_order() {
        let state = EnergyState::default()
            .add_device(Appliance::new("a", "A", 1.0))
            .add_device(Appliance::new("b", "B", 2.0))
            .add_device(Appliance::new("c", "C", 3.0));

        let next = reduce(&state, EnergyAction::RemoveDevice("b".to_string()));

        let ids: Vec<&str> = next.appliances.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "c"]);
    }

    #[test]
    fn test_remove_missing_id_is_noop() {
        let state = EnergyState::default().add_device(fridge());

        let once = state.remove_device("nope");
        let twice = once.remove_device("nope");

        assert_eq!(once, state);
        assert_eq!(twice, state);
    }

    #[test]
    fn test_remove_is_idempotent() {
        let state = EnergyState::default().add_device(fridge());

        let once = state.remove_device("fridge-1");
        let twice = once.remove_device("fridge-1");

        assert!(once.is_empty());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_change_plan_keeps_appliances() {
        let state = EnergyState::default().add_device(fridge());

        let next = reduce(&state, EnergyAction::ChangePlan(PlanType::Green));

        assert_eq!(next.plan, PlanType::Green);
        assert_eq!(next.appliances, state.appliances);
        assert_eq!(state.plan, PlanType::Standard);
    }

    #[test]
    fn test_duplicate_id_insertion_is_permitted() {
        let state = EnergyState::default()
            .add_device(fridge())
            .add_device(fridge());
        assert_eq!(state.appliance_count(), 2);

        // Both entries share the id, so both go
        assert!(state.remove_device("fridge-1").is_empty());
    }

    #[test]
    fn test_action_wire_format() {
        let action = EnergyAction::RemoveDevice("fridge-1".to_string());
        let json = serde_json::to_string(&action).unwrap();
        assert_eq!(json, r#"{"type":"REMOVE_DEVICE","payload":"fridge-1"}"#);

        let parsed: EnergyAction =
            serde_json::from_str(r#"{"type":"CHANGE_PLAN","payload":"green"}"#).unwrap();
        assert_eq!(parsed, EnergyAction::ChangePlan(PlanType::Green));
    }

    #[test]
    fn test_unknown_action_type_is_rejected_on_parse() {
        let parsed = serde_json::from_str::<EnergyAction>(r#"{"type":"RESET","payload":null}"#);
        assert!(parsed.is_err());
    }
}
