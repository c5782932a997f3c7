//! # Energy Store
//!
//! The explicit state container the session owns. Holds the current
//! [`EnergyState`] and swaps it for the reducer's output on every intent.
//!
//! ## Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Energy Store Operations                              │
//! │                                                                         │
//! │  Session command          Store call              Reducer intent        │
//! │  ───────────────          ──────────              ──────────────        │
//! │                                                                         │
//! │  add <catalog-id> ───────► add_from_catalog() ───► AddDevice            │
//! │                                                                         │
//! │  remove <id> ────────────► dispatch() ───────────► RemoveDevice         │
//! │                                                                         │
//! │  plan / profile ─────────► dispatch() ───────────► ChangePlan           │
//! │                                                                         │
//! │  show ───────────────────► snapshot() ───────────► (read only)          │
//! │                                                                         │
//! │  NOTE: the lock is held only while one reducer call runs, so intents    │
//! │        apply one at a time, in dispatch order.                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::Mutex;

use tracing::debug;
use watt_core::{
    reduce, Appliance, CatalogAppliance, EnergyAction, EnergyState, IdGenerator, PlanType,
    UuidIdGenerator,
};

/// Owns the current energy state and the appliance id generator.
pub struct EnergyStore {
    state: Mutex<EnergyState>,
    ids: Mutex<Box<dyn IdGenerator + Send>>,
}

impl EnergyStore {
    /// Creates an empty store on `plan` minting UUID-suffixed ids.
    pub fn new(plan: PlanType) -> Self {
        Self::with_id_generator(plan, Box::new(UuidIdGenerator))
    }

    /// Creates an empty store with a caller-supplied id generator.
    pub fn with_id_generator(plan: PlanType, ids: Box<dyn IdGenerator + Send>) -> Self {
        EnergyStore {
            state: Mutex::new(EnergyState::new(plan)),
            ids: Mutex::new(ids),
        }
    }

    /// Applies one intent and returns the resulting state.
    pub fn dispatch(&self, action: EnergyAction) -> EnergyState {
        let mut state = self.state.lock().expect("Energy state mutex poisoned");
        debug!(?action, "dispatch");
        let next = reduce(&state, action);
        *state = next.clone();
        next
    }

    /// Mints an appliance for `entry` and adds it.
    ///
    /// Returns the added appliance and the resulting state.
    pub fn add_from_catalog(&self, entry: &CatalogAppliance) -> (Appliance, EnergyState) {
        let appliance = {
            let mut ids = self.ids.lock().expect("Id generator mutex poisoned");
            Appliance::from_catalog(entry, &mut **ids)
        };
        let state = self.dispatch(EnergyAction::AddDevice(appliance.clone()));
        (appliance, state)
    }

    /// Executes a function with read access to the current state.
    pub fn with_state<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&EnergyState) -> R,
    {
        let state = self.state.lock().expect("Energy state mutex poisoned");
        f(&state)
    }

    /// Returns a copy of the current state.
    pub fn snapshot(&self) -> EnergyState {
        self.with_state(EnergyState::clone)
    }
}

impl Default for EnergyStore {
    fn default() -> Self {
        Self::new(PlanType::default())
    }
}

impl std::fmt::Debug for EnergyStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EnergyStore")
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use watt_core::SequentialIdGenerator;

    fn store() -> EnergyStore {
        EnergyStore::with_id_generator(PlanType::Standard, Box::new(SequentialIdGenerator::new()))
    }

    fn fridge() -> CatalogAppliance {
        CatalogAppliance {
            id: "fridge".to_string(),
            name: "Fridge".to_string(),
            kwh: 2.4,
        }
    }

    #[test]
    fn test_add_same_entry_twice_mints_distinct_ids() {
        let store = store();

        let (first, _) = store.add_from_catalog(&fridge());
        let (second, state) = store.add_from_catalog(&fridge());

        assert_eq!(first.id, "fridge-1");
        assert_eq!(second.id, "fridge-2");
        assert_eq!(state.appliance_count(), 2);
    }

    #[test]
    fn test_dispatch_replaces_state() {
        let store = store();
        let before = store.snapshot();

        let after = store.dispatch(EnergyAction::ChangePlan(PlanType::Green));

        assert_eq!(before.plan, PlanType::Standard);
        assert_eq!(after.plan, PlanType::Green);
        assert_eq!(store.snapshot(), after);
    }

    #[test]
    fn test_snapshot_is_detached_from_store() {
        let store = store();
        let (appliance, _) = store.add_from_catalog(&fridge());
        let held = store.snapshot();

        store.dispatch(EnergyAction::RemoveDevice(appliance.id.clone()));

        assert_eq!(held.appliance_count(), 1);
        assert!(store.with_state(|s| s.is_empty()));
    }

    #[test]
    fn test_default_store_uses_uuid_ids() {
        let store = EnergyStore::default();
        let (appliance, _) = store.add_from_catalog(&fridge());
        assert!(appliance.id.starts_with("fridge-"));
        assert!(appliance.id.len() > "fridge-".len() + 30);
    }
}
