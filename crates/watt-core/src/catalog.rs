//! # Appliance Catalog
//!
//! The read-only list of appliances a user can add. Loaded once by the
//! presentation layer; this module only parses and looks up, it never reads
//! files.
//!
//! ## Document Shape
//! ```json
//! [
//!   { "id": "fridge", "name": "Fridge", "kwh": 2.4 },
//!   { "id": "tv",     "name": "Television", "kwh": 0.2 }
//! ]
//! ```
//!
//! Malformed JSON fails the whole parse. A well-formed entry with a bad id or
//! a negative/non-finite `kwh` is skipped with a warning so one bad row does
//! not hide the rest of the catalog.

use serde::Serialize;
use tracing::warn;

use crate::error::{CoreError, CoreResult};
use crate::types::CatalogAppliance;
use crate::validation::{validate_appliance_id, validate_kwh};

/// Ordered, read-only appliance catalog.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Catalog {
    entries: Vec<CatalogAppliance>,
}

impl Catalog {
    /// An empty catalog: nothing can be added.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds a catalog from entries, dropping invalid ones.
    ///
    /// When two entries share an id, the first wins.
    pub fn new(entries: Vec<CatalogAppliance>) -> Self {
        let mut kept: Vec<CatalogAppliance> = Vec::with_capacity(entries.len());

        for entry in entries {
            if let Err(e) = validate_appliance_id(&entry.id).and_then(|_| validate_kwh(entry.kwh)) {
                warn!(id = %entry.id, error = %e, "Skipping invalid catalog entry");
                continue;
            }
            if kept.iter().any(|k| k.id == entry.id) {
                warn!(id = %entry.id, "Skipping duplicate catalog entry");
                continue;
            }
            kept.push(entry);
        }

        Catalog { entries: kept }
    }

    /// Parses a catalog document.
    pub fn from_json(json: &str) -> CoreResult<Self> {
        let entries: Vec<CatalogAppliance> = serde_json::from_str(json)?;
        Ok(Catalog::new(entries))
    }

    /// Looks up an entry by catalog id.
    pub fn get(&self, id: &str) -> Option<&CatalogAppliance> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Like [`Catalog::get`], but a miss is an error.
    pub fn require(&self, id: &str) -> CoreResult<&CatalogAppliance> {
        self.get(id)
            .ok_or_else(|| CoreError::CatalogEntryNotFound(id.to_string()))
    }

    pub fn entries(&self) -> &[CatalogAppliance] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
