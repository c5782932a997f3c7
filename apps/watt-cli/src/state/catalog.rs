//! # Catalog State
//!
//! The appliance catalog as loaded at startup, plus how the load went.
//! Read-only once built, so no mutex.

use serde::Serialize;
use watt_core::{Catalog, CatalogAppliance};

use crate::error::ApiError;

/// Outcome of the one-time catalog load.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum CatalogStatus {
    /// Loaded; `count` entries selectable.
    Ready { count: usize },
    /// Load failed; the catalog is empty.
    Failed { reason: String },
}

#[derive(Debug, Clone)]
pub struct CatalogState {
    catalog: Catalog,
    status: CatalogStatus,
}

impl CatalogState {
    pub fn ready(catalog: Catalog) -> Self {
        CatalogState {
            status: CatalogStatus::Ready {
                count: catalog.len(),
            },
            catalog,
        }
    }

    /// An empty catalog remembering why the load failed.
    pub fn failed(reason: impl Into<String>) -> Self {
        CatalogState {
            catalog: Catalog::empty(),
            status: CatalogStatus::Failed {
                reason: reason.into(),
            },
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn status(&self) -> &CatalogStatus {
        &self.status
    }

    pub fn is_available(&self) -> bool {
        matches!(self.status, CatalogStatus::Ready { .. })
    }

    /// Resolves a catalog id for an add.
    ///
    /// A failed load answers `CATALOG_UNAVAILABLE` rather than `NOT_FOUND`.
    pub fn resolve(&self, catalog_id: &str) -> Result<&CatalogAppliance, ApiError> {
        if !self.is_available() {
            return Err(ApiError::catalog_unavailable());
        }
        Ok(self.catalog.require(catalog_id)?)
    }
}
