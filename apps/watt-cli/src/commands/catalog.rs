//! # Catalog Commands
//!
//! The one-time catalog load and the listing shown to the user.
//!
//! ## Load Outcomes
//! ```text
//! read file ──► parse JSON ──► CatalogState::ready(catalog)
//!     │              │
//!     └──── error ───┴──────► CatalogState::failed(reason)   (empty, logged)
//! ```
//! A failed load is never retried and never stops the session.

use serde::Serialize;
use std::path::Path;
use tracing::{debug, info, warn};
use watt_core::{Catalog, CatalogAppliance};

use crate::state::{CatalogState, CatalogStatus};

/// Catalog entries with the load status.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogResponse {
    pub status: CatalogStatus,
    pub entries: Vec<CatalogAppliance>,
}

/// Reads and parses the catalog file.
pub async fn load_catalog(path: &Path) -> CatalogState {
    debug!(path = %path.display(), "load_catalog command");

    let json = match tokio::fs::read_to_string(path).await {
        Ok(json) => json,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Failed to read appliance catalog");
            return CatalogState::failed(e.to_string());
        }
    };

    match Catalog::from_json(&json) {
        Ok(catalog) => {
            info!(count = catalog.len(), "Appliance catalog loaded");
            CatalogState::ready(catalog)
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Failed to parse appliance catalog");
            CatalogState::failed(e.to_string())
        }
    }
}

/// Lists what can be added.
pub fn list_catalog(catalog: &CatalogState) -> CatalogResponse {
    debug!("list_catalog command");
    CatalogResponse {
        status: catalog.status().clone(),
        entries: catalog.catalog().entries().to_vec(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn temp_file(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("watt-cli-{}-{}", std::process::id(), name));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[tokio::test]
    async fn test_load_ready() {
        let path = temp_file(
            "ready.json",
            r#"[{"id":"tv","name":"Television","kwh":0.2}]"#,
        );

        let state = load_catalog(&path).await;

        assert_eq!(state.status(), &CatalogStatus::Ready { count: 1 });
        assert_eq!(list_catalog(&state).entries[0].name, "Television");
        std::fs::remove_file(path).ok();
    }

    #[tokio::test]
    async fn test_missing_file_is_empty_catalog() {
        let state = load_catalog(Path::new("/definitely/not/here/appliances.json")).await;

        assert!(!state.is_available());
        assert!(list_catalog(&state).entries.is_empty());
    }

    #[tokio::test]
    async fn test_bad_json_is_empty_catalog() {
        let path = temp_file("bad.json", "<html>404</html>");

        let state = load_catalog(&path).await;

        assert!(matches!(state.status(), CatalogStatus::Failed { .. }));
        assert!(state.catalog().is_empty());
        std::fs::remove_file(path).ok();
    }
}
