//! # API Error Type
//!
//! Unified error type for session commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  ValidationError ──┐                                                    │
//! │                    ├──► ApiError { code, message } ──► printed line     │
//! │  CoreError ────────┘                                   "error: ..."     │
//! │                                                                         │
//! │  Reducer / billing: never fail, never reach this type                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! `ApiError` is serializable so `--json` output and any future web front
//! end see the same `{ "code": ..., "message": ... }` shape.

use serde::Serialize;
use watt_core::{CoreError, ValidationError};

/// Error returned from a session command.
///
/// ```json
/// {
///   "code": "NOT_FOUND",
///   "message": "Catalog appliance not found: kettle"
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for command responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Referenced appliance does not exist
    NotFound,

    /// Input validation failed
    ValidationError,

    /// Catalog failed to load; nothing can be added
    CatalogUnavailable,

    /// Internal error
    Internal,
}

impl ApiError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    pub fn not_found(resource: &str, id: &str) -> Self {
        ApiError::new(ErrorCode::NotFound, format!("{} not found: {}", resource, id))
    }

    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    pub fn catalog_unavailable() -> Self {
        ApiError::new(
            ErrorCode::CatalogUnavailable,
            "Appliance catalog is unavailable; no appliances can be added",
        )
    }

    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::CatalogEntryNotFound(id) => ApiError::not_found("Catalog appliance", &id),
            CoreError::InvalidCatalog(reason) => {
                tracing::error!("Invalid catalog reached a command: {}", reason);
                ApiError::catalog_unavailable()
            }
            CoreError::Validation(e) => e.into(),
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::validation(err.to_string())
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}
