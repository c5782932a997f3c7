//! # Error Types
//!
//! Domain-specific error types for watt-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  watt-core errors (this file)                                          │
//! │  ├── CoreError        - Catalog and lookup failures                    │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  watt-cli errors (in app)                                              │
//! │  └── ApiError         - What the session prints (serializable)         │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError → Session output         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The reducer and the bill calculator never fail; only catalog handling and
//! profile validation produce errors.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// No catalog entry has the requested id.
    ///
    /// ## When This Occurs
    /// - User asks to add an appliance the catalog does not list
    /// - Catalog failed to load and is empty
    #[error("Catalog appliance not found: {0}")]
    CatalogEntryNotFound(String),

    /// The catalog document is not a JSON array of appliances.
    #[error("Invalid appliance catalog: {0}")]
    InvalidCatalog(String),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl From<serde_json::Error> for CoreError {
    fn from(err: serde_json::Error) -> Self {
        CoreError::InvalidCatalog(err.to_string())
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Raised before any state change so a rejected profile leaves the plan
/// untouched.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is outside the accepted range.
    #[error("{field} must be {reason}")]
    OutOfRange { field: String, reason: String },

    /// Invalid format (e.g., malformed email, postcode not 4 digits).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Value is not in allowed set.
    #[error("{field} must be one of: {allowed:?}")]
    NotAllowed { field: String, allowed: Vec<String> },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
