//! # Validation Module
//!
//! Input validation for profile fields and catalog entries.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Presentation (watt-cli)                                      │
//! │  └── Argument parsing (clap): types, enums, presence                   │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── Profile rules: name, email, postcode                              │
//! │  └── Catalog rules: id, kWh draw                                       │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Reducer                                                      │
//! │  └── Total functions, assumes well-formed input                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use watt_core::validation::{validate_email, validate_postcode};
//!
//! assert!(validate_email("alinta@energy.com.au").is_ok());
//! assert!(validate_postcode("3000").is_ok());
//! assert!(validate_postcode("300").is_err());
//! ```

use crate::error::ValidationError;
use crate::MAX_APPLIANCE_ID_LEN;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Profile Validators
// =============================================================================

/// Validates a first name.
///
/// ## Rules
/// - Must not be empty after trimming
pub fn validate_first_name(name: &str) -> ValidationResult<()> {
    if name.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "first name".to_string(),
        });
    }

    Ok(())
}

/// Validates an email address.
///
/// ## Rules
/// ```text
///   local @ domain . tld
///   │       │        └── 2+ ASCII letters
///   │       └── ASCII letters, digits, '.', '-'
///   └── ASCII letters, digits, '.', '_', '%', '+', '-'
/// ```
/// Case-insensitive. The domain part is split at its LAST dot. The whole
/// input must match, surrounding whitespace included.
pub fn validate_email(email: &str) -> ValidationResult<()> {
    if email.is_empty() {
        return Err(ValidationError::Required {
            field: "email".to_string(),
        });
    }

    let invalid = || ValidationError::InvalidFormat {
        field: "email".to_string(),
        reason: "please enter a valid email".to_string(),
    };

    let (local, domain) = email.split_once('@').ok_or_else(invalid)?;
    let (host, tld) = domain.rsplit_once('.').ok_or_else(invalid)?;

    let local_ok = !local.is_empty()
        && local
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '%' | '+' | '-'));
    let host_ok = !host.is_empty()
        && host
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-'));
    let tld_ok = tld.len() >= 2 && tld.chars().all(|c| c.is_ascii_alphabetic());

    if local_ok && host_ok && tld_ok {
        Ok(())
    } else {
        Err(invalid())
    }
}

/// Validates a postcode.
///
/// ## Rules
/// - Exactly 4 ASCII digits (e.g., "3000"), nothing around them
pub fn validate_postcode(postcode: &str) -> ValidationResult<()> {
    if postcode.is_empty() {
        return Err(ValidationError::Required {
            field: "postcode".to_string(),
        });
    }

    if postcode.len() != 4 || !postcode.chars().all(|c| c.is_ascii_digit()) {
        return Err(ValidationError::InvalidFormat {
            field: "postcode".to_string(),
            reason: "must be 4 digits".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Catalog Validators
// =============================================================================

/// Validates an appliance id.
///
/// ## Rules
/// - Must not be empty
/// - At most `MAX_APPLIANCE_ID_LEN` (100) characters
pub fn validate_appliance_id(id: &str) -> ValidationResult<()> {
    if id.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "appliance id".to_string(),
        });
    }

    if id.chars().count() > MAX_APPLIANCE_ID_LEN {
        return Err(ValidationError::TooLong {
            field: "appliance id".to_string(),
            max: MAX_APPLIANCE_ID_LEN,
        });
    }

    Ok(())
}

/// Validates an energy draw.
///
/// ## Rules
/// - Finite (no NaN or infinity)
/// - Non-negative; zero is allowed (standby-free devices)
pub fn validate_kwh(kwh: f64) -> ValidationResult<()> {
    if !kwh.is_finite() || kwh < 0.0 {
        return Err(ValidationError::OutOfRange {
            field: "kwh".to_string(),
            reason: "a finite, non-negative number".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
