//! # Configuration State
//!
//! Settings read once at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Command-line flags (`--catalog`, `--plan`, `--submit-delay-ms`)
//! 2. Environment variables (`WATT_*`)
//! 3. Defaults (this file)

use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;
use std::time::Duration;
use watt_core::PlanType;

/// Default catalog location, relative to the working directory.
pub const DEFAULT_CATALOG_PATH: &str = "demos/appliances.json";

/// Default simulated latency of a profile submit.
pub const DEFAULT_SUBMIT_DELAY_MS: u64 = 1000;

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
    /// Catalog JSON file
    pub catalog_path: PathBuf,

    /// Plan the session starts on
    pub initial_plan: PlanType,

    /// Simulated latency of a profile submit, in milliseconds
    pub submit_delay_ms: u64,

    /// Currency symbol (for display)
    pub currency_symbol: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            catalog_path: PathBuf::from(DEFAULT_CATALOG_PATH),
            initial_plan: PlanType::Standard,
            submit_delay_ms: DEFAULT_SUBMIT_DELAY_MS,
            currency_symbol: "$".to_string(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from environment variables over defaults.
    ///
    /// ## Environment Variables
    /// - `WATT_CATALOG_PATH`: catalog file
    /// - `WATT_PLAN`: starting plan (`standard` | `green`)
    /// - `WATT_SUBMIT_DELAY_MS`: profile submit latency
    /// - `WATT_CURRENCY_SYMBOL`: symbol placed before amounts
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`AppConfig::from_env`], reading variables through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = AppConfig::default();

        if let Some(path) = lookup("WATT_CATALOG_PATH") {
            config.catalog_path = PathBuf::from(path);
        }

        if let Some(plan) = lookup("WATT_PLAN") {
            config.initial_plan = plan
                .parse()
                .map_err(|_| ConfigError::InvalidValue("WATT_PLAN".to_string()))?;
        }

        if let Some(delay) = lookup("WATT_SUBMIT_DELAY_MS") {
            config.submit_delay_ms = delay
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidValue("WATT_SUBMIT_DELAY_MS".to_string()))?;
        }

        if let Some(symbol) = lookup("WATT_CURRENCY_SYMBOL") {
            config.currency_symbol = symbol;
        }

        Ok(config)
    }

    pub fn submit_delay(&self) -> Duration {
        Duration::from_millis(self.submit_delay_ms)
    }

    /// Formats a cent amount as a currency string.
    ///
    /// ## Example
    /// ```rust
    /// use watt_cli::state::AppConfig;
    ///
    /// let config = AppConfig::default();
    /// assert_eq!(config.format_currency(1800), "$18.00");
    /// ```
    pub fn format_currency(&self, cents: i64) -> String {
        let whole = cents / 100;
        let frac = (cents % 100).abs();

        format!(
            "{}{}{}.{:02}",
            if cents < 0 { "-" } else { "" },
            self.currency_symbol,
            whole.abs(),
            frac
        )
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}
