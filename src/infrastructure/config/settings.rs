//! Application configuration loading and validation.
//!
//! Provides the main [`Config`] struct that aggregates all application settings.
//! Configuration is loaded from a TOML file; the ledger location can be
//! overridden with the `PARIMUTUEL_LEDGER` environment variable.
//!
//! # Example
//!
//! ```no_run
//! use parimutuel::infrastructure::config::settings::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("config.toml")?;
//!     config.init_logging();
//!     Ok(())
//! }
//! ```

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::logging::{LoggingConfig, LOG_FORMATS};
use super::payout::PayoutConfig;
use super::roster::RosterConfig;
use crate::application::engine::{PariMutuelEngine, PayoutPolicy};
use crate::error::{ConfigError, Result};

/// Environment variable overriding `[ledger] path`.
pub const LEDGER_PATH_ENV: &str = "PARIMUTUEL_LEDGER";

/// Minimum number of contestants: one per paying position.
const MIN_CONTESTANTS: usize = 3;

/// Event metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventConfig {
    /// Display name of the event.
    #[serde(default = "default_event_name")]
    pub name: String,
}

fn default_event_name() -> String {
    "Untitled Event".to_string()
}

impl Default for EventConfig {
    fn default() -> Self {
        Self {
            name: default_event_name(),
        }
    }
}

/// Ledger storage settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerConfig {
    /// Path to the JSON ledger file.
    #[serde(default = "default_ledger_path")]
    pub path: PathBuf,
}

fn default_ledger_path() -> PathBuf {
    PathBuf::from("ledger.json")
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            path: default_ledger_path(),
        }
    }
}

/// Main application configuration.
///
/// Load from a TOML file using [`Config::load`] or parse directly with
/// [`Config::parse_toml`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Event metadata.
    #[serde(default)]
    pub event: EventConfig,

    /// Bettors and contestants.
    pub roster: RosterConfig,

    /// Payout policy.
    #[serde(default)]
    pub payout: PayoutConfig,

    /// Ledger storage.
    #[serde(default)]
    pub ledger: LedgerConfig,

    /// Logging and tracing configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Parse configuration from TOML content.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML content is malformed or validation fails.
    pub fn parse_toml(content: &str) -> Result<Self> {
        let mut config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;

        if let Ok(path) = std::env::var(LEDGER_PATH_ENV) {
            if !path.trim().is_empty() {
                config.ledger.path = PathBuf::from(path);
            }
        }

        config.validate()?;

        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read
    /// - The TOML content is malformed
    /// - Validation fails
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    /// Initialize logging from the `[logging]` section.
    pub fn init_logging(&self) {
        self.logging.init();
    }

    /// Payout policy from the `[payout]` section.
    #[must_use]
    pub fn payout_policy(&self) -> PayoutPolicy {
        self.payout.clone().into()
    }

    /// Engine configured with this roster and policy.
    #[must_use]
    pub fn engine(&self) -> PariMutuelEngine {
        PariMutuelEngine::new(self.roster.to_roster(), self.payout_policy())
    }

    /// Validate configuration values.
    fn validate(&self) -> Result<()> {
        if self.roster.bettors.is_empty() {
            return Err(ConfigError::MissingField {
                field: "roster.bettors",
            }
            .into());
        }
        check_names("roster.bettors", &self.roster.bettors)?;
        check_names("roster.contestants", self.roster.contestants())?;
        if self.roster.contestants().len() < MIN_CONTESTANTS {
            return Err(ConfigError::InvalidValue {
                field: "roster.contestants",
                reason: format!("need at least {MIN_CONTESTANTS} contestants"),
            }
            .into());
        }

        if self.payout.epsilon < Decimal::ZERO {
            return Err(ConfigError::InvalidValue {
                field: "payout.epsilon",
                reason: "must be 0 or greater".to_string(),
            }
            .into());
        }

        if self.ledger.path.as_os_str().is_empty() {
            return Err(ConfigError::MissingField {
                field: "ledger.path",
            }
            .into());
        }

        if !LOG_FORMATS.contains(&self.logging.format.as_str()) {
            return Err(ConfigError::InvalidValue {
                field: "logging.format",
                reason: format!("expected one of {}", LOG_FORMATS.join(", ")),
            }
            .into());
        }

        Ok(())
    }
}

/// Reject blank and duplicate names.
fn check_names(field: &'static str, names: &[String]) -> Result<()> {
    let mut seen = HashSet::new();
    for name in names {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(ConfigError::InvalidValue {
                field,
                reason: "names cannot be blank".to_string(),
            }
            .into());
        }
        if !seen.insert(trimmed) {
            return Err(ConfigError::InvalidValue {
                field,
                reason: format!("duplicate name '{trimmed}'"),
            }
            .into());
        }
    }
    Ok(())
}
