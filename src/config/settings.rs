//! User settings for budget-ledger
//!
//! Settings control what the `budget` binary prints and how the script
//! runner treats declined operations. They are read from a JSON file; every
//! field is optional and falls back to its default.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::LedgerError;

/// Environment variable naming the settings file
pub const CONFIG_ENV_VAR: &str = "BUDGET_LEDGER_CONFIG";

/// Log filter used when neither the settings nor the environment set one
pub const DEFAULT_LOG_FILTER: &str = "budget_ledger=warn";

/// User settings for budget-ledger
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Print each category's ledger report
    #[serde(default = "default_true")]
    pub show_ledgers: bool,

    /// Print the spend chart
    #[serde(default = "default_true")]
    pub show_chart: bool,

    /// Stop a script at the first declined withdrawal or transfer
    #[serde(default)]
    pub strict: bool,

    /// `tracing` filter directive, overridden by `BUDGET_LEDGER_LOG`
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_true() -> bool {
    true
}

fn default_log_filter() -> String {
    DEFAULT_LOG_FILTER.to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            show_ledgers: true,
            show_chart: true,
            strict: false,
            log_filter: default_log_filter(),
        }
    }
}

impl Settings {
    /// Load settings from `path`, or defaults when no file is given or it
    /// does not exist
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, LedgerError> {
        let Some(path) = path else {
            return Ok(Settings::default());
        };

        if !path.exists() {
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(path)
            .map_err(|e| LedgerError::Io(format!("Failed to read settings file: {}", e)))?;

        let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
            LedgerError::Config(format!("Failed to parse settings file: {}", e))
        })?;

        Ok(settings)
    }
}
