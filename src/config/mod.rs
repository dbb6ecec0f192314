//! Configuration module for budget-ledger
//!
//! Report and runner preferences, loaded from an optional JSON settings file.

pub mod settings;

pub use settings::{Settings, CONFIG_ENV_VAR, DEFAULT_LOG_FILTER};
