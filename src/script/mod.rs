//! Ledger scripts
//!
//! A script names the categories to open and lists the operations to replay
//! against them, in order. Scripts are read from JSON or YAML files:
//!
//! ```yaml
//! categories: [Food, Clothing]
//! operations:
//!   - op: deposit
//!     category: Food
//!     amount: 900
//!     description: deposit
//!   - op: withdraw
//!     category: Food
//!     amount: "45.67"
//!     description: milk, cereal, eggs, bread
//!   - op: transfer
//!     from: Food
//!     to: Clothing
//!     amount: 50
//! ```

mod operation;

pub use operation::Operation;

use serde::Deserialize;
use std::path::Path;

use crate::error::{LedgerError, LedgerResult};

/// Built-in sample used by `budget demo`
pub const DEMO_SCRIPT: &str = r#"
categories: [Food, Clothing, Auto]
operations:
  - op: deposit
    category: Food
    amount: 1000
    description: initial deposit
  - op: withdraw
    category: Food
    amount: 10.15
    description: groceries
  - op: withdraw
    category: Food
    amount: 15.89
    description: restaurant and more food for dessert
  - op: transfer
    from: Food
    to: Clothing
    amount: 50
  - op: withdraw
    category: Clothing
    amount: 25.55
  - op: withdraw
    category: Clothing
    amount: 100
    description: new coat
  - op: deposit
    category: Auto
    amount: 1000
    description: initial deposit
  - op: withdraw
    category: Auto
    amount: 15
"#;

/// Categories plus the operations to apply to them
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Script {
    /// Category names, in report and chart order
    pub categories: Vec<String>,

    #[serde(default)]
    pub operations: Vec<Operation>,
}

impl Script {
    /// Load a script, choosing the parser from the file extension
    pub fn load(path: &Path) -> LedgerResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            LedgerError::Io(format!("Failed to read script {}: {}", path.display(), e))
        })?;

        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        match extension.as_deref() {
            Some("json") => Self::from_json_str(&contents),
            Some("yaml") | Some("yml") => Self::from_yaml_str(&contents),
            _ => Err(LedgerError::Script(format!(
                "Unsupported script file {} (expected .json, .yaml or .yml)",
                path.display()
            ))),
        }
    }

    pub fn from_json_str(contents: &str) -> LedgerResult<Self> {
        Ok(serde_json::from_str(contents)?)
    }

    pub fn from_yaml_str(contents: &str) -> LedgerResult<Self> {
        Ok(serde_yaml::from_str(contents)?)
    }

    /// The built-in sample script
    pub fn demo() -> LedgerResult<Self> {
        Self::from_yaml_str(DEMO_SCRIPT)
    }
}
