//! budget-ledger - category ledgers and spend charts
//!
//! Tracks deposits, withdrawals and transfers inside named spending
//! categories, prints each category's ledger, and draws an ASCII bar chart of
//! how total spending splits across categories.
//!
//! # Architecture
//!
//! - `models`: `Money` and `Category` with its ledger
//! - `display`: fixed-width category reports
//! - `reports`: the spend chart
//! - `script`: JSON/YAML scripts of category operations
//! - `services`: the name-addressed `Book` and the script runner
//! - `config`, `logging`, `error`, `cli`: the `budget` binary's plumbing
//!
//! # Example
//!
//! ```
//! use budget_ledger::models::{Category, Money};
//! use budget_ledger::reports::create_spend_chart;
//!
//! let mut food = Category::new("Food");
//! let mut auto = Category::new("Auto");
//! food.deposit(Money::from_cents(90000), "deposit");
//! assert!(food.withdraw(Money::from_cents(4567), "milk, cereal, eggs, bread"));
//! assert!(food.transfer(Money::from_cents(2000), &mut auto));
//! assert!(!auto.withdraw(Money::from_cents(2001), "too much"));
//!
//! assert_eq!(food.balance(), Money::from_cents(83433));
//! assert!(create_spend_chart(&[food, auto]).starts_with("Percentage spent by category\n"));
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod logging;
pub mod models;
pub mod reports;
pub mod script;
pub mod services;

pub use error::{LedgerError, LedgerResult};
pub use models::{Category, LedgerEntry, Money};
pub use reports::create_spend_chart;
