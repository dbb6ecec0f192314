//! Display formatting for terminal output
//!
//! Fixed-width text helpers and the category ledger report.

pub mod category;
pub mod text;

pub use category::{format_category_report, format_ledger_line};
