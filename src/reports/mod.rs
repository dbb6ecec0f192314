//! Reports module for budget-ledger
//!
//! Provides the spending chart across categories.

pub mod spend_chart;

pub use spend_chart::{create_spend_chart, CategoryShare, SpendChart, CHART_TITLE};
