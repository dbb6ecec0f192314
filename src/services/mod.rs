//! Service layer for budget-ledger
//!
//! Name-addressed operations over a set of categories, and the runner that
//! replays scripts against them.

pub mod book;
pub mod runner;

pub use book::{Book, Outcome};
pub use runner::{CategorySummary, RunReport, RunSummary, ScriptRunner};
