//! Core data models for budget-ledger
//!
//! Categories own their ledgers; amounts are carried as [`Money`].

pub mod category;
pub mod money;

pub use category::{Category, LedgerEntry};
pub use money::{Money, MoneyParseError};
