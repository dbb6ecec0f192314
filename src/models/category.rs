//! Category model
//!
//! A category is a named bucket of money with its own ordered ledger. Every
//! deposit, withdrawal and transfer appends a [`LedgerEntry`]; the balance is
//! always derived from the ledger rather than stored.

use serde::Serialize;
use std::fmt;
use tracing::debug;

use super::money::Money;
use crate::display::category::format_category_report;

/// A single ledger line
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LedgerEntry {
    /// Signed amount: positive for money in, negative for money out
    pub amount: Money,

    /// Free-form description, may be empty
    pub description: String,
}

impl LedgerEntry {
    pub fn new(amount: Money, description: impl Into<String>) -> Self {
        Self {
            amount,
            description: description.into(),
        }
    }

    /// Whether this entry took money out of the category
    pub fn is_outflow(&self) -> bool {
        self.amount.is_negative()
    }
}

/// A budget category and its ledger
///
/// Only serializable: a ledger is built through the operations below so the
/// funds check always holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Category {
    name: String,
    ledger: Vec<LedgerEntry>,
}

impl Category {
    /// Create a new, empty category
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ledger: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Ledger entries in insertion order
    pub fn ledger(&self) -> &[LedgerEntry] {
        &self.ledger
    }

    /// Record money coming into the category
    ///
    /// The amount is recorded as given; zero and negative deposits are not
    /// rejected. Returns `false` without touching the ledger only when the
    /// entry would overflow the balance (see [`Category::can_record`]).
    pub fn deposit(&mut self, amount: Money, description: impl Into<String>) -> bool {
        if !self.can_record(amount) {
            debug!(category = %self.name, amount = %amount, "deposit would overflow");
            return false;
        }

        let entry = LedgerEntry::new(amount, description);
        debug!(category = %self.name, amount = %amount, description = %entry.description, "deposit");
        self.ledger.push(entry);
        true
    }

    /// Record money leaving the category
    ///
    /// Returns `false` and leaves the ledger untouched when the balance does
    /// not cover `amount`, or when the entry would overflow.
    pub fn withdraw(&mut self, amount: Money, description: impl Into<String>) -> bool {
        if !self.check_funds(amount) {
            debug!(category = %self.name, amount = %amount, "withdrawal declined");
            return false;
        }

        let Some(outflow) = amount.checked_neg().filter(|m| self.can_record(*m)) else {
            debug!(category = %self.name, amount = %amount, "withdrawal would overflow");
            return false;
        };

        let entry = LedgerEntry::new(outflow, description);
        debug!(category = %self.name, amount = %amount, description = %entry.description, "withdraw");
        self.ledger.push(entry);
        true
    }

    /// Sum of every ledger amount, recomputed on each call
    ///
    /// Every running total was checked by [`Category::can_record`] when its
    /// entry was appended, so the sum cannot overflow.
    pub fn balance(&self) -> Money {
        self.ledger.iter().map(|entry| entry.amount).sum()
    }

    /// Move `amount` into `other`
    ///
    /// Both ledgers change or neither does.
    pub fn transfer(&mut self, amount: Money, other: &mut Category) -> bool {
        if !self.check_funds(amount) {
            debug!(from = %self.name, to = %other.name, amount = %amount, "transfer declined");
            return false;
        }

        if !self.transfer_fits(amount, other) {
            debug!(from = %self.name, to = %other.name, amount = %amount, "transfer would overflow");
            return false;
        }

        let withdrawn = self.withdraw(amount, format!("Transfer to {}", other.name));
        let deposited = other.deposit(amount, format!("Transfer from {}", self.name));
        debug_assert!(withdrawn && deposited);
        true
    }

    /// Whether both sides of a transfer of `amount` can be recorded
    pub fn transfer_fits(&self, amount: Money, other: &Category) -> bool {
        amount
            .checked_neg()
            .is_some_and(|outflow| self.can_record(outflow))
            && other.can_record(amount)
    }

    /// Whether an entry of `amount` keeps the balance and the spending total
    /// within range
    pub fn can_record(&self, amount: Money) -> bool {
        let balance_fits = self.balance().checked_add(amount).is_some();
        let spending_fits = !amount.is_negative() || self.spending().checked_add(amount).is_some();
        balance_fits && spending_fits
    }

    /// Whether the balance covers `amount`; an exact match counts
    pub fn check_funds(&self, amount: Money) -> bool {
        amount <= self.balance()
    }

    /// Total of the outflow entries (zero or negative)
    pub fn spending(&self) -> Money {
        self.ledger
            .iter()
            .filter(|entry| entry.is_outflow())
            .map(|entry| entry.amount)
            .sum()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_category_report(self))
    }
}
