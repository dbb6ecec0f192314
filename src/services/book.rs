//! Category book
//!
//! An ordered set of uniquely named categories, addressed by name. Order is
//! the order categories were added and is the order reports and the spend
//! chart use.

use serde::Serialize;
use tracing::debug;

use crate::error::{LedgerError, LedgerResult};
use crate::models::{Category, Money};
use crate::reports::SpendChart;
use crate::script::Operation;

/// What happened to a withdrawal, transfer or deposit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    /// The ledger(s) changed
    Applied,
    /// Insufficient funds; nothing changed
    Declined,
}

impl Outcome {
    fn from_applied(applied: bool) -> Self {
        if applied {
            Self::Applied
        } else {
            Self::Declined
        }
    }

    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied)
    }
}

/// Ordered collection of categories with unique names
#[derive(Debug, Clone, Default)]
pub struct Book {
    categories: Vec<Category>,
}

impl Book {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open one category per name, in order
    pub fn with_categories<I, S>(names: I) -> LedgerResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut book = Self::new();
        for name in names {
            book.add_category(name)?;
        }
        Ok(book)
    }

    /// Open a new, empty category
    pub fn add_category(&mut self, name: impl Into<String>) -> LedgerResult<&mut Category> {
        let name = name.into();
        if self.get(&name).is_some() {
            return Err(LedgerError::duplicate_category(name));
        }

        debug!(category = %name, "category opened");
        self.categories.push(Category::new(name));
        let index = self.categories.len() - 1;
        Ok(&mut self.categories[index])
    }

    pub fn get(&self, name: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.name() == name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Category> {
        self.categories.iter_mut().find(|c| c.name() == name)
    }

    /// Categories in insertion order
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn into_categories(self) -> Vec<Category> {
        self.categories
    }

    pub fn deposit(
        &mut self,
        name: &str,
        amount: Money,
        description: impl Into<String>,
    ) -> LedgerResult<Outcome> {
        let category = self.require_mut(name)?;
        if !category.deposit(amount, description) {
            return Err(overflow(name, amount));
        }
        Ok(Outcome::Applied)
    }

    pub fn withdraw(
        &mut self,
        name: &str,
        amount: Money,
        description: impl Into<String>,
    ) -> LedgerResult<Outcome> {
        let category = self.require_mut(name)?;
        if !category.check_funds(amount) {
            return Ok(Outcome::Declined);
        }

        let fits = amount.checked_neg().is_some_and(|outflow| category.can_record(outflow));
        if !fits {
            return Err(overflow(name, amount));
        }
        Ok(Outcome::from_applied(category.withdraw(amount, description)))
    }

    /// Transfer between two distinct categories
    pub fn transfer(&mut self, from: &str, to: &str, amount: Money) -> LedgerResult<Outcome> {
        let source_index = self.position(from)?;
        let target_index = self.position(to)?;

        if source_index == target_index {
            return Err(LedgerError::Validation(format!(
                "Cannot transfer category '{}' to itself",
                from
            )));
        }

        let (source, target) = if source_index < target_index {
            let (head, tail) = self.categories.split_at_mut(target_index);
            (&mut head[source_index], &mut tail[0])
        } else {
            let (head, tail) = self.categories.split_at_mut(source_index);
            (&mut tail[0], &mut head[target_index])
        };

        if source.check_funds(amount) && !source.transfer_fits(amount, target) {
            return Err(LedgerError::Validation(format!(
                "Transfer of {} from '{}' to '{}' would overflow",
                amount, from, to
            )));
        }

        Ok(Outcome::from_applied(source.transfer(amount, target)))
    }

    /// Apply a script operation
    pub fn apply(&mut self, operation: &Operation) -> LedgerResult<Outcome> {
        match operation {
            Operation::Deposit {
                category,
                amount,
                description,
            } => self.deposit(category, *amount, description.as_str()),
            Operation::Withdraw {
                category,
                amount,
                description,
            } => self.withdraw(category, *amount, description.as_str()),
            Operation::Transfer { from, to, amount } => self.transfer(from, to, *amount),
        }
    }

    /// Spending shares across the book, in book order
    pub fn spend_chart(&self) -> SpendChart {
        SpendChart::generate(&self.categories)
    }

    fn position(&self, name: &str) -> LedgerResult<usize> {
        self.categories
            .iter()
            .position(|c| c.name() == name)
            .ok_or_else(|| LedgerError::category_not_found(name))
    }

    fn require_mut(&mut self, name: &str) -> LedgerResult<&mut Category> {
        let index = self.position(name)?;
        Ok(&mut self.categories[index])
    }
}

fn overflow(name: &str, amount: Money) -> LedgerError {
    LedgerError::Validation(format!(
        "Recording {} in category '{}' would overflow its ledger",
        amount, name
    ))
}
