//! Script runner
//!
//! Replays a [`Script`] against a fresh [`Book`] and collects the result.

use serde::Serialize;
use tracing::{info, warn};

use super::book::{Book, Outcome};
use crate::error::{LedgerError, LedgerResult};
use crate::models::{Category, LedgerEntry, Money};
use crate::reports::{create_spend_chart, SpendChart};
use crate::script::{Operation, Script};

/// Replays scripts
#[derive(Debug, Clone, Copy, Default)]
pub struct ScriptRunner {
    strict: bool,
}

impl ScriptRunner {
    /// In strict mode the first declined operation aborts the run
    pub fn new(strict: bool) -> Self {
        Self { strict }
    }

    pub fn run(&self, script: &Script) -> LedgerResult<RunReport> {
        let mut book = Book::with_categories(script.categories.iter().cloned())?;
        let mut applied = 0;
        let mut declined = 0;

        for (index, operation) in script.operations.iter().enumerate() {
            match book.apply(operation)? {
                Outcome::Applied => applied += 1,
                Outcome::Declined => {
                    let (category, amount) = debited(operation);
                    let available = book
                        .get(category)
                        .map(Category::balance)
                        .unwrap_or_default();

                    warn!(
                        step = index + 1,
                        op = operation.kind(),
                        category,
                        amount = %amount,
                        available = %available,
                        "operation declined: insufficient funds"
                    );

                    if self.strict {
                        return Err(LedgerError::InsufficientFunds {
                            category: category.to_string(),
                            needed: amount,
                            available,
                        });
                    }
                    declined += 1;
                }
            }
        }

        info!(applied, declined, "script finished");

        Ok(RunReport {
            categories: book.into_categories(),
            applied,
            declined,
        })
    }
}

/// Category and amount an operation takes money from
fn debited(operation: &Operation) -> (&str, Money) {
    match operation {
        Operation::Deposit {
            category, amount, ..
        }
        | Operation::Withdraw {
            category, amount, ..
        } => (category.as_str(), *amount),
        Operation::Transfer { from, amount, .. } => (from.as_str(), *amount),
    }
}

/// Final state of a script run
#[derive(Debug, Clone)]
pub struct RunReport {
    /// Categories in script order
    pub categories: Vec<Category>,
    /// Operations that changed a ledger
    pub applied: usize,
    /// Operations declined for insufficient funds
    pub declined: usize,
}

/// Serializable view of a [`RunReport`]
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary<'a> {
    pub categories: Vec<CategorySummary<'a>>,
    pub chart: SpendChart,
    pub applied: usize,
    pub declined: usize,
}

/// One category in a [`RunSummary`]; amounts are in cents
#[derive(Debug, Clone, Serialize)]
pub struct CategorySummary<'a> {
    pub name: &'a str,
    pub balance: Money,
    pub spending: Money,
    pub entries: &'a [LedgerEntry],
}

impl RunReport {
    pub fn summary(&self) -> RunSummary<'_> {
        RunSummary {
            categories: self
                .categories
                .iter()
                .map(|category| CategorySummary {
                    name: category.name(),
                    balance: category.balance(),
                    spending: category.spending(),
                    entries: category.ledger(),
                })
                .collect(),
            chart: SpendChart::generate(&self.categories),
            applied: self.applied,
            declined: self.declined,
        }
    }

    /// Category reports and/or the chart, separated by blank lines
    pub fn format_terminal(&self, show_ledgers: bool, show_chart: bool) -> String {
        let mut sections: Vec<String> = Vec::new();

        if show_ledgers {
            sections.extend(self.categories.iter().map(Category::to_string));
        }
        if show_chart {
            sections.push(create_spend_chart(&self.categories));
        }

        sections.join("\n\n")
    }
}
