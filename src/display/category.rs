//! Category report formatting
//!
//! Renders a category as a fixed-width ledger: a starred title line, one line
//! per entry and a closing total.

use super::text::{center, left_justify_truncate};
use crate::models::{Category, LedgerEntry};

/// Width of the title line
pub const TITLE_WIDTH: usize = 30;

/// Width of the description column
pub const DESCRIPTION_WIDTH: usize = 23;

/// Format a full category report, without a trailing newline
pub fn format_category_report(category: &Category) -> String {
    let mut output = center(category.name(), TITLE_WIDTH, '*');
    output.push('\n');

    for entry in category.ledger() {
        output.push_str(&format_ledger_line(entry));
        output.push('\n');
    }

    output.push_str(&format!("Total: {}", category.balance().to_compact_string()));
    output
}

/// Format one ledger line: truncated description, a space, the amount
pub fn format_ledger_line(entry: &LedgerEntry) -> String {
    format!(
        "{} {}",
        left_justify_truncate(&entry.description, DESCRIPTION_WIDTH),
        entry.amount
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;

    #[test]
    fn test_empty_category_report() {
        let auto = Category::new("Auto");
        assert_eq!(
            format_category_report(&auto),
            "*************Auto*************\nTotal: 0"
        );
    }

    #[test]
    fn test_food_report() {
        let mut food = Category::new("Food");
        let mut entertainment = Category::new("Entertainment");
        food.deposit(Money::from_cents(90000), "deposit");
        assert!(food.withdraw(Money::from_cents(4567), "milk, cereal, eggs, bread"));
        assert!(food.transfer(Money::from_cents(2000), &mut entertainment));

        let expected = "*************Food*************\n\
                        deposit                 900.00\n\
                        milk, cereal, eggs, bre -45.67\n\
                        Transfer to Entertainme -20.00\n\
                        Total: 834.33";
        assert_eq!(food.to_string(), expected);
    }

    #[test]
    fn test_ledger_line_single_space_before_amount() {
        let entry = LedgerEntry::new(Money::from_cents(123456), "rent");
        assert_eq!(format_ledger_line(&entry), "rent                    1234.56");

        let entry = LedgerEntry::new(Money::from_cents(-4567), "milk, cereal, eggs, bread");
        assert_eq!(format_ledger_line(&entry), "milk, cereal, eggs, bre -45.67");
    }

    #[test]
    fn test_whole_total() {
        let mut clothing = Category::new("Clothing");
        clothing.deposit(Money::from_cents(100000), "initial deposit");
        assert!(clothing.to_string().ends_with("\nTotal: 1000"));
    }
}
