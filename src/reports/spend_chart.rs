//! Spend chart
//!
//! Computes each category's share of total spending and renders it as a
//! vertical ASCII bar chart with the category names written downwards under
//! the bars.

use serde::Serialize;

use crate::display::text::right_align;
use crate::models::{Category, Money};

/// First line of every chart
pub const CHART_TITLE: &str = "Percentage spent by category\n";

/// Left margin in front of the name rows
const NAME_MARGIN: &str = "     ";

/// One category's slice of the spending
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryShare {
    /// Category name
    pub name: String,
    /// Total outflows (zero or negative)
    pub spending: Money,
    /// Whole percent of total spending, 0-100
    pub percentage: u8,
}

/// Spending shares for an ordered set of categories
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpendChart {
    /// Shares in input order
    pub shares: Vec<CategoryShare>,
}

impl SpendChart {
    /// Compute the shares for `categories`, keeping their order
    ///
    /// When nothing has been spent every category is charted at 0%.
    pub fn generate<'a, I>(categories: I) -> Self
    where
        I: IntoIterator<Item = &'a Category>,
    {
        let spending: Vec<(String, Money)> = categories
            .into_iter()
            .map(|category| (category.name().to_string(), category.spending()))
            .collect();

        // Each category total fits in i64, their sum may not
        let total: u128 = spending
            .iter()
            .map(|(_, amount)| u128::from(amount.cents().unsigned_abs()))
            .sum();

        let shares = spending
            .into_iter()
            .map(|(name, amount)| CategoryShare {
                percentage: share_percentage(amount.cents().unsigned_abs(), total),
                name,
                spending: amount,
            })
            .collect();

        Self { shares }
    }

    /// Render the chart
    ///
    /// With no categories the chart ends at the separator line.
    pub fn render(&self) -> String {
        let mut output = String::from(CHART_TITLE);

        for level in (0..=100u8).rev().step_by(10) {
            output.push_str(&right_align(&level.to_string(), 3));
            output.push_str("| ");
            for share in &self.shares {
                output.push_str(if share.percentage >= level { "o  " } else { "   " });
            }
            output.push('\n');
        }

        output.push_str("    ");
        output.push_str(&"---".repeat(self.shares.len()));
        output.push('-');

        if self.shares.is_empty() {
            return output;
        }

        output.push('\n');
        output.push_str(NAME_MARGIN);

        let names: Vec<Vec<char>> = self
            .shares
            .iter()
            .map(|share| share.name.chars().collect())
            .collect();
        let max_len = names.iter().map(Vec::len).max().unwrap_or(0);

        for pos in 0..max_len {
            for name in &names {
                match name.get(pos) {
                    Some(c) => {
                        output.push(*c);
                        output.push_str("  ");
                    }
                    None => output.push_str("   "),
                }
            }
            if pos + 1 < max_len {
                output.push('\n');
                output.push_str(NAME_MARGIN);
            }
        }

        output
    }
}

/// Render the spend chart for `categories` in the given order
pub fn create_spend_chart(categories: &[Category]) -> String {
    SpendChart::generate(categories).render()
}

/// `part / total` as a whole percent
///
/// The ratio is taken in floating point and rounded to two decimal places
/// from its exact binary value, ties to even, before it is scaled to a
/// percent. So 99 of 200 is 49% (0.495 is stored just below the tie) and
/// 101 of 200 is 51%. A zero total yields 0.
fn share_percentage(part: u64, total: u128) -> u8 {
    if total == 0 || part == 0 {
        return 0;
    }

    let ratio = part as f64 / total as f64;
    round_hundredths(ratio).min(100) as u8
}

/// Nearest whole number of hundredths to a finite, non-negative `value`
fn round_hundredths(value: f64) -> u64 {
    const MANTISSA_BITS: u32 = 52;

    let bits = value.to_bits();
    let biased_exponent = ((bits >> MANTISSA_BITS) & 0x7ff) as i32;
    let fraction = bits & ((1 << MANTISSA_BITS) - 1);
    let (mantissa, exponent) = if biased_exponent == 0 {
        (fraction, -1074)
    } else {
        (fraction | (1 << MANTISSA_BITS), biased_exponent - 1075)
    };

    // value * 100 == scaled * 2^exponent, exactly
    let scaled = u128::from(mantissa) * 100;
    if exponent >= 0 {
        return (scaled << exponent) as u64;
    }

    let shift = exponent.unsigned_abs();
    if shift >= 64 + MANTISSA_BITS {
        // scaled < 2^60, so the product is below one half
        return 0;
    }

    let quotient = scaled >> shift;
    let remainder = scaled & ((1u128 << shift) - 1);
    let half = 1u128 << (shift - 1);
    let rounded = if remainder > half || (remainder == half && quotient % 2 == 1) {
        quotient + 1
    } else {
        quotient
    };
    rounded as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn category_with_spending(name: &str, spent_cents: i64) -> Category {
        let mut category = Category::new(name);
        category.deposit(Money::from_cents(1_000_000), "deposit");
        assert!(category.withdraw(Money::from_cents(spent_cents), "spent"));
        category
    }

    #[test]
    fn test_share_percentage_rounding() {
        assert_eq!(share_percentage(1099, 14994), 7);
        assert_eq!(share_percentage(10555, 14994), 70);
        assert_eq!(share_percentage(3340, 14994), 22);
    }

    #[test]
    fn test_share_percentage_ties_to_even() {
        // 1/8 = 0.125 -> 0.12, 3/8 = 0.375 -> 0.38
        assert_eq!(share_percentage(100, 800), 12);
        assert_eq!(share_percentage(300, 800), 38);
    }

    #[test]
    fn test_share_percentage_follows_binary_value() {
        // 0.495 and 0.505 are not exact ties once stored as f64
        assert_eq!(share_percentage(9900, 20000), 49);
        assert_eq!(share_percentage(10100, 20000), 51);
        assert_eq!(share_percentage(1, 1), 100);
    }

    #[test]
    fn test_share_percentage_zero_total() {
        assert_eq!(share_percentage(0, 0), 0);
    }

    #[test]
    fn test_near_even_split_matches_float_rounding() {
        let categories = vec![
            category_with_spending("Food", 9900),
            category_with_spending("Auto", 10100),
        ];

        let chart = SpendChart::generate(&categories);

        let percentages: Vec<u8> = chart.shares.iter().map(|s| s.percentage).collect();
        assert_eq!(percentages, vec![49, 51]);
    }

    #[test]
    fn test_total_beyond_cent_range() {
        let categories: Vec<Category> = ["Food", "Auto"]
            .into_iter()
            .map(|name| {
                let mut category = Category::new(name);
                category.deposit(Money::from_cents(i64::MAX), "deposit");
                assert!(category.withdraw(Money::from_cents(i64::MAX), "everything"));
                category
            })
            .collect();

        let chart = SpendChart::generate(&categories);

        let percentages: Vec<u8> = chart.shares.iter().map(|s| s.percentage).collect();
        assert_eq!(percentages, vec![50, 50]);
    }

    #[test]
    fn test_generate_shares() {
        let categories = vec![
            category_with_spending("Food", 10000),
            category_with_spending("Clothing", 5000),
            category_with_spending("Auto", 5000),
        ];

        let chart = SpendChart::generate(&categories);

        let percentages: Vec<u8> = chart.shares.iter().map(|s| s.percentage).collect();
        assert_eq!(percentages, vec![50, 25, 25]);
        assert_eq!(chart.shares[0].name, "Food");
        assert_eq!(chart.shares[1].spending, Money::from_cents(-5000));
    }

    #[test]
    fn test_bars_follow_percentages() {
        let categories = vec![
            category_with_spending("Food", 10000),
            category_with_spending("Clothing", 5000),
            category_with_spending("Auto", 5000),
        ];

        let chart = create_spend_chart(&categories);
        let lines: Vec<&str> = chart.lines().collect();

        assert_eq!(lines[0], "Percentage spent by category");
        assert_eq!(lines[1], "100|          ");
        assert_eq!(lines[5], " 60|          ");
        assert_eq!(lines[6], " 50| o        ");
        assert_eq!(lines[8], " 30| o        ");
        assert_eq!(lines[9], " 20| o  o  o  ");
        assert_eq!(lines[11], "  0| o  o  o  ");
        assert_eq!(lines[12], "    ----------");
        assert_eq!(lines[13], "     F  C  A  ");
    }

    #[test]
    fn test_full_chart() {
        let categories = vec![
            category_with_spending("Business", 1099),
            category_with_spending("Food", 10555),
            category_with_spending("Entertainment", 3340),
        ];

        let expected = "Percentage spent by category\n\
100|          \n \
90|          \n \
80|          \n \
70|    o     \n \
60|    o     \n \
50|    o     \n \
40|    o     \n \
30|    o     \n \
20|    o  o  \n \
10|    o  o  \n  \
0| o  o  o  \n    \
----------\n     \
B  F  E  \n     \
u  o  n  \n     \
s  o  t  \n     \
i  d  e  \n     \
n     r  \n     \
e     t  \n     \
s     a  \n     \
s     i  \n           \
n  \n           \
m  \n           \
e  \n           \
n  \n           \
t  ";

        assert_eq!(create_spend_chart(&categories), expected);
    }

    #[test]
    fn test_zero_spending_charts_zero_percent() {
        let mut food = Category::new("Food");
        food.deposit(Money::from_cents(5000), "deposit");
        let categories = vec![food, Category::new("Auto")];

        let chart = SpendChart::generate(&categories);
        assert!(chart.shares.iter().all(|s| s.percentage == 0));

        let rendered = chart.render();
        assert!(rendered.contains(" 10|       \n"));
        assert!(rendered.contains("  0| o  o  \n"));
    }

    #[test]
    fn test_empty_chart() {
        let chart = create_spend_chart(&[]);
        assert!(chart.starts_with(CHART_TITLE));
        assert!(chart.ends_with("  0| \n    -"));
        assert_eq!(chart.lines().count(), 13);
    }

    #[test]
    fn test_single_category_gets_full_bar() {
        let categories = vec![category_with_spending("Rent", 120000)];
        let chart = create_spend_chart(&categories);
        assert!(chart.contains("100| o  \n"));
        assert!(chart.ends_with("    ----\n     R  \n     e  \n     n  \n     t  "));
    }
}
