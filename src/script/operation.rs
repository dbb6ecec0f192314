//! Script operations

use serde::de::{self, Deserializer};
use serde::Deserialize;

use crate::models::Money;

/// One step of a script
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "op", rename_all = "lowercase")]
pub enum Operation {
    Deposit {
        category: String,
        #[serde(deserialize_with = "deserialize_amount")]
        amount: Money,
        #[serde(default)]
        description: String,
    },
    Withdraw {
        category: String,
        #[serde(deserialize_with = "deserialize_amount")]
        amount: Money,
        #[serde(default)]
        description: String,
    },
    Transfer {
        from: String,
        to: String,
        #[serde(deserialize_with = "deserialize_amount")]
        amount: Money,
    },
}

impl Operation {
    /// Short name used in log events
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Deposit { .. } => "deposit",
            Self::Withdraw { .. } => "withdraw",
            Self::Transfer { .. } => "transfer",
        }
    }
}

/// Accept whole numbers, decimals and decimal strings as amounts
fn deserialize_amount<'de, D>(deserializer: D) -> Result<Money, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawAmount {
        Whole(i64),
        Decimal(f64),
        Text(String),
    }

    match RawAmount::deserialize(deserializer)? {
        RawAmount::Whole(units) => units
            .checked_mul(100)
            .map(Money::from_cents)
            .ok_or_else(|| de::Error::custom(format!("amount out of range: {}", units))),
        RawAmount::Decimal(value) => Money::from_decimal(value)
            .ok_or_else(|| de::Error::custom(format!("amount out of range: {}", value))),
        RawAmount::Text(text) => Money::parse(&text).map_err(de::Error::custom),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_amount_forms() {
        let ops: Vec<Operation> = serde_yaml::from_str(
            r#"
- { op: deposit, category: Food, amount: 12 }
- { op: deposit, category: Food, amount: 12.5 }
- { op: deposit, category: Food, amount: "-3.07" }
"#,
        )
        .unwrap();

        let amounts: Vec<i64> = ops
            .iter()
            .map(|op| match op {
                Operation::Deposit { amount, .. } => amount.cents(),
                _ => unreachable!(),
            })
            .collect();
        assert_eq!(amounts, vec![1200, 1250, -307]);
    }

    #[test]
    fn test_out_of_range_amounts_rejected() {
        for amount in ["1.0e30", "-1.0e30", "1.0e17", "92233720368547759"] {
            let yaml = format!("{{ op: deposit, category: Food, amount: {} }}", amount);
            let err = serde_yaml::from_str::<Operation>(&yaml).unwrap_err();
            assert!(
                err.to_string().contains("out of range"),
                "{}: {}",
                amount,
                err
            );
        }
    }

    #[test]
    fn test_unknown_op_rejected() {
        let result: Result<Operation, _> =
            serde_json::from_str(r#"{ "op": "refund", "category": "Food", "amount": 1 }"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_kind() {
        let op = Operation::Transfer {
            from: "Food".into(),
            to: "Auto".into(),
            amount: Money::from_cents(100),
        };
        assert_eq!(op.kind(), "transfer");
    }
}
