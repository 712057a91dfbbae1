use crate::base;

/// Store-assigned identifier of an expense. Ids start at 1.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    derive_more::Display,
    derive_more::From,
    derive_more::FromStr,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(transparent)]
pub struct ExpenseId(pub u64);

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Expense {
    category: base::Category,
    amount: base::Cents,
    date: base::Date,
    #[serde(default)]
    description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidExpense {
    #[error("amount must be positive, got {0}")]
    NonPositiveAmount(base::Cents),
}

impl Expense {
    /// Builds a validated expense. Category and date are valid by
    /// construction; the amount must be strictly positive.
    pub fn new(
        category: base::Category,
        amount: base::Cents,
        date: base::Date,
        description: impl Into<String>,
    ) -> Result<Self, InvalidExpense> {
        if !amount.is_positive() {
            return Err(InvalidExpense::NonPositiveAmount(amount));
        }
        Ok(Self {
            category,
            amount,
            date,
            description: description.into().trim().to_string(),
        })
    }

    pub fn category(&self) -> &base::Category {
        &self.category
    }

    pub fn amount(&self) -> base::Cents {
        self.amount
    }

    pub fn date(&self) -> base::Date {
        self.date
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

impl std::fmt::Display for Expense {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = serde_json::to_string(self).map_err(|_| std::fmt::Error)?;
        f.write_str(&s)
    }
}

impl std::str::FromStr for Expense {
    type Err = serde_json::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        serde_json::from_str(s)
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(
        r#"{"category":"Food","amount":45.5,"date":"2026-02-05","description":"lunch"}"#,
        Expense {
            category: "Food".parse().unwrap(),
            amount: base::Cents(4550),
            date: "2026-02-05".parse().unwrap(),
            description: "lunch".to_string(),
        },
    )]
    #[case(
        r#"{"category":"Transport","amount":15.0,"date":"2026-02-04","description":""}"#,
        Expense {
            category: "Transport".parse().unwrap(),
            amount: base::Cents(1500),
            date: "2026-02-04".parse().unwrap(),
            description: String::new(),
        },
    )]
    fn test_serde(#[case] s: &str, #[case] expense: Expense) {
        assert_eq!(s.parse::<Expense>().unwrap(), expense);
        assert_eq!(expense.to_string(), s);
    }

    #[test]
    fn test_description_defaults_to_empty() {
        let expense = r#"{"category":"food","amount":10,"date":"2026-02-10"}"#
            .parse::<Expense>()
            .unwrap();
        assert_eq!(expense.description(), "");
        assert_eq!(expense.category().as_str(), "Food");
    }

    #[rstest]
    #[case(r#"{"category":"","amount":1,"date":"2026-02-10"}"#)]
    #[case(r#"{"category":"Food","amount":"1","date":"2026-02-10"}"#)]
    #[case(r#"{"category":"Food","amount":1,"date":"2026-02-30"}"#)]
    #[case(r#"{"category":"Food","amount":1,"date":"d"}"#)]
    #[case(r#"{"category":"Food","amount":1}"#)]
    #[case(r#"{"category":"Food","amount":1,"date":"2026-02-10","extra":0}"#)]
    fn test_deserialize_failing(#[case] s: &str) {
        assert!(s.parse::<Expense>().is_err())
    }

    #[rstest]
    #[case(base::Cents(0))]
    #[case(base::Cents(-1))]
    fn test_new_rejects_non_positive(#[case] amount: base::Cents) {
        let got = Expense::new(
            "Food".parse().unwrap(),
            amount,
            base::Date::today(),
            "",
        );
        assert_eq!(got, Err(InvalidExpense::NonPositiveAmount(amount)));
    }

    #[test]
    fn test_new() {
        let expense = Expense::new(
            "food".parse().unwrap(),
            base::Cents(1000),
            base::Date::today(),
            "  groceries ",
        )
        .unwrap();
        assert_eq!(expense.category().as_str(), "Food");
        assert_eq!(expense.amount(), base::Cents(1000));
        assert_eq!(expense.date(), base::Date::today());
        assert_eq!(expense.description(), "groceries");
    }
}
