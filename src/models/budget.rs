//! Budget model
//!
//! A budget caps spending in one category for one month. Nothing enforces a
//! single budget per (category, month); duplicates are kept as stored.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::BudgetId;
use super::money::Money;
use super::month::Month;

/// A monthly spending limit for a category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Budget {
    /// Unique identifier
    pub id: BudgetId,

    /// Category name (soft reference into the catalog)
    pub category: String,

    /// Spending limit for the month
    #[serde(default)]
    pub amount: Money,

    /// Target month
    pub month: Month,
}

impl Budget {
    /// Create a budget from its fields, assigning a fresh id
    pub fn new(fields: NewBudget) -> Self {
        Self::with_id(BudgetId::new(), fields)
    }

    /// Create a budget with a known id
    pub fn with_id(id: BudgetId, fields: NewBudget) -> Self {
        Self {
            id,
            category: fields.category,
            amount: fields.amount,
            month: fields.month,
        }
    }

    /// Merge the present fields of a patch into this budget
    pub fn apply(&mut self, patch: BudgetPatch) {
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(amount) = patch.amount {
            self.amount = amount;
        }
        if let Some(month) = patch.month {
            self.month = month;
        }
    }
}

impl fmt::Display for Budget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}: {}", self.month, self.category, self.amount)
    }
}

/// Fields of a budget that has not been stored yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBudget {
    pub category: String,
    pub amount: Money,
    pub month: Month,
}

impl NewBudget {
    pub fn new(category: impl Into<String>, amount: Money, month: Month) -> Self {
        Self {
            category: category.into(),
            amount,
            month,
        }
    }
}

/// Partial update of a budget; `None` fields are left unchanged
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BudgetPatch {
    pub category: Option<String>,
    pub amount: Option<Money>,
    pub month: Option<Month>,
}

impl From<NewBudget> for BudgetPatch {
    fn from(fields: NewBudget) -> Self {
        Self {
            category: Some(fields.category),
            amount: Some(fields.amount),
            month: Some(fields.month),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jan() -> Month {
        Month::new(2025, 1).unwrap()
    }

    #[test]
    fn test_new_budget() {
        let budget = Budget::new(NewBudget::new("Shopping", Money::from_cents(20000), jan()));
        assert_eq!(budget.category, "Shopping");
        assert_eq!(budget.amount.cents(), 20000);
        assert_eq!(budget.month, jan());
    }

    #[test]
    fn test_apply_patch() {
        let mut budget = Budget::new(NewBudget::new("Shopping", Money::from_cents(20000), jan()));
        budget.apply(BudgetPatch {
            month: Some(jan().next()),
            ..Default::default()
        });
        assert_eq!(budget.month, Month::new(2025, 2).unwrap());
        assert_eq!(budget.amount.cents(), 20000);
    }

    #[test]
    fn test_wire_format() {
        let budget = Budget::with_id(
            BudgetId::from("1712345678901"),
            NewBudget::new("Travel", Money::from_cents(12550), jan()),
        );
        let json = serde_json::to_string(&budget).unwrap();
        assert_eq!(
            json,
            r#"{"id":"1712345678901","category":"Travel","amount":125.5,"month":"2025-01"}"#
        );

        let back: Budget = serde_json::from_str(&json).unwrap();
        assert_eq!(back, budget);
    }
}
