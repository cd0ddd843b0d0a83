//! Budget collection
//!
//! Stored under `expense-tracker-budgets` as a JSON array of budgets in
//! insertion order.

use super::collection::{Collection, Record};
use crate::models::{Budget, BudgetId, BudgetPatch, Month, NewBudget};

/// Store key for the budget collection
pub const BUDGETS_KEY: &str = "expense-tracker-budgets";

pub type BudgetCollection = Collection<Budget>;

impl Record for Budget {
    type Id = BudgetId;
    type New = NewBudget;
    type Patch = BudgetPatch;

    const ENTITY: &'static str = "budget";

    fn id(&self) -> &BudgetId {
        &self.id
    }

    fn create(fields: NewBudget) -> Self {
        Budget::new(fields)
    }

    fn apply(&mut self, patch: BudgetPatch) {
        Budget::apply(self, patch)
    }
}

impl BudgetCollection {
    /// All budgets targeting `month`, in stored order
    pub fn for_month(&self, month: Month) -> Vec<Budget> {
        self.load()
            .into_iter()
            .filter(|b| b.month == month)
            .collect()
    }
}
