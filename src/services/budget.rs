//! Budget service
//!
//! Validates budget input, manages the budget collection, and compares
//! budgets against recorded spending.

use tracing::info;

use crate::error::{FieldErrors, TrackerError, TrackerResult};
use crate::models::{Budget, BudgetId, BudgetPatch, Month, NewBudget};
use crate::reports::{compare_budgets, BudgetComparison, BudgetReport};
use crate::storage::Storage;

/// Raw budget fields as typed by the user
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BudgetInput {
    pub category: String,
    pub amount: String,
    pub month: String,
}

impl BudgetInput {
    /// Prefill an input from a stored budget (for editing)
    pub fn from_budget(budget: &Budget) -> Self {
        Self {
            category: budget.category.clone(),
            amount: budget.amount.as_f64().to_string(),
            month: budget.month.to_string(),
        }
    }

    /// Check every field, collecting all messages
    pub fn validate(&self) -> TrackerResult<NewBudget> {
        let mut errors = FieldErrors::new();

        let category = self.category.trim();
        if category.is_empty() {
            errors.push("category", "Category is required");
        }

        let amount = super::parse_amount(&self.amount, &mut errors);

        let month = if self.month.trim().is_empty() {
            errors.push("month", "Month is required");
            None
        } else {
            match Month::parse(&self.month) {
                Ok(month) => Some(month),
                Err(_) => {
                    errors.push("month", "Month must be YYYY-MM");
                    None
                }
            }
        };

        match (amount, month) {
            (Some(amount), Some(month)) if errors.is_empty() => {
                Ok(NewBudget::new(category, amount, month))
            }
            _ => Err(TrackerError::Validation(errors)),
        }
    }
}

/// Service for budget management
pub struct BudgetService<'a> {
    storage: &'a Storage,
}

impl<'a> BudgetService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Validate and store a new budget
    pub fn create(&self, input: &BudgetInput) -> TrackerResult<Budget> {
        let fields = input.validate()?;
        let budget = self.storage.budgets.add(fields)?;
        info!(id = %budget.id, month = %budget.month, "created budget");
        Ok(budget)
    }

    /// Validate and apply `input` to an existing budget
    pub fn update(&self, id: &BudgetId, input: &BudgetInput) -> TrackerResult<Budget> {
        let fields = input.validate()?;
        let updated = self
            .storage
            .budgets
            .update(id, BudgetPatch::from(fields))?
            .ok_or_else(|| TrackerError::budget_not_found(id.to_string()))?;
        info!(id = %updated.id, "updated budget");
        Ok(updated)
    }

    /// Delete a budget; `false` if it did not exist
    pub fn delete(&self, id: &BudgetId) -> TrackerResult<bool> {
        let deleted = self.storage.budgets.delete(id)?;
        if deleted {
            info!(%id, "deleted budget");
        }
        Ok(deleted)
    }

    pub fn get(&self, id: &BudgetId) -> Option<Budget> {
        self.storage.budgets.get(id)
    }

    /// All budgets, or only those for `month`, in stored order
    pub fn list(&self, month: Option<Month>) -> Vec<Budget> {
        match month {
            Some(month) => self.storage.budgets.for_month(month),
            None => self.storage.budgets.load(),
        }
    }

    /// Budgeted versus spent for each budget in `month`
    pub fn compare(&self, month: Month) -> Vec<BudgetComparison> {
        compare_budgets(
            &self.storage.transactions.load(),
            &self.storage.budgets.load(),
            month,
        )
    }

    /// Comparison with totals for `month`
    pub fn report(&self, month: Month) -> BudgetReport {
        BudgetReport::generate(
            &self.storage.transactions.load(),
            &self.storage.budgets.load(),
            month,
        )
    }
}
