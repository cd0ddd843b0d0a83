//! Transaction service
//!
//! Validates raw user input and applies it to the transaction collection.
//! Nothing is written unless the whole input is valid.

use chrono::NaiveDate;
use tracing::info;

use crate::error::{FieldErrors, TrackerError, TrackerResult};
use crate::models::{
    Month, NewTransaction, Transaction, TransactionId, TransactionKind, TransactionPatch,
};
use crate::reports::DashboardSummary;
use crate::storage::Storage;

/// Date format accepted for transaction dates
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Raw transaction fields as typed by the user
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionInput {
    pub amount: String,
    pub description: String,
    pub category: String,
    pub date: String,
    pub kind: String,
}

impl TransactionInput {
    /// Prefill an input from a stored transaction (for editing)
    pub fn from_transaction(txn: &Transaction) -> Self {
        Self {
            amount: txn.amount.as_f64().to_string(),
            description: txn.description.clone(),
            category: txn.category.clone(),
            date: txn.date.format(DATE_FORMAT).to_string(),
            kind: txn.kind.as_str().to_string(),
        }
    }

    /// Check every field, collecting all messages
    pub fn validate(&self) -> TrackerResult<NewTransaction> {
        let mut errors = FieldErrors::new();

        let amount = super::parse_amount(&self.amount, &mut errors);

        let description = self.description.trim();
        if description.is_empty() {
            errors.push("description", "Description is required");
        }

        let category = self.category.trim();
        if category.is_empty() {
            errors.push("category", "Category is required");
        }

        let date = if self.date.trim().is_empty() {
            errors.push("date", "Date is required");
            None
        } else {
            match NaiveDate::parse_from_str(self.date.trim(), DATE_FORMAT) {
                Ok(date) => Some(date),
                Err(_) => {
                    errors.push("date", "Date must be YYYY-MM-DD");
                    None
                }
            }
        };

        let kind = match self.kind.parse::<TransactionKind>() {
            Ok(kind) => Some(kind),
            Err(_) => {
                errors.push("kind", "Type must be income or expense");
                None
            }
        };

        match (amount, date, kind) {
            (Some(amount), Some(date), Some(kind)) if errors.is_empty() => Ok(NewTransaction {
                amount,
                description: description.to_string(),
                category: category.to_string(),
                date,
                kind,
            }),
            _ => Err(TrackerError::Validation(errors)),
        }
    }
}

/// Options for filtering transaction listings
#[derive(Debug, Clone, Default)]
pub struct TransactionFilter {
    pub kind: Option<TransactionKind>,
    pub category: Option<String>,
    pub month: Option<Month>,
    pub limit: Option<usize>,
}

impl TransactionFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn kind(mut self, kind: TransactionKind) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn month(mut self, month: Month) -> Self {
        self.month = Some(month);
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    fn matches(&self, txn: &Transaction) -> bool {
        self.kind.map_or(true, |k| txn.kind == k)
            && self.category.as_ref().map_or(true, |c| &txn.category == c)
            && self.month.map_or(true, |m| m.contains(txn.date))
    }
}

/// Service for transaction management
pub struct TransactionService<'a> {
    storage: &'a Storage,
}

impl<'a> TransactionService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Validate and store a new transaction
    pub fn create(&self, input: &TransactionInput) -> TrackerResult<Transaction> {
        let fields = input.validate()?;
        let txn = self.storage.transactions.add(fields)?;
        info!(id = %txn.id, kind = %txn.kind, "created transaction");
        Ok(txn)
    }

    /// Validate and apply `input` to an existing transaction
    pub fn update(&self, id: &TransactionId, input: &TransactionInput) -> TrackerResult<Transaction> {
        let fields = input.validate()?;
        let updated = self
            .storage
            .transactions
            .update(id, TransactionPatch::from(fields))?
            .ok_or_else(|| TrackerError::transaction_not_found(id.to_string()))?;
        info!(id = %updated.id, "updated transaction");
        Ok(updated)
    }

    /// Delete a transaction; `false` if it did not exist
    pub fn delete(&self, id: &TransactionId) -> TrackerResult<bool> {
        let deleted = self.storage.transactions.delete(id)?;
        if deleted {
            info!(%id, "deleted transaction");
        }
        Ok(deleted)
    }

    pub fn get(&self, id: &TransactionId) -> Option<Transaction> {
        self.storage.transactions.get(id)
    }

    /// Matching transactions, newest first (ties keep stored order)
    pub fn list(&self, filter: &TransactionFilter) -> Vec<Transaction> {
        let mut transactions: Vec<Transaction> = self
            .storage
            .transactions
            .load()
            .into_iter()
            .filter(|t| filter.matches(t))
            .collect();

        transactions.sort_by(|a, b| b.date.cmp(&a.date));

        if let Some(limit) = filter.limit {
            transactions.truncate(limit);
        }

        transactions
    }

    /// Dashboard summary as of `today`
    pub fn summary(&self, today: NaiveDate) -> DashboardSummary {
        DashboardSummary::generate(&self.storage.transactions.load(), today)
    }

    /// Dashboard summary with an explicit trend length and recent-list size
    pub fn summary_with_window(
        &self,
        today: NaiveDate,
        months: usize,
        recent: usize,
    ) -> DashboardSummary {
        DashboardSummary::generate_with_window(
            &self.storage.transactions.load(),
            today,
            months,
            recent,
        )
    }
}
