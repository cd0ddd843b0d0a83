//! Transaction model
//!
//! A transaction is a single income or expense entry. Amounts are always
//! non-negative; the direction comes from the transaction kind.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ids::TransactionId;
use super::money::Money;
use super::month::Month;

/// Direction of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransactionKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "income" => Ok(Self::Income),
            "expense" => Ok(Self::Expense),
            other => Err(format!("Unknown transaction type: {}", other)),
        }
    }
}

/// A financial transaction as stored
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier
    pub id: TransactionId,

    /// Amount (never negative); a missing amount reads as zero
    #[serde(default)]
    pub amount: Money,

    /// Free-text description
    #[serde(default)]
    pub description: String,

    /// Category name (soft reference into the catalog)
    #[serde(default)]
    pub category: String,

    /// Transaction date
    pub date: NaiveDate,

    /// Income or expense
    #[serde(rename = "type")]
    pub kind: TransactionKind,
}

impl Transaction {
    /// Create a transaction from its fields, assigning a fresh id
    pub fn new(fields: NewTransaction) -> Self {
        Self::with_id(TransactionId::new(), fields)
    }

    /// Create a transaction with a known id
    pub fn with_id(id: TransactionId, fields: NewTransaction) -> Self {
        Self {
            id,
            amount: fields.amount,
            description: fields.description,
            category: fields.category,
            date: fields.date,
            kind: fields.kind,
        }
    }

    pub fn is_income(&self) -> bool {
        self.kind == TransactionKind::Income
    }

    pub fn is_expense(&self) -> bool {
        self.kind == TransactionKind::Expense
    }

    /// The month this transaction falls in
    pub fn month(&self) -> Month {
        Month::containing(self.date)
    }

    /// Merge the present fields of a patch into this transaction
    pub fn apply(&mut self, patch: TransactionPatch) {
        if let Some(amount) = patch.amount {
            self.amount = amount;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(date) = patch.date {
            self.date = date;
        }
        if let Some(kind) = patch.kind {
            self.kind = kind;
        }
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} ({}) {}",
            self.date, self.kind, self.amount, self.category, self.description
        )
    }
}

/// Fields of a transaction that has not been stored yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTransaction {
    pub amount: Money,
    pub description: String,
    pub category: String,
    pub date: NaiveDate,
    pub kind: TransactionKind,
}

impl NewTransaction {
    pub fn expense(
        amount: Money,
        description: impl Into<String>,
        category: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self {
            amount,
            description: description.into(),
            category: category.into(),
            date,
            kind: TransactionKind::Expense,
        }
    }

    pub fn income(
        amount: Money,
        description: impl Into<String>,
        category: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self {
            kind: TransactionKind::Income,
            ..Self::expense(amount, description, category, date)
        }
    }
}

/// Partial update of a transaction; `None` fields are left unchanged
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionPatch {
    pub amount: Option<Money>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub date: Option<NaiveDate>,
    pub kind: Option<TransactionKind>,
}

impl From<NewTransaction> for TransactionPatch {
    fn from(fields: NewTransaction) -> Self {
        Self {
            amount: Some(fields.amount),
            description: Some(fields.description),
            category: Some(fields.category),
            date: Some(fields.date),
            kind: Some(fields.kind),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_new_assigns_id() {
        let fields = NewTransaction::expense(Money::from_cents(1000), "Lunch", "Food & Dining", date(2025, 1, 15));
        let a = Transaction::new(fields.clone());
        let b = Transaction::new(fields);
        assert_ne!(a.id, b.id);
        assert!(a.is_expense());
    }

    #[test]
    fn test_apply_patch_only_touches_present_fields() {
        let mut txn = Transaction::new(NewTransaction::expense(
            Money::from_cents(1000),
            "Lunch",
            "Food & Dining",
            date(2025, 1, 15),
        ));

        txn.apply(TransactionPatch {
            amount: Some(Money::from_cents(1250)),
            ..Default::default()
        });

        assert_eq!(txn.amount.cents(), 1250);
        assert_eq!(txn.description, "Lunch");
        assert_eq!(txn.category, "Food & Dining");
        assert_eq!(txn.date, date(2025, 1, 15));
    }

    #[test]
    fn test_wire_format_uses_type_field() {
        let txn = Transaction::with_id(
            TransactionId::from("1"),
            NewTransaction::income(Money::from_cents(250000), "Salary", "Income", date(2025, 1, 1)),
        );
        let json = serde_json::to_value(&txn).unwrap();

        assert_eq!(json["type"], "income");
        assert_eq!(json["date"], "2025-01-01");
        assert_eq!(json["amount"], 2500);
        assert_eq!(json["id"], "1");
    }

    #[test]
    fn test_missing_amount_reads_as_zero() {
        let txn: Transaction = serde_json::from_str(
            r#"{"id":"1","description":"?","category":"Other","date":"2025-01-02","type":"expense"}"#,
        )
        .unwrap();
        assert!(txn.amount.is_zero());
    }

    #[test]
    fn test_kind_from_str() {
        assert_eq!("Income".parse::<TransactionKind>(), Ok(TransactionKind::Income));
        assert_eq!("expense".parse::<TransactionKind>(), Ok(TransactionKind::Expense));
        assert!("transfer".parse::<TransactionKind>().is_err());
    }
}
