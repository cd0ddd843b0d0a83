//! Transaction collection
//!
//! Stored under `expense-tracker-transactions` as a JSON array of
//! transactions in insertion order.

use super::collection::{Collection, Record};
use crate::models::{NewTransaction, Transaction, TransactionId, TransactionPatch};

/// Store key for the transaction collection
pub const TRANSACTIONS_KEY: &str = "expense-tracker-transactions";

pub type TransactionCollection = Collection<Transaction>;

impl Record for Transaction {
    type Id = TransactionId;
    type New = NewTransaction;
    type Patch = TransactionPatch;

    const ENTITY: &'static str = "transaction";

    fn id(&self) -> &TransactionId {
        &self.id
    }

    fn create(fields: NewTransaction) -> Self {
        Transaction::new(fields)
    }

    fn apply(&mut self, patch: TransactionPatch) {
        Transaction::apply(self, patch)
    }
}
