//! Service layer for the expense tracker
//!
//! Validates raw user input at the boundary and coordinates storage with
//! the pure reports.

pub mod budget;
pub mod transaction;

use crate::error::FieldErrors;
use crate::models::{Money, MoneyParseError};

pub use budget::{BudgetInput, BudgetService};
pub use transaction::{TransactionFilter, TransactionInput, TransactionService, DATE_FORMAT};

/// Parse a user-typed amount, recording a message under `amount` on failure
///
/// The amount must be positive and no larger than [`Money::MAX_INPUT`].
pub(crate) fn parse_amount(raw: &str, errors: &mut FieldErrors) -> Option<Money> {
    match Money::parse(raw) {
        Ok(amount) if amount > Money::MAX_INPUT => {
            errors.push("amount", "Amount is too large");
            None
        }
        Ok(amount) if amount.is_positive() => Some(amount),
        Err(MoneyParseError::OutOfRange(_)) => {
            errors.push("amount", "Amount is too large");
            None
        }
        _ => {
            errors.push("amount", "Amount must be greater than 0");
            None
        }
    }
}
