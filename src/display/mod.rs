//! Display formatting for terminal output
//!
//! Plain-text tables for transactions, budgets and the category catalog.

pub mod budget;
pub mod category;
pub mod transaction;

pub use budget::{format_budget_details, format_budget_list};
pub use category::format_category_list;
pub use transaction::{
    format_transaction_details, format_transaction_list, format_transaction_row,
};

/// Truncate a string to at most `max_len` characters
pub(crate) fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
