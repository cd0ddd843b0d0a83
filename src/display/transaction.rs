//! Transaction display formatting

use super::truncate;
use crate::models::{Transaction, TransactionKind};

/// Signed amount: income positive, expenses negative
fn signed_amount(txn: &Transaction, symbol: &str) -> String {
    let sign = match txn.kind {
        TransactionKind::Income => "+",
        TransactionKind::Expense => "-",
    };
    format!("{}{}", sign, txn.amount.format_with_symbol(symbol))
}

/// Format a single transaction as a list row
pub fn format_transaction_row(txn: &Transaction, symbol: &str) -> String {
    format!(
        "{:<10} {:<24} {:<18} {:>14}  {}",
        txn.date.format("%Y-%m-%d"),
        truncate(&txn.description, 24),
        truncate(&txn.category, 18),
        signed_amount(txn, symbol),
        txn.id
    )
}

/// Format a list of transactions
pub fn format_transaction_list(transactions: &[Transaction], symbol: &str) -> String {
    if transactions.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:<10} {:<24} {:<18} {:>14}  {}\n",
        "Date", "Description", "Category", "Amount", "ID"
    ));
    output.push_str(&"-".repeat(80));
    output.push('\n');

    for txn in transactions {
        output.push_str(&format_transaction_row(txn, symbol));
        output.push('\n');
    }

    output
}

/// Format transaction details
pub fn format_transaction_details(txn: &Transaction, symbol: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("Transaction: {}\n", txn.id));
    output.push_str(&format!("Date:        {}\n", txn.date.format("%Y-%m-%d")));
    output.push_str(&format!("Type:        {}\n", txn.kind));
    output.push_str(&format!("Amount:      {}\n", txn.amount.format_with_symbol(symbol)));
    output.push_str(&format!("Category:    {}\n", txn.category));
    output.push_str(&format!("Description: {}\n", txn.description));

    output
}
