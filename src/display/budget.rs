//! Budget display formatting

use super::truncate;
use crate::models::Budget;

/// Format a list of budgets
pub fn format_budget_list(budgets: &[Budget], symbol: &str) -> String {
    if budgets.is_empty() {
        return "No budgets found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:<8} {:<24} {:>14}  {}\n",
        "Month", "Category", "Amount", "ID"
    ));
    output.push_str(&"-".repeat(70));
    output.push('\n');

    for budget in budgets {
        output.push_str(&format!(
            "{:<8} {:<24} {:>14}  {}\n",
            budget.month,
            truncate(&budget.category, 24),
            budget.amount.format_with_symbol(symbol),
            budget.id
        ));
    }

    output
}

/// Format budget details
pub fn format_budget_details(budget: &Budget, symbol: &str) -> String {
    format!(
        "Budget:   {}\nMonth:    {}\nCategory: {}\nAmount:   {}\n",
        budget.id,
        budget.month,
        budget.category,
        budget.amount.format_with_symbol(symbol)
    )
}
