//! Category catalog display

use crate::models::DEFAULT_CATEGORIES;

/// Format the built-in category catalog
pub fn format_category_list() -> String {
    let mut output = String::new();
    output.push_str(&format!("{:<20} {:<8} {}\n", "Category", "Color", "Icon"));
    output.push_str(&"-".repeat(44));
    output.push('\n');

    for category in DEFAULT_CATEGORIES {
        output.push_str(&format!(
            "{:<20} {:<8} {}\n",
            category.name, category.color, category.icon
        ));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lists_every_category() {
        let output = format_category_list();
        assert_eq!(output.lines().count(), DEFAULT_CATEGORIES.len() + 2);
        assert!(output.contains("Bills & Utilities    #FFEAA7  zap"));
    }
}
