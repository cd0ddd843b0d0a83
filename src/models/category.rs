//! Category catalog
//!
//! Categories are a fixed reference list. Transactions and budgets refer to
//! them by name only, so a record may carry a name the catalog no longer
//! knows; every lookup here is total and falls back to defaults.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Color used for names the catalog does not know
pub const FALLBACK_COLOR: &str = "#85C1E9";

/// Name of the catalog entry reserved for income
pub const INCOME_CATEGORY: &str = "Income";

/// Icon tokens understood by the front end
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum IconToken {
    Utensils,
    Car,
    ShoppingBag,
    Film,
    Zap,
    Heart,
    Book,
    Plane,
    TrendingUp,
    MoreHorizontal,
    HelpCircle,
}

impl IconToken {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Utensils => "utensils",
            Self::Car => "car",
            Self::ShoppingBag => "shopping-bag",
            Self::Film => "film",
            Self::Zap => "zap",
            Self::Heart => "heart",
            Self::Book => "book",
            Self::Plane => "plane",
            Self::TrendingUp => "trending-up",
            Self::MoreHorizontal => "more-horizontal",
            Self::HelpCircle => "help-circle",
        }
    }

    /// Resolve a token string; unknown tokens render as the help icon
    pub fn from_token(token: &str) -> Self {
        token.parse().unwrap_or(Self::HelpCircle)
    }
}

impl fmt::Display for IconToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IconToken {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = match s {
            "utensils" => Self::Utensils,
            "car" => Self::Car,
            "shopping-bag" => Self::ShoppingBag,
            "film" => Self::Film,
            "zap" => Self::Zap,
            "heart" => Self::Heart,
            "book" => Self::Book,
            "plane" => Self::Plane,
            "trending-up" => Self::TrendingUp,
            "more-horizontal" => Self::MoreHorizontal,
            "help-circle" => Self::HelpCircle,
            _ => return Err(()),
        };
        Ok(token)
    }
}

/// A catalog entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Category {
    pub id: &'static str,
    pub name: &'static str,
    pub color: &'static str,
    pub icon: IconToken,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// The built-in category catalog, in display order
pub const DEFAULT_CATEGORIES: &[Category] = &[
    Category { id: "1", name: "Food & Dining", color: "#FF6B6B", icon: IconToken::Utensils },
    Category { id: "2", name: "Transportation", color: "#4ECDC4", icon: IconToken::Car },
    Category { id: "3", name: "Shopping", color: "#45B7D1", icon: IconToken::ShoppingBag },
    Category { id: "4", name: "Entertainment", color: "#96CEB4", icon: IconToken::Film },
    Category { id: "5", name: "Bills & Utilities", color: "#FFEAA7", icon: IconToken::Zap },
    Category { id: "6", name: "Healthcare", color: "#DDA0DD", icon: IconToken::Heart },
    Category { id: "7", name: "Education", color: "#98D8C8", icon: IconToken::Book },
    Category { id: "8", name: "Travel", color: "#F7DC6F", icon: IconToken::Plane },
    Category { id: "9", name: INCOME_CATEGORY, color: "#58D68D", icon: IconToken::TrendingUp },
    Category { id: "10", name: "Other", color: FALLBACK_COLOR, icon: IconToken::MoreHorizontal },
];

/// Find a catalog entry by exact name
pub fn find_category(name: &str) -> Option<&'static Category> {
    DEFAULT_CATEGORIES.iter().find(|c| c.name == name)
}

/// Display color for a category name
pub fn category_color(name: &str) -> &'static str {
    find_category(name).map_or(FALLBACK_COLOR, |c| c.color)
}

/// Icon for a category name
pub fn category_icon(name: &str) -> IconToken {
    find_category(name).map_or(IconToken::MoreHorizontal, |c| c.icon)
}

/// Categories a budget can be set for (everything except income)
pub fn budget_categories() -> impl Iterator<Item = &'static Category> {
    DEFAULT_CATEGORIES
        .iter()
        .filter(|c| c.name != INCOME_CATEGORY)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_category_lookup() {
        assert_eq!(category_color("Travel"), "#F7DC6F");
        assert_eq!(category_icon("Food & Dining"), IconToken::Utensils);
    }

    #[test]
    fn test_unknown_category_falls_back() {
        assert_eq!(category_color("Groceries (old)"), FALLBACK_COLOR);
        assert_eq!(category_icon("Groceries (old)"), IconToken::MoreHorizontal);
        assert!(find_category("food & dining").is_none());
    }

    #[test]
    fn test_icon_tokens_round_trip() {
        for category in DEFAULT_CATEGORIES {
            assert_eq!(IconToken::from_token(category.icon.as_str()), category.icon);
        }
        assert_eq!(IconToken::from_token("sparkles"), IconToken::HelpCircle);
    }

    #[test]
    fn test_budget_categories_exclude_income() {
        let names: Vec<_> = budget_categories().map(|c| c.name).collect();
        assert_eq!(names.len(), DEFAULT_CATEGORIES.len() - 1);
        assert!(!names.contains(&INCOME_CATEGORY));
    }

    #[test]
    fn test_catalog_ids_unique() {
        let mut ids: Vec<_> = DEFAULT_CATEGORIES.iter().map(|c| c.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), DEFAULT_CATEGORIES.len());
    }
}
