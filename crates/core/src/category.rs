//! Expense and income categories.
//!
//! Categories are stored as their display strings in the database and
//! validated here before anything reaches a repository.

use serde::{Deserialize, Serialize};

/// The fixed set of expense categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExpenseCategory {
    Miscellaneous,
    Food,
    Transportation,
    Groceries,
    Clothing,
    Household,
    Rent,
    #[serde(rename = "Bills and Taxes")]
    BillsAndTaxes,
    Vacations,
}

impl ExpenseCategory {
    pub const ALL: [ExpenseCategory; 9] = [
        ExpenseCategory::Miscellaneous,
        ExpenseCategory::Food,
        ExpenseCategory::Transportation,
        ExpenseCategory::Groceries,
        ExpenseCategory::Clothing,
        ExpenseCategory::Household,
        ExpenseCategory::Rent,
        ExpenseCategory::BillsAndTaxes,
        ExpenseCategory::Vacations,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ExpenseCategory::Miscellaneous => "Miscellaneous",
            ExpenseCategory::Food => "Food",
            ExpenseCategory::Transportation => "Transportation",
            ExpenseCategory::Groceries => "Groceries",
            ExpenseCategory::Clothing => "Clothing",
            ExpenseCategory::Household => "Household",
            ExpenseCategory::Rent => "Rent",
            ExpenseCategory::BillsAndTaxes => "Bills and Taxes",
            ExpenseCategory::Vacations => "Vacations",
        }
    }
}

/// The fixed set of income categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IncomeCategory {
    Salary,
    Business,
    Investment,
    Gift,
    Other,
}

impl IncomeCategory {
    pub const ALL: [IncomeCategory; 5] = [
        IncomeCategory::Salary,
        IncomeCategory::Business,
        IncomeCategory::Investment,
        IncomeCategory::Gift,
        IncomeCategory::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            IncomeCategory::Salary => "Salary",
            IncomeCategory::Business => "Business",
            IncomeCategory::Investment => "Investment",
            IncomeCategory::Gift => "Gift",
            IncomeCategory::Other => "Other",
        }
    }
}

/// Validate a submitted expense category string.
pub fn validate_expense_category(value: &str) -> Result<(), String> {
    if ExpenseCategory::ALL.iter().any(|c| c.as_str() == value) {
        Ok(())
    } else {
        Err(format!("'{value}' is not a valid expense category"))
    }
}

/// Validate a submitted income category string.
pub fn validate_income_category(value: &str) -> Result<(), String> {
    if IncomeCategory::ALL.iter().any(|c| c.as_str() == value) {
        Ok(())
    } else {
        Err(format!("'{value}' is not a valid income category"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_expense_categories_validate() {
        for category in ExpenseCategory::ALL {
            assert!(validate_expense_category(category.as_str()).is_ok());
        }
    }

    #[test]
    fn test_unknown_expense_category_rejected() {
        let err = validate_expense_category("Gadgets").unwrap_err();
        assert!(err.contains("Gadgets"));
    }

    #[test]
    fn test_multi_word_category_round_trips_through_serde() {
        let json = serde_json::to_string(&ExpenseCategory::BillsAndTaxes).unwrap();
        assert_eq!(json, "\"Bills and Taxes\"");
        let back: ExpenseCategory = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ExpenseCategory::BillsAndTaxes);
    }

    #[test]
    fn test_income_categories_validate() {
        for category in IncomeCategory::ALL {
            assert!(validate_income_category(category.as_str()).is_ok());
        }
        assert!(validate_income_category("Salary").is_ok());
        assert!(validate_income_category("Lottery").is_err());
    }
}
