use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::categories::Category;
use crate::errors::Result;
use crate::utils::decimal_utils::checked_sub;

/// Planned income and fixed costs for one `YYYY-MM` month.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyBudget {
    pub id: String,
    pub month: String,
    pub income: Decimal,
    pub fixed_expenses: Decimal,
    pub savings_goal: Decimal,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl MonthlyBudget {
    /// What is left for discretionary spending once fixed costs and savings are set aside.
    /// Income left after fixed expenses and the savings goal.
    pub fn spendable(&self) -> Result<Decimal> {
        checked_sub(checked_sub(self.income, self.fixed_expenses)?, self.savings_goal)
    }
}

/// Input model for creating a monthly budget
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewMonthlyBudget {
    pub month: String,
    pub income: Decimal,
    pub fixed_expenses: Decimal,
    pub savings_goal: Decimal,
}

/// Partial update of a monthly budget. `None` leaves a field untouched.
///
/// `id` and `created_at` are deliberately absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyBudgetUpdate {
    pub month: Option<String>,
    pub income: Option<Decimal>,
    pub fixed_expenses: Option<Decimal>,
    pub savings_goal: Option<Decimal>,
}

impl MonthlyBudgetUpdate {
    pub fn is_empty(&self) -> bool {
        self.month.is_none()
            && self.income.is_none()
            && self.fixed_expenses.is_none()
            && self.savings_goal.is_none()
    }
}

/// Amount set aside for one category within a monthly budget.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CategoryBudget {
    pub id: String,
    pub monthly_budget_id: String,
    pub category: Category,
    pub allocated_amount: Decimal,
}

/// Input model for creating a category budget
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewCategoryBudget {
    pub monthly_budget_id: String,
    pub category: Category,
    pub allocated_amount: Decimal,
}

/// Budget vs actual comparison for a month
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BudgetVsActual {
    pub month: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub spendable: Decimal,
    pub total_allocated: Decimal,
    pub total_spent: Decimal,
    pub unallocated: Decimal,
    pub by_category: Vec<CategoryBudgetVsActual>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CategoryBudgetVsActual {
    pub category: Category,
    pub allocated: Decimal,
    pub actual: Decimal,
    pub remaining: Decimal,
    pub is_over_budget: bool,
}
