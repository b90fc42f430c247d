//! Database models for budgets.

use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use receipt_tracker_core::budgets::{
    CategoryBudget, MonthlyBudget, MonthlyBudgetUpdate, NewCategoryBudget, NewMonthlyBudget,
};
use receipt_tracker_core::errors::Error;

use crate::utils::{category_from_db, decimal_from_db, decimal_to_db};

#[derive(
    Queryable, Identifiable, Selectable, PartialEq, Serialize, Deserialize, Debug, Clone,
)]
#[diesel(table_name = crate::schema::monthly_budgets)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct MonthlyBudgetDB {
    pub id: String,
    pub month: String,
    pub income: String,
    pub fixed_expenses: String,
    pub savings_goal: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::monthly_budgets)]
#[serde(rename_all = "camelCase")]
pub struct NewMonthlyBudgetDB {
    pub id: String,
    pub month: String,
    pub income: String,
    pub fixed_expenses: String,
    pub savings_goal: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl NewMonthlyBudgetDB {
    pub fn new(id: String, budget: NewMonthlyBudget, now: NaiveDateTime) -> Self {
        NewMonthlyBudgetDB {
            id,
            month: budget.month,
            income: decimal_to_db(budget.income),
            fixed_expenses: decimal_to_db(budget.fixed_expenses),
            savings_goal: decimal_to_db(budget.savings_goal),
            created_at: now,
            updated_at: now,
        }
    }
}

/// Partial update. `None` fields are left out of the `SET` clause.
#[derive(AsChangeset, Debug, Clone)]
#[diesel(table_name = crate::schema::monthly_budgets)]
pub struct MonthlyBudgetChangesDB {
    pub month: Option<String>,
    pub income: Option<String>,
    pub fixed_expenses: Option<String>,
    pub savings_goal: Option<String>,
    pub updated_at: NaiveDateTime,
}

impl MonthlyBudgetChangesDB {
    pub fn new(changes: MonthlyBudgetUpdate, now: NaiveDateTime) -> Self {
        MonthlyBudgetChangesDB {
            month: changes.month,
            income: changes.income.map(decimal_to_db),
            fixed_expenses: changes.fixed_expenses.map(decimal_to_db),
            savings_goal: changes.savings_goal.map(decimal_to_db),
            updated_at: now,
        }
    }
}

#[derive(
    Queryable,
    Identifiable,
    Associations,
    Selectable,
    PartialEq,
    Serialize,
    Deserialize,
    Debug,
    Clone,
)]
#[diesel(belongs_to(MonthlyBudgetDB, foreign_key = monthly_budget_id))]
#[diesel(table_name = crate::schema::category_budgets)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct CategoryBudgetDB {
    pub id: String,
    pub monthly_budget_id: String,
    pub category: String,
    pub allocated_amount: String,
}

#[derive(Insertable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::category_budgets)]
#[serde(rename_all = "camelCase")]
pub struct NewCategoryBudgetDB {
    pub id: String,
    pub monthly_budget_id: String,
    pub category: String,
    pub allocated_amount: String,
}

impl NewCategoryBudgetDB {
    pub fn new(id: String, budget: NewCategoryBudget) -> Self {
        NewCategoryBudgetDB {
            id,
            monthly_budget_id: budget.monthly_budget_id,
            category: budget.category.as_str().to_string(),
            allocated_amount: decimal_to_db(budget.allocated_amount),
        }
    }
}

impl TryFrom<MonthlyBudgetDB> for MonthlyBudget {
    type Error = Error;

    fn try_from(db: MonthlyBudgetDB) -> Result<Self, Self::Error> {
        Ok(Self {
            income: decimal_from_db(&db.income)?,
            fixed_expenses: decimal_from_db(&db.fixed_expenses)?,
            savings_goal: decimal_from_db(&db.savings_goal)?,
            id: db.id,
            month: db.month,
            created_at: db.created_at,
            updated_at: db.updated_at,
        })
    }
}

impl TryFrom<CategoryBudgetDB> for CategoryBudget {
    type Error = Error;

    fn try_from(db: CategoryBudgetDB) -> Result<Self, Self::Error> {
        Ok(Self {
            category: category_from_db(&db.category)?,
            allocated_amount: decimal_from_db(&db.allocated_amount)?,
            id: db.id,
            monthly_budget_id: db.monthly_budget_id,
        })
    }
}
