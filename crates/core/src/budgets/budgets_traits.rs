use async_trait::async_trait;

use crate::budgets::budgets_model::{
    BudgetVsActual, CategoryBudget, MonthlyBudget, MonthlyBudgetUpdate, NewCategoryBudget,
    NewMonthlyBudget,
};
use crate::errors::Result;

/// Trait for budget repository operations
#[async_trait]
pub trait BudgetRepositoryTrait: Send + Sync {
    async fn insert_monthly_budget(&self, new_budget: NewMonthlyBudget) -> Result<String>;
    async fn get_monthly_budget_by_id(&self, budget_id: &str) -> Result<Option<MonthlyBudget>>;
    async fn get_monthly_budget_by_month(&self, month: &str) -> Result<Option<MonthlyBudget>>;
    /// Newest month first.
    async fn list_monthly_budgets(&self) -> Result<Vec<MonthlyBudget>>;
    /// Applies the supplied fields and refreshes `updated_at`.
    ///
    /// An empty update writes nothing and returns the stored row as is.
    async fn update_monthly_budget(
        &self,
        budget_id: &str,
        changes: MonthlyBudgetUpdate,
    ) -> Result<Option<MonthlyBudget>>;
    /// Deletes the budget and, through the cascading key, its category budgets.
    async fn delete_monthly_budget(&self, budget_id: &str) -> Result<usize>;

    async fn insert_category_budget(&self, new_budget: NewCategoryBudget) -> Result<String>;
    async fn get_category_budget_by_id(&self, budget_id: &str) -> Result<Option<CategoryBudget>>;
    async fn get_category_budgets(&self, monthly_budget_id: &str) -> Result<Vec<CategoryBudget>>;
    async fn delete_category_budget(&self, budget_id: &str) -> Result<usize>;
}

/// Trait for budget service operations
#[async_trait]
pub trait BudgetServiceTrait: Send + Sync {
    async fn create_monthly_budget(&self, new_budget: NewMonthlyBudget) -> Result<String>;
    async fn get_monthly_budget(&self, budget_id: &str) -> Result<Option<MonthlyBudget>>;
    async fn get_monthly_budget_by_month(&self, month: &str) -> Result<Option<MonthlyBudget>>;
    async fn list_monthly_budgets(&self) -> Result<Vec<MonthlyBudget>>;
    async fn update_monthly_budget(
        &self,
        budget_id: &str,
        changes: MonthlyBudgetUpdate,
    ) -> Result<Option<MonthlyBudget>>;
    async fn delete_monthly_budget(&self, budget_id: &str) -> Result<usize>;

    async fn add_category_budget(&self, new_budget: NewCategoryBudget) -> Result<String>;
    async fn get_category_budget(&self, budget_id: &str) -> Result<Option<CategoryBudget>>;
    async fn get_category_budgets(&self, monthly_budget_id: &str) -> Result<Vec<CategoryBudget>>;
    async fn delete_category_budget(&self, budget_id: &str) -> Result<usize>;

    /// `None` when no budget exists for the month.
    async fn get_budget_vs_actual(&self, month: &str) -> Result<Option<BudgetVsActual>>;
}
