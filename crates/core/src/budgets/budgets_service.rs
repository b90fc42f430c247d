use std::sync::Arc;

use async_trait::async_trait;
use log::{debug, info};
use rust_decimal::Decimal;

use super::budgets_model::{
    BudgetVsActual, CategoryBudget, CategoryBudgetVsActual, MonthlyBudget, MonthlyBudgetUpdate,
    NewCategoryBudget, NewMonthlyBudget,
};
use super::budgets_traits::{BudgetRepositoryTrait, BudgetServiceTrait};
use crate::categories::Category;
use crate::errors::Result;
use crate::statistics::{CategoryTotals, StatisticsServiceTrait};
use crate::utils::decimal_utils::checked_sub;
use crate::utils::time_utils::{month_bounds, parse_month};

pub struct BudgetService {
    repository: Arc<dyn BudgetRepositoryTrait>,
    statistics_service: Arc<dyn StatisticsServiceTrait>,
}

impl BudgetService {
    pub fn new(
        repository: Arc<dyn BudgetRepositoryTrait>,
        statistics_service: Arc<dyn StatisticsServiceTrait>,
    ) -> Self {
        BudgetService {
            repository,
            statistics_service,
        }
    }
}

#[async_trait]
impl BudgetServiceTrait for BudgetService {
    async fn create_monthly_budget(&self, new_budget: NewMonthlyBudget) -> Result<String> {
        parse_month(&new_budget.month)?;
        self.repository.insert_monthly_budget(new_budget).await
    }

    async fn get_monthly_budget(&self, budget_id: &str) -> Result<Option<MonthlyBudget>> {
        self.repository.get_monthly_budget_by_id(budget_id).await
    }

    async fn get_monthly_budget_by_month(&self, month: &str) -> Result<Option<MonthlyBudget>> {
        parse_month(month)?;
        self.repository.get_monthly_budget_by_month(month).await
    }

    async fn list_monthly_budgets(&self) -> Result<Vec<MonthlyBudget>> {
        self.repository.list_monthly_budgets().await
    }

    async fn update_monthly_budget(
        &self,
        budget_id: &str,
        changes: MonthlyBudgetUpdate,
    ) -> Result<Option<MonthlyBudget>> {
        if let Some(month) = &changes.month {
            parse_month(month)?;
        }
        self.repository
            .update_monthly_budget(budget_id, changes)
            .await
    }

    async fn delete_monthly_budget(&self, budget_id: &str) -> Result<usize> {
        let deleted = self.repository.delete_monthly_budget(budget_id).await?;
        if deleted > 0 {
            info!("Deleted monthly budget {} and its category budgets", budget_id);
        }
        Ok(deleted)
    }

    async fn add_category_budget(&self, new_budget: NewCategoryBudget) -> Result<String> {
        self.repository.insert_category_budget(new_budget).await
    }

    async fn get_category_budget(&self, budget_id: &str) -> Result<Option<CategoryBudget>> {
        self.repository.get_category_budget_by_id(budget_id).await
    }

    async fn get_category_budgets(&self, monthly_budget_id: &str) -> Result<Vec<CategoryBudget>> {
        self.repository.get_category_budgets(monthly_budget_id).await
    }

    async fn delete_category_budget(&self, budget_id: &str) -> Result<usize> {
        self.repository.delete_category_budget(budget_id).await
    }

    async fn get_budget_vs_actual(&self, month: &str) -> Result<Option<BudgetVsActual>> {
        let (start_date, end_date) = month_bounds(month)?;
        let Some(budget) = self.repository.get_monthly_budget_by_month(month).await? else {
            debug!("No monthly budget for {}", month);
            return Ok(None);
        };

        let allocations = CategoryTotals::try_from_rows(
            self.repository
                .get_category_budgets(&budget.id)
                .await?
                .into_iter()
                .map(|b| (b.category, b.allocated_amount)),
        )?;
        let spent = self
            .statistics_service
            .total_spent_by_category(start_date, end_date)
            .await?;
        let total_spent = self
            .statistics_service
            .total_spent(start_date, end_date)
            .await?;

        let by_category = Category::ALL
            .iter()
            .map(|&category| -> Result<CategoryBudgetVsActual> {
                let allocated = allocations[category];
                let actual = spent[category];
                Ok(CategoryBudgetVsActual {
                    category,
                    allocated,
                    actual,
                    remaining: checked_sub(allocated, actual)?,
                    is_over_budget: actual > allocated,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let spendable = budget.spendable()?;
        let total_allocated = allocations.total()?;
        Ok(Some(BudgetVsActual {
            month: budget.month,
            start_date,
            end_date,
            spendable,
            total_allocated,
            total_spent,
            unallocated: checked_sub(spendable, total_allocated)?.max(Decimal::ZERO),
            by_category,
        }))
    }
}
