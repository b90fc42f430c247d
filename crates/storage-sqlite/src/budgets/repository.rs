use async_trait::async_trait;
use diesel::prelude::*;
use log::debug;

use receipt_tracker_core::budgets::{
    BudgetRepositoryTrait, CategoryBudget, MonthlyBudget, MonthlyBudgetUpdate, NewCategoryBudget,
    NewMonthlyBudget,
};
use receipt_tracker_core::Result;

use super::model::{
    CategoryBudgetDB, MonthlyBudgetChangesDB, MonthlyBudgetDB, NewCategoryBudgetDB,
    NewMonthlyBudgetDB,
};
use crate::db::Database;
use crate::errors::IntoCore;
use crate::schema::{category_budgets, monthly_budgets};
use crate::utils::{new_id, now_utc};

pub struct BudgetRepository {
    db: Database,
}

impl BudgetRepository {
    pub fn new(db: Database) -> Self {
        BudgetRepository { db }
    }
}

#[async_trait]
impl BudgetRepositoryTrait for BudgetRepository {
    async fn insert_monthly_budget(&self, new_budget: NewMonthlyBudget) -> Result<String> {
        self.db
            .write(move |conn| {
                let row = NewMonthlyBudgetDB::new(new_id(), new_budget, now_utc());
                diesel::insert_into(monthly_budgets::table)
                    .values(&row)
                    .execute(conn)
                    .into_core()?;
                Ok(row.id)
            })
            .await
    }

    async fn get_monthly_budget_by_id(&self, budget_id: &str) -> Result<Option<MonthlyBudget>> {
        let budget_id = budget_id.to_string();
        self.db
            .read(move |conn| {
                monthly_budgets::table
                    .find(budget_id)
                    .select(MonthlyBudgetDB::as_select())
                    .first::<MonthlyBudgetDB>(conn)
                    .optional()
                    .into_core()?
                    .map(MonthlyBudget::try_from)
                    .transpose()
            })
            .await
    }

    async fn get_monthly_budget_by_month(&self, month: &str) -> Result<Option<MonthlyBudget>> {
        let month = month.to_string();
        self.db
            .read(move |conn| {
                monthly_budgets::table
                    .filter(monthly_budgets::month.eq(month))
                    .select(MonthlyBudgetDB::as_select())
                    .first::<MonthlyBudgetDB>(conn)
                    .optional()
                    .into_core()?
                    .map(MonthlyBudget::try_from)
                    .transpose()
            })
            .await
    }

    async fn list_monthly_budgets(&self) -> Result<Vec<MonthlyBudget>> {
        self.db
            .read(|conn| {
                monthly_budgets::table
                    .select(MonthlyBudgetDB::as_select())
                    .order(monthly_budgets::month.desc())
                    .load::<MonthlyBudgetDB>(conn)
                    .into_core()?
                    .into_iter()
                    .map(MonthlyBudget::try_from)
                    .collect()
            })
            .await
    }

    async fn update_monthly_budget(
        &self,
        budget_id: &str,
        changes: MonthlyBudgetUpdate,
    ) -> Result<Option<MonthlyBudget>> {
        if changes.is_empty() {
            debug!("Empty update for monthly budget {}, nothing written", budget_id);
            return self.get_monthly_budget_by_id(budget_id).await;
        }

        let budget_id = budget_id.to_string();
        self.db
            .write(move |conn| {
                diesel::update(monthly_budgets::table.find(budget_id))
                    .set(&MonthlyBudgetChangesDB::new(changes, now_utc()))
                    .returning(MonthlyBudgetDB::as_returning())
                    .get_result::<MonthlyBudgetDB>(conn)
                    .optional()
                    .into_core()?
                    .map(MonthlyBudget::try_from)
                    .transpose()
            })
            .await
    }

    async fn delete_monthly_budget(&self, budget_id: &str) -> Result<usize> {
        let budget_id = budget_id.to_string();
        self.db
            .write(move |conn| {
                diesel::delete(monthly_budgets::table.find(budget_id))
                    .execute(conn)
                    .into_core()
            })
            .await
    }

    async fn insert_category_budget(&self, new_budget: NewCategoryBudget) -> Result<String> {
        self.db
            .write(move |conn| {
                let row = NewCategoryBudgetDB::new(new_id(), new_budget);
                diesel::insert_into(category_budgets::table)
                    .values(&row)
                    .execute(conn)
                    .into_core()?;
                Ok(row.id)
            })
            .await
    }

    async fn get_category_budget_by_id(&self, budget_id: &str) -> Result<Option<CategoryBudget>> {
        let budget_id = budget_id.to_string();
        self.db
            .read(move |conn| {
                category_budgets::table
                    .find(budget_id)
                    .select(CategoryBudgetDB::as_select())
                    .first::<CategoryBudgetDB>(conn)
                    .optional()
                    .into_core()?
                    .map(CategoryBudget::try_from)
                    .transpose()
            })
            .await
    }

    async fn get_category_budgets(&self, monthly_budget_id: &str) -> Result<Vec<CategoryBudget>> {
        let monthly_budget_id = monthly_budget_id.to_string();
        self.db
            .read(move |conn| {
                category_budgets::table
                    .filter(category_budgets::monthly_budget_id.eq(monthly_budget_id))
                    .select(CategoryBudgetDB::as_select())
                    .order((category_budgets::category.asc(), category_budgets::id.asc()))
                    .load::<CategoryBudgetDB>(conn)
                    .into_core()?
                    .into_iter()
                    .map(CategoryBudget::try_from)
                    .collect()
            })
            .await
    }

    async fn delete_category_budget(&self, budget_id: &str) -> Result<usize> {
        let budget_id = budget_id.to_string();
        self.db
            .write(move |conn| {
                diesel::delete(category_budgets::table.find(budget_id))
                    .execute(conn)
                    .into_core()
            })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StorageConfig;
    use receipt_tracker_core::errors::{DatabaseError, Error};
    use receipt_tracker_core::Category;
    use rust_decimal_macros::dec;
    use tempfile::{tempdir, TempDir};

    async fn setup() -> (TempDir, BudgetRepository) {
        let dir = tempdir().unwrap();
        let db = Database::open(&StorageConfig::new(dir.path().join("budgets.db"))).unwrap();
        db.initialize().await.unwrap();
        (dir, BudgetRepository::new(db))
    }

    fn budget(month: &str) -> NewMonthlyBudget {
        NewMonthlyBudget {
            month: month.to_string(),
            income: dec!(2500.00),
            fixed_expenses: dec!(1200.00),
            savings_goal: dec!(300.00),
        }
    }

    #[tokio::test]
    async fn test_duplicate_month_is_unique_violation() {
        let (_dir, repo) = setup().await;
        repo.insert_monthly_budget(budget("2024-03")).await.unwrap();

        let err = repo.insert_monthly_budget(budget("2024-03")).await.unwrap_err();
        assert!(matches!(err, Error::Database(DatabaseError::UniqueViolation(_))));
    }

    #[tokio::test]
    async fn test_update_changes_only_given_fields() {
        let (_dir, repo) = setup().await;
        let id = repo.insert_monthly_budget(budget("2024-03")).await.unwrap();
        let before = repo.get_monthly_budget_by_id(&id).await.unwrap().unwrap();

        let after = repo
            .update_monthly_budget(
                &id,
                MonthlyBudgetUpdate {
                    savings_goal: Some(dec!(450.00)),
                    ..Default::default()
                },
            )
            .await
            .unwrap()
            .unwrap();

        assert_eq!(after.savings_goal, dec!(450.00));
        assert_eq!(after.income, before.income);
        assert_eq!(after.fixed_expenses, before.fixed_expenses);
        assert_eq!(after.month, before.month);
        assert_eq!(after.created_at, before.created_at);
        assert!(after.updated_at > before.updated_at);
    }

    #[tokio::test]
    async fn test_empty_update_writes_nothing() {
        let (_dir, repo) = setup().await;
        let id = repo.insert_monthly_budget(budget("2024-03")).await.unwrap();
        let before = repo.get_monthly_budget_by_id(&id).await.unwrap().unwrap();

        let after = repo
            .update_monthly_budget(&id, MonthlyBudgetUpdate::default())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(after, before);

        let missing = repo
            .update_monthly_budget("missing", MonthlyBudgetUpdate::default())
            .await
            .unwrap();
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn test_update_missing_budget_returns_none() {
        let (_dir, repo) = setup().await;
        let result = repo
            .update_monthly_budget(
                "missing",
                MonthlyBudgetUpdate {
                    income: Some(dec!(1.00)),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_deleting_monthly_budget_cascades() {
        let (_dir, repo) = setup().await;
        let id = repo.insert_monthly_budget(budget("2024-03")).await.unwrap();
        let food = repo
            .insert_category_budget(NewCategoryBudget {
                monthly_budget_id: id.clone(),
                category: Category::Food,
                allocated_amount: dec!(400.00),
            })
            .await
            .unwrap();

        assert_eq!(repo.get_category_budgets(&id).await.unwrap().len(), 1);
        assert_eq!(repo.delete_monthly_budget(&id).await.unwrap(), 1);
        assert!(repo.get_category_budget_by_id(&food).await.unwrap().is_none());
        assert!(repo.get_category_budgets(&id).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_category_budget_requires_monthly_budget() {
        let (_dir, repo) = setup().await;
        let err = repo
            .insert_category_budget(NewCategoryBudget {
                monthly_budget_id: "missing".to_string(),
                category: Category::Fuel,
                allocated_amount: dec!(50.00),
            })
            .await
            .unwrap_err();
        assert!(err.is_referential_integrity());
    }
}
