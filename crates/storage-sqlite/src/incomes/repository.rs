use async_trait::async_trait;
use diesel::prelude::*;

use receipt_tracker_core::incomes::{Income, IncomeRepositoryTrait, NewIncome};
use receipt_tracker_core::{Page, Result};

use super::model::{IncomeDB, NewIncomeDB};
use crate::db::Database;
use crate::errors::IntoCore;
use crate::schema::incomes;
use crate::utils::{new_id, now_utc};

pub struct IncomeRepository {
    db: Database,
}

impl IncomeRepository {
    pub fn new(db: Database) -> Self {
        IncomeRepository { db }
    }
}

#[async_trait]
impl IncomeRepositoryTrait for IncomeRepository {
    async fn insert_income(&self, new_income: NewIncome) -> Result<String> {
        self.db
            .write(move |conn| {
                let row = NewIncomeDB::new(new_id(), new_income, now_utc());
                diesel::insert_into(incomes::table)
                    .values(&row)
                    .execute(conn)
                    .into_core()?;
                Ok(row.id)
            })
            .await
    }

    async fn get_income_by_id(&self, income_id: &str) -> Result<Option<Income>> {
        let income_id = income_id.to_string();
        self.db
            .read(move |conn| {
                incomes::table
                    .find(income_id)
                    .select(IncomeDB::as_select())
                    .first::<IncomeDB>(conn)
                    .optional()
                    .into_core()?
                    .map(Income::try_from)
                    .transpose()
            })
            .await
    }

    async fn list_incomes(&self, page: Page) -> Result<Vec<Income>> {
        self.db
            .read(move |conn| {
                incomes::table
                    .select(IncomeDB::as_select())
                    .order((
                        incomes::date.desc(),
                        incomes::created_at.desc(),
                        incomes::id.desc(),
                    ))
                    .limit(i64::from(page.limit))
                    .offset(i64::from(page.offset))
                    .load::<IncomeDB>(conn)
                    .into_core()?
                    .into_iter()
                    .map(Income::try_from)
                    .collect()
            })
            .await
    }

    async fn delete_income(&self, income_id: &str) -> Result<usize> {
        let income_id = income_id.to_string();
        self.db
            .write(move |conn| {
                diesel::delete(incomes::table.find(income_id))
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
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_income_lifecycle() {
        let dir = tempdir().unwrap();
        let db = Database::open(&StorageConfig::new(dir.path().join("incomes.db"))).unwrap();
        db.initialize().await.unwrap();
        let repo = IncomeRepository::new(db);

        let salary = repo
            .insert_income(NewIncome {
                amount: dec!(2500.00),
                date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
                source: "Salary".to_string(),
            })
            .await
            .unwrap();
        repo.insert_income(NewIncome {
            amount: dec!(120.35),
            date: NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
            source: "Refund".to_string(),
        })
        .await
        .unwrap();

        let loaded = repo.get_income_by_id(&salary).await.unwrap().unwrap();
        assert_eq!(loaded.amount, dec!(2500.00));
        assert_eq!(loaded.source, "Salary");

        let listed = repo.list_incomes(Page::default()).await.unwrap();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].source, "Refund");

        assert_eq!(repo.delete_income(&salary).await.unwrap(), 1);
        assert!(repo.get_income_by_id(&salary).await.unwrap().is_none());
        assert_eq!(repo.delete_income(&salary).await.unwrap(), 0);
    }
}
