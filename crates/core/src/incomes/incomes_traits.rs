use async_trait::async_trait;

use crate::errors::Result;
use crate::incomes::incomes_model::{Income, NewIncome};
use crate::page::Page;

/// Trait for income repository operations
#[async_trait]
pub trait IncomeRepositoryTrait: Send + Sync {
    async fn insert_income(&self, new_income: NewIncome) -> Result<String>;
    async fn get_income_by_id(&self, income_id: &str) -> Result<Option<Income>>;
    /// Newest incomes first, ordered by date.
    async fn list_incomes(&self, page: Page) -> Result<Vec<Income>>;
    async fn delete_income(&self, income_id: &str) -> Result<usize>;
}

/// Trait for income service operations
#[async_trait]
pub trait IncomeServiceTrait: Send + Sync {
    async fn record_income(&self, new_income: NewIncome) -> Result<String>;
    async fn get_income(&self, income_id: &str) -> Result<Option<Income>>;
    async fn list_incomes(&self, page: Page) -> Result<Vec<Income>>;
    async fn delete_income(&self, income_id: &str) -> Result<usize>;
}
