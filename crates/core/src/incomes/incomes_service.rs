use std::sync::Arc;

use async_trait::async_trait;

use super::incomes_model::{Income, NewIncome};
use super::incomes_traits::{IncomeRepositoryTrait, IncomeServiceTrait};
use crate::errors::{Result, ValidationError};
use crate::page::Page;

pub struct IncomeService {
    repository: Arc<dyn IncomeRepositoryTrait>,
}

impl IncomeService {
    pub fn new(repository: Arc<dyn IncomeRepositoryTrait>) -> Self {
        IncomeService { repository }
    }
}

#[async_trait]
impl IncomeServiceTrait for IncomeService {
    async fn record_income(&self, new_income: NewIncome) -> Result<String> {
        if new_income.source.trim().is_empty() {
            return Err(ValidationError::InvalidInput("source must not be empty".to_string()).into());
        }
        self.repository.insert_income(new_income).await
    }

    async fn get_income(&self, income_id: &str) -> Result<Option<Income>> {
        self.repository.get_income_by_id(income_id).await
    }

    async fn list_incomes(&self, page: Page) -> Result<Vec<Income>> {
        self.repository.list_incomes(page).await
    }

    async fn delete_income(&self, income_id: &str) -> Result<usize> {
        self.repository.delete_income(income_id).await
    }
}
