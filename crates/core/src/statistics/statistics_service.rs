use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use log::debug;
use rust_decimal::Decimal;

use super::statistics_model::{CategoryTotals, SpendingSummary};
use super::statistics_traits::{StatisticsRepositoryTrait, StatisticsServiceTrait};
use crate::errors::Result;
use crate::utils::decimal_utils::checked_sum;
use crate::utils::time_utils::month_bounds;

pub struct StatisticsService {
    repository: Arc<dyn StatisticsRepositoryTrait>,
}

impl StatisticsService {
    pub fn new(repository: Arc<dyn StatisticsRepositoryTrait>) -> Self {
        StatisticsService { repository }
    }
}

#[async_trait]
impl StatisticsServiceTrait for StatisticsService {
    async fn total_spent(&self, start_date: NaiveDate, end_date: NaiveDate) -> Result<Decimal> {
        debug!("Total spent between {} and {}", start_date, end_date);
        let totals = self
            .repository
            .get_receipt_totals(start_date, end_date)
            .await?;
        checked_sum(totals)
    }

    async fn total_spent_by_category(
        &self,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<CategoryTotals> {
        debug!("Spending by category between {} and {}", start_date, end_date);
        let rows = self
            .repository
            .get_item_spending(start_date, end_date)
            .await?;
        CategoryTotals::try_from_rows(rows)
    }

    async fn get_spending_summary(
        &self,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<SpendingSummary> {
        let (total_spent, by_category) = futures::try_join!(
            self.total_spent(start_date, end_date),
            self.total_spent_by_category(start_date, end_date)
        )?;
        Ok(SpendingSummary {
            start_date,
            end_date,
            total_spent,
            by_category,
        })
    }

    async fn get_monthly_summary(&self, month: &str) -> Result<SpendingSummary> {
        let (start_date, end_date) = month_bounds(month)?;
        self.get_spending_summary(start_date, end_date).await
    }
}
