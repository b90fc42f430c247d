use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::categories::Category;
use crate::errors::Result;
use crate::statistics::statistics_model::{CategoryTotals, SpendingSummary};

/// Raw spending rows for an inclusive date range.
///
/// Implementations only select; summing happens in `StatisticsService` with
/// decimal arithmetic.
#[async_trait]
pub trait StatisticsRepositoryTrait: Send + Sync {
    /// `total` of every receipt dated within `[start_date, end_date]`.
    async fn get_receipt_totals(&self, start_date: NaiveDate, end_date: NaiveDate)
        -> Result<Vec<Decimal>>;

    /// `(category, price)` of every item whose receipt is dated within the range.
    async fn get_item_spending(
        &self,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<Vec<(Category, Decimal)>>;
}

/// Trait for spending statistics
#[async_trait]
pub trait StatisticsServiceTrait: Send + Sync {
    async fn total_spent(&self, start_date: NaiveDate, end_date: NaiveDate) -> Result<Decimal>;
    async fn total_spent_by_category(
        &self,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<CategoryTotals>;
    async fn get_spending_summary(
        &self,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<SpendingSummary>;
    /// Summary for a `YYYY-MM` month.
    async fn get_monthly_summary(&self, month: &str) -> Result<SpendingSummary>;
}
