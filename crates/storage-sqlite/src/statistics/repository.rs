use async_trait::async_trait;
use chrono::NaiveDate;
use diesel::prelude::*;
use rust_decimal::Decimal;

use receipt_tracker_core::statistics::StatisticsRepositoryTrait;
use receipt_tracker_core::{Category, Result};

use crate::db::Database;
use crate::errors::IntoCore;
use crate::schema::{items, receipts};
use crate::utils::{category_from_db, decimal_from_db};

/// Reads raw amounts for a date range. Summation happens in decimal
/// arithmetic on the service side, never in SQL.
pub struct StatisticsRepository {
    db: Database,
}

impl StatisticsRepository {
    pub fn new(db: Database) -> Self {
        StatisticsRepository { db }
    }
}

#[async_trait]
impl StatisticsRepositoryTrait for StatisticsRepository {
    async fn get_receipt_totals(
        &self,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<Vec<Decimal>> {
        self.db
            .read(move |conn| {
                receipts::table
                    .filter(receipts::date.between(start_date, end_date))
                    .select(receipts::total)
                    .load::<String>(conn)
                    .into_core()?
                    .iter()
                    .map(|total| decimal_from_db(total))
                    .collect()
            })
            .await
    }

    async fn get_item_spending(
        &self,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<Vec<(Category, Decimal)>> {
        self.db
            .read(move |conn| {
                items::table
                    .inner_join(receipts::table)
                    .filter(receipts::date.between(start_date, end_date))
                    .select((items::category, items::price))
                    .load::<(String, String)>(conn)
                    .into_core()?
                    .iter()
                    .map(|(category, price)| -> Result<(Category, Decimal)> {
                        Ok((category_from_db(category)?, decimal_from_db(price)?))
                    })
                    .collect()
            })
            .await
    }
}
