use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use receipt_tracker_core::errors::Error;
use receipt_tracker_core::incomes::{Income, NewIncome};

use crate::utils::{decimal_from_db, decimal_to_db};

#[derive(
    Queryable, Identifiable, Selectable, PartialEq, Serialize, Deserialize, Debug, Clone,
)]
#[diesel(table_name = crate::schema::incomes)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct IncomeDB {
    pub id: String,
    pub amount: String,
    pub date: NaiveDate,
    pub source: String,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::incomes)]
#[serde(rename_all = "camelCase")]
pub struct NewIncomeDB {
    pub id: String,
    pub amount: String,
    pub date: NaiveDate,
    pub source: String,
    pub created_at: NaiveDateTime,
}

impl NewIncomeDB {
    pub fn new(id: String, income: NewIncome, now: NaiveDateTime) -> Self {
        NewIncomeDB {
            id,
            amount: decimal_to_db(income.amount),
            date: income.date,
            source: income.source,
            created_at: now,
        }
    }
}

impl TryFrom<IncomeDB> for Income {
    type Error = Error;

    fn try_from(db: IncomeDB) -> Result<Self, Self::Error> {
        Ok(Self {
            amount: decimal_from_db(&db.amount)?,
            id: db.id,
            date: db.date,
            source: db.source,
            created_at: db.created_at,
        })
    }
}
