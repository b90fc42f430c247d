//! Income domain models.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Money received, independent of any receipt.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Income {
    pub id: String,
    pub amount: Decimal,
    pub date: NaiveDate,
    pub source: String,
    pub created_at: NaiveDateTime,
}

/// Input model for recording an income
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewIncome {
    pub amount: Decimal,
    pub date: NaiveDate,
    pub source: String,
}
