//! Database models for receipts and items.

use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use receipt_tracker_core::errors::Error;
use receipt_tracker_core::receipts::{Item, NewItem, NewReceipt, Receipt};

use crate::utils::{category_from_db, decimal_from_db, decimal_to_db, flag_from_db, flag_to_db};

#[derive(
    Queryable, Identifiable, Selectable, PartialEq, Serialize, Deserialize, Debug, Clone,
)]
#[diesel(table_name = crate::schema::receipts)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct ReceiptDB {
    pub id: String,
    pub date: NaiveDate,
    pub store: String,
    pub total: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::receipts)]
#[serde(rename_all = "camelCase")]
pub struct NewReceiptDB {
    pub id: String,
    pub date: NaiveDate,
    pub store: String,
    pub total: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl NewReceiptDB {
    pub fn new(id: String, receipt: NewReceipt, now: NaiveDateTime) -> Self {
        NewReceiptDB {
            id,
            date: receipt.date,
            store: receipt.store,
            total: decimal_to_db(receipt.total),
            created_at: now,
            updated_at: now,
        }
    }
}

#[derive(
    Queryable,
    Identifiable,
    Associations,
    Selectable,
    PartialEq,
    Serialize,
    Deserialize,
    Debug,
    Clone,
)]
#[diesel(belongs_to(ReceiptDB, foreign_key = receipt_id))]
#[diesel(table_name = crate::schema::items)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct ItemDB {
    pub id: String,
    pub receipt_id: String,
    pub name: String,
    pub price: String,
    pub category: String,
    pub necessary: i32,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::items)]
#[serde(rename_all = "camelCase")]
pub struct NewItemDB {
    pub id: String,
    pub receipt_id: String,
    pub name: String,
    pub price: String,
    pub category: String,
    pub necessary: i32,
    pub created_at: NaiveDateTime,
}

impl NewItemDB {
    pub fn new(id: String, item: NewItem, now: NaiveDateTime) -> Self {
        NewItemDB {
            id,
            receipt_id: item.receipt_id,
            name: item.name,
            price: decimal_to_db(item.price),
            category: item.category.as_str().to_string(),
            necessary: flag_to_db(item.necessary),
            created_at: now,
        }
    }
}

// Conversion to domain models
impl TryFrom<ReceiptDB> for Receipt {
    type Error = Error;

    fn try_from(db: ReceiptDB) -> Result<Self, Self::Error> {
        Ok(Self {
            total: decimal_from_db(&db.total)?,
            id: db.id,
            date: db.date,
            store: db.store,
            created_at: db.created_at,
            updated_at: db.updated_at,
        })
    }
}

impl TryFrom<ItemDB> for Item {
    type Error = Error;

    fn try_from(db: ItemDB) -> Result<Self, Self::Error> {
        Ok(Self {
            price: decimal_from_db(&db.price)?,
            category: category_from_db(&db.category)?,
            necessary: flag_from_db(db.necessary)?,
            id: db.id,
            receipt_id: db.receipt_id,
            name: db.name,
            created_at: db.created_at,
        })
    }
}
