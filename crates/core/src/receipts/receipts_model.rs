//! Receipt and item domain models.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::categories::Category;

/// A single purchase event.
///
/// `total` is whatever the caller recorded; it is not derived from the items
/// and may differ from their sum.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    pub id: String,
    pub date: NaiveDate,
    pub store: String,
    pub total: Decimal,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Input model for creating a new receipt
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewReceipt {
    pub date: NaiveDate,
    pub store: String,
    pub total: Decimal,
}

/// One line of a receipt.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: String,
    pub receipt_id: String,
    pub name: String,
    pub price: Decimal,
    pub category: Category,
    pub necessary: bool,
    pub created_at: NaiveDateTime,
}

/// Input model for adding an item to an existing receipt
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewItem {
    pub receipt_id: String,
    pub name: String,
    pub price: Decimal,
    pub category: Category,
    pub necessary: bool,
}

/// Item input for `insert_receipt_with_items`, before the receipt id exists.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewReceiptItem {
    pub name: String,
    pub price: Decimal,
    pub category: Category,
    pub necessary: bool,
}

impl NewReceiptItem {
    pub fn for_receipt(self, receipt_id: &str) -> NewItem {
        NewItem {
            receipt_id: receipt_id.to_string(),
            name: self.name,
            price: self.price,
            category: self.category,
            necessary: self.necessary,
        }
    }
}

/// A receipt together with its items in insertion order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptWithItems {
    #[serde(flatten)]
    pub receipt: Receipt,
    pub items: Vec<Item>,
}
