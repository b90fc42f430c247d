use chrono::NaiveDate;
use receipt_tracker_core::receipts::{NewReceipt, NewReceiptItem};
use receipt_tracker_core::Category;
use receipt_tracker_storage_sqlite::{ServiceContext, StorageConfig};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tempfile::TempDir;

/// A fresh store in its own temporary directory. Keep the `TempDir` alive
/// for as long as the context is used.
pub async fn open_store() -> (TempDir, ServiceContext) {
    let (dir, ctx) = open_uninitialized_store();
    ctx.initialize().await.unwrap();
    (dir, ctx)
}

pub fn open_uninitialized_store() -> (TempDir, ServiceContext) {
    let dir = tempfile::tempdir().unwrap();
    let ctx = ServiceContext::open(&StorageConfig::new(dir.path().join("receipts.db"))).unwrap();
    (dir, ctx)
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn market_receipt() -> NewReceipt {
    NewReceipt {
        date: date(2024, 3, 5),
        store: "Market".to_string(),
        total: dec!(42.50),
    }
}

pub fn item(name: &str, price: Decimal, category: Category, necessary: bool) -> NewReceiptItem {
    NewReceiptItem {
        name: name.to_string(),
        price,
        category,
        necessary,
    }
}

pub fn market_items() -> Vec<NewReceiptItem> {
    vec![
        item("Apples", dec!(12.00), Category::Vegetables, true),
        item("Soda", dec!(5.50), Category::Beverages, false),
    ]
}
