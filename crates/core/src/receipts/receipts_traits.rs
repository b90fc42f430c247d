use async_trait::async_trait;

use crate::errors::Result;
use crate::page::Page;
use crate::receipts::receipts_model::{
    Item, NewItem, NewReceipt, NewReceiptItem, Receipt, ReceiptWithItems,
};

/// Trait for receipt and item repository operations
#[async_trait]
pub trait ReceiptRepositoryTrait: Send + Sync {
    async fn insert_receipt(&self, new_receipt: NewReceipt) -> Result<String>;

    /// Persists the receipt and all of its items in one transaction.
    async fn insert_receipt_with_items(
        &self,
        new_receipt: NewReceipt,
        items: Vec<NewReceiptItem>,
    ) -> Result<String>;

    async fn get_receipt_by_id(&self, receipt_id: &str) -> Result<Option<Receipt>>;

    /// Newest receipts first, ordered by date.
    async fn list_receipts(&self, page: Page) -> Result<Vec<Receipt>>;

    /// Deletes the receipt and, through the cascading key, its items.
    async fn delete_receipt(&self, receipt_id: &str) -> Result<usize>;

    async fn insert_item(&self, new_item: NewItem) -> Result<String>;
    async fn get_item_by_id(&self, item_id: &str) -> Result<Option<Item>>;

    /// Items of a receipt in the order they were inserted.
    async fn get_items_by_receipt_id(&self, receipt_id: &str) -> Result<Vec<Item>>;

    async fn delete_item(&self, item_id: &str) -> Result<usize>;
}

/// Trait for receipt service operations
#[async_trait]
pub trait ReceiptServiceTrait: Send + Sync {
    async fn create_receipt(&self, new_receipt: NewReceipt) -> Result<String>;
    async fn create_receipt_with_items(
        &self,
        new_receipt: NewReceipt,
        items: Vec<NewReceiptItem>,
    ) -> Result<String>;
    async fn get_receipt(&self, receipt_id: &str) -> Result<Option<Receipt>>;
    async fn get_receipt_with_items(&self, receipt_id: &str) -> Result<Option<ReceiptWithItems>>;
    async fn list_receipts(&self, page: Page) -> Result<Vec<Receipt>>;
    async fn delete_receipt(&self, receipt_id: &str) -> Result<usize>;

    async fn add_item(&self, new_item: NewItem) -> Result<String>;
    async fn get_item(&self, item_id: &str) -> Result<Option<Item>>;
    async fn get_items(&self, receipt_id: &str) -> Result<Vec<Item>>;
    async fn delete_item(&self, item_id: &str) -> Result<usize>;
}
