use std::sync::Arc;

use async_trait::async_trait;
use log::debug;

use super::receipts_model::{Item, NewItem, NewReceipt, NewReceiptItem, Receipt, ReceiptWithItems};
use super::receipts_traits::{ReceiptRepositoryTrait, ReceiptServiceTrait};
use crate::errors::{Result, ValidationError};
use crate::page::Page;

pub struct ReceiptService {
    repository: Arc<dyn ReceiptRepositoryTrait>,
}

impl ReceiptService {
    pub fn new(repository: Arc<dyn ReceiptRepositoryTrait>) -> Self {
        ReceiptService { repository }
    }

    fn require_text(field: &str, value: &str) -> Result<()> {
        if value.trim().is_empty() {
            return Err(ValidationError::InvalidInput(format!("{} must not be empty", field)).into());
        }
        Ok(())
    }
}

#[async_trait]
impl ReceiptServiceTrait for ReceiptService {
    async fn create_receipt(&self, new_receipt: NewReceipt) -> Result<String> {
        Self::require_text("store", &new_receipt.store)?;
        self.repository.insert_receipt(new_receipt).await
    }

    async fn create_receipt_with_items(
        &self,
        new_receipt: NewReceipt,
        items: Vec<NewReceiptItem>,
    ) -> Result<String> {
        Self::require_text("store", &new_receipt.store)?;
        for item in &items {
            Self::require_text("item name", &item.name)?;
        }
        debug!(
            "Creating receipt for '{}' on {} with {} items",
            new_receipt.store,
            new_receipt.date,
            items.len()
        );
        self.repository
            .insert_receipt_with_items(new_receipt, items)
            .await
    }

    async fn get_receipt(&self, receipt_id: &str) -> Result<Option<Receipt>> {
        self.repository.get_receipt_by_id(receipt_id).await
    }

    async fn get_receipt_with_items(&self, receipt_id: &str) -> Result<Option<ReceiptWithItems>> {
        let Some(receipt) = self.repository.get_receipt_by_id(receipt_id).await? else {
            return Ok(None);
        };
        let items = self.repository.get_items_by_receipt_id(receipt_id).await?;
        Ok(Some(ReceiptWithItems { receipt, items }))
    }

    async fn list_receipts(&self, page: Page) -> Result<Vec<Receipt>> {
        self.repository.list_receipts(page).await
    }

    async fn delete_receipt(&self, receipt_id: &str) -> Result<usize> {
        self.repository.delete_receipt(receipt_id).await
    }

    async fn add_item(&self, new_item: NewItem) -> Result<String> {
        Self::require_text("item name", &new_item.name)?;
        self.repository.insert_item(new_item).await
    }

    async fn get_item(&self, item_id: &str) -> Result<Option<Item>> {
        self.repository.get_item_by_id(item_id).await
    }

    async fn get_items(&self, receipt_id: &str) -> Result<Vec<Item>> {
        self.repository.get_items_by_receipt_id(receipt_id).await
    }

    async fn delete_item(&self, item_id: &str) -> Result<usize> {
        self.repository.delete_item(item_id).await
    }
}
