use async_trait::async_trait;
use diesel::prelude::*;
use diesel::SqliteConnection;
use log::debug;

use receipt_tracker_core::receipts::{
    Item, NewItem, NewReceipt, NewReceiptItem, Receipt, ReceiptRepositoryTrait,
};
use receipt_tracker_core::{Page, Result};

use super::model::{ItemDB, NewItemDB, NewReceiptDB, ReceiptDB};
use crate::db::Database;
use crate::errors::IntoCore;
use crate::schema::{items, receipts};
use crate::utils::{new_id, now_utc};

pub struct ReceiptRepository {
    db: Database,
}

impl ReceiptRepository {
    pub fn new(db: Database) -> Self {
        ReceiptRepository { db }
    }
}

fn insert_receipt_row(conn: &mut SqliteConnection, new_receipt: NewReceipt) -> Result<String> {
    let row = NewReceiptDB::new(new_id(), new_receipt, now_utc());
    diesel::insert_into(receipts::table)
        .values(&row)
        .execute(conn)
        .into_core()?;
    Ok(row.id)
}

fn insert_item_row(conn: &mut SqliteConnection, new_item: NewItem) -> Result<String> {
    let row = NewItemDB::new(new_id(), new_item, now_utc());
    diesel::insert_into(items::table)
        .values(&row)
        .execute(conn)
        .into_core()?;
    Ok(row.id)
}

#[async_trait]
impl ReceiptRepositoryTrait for ReceiptRepository {
    async fn insert_receipt(&self, new_receipt: NewReceipt) -> Result<String> {
        self.db
            .write(move |conn| insert_receipt_row(conn, new_receipt))
            .await
    }

    async fn insert_receipt_with_items(
        &self,
        new_receipt: NewReceipt,
        items: Vec<NewReceiptItem>,
    ) -> Result<String> {
        self.db
            .write(move |conn| {
                let receipt_id = insert_receipt_row(conn, new_receipt)?;
                let count = items.len();
                for item in items {
                    insert_item_row(conn, item.for_receipt(&receipt_id))?;
                }
                debug!("Inserted receipt {} with {} items", receipt_id, count);
                Ok(receipt_id)
            })
            .await
    }

    async fn get_receipt_by_id(&self, receipt_id: &str) -> Result<Option<Receipt>> {
        let receipt_id = receipt_id.to_string();
        self.db
            .read(move |conn| {
                receipts::table
                    .find(receipt_id)
                    .select(ReceiptDB::as_select())
                    .first::<ReceiptDB>(conn)
                    .optional()
                    .into_core()?
                    .map(Receipt::try_from)
                    .transpose()
            })
            .await
    }

    async fn list_receipts(&self, page: Page) -> Result<Vec<Receipt>> {
        self.db
            .read(move |conn| {
                receipts::table
                    .select(ReceiptDB::as_select())
                    .order((
                        receipts::date.desc(),
                        receipts::created_at.desc(),
                        receipts::id.desc(),
                    ))
                    .limit(i64::from(page.limit))
                    .offset(i64::from(page.offset))
                    .load::<ReceiptDB>(conn)
                    .into_core()?
                    .into_iter()
                    .map(Receipt::try_from)
                    .collect()
            })
            .await
    }

    async fn delete_receipt(&self, receipt_id: &str) -> Result<usize> {
        let receipt_id = receipt_id.to_string();
        self.db
            .write(move |conn| {
                let deleted = diesel::delete(receipts::table.find(&receipt_id))
                    .execute(conn)
                    .into_core()?;
                if deleted > 0 {
                    debug!("Deleted receipt {} and its items", receipt_id);
                }
                Ok(deleted)
            })
            .await
    }

    async fn insert_item(&self, new_item: NewItem) -> Result<String> {
        self.db
            .write(move |conn| insert_item_row(conn, new_item))
            .await
    }

    async fn get_item_by_id(&self, item_id: &str) -> Result<Option<Item>> {
        let item_id = item_id.to_string();
        self.db
            .read(move |conn| {
                items::table
                    .find(item_id)
                    .select(ItemDB::as_select())
                    .first::<ItemDB>(conn)
                    .optional()
                    .into_core()?
                    .map(Item::try_from)
                    .transpose()
            })
            .await
    }

    async fn get_items_by_receipt_id(&self, receipt_id: &str) -> Result<Vec<Item>> {
        let receipt_id = receipt_id.to_string();
        self.db
            .read(move |conn| {
                items::table
                    .filter(items::receipt_id.eq(receipt_id))
                    .select(ItemDB::as_select())
                    .order((items::created_at.asc(), items::id.asc()))
                    .load::<ItemDB>(conn)
                    .into_core()?
                    .into_iter()
                    .map(Item::try_from)
                    .collect()
            })
            .await
    }

    async fn delete_item(&self, item_id: &str) -> Result<usize> {
        let item_id = item_id.to_string();
        self.db
            .write(move |conn| {
                diesel::delete(items::table.find(item_id))
                    .execute(conn)
                    .into_core()
            })
            .await
    }
}
