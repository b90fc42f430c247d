//! SQLite storage implementation for receipts and their items.

mod model;
mod repository;

pub use model::{ItemDB, NewItemDB, NewReceiptDB, ReceiptDB};
pub use repository::ReceiptRepository;
