//! Receipts module - domain models, services, and traits.

mod receipts_model;
mod receipts_service;
mod receipts_traits;

pub use receipts_model::{Item, NewItem, NewReceipt, NewReceiptItem, Receipt, ReceiptWithItems};
pub use receipts_service::ReceiptService;
pub use receipts_traits::{ReceiptRepositoryTrait, ReceiptServiceTrait};
