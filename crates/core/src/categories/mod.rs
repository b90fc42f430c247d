//! Item categories used to bucket spending.

mod categories_model;

pub use categories_model::Category;
