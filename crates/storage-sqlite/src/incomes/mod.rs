//! SQLite storage implementation for incomes.

mod model;
mod repository;

pub use model::{IncomeDB, NewIncomeDB};
pub use repository::IncomeRepository;
