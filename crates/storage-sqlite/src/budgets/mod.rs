//! SQLite storage implementation for monthly and category budgets.

mod model;
mod repository;

pub use model::{
    CategoryBudgetDB, MonthlyBudgetChangesDB, MonthlyBudgetDB, NewCategoryBudgetDB,
    NewMonthlyBudgetDB,
};
pub use repository::BudgetRepository;
