//! Budgets module - monthly budgets and their per-category allocations.

mod budgets_model;
mod budgets_service;
mod budgets_traits;

pub use budgets_model::{
    BudgetVsActual, CategoryBudget, CategoryBudgetVsActual, MonthlyBudget, MonthlyBudgetUpdate,
    NewCategoryBudget, NewMonthlyBudget,
};
pub use budgets_service::BudgetService;
pub use budgets_traits::{BudgetRepositoryTrait, BudgetServiceTrait};
