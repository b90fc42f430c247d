//! Spending statistics - aggregation over date ranges.

mod statistics_model;
mod statistics_service;
mod statistics_traits;

pub use statistics_model::{CategoryTotals, SpendingSummary};
pub use statistics_service::StatisticsService;
pub use statistics_traits::{StatisticsRepositoryTrait, StatisticsServiceTrait};
