//! Range queries backing the spending statistics.

mod repository;

pub use repository::StatisticsRepository;
