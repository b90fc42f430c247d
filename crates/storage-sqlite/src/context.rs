//! Wires the SQLite repositories into the core services.

use std::sync::Arc;

use log::info;

use receipt_tracker_core::budgets::{BudgetService, BudgetServiceTrait};
use receipt_tracker_core::incomes::{IncomeService, IncomeServiceTrait};
use receipt_tracker_core::receipts::{ReceiptService, ReceiptServiceTrait};
use receipt_tracker_core::statistics::{StatisticsService, StatisticsServiceTrait};
use receipt_tracker_core::Result;

use crate::budgets::BudgetRepository;
use crate::config::StorageConfig;
use crate::db::Database;
use crate::incomes::IncomeRepository;
use crate::receipts::ReceiptRepository;
use crate::statistics::StatisticsRepository;

pub struct ServiceContext {
    database: Database,

    // Services
    pub receipt_service: Arc<dyn ReceiptServiceTrait>,
    pub income_service: Arc<dyn IncomeServiceTrait>,
    pub budget_service: Arc<dyn BudgetServiceTrait>,
    pub statistics_service: Arc<dyn StatisticsServiceTrait>,
}

impl ServiceContext {
    /// Opens the store and builds every service on top of it.
    ///
    /// Services return `NotReady` until [`ServiceContext::initialize`] runs.
    pub fn open(config: &StorageConfig) -> Result<Self> {
        let database = Database::open(config)?;

        let receipt_repo = Arc::new(ReceiptRepository::new(database.clone()));
        let income_repo = Arc::new(IncomeRepository::new(database.clone()));
        let budget_repo = Arc::new(BudgetRepository::new(database.clone()));
        let statistics_repo = Arc::new(StatisticsRepository::new(database.clone()));

        let statistics_service: Arc<dyn StatisticsServiceTrait> =
            Arc::new(StatisticsService::new(statistics_repo));
        let receipt_service = Arc::new(ReceiptService::new(receipt_repo));
        let income_service = Arc::new(IncomeService::new(income_repo));
        let budget_service = Arc::new(BudgetService::new(
            budget_repo,
            statistics_service.clone(),
        ));

        info!("Service context ready for {}", database.path());
        Ok(ServiceContext {
            database,
            receipt_service,
            income_service,
            budget_service,
            statistics_service,
        })
    }

    pub async fn initialize(&self) -> Result<()> {
        self.database.initialize().await
    }

    pub async fn reset(&self) -> Result<()> {
        self.database.reset().await
    }

    pub fn is_ready(&self) -> bool {
        self.database.is_ready()
    }

    pub fn database(&self) -> &Database {
        &self.database
    }

    pub fn receipt_service(&self) -> Arc<dyn ReceiptServiceTrait> {
        Arc::clone(&self.receipt_service)
    }

    pub fn income_service(&self) -> Arc<dyn IncomeServiceTrait> {
        Arc::clone(&self.income_service)
    }

    pub fn budget_service(&self) -> Arc<dyn BudgetServiceTrait> {
        Arc::clone(&self.budget_service)
    }

    pub fn statistics_service(&self) -> Arc<dyn StatisticsServiceTrait> {
        Arc::clone(&self.statistics_service)
    }
}
