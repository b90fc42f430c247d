use std::collections::HashSet;

use diesel::connection::SimpleConnection;
use diesel::prelude::*;
use receipt_tracker_core::budgets::{MonthlyBudgetUpdate, NewCategoryBudget, NewMonthlyBudget};
use receipt_tracker_core::incomes::NewIncome;
use receipt_tracker_core::receipts::NewReceipt;
use receipt_tracker_core::errors::ValidationError;
use receipt_tracker_core::{Category, Error, Page};
use receipt_tracker_storage_sqlite::schema::items;
use receipt_tracker_storage_sqlite::{IntoCore, ServiceContext};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

mod common;
use common::{date, item, market_items, market_receipt, open_store, open_uninitialized_store};

async fn item_row_count(ctx: &ServiceContext) -> i64 {
    ctx.database()
        .read(|conn| items::table.count().get_result::<i64>(conn).into_core())
        .await
        .unwrap()
}

#[tokio::test]
async fn test_market_scenario_totals() {
    let (_dir, ctx) = open_store().await;
    ctx.receipt_service()
        .create_receipt_with_items(market_receipt(), market_items())
        .await
        .unwrap();

    let stats = ctx.statistics_service();
    let total = stats
        .total_spent(date(2024, 3, 1), date(2024, 3, 31))
        .await
        .unwrap();
    assert_eq!(total, dec!(42.50));

    let by_category = stats
        .total_spent_by_category(date(2024, 3, 1), date(2024, 3, 31))
        .await
        .unwrap();
    assert_eq!(by_category.iter().count(), 7);
    assert_eq!(by_category[Category::Vegetables], dec!(12.00));
    assert_eq!(by_category[Category::Beverages], dec!(5.50));
    for category in [
        Category::Sweets,
        Category::Food,
        Category::Fuel,
        Category::Household,
        Category::Other,
    ] {
        assert_eq!(by_category[category], Decimal::ZERO);
    }
    assert_eq!(by_category.total().unwrap(), dec!(17.50));
}

#[tokio::test]
async fn test_empty_range_totals_are_zero() {
    let (_dir, ctx) = open_store().await;
    let stats = ctx.statistics_service();

    let total = stats
        .total_spent(date(2023, 1, 1), date(2023, 12, 31))
        .await
        .unwrap();
    assert_eq!(total, Decimal::ZERO);

    let by_category = stats
        .total_spent_by_category(date(2023, 1, 1), date(2023, 12, 31))
        .await
        .unwrap();
    assert!(by_category.iter().all(|(_, amount)| amount == Decimal::ZERO));
    assert_eq!(by_category.iter().count(), 7);
}

#[tokio::test]
async fn test_cent_amounts_sum_exactly() {
    let (_dir, ctx) = open_store().await;
    let receipts = ctx.receipt_service();
    for _ in 0..10 {
        receipts
            .create_receipt_with_items(
                NewReceipt {
                    date: date(2024, 5, 2),
                    store: "Kiosk".to_string(),
                    total: dec!(0.10),
                },
                vec![item("Gum", dec!(0.10), Category::Sweets, false)],
            )
            .await
            .unwrap();
    }

    let summary = ctx
        .statistics_service()
        .get_monthly_summary("2024-05")
        .await
        .unwrap();
    assert_eq!(summary.total_spent, dec!(1.00));
    assert_eq!(summary.by_category[Category::Sweets], dec!(1.00));
}

#[tokio::test]
async fn test_receipt_and_items_round_trip() {
    let (_dir, ctx) = open_store().await;
    let receipts = ctx.receipt_service();
    let id = receipts
        .create_receipt_with_items(market_receipt(), market_items())
        .await
        .unwrap();
    assert!(!id.is_empty());

    let loaded = receipts.get_receipt_with_items(&id).await.unwrap().unwrap();
    assert_eq!(loaded.receipt.date, date(2024, 3, 5));
    assert_eq!(loaded.receipt.store, "Market");
    assert_eq!(loaded.receipt.total, dec!(42.50));

    let items: Vec<(String, Decimal, Category, bool)> = loaded
        .items
        .into_iter()
        .map(|i| (i.name, i.price, i.category, i.necessary))
        .collect();
    assert_eq!(
        items,
        vec![
            ("Apples".to_string(), dec!(12.00), Category::Vegetables, true),
            ("Soda".to_string(), dec!(5.50), Category::Beverages, false),
        ]
    );
}

#[tokio::test]
async fn test_deleting_receipt_removes_its_items() {
    let (_dir, ctx) = open_store().await;
    let receipts = ctx.receipt_service();
    let id = receipts
        .create_receipt_with_items(market_receipt(), market_items())
        .await
        .unwrap();
    let other = receipts
        .create_receipt_with_items(market_receipt(), market_items())
        .await
        .unwrap();

    assert_eq!(receipts.delete_receipt(&id).await.unwrap(), 1);

    assert!(receipts.get_receipt(&id).await.unwrap().is_none());
    assert!(receipts.get_items(&id).await.unwrap().is_empty());
    assert_eq!(receipts.get_items(&other).await.unwrap().len(), 2);
    assert_eq!(item_row_count(&ctx).await, 2);
}

#[tokio::test]
async fn test_compound_insert_is_all_or_nothing() {
    let (_dir, ctx) = open_store().await;
    ctx.database()
        .write(|conn| {
            conn.batch_execute(
                "CREATE TRIGGER fail_on_boom BEFORE INSERT ON items \
                 WHEN NEW.name = 'boom' \
                 BEGIN SELECT RAISE(ABORT, 'boom'); END;",
            )
            .into_core()
        })
        .await
        .unwrap();

    let receipts = ctx.receipt_service();
    let result = receipts
        .create_receipt_with_items(
            market_receipt(),
            vec![
                item("Apples", dec!(12.00), Category::Vegetables, true),
                item("Soda", dec!(5.50), Category::Beverages, false),
                item("boom", dec!(1.00), Category::Other, false),
            ],
        )
        .await;

    assert!(result.is_err());
    assert!(receipts.list_receipts(Page::default()).await.unwrap().is_empty());
    assert_eq!(item_row_count(&ctx).await, 0);

    // The writer keeps working after a rolled back job.
    let id = receipts
        .create_receipt_with_items(market_receipt(), market_items())
        .await
        .unwrap();
    assert_eq!(receipts.get_items(&id).await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_reset_behaves_like_fresh_store() {
    let (_dir, ctx) = open_store().await;
    let receipts = ctx.receipt_service();
    let receipt_id = receipts
        .create_receipt_with_items(market_receipt(), market_items())
        .await
        .unwrap();
    let income_id = ctx
        .income_service()
        .record_income(NewIncome {
            amount: dec!(2500.00),
            date: date(2024, 3, 1),
            source: "Salary".to_string(),
        })
        .await
        .unwrap();
    ctx.budget_service()
        .create_monthly_budget(NewMonthlyBudget {
            month: "2024-03".to_string(),
            income: dec!(2500.00),
            fixed_expenses: dec!(1200.00),
            savings_goal: dec!(300.00),
        })
        .await
        .unwrap();

    ctx.reset().await.unwrap();

    assert!(ctx.is_ready());
    assert!(receipts.get_receipt(&receipt_id).await.unwrap().is_none());
    assert!(receipts.list_receipts(Page::default()).await.unwrap().is_empty());
    assert!(ctx.income_service().get_income(&income_id).await.unwrap().is_none());
    assert!(ctx.budget_service().list_monthly_budgets().await.unwrap().is_empty());
    assert_eq!(item_row_count(&ctx).await, 0);

    receipts
        .create_receipt_with_items(market_receipt(), market_items())
        .await
        .unwrap();
    assert_eq!(receipts.list_receipts(Page::default()).await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_corrupt_stored_amount_is_a_validation_error() {
    let (_dir, ctx) = open_store().await;
    ctx.database()
        .write(|conn| {
            conn.batch_execute(
                "INSERT INTO receipts (id, date, store, total, created_at, updated_at) \
                 VALUES ('r1', '2024-03-05', 'Market', '12,50', \
                 '2024-03-05 00:00:00', '2024-03-05 00:00:00')",
            )
            .into_core()
        })
        .await
        .unwrap();

    let err = ctx.receipt_service().get_receipt("r1").await.unwrap_err();
    assert!(matches!(
        err,
        Error::Validation(ValidationError::DecimalParse(_))
    ));
    let err = ctx
        .statistics_service()
        .total_spent(date(2024, 3, 1), date(2024, 3, 31))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        Error::Validation(ValidationError::DecimalParse(_))
    ));
}

#[tokio::test]
async fn test_calls_before_initialize_are_not_ready() {
    let (_dir, ctx) = open_uninitialized_store();

    let err = ctx
        .receipt_service()
        .list_receipts(Page::default())
        .await
        .unwrap_err();
    assert!(err.is_not_ready());
    let err = ctx
        .statistics_service()
        .total_spent(date(2024, 3, 1), date(2024, 3, 31))
        .await
        .unwrap_err();
    assert!(err.is_not_ready());

    ctx.initialize().await.unwrap();
    ctx.initialize().await.unwrap();
    assert!(ctx
        .receipt_service()
        .list_receipts(Page::default())
        .await
        .unwrap()
        .is_empty());
}

#[tokio::test]
async fn test_empty_budget_update_keeps_updated_at() {
    let (_dir, ctx) = open_store().await;
    let budgets = ctx.budget_service();
    let id = budgets
        .create_monthly_budget(NewMonthlyBudget {
            month: "2024-03".to_string(),
            income: dec!(2500.00),
            fixed_expenses: dec!(1200.00),
            savings_goal: dec!(300.00),
        })
        .await
        .unwrap();
    let before = budgets.get_monthly_budget(&id).await.unwrap().unwrap();

    budgets
        .update_monthly_budget(&id, MonthlyBudgetUpdate::default())
        .await
        .unwrap();

    let after = budgets.get_monthly_budget(&id).await.unwrap().unwrap();
    assert_eq!(after, before);
}

#[tokio::test]
async fn test_budget_vs_actual_end_to_end() {
    let (_dir, ctx) = open_store().await;
    ctx.receipt_service()
        .create_receipt_with_items(market_receipt(), market_items())
        .await
        .unwrap();
    let budgets = ctx.budget_service();
    let budget_id = budgets
        .create_monthly_budget(NewMonthlyBudget {
            month: "2024-03".to_string(),
            income: dec!(2500.00),
            fixed_expenses: dec!(1200.00),
            savings_goal: dec!(300.00),
        })
        .await
        .unwrap();
    budgets
        .add_category_budget(NewCategoryBudget {
            monthly_budget_id: budget_id,
            category: Category::Beverages,
            allocated_amount: dec!(5.00),
        })
        .await
        .unwrap();

    let report = budgets.get_budget_vs_actual("2024-03").await.unwrap().unwrap();
    assert_eq!(report.total_spent, dec!(42.50));
    assert_eq!(report.by_category.len(), 7);
    let beverages = report
        .by_category
        .iter()
        .find(|c| c.category == Category::Beverages)
        .unwrap();
    assert_eq!(beverages.actual, dec!(5.50));
    assert_eq!(beverages.remaining, dec!(-0.50));
    assert!(beverages.is_over_budget);

    assert!(budgets.get_budget_vs_actual("2024-04").await.unwrap().is_none());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_inserts_get_distinct_ids() {
    let (_dir, ctx) = open_store().await;
    let receipts = ctx.receipt_service();

    let handles: Vec<_> = (0..20)
        .map(|_| {
            let receipts = receipts.clone();
            tokio::spawn(async move {
                receipts
                    .create_receipt_with_items(market_receipt(), market_items())
                    .await
            })
        })
        .collect();

    let mut ids = HashSet::new();
    for handle in handles {
        ids.insert(handle.await.unwrap().unwrap());
    }
    assert_eq!(ids.len(), 20);
    assert_eq!(item_row_count(&ctx).await, 40);
}
