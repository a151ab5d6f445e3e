//! Async wrapper tests; only built with the `async` feature.

#![cfg(feature = "async")]

mod common;

use common::date;
use ecommerce_dashboard::{AsyncDashboard, DashboardError, PaymentType};

#[tokio::test]
async fn async_dashboard_computes_default_report() {
    let tmp_dir = tempfile::tempdir().unwrap();
    common::write_dataset(
        tmp_dir.path(),
        common::ORDERS,
        common::ORDER_ITEMS,
        common::PRODUCTS,
        common::TRANSLATIONS,
        common::PAYMENTS,
    );

    let dashboard = AsyncDashboard::builder()
        .data_dir(tmp_dir.path())
        .build()
        .await
        .unwrap();

    assert_eq!(dashboard.date_bounds().await.unwrap(), Some(common::full_range()));
    let report = dashboard.default_report().await.unwrap();
    assert_eq!(report.summary.top_payment_method, Some(PaymentType::CreditCard));

    let err = dashboard
        .report_for_selection(vec![date(2018, 1, 1)])
        .await
        .err()
        .unwrap();
    assert!(matches!(err, DashboardError::InvalidDateRange(_)));
}

#[tokio::test]
async fn async_build_reports_missing_files() {
    let tmp_dir = tempfile::tempdir().unwrap();
    let result = AsyncDashboard::builder().data_dir(tmp_dir.path()).build().await;
    assert!(matches!(result, Err(DashboardError::FileNotFound(_))));
}
