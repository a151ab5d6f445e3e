//! The dashboard pipeline: filter, aggregate, summarize.

use serde::{Deserialize, Serialize};

use crate::connection::Connection;
use crate::error::Result;
use crate::models::{
    CategorySales, DateRange, JoinLoss, PaymentSummary, PaymentTotal, SalesByCategory,
};
use crate::queries::{PaymentQuery, SalesQuery};
use crate::summary::{Narrative, Summary};

/// Everything the dashboard shows for one date range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub range: DateRange,
    pub sales: SalesByCategory,
    pub payments: PaymentSummary,
    /// Filtered order items that the sales joins dropped.
    pub join_loss: JoinLoss,
    pub summary: Summary,
    pub narrative: Narrative,
}

impl Report {
    /// Bar series for the best-selling categories.
    pub fn top_categories(&self) -> &[CategorySales] {
        self.sales.top()
    }

    /// Bar series for the worst-selling categories.
    pub fn bottom_categories(&self) -> &[CategorySales] {
        self.sales.bottom()
    }

    /// Bar series of transaction value per payment method, largest first.
    pub fn payments_by_value(&self) -> Vec<PaymentTotal> {
        self.payments.by_value()
    }
}

/// Compute the full report for `range` against loaded tables.
///
/// Both aggregates are recomputed on every call; only the source tables
/// are shared between calls.
pub fn compute_report(conn: &Connection, range: &DateRange) -> Result<Report> {
    tracing::debug!(%range, "computing report");

    let sales_query = SalesQuery::new(conn);
    let sales = SalesByCategory::new(sales_query.by_category(range)?);
    let join_loss = sales_query.join_loss(range)?;
    if !join_loss.is_empty() {
        tracing::warn!(
            %range,
            orphaned_items = join_loss.orphaned_items,
            untranslated_items = join_loss.untranslated_items,
            dropped_units = join_loss.dropped_units,
            "order items dropped from sales aggregate"
        );
    }

    let payments = PaymentSummary::new(PaymentQuery::new(conn).by_type(range)?);

    let summary = Summary::from_aggregates(&sales, &payments);
    let narrative = Narrative::render(&summary, range);

    Ok(Report {
        range: *range,
        sales,
        payments,
        join_loss,
        summary,
        narrative,
    })
}
