//! Sales-by-category aggregation over order items.
//!
//! Items are inner-joined to their product and to the English category
//! translation. Items without a product row, or whose category has no
//! translation, never reach the aggregate; [`SalesQuery::join_loss`]
//! counts them.

use crate::connection::Connection;
use crate::error::Result;
use crate::models::{CategorySales, DateRange, JoinLoss};
use crate::queries::ORDER_DATE;
use crate::sql_builder::SqlBuilder;

/// Query interface for the units-sold-per-category aggregate.
pub struct SalesQuery<'a> {
    conn: &'a Connection,
}

impl<'a> SalesQuery<'a> {
    /// Create a new `SalesQuery` bound to the given connection.
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// Units sold per English category for orders inside `range`.
    pub fn by_category(&self, range: &DateRange) -> Result<Vec<CategorySales>> {
        let (start, end) = range.iso_bounds();
        let (sql, params) = SqlBuilder::new("order_items i")
            .select(&[
                "t.product_category_name_english AS category",
                "CAST(COALESCE(SUM(i.order_item_id), 0) AS BIGINT) AS units",
            ])
            .join("JOIN orders o ON o.order_id = i.order_id")
            .join("JOIN products p ON p.product_id = i.product_id")
            .join("JOIN category_translation t ON t.product_category_name = p.product_category_name")
            .where_between(ORDER_DATE, &start, &end)
            .where_clause("t.product_category_name_english IS NOT NULL", &[])
            .group_by(&["t.product_category_name_english"])
            .order_by(&["units DESC", "category ASC"])
            .build();

        self.conn.execute_into(&sql, &params)
    }

    /// Order items inside `range` dropped by the product and translation joins.
    pub fn join_loss(&self, range: &DateRange) -> Result<JoinLoss> {
        let (start, end) = range.iso_bounds();
        let (sql, params) = SqlBuilder::new("order_items i")
            .select(&[
                "COUNT(*) FILTER (WHERE p.product_id IS NULL) AS orphaned_items",
                "COUNT(*) FILTER (WHERE p.product_id IS NOT NULL \
                 AND t.product_category_name_english IS NULL) AS untranslated_items",
                "CAST(COALESCE(SUM(i.order_item_id) FILTER (WHERE p.product_id IS NULL \
                 OR t.product_category_name_english IS NULL), 0) AS BIGINT) AS dropped_units",
            ])
            .join("JOIN orders o ON o.order_id = i.order_id")
            .join("LEFT JOIN products p ON p.product_id = i.product_id")
            .join("LEFT JOIN category_translation t ON t.product_category_name = p.product_category_name")
            .where_between(ORDER_DATE, &start, &end)
            .build();

        let rows: Vec<JoinLoss> = self.conn.execute_into(&sql, &params)?;
        Ok(rows.into_iter().next().unwrap_or_default())
    }

    /// Units over every order item inside `range`, before the product joins.
    pub fn item_units(&self, range: &DateRange) -> Result<i64> {
        let (start, end) = range.iso_bounds();
        let (sql, params) = SqlBuilder::new("order_items i")
            .select(&["CAST(COALESCE(SUM(i.order_item_id), 0) AS BIGINT)"])
            .join("JOIN orders o ON o.order_id = i.order_id")
            .where_between(ORDER_DATE, &start, &end)
            .build();

        Ok(self
            .conn
            .execute_scalar(&sql, &params)?
            .and_then(|v| v.as_i64())
            .unwrap_or(0))
    }
}
