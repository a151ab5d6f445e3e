//! Transaction value per payment method.

use crate::connection::Connection;
use crate::error::Result;
use crate::models::{DateRange, PaymentTotal};
use crate::queries::ORDER_DATE;
use crate::sql_builder::SqlBuilder;

/// Query interface for the payment-method aggregate.
pub struct PaymentQuery<'a> {
    conn: &'a Connection,
}

impl<'a> PaymentQuery<'a> {
    /// Create a new `PaymentQuery` bound to the given connection.
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// Summed payment value and record count per payment type for orders
    /// inside `range`.
    pub fn by_type(&self, range: &DateRange) -> Result<Vec<PaymentTotal>> {
        let (start, end) = range.iso_bounds();
        let (sql, params) = SqlBuilder::new("payments y")
            .select(&[
                "y.payment_type AS payment_type",
                "CAST(COALESCE(SUM(y.payment_value), 0) AS DOUBLE) AS total_value",
                "COUNT(*) AS transactions",
            ])
            .join("JOIN orders o ON o.order_id = y.order_id")
            .where_between(ORDER_DATE, &start, &end)
            .where_clause("y.payment_type IS NOT NULL", &[])
            .group_by(&["y.payment_type"])
            .order_by(&["y.payment_type ASC"])
            .build();

        self.conn.execute_into(&sql, &params)
    }

    /// Sum of every payment value for orders inside `range`.
    pub fn total_value(&self, range: &DateRange) -> Result<f64> {
        let (start, end) = range.iso_bounds();
        let (sql, params) = SqlBuilder::new("payments y")
            .select(&["CAST(COALESCE(SUM(y.payment_value), 0) AS DOUBLE)"])
            .join("JOIN orders o ON o.order_id = y.order_id")
            .where_between(ORDER_DATE, &start, &end)
            .build();

        Ok(self
            .conn
            .execute_scalar(&sql, &params)?
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0))
    }
}
