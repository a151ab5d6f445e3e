//! Order-level queries: the date filter and the default range bounds.

use chrono::NaiveDate;
use serde::Deserialize;

use crate::connection::Connection;
use crate::error::{DashboardError, Result};
use crate::models::DateRange;
use crate::queries::ORDER_DATE;
use crate::sql_builder::SqlBuilder;

#[derive(Deserialize)]
struct Bounds {
    first_date: Option<String>,
    last_date: Option<String>,
}

/// Query interface over the `orders` table.
pub struct OrderQuery<'a> {
    conn: &'a Connection,
}

impl<'a> OrderQuery<'a> {
    /// Create a new `OrderQuery` bound to the given connection.
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// Earliest and latest order date in the data.
    ///
    /// This is the default selection of the date filter. Returns `None`
    /// when there are no orders with a purchase timestamp.
    pub fn date_bounds(&self) -> Result<Option<DateRange>> {
        let date_min = format!("CAST(MIN({ORDER_DATE}) AS VARCHAR) AS first_date");
        let date_max = format!("CAST(MAX({ORDER_DATE}) AS VARCHAR) AS last_date");
        let (sql, params) = SqlBuilder::new("orders o")
            .select(&[date_min.as_str(), date_max.as_str()])
            .build();

        let rows: Vec<Bounds> = self.conn.execute_into(&sql, &params)?;
        let Some(bounds) = rows.into_iter().next() else {
            return Ok(None);
        };

        match (bounds.first_date, bounds.last_date) {
            (Some(first), Some(last)) => Ok(Some(DateRange::new(
                parse_date(&first)?,
                parse_date(&last)?,
            )?)),
            _ => Ok(None),
        }
    }

    /// Number of orders purchased inside `range`.
    pub fn count_in(&self, range: &DateRange) -> Result<i64> {
        let (start, end) = range.iso_bounds();
        let (sql, params) = SqlBuilder::new("orders o")
            .select(&["COUNT(*)"])
            .where_between(ORDER_DATE, &start, &end)
            .build();

        Ok(self
            .conn
            .execute_scalar(&sql, &params)?
            .and_then(|v| v.as_i64())
            .unwrap_or(0))
    }

    /// Ids of the orders purchased inside `range`, sorted.
    pub fn order_ids_in(&self, range: &DateRange) -> Result<Vec<String>> {
        let (start, end) = range.iso_bounds();
        let (sql, params) = SqlBuilder::new("orders o")
            .select(&["o.order_id"])
            .where_between(ORDER_DATE, &start, &end)
            .order_by(&["o.order_id ASC"])
            .build();

        let rows = self.conn.execute(&sql, &params)?;
        Ok(rows
            .into_iter()
            .filter_map(|r| r.get("order_id").and_then(|v| v.as_str()).map(String::from))
            .collect())
    }
}

fn parse_date(raw: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|e| DashboardError::InvalidArgument(format!("bad order date '{raw}': {e}")))
}
