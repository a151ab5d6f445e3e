//! Query modules for the dashboard.
//!
//! Each module provides a query struct that borrows from a
//! [`Connection`](crate::connection::Connection) and restricts its input to
//! the orders whose purchase date falls inside a [`DateRange`](crate::models::DateRange).

pub mod orders;
pub mod payments;
pub mod sales;

pub use orders::OrderQuery;
pub use payments::PaymentQuery;
pub use sales::SalesQuery;

/// Calendar date of an order, truncated from its purchase timestamp.
pub(crate) const ORDER_DATE: &str = "CAST(o.order_purchase_timestamp AS DATE)";
