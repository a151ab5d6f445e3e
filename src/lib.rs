//! E-commerce sales and payment analytics.
//!
//! Loads the order, order-item, product, category-translation and payment
//! tables from CSV files into an in-memory DuckDB database, then computes
//! per-date-range aggregates for a dashboard: units sold per product
//! category, transaction value per payment method, and a short textual
//! summary with recommendations.
//!
//! # Quick start
//!
//! ```no_run
//! use ecommerce_dashboard::Dashboard;
//!
//! let dashboard = Dashboard::builder().data_dir("data").build().unwrap();
//!
//! // Full span of order dates
//! let report = dashboard.default_report().unwrap();
//! for row in report.top_categories() {
//!     println!("{}: {}", row.category, row.units);
//! }
//! println!("{}", report.narrative.to_markdown());
//! ```

#[cfg(feature = "async")]
pub mod async_client;
pub mod config;
pub mod connection;
pub mod error;
pub mod loader;
pub mod models;
pub mod queries;
pub mod report;
pub mod sql_builder;
pub mod summary;

#[cfg(feature = "async")]
pub use async_client::AsyncDashboard;
pub use config::Table;
pub use connection::Connection;
pub use error::{DashboardError, Result};
pub use loader::TableLoader;
pub use models::{DateRange, PaymentType};
pub use report::{compute_report, Report};
pub use sql_builder::SqlBuilder;
pub use summary::{Narrative, Recommendation, Summary};

use chrono::NaiveDate;
use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// DashboardBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing a [`Dashboard`].
///
/// Use [`Dashboard::builder()`] to obtain a builder, chain configuration
/// methods, and call [`build()`](DashboardBuilder::build) to load the data.
#[derive(Default)]
pub struct DashboardBuilder {
    data_dir: Option<PathBuf>,
    overrides: Vec<(Table, PathBuf)>,
}

impl DashboardBuilder {
    /// Directory holding the five CSV files under their standard names.
    ///
    /// Defaults to `./data`.
    pub fn data_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.data_dir = Some(path.as_ref().to_path_buf());
        self
    }

    /// Read one table from an explicit path instead of the data directory.
    pub fn table_path<P: AsRef<Path>>(mut self, table: Table, path: P) -> Self {
        self.overrides.push((table, path.as_ref().to_path_buf()));
        self
    }

    /// Check that every input file exists, then load all tables.
    ///
    /// This is the only point where files are read. A missing file fails
    /// with [`DashboardError::FileNotFound`].
    pub fn build(self) -> Result<Dashboard> {
        let mut loader = TableLoader::new(self.data_dir);
        for (table, path) in self.overrides {
            loader.set_path(table, path);
        }

        let conn = Connection::open_in_memory()?;
        loader.load_all(&conn)?;
        Ok(Dashboard { conn, loader })
    }
}

// ---------------------------------------------------------------------------
// Dashboard
// ---------------------------------------------------------------------------

/// Loaded source tables plus the query and report entry points.
///
/// Tables are loaded once in [`DashboardBuilder::build`] and shared by every
/// report computed afterwards.
pub struct Dashboard {
    conn: Connection,
    loader: TableLoader,
}

impl Dashboard {
    /// Create a new builder for configuring the dashboard.
    pub fn builder() -> DashboardBuilder {
        DashboardBuilder::default()
    }

    // -- Query accessors ---------------------------------------------------

    /// Access the order query interface (date bounds and filtering).
    pub fn orders(&self) -> queries::OrderQuery<'_> {
        queries::OrderQuery::new(&self.conn)
    }

    /// Access the sales-by-category query interface.
    pub fn sales(&self) -> queries::SalesQuery<'_> {
        queries::SalesQuery::new(&self.conn)
    }

    /// Access the payment-method query interface.
    pub fn payments(&self) -> queries::PaymentQuery<'_> {
        queries::PaymentQuery::new(&self.conn)
    }

    // -- Reports -----------------------------------------------------------

    /// Earliest and latest order date, the default filter selection.
    pub fn date_bounds(&self) -> Result<Option<DateRange>> {
        self.orders().date_bounds()
    }

    /// Compute the report for an already validated range.
    pub fn report(&self, range: &DateRange) -> Result<Report> {
        compute_report(&self.conn, range)
    }

    /// Validate a date-picker selection and compute its report.
    ///
    /// A selection without exactly two dates fails with
    /// [`DashboardError::InvalidDateRange`] before any query runs.
    pub fn report_for_selection(&self, selection: &[NaiveDate]) -> Result<Report> {
        let range = DateRange::from_selection(selection)?;
        self.report(&range)
    }

    /// Compute the report over the full span of order dates.
    pub fn default_report(&self) -> Result<Report> {
        let range = self
            .date_bounds()?
            .ok_or_else(|| DashboardError::NotFound("no orders with a purchase date".into()))?;
        self.report(&range)
    }

    // -- Metadata and utility methods --------------------------------------

    /// Names of the loaded tables.
    pub fn tables(&self) -> Vec<String> {
        self.conn.tables()
    }

    /// Rows loaded for `table`.
    pub fn row_count(&self, table: Table) -> Option<usize> {
        self.conn.row_count(table)
    }

    /// Path `table` was loaded from.
    pub fn table_path(&self, table: Table) -> PathBuf {
        self.loader.path(table)
    }

    /// Execute a raw SQL query against the loaded tables.
    ///
    /// Provides escape-hatch access for queries not covered by the
    /// dashboard's own interfaces.
    pub fn sql(
        &self,
        query: &str,
        params: &[String],
    ) -> Result<Vec<HashMap<String, serde_json::Value>>> {
        self.conn.execute(query, params)
    }

    /// Return a reference to the underlying [`Connection`] for advanced usage.
    pub fn connection(&self) -> &Connection {
        &self.conn
    }
}

// ---------------------------------------------------------------------------
// Display
// ---------------------------------------------------------------------------

impl fmt::Display for Dashboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tables = Table::ALL
            .iter()
            .map(|t| format!("{}={}", t.name(), self.conn.row_count(*t).unwrap_or(0)))
            .collect::<Vec<_>>();
        write!(
            f,
            "Dashboard(data_dir={}, tables=[{}])",
            self.loader.data_dir.display(),
            tables.join(", ")
        )
    }
}
