//! Async wrapper around [`Dashboard`] for use in async runtimes (Tokio, etc.).
//!
//! Runs every dashboard operation on a blocking thread pool via
//! [`tokio::task::spawn_blocking`], keeping the async event loop free.
//!
//! # Example
//!
//! ```no_run
//! use ecommerce_dashboard::AsyncDashboard;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() {
//!     let dashboard = AsyncDashboard::builder().data_dir("data").build().await.unwrap();
//!
//!     let bounds = dashboard.date_bounds().await.unwrap();
//!     if let Some(range) = bounds {
//!         let report = dashboard.report(range).await.unwrap();
//!         println!("{}", report.narrative.to_markdown());
//!     }
//! }
//! ```

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use chrono::NaiveDate;

use crate::config::Table;
use crate::error::{DashboardError, Result};
use crate::models::DateRange;
use crate::report::Report;
use crate::Dashboard;

// ---------------------------------------------------------------------------
// AsyncDashboardBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing an [`AsyncDashboard`].
#[derive(Default)]
pub struct AsyncDashboardBuilder {
    data_dir: Option<PathBuf>,
    overrides: Vec<(Table, PathBuf)>,
}

impl AsyncDashboardBuilder {
    /// Directory holding the five CSV files.
    pub fn data_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.data_dir = Some(path.as_ref().to_path_buf());
        self
    }

    /// Read one table from an explicit path.
    pub fn table_path<P: AsRef<Path>>(mut self, table: Table, path: P) -> Self {
        self.overrides.push((table, path.as_ref().to_path_buf()));
        self
    }

    /// Load the tables on the blocking thread pool.
    pub async fn build(self) -> Result<AsyncDashboard> {
        tokio::task::spawn_blocking(move || {
            let mut builder = Dashboard::builder();
            if let Some(dir) = self.data_dir {
                builder = builder.data_dir(dir);
            }
            for (table, path) in self.overrides {
                builder = builder.table_path(table, path);
            }
            let dashboard = builder.build()?;
            Ok(AsyncDashboard {
                inner: Arc::new(Mutex::new(dashboard)),
            })
        })
        .await
        .map_err(|e| DashboardError::InvalidArgument(format!("Task join error: {e}")))?
    }
}

// ---------------------------------------------------------------------------
// AsyncDashboard
// ---------------------------------------------------------------------------

/// Async wrapper around [`Dashboard`].
///
/// The underlying [`Dashboard`] is protected by a [`Mutex`] since its
/// connection uses `RefCell` internally. Cloning is cheap and shares the
/// loaded tables.
#[derive(Clone)]
pub struct AsyncDashboard {
    inner: Arc<Mutex<Dashboard>>,
}

impl AsyncDashboard {
    /// Create a new builder for configuring the async dashboard.
    pub fn builder() -> AsyncDashboardBuilder {
        AsyncDashboardBuilder::default()
    }

    /// Run a sync dashboard operation on the blocking thread pool.
    pub async fn run<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&Dashboard) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let dashboard = self.inner.clone();
        tokio::task::spawn_blocking(move || {
            let guard = dashboard
                .lock()
                .map_err(|_| DashboardError::InvalidArgument("dashboard lock poisoned".into()))?;
            f(&guard)
        })
        .await
        .map_err(|e| DashboardError::InvalidArgument(format!("Task join error: {e}")))?
    }

    /// Earliest and latest order date.
    pub async fn date_bounds(&self) -> Result<Option<DateRange>> {
        self.run(|d| d.date_bounds()).await
    }

    /// Compute the report for `range`.
    pub async fn report(&self, range: DateRange) -> Result<Report> {
        self.run(move |d| d.report(&range)).await
    }

    /// Validate a date-picker selection and compute its report.
    pub async fn report_for_selection(&self, selection: Vec<NaiveDate>) -> Result<Report> {
        self.run(move |d| d.report_for_selection(&selection)).await
    }

    /// Report over the full span of order dates.
    pub async fn default_report(&self) -> Result<Report> {
        self.run(|d| d.default_report()).await
    }
}
