//! Resolves source CSV paths and loads them into the DuckDB connection.
//!
//! Tables are read from disk once; later calls find them already loaded and
//! return immediately. Nothing is ever reloaded for the lifetime of the
//! connection, since the source files are treated as immutable.

use crate::config::{self, Table};
use crate::connection::Connection;
use crate::error::{DashboardError, Result};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Locates the dashboard's source files and loads them on demand.
#[derive(Debug, Clone)]
pub struct TableLoader {
    /// Directory the default file names are resolved against.
    pub data_dir: PathBuf,
    overrides: BTreeMap<Table, PathBuf>,
}

impl TableLoader {
    /// Create a loader rooted at `data_dir`, or the default `./data`.
    pub fn new(data_dir: Option<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.unwrap_or_else(config::default_data_dir),
            overrides: BTreeMap::new(),
        }
    }

    /// Read `table` from `path` instead of `data_dir/<file_name>`.
    pub fn set_path<P: AsRef<Path>>(&mut self, table: Table, path: P) {
        self.overrides.insert(table, path.as_ref().to_path_buf());
    }

    /// Path the given table is read from.
    pub fn path(&self, table: Table) -> PathBuf {
        self.overrides
            .get(&table)
            .cloned()
            .unwrap_or_else(|| self.data_dir.join(table.file_name()))
    }

    /// Fail with [`DashboardError::FileNotFound`] for the first table whose
    /// file is missing.
    pub fn verify(&self) -> Result<()> {
        for table in Table::ALL {
            let path = self.path(table);
            if !path.is_file() {
                return Err(DashboardError::FileNotFound(path));
            }
        }
        Ok(())
    }

    /// Load a single table unless it is already present.
    ///
    /// Returns the table's row count.
    pub fn ensure_loaded(&self, conn: &Connection, table: Table) -> Result<usize> {
        if let Some(rows) = conn.row_count(table) {
            return Ok(rows);
        }

        let path = self.path(table);
        if !path.is_file() {
            return Err(DashboardError::FileNotFound(path));
        }

        let rows = conn.register_table_from_csv(table, &path)?;
        tracing::info!(table = table.name(), path = %path.display(), rows, "loaded table");
        Ok(rows)
    }

    /// Verify every path, then load every table.
    ///
    /// Paths are checked up front so a missing file fails the whole load
    /// before anything is read.
    pub fn load_all(&self, conn: &Connection) -> Result<()> {
        self.verify()?;
        for table in Table::ALL {
            self.ensure_loaded(conn, table)?;
        }
        Ok(())
    }
}
