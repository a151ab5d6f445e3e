//! DuckDB connection wrapper with CSV table registration and query execution.
//!
//! Source tables are materialized into an in-memory database once, with a
//! fixed projected schema, and every aggregation reads from those tables.

use crate::config::Table;
use crate::error::Result;
use duckdb::{types::ValueRef, Connection as DuckDbConnection};
use serde::de::DeserializeOwned;
use std::cell::RefCell;
use std::collections::{BTreeMap, HashMap};
use std::path::Path;

/// Wraps a DuckDB connection and tracks which source tables are loaded.
pub struct Connection {
    conn: DuckDbConnection,
    loaded_tables: RefCell<BTreeMap<Table, usize>>,
}

impl Connection {
    /// Open an empty in-memory DuckDB database.
    pub fn open_in_memory() -> Result<Self> {
        let conn = DuckDbConnection::open_in_memory()?;
        Ok(Self {
            conn,
            loaded_tables: RefCell::new(BTreeMap::new()),
        })
    }

    /// Execute SQL and return results as a `Vec` of `HashMap`s.
    ///
    /// Each row is represented as a `HashMap<String, serde_json::Value>`.
    /// Automatically converts DuckDB types to `serde_json::Value`.
    pub fn execute(
        &self,
        sql: &str,
        params: &[String],
    ) -> Result<Vec<HashMap<String, serde_json::Value>>> {
        tracing::debug!(sql, ?params, "executing query");
        let mut stmt = self.conn.prepare(sql)?;

        let param_values: Vec<&dyn duckdb::ToSql> = params
            .iter()
            .map(|p| p as &dyn duckdb::ToSql)
            .collect();

        let mut rows = stmt.query(param_values.as_slice())?;

        // Column metadata is only available once the statement has run
        let column_names: Vec<String> = rows
            .as_ref()
            .map(|s| s.column_names().into_iter().map(|c| c.to_string()).collect())
            .unwrap_or_default();

        let mut out: Vec<HashMap<String, serde_json::Value>> = Vec::new();

        while let Some(row) = rows.next()? {
            let mut map = HashMap::with_capacity(column_names.len());
            for (i, col_name) in column_names.iter().enumerate() {
                map.insert(col_name.clone(), convert_value_ref(row.get_ref(i)?));
            }
            out.push(map);
        }

        Ok(out)
    }

    /// Execute SQL and deserialize each row into type `T`.
    pub fn execute_into<T: DeserializeOwned>(
        &self,
        sql: &str,
        params: &[String],
    ) -> Result<Vec<T>> {
        let rows = self.execute(sql, params)?;
        let mut results = Vec::with_capacity(rows.len());
        for row in rows {
            let value = serde_json::Value::Object(row.into_iter().collect());
            results.push(serde_json::from_value(value)?);
        }
        Ok(results)
    }

    /// Execute SQL and return the first column of the first row.
    ///
    /// Returns `None` if the result set is empty.
    pub fn execute_scalar(
        &self,
        sql: &str,
        params: &[String],
    ) -> Result<Option<serde_json::Value>> {
        let mut stmt = self.conn.prepare(sql)?;
        let param_values: Vec<&dyn duckdb::ToSql> = params
            .iter()
            .map(|p| p as &dyn duckdb::ToSql)
            .collect();

        let mut rows = stmt.query(param_values.as_slice())?;

        if let Some(row) = rows.next()? {
            Ok(Some(convert_value_ref(row.get_ref(0)?)))
        } else {
            Ok(None)
        }
    }

    /// Create a DuckDB table from a CSV file with a header row.
    ///
    /// Every column is read as text and then cast to the type declared in
    /// [`Table::columns`]. Empty cells become `NULL`. Columns not declared
    /// for the table are dropped. Returns the number of loaded rows.
    pub fn register_table_from_csv(&self, table: Table, csv_path: &Path) -> Result<usize> {
        let path = csv_path
            .to_string_lossy()
            .replace('\\', "/")
            .replace('\'', "''");

        let projection = table
            .columns()
            .iter()
            .map(|(col, ty)| {
                if *ty == "VARCHAR" {
                    format!("NULLIF(TRIM(\"{col}\"), '') AS \"{col}\"")
                } else {
                    format!("TRY_CAST(NULLIF(TRIM(\"{col}\"), '') AS {ty}) AS \"{col}\"")
                }
            })
            .collect::<Vec<_>>()
            .join(", ");

        let name = table.name();
        self.conn.execute_batch(&format!(
            "DROP TABLE IF EXISTS {name}; \
             CREATE TABLE {name} AS SELECT {projection} \
             FROM read_csv('{path}', header = true, all_varchar = true)"
        ))?;

        let rows = self
            .execute_scalar(&format!("SELECT COUNT(*) FROM {name}"), &[])?
            .and_then(|v| v.as_u64())
            .unwrap_or(0) as usize;
        self.loaded_tables.borrow_mut().insert(table, rows);
        Ok(rows)
    }

    /// Check whether a source table has been loaded.
    pub fn has_table(&self, table: Table) -> bool {
        self.loaded_tables.borrow().contains_key(&table)
    }

    /// Return the names of all loaded tables, in load order.
    pub fn tables(&self) -> Vec<String> {
        self.loaded_tables
            .borrow()
            .keys()
            .map(|t| t.name().to_string())
            .collect()
    }

    /// Row count recorded when the table was loaded.
    pub fn row_count(&self, table: Table) -> Option<usize> {
        self.loaded_tables.borrow().get(&table).copied()
    }

    /// Access the underlying DuckDB connection for advanced usage.
    pub fn raw(&self) -> &DuckDbConnection {
        &self.conn
    }
}

/// Convert a DuckDB `ValueRef` to a `serde_json::Value`.
fn convert_value_ref(val: ValueRef<'_>) -> serde_json::Value {
    match val {
        ValueRef::Null => serde_json::Value::Null,
        ValueRef::Boolean(b) => serde_json::Value::Bool(b),
        ValueRef::TinyInt(n) => serde_json::Value::Number(n.into()),
        ValueRef::SmallInt(n) => serde_json::Value::Number(n.into()),
        ValueRef::Int(n) => serde_json::Value::Number(n.into()),
        ValueRef::BigInt(n) => serde_json::Value::Number(n.into()),
        ValueRef::UBigInt(n) => serde_json::Value::Number(n.into()),
        ValueRef::HugeInt(n) => {
            // SUM over BIGINT widens to HUGEINT
            if let Ok(i) = i64::try_from(n) {
                serde_json::Value::Number(i.into())
            } else {
                serde_json::Value::String(n.to_string())
            }
        }
        ValueRef::Float(f) => serde_json::Number::from_f64(f as f64)
            .map(serde_json::Value::Number)
            .unwrap_or(serde_json::Value::Null),
        ValueRef::Double(f) => serde_json::Number::from_f64(f)
            .map(serde_json::Value::Number)
            .unwrap_or(serde_json::Value::Null),
        ValueRef::Text(bytes) => {
            serde_json::Value::String(String::from_utf8_lossy(bytes).to_string())
        }
        // Dates and timestamps are formatted with strftime in SQL before
        // they reach this point.
        _ => serde_json::Value::Null,
    }
}
