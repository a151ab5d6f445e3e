use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Number of rows in the top and bottom category slices.
pub const TOP_N: usize = 5;

/// Total units below which the low-volume recommendation fires.
pub const LOW_VOLUME_THRESHOLD: i64 = 50;

/// The five source tables of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Table {
    Orders,
    OrderItems,
    Products,
    CategoryTranslation,
    Payments,
}

impl Table {
    /// All tables, in load order.
    pub const ALL: [Table; 5] = [
        Table::Orders,
        Table::OrderItems,
        Table::Products,
        Table::CategoryTranslation,
        Table::Payments,
    ];

    /// DuckDB table name.
    pub fn name(self) -> &'static str {
        match self {
            Table::Orders => "orders",
            Table::OrderItems => "order_items",
            Table::Products => "products",
            Table::CategoryTranslation => "category_translation",
            Table::Payments => "payments",
        }
    }

    /// File name inside the data directory.
    pub fn file_name(self) -> &'static str {
        match self {
            Table::Orders => "olist_orders_dataset.csv",
            Table::OrderItems => "order_items_dataset.csv",
            Table::Products => "products_dataset.csv",
            Table::CategoryTranslation => "product_category_name_translation.csv",
            Table::Payments => "order_payments_dataset.csv",
        }
    }

    /// Projected columns and their DuckDB types.
    ///
    /// Only these columns are kept when the CSV is loaded; anything else in
    /// the file is ignored. Values are cast at load time so that an empty
    /// file (header only) still produces a correctly typed table.
    pub fn columns(self) -> &'static [(&'static str, &'static str)] {
        match self {
            Table::Orders => &[
                ("order_id", "VARCHAR"),
                ("order_purchase_timestamp", "TIMESTAMP"),
            ],
            Table::OrderItems => &[
                ("order_id", "VARCHAR"),
                ("order_item_id", "BIGINT"),
                ("product_id", "VARCHAR"),
            ],
            Table::Products => &[
                ("product_id", "VARCHAR"),
                ("product_category_name", "VARCHAR"),
            ],
            Table::CategoryTranslation => &[
                ("product_category_name", "VARCHAR"),
                ("product_category_name_english", "VARCHAR"),
            ],
            Table::Payments => &[
                ("order_id", "VARCHAR"),
                ("payment_type", "VARCHAR"),
                ("payment_value", "DOUBLE"),
            ],
        }
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

pub fn default_data_dir() -> PathBuf {
    PathBuf::from("data")
}
