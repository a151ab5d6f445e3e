use serde::{Deserialize, Serialize};

use crate::config::TOP_N;

// ---------------------------------------------------------------------------
// CategorySales — one row of the sales aggregate
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySales {
    /// English category name.
    pub category: String,
    /// Sum of item sequence numbers over the category's order items.
    pub units: i64,
}

// ---------------------------------------------------------------------------
// SalesByCategory — sorted sales aggregate
// ---------------------------------------------------------------------------

/// Units sold per category, sorted by units descending.
///
/// Equal unit counts are ordered by category name so the aggregate is
/// identical across runs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SalesByCategory {
    rows: Vec<CategorySales>,
}

impl SalesByCategory {
    /// Wrap rows, sorting them into aggregate order.
    pub fn new(mut rows: Vec<CategorySales>) -> Self {
        rows.sort_by(|a, b| {
            b.units
                .cmp(&a.units)
                .then_with(|| a.category.cmp(&b.category))
        });
        Self { rows }
    }

    pub fn rows(&self) -> &[CategorySales] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The first [`TOP_N`] rows.
    pub fn top(&self) -> &[CategorySales] {
        &self.rows[..self.rows.len().min(TOP_N)]
    }

    /// The last [`TOP_N`] rows, still in descending order.
    pub fn bottom(&self) -> &[CategorySales] {
        &self.rows[self.rows.len().saturating_sub(TOP_N)..]
    }

    /// Units across every category, not only the top and bottom slices.
    pub fn total_units(&self) -> i64 {
        self.rows.iter().map(|r| r.units).sum()
    }
}

// ---------------------------------------------------------------------------
// JoinLoss — order items dropped by the sales joins
// ---------------------------------------------------------------------------

/// Filtered order items that did not reach the sales aggregate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JoinLoss {
    /// Items whose product id has no product row.
    pub orphaned_items: i64,
    /// Items whose product category is missing or has no translation.
    pub untranslated_items: i64,
    /// Units carried by the dropped items.
    pub dropped_units: i64,
}

impl JoinLoss {
    pub fn dropped_items(&self) -> i64 {
        self.orphaned_items + self.untranslated_items
    }

    pub fn is_empty(&self) -> bool {
        self.dropped_items() == 0
    }
}
