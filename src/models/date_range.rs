use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{DashboardError, Result};

// ---------------------------------------------------------------------------
// DateRange — inclusive order-date filter
// ---------------------------------------------------------------------------

/// Inclusive calendar-date range applied to each order's purchase date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    /// Build a range from its two endpoints. `start` may equal `end`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        if start > end {
            return Err(DashboardError::InvalidDateRange(format!(
                "start date {start} is after end date {end}"
            )));
        }
        Ok(Self { start, end })
    }

    /// Build a range from a date-picker selection.
    ///
    /// The selection must hold exactly a start and an end date; a picker
    /// that has only one endpoint chosen (or none) is rejected.
    pub fn from_selection(selection: &[NaiveDate]) -> Result<Self> {
        match selection {
            [start, end] => Self::new(*start, *end),
            _ => Err(DashboardError::InvalidDateRange(format!(
                "select both a start and an end date (got {} value(s))",
                selection.len()
            ))),
        }
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// ISO `YYYY-MM-DD` bounds, as bound into SQL parameters.
    pub fn iso_bounds(&self) -> (String, String) {
        (
            self.start.format("%Y-%m-%d").to_string(),
            self.end.format("%Y-%m-%d").to_string(),
        )
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {}", self.start, self.end)
    }
}
