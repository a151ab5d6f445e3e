use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// PaymentType
// ---------------------------------------------------------------------------

/// Payment method of a payment record.
///
/// Variants are declared in the canonical display order. Raw values outside
/// the known set are preserved in `Other` and sort after the known ones.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PaymentType {
    CreditCard,
    Boleto,
    Voucher,
    DebitCard,
    NotDefined,
    Other(String),
}

impl PaymentType {
    pub fn as_str(&self) -> &str {
        match self {
            PaymentType::CreditCard => "credit_card",
            PaymentType::Boleto => "boleto",
            PaymentType::Voucher => "voucher",
            PaymentType::DebitCard => "debit_card",
            PaymentType::NotDefined => "not_defined",
            PaymentType::Other(raw) => raw,
        }
    }
}

impl From<&str> for PaymentType {
    fn from(raw: &str) -> Self {
        match raw {
            "credit_card" => PaymentType::CreditCard,
            "boleto" => PaymentType::Boleto,
            "voucher" => PaymentType::Voucher,
            "debit_card" => PaymentType::DebitCard,
            "not_defined" => PaymentType::NotDefined,
            other => PaymentType::Other(other.to_string()),
        }
    }
}

impl From<String> for PaymentType {
    fn from(raw: String) -> Self {
        PaymentType::from(raw.as_str())
    }
}

impl From<PaymentType> for String {
    fn from(value: PaymentType) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for PaymentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// PaymentTotal — one row of the payment aggregate
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentTotal {
    pub payment_type: PaymentType,
    /// Sum of `payment_value` over the matching payment records.
    pub total_value: f64,
    /// Number of payment records.
    pub transactions: i64,
}

// ---------------------------------------------------------------------------
// PaymentSummary — payment aggregate in canonical order
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PaymentSummary {
    rows: Vec<PaymentTotal>,
}

impl PaymentSummary {
    /// Wrap rows, sorting them into canonical payment-type order.
    pub fn new(mut rows: Vec<PaymentTotal>) -> Self {
        rows.sort_by(|a, b| a.payment_type.cmp(&b.payment_type));
        Self { rows }
    }

    /// Rows in canonical payment-type order.
    pub fn rows(&self) -> &[PaymentTotal] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Rows sorted by total value, largest first.
    ///
    /// Equal totals keep canonical order.
    pub fn by_value(&self) -> Vec<PaymentTotal> {
        let mut rows = self.rows.clone();
        rows.sort_by(|a, b| {
            b.total_value
                .partial_cmp(&a.total_value)
                .unwrap_or(Ordering::Equal)
        });
        rows
    }

    /// Payment type with the largest total value.
    pub fn top(&self) -> Option<PaymentType> {
        self.by_value().into_iter().next().map(|r| r.payment_type)
    }

    pub fn total_value(&self) -> f64 {
        self.rows.iter().map(|r| r.total_value).sum()
    }

    pub fn get(&self, payment_type: &PaymentType) -> Option<&PaymentTotal> {
        self.rows.iter().find(|r| &r.payment_type == payment_type)
    }
}
