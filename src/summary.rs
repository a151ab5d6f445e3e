//! Scalar facts and recommendations derived from the two aggregates.
//!
//! Everything here is a pure function of a [`SalesByCategory`], a
//! [`PaymentSummary`] and the active [`DateRange`]; no queries run.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::LOW_VOLUME_THRESHOLD;
use crate::models::{DateRange, PaymentSummary, PaymentType, SalesByCategory};

const NO_TRANSACTIONS: &str = "no transactions";
const NO_PRODUCTS_SOLD: &str = "no products sold";
const NO_PRODUCTS_RECORDED: &str = "no products recorded";

// ---------------------------------------------------------------------------
// Recommendation
// ---------------------------------------------------------------------------

/// One recommendation line of the report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "category", rename_all = "snake_case")]
pub enum Recommendation {
    PromoteCreditCard,
    PromoteBoleto,
    VoucherCampaign,
    DebitCardPartnership,
    ReviewPaymentMethods,
    EvaluateCategory(String),
    RestockCategory(String),
    NewMarketingStrategy,
}

impl Recommendation {
    /// The payment-method recommendation. Exactly one applies.
    pub fn for_payment_method(method: Option<&PaymentType>) -> Self {
        match method {
            Some(PaymentType::CreditCard) => Recommendation::PromoteCreditCard,
            Some(PaymentType::Boleto) => Recommendation::PromoteBoleto,
            Some(PaymentType::Voucher) => Recommendation::VoucherCampaign,
            Some(PaymentType::DebitCard) => Recommendation::DebitCardPartnership,
            _ => Recommendation::ReviewPaymentMethods,
        }
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Recommendation::PromoteCreditCard => f.write_str(
                "**Optimize promotions and ease of use for credit cards** to increase transactions.",
            ),
            Recommendation::PromoteBoleto => f.write_str(
                "Increase education and promotion of the **Boleto** payment method so it is used more widely.",
            ),
            Recommendation::VoucherCampaign => {
                f.write_str("**Consider a discount voucher campaign** to attract more buyers.")
            }
            Recommendation::DebitCardPartnership => {
                f.write_str("Partner with more banks on **debit card discount programs**.")
            }
            Recommendation::ReviewPaymentMethods => f.write_str(
                "**Needs special attention**: no payment method clearly dominates. \
                 Review the available payment methods.",
            ),
            Recommendation::EvaluateCategory(category) => write!(
                f,
                "**Evaluate category '{category}'**: consider discounts, bundling, or discontinuing it."
            ),
            Recommendation::RestockCategory(category) => write!(
                f,
                "**Make sure stock is sufficient** for best-selling category '{category}', \
                 and consider additional promotion."
            ),
            Recommendation::NewMarketingStrategy => f.write_str(
                "**A new marketing strategy is needed**, since total sales are still low in this period.",
            ),
        }
    }
}

// ---------------------------------------------------------------------------
// Summary
// ---------------------------------------------------------------------------

/// Facts extracted from the aggregates, plus the recommendations they imply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    /// Payment type with the largest summed value.
    pub top_payment_method: Option<PaymentType>,
    /// First row of the top slice.
    pub best_selling_category: Option<String>,
    /// First row of the bottom slice. With more categories than the slice
    /// length this is not the global minimum.
    pub worst_selling_category: Option<String>,
    /// Units across all categories.
    pub total_units: i64,
    pub recommendations: Vec<Recommendation>,
}

impl Summary {
    pub fn from_aggregates(sales: &SalesByCategory, payments: &PaymentSummary) -> Self {
        let top_payment_method = payments.top();
        let best_selling_category = sales.top().first().map(|r| r.category.clone());
        let worst_selling_category = sales.bottom().first().map(|r| r.category.clone());
        let total_units = sales.total_units();

        let mut recommendations = vec![Recommendation::for_payment_method(
            top_payment_method.as_ref(),
        )];
        if let Some(worst) = &worst_selling_category {
            recommendations.push(Recommendation::EvaluateCategory(worst.clone()));
        }
        if let Some(best) = &best_selling_category {
            recommendations.push(Recommendation::RestockCategory(best.clone()));
        }
        if total_units < LOW_VOLUME_THRESHOLD {
            recommendations.push(Recommendation::NewMarketingStrategy);
        }

        Self {
            top_payment_method,
            best_selling_category,
            worst_selling_category,
            total_units,
            recommendations,
        }
    }
}

// ---------------------------------------------------------------------------
// Narrative
// ---------------------------------------------------------------------------

/// Conclusion and recommendation lines, ready to display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Narrative {
    pub conclusions: Vec<String>,
    pub recommendations: Vec<String>,
}

impl Narrative {
    pub fn render(summary: &Summary, range: &DateRange) -> Self {
        let payment = summary
            .top_payment_method
            .as_ref()
            .map(|p| p.as_str())
            .unwrap_or(NO_TRANSACTIONS);
        let best = summary
            .best_selling_category
            .as_deref()
            .unwrap_or(NO_PRODUCTS_SOLD);
        let worst = summary
            .worst_selling_category
            .as_deref()
            .unwrap_or(NO_PRODUCTS_RECORDED);

        let conclusions = vec![
            format!(
                "The most used payment method from **{} to {}** is **{}**.",
                range.start(),
                range.end(),
                payment
            ),
            format!("The best-selling category is **{best}**."),
            format!("The worst-selling category is **{worst}**."),
            format!(
                "Total units sold in this period: **{} units**.",
                group_thousands(summary.total_units)
            ),
        ];

        Self {
            conclusions,
            recommendations: summary.recommendations.iter().map(|r| r.to_string()).collect(),
        }
    }

    /// Markdown block with a conclusions list and a recommendations list.
    pub fn to_markdown(&self) -> String {
        let mut out = String::from("**Conclusions:**\n");
        for line in &self.conclusions {
            out.push_str("- ");
            out.push_str(line);
            out.push('\n');
        }
        out.push_str("\n**Recommendations:**\n");
        for line in &self.recommendations {
            out.push_str("- ");
            out.push_str(line);
            out.push('\n');
        }
        out
    }
}

/// `1234567` -> `"1,234,567"`.
pub fn group_thousands(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if n < 0 {
        out.push('-');
    }
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
