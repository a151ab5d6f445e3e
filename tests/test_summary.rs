//! Summary facts, recommendation rules and narrative text.

mod common;

use common::{date, range};
use ecommerce_dashboard::models::{CategorySales, PaymentSummary, PaymentTotal, SalesByCategory};
use ecommerce_dashboard::summary::group_thousands;
use ecommerce_dashboard::{Narrative, PaymentType, Recommendation, Summary};

fn sales(rows: &[(&str, i64)]) -> SalesByCategory {
    SalesByCategory::new(
        rows.iter()
            .map(|(category, units)| CategorySales {
                category: category.to_string(),
                units: *units,
            })
            .collect(),
    )
}

fn payments(rows: &[(PaymentType, f64)]) -> PaymentSummary {
    PaymentSummary::new(
        rows.iter()
            .map(|(payment_type, total_value)| PaymentTotal {
                payment_type: payment_type.clone(),
                total_value: *total_value,
                transactions: 1,
            })
            .collect(),
    )
}

// ---------------------------------------------------------------------------
// Facts
// ---------------------------------------------------------------------------

#[test]
fn facts_from_populated_aggregates() {
    let summary = Summary::from_aggregates(
        &sales(&[("toys", 40), ("auto", 20), ("garden_tools", 10)]),
        &payments(&[(PaymentType::Boleto, 80.0), (PaymentType::Voucher, 120.0)]),
    );

    assert_eq!(summary.top_payment_method, Some(PaymentType::Voucher));
    assert_eq!(summary.best_selling_category.as_deref(), Some("toys"));
    assert_eq!(summary.total_units, 70);
}

#[test]
fn worst_is_first_row_of_bottom_slice_not_global_minimum() {
    let summary = Summary::from_aggregates(
        &sales(&[
            ("a", 70),
            ("b", 60),
            ("c", 50),
            ("d", 40),
            ("e", 30),
            ("f", 20),
            ("g", 10),
        ]),
        &PaymentSummary::default(),
    );

    // Bottom five are c..g; the first of them is reported, not g.
    assert_eq!(summary.worst_selling_category.as_deref(), Some("c"));
    assert_eq!(summary.best_selling_category.as_deref(), Some("a"));
}

#[test]
fn total_units_covers_categories_outside_slices() {
    let rows: Vec<(String, i64)> = (0..12).map(|i| (format!("cat{i:02}"), 10)).collect();
    let borrowed: Vec<(&str, i64)> = rows.iter().map(|(c, u)| (c.as_str(), *u)).collect();
    let summary = Summary::from_aggregates(&sales(&borrowed), &PaymentSummary::default());
    assert_eq!(summary.total_units, 120);
}

#[test]
fn empty_aggregates_have_no_facts() {
    let summary = Summary::from_aggregates(&SalesByCategory::default(), &PaymentSummary::default());
    assert_eq!(summary.top_payment_method, None);
    assert_eq!(summary.best_selling_category, None);
    assert_eq!(summary.worst_selling_category, None);
    assert_eq!(summary.total_units, 0);
}

// ---------------------------------------------------------------------------
// Recommendations
// ---------------------------------------------------------------------------

#[test]
fn payment_branch_per_method() {
    let cases = [
        (Some(PaymentType::CreditCard), Recommendation::PromoteCreditCard),
        (Some(PaymentType::Boleto), Recommendation::PromoteBoleto),
        (Some(PaymentType::Voucher), Recommendation::VoucherCampaign),
        (Some(PaymentType::DebitCard), Recommendation::DebitCardPartnership),
        (Some(PaymentType::NotDefined), Recommendation::ReviewPaymentMethods),
        (Some(PaymentType::Other("pix".into())), Recommendation::ReviewPaymentMethods),
        (None, Recommendation::ReviewPaymentMethods),
    ];
    for (method, expected) in cases {
        assert_eq!(Recommendation::for_payment_method(method.as_ref()), expected);
    }
}

#[test]
fn recommendations_follow_fixed_order() {
    let summary = Summary::from_aggregates(
        &sales(&[("toys", 10), ("auto", 5)]),
        &payments(&[(PaymentType::CreditCard, 10.0)]),
    );
    assert_eq!(
        summary.recommendations,
        vec![
            Recommendation::PromoteCreditCard,
            Recommendation::EvaluateCategory("toys".into()),
            Recommendation::RestockCategory("toys".into()),
            Recommendation::NewMarketingStrategy,
        ]
    );
}

#[test]
fn low_volume_threshold_is_exclusive() {
    let at = Summary::from_aggregates(&sales(&[("toys", 50)]), &PaymentSummary::default());
    assert!(!at.recommendations.contains(&Recommendation::NewMarketingStrategy));

    let below = Summary::from_aggregates(&sales(&[("toys", 49)]), &PaymentSummary::default());
    assert!(below.recommendations.contains(&Recommendation::NewMarketingStrategy));
}

#[test]
fn empty_aggregates_recommend_review_and_marketing_only() {
    let summary = Summary::from_aggregates(&SalesByCategory::default(), &PaymentSummary::default());
    assert_eq!(
        summary.recommendations,
        vec![
            Recommendation::ReviewPaymentMethods,
            Recommendation::NewMarketingStrategy,
        ]
    );
}

// ---------------------------------------------------------------------------
// Narrative
// ---------------------------------------------------------------------------

#[test]
fn narrative_fills_templates() {
    let summary = Summary::from_aggregates(
        &sales(&[("bed_bath_table", 1200), ("toys", 300)]),
        &payments(&[(PaymentType::Boleto, 10.0)]),
    );
    let narrative = Narrative::render(&summary, &range(date(2018, 1, 1), date(2018, 6, 30)));

    assert_eq!(
        narrative.conclusions,
        vec![
            "The most used payment method from **2018-01-01 to 2018-06-30** is **boleto**.",
            "The best-selling category is **bed_bath_table**.",
            "The worst-selling category is **bed_bath_table**.",
            "Total units sold in this period: **1,500 units**.",
        ]
    );
    assert_eq!(narrative.recommendations.len(), 3);
    assert!(narrative.recommendations[1].contains("'bed_bath_table'"));
}

#[test]
fn narrative_uses_placeholders_without_data() {
    let summary = Summary::from_aggregates(&SalesByCategory::default(), &PaymentSummary::default());
    let narrative = Narrative::render(&summary, &range(date(2019, 1, 1), date(2019, 1, 31)));

    assert!(narrative.conclusions[0].contains("**no transactions**"));
    assert!(narrative.conclusions[1].contains("**no products sold**"));
    assert!(narrative.conclusions[2].contains("**no products recorded**"));
    assert!(narrative.conclusions[3].contains("**0 units**"));
}

#[test]
fn markdown_has_both_sections() {
    let summary = Summary::from_aggregates(&SalesByCategory::default(), &PaymentSummary::default());
    let md = Narrative::render(&summary, &range(date(2019, 1, 1), date(2019, 1, 31))).to_markdown();

    assert!(md.starts_with("**Conclusions:**\n- "));
    assert!(md.contains("\n**Recommendations:**\n- **Needs special attention**"));
    assert_eq!(md.lines().filter(|l| l.starts_with("- ")).count(), 6);
}

#[test]
fn group_thousands_formats_digits() {
    assert_eq!(group_thousands(0), "0");
    assert_eq!(group_thousands(999), "999");
    assert_eq!(group_thousands(1000), "1,000");
    assert_eq!(group_thousands(1234567), "1,234,567");
    assert_eq!(group_thousands(-45000), "-45,000");
}
