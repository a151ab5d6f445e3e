use std::sync::Arc;

use axum::extract::{Query, State};
use axum::response::Json;
use chrono::NaiveDate;
use ecommerce_dashboard::Report;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::error::AppError;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct ReportParams {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

async fn compute(state: &AppState, params: ReportParams) -> Result<Report, AppError> {
    let selection: Vec<NaiveDate> = [params.start, params.end].into_iter().flatten().collect();
    let report = if selection.is_empty() {
        state.dashboard.default_report().await?
    } else {
        state.dashboard.report_for_selection(selection).await?
    };
    Ok(report)
}

/// GET /api/report?start=2018-01-01&end=2018-06-30
///
/// Chart series, aggregates and summary for the range. Without parameters
/// the full span of order dates is used; a single endpoint is rejected.
pub async fn get_report(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ReportParams>,
) -> Result<Json<Value>, AppError> {
    let report = compute(&state, params).await?;

    Ok(Json(json!({
        "range": report.range,
        "top_categories": report.top_categories(),
        "bottom_categories": report.bottom_categories(),
        "payments": report.payments_by_value(),
        "join_loss": report.join_loss,
        "summary": report.summary,
        "narrative": report.narrative,
    })))
}

/// GET /api/report/narrative?start=2018-01-01&end=2018-06-30
///
/// The conclusions and recommendations as Markdown.
pub async fn get_narrative(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ReportParams>,
) -> Result<String, AppError> {
    let report = compute(&state, params).await?;
    Ok(report.narrative.to_markdown())
}
