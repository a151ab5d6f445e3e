use std::sync::Arc;

use axum::extract::State;
use axum::response::Json;
use serde_json::{json, Value};

use crate::error::AppError;
use crate::state::AppState;

/// GET /api/bounds
///
/// Earliest and latest order date, the default selection of the date picker.
pub async fn get_bounds(State(state): State<Arc<AppState>>) -> Result<Json<Value>, AppError> {
    let bounds = state
        .dashboard
        .date_bounds()
        .await?
        .ok_or_else(|| AppError::not_found("no orders with a purchase date"))?;

    Ok(Json(json!({
        "start": bounds.start(),
        "end": bounds.end()
    })))
}
