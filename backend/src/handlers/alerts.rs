//! HTTP handlers for the alert list

use axum::{
    extract::{Query, State},
    Json,
};
use chrono::NaiveDate;
use serde::Deserialize;

use shared::{Alert, AlertKind};

use crate::error::{AppError, AppResult};
use crate::AppState;

/// Optional filters for the alert list
#[derive(Debug, Deserialize)]
pub struct AlertQuery {
    /// Alert kind label, e.g. "High Temperature"
    pub kind: Option<String>,
    pub date: Option<NaiveDate>,
}

/// Get the ordered alert sequence, optionally filtered by kind and date
pub async fn list_alerts(
    State(state): State<AppState>,
    Query(query): Query<AlertQuery>,
) -> AppResult<Json<Vec<Alert>>> {
    let snapshot = state.snapshot();

    let kind: Option<AlertKind> = query
        .kind
        .as_deref()
        .map(|label| {
            label
                .parse()
                .map_err(|_| AppError::ValidationError(format!("Unknown alert kind: {}", label)))
        })
        .transpose()?;

    let alerts: Vec<Alert> = snapshot
        .alerts()
        .iter()
        .filter(|a| kind.map_or(true, |k| a.kind == k))
        .filter(|a| query.date.map_or(true, |d| a.date == d))
        .cloned()
        .collect();

    Ok(Json(alerts))
}
