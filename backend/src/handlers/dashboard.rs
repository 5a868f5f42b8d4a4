//! Dashboard handler

use axum::{extract::State, Json};

use crate::services::DashboardSummary;
use crate::AppState;

/// Get dashboard summary statistics
pub async fn get_dashboard(State(state): State<AppState>) -> Json<DashboardSummary> {
    let snapshot = state.snapshot();
    Json(snapshot.dashboard_summary())
}
