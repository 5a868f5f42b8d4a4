//! Reading table handler

use axum::{extract::State, Json};

use shared::Reading;

use crate::AppState;

/// Get the full reading table
pub async fn list_readings(State(state): State<AppState>) -> Json<Vec<Reading>> {
    let snapshot = state.snapshot();
    Json(snapshot.readings().to_vec())
}
