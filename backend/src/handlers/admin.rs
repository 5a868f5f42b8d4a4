//! Administrative handlers

use std::sync::Arc;

use axum::{extract::State, Json};
use serde::Serialize;

use crate::data;
use crate::error::AppResult;
use crate::snapshot::MonitorSnapshot;
use crate::AppState;

#[derive(Serialize)]
pub struct ReloadResponse {
    pub readings: usize,
    pub alerts: usize,
    pub daily_reports: usize,
}

/// Re-read the dataset from disk and swap in a fresh snapshot.
///
/// This is the only mutation in the system. Readers that already cloned the
/// previous snapshot keep a consistent view until they finish.
pub async fn reload_dataset(State(state): State<AppState>) -> AppResult<Json<ReloadResponse>> {
    let readings = data::load_readings(&state.config.data.readings_path)?;
    let snapshot = Arc::new(MonitorSnapshot::build(readings));

    let response = ReloadResponse {
        readings: snapshot.readings().len(),
        alerts: snapshot.alerts().len(),
        daily_reports: snapshot.daily_reports().len(),
    };

    let mut guard = state
        .snapshot
        .write()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    *guard = snapshot;

    tracing::info!(
        readings = response.readings,
        alerts = response.alerts,
        reports = response.daily_reports,
        "Dataset reloaded"
    );
    Ok(Json(response))
}
