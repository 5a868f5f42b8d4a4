//! Route definitions for the Environmental Monitoring Dashboard

use axum::{
    routing::{get, post},
    Router,
};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Dashboard summary statistics
        .route("/dashboard", get(handlers::get_dashboard))
        // Raw reading table
        .route("/readings", get(handlers::list_readings))
        // Threshold alerts
        .route("/alerts", get(handlers::list_alerts))
        // Per-day aggregated reports (JSON or CSV)
        .route("/reports", get(handlers::list_daily_reports))
        // AQI prediction
        .route("/predict", post(handlers::predict_aqi))
        // Explicit dataset reload
        .route("/admin/reload", post(handlers::reload_dataset))
}
