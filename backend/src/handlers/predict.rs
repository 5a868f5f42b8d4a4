//! AQI prediction handler

use axum::{extract::State, Json};
use serde::Deserialize;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::services::prediction::{Prediction, PredictionService};
use crate::AppState;

/// Input features for one prediction
#[derive(Debug, Deserialize, Validate)]
pub struct PredictRequest {
    #[validate(range(min = -50.0, max = 60.0))]
    pub temperature: f64,
    #[validate(range(min = 0.0, max = 100.0))]
    pub humidity: f64,
    #[validate(range(min = 0.0, max = 1000.0))]
    pub pm25: f64,
    #[validate(range(min = 0.0, max = 1000.0))]
    pub pm10: f64,
}

/// Predict an AQI value from the four input features and classify it
pub async fn predict_aqi(
    State(state): State<AppState>,
    Json(input): Json<PredictRequest>,
) -> AppResult<Json<Prediction>> {
    input
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let service = PredictionService::new(state.model.clone());
    let prediction = service.predict(input.temperature, input.humidity, input.pm25, input.pm10);

    tracing::debug!(aqi = prediction.aqi, risk = %prediction.risk, "Prediction served");
    Ok(Json(prediction))
}
