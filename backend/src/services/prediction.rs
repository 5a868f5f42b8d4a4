//! AQI prediction service
//!
//! Thin wrapper around the pre-trained regression artifact: feeds the four
//! input features through the model, rounds the prediction, and classifies
//! it into a risk band.

use std::sync::Arc;

use serde::Serialize;

use shared::{round2, AqiModel, AqiRiskBand};

/// Prediction service backed by the loaded model artifact
#[derive(Clone)]
pub struct PredictionService {
    model: Arc<AqiModel>,
}

/// Outcome of one prediction
#[derive(Debug, Clone, Serialize)]
pub struct Prediction {
    pub aqi: f64,
    pub risk: AqiRiskBand,
}

impl PredictionService {
    pub fn new(model: Arc<AqiModel>) -> Self {
        Self { model }
    }

    /// Predict an AQI value and classify its risk band.
    pub fn predict(&self, temperature: f64, humidity: f64, pm25: f64, pm10: f64) -> Prediction {
        let aqi = round2(self.model.predict(&[temperature, humidity, pm25, pm10]));
        Prediction {
            aqi,
            risk: AqiRiskBand::classify(aqi),
        }
    }
}
