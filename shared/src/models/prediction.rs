//! AQI regression model artifact

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Feature order the model was trained with. The server and the trainer
/// must agree on this ordering.
pub const MODEL_FEATURES: [&str; 4] = ["temperature", "humidity", "pm25", "pm10"];

/// A fitted linear regression mapping (temperature, humidity, pm25, pm10)
/// to a predicted AQI value.
///
/// Produced offline by the `train-model` binary and loaded by the server at
/// startup; the core treats it as an opaque predict function.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AqiModel {
    pub intercept: f64,
    pub coefficients: [f64; 4],
    pub features: Vec<String>,
    pub trained_at: DateTime<Utc>,
}

impl AqiModel {
    pub fn new(intercept: f64, coefficients: [f64; 4]) -> Self {
        Self {
            intercept,
            coefficients,
            features: MODEL_FEATURES.iter().map(|s| s.to_string()).collect(),
            trained_at: Utc::now(),
        }
    }

    /// Predict an AQI value for one feature vector, in `MODEL_FEATURES` order.
    pub fn predict(&self, features: &[f64; 4]) -> f64 {
        self.intercept
            + self
                .coefficients
                .iter()
                .zip(features.iter())
                .map(|(c, x)| c * x)
                .sum::<f64>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_predict_is_linear() {
        let model = AqiModel::new(10.0, [2.0, 0.5, 1.0, 0.25]);
        let aqi = model.predict(&[30.0, 40.0, 12.0, 20.0]);
        assert!((aqi - (10.0 + 60.0 + 20.0 + 12.0 + 5.0)).abs() < 1e-9);
    }

    #[test]
    fn test_artifact_round_trips_through_json() {
        let model = AqiModel::new(1.5, [0.1, 0.2, 0.3, 0.4]);
        let json = serde_json::to_string(&model).unwrap();
        let back: AqiModel = serde_json::from_str(&json).unwrap();
        assert_eq!(back, model);
        assert_eq!(back.features, MODEL_FEATURES);
    }
}
