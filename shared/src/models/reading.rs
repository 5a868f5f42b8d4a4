//! Sensor reading models

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One row of the environmental dataset.
///
/// `date` is mandatory; every metric is optional. A metric that is absent
/// from the source (missing column or empty cell) deserializes to `None` and
/// is skipped by any rule or aggregate that references it — it is never
/// treated as zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    pub date: NaiveDate,

    // Climate / air metrics
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub humidity: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aqi: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pm25: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pm10: Option<f64>,

    // Ecosystem extension metrics
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub soil_moisture: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crop_health: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub forest_health: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wildlife_index: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub water_quality: Option<f64>,
}

impl Reading {
    /// Construct a reading with only the climate metrics set.
    pub fn climate(
        date: NaiveDate,
        temperature: f64,
        humidity: f64,
        aqi: f64,
    ) -> Self {
        Self {
            date,
            temperature: Some(temperature),
            humidity: Some(humidity),
            aqi: Some(aqi),
            pm25: None,
            pm10: None,
            soil_moisture: None,
            crop_health: None,
            forest_health: None,
            wildlife_index: None,
            water_quality: None,
        }
    }
}
