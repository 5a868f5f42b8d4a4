//! Validation utilities for the Environmental Monitoring Dashboard
//!
//! Schema-level checks applied at the data-loading boundary, before any
//! reading reaches the alert evaluator or the daily aggregator.

use crate::models::Reading;

/// Validate humidity is a percentage
pub fn validate_humidity(humidity: f64) -> Result<(), &'static str> {
    if !(0.0..=100.0).contains(&humidity) {
        return Err("Humidity must be between 0 and 100%");
    }
    Ok(())
}

/// Validate AQI is non-negative
pub fn validate_aqi(aqi: f64) -> Result<(), &'static str> {
    if aqi < 0.0 {
        return Err("AQI cannot be negative");
    }
    Ok(())
}

/// Validate a particulate concentration (PM2.5 / PM10) is non-negative
pub fn validate_particulate(concentration: f64) -> Result<(), &'static str> {
    if concentration < 0.0 {
        return Err("Particulate concentration cannot be negative");
    }
    Ok(())
}

/// Validate an index metric (soil, crop, forest, wildlife, water) is a
/// 0-100 score
pub fn validate_index(index: f64) -> Result<(), &'static str> {
    if !(0.0..=100.0).contains(&index) {
        return Err("Index metrics must be between 0 and 100");
    }
    Ok(())
}

/// Validate every present metric on a reading.
///
/// Absent metrics are fine; only values that are present are checked.
/// Returns the first violation found.
pub fn validate_reading(reading: &Reading) -> Result<(), &'static str> {
    if let Some(humidity) = reading.humidity {
        validate_humidity(humidity)?;
    }
    if let Some(aqi) = reading.aqi {
        validate_aqi(aqi)?;
    }
    if let Some(pm25) = reading.pm25 {
        validate_particulate(pm25)?;
    }
    if let Some(pm10) = reading.pm10 {
        validate_particulate(pm10)?;
    }
    for index in [
        reading.soil_moisture,
        reading.crop_health,
        reading.forest_health,
        reading.wildlife_index,
        reading.water_quality,
    ]
    .into_iter()
    .flatten()
    {
        validate_index(index)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn base_reading() -> Reading {
        Reading::climate(
            NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(),
            28.0,
            55.0,
            80.0,
        )
    }

    #[test]
    fn test_valid_reading_passes() {
        assert!(validate_reading(&base_reading()).is_ok());
    }

    #[test]
    fn test_humidity_out_of_range_rejected() {
        let mut reading = base_reading();
        reading.humidity = Some(120.0);
        assert!(validate_reading(&reading).is_err());
    }

    #[test]
    fn test_negative_aqi_rejected() {
        let mut reading = base_reading();
        reading.aqi = Some(-5.0);
        assert!(validate_reading(&reading).is_err());
    }

    #[test]
    fn test_absent_metrics_are_skipped() {
        let mut reading = base_reading();
        reading.humidity = None;
        reading.aqi = None;
        assert!(validate_reading(&reading).is_ok());
    }

    #[test]
    fn test_index_bounds() {
        assert!(validate_index(0.0).is_ok());
        assert!(validate_index(100.0).is_ok());
        assert!(validate_index(100.5).is_err());
        assert!(validate_index(-0.1).is_err());
    }
}
