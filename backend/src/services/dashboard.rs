//! Dashboard summary statistics
//!
//! Whole-table statistics for the landing page: climate averages, the
//! latest reading, per-ecosystem averages, and counts of the climate alert
//! kinds. Chart rendering is a frontend concern; this service only supplies
//! the numbers.

use serde::Serialize;

use shared::{round2, Alert, AlertKind, Reading};

/// How many rows of the table the dashboard previews
const PREVIEW_ROWS: usize = 5;

/// Summary statistics for the dashboard landing page
#[derive(Debug, Clone, Serialize)]
pub struct DashboardSummary {
    // Whole-table climate statistics
    pub avg_temp: Option<f64>,
    pub avg_humidity: Option<f64>,
    pub avg_aqi: Option<f64>,
    pub max_aqi: Option<f64>,

    // Most recent row
    pub latest_temp: Option<f64>,
    pub latest_humidity: Option<f64>,
    pub latest_aqi: Option<f64>,

    // Ecosystem averages; None when the metric is absent from every row
    pub avg_soil_moisture: Option<f64>,
    pub avg_crop_health: Option<f64>,
    pub avg_forest_health: Option<f64>,
    pub avg_wildlife_index: Option<f64>,
    pub avg_water_quality: Option<f64>,

    // Climate alert tallies
    pub high_temp_count: u64,
    pub low_humidity_count: u64,
    pub high_aqi_count: u64,

    // First few rows of the table
    pub preview: Vec<Reading>,
}

impl DashboardSummary {
    /// Compute the summary from the full reading table and alert sequence.
    pub fn compute(readings: &[Reading], alerts: &[Alert]) -> Self {
        let latest = readings.last();

        Self {
            avg_temp: mean_of(readings, |r| r.temperature),
            avg_humidity: mean_of(readings, |r| r.humidity),
            avg_aqi: mean_of(readings, |r| r.aqi),
            max_aqi: max_of(readings, |r| r.aqi),
            latest_temp: latest.and_then(|r| r.temperature),
            latest_humidity: latest.and_then(|r| r.humidity),
            latest_aqi: latest.and_then(|r| r.aqi),
            avg_soil_moisture: mean_of(readings, |r| r.soil_moisture),
            avg_crop_health: mean_of(readings, |r| r.crop_health),
            avg_forest_health: mean_of(readings, |r| r.forest_health),
            avg_wildlife_index: mean_of(readings, |r| r.wildlife_index),
            avg_water_quality: mean_of(readings, |r| r.water_quality),
            high_temp_count: count_kind(alerts, AlertKind::HighTemperature),
            low_humidity_count: count_kind(alerts, AlertKind::LowHumidity),
            high_aqi_count: count_kind(alerts, AlertKind::HighAqi),
            preview: readings.iter().take(PREVIEW_ROWS).cloned().collect(),
        }
    }
}

/// Mean of a metric over the rows where it is present, rounded to 2 decimals
fn mean_of(readings: &[Reading], metric: impl Fn(&Reading) -> Option<f64>) -> Option<f64> {
    let values: Vec<f64> = readings.iter().filter_map(&metric).collect();
    if values.is_empty() {
        return None;
    }
    Some(round2(values.iter().sum::<f64>() / values.len() as f64))
}

/// Maximum of a metric over the rows where it is present
fn max_of(readings: &[Reading], metric: impl Fn(&Reading) -> Option<f64>) -> Option<f64> {
    readings
        .iter()
        .filter_map(metric)
        .fold(None, |acc: Option<f64>, v| {
            Some(acc.map_or(v, |m| m.max(v)))
        })
        .map(round2)
}

fn count_kind(alerts: &[Alert], kind: AlertKind) -> u64 {
    alerts.iter().filter(|a| a.kind == kind).count() as u64
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use shared::evaluate_alerts;

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, day).unwrap()
    }

    #[test]
    fn test_empty_table_summary() {
        let summary = DashboardSummary::compute(&[], &[]);
        assert_eq!(summary.avg_temp, None);
        assert_eq!(summary.latest_aqi, None);
        assert_eq!(summary.high_temp_count, 0);
        assert!(summary.preview.is_empty());
    }

    #[test]
    fn test_climate_statistics_and_latest_row() {
        let rows = vec![
            Reading::climate(date(1), 36.0, 40.0, 80.0),
            Reading::climate(date(2), 20.0, 25.0, 160.0),
        ];
        let alerts = evaluate_alerts(&rows);
        let summary = DashboardSummary::compute(&rows, &alerts);

        assert_eq!(summary.avg_temp, Some(28.0));
        assert_eq!(summary.avg_humidity, Some(32.5));
        assert_eq!(summary.avg_aqi, Some(120.0));
        assert_eq!(summary.max_aqi, Some(160.0));
        assert_eq!(summary.latest_temp, Some(20.0));
        assert_eq!(summary.latest_aqi, Some(160.0));
        assert_eq!(summary.high_temp_count, 1);
        assert_eq!(summary.low_humidity_count, 1);
        assert_eq!(summary.high_aqi_count, 1);
    }

    #[test]
    fn test_absent_ecosystem_column_reports_none() {
        let rows = vec![Reading::climate(date(1), 25.0, 50.0, 60.0)];
        let summary = DashboardSummary::compute(&rows, &[]);
        assert_eq!(summary.avg_soil_moisture, None);
        assert_eq!(summary.avg_water_quality, None);
    }

    #[test]
    fn test_preview_is_capped() {
        let rows: Vec<Reading> = (1..=8)
            .map(|d| Reading::climate(date(d), 20.0, 50.0, 60.0))
            .collect();
        let summary = DashboardSummary::compute(&rows, &[]);
        assert_eq!(summary.preview.len(), PREVIEW_ROWS);
        assert_eq!(summary.preview[0].date, date(1));
    }
}
