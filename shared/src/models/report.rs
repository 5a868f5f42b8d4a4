//! Daily report models and the daily aggregator

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{Alert, Reading};
use crate::types::round2;

/// Aggregated statistics for all readings sharing one calendar date.
///
/// Averages are taken over the rows where the metric is present and rounded
/// to 2 decimal places; a metric absent from every row of the day reports
/// `None`. `alert_count` is the number of alerts raised for this date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyReport {
    pub date: NaiveDate,
    pub avg_temp: Option<f64>,
    pub avg_humidity: Option<f64>,
    pub avg_aqi: Option<f64>,
    pub max_aqi: Option<f64>,
    pub alert_count: u64,
}

/// Running accumulator for one date partition
#[derive(Default)]
struct DayAccumulator {
    temp_sum: f64,
    temp_count: u32,
    humidity_sum: f64,
    humidity_count: u32,
    aqi_sum: f64,
    aqi_count: u32,
    aqi_max: Option<f64>,
}

impl DayAccumulator {
    fn add(&mut self, reading: &Reading) {
        if let Some(t) = reading.temperature {
            self.temp_sum += t;
            self.temp_count += 1;
        }
        if let Some(h) = reading.humidity {
            self.humidity_sum += h;
            self.humidity_count += 1;
        }
        if let Some(a) = reading.aqi {
            self.aqi_sum += a;
            self.aqi_count += 1;
            self.aqi_max = Some(self.aqi_max.map_or(a, |m: f64| m.max(a)));
        }
    }

    fn avg_temp(&self) -> Option<f64> {
        (self.temp_count > 0).then(|| round2(self.temp_sum / self.temp_count as f64))
    }

    fn avg_humidity(&self) -> Option<f64> {
        (self.humidity_count > 0).then(|| round2(self.humidity_sum / self.humidity_count as f64))
    }

    fn avg_aqi(&self) -> Option<f64> {
        (self.aqi_count > 0).then(|| round2(self.aqi_sum / self.aqi_count as f64))
    }

    fn max_aqi(&self) -> Option<f64> {
        self.aqi_max.map(round2)
    }
}

/// Build one report per distinct date appearing in the reading table.
///
/// Readings are partitioned by calendar-date equality; reports come out
/// sorted by date ascending. Rounding is half-away-from-zero to 2 decimals.
/// The alert slice is counted by date equality in a single pass and joined
/// with a default of 0. Alerts are expected to come from the same table,
/// but that is not enforced here.
pub fn build_daily_reports(readings: &[Reading], alerts: &[Alert]) -> Vec<DailyReport> {
    // BTreeMap keeps the partitions in ascending date order
    let mut days: BTreeMap<NaiveDate, DayAccumulator> = BTreeMap::new();
    for reading in readings {
        days.entry(reading.date).or_default().add(reading);
    }

    let mut alert_counts: BTreeMap<NaiveDate, u64> = BTreeMap::new();
    for alert in alerts {
        *alert_counts.entry(alert.date).or_insert(0) += 1;
    }

    days.into_iter()
        .map(|(date, day)| DailyReport {
            date,
            avg_temp: day.avg_temp(),
            avg_humidity: day.avg_humidity(),
            avg_aqi: day.avg_aqi(),
            max_aqi: day.max_aqi(),
            alert_count: alert_counts.get(&date).copied().unwrap_or(0),
        })
        .collect()
}
