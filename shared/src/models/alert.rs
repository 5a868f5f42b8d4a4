//! Threshold alert models and the alert evaluator

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::Reading;

/// The fixed set of alert conditions the evaluator can raise.
///
/// Serialized with the human-readable labels the dashboard displays.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum AlertKind {
    #[serde(rename = "High Temperature")]
    HighTemperature,
    #[serde(rename = "Low Humidity")]
    LowHumidity,
    #[serde(rename = "High AQI")]
    HighAqi,
    #[serde(rename = "Low Soil Moisture")]
    LowSoilMoisture,
    #[serde(rename = "Crop Health Risk")]
    CropHealthRisk,
    #[serde(rename = "Forest Stress")]
    ForestStress,
    #[serde(rename = "Wildlife Activity Low")]
    WildlifeActivityLow,
    #[serde(rename = "Water Quality Issue")]
    WaterQualityIssue,
}

impl AlertKind {
    pub fn label(&self) -> &'static str {
        match self {
            AlertKind::HighTemperature => "High Temperature",
            AlertKind::LowHumidity => "Low Humidity",
            AlertKind::HighAqi => "High AQI",
            AlertKind::LowSoilMoisture => "Low Soil Moisture",
            AlertKind::CropHealthRisk => "Crop Health Risk",
            AlertKind::ForestStress => "Forest Stress",
            AlertKind::WildlifeActivityLow => "Wildlife Activity Low",
            AlertKind::WaterQualityIssue => "Water Quality Issue",
        }
    }

    /// Human-readable message for this condition with the triggering value
    /// interpolated.
    pub fn message(&self, value: f64) -> String {
        match self {
            AlertKind::HighTemperature => {
                format!("High temperature detected: {} °C", value)
            }
            AlertKind::LowHumidity => format!("Low humidity detected: {} %", value),
            AlertKind::HighAqi => format!("Unhealthy AQI level: {}", value),
            AlertKind::LowSoilMoisture => {
                format!("Possible drought / soil dryness: {}%", value)
            }
            AlertKind::CropHealthRisk => {
                format!("Crop health is below normal: index {}", value)
            }
            AlertKind::ForestStress => {
                format!("Forest vegetation index is low: {}", value)
            }
            AlertKind::WildlifeActivityLow => {
                format!("Wildlife activity appears reduced: index {}", value)
            }
            AlertKind::WaterQualityIssue => {
                format!("Water quality index is poor: {}", value)
            }
        }
    }
}

impl std::fmt::Display for AlertKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for AlertKind {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "High Temperature" => Ok(AlertKind::HighTemperature),
            "Low Humidity" => Ok(AlertKind::LowHumidity),
            "High AQI" => Ok(AlertKind::HighAqi),
            "Low Soil Moisture" => Ok(AlertKind::LowSoilMoisture),
            "Crop Health Risk" => Ok(AlertKind::CropHealthRisk),
            "Forest Stress" => Ok(AlertKind::ForestStress),
            "Wildlife Activity Low" => Ok(AlertKind::WildlifeActivityLow),
            "Water Quality Issue" => Ok(AlertKind::WaterQualityIssue),
            _ => Err("Unknown alert kind"),
        }
    }
}

/// A flagged threshold violation derived from a single reading
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    pub date: NaiveDate,
    #[serde(rename = "type")]
    pub kind: AlertKind,
    pub value: f64,
    pub message: String,
}

impl Alert {
    pub fn new(date: NaiveDate, kind: AlertKind, value: f64) -> Self {
        Self {
            date,
            kind,
            value,
            message: kind.message(value),
        }
    }
}

/// Threshold comparison direction for a rule
#[derive(Debug, Clone, Copy)]
enum Condition {
    Above(f64),
    AtLeast(f64),
    Below(f64),
}

impl Condition {
    fn is_met(&self, value: f64) -> bool {
        match *self {
            Condition::Above(limit) => value > limit,
            Condition::AtLeast(limit) => value >= limit,
            Condition::Below(limit) => value < limit,
        }
    }
}

/// The rule table, in evaluation order. Each entry is the metric accessor,
/// the trigger condition, and the alert kind raised.
const RULES: [(fn(&Reading) -> Option<f64>, Condition, AlertKind); 8] = [
    (
        |r| r.temperature,
        Condition::Above(35.0),
        AlertKind::HighTemperature,
    ),
    (|r| r.humidity, Condition::Below(30.0), AlertKind::LowHumidity),
    (|r| r.aqi, Condition::AtLeast(150.0), AlertKind::HighAqi),
    (
        |r| r.soil_moisture,
        Condition::Below(30.0),
        AlertKind::LowSoilMoisture,
    ),
    (
        |r| r.crop_health,
        Condition::Below(70.0),
        AlertKind::CropHealthRisk,
    ),
    (
        |r| r.forest_health,
        Condition::Below(75.0),
        AlertKind::ForestStress,
    ),
    (
        |r| r.wildlife_index,
        Condition::Below(65.0),
        AlertKind::WildlifeActivityLow,
    ),
    (
        |r| r.water_quality,
        Condition::Below(75.0),
        AlertKind::WaterQualityIssue,
    ),
];

/// Evaluate every threshold rule against every reading, in one pass.
///
/// Pure function of its input. Input row order is preserved in the output
/// and rules apply in a fixed order within a row, so alerts from an earlier
/// row always precede alerts from a later one. A rule whose metric is
/// absent from a row is skipped for that row; a single row may raise
/// several alerts.
pub fn evaluate_alerts(readings: &[Reading]) -> Vec<Alert> {
    let mut alerts = Vec::new();

    for reading in readings {
        for (metric, condition, kind) in RULES {
            if let Some(value) = metric(reading) {
                if condition.is_met(value) {
                    alerts.push(Alert::new(reading.date, kind, value));
                }
            }
        }
    }

    alerts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, day).unwrap()
    }

    fn quiet_reading(day: u32) -> Reading {
        Reading::climate(date(day), 25.0, 50.0, 60.0)
    }

    #[test]
    fn test_alert_message_interpolates_value() {
        let alert = Alert::new(date(1), AlertKind::HighTemperature, 36.5);
        assert_eq!(alert.message, "High temperature detected: 36.5 °C");
        assert_eq!(alert.kind.label(), "High Temperature");
    }

    #[test]
    fn test_alert_kind_serializes_as_label() {
        let json = serde_json::to_string(&AlertKind::WildlifeActivityLow).unwrap();
        assert_eq!(json, "\"Wildlife Activity Low\"");
    }

    #[test]
    fn test_alert_kind_parses_from_label() {
        for kind in [
            AlertKind::HighTemperature,
            AlertKind::LowHumidity,
            AlertKind::HighAqi,
            AlertKind::LowSoilMoisture,
            AlertKind::CropHealthRisk,
            AlertKind::ForestStress,
            AlertKind::WildlifeActivityLow,
            AlertKind::WaterQualityIssue,
        ] {
            assert_eq!(kind.label().parse::<AlertKind>(), Ok(kind));
        }
        assert!("Volcano".parse::<AlertKind>().is_err());
    }

    #[test]
    fn test_quiet_reading_raises_nothing() {
        assert!(evaluate_alerts(&[quiet_reading(1)]).is_empty());
    }

    #[test]
    fn test_empty_table_yields_empty_alerts() {
        assert!(evaluate_alerts(&[]).is_empty());
    }

    #[test]
    fn test_high_temperature_boundary_is_exclusive() {
        let mut reading = quiet_reading(1);
        reading.temperature = Some(35.0);
        assert!(evaluate_alerts(&[reading.clone()]).is_empty());

        reading.temperature = Some(35.1);
        let alerts = evaluate_alerts(&[reading]);
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].kind, AlertKind::HighTemperature);
        assert_eq!(alerts[0].value, 35.1);
        assert_eq!(alerts[0].date, date(1));
    }

    #[test]
    fn test_high_aqi_boundary_is_inclusive() {
        let mut reading = quiet_reading(1);
        reading.aqi = Some(149.999);
        assert!(evaluate_alerts(&[reading.clone()]).is_empty());

        reading.aqi = Some(150.0);
        let alerts = evaluate_alerts(&[reading]);
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].kind, AlertKind::HighAqi);
    }

    #[test]
    fn test_low_humidity_boundary() {
        let mut reading = quiet_reading(1);
        reading.humidity = Some(30.0);
        assert!(evaluate_alerts(&[reading.clone()]).is_empty());

        reading.humidity = Some(29.9);
        let alerts = evaluate_alerts(&[reading]);
        assert_eq!(alerts[0].kind, AlertKind::LowHumidity);
    }

    #[test]
    fn test_ecosystem_rules_fire_when_present() {
        let mut reading = quiet_reading(2);
        reading.soil_moisture = Some(20.0);
        reading.crop_health = Some(69.9);
        reading.forest_health = Some(74.0);
        reading.wildlife_index = Some(64.0);
        reading.water_quality = Some(60.0);

        let kinds: Vec<AlertKind> = evaluate_alerts(&[reading])
            .into_iter()
            .map(|a| a.kind)
            .collect();
        assert_eq!(
            kinds,
            vec![
                AlertKind::LowSoilMoisture,
                AlertKind::CropHealthRisk,
                AlertKind::ForestStress,
                AlertKind::WildlifeActivityLow,
                AlertKind::WaterQualityIssue,
            ]
        );
    }

    #[test]
    fn test_one_row_can_raise_several_alerts_in_rule_order() {
        let reading = Reading::climate(date(3), 40.0, 10.0, 180.0);
        let kinds: Vec<AlertKind> = evaluate_alerts(&[reading])
            .into_iter()
            .map(|a| a.kind)
            .collect();
        assert_eq!(
            kinds,
            vec![
                AlertKind::HighTemperature,
                AlertKind::LowHumidity,
                AlertKind::HighAqi,
            ]
        );
    }

    #[test]
    fn test_row_order_is_preserved() {
        let rows = vec![
            Reading::climate(date(2), 36.0, 50.0, 60.0),
            Reading::climate(date(1), 37.0, 50.0, 60.0),
        ];
        let alerts = evaluate_alerts(&rows);
        // Later row never reorders ahead of an earlier one, even when its
        // date sorts first.
        assert_eq!(alerts[0].date, date(2));
        assert_eq!(alerts[1].date, date(1));
    }

    #[test]
    fn test_worked_scenario() {
        let rows = vec![
            Reading::climate(date(1), 36.0, 40.0, 80.0),
            Reading::climate(date(1), 20.0, 25.0, 160.0),
        ];
        let alerts = evaluate_alerts(&rows);
        assert_eq!(alerts.len(), 3);
        assert_eq!(alerts[0].kind, AlertKind::HighTemperature);
        assert_eq!(alerts[0].value, 36.0);
        assert_eq!(alerts[1].kind, AlertKind::LowHumidity);
        assert_eq!(alerts[1].value, 25.0);
        assert_eq!(alerts[2].kind, AlertKind::HighAqi);
        assert_eq!(alerts[2].value, 160.0);
    }
}
