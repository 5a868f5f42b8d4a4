//! Common types used across the platform

use serde::{Deserialize, Serialize};

/// Risk band for a (predicted or measured) AQI value
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum AqiRiskBand {
    Good,
    Moderate,
    Unhealthy,
    Hazardous,
}

impl AqiRiskBand {
    /// Classify an AQI value into its risk band.
    ///
    /// Band upper bounds are inclusive: 50 is still GOOD, 200 is still
    /// UNHEALTHY.
    pub fn classify(aqi: f64) -> Self {
        if aqi <= 50.0 {
            AqiRiskBand::Good
        } else if aqi <= 100.0 {
            AqiRiskBand::Moderate
        } else if aqi <= 200.0 {
            AqiRiskBand::Unhealthy
        } else {
            AqiRiskBand::Hazardous
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AqiRiskBand::Good => "GOOD",
            AqiRiskBand::Moderate => "MODERATE",
            AqiRiskBand::Unhealthy => "UNHEALTHY",
            AqiRiskBand::Hazardous => "HAZARDOUS",
        }
    }
}

impl std::fmt::Display for AqiRiskBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Round a metric value to 2 decimal places.
///
/// Uses `f64::round` semantics (half away from zero), so 0.005 rounds up to
/// 0.01. Report and dashboard figures all go through this.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_risk_band_boundaries() {
        assert_eq!(AqiRiskBand::classify(0.0), AqiRiskBand::Good);
        assert_eq!(AqiRiskBand::classify(50.0), AqiRiskBand::Good);
        assert_eq!(AqiRiskBand::classify(50.01), AqiRiskBand::Moderate);
        assert_eq!(AqiRiskBand::classify(100.0), AqiRiskBand::Moderate);
        assert_eq!(AqiRiskBand::classify(100.01), AqiRiskBand::Unhealthy);
        assert_eq!(AqiRiskBand::classify(200.0), AqiRiskBand::Unhealthy);
        assert_eq!(AqiRiskBand::classify(200.01), AqiRiskBand::Hazardous);
    }

    #[test]
    fn test_risk_band_labels() {
        assert_eq!(AqiRiskBand::Good.to_string(), "GOOD");
        assert_eq!(AqiRiskBand::Hazardous.label(), "HAZARDOUS");
    }

    #[test]
    fn test_round2() {
        assert_eq!(round2(28.004), 28.0);
        assert_eq!(round2(20.0 / 3.0), 6.67);
        assert_eq!(round2(120.0), 120.0);
        // 0.125 is exact in binary, so this is a true half case
        assert_eq!(round2(0.125), 0.13);
        assert_eq!(round2(-0.125), -0.13);
    }
}
