//! Immutable monitoring snapshot
//!
//! The reading table plus everything derived from it in one pass: the alert
//! sequence and the daily report sequence. Built once at startup and on
//! explicit reload; never mutated, so any number of handlers can hold
//! references to the same snapshot concurrently.

use shared::{build_daily_reports, evaluate_alerts, Alert, DailyReport, Reading};

use crate::services::DashboardSummary;

/// One immutable evaluation of the dataset
#[derive(Debug)]
pub struct MonitorSnapshot {
    readings: Vec<Reading>,
    alerts: Vec<Alert>,
    daily_reports: Vec<DailyReport>,
}

impl MonitorSnapshot {
    /// Run the alert evaluator and the daily aggregator over a freshly
    /// loaded reading table.
    pub fn build(readings: Vec<Reading>) -> Self {
        let alerts = evaluate_alerts(&readings);
        let daily_reports = build_daily_reports(&readings, &alerts);
        Self {
            readings,
            alerts,
            daily_reports,
        }
    }

    pub fn readings(&self) -> &[Reading] {
        &self.readings
    }

    /// The ordered alert sequence (input row order, fixed rule order
    /// within a row).
    pub fn alerts(&self) -> &[Alert] {
        &self.alerts
    }

    /// The daily report sequence, sorted by date ascending.
    pub fn daily_reports(&self) -> &[DailyReport] {
        &self.daily_reports
    }

    /// Dashboard statistics for the current table.
    pub fn dashboard_summary(&self) -> DashboardSummary {
        DashboardSummary::compute(&self.readings, &self.alerts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_empty_snapshot() {
        let snapshot = MonitorSnapshot::build(Vec::new());
        assert!(snapshot.readings().is_empty());
        assert!(snapshot.alerts().is_empty());
        assert!(snapshot.daily_reports().is_empty());
    }

    #[test]
    fn test_build_wires_alerts_into_reports() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        let snapshot = MonitorSnapshot::build(vec![
            Reading::climate(date, 36.0, 40.0, 80.0),
            Reading::climate(date, 20.0, 25.0, 160.0),
        ]);
        assert_eq!(snapshot.alerts().len(), 3);
        assert_eq!(snapshot.daily_reports().len(), 1);
        assert_eq!(snapshot.daily_reports()[0].alert_count, 3);
    }
}
