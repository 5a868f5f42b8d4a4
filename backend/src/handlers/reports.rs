//! HTTP handlers for daily reports, with CSV export

use axum::{
    extract::{Query, State},
    http::header,
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct ReportQuery {
    pub format: Option<String>, // "json" or "csv"
}

/// Get the daily report sequence
pub async fn list_daily_reports(
    State(state): State<AppState>,
    Query(query): Query<ReportQuery>,
) -> AppResult<impl IntoResponse> {
    let snapshot = state.snapshot();
    let reports = snapshot.daily_reports();

    if query.format.as_deref() == Some("csv") {
        let csv = export_to_csv(reports)?;
        Ok((
            [
                (header::CONTENT_TYPE, "text/csv"),
                (
                    header::CONTENT_DISPOSITION,
                    "attachment; filename=\"daily_reports.csv\"",
                ),
            ],
            csv,
        )
            .into_response())
    } else {
        Ok(Json(reports.to_vec()).into_response())
    }
}

/// Serialize a report slice to CSV
fn export_to_csv<T: Serialize>(data: &[T]) -> AppResult<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);
    for record in data {
        wtr.serialize(record)
            .map_err(|e| AppError::Internal(format!("CSV serialization error: {}", e)))?;
    }
    let csv_data = String::from_utf8(
        wtr.into_inner()
            .map_err(|e| AppError::Internal(format!("CSV writer error: {}", e)))?,
    )
    .map_err(|e| AppError::Internal(format!("UTF-8 conversion error: {}", e)))?;
    Ok(csv_data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use shared::DailyReport;

    #[test]
    fn test_reports_export_to_csv() {
        let reports = vec![DailyReport {
            date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            avg_temp: Some(28.0),
            avg_humidity: Some(32.5),
            avg_aqi: Some(120.0),
            max_aqi: Some(160.0),
            alert_count: 3,
        }];
        let csv = export_to_csv(&reports).unwrap();
        let mut lines = csv.lines();
        assert_eq!(
            lines.next().unwrap(),
            "date,avg_temp,avg_humidity,avg_aqi,max_aqi,alert_count"
        );
        assert_eq!(lines.next().unwrap(), "2025-01-01,28.0,32.5,120.0,160.0,3");
    }
}
