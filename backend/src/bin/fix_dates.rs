//! One-off dataset maintenance tool
//!
//! Rewrites every `date` cell of the readings CSV to year 2025, keeping the
//! month and day. Non-date columns pass through untouched, in their
//! original order.
//!
//! Usage: fix-dates [readings.csv]

use anyhow::{bail, Context, Result};
use chrono::{Datelike, NaiveDate};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "fix_dates=info".into()),
        )
        .init();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "data/environment_data.csv".to_string());

    let contents = std::fs::read_to_string(&path)
        .with_context(|| format!("Cannot open {}", path))?;
    let rewritten = rewrite_dates(&contents)?;
    std::fs::write(&path, rewritten)
        .with_context(|| format!("Cannot write {}", path))?;

    tracing::info!("Dates updated to 2025 in {}", path);
    Ok(())
}

/// Rewrite the year of every value in the `date` column to 2025.
fn rewrite_dates(contents: &str) -> Result<String> {
    let mut reader = csv::Reader::from_reader(contents.as_bytes());
    let headers = reader.headers().context("Cannot read CSV header")?.clone();
    let Some(date_column) = headers.iter().position(|h| h == "date") else {
        bail!("Required column 'date' is missing");
    };

    let mut writer = csv::Writer::from_writer(vec![]);
    writer.write_record(&headers)?;

    for (index, record) in reader.records().enumerate() {
        let record = record.with_context(|| format!("Malformed row {}", index + 2))?;
        let raw_date = &record[date_column];
        let parsed: NaiveDate = raw_date
            .parse()
            .with_context(|| format!("Row {}: invalid date '{}'", index + 2, raw_date))?;
        let fixed = parsed
            .with_year(2025)
            .with_context(|| format!("Row {}: no 2025 equivalent for '{}'", index + 2, raw_date))?;

        let row: Vec<String> = record
            .iter()
            .enumerate()
            .map(|(col, cell)| {
                if col == date_column {
                    fixed.format("%Y-%m-%d").to_string()
                } else {
                    cell.to_string()
                }
            })
            .collect();
        writer.write_record(&row)?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| anyhow::anyhow!("CSV writer error: {}", e))?;
    String::from_utf8(bytes).context("UTF-8 conversion error")
}
