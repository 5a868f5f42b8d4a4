//! Dataset loading boundary
//!
//! All schema enforcement lives here: the evaluator and aggregator only ever
//! see rows with a valid calendar date and parseable metric values. Optional
//! metrics may be missing as whole columns or as empty cells; both
//! deserialize to `None`.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use shared::{validate_reading, Reading};

use crate::error::{AppError, AppResult};

/// Load and validate the readings CSV from disk.
pub fn load_readings<P: AsRef<Path>>(path: P) -> AppResult<Vec<Reading>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| {
        AppError::DataLoad(format!("Cannot open {}: {}", path.display(), e))
    })?;
    parse_readings(file)
}

/// Parse and validate readings from any CSV source.
///
/// An empty (header-only) file is not an error; it yields an empty table
/// and empty alert/report sequences downstream.
pub fn parse_readings<R: Read>(reader: R) -> AppResult<Vec<Reading>> {
    let mut csv_reader = csv::Reader::from_reader(reader);

    let headers = csv_reader
        .headers()
        .map_err(|e| AppError::DataLoad(format!("Cannot read CSV header: {}", e)))?;
    if !headers.iter().any(|h| h == "date") {
        return Err(AppError::DataLoad(
            "Required column 'date' is missing".to_string(),
        ));
    }

    let mut readings = Vec::new();
    for (index, record) in csv_reader.deserialize::<Reading>().enumerate() {
        // Header is line 1, first data row is line 2
        let row = index + 2;
        let reading = record.map_err(|e| AppError::Schema {
            row,
            message: e.to_string(),
        })?;
        validate_reading(&reading).map_err(|message| AppError::Schema {
            row,
            message: message.to_string(),
        })?;
        readings.push(reading);
    }

    tracing::debug!(rows = readings.len(), "Parsed readings table");
    Ok(readings)
}
