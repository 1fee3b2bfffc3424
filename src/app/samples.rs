use crate::domain::model::SampleEmail;
use crate::utils::error::{AssistError, Result};
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use std::io::Read;
use std::path::Path;

const REQUIRED_COLUMNS: [&str; 3] = ["sender", "subject", "body"];

/// Loads sample emails from a CSV file. A missing file is not an error: it
/// yields no samples.
pub fn load_samples<P: AsRef<Path>>(path: P) -> Result<Vec<SampleEmail>> {
    let path = path.as_ref();
    if !path.exists() {
        tracing::warn!("No sample emails found at {}", path.display());
        return Ok(Vec::new());
    }

    tracing::debug!("Reading sample emails from {}", path.display());
    let file = std::fs::File::open(path)?;
    read_samples(file)
}

pub fn read_samples<R: Read>(reader: R) -> Result<Vec<SampleEmail>> {
    let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::Headers).from_reader(reader);

    let headers = reader.headers()?.clone();
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(AssistError::DataError {
                message: format!("sample CSV is missing the '{}' column", column),
            });
        }
    }

    let mut samples = Vec::new();
    for row in reader.deserialize() {
        let sample: SampleEmail = row?;
        samples.push(sample);
    }

    tracing::debug!("Loaded {} sample emails", samples.len());
    Ok(samples)
}

/// Best-effort parse of a `sent_date` cell.
pub fn parse_sent_date(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_utc());
    }

    for format in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(dt);
        }
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}
