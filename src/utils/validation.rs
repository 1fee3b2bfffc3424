use crate::domain::model::Tone;
use crate::utils::error::{AssistError, Result};
use std::path::Path;
use std::time::Duration;
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

fn invalid(field: &str, value: impl ToString, reason: impl Into<String>) -> AssistError {
    AssistError::InvalidConfigValueError {
        field: field.to_string(),
        value: value.to_string(),
        reason: reason.into(),
    }
}

/// The model endpoint must be an absolute http(s) URL.
pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(invalid(field_name, url_str, "Model endpoint cannot be empty"));
    }

    let url = Url::parse(url_str)
        .map_err(|e| invalid(field_name, url_str, format!("Invalid URL format: {}", e)))?;
    match url.scheme() {
        "http" | "https" => Ok(()),
        scheme => Err(invalid(
            field_name,
            url_str,
            format!("Model endpoint must use http or https, got {}", scheme),
        )),
    }
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(invalid(field_name, value, "Value cannot be empty or whitespace-only"));
    }
    Ok(())
}

/// Model requests need at least one whole second to complete.
pub fn validate_timeout(field_name: &str, timeout: Duration) -> Result<()> {
    if timeout.as_secs() < 1 {
        return Err(invalid(
            field_name,
            format!("{:?}", timeout),
            "Timeout must be at least 1 second",
        ));
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(invalid(
            field_name,
            value,
            format!("Value must be between {} and {}", min, max),
        ));
    }
    Ok(())
}

/// Sample emails are read from a non-empty `.csv` path.
pub fn validate_sample_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(invalid(field_name, path, "Path cannot be empty"));
    }
    if path.contains('\0') {
        return Err(invalid(field_name, path, "Path contains null bytes"));
    }

    match Path::new(path).extension().and_then(|ext| ext.to_str()) {
        Some("csv") => Ok(()),
        Some(ext) => Err(invalid(
            field_name,
            path,
            format!("Sample file must be a .csv file, got .{}", ext),
        )),
        None => Err(invalid(field_name, path, "Sample file must have a .csv extension")),
    }
}

/// The default tone must be one of the exact tone labels.
pub fn validate_tone(field_name: &str, tone: &str) -> Result<()> {
    if Tone::from_label(tone).is_some() {
        return Ok(());
    }
    let allowed: Vec<&str> = Tone::ALL.iter().map(|t| t.as_str()).collect();
    Err(invalid(
        field_name,
        tone,
        format!("Unknown tone. Allowed tones: {}", allowed.join(", ")),
    ))
}
