use thiserror::Error;

#[derive(Error, Debug)]
pub enum AssistError {
    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Data error: {message}")]
    DataError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl AssistError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::InvalidConfigValueError { .. } => ErrorSeverity::Medium,
            Self::CsvError(_)
            | Self::DataError { .. }
            | Self::ConfigError { .. }
            | Self::ConfigValidationError { .. } => ErrorSeverity::High,
            Self::IoError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            Self::CsvError(_) | Self::DataError { .. } => {
                "Make sure the sample file has the columns sender,subject,body,sent_date"
                    .to_string()
            }
            Self::IoError(_) => "Check that the file exists and is readable".to_string(),
            Self::ConfigError { .. } | Self::ConfigValidationError { .. } => {
                "Fix the configuration file and try again".to_string()
            }
            Self::InvalidConfigValueError { field, .. } => {
                format!("Provide a valid value for '{}'", field)
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::CsvError(e) => format!("Could not read sample emails: {}", e),
            Self::IoError(e) => format!("File access failed: {}", e),
            _ => self.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, AssistError>;

/// Why the model path could not produce a usable value. Both kinds trigger
/// the deterministic fallback; neither is surfaced past classify/generate.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("model unavailable: {0}")]
    Unavailable(String),

    #[error("invalid model response: {0}")]
    ResponseInvalid(String),
}

impl From<reqwest::Error> for ModelError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() || e.is_body() {
            Self::ResponseInvalid(e.to_string())
        } else {
            Self::Unavailable(e.to_string())
        }
    }
}

pub type ModelResult<T> = std::result::Result<T, ModelError>;
