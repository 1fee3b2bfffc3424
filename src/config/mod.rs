#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use std::time::Duration;

pub const DEFAULT_MODEL_URL: &str = "http://localhost:11434";
pub const DEFAULT_MODEL_NAME: &str = "llama3.2:3b";
pub const DEFAULT_SAMPLE_PATH: &str = "sample_emails.csv";

/// Connection and sampling settings for the model-serving endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelConfig {
    pub url: String,
    pub name: String,
    pub classify_timeout: Duration,
    pub generate_timeout: Duration,
    pub classify_temperature: f64,
    pub generate_temperature: f64,
    pub top_p: f64,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_MODEL_URL.to_string(),
            name: DEFAULT_MODEL_NAME.to_string(),
            classify_timeout: Duration::from_secs(30),
            generate_timeout: Duration::from_secs(45),
            classify_temperature: 0.1,
            generate_temperature: 0.7,
            top_p: 0.9,
        }
    }
}

impl ModelConfig {
    pub fn with_endpoint(url: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            name: name.into(),
            ..Self::default()
        }
    }
}

impl Validate for ModelConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_url("model.url", &self.url)?;
        validation::validate_non_empty_string("model.name", &self.name)?;
        validation::validate_timeout("model.classify_timeout_secs", self.classify_timeout)?;
        validation::validate_timeout("model.generate_timeout_secs", self.generate_timeout)?;
        validation::validate_range("model.classify_temperature", self.classify_temperature, 0.0, 2.0)?;
        validation::validate_range("model.generate_temperature", self.generate_temperature, 0.0, 2.0)?;
        validation::validate_range("model.top_p", self.top_p, 0.0, 1.0)?;
        Ok(())
    }
}

/// Resolved runtime settings: TOML file first, then command line overrides.
#[derive(Debug, Clone, PartialEq)]
pub struct AssistantSettings {
    pub model: ModelConfig,
    pub use_model: bool,
    pub default_tone: String,
    pub sample_path: String,
}

impl Default for AssistantSettings {
    fn default() -> Self {
        Self {
            model: ModelConfig::default(),
            use_model: true,
            default_tone: "professional".to_string(),
            sample_path: DEFAULT_SAMPLE_PATH.to_string(),
        }
    }
}

impl ConfigProvider for AssistantSettings {
    fn model(&self) -> &ModelConfig {
        &self.model
    }

    fn use_model(&self) -> bool {
        self.use_model
    }

    fn default_tone(&self) -> &str {
        &self.default_tone
    }

    fn sample_path(&self) -> &str {
        &self.sample_path
    }
}

impl Validate for AssistantSettings {
    fn validate(&self) -> Result<()> {
        if self.use_model {
            self.model.validate()?;
        }
        validation::validate_tone("assistant.default_tone", &self.default_tone)?;
        validation::validate_sample_path("data.sample_path", &self.sample_path)?;
        Ok(())
    }
}
