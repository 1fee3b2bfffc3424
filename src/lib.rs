pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use adapters::{ConfiguredModel, DisabledModel, OllamaClient};
pub use config::{AssistantSettings, ModelConfig};
pub use core::assistant::EmailAssistant;
pub use domain::model::{Category, Classification, Email, Priority, SampleEmail, Tone};
pub use utils::error::{AssistError, ModelError, Result};
