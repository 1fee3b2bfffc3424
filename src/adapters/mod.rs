// Adapters layer: concrete implementations of the model port.

pub mod ollama;
pub mod prompts;

use crate::core::{ConfigProvider, ModelBackend};
use crate::domain::model::{Classification, Email};
use crate::utils::error::{ModelError, ModelResult};
use async_trait::async_trait;

pub use ollama::OllamaClient;

/// Backend used in offline mode. Always unavailable, so every call takes the
/// deterministic path.
#[derive(Debug, Clone, Copy, Default)]
pub struct DisabledModel;

#[async_trait]
impl ModelBackend for DisabledModel {
    async fn classify_via_model(&self, _email: &Email) -> ModelResult<Classification> {
        Err(ModelError::Unavailable("model disabled".to_string()))
    }

    async fn generate_via_model(
        &self,
        _email: &Email,
        _category: &str,
        _tone: &str,
    ) -> ModelResult<String> {
        Err(ModelError::Unavailable("model disabled".to_string()))
    }
}

/// Backend chosen from settings.
#[derive(Debug, Clone)]
pub enum ConfiguredModel {
    Ollama(OllamaClient),
    Disabled(DisabledModel),
}

impl ConfiguredModel {
    pub fn from_config<C: ConfigProvider>(config: &C) -> Self {
        if config.use_model() {
            Self::Ollama(OllamaClient::new(config.model().clone()))
        } else {
            Self::Disabled(DisabledModel)
        }
    }
}

#[async_trait]
impl ModelBackend for ConfiguredModel {
    async fn classify_via_model(&self, email: &Email) -> ModelResult<Classification> {
        match self {
            Self::Ollama(client) => client.classify_via_model(email).await,
            Self::Disabled(model) => model.classify_via_model(email).await,
        }
    }

    async fn generate_via_model(
        &self,
        email: &Email,
        category: &str,
        tone: &str,
    ) -> ModelResult<String> {
        match self {
            Self::Ollama(client) => client.generate_via_model(email, category, tone).await,
            Self::Disabled(model) => model.generate_via_model(email, category, tone).await,
        }
    }
}
