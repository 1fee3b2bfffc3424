use crate::adapters::prompts::{classification_prompt, response_prompt};
use crate::config::ModelConfig;
use crate::core::ModelBackend;
use crate::domain::model::{Category, Classification, Email, Priority};
use crate::utils::error::{ModelError, ModelResult};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: String,
    stream: bool,
    options: GenerateOptions,
}

#[derive(Debug, Serialize)]
struct GenerateOptions {
    temperature: f64,
    top_p: f64,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    response: String,
}

#[derive(Debug, Deserialize)]
struct RawClassification {
    category: String,
    priority: String,
    reasoning: String,
}

/// Client for an Ollama-style `/api/generate` endpoint.
#[derive(Debug, Clone)]
pub struct OllamaClient {
    config: ModelConfig,
    client: Client,
}

impl OllamaClient {
    pub fn new(config: ModelConfig) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }

    pub fn config(&self) -> &ModelConfig {
        &self.config
    }

    fn generate_url(&self) -> String {
        format!("{}/api/generate", self.config.url.trim_end_matches('/'))
    }

    /// One non-streaming generate call; returns the raw `response` text.
    async fn generate(&self, prompt: String, temperature: f64, timeout: Duration) -> ModelResult<String> {
        let url = self.generate_url();
        let body = GenerateRequest {
            model: &self.config.name,
            prompt,
            stream: false,
            options: GenerateOptions {
                temperature,
                top_p: self.config.top_p,
            },
        };

        tracing::debug!("Making model request to: {} (model {})", url, self.config.name);
        let response = self
            .client
            .post(&url)
            .json(&body)
            .timeout(timeout)
            .send()
            .await?;

        tracing::debug!("Model response status: {}", response.status());
        if response.status() != StatusCode::OK {
            return Err(ModelError::ResponseInvalid(format!(
                "model server returned status {}",
                response.status()
            )));
        }

        let parsed: GenerateResponse = response.json().await?;
        Ok(parsed.response)
    }
}

#[async_trait]
impl ModelBackend for OllamaClient {
    async fn classify_via_model(&self, email: &Email) -> ModelResult<Classification> {
        let text = self
            .generate(
                classification_prompt(email),
                self.config.classify_temperature,
                self.config.classify_timeout,
            )
            .await?;
        parse_classification(&text)
    }

    async fn generate_via_model(
        &self,
        email: &Email,
        category: &str,
        tone: &str,
    ) -> ModelResult<String> {
        let text = self
            .generate(
                response_prompt(email, category, tone),
                self.config.generate_temperature,
                self.config.generate_timeout,
            )
            .await?;

        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(ModelError::ResponseInvalid(
                "model returned an empty response".to_string(),
            ));
        }
        Ok(trimmed.to_string())
    }
}

/// Slice from the first `{` through the last `}`, if that is non-empty.
pub fn extract_json_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    (end > start).then(|| &text[start..=end])
}

/// Parses the model's free text into a classification. Anything short of a
/// complete object with in-vocabulary labels is a failure.
pub fn parse_classification(text: &str) -> ModelResult<Classification> {
    let json = extract_json_object(text)
        .ok_or_else(|| ModelError::ResponseInvalid("no JSON object in model output".to_string()))?;

    let raw: RawClassification = serde_json::from_str(json)
        .map_err(|e| ModelError::ResponseInvalid(format!("unusable classification JSON: {}", e)))?;

    let category = Category::parse(&raw.category).ok_or_else(|| {
        ModelError::ResponseInvalid(format!("unknown category '{}'", raw.category))
    })?;
    let priority = Priority::parse(&raw.priority).ok_or_else(|| {
        ModelError::ResponseInvalid(format!("unknown priority '{}'", raw.priority))
    })?;

    Ok(Classification {
        category,
        priority,
        reasoning: raw.reasoning,
    })
}
