use crate::config::ModelConfig;
use crate::domain::model::{Classification, Email};
use crate::utils::error::ModelResult;
use async_trait::async_trait;

/// Settings the assistant needs from whichever config source built it.
pub trait ConfigProvider: Send + Sync {
    fn model(&self) -> &ModelConfig;
    fn use_model(&self) -> bool;
    fn default_tone(&self) -> &str;
    fn sample_path(&self) -> &str;
}

/// Upstream generative model. Returns either a fully valid value or a
/// failure the caller turns into the deterministic fallback.
#[async_trait]
pub trait ModelBackend: Send + Sync {
    async fn classify_via_model(&self, email: &Email) -> ModelResult<Classification>;

    async fn generate_via_model(
        &self,
        email: &Email,
        category: &str,
        tone: &str,
    ) -> ModelResult<String>;
}
