use crate::core::rule_classifier::RuleBasedClassifier;
use crate::core::templates::TemplateResponseBuilder;
use crate::core::ModelBackend;
use crate::domain::model::{Classification, Email};

/// Two-tier email assistant: try the model, fall back to rules and templates.
///
/// Model failures are logged and absorbed here; callers always get a value.
pub struct EmailAssistant<M: ModelBackend> {
    model: M,
    rules: RuleBasedClassifier,
    templates: TemplateResponseBuilder,
}

impl<M: ModelBackend> EmailAssistant<M> {
    pub fn new(model: M) -> Self {
        Self {
            model,
            rules: RuleBasedClassifier::default(),
            templates: TemplateResponseBuilder::new(),
        }
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    pub async fn classify(&self, email: &Email) -> Classification {
        match self.model.classify_via_model(email).await {
            Ok(classification) => {
                tracing::debug!(
                    category = %classification.category,
                    priority = %classification.priority,
                    "model classification"
                );
                classification
            }
            Err(e) => {
                tracing::warn!("Model classification failed: {}", e);
                tracing::warn!("Falling back to rule-based classification");
                self.rules.classify(email)
            }
        }
    }

    pub async fn generate_response(&self, email: &Email, category: &str, tone: &str) -> String {
        match self.model.generate_via_model(email, category, tone).await {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!("Model response generation failed: {}", e);
                tracing::warn!("Falling back to template-based responses");
                self.templates.build(&email.sender, category, tone)
            }
        }
    }

    /// Classify first, then draft a reply for the resulting category.
    pub async fn respond(&self, email: &Email, tone: &str) -> (Classification, String) {
        let classification = self.classify(email).await;
        let reply = self
            .generate_response(email, classification.category.as_str(), tone)
            .await;
        (classification, reply)
    }
}
