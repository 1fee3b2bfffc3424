use crate::core::keywords::REASONING_GROUPS;
use crate::core::scorer::KeywordScorer;
use crate::domain::model::{Category, Classification, Email, Priority};

const FALLBACK_CLAUSE: &str = "General inquiry based on content analysis";

/// Deterministic classifier used whenever the model path fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleBasedClassifier {
    scorer: KeywordScorer,
}

impl RuleBasedClassifier {
    pub fn new(scorer: KeywordScorer) -> Self {
        Self { scorer }
    }

    pub fn classify(&self, email: &Email) -> Classification {
        let text = email.search_text();
        let category = self.scorer.determine_category(&text);
        let priority = self.scorer.determine_priority(&text);
        let reasoning = build_reasoning(category, priority, &text);

        tracing::debug!(
            category = %category,
            priority = %priority,
            "rule-based classification"
        );

        Classification {
            category,
            priority,
            reasoning,
        }
    }
}

/// Reasoning clauses are checked against their own trigger groups, not the
/// scoring tables, so they may mention terms that did not decide the category.
fn build_reasoning(category: Category, priority: Priority, text: &str) -> String {
    let mut parts: Vec<&str> = REASONING_GROUPS
        .iter()
        .filter(|(triggers, _)| triggers.iter().any(|t| text.contains(*t)))
        .map(|(_, clause)| *clause)
        .collect();

    match priority {
        Priority::High => parts.push("Contains urgent/critical keywords"),
        Priority::Medium => parts.push("Contains support-related keywords"),
        Priority::Low => {}
    }

    if parts.is_empty() {
        parts.push(FALLBACK_CLAUSE);
    }

    format!(
        "Classified as {} with {} priority. {}.",
        category,
        priority,
        parts.join("; ")
    )
}
