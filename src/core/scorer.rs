use crate::core::keywords::{CATEGORY_KEYWORDS, HIGH_PRIORITY_KEYWORDS, MEDIUM_PRIORITY_KEYWORDS};
use crate::domain::model::{Category, Priority};

pub type CategoryTable = [(Category, &'static [&'static str])];

/// Substring keyword scorer over read-only tables.
///
/// Expects text that is already lowercased (see `Email::search_text`).
#[derive(Debug, Clone, Copy)]
pub struct KeywordScorer {
    categories: &'static CategoryTable,
    high: &'static [&'static str],
    medium: &'static [&'static str],
}

impl Default for KeywordScorer {
    fn default() -> Self {
        Self::new(&CATEGORY_KEYWORDS, HIGH_PRIORITY_KEYWORDS, MEDIUM_PRIORITY_KEYWORDS)
    }
}

impl KeywordScorer {
    pub const fn new(
        categories: &'static CategoryTable,
        high: &'static [&'static str],
        medium: &'static [&'static str],
    ) -> Self {
        Self {
            categories,
            high,
            medium,
        }
    }

    /// Number of distinct keywords of each category found in `text`, in table order.
    pub fn category_scores(&self, text: &str) -> Vec<(Category, usize)> {
        self.categories
            .iter()
            .map(|(category, keywords)| {
                let score = keywords.iter().filter(|k| text.contains(*k)).count();
                (*category, score)
            })
            .collect()
    }

    /// Highest-scoring category; the earliest table row wins ties. All-zero
    /// scores yield `General`.
    pub fn determine_category(&self, text: &str) -> Category {
        let mut best: Option<(Category, usize)> = None;
        for (category, score) in self.category_scores(text) {
            match best {
                Some((_, best_score)) if score <= best_score => {}
                _ if score == 0 => {}
                _ => best = Some((category, score)),
            }
        }
        best.map(|(category, _)| category).unwrap_or(Category::General)
    }

    /// First trigger found, scanning the high list before the medium list.
    pub fn priority_trigger(&self, text: &str) -> Option<(Priority, &'static str)> {
        if let Some(keyword) = self.high.iter().find(|k| text.contains(*k)) {
            return Some((Priority::High, *keyword));
        }
        self.medium
            .iter()
            .find(|k| text.contains(*k))
            .map(|keyword| (Priority::Medium, *keyword))
    }

    pub fn determine_priority(&self, text: &str) -> Priority {
        self.priority_trigger(text)
            .map(|(priority, _)| priority)
            .unwrap_or(Priority::Low)
    }
}
