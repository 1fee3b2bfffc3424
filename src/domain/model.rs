use serde::{Deserialize, Serialize};
use std::fmt;

/// An inbound support email. Created per call, never stored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Email {
    pub sender: String,
    pub subject: String,
    pub body: String,
}

impl Email {
    pub fn new(
        sender: impl Into<String>,
        subject: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            sender: sender.into(),
            subject: subject.into(),
            body: body.into(),
        }
    }

    /// Subject and body joined by a single space, lowercased.
    pub fn search_text(&self) -> String {
        format!("{} {}", self.subject, self.body).to_lowercase()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    TechnicalSupport,
    Billing,
    Account,
    Integration,
    General,
}

impl Category {
    /// Declaration order. Category ties resolve to the earliest entry.
    pub const ALL: [Category; 5] = [
        Category::TechnicalSupport,
        Category::Billing,
        Category::Account,
        Category::Integration,
        Category::General,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::TechnicalSupport => "technical_support",
            Self::Billing => "billing",
            Self::Account => "account",
            Self::Integration => "integration",
            Self::General => "general",
        }
    }

    /// Strict parse. Accepts case and separator variations ("Technical Support",
    /// "technical-support") but nothing outside the vocabulary.
    pub fn parse(s: &str) -> Option<Self> {
        match normalize_label(s).as_str() {
            "technical_support" => Some(Self::TechnicalSupport),
            "billing" => Some(Self::Billing),
            "account" => Some(Self::Account),
            "integration" => Some(Self::Integration),
            "general" => Some(Self::General),
            _ => None,
        }
    }

    /// Exact match against the canonical label, no normalization.
    pub fn from_label(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == s)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub const ALL: [Priority; 3] = [Priority::High, Priority::Medium, Priority::Low];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match normalize_label(s).as_str() {
            "high" => Some(Self::High),
            "medium" => Some(Self::Medium),
            "low" => Some(Self::Low),
            _ => None,
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Stylistic register of a drafted reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    #[default]
    Professional,
    Friendly,
    Formal,
    Casual,
}

impl Tone {
    pub const ALL: [Tone; 4] = [Tone::Professional, Tone::Friendly, Tone::Formal, Tone::Casual];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Professional => "professional",
            Self::Friendly => "friendly",
            Self::Formal => "formal",
            Self::Casual => "casual",
        }
    }

    pub fn from_label(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == s)
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    pub category: Category,
    pub priority: Priority,
    pub reasoning: String,
}

/// One row of the sample data file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SampleEmail {
    pub sender: String,
    pub subject: String,
    pub body: String,
    #[serde(default)]
    pub sent_date: String,
}

impl SampleEmail {
    pub fn to_email(&self) -> Email {
        Email::new(&self.sender, &self.subject, &self.body)
    }
}

fn normalize_label(s: &str) -> String {
    s.trim()
        .to_lowercase()
        .chars()
        .map(|c| if c == ' ' || c == '-' { '_' } else { c })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_parse_accepts_label_variants() {
        assert_eq!(Category::parse("technical_support"), Some(Category::TechnicalSupport));
        assert_eq!(Category::parse(" Technical Support "), Some(Category::TechnicalSupport));
        assert_eq!(Category::parse("BILLING"), Some(Category::Billing));
        assert_eq!(Category::parse("sales"), None);
        assert_eq!(Category::from_label("billing"), Some(Category::Billing));
        assert_eq!(Category::from_label("Billing"), None);
        assert_eq!(Category::from_label("technical support"), None);
    }

    #[test]
    fn test_tone_from_label_is_exact() {
        assert_eq!(Tone::from_label("casual"), Some(Tone::Casual));
        assert_eq!(Tone::from_label("Casual"), None);
        assert_eq!(Tone::from_label("sarcastic"), None);
        assert_eq!(Tone::from_label(""), None);
    }

    #[test]
    fn test_classification_serializes_snake_case() {
        let classification = Classification {
            category: Category::TechnicalSupport,
            priority: Priority::High,
            reasoning: "r".to_string(),
        };
        let json = serde_json::to_value(&classification).unwrap();
        assert_eq!(json["category"], "technical_support");
        assert_eq!(json["priority"], "high");
    }

    #[test]
    fn test_search_text_joins_and_lowercases() {
        let email = Email::new("a@b.c", "Login ERROR", "Cannot Sign In");
        assert_eq!(email.search_text(), "login error cannot sign in");
    }
}
