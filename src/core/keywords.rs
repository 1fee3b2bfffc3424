//! Static keyword tables used by the deterministic classifier.
//!
//! All entries are lowercase and matched as plain substrings against the
//! lowercased subject + body.

use crate::domain::model::Category;

/// Category keyword table, in declaration order. Ties in scoring resolve to
/// the earliest row, so the order here is part of the behavior.
pub static CATEGORY_KEYWORDS: [(Category, &[&str]); 5] = [
    (
        Category::TechnicalSupport,
        &[
            "error",
            "bug",
            "not working",
            "broken",
            "issue",
            "problem",
            "unable",
            "cannot",
            "can't",
            "reset",
            "password",
            "login",
            "access",
            "down",
            "outage",
        ],
    ),
    (
        Category::Billing,
        &[
            "billing", "charge", "payment", "refund", "invoice", "cost", "price", "pricing",
            "charged",
        ],
    ),
    (
        Category::Account,
        &["account", "verification", "verify", "blocked"],
    ),
    (
        Category::Integration,
        &["api", "integration", "crm", "third-party"],
    ),
    (
        Category::General,
        &["help", "support", "question", "query", "understand"],
    ),
];

pub static HIGH_PRIORITY_KEYWORDS: &[&str] = &[
    "urgent",
    "critical",
    "immediate",
    "emergency",
    "down",
    "outage",
    "cannot access",
    "completely inaccessible",
    "servers are down",
];

pub static MEDIUM_PRIORITY_KEYWORDS: &[&str] =
    &["help", "support", "issue", "problem", "error", "unable"];

/// Trigger groups for the reasoning text. These overlap with, but are not
/// the same as, the scoring tables above.
pub static REASONING_GROUPS: [(&[&str], &str); 4] = [
    (
        &["error", "issue", "problem"],
        "Contains technical issue keywords",
    ),
    (
        &["billing", "charge", "payment"],
        "Contains billing-related terms",
    ),
    (
        &["account", "verification", "login"],
        "Contains account-related terms",
    ),
    (&["api", "integration"], "Contains integration-related terms"),
];

pub fn keywords_for(category: Category) -> &'static [&'static str] {
    CATEGORY_KEYWORDS
        .iter()
        .find(|(c, _)| *c == category)
        .map(|(_, keywords)| *keywords)
        .unwrap_or(&[])
}
