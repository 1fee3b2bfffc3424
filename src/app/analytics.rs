use crate::app::samples::parse_sent_date;
use crate::core::assistant::EmailAssistant;
use crate::core::ModelBackend;
use crate::domain::model::{Category, Priority, SampleEmail};
use chrono::NaiveDateTime;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt::Write;

const SUBJECT_PREVIEW_CHARS: usize = 50;
const BAR_WIDTH: usize = 30;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalyzedRow {
    pub sender: String,
    pub subject: String,
    pub category: Category,
    pub priority: Priority,
    pub date: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisReport {
    pub rows: Vec<AnalyzedRow>,
    pub category_counts: Vec<(Category, usize)>,
    pub priority_counts: Vec<(Priority, usize)>,
    pub sender_counts: Vec<(String, usize)>,
    pub first_sent: Option<NaiveDateTime>,
    pub last_sent: Option<NaiveDateTime>,
}

/// Classifies every sample in order. `progress` is called after each row
/// with (done, total).
pub async fn analyze_samples<M, F>(
    assistant: &EmailAssistant<M>,
    samples: &[SampleEmail],
    mut progress: F,
) -> AnalysisReport
where
    M: ModelBackend,
    F: FnMut(usize, usize),
{
    let total = samples.len();
    let mut rows = Vec::with_capacity(total);

    for (i, sample) in samples.iter().enumerate() {
        let classification = assistant.classify(&sample.to_email()).await;
        rows.push(AnalyzedRow {
            sender: sample.sender.clone(),
            subject: subject_preview(&sample.subject),
            category: classification.category,
            priority: classification.priority,
            date: sample.sent_date.clone(),
        });
        progress(i + 1, total);
    }

    let dates: Vec<NaiveDateTime> = samples
        .iter()
        .filter_map(|s| parse_sent_date(&s.sent_date))
        .collect();

    AnalysisReport {
        category_counts: value_counts(rows.iter().map(|r| r.category)),
        priority_counts: value_counts(rows.iter().map(|r| r.priority)),
        sender_counts: value_counts(rows.iter().map(|r| r.sender.clone())),
        first_sent: dates.iter().min().copied(),
        last_sent: dates.iter().max().copied(),
        rows,
    }
}

/// First 50 characters followed by "...".
pub fn subject_preview(subject: &str) -> String {
    let mut preview: String = subject.chars().take(SUBJECT_PREVIEW_CHARS).collect();
    preview.push_str("...");
    preview
}

/// Occurrences per key, most frequent first, ties by key order.
pub fn value_counts<K, I>(values: I) -> Vec<(K, usize)>
where
    K: Ord,
    I: IntoIterator<Item = K>,
{
    let mut counts: BTreeMap<K, usize> = BTreeMap::new();
    for value in values {
        *counts.entry(value).or_insert(0) += 1;
    }
    let mut counts: Vec<(K, usize)> = counts.into_iter().collect();
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

/// Plain-text rendering: three bar charts and the detail table.
pub fn render_report(report: &AnalysisReport) -> String {
    let mut out = String::new();

    render_bars(
        &mut out,
        "Category Distribution",
        report.category_counts.iter().map(|(k, c)| (k.to_string(), *c)),
    );
    render_bars(
        &mut out,
        "Priority Distribution",
        report.priority_counts.iter().map(|(k, c)| (k.to_string(), *c)),
    );
    render_bars(
        &mut out,
        "Emails by Sender",
        report.sender_counts.iter().map(|(k, c)| (k.clone(), *c)),
    );

    if let (Some(first), Some(last)) = (report.first_sent, report.last_sent) {
        let _ = writeln!(out, "Sent between {} and {}\n", first, last);
    }

    let _ = writeln!(out, "Detailed Results");
    for row in &report.rows {
        let _ = writeln!(
            out,
            "  {:<17} {:<7} {:<30} {} [{}]",
            row.category, row.priority, row.sender, row.subject, row.date
        );
    }
    out
}

fn render_bars<I>(out: &mut String, title: &str, entries: I)
where
    I: Iterator<Item = (String, usize)>,
{
    let entries: Vec<(String, usize)> = entries.collect();
    let max = entries.iter().map(|(_, c)| *c).max().unwrap_or(0);
    let label_width = entries.iter().map(|(l, _)| l.len()).max().unwrap_or(0);

    let _ = writeln!(out, "{}", title);
    for (label, count) in &entries {
        let bar_len = if max == 0 { 0 } else { count * BAR_WIDTH / max };
        let _ = writeln!(
            out,
            "  {:<width$} {} {}",
            label,
            "#".repeat(bar_len.max(1)),
            count,
            width = label_width
        );
    }
    out.push('\n');
}
