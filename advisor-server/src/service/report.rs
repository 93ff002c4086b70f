//! Risk report extraction
//!
//! Pulls labeled fields out of the assistant's free-text classification.
//! Best effort: any label may be missing, in which case the field keeps its
//! default.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

const DEFAULT_RISK_LEVEL: &str = "Not determined";
const DEFAULT_REASONING: &str = "No specific reasoning provided.";
const DEFAULT_MAX_FINE: &str = "Not determined";
const DEFAULT_MEASURES: &str = "No specific measures provided.";

static RISK_LEVEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"risk level:\s*(.*?)(?:\n|reasoning:|$)").expect("valid regex"));
static REASONING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"reasoning:\s*(.*?)(?:\n|maximum potential fine:|potential fine:|$)")
        .expect("valid regex")
});
static MAX_FINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:maximum potential fine:|potential fine:)\s*(.*?)(?:\n|compliance measures:|measures:|$)")
        .expect("valid regex")
});
static MEASURES: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)(?:compliance measures:|measures:)\s*(.*)").expect("valid regex")
});
static OR_SEPARATOR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+or\s+").expect("valid regex"));

/// Keyword fallbacks for the risk level, checked in order
const RISK_KEYWORDS: [(&str, &str); 4] = [
    ("high-risk", "High-Risk"),
    ("unacceptable risk", "Unacceptable Risk"),
    ("limited risk", "Limited Risk"),
    ("minimal risk", "Minimal Risk"),
];

/// Structured view of a risk classification answer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskReport {
    pub risk_level: String,
    pub reasoning: String,
    pub max_fine: String,
    pub max_fine_revenue: String,
    pub measures: String,
}

impl Default for RiskReport {
    fn default() -> Self {
        Self {
            risk_level: DEFAULT_RISK_LEVEL.to_string(),
            reasoning: DEFAULT_REASONING.to_string(),
            max_fine: DEFAULT_MAX_FINE.to_string(),
            max_fine_revenue: String::new(),
            measures: DEFAULT_MEASURES.to_string(),
        }
    }
}

impl RiskReport {
    /// Extracts the report fields from `text`
    ///
    /// Labels are matched on the lower-cased text, so extracted values come
    /// back lower-cased with only their first letter capitalized.
    pub fn from_text(text: &str) -> Self {
        let mut report = Self::default();
        if text.trim().is_empty() {
            return report;
        }

        let normalized = text.to_lowercase();

        if let Some(level) = capture(&RISK_LEVEL, &normalized) {
            report.risk_level = capitalize(level);
        }

        if let Some(reasoning) = capture(&REASONING, &normalized) {
            report.reasoning = capitalize(reasoning);
        }

        if let Some(fine) = capture(&MAX_FINE, &normalized) {
            let mut parts = OR_SEPARATOR.splitn(fine, 2);
            if let Some(head) = parts.next() {
                report.max_fine = capitalize(head);
            }
            if let Some(rest) = parts.next() {
                report.max_fine_revenue = capitalize(&format!("or {}", rest));
            }
        }

        if let Some(measures) = capture(&MEASURES, &normalized) {
            report.measures = capitalize(measures);
        }

        if report.risk_level == DEFAULT_RISK_LEVEL {
            if let Some((_, label)) = RISK_KEYWORDS
                .iter()
                .find(|(keyword, _)| normalized.contains(keyword))
            {
                report.risk_level = label.to_string();
            }
        }

        report
    }
}

/// First capture group, trimmed, if it is not empty
fn capture<'t>(re: &Regex, text: &'t str) -> Option<&'t str> {
    re.captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim())
        .filter(|value| !value.is_empty())
}

/// Upper-cases a leading ASCII letter; anything else is left as is
fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => std::iter::once(first.to_ascii_uppercase()).chain(chars).collect(),
        None => String::new(),
    }
}
