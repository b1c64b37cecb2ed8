use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::core::SentimentLabel;

/// A single news article as shown on the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Article {
    /// The headline (translated, when the backend translated it).
    pub title: String,
    /// The headline before translation, if the backend provided one.
    pub original_title: Option<String>,
    /// The publisher (e.g., "Reuters", "Bloomberg").
    pub source: Option<String>,
    /// When the article was published.
    pub published_at: Option<DateTime<Utc>>,
    /// A direct link to the article.
    pub url: Option<String>,
    /// Classifier output attached by the backend, if any.
    pub sentiment: Option<ArticleSentiment>,
    /// Free-text commentary on the article.
    pub analysis: Option<String>,
}

impl Article {
    /// The parsed sentiment label, or `None` when the label is missing or unrecognized.
    pub fn sentiment_label(&self) -> Option<SentimentLabel> {
        self.sentiment
            .as_ref()
            .and_then(|s| s.label.as_deref())
            .and_then(|l| l.parse().ok())
    }
}

/// Sentiment annotation as delivered; the label is kept verbatim.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArticleSentiment {
    pub label: Option<String>,
    pub confidence: Option<ConfidenceScores>,
    /// Single confidence for `label`, used when per-class scores are absent.
    pub score: Option<f64>,
}

/// Per-class confidences; they sum to roughly 1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ConfidenceScores {
    pub positive: f64,
    pub neutral: f64,
    pub negative: f64,
}
