//! Reduction of article sentiment labels into a distribution and an overall label.
//!
//! Everything here is pure: no I/O, no shared state, and the result does not depend on
//! article order.

use serde::Serialize;

use crate::core::SentimentLabel;
use crate::news::Article;

/// Count of articles per sentiment class.
///
/// The three counts always sum to the number of articles recorded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SentimentDistribution {
    pub positive: usize,
    pub neutral: usize,
    pub negative: usize,
}

impl SentimentDistribution {
    /// Counts `labels`, treating `None` as neutral.
    pub fn from_labels<I>(labels: I) -> Self
    where
        I: IntoIterator<Item = Option<SentimentLabel>>,
    {
        let mut d = Self::default();
        for label in labels {
            d.record(label);
        }
        d
    }

    /// Counts the labels of `articles`. Missing or unrecognized labels count as neutral.
    pub fn from_articles<'a, I>(articles: I) -> Self
    where
        I: IntoIterator<Item = &'a Article>,
    {
        Self::from_labels(articles.into_iter().map(Article::sentiment_label))
    }

    /// Adds one article's label.
    pub fn record(&mut self, label: Option<SentimentLabel>) {
        match label {
            Some(SentimentLabel::Positive) => self.positive += 1,
            Some(SentimentLabel::Negative) => self.negative += 1,
            Some(SentimentLabel::Neutral) | None => self.neutral += 1,
        }
    }

    pub const fn total(&self) -> usize {
        self.positive + self.neutral + self.negative
    }

    /// The class with the highest count.
    ///
    /// Ties go to positive first, then negative, then neutral.
    pub fn overall(&self) -> SentimentLabel {
        let max = self.positive.max(self.neutral).max(self.negative);
        if max == self.positive {
            SentimentLabel::Positive
        } else if max == self.negative {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Neutral
        }
    }

    /// Percentage share of each class; all zero for an empty distribution.
    pub fn shares(&self) -> SentimentShares {
        let total = self.total();
        if total == 0 {
            return SentimentShares::default();
        }
        #[allow(clippy::cast_precision_loss)]
        let pct = |n: usize| n as f64 * 100.0 / total as f64;
        SentimentShares {
            positive: pct(self.positive),
            neutral: pct(self.neutral),
            negative: pct(self.negative),
        }
    }
}

/// Percentage of articles in each class (0–100).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct SentimentShares {
    pub positive: f64,
    pub neutral: f64,
    pub negative: f64,
}

/// A distribution together with its overall label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SentimentSummary {
    pub distribution: SentimentDistribution,
    pub overall: SentimentLabel,
}

/// Aggregates `articles` into a [`SentimentSummary`].
pub fn summarize<'a, I>(articles: I) -> SentimentSummary
where
    I: IntoIterator<Item = &'a Article>,
{
    let distribution = SentimentDistribution::from_articles(articles);
    SentimentSummary {
        distribution,
        overall: distribution.overall(),
    }
}
