//! News feeds with a never-empty fallback chain.
//!
//! Internals are split into:
//! - `api`:      backend and NewsAPI sources
//! - `snapshot`: canned articles used when every live source fails
//! - `wire`:     JSON shapes as delivered

mod api;
mod model;
pub mod snapshot;
mod wire;

pub use model::{Article, ArticleSentiment, ConfidenceScores};

use chrono::{NaiveDate, Utc};
use serde::Serialize;

use crate::{
    chain::FallbackChain,
    core::{MdClient, MdError},
    sentiment::{SentimentSummary, summarize},
};

/// Which news feed to read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NewsFeed {
    /// General business headlines.
    #[default]
    Business,
    /// Cryptocurrency headlines.
    Crypto,
}

impl NewsFeed {
    pub(crate) const fn backend_path(self) -> &'static [&'static str] {
        match self {
            Self::Business => &["news"],
            Self::Crypto => &["news", "crypto"],
        }
    }

    const fn resource(self) -> &'static str {
        match self {
            Self::Business => "business news",
            Self::Crypto => "crypto news",
        }
    }
}

/// A builder for fetching one news feed.
pub struct NewsBuilder {
    client: MdClient,
    feed: NewsFeed,
    secondary: bool,
}

impl NewsBuilder {
    /// Creates a new `NewsBuilder` for `feed`.
    pub fn new(client: &MdClient, feed: NewsFeed) -> Self {
        Self {
            client: client.clone(),
            feed,
            secondary: true,
        }
    }

    /// Whether to consult NewsAPI (when a key is configured) before the snapshot.
    /// Default: `true`.
    #[must_use]
    pub const fn secondary(mut self, enabled: bool) -> Self {
        self.secondary = enabled;
        self
    }

    fn chain(&self) -> FallbackChain<'_, Vec<Article>> {
        let newsapi = if self.secondary {
            api::NewsApi::for_client(&self.client, self.feed)
        } else {
            None
        };

        FallbackChain::new(self.feed.resource())
            .source(api::BackendNews {
                client: &self.client,
                feed: self.feed,
            })
            .source_if(newsapi)
    }

    /// Resolves the feed through backend → NewsAPI → snapshot.
    ///
    /// Never fails: when every live source errors or returns nothing, the feed's fixed
    /// [`snapshot`] is returned.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), fields(feed = ?self.feed)))]
    pub async fn fetch(self) -> Vec<Article> {
        let feed = self.feed;
        self.chain()
            .resolve_or_else(|| snapshot::snapshot(feed))
            .await
    }

    /// Only the backend, with errors propagated.
    ///
    /// # Errors
    ///
    /// Returns `MdError` if the request fails or the body cannot be decoded.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err, fields(feed = ?self.feed)))]
    pub async fn fetch_primary(self) -> Result<Vec<Article>, MdError> {
        api::fetch_backend_news(&self.client, self.feed).await
    }
}

/// Business headlines; see [`NewsBuilder::fetch`].
pub async fn business_news(client: &MdClient) -> Vec<Article> {
    NewsBuilder::new(client, NewsFeed::Business).fetch().await
}

/// Crypto headlines; see [`NewsBuilder::fetch`].
pub async fn crypto_news(client: &MdClient) -> Vec<Article> {
    NewsBuilder::new(client, NewsFeed::Crypto).fetch().await
}

/// What the sentiment overview card shows: the distribution of the current headlines and
/// the day it was computed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SentimentOverview {
    pub feed: NewsFeed,
    pub summary: SentimentSummary,
    pub date: NaiveDate,
}

/// Fetches `feed` and summarizes its sentiment.
pub async fn sentiment_overview(client: &MdClient, feed: NewsFeed) -> SentimentOverview {
    let articles = NewsBuilder::new(client, feed).fetch().await;
    SentimentOverview {
        feed,
        summary: summarize(&articles),
        date: Utc::now().date_naive(),
    }
}
