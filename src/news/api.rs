use chrono::{DateTime, Utc};

use crate::{
    chain::{Source, SourceFuture},
    core::{MdClient, MdError, net},
    news::{
        NewsFeed,
        model::{Article, ArticleSentiment, ConfidenceScores},
        wire,
    },
};

/// The dashboard backend (`GET /news`, `GET /news/crypto`).
pub(crate) struct BackendNews<'a> {
    pub(crate) client: &'a MdClient,
    pub(crate) feed: NewsFeed,
}

impl Source<Vec<Article>> for BackendNews<'_> {
    fn name(&self) -> &str {
        "backend"
    }

    fn fetch(&self) -> SourceFuture<'_, Vec<Article>> {
        Box::pin(fetch_backend_news(self.client, self.feed))
    }
}

pub(crate) async fn fetch_backend_news(
    client: &MdClient,
    feed: NewsFeed,
) -> Result<Vec<Article>, MdError> {
    let url = net::endpoint(client.api_base(), feed.backend_path())?;
    let payload: wire::NewsPayload = net::get_json(client, url).await?;
    Ok(map_nodes(payload.into_nodes()))
}

/// NewsAPI headlines; only part of a chain when a key is configured.
pub(crate) struct NewsApi<'a> {
    pub(crate) client: &'a MdClient,
    pub(crate) feed: NewsFeed,
    pub(crate) key: &'a str,
}

impl<'a> NewsApi<'a> {
    pub(crate) fn for_client(client: &'a MdClient, feed: NewsFeed) -> Option<Self> {
        client
            .newsapi_key()
            .map(|key| Self { client, feed, key })
    }
}

impl Source<Vec<Article>> for NewsApi<'_> {
    fn name(&self) -> &str {
        "newsapi"
    }

    fn fetch(&self) -> SourceFuture<'_, Vec<Article>> {
        Box::pin(fetch_newsapi(self.client, self.feed, self.key))
    }
}

async fn fetch_newsapi(
    client: &MdClient,
    feed: NewsFeed,
    key: &str,
) -> Result<Vec<Article>, MdError> {
    let mut url = match feed {
        NewsFeed::Business => {
            let mut u = net::endpoint(client.newsapi_base(), &["top-headlines"])?;
            u.query_pairs_mut().append_pair("category", "business");
            u
        }
        NewsFeed::Crypto => {
            let mut u = net::endpoint(client.newsapi_base(), &["everything"])?;
            u.query_pairs_mut()
                .append_pair("q", "crypto")
                .append_pair("language", "en")
                .append_pair("sortBy", "publishedAt");
            u
        }
    };
    url.query_pairs_mut().append_pair("apiKey", key);

    let env: wire::NewsApiEnvelope = net::get_json(client, url).await?;
    if env.status.as_deref() == Some("error") {
        return Err(MdError::Data(format!(
            "newsapi: {}",
            env.message.unwrap_or_else(|| "unknown error".into())
        )));
    }

    Ok(map_nodes(env.articles.unwrap_or_default()))
}

/// Drops untitled items and converts the rest, preserving order.
fn map_nodes(nodes: Vec<wire::ArticleNode>) -> Vec<Article> {
    nodes
        .into_iter()
        .filter_map(|node| {
            let title = node.title.filter(|t| !t.trim().is_empty())?;

            let published_at = node
                .published_at
                .as_deref()
                .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
                .map(|dt| dt.with_timezone(&Utc));

            let sentiment = node.azure_sentiment.or(node.sentiment).map(|s| ArticleSentiment {
                label: s.label,
                confidence: s.confidence_scores.map(|c| ConfidenceScores {
                    positive: c.positive.unwrap_or(0.0),
                    neutral: c.neutral.unwrap_or(0.0),
                    negative: c.negative.unwrap_or(0.0),
                }),
                score: s.score,
            });

            Some(Article {
                title,
                original_title: node.original_title,
                source: node.source.and_then(|s| s.name),
                published_at,
                url: node.url,
                sentiment,
                analysis: node.gpt_analysis,
            })
        })
        .collect()
}
