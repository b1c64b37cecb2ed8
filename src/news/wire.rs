use serde::Deserialize;

/// Backend news responses come wrapped as `{ "articles": [...] }`; older builds and the
/// NewsAPI error path may hand back a bare list.
#[derive(Deserialize)]
#[serde(untagged)]
pub(crate) enum NewsPayload {
    List(Vec<ArticleNode>),
    Envelope {
        #[serde(default)]
        articles: Option<Vec<ArticleNode>>,
    },
}

impl NewsPayload {
    pub(crate) fn into_nodes(self) -> Vec<ArticleNode> {
        match self {
            Self::Envelope { articles } => articles.unwrap_or_default(),
            Self::List(v) => v,
        }
    }
}

#[derive(Deserialize)]
pub(crate) struct NewsApiEnvelope {
    pub(crate) status: Option<String>,
    pub(crate) message: Option<String>,
    #[serde(default)]
    pub(crate) articles: Option<Vec<ArticleNode>>,
}

#[derive(Deserialize)]
pub(crate) struct ArticleNode {
    pub(crate) title: Option<String>,
    pub(crate) original_title: Option<String>,
    pub(crate) source: Option<SourceNode>,
    #[serde(rename = "publishedAt")]
    pub(crate) published_at: Option<String>,
    pub(crate) url: Option<String>,
    pub(crate) azure_sentiment: Option<SentimentNode>,
    /// Key used by snapshot-shaped and older payloads; `azure_sentiment` wins when both exist.
    pub(crate) sentiment: Option<SentimentNode>,
    pub(crate) gpt_analysis: Option<String>,
}

#[derive(Deserialize)]
pub(crate) struct SourceNode {
    pub(crate) name: Option<String>,
}

#[derive(Deserialize)]
pub(crate) struct SentimentNode {
    pub(crate) label: Option<String>,
    pub(crate) confidence_scores: Option<ScoresNode>,
    pub(crate) score: Option<f64>,
}

#[derive(Deserialize)]
pub(crate) struct ScoresNode {
    pub(crate) positive: Option<f64>,
    pub(crate) neutral: Option<f64>,
    pub(crate) negative: Option<f64>,
}
