//! marketdash: the data-access core of a market dashboard.
//!
//! Every dashboard resource has a fetcher here. List resources (news feeds, top stocks,
//! top cryptos) resolve through a [`FallbackChain`]: the dashboard backend first, then a
//! public provider (Yahoo, CoinGecko, NewsAPI), then static data. They always return
//! something to render. Single-symbol strategy lookups surface errors instead.
//!
//! ```no_run
//! # use marketdash::{MdClient, NewsFeed};
//! # #[tokio::main]
//! # async fn main() {
//! let client = MdClient::default();
//!
//! let overview = marketdash::sentiment_overview(&client, NewsFeed::Business).await;
//! println!("Market sentiment: {}", overview.summary.overall);
//!
//! for row in marketdash::top_stocks(&client).await {
//!     println!("{:<6} {:<5} {:?}", row.symbol, row.final_signal, row.change);
//! }
//! # }
//! ```

pub mod chain;
pub mod core;
pub mod market;
pub mod news;
pub mod recommend;
pub mod sentiment;
pub mod signal;
pub mod strategy;

pub use chain::{FallbackChain, HasData, Source, SourceFuture};
pub use crate::core::{
    AssetClass, GENERIC_FETCH_MESSAGE, MdClient, MdClientBuilder, MdError, SentimentLabel,
    Signal,
};
pub use market::{
    Instrument, MarketOverview, MarketSection, PriceDisplay, Trend, TrendSummary,
    crypto_technical, market_data, market_overview, parse_price, stock_technical,
};
pub use news::{
    Article, ArticleSentiment, ConfidenceScores, NewsBuilder, NewsFeed, SentimentOverview,
    business_news, crypto_news, sentiment_overview,
};
pub use recommend::{
    SignalRecommendation, TopListBuilder, default_crypto_recommendations,
    default_stock_recommendations, stock_quote, top_cryptos, top_stocks,
};
pub use sentiment::{SentimentDistribution, SentimentShares, SentimentSummary, summarize};
pub use signal::classify;
pub use strategy::{
    IndicatorValue, StrategyArticle, StrategyReport, TechnicalIndicators, crypto_strategy,
    stock_strategy, strategy,
};

/// Installs a `tracing` subscriber honoring `RUST_LOG`, for demos and tests.
#[cfg(feature = "tracing-subscriber")]
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init();
}
