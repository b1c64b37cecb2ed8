//! Public client surface + builder.
//! Default endpoints and the UA live in `constants`.

mod constants;

use crate::core::MdError;
use constants::{
    API_BASE_ENV, DEFAULT_API_BASE, DEFAULT_COINGECKO, DEFAULT_NEWSAPI, DEFAULT_YAHOO_CHART,
    NEWSAPI_KEY_ENV, USER_AGENT,
};
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// Holds a configured HTTP client plus the base URL of every source the fetchers consult.
///
/// Cloning is cheap; the underlying connection pool is shared.
#[derive(Debug, Clone)]
pub struct MdClient {
    http: Client,
    api_base: Url,
    yahoo_chart_base: Url,
    coingecko_base: Url,
    newsapi_base: Url,
    newsapi_key: Option<String>,
}

impl Default for MdClient {
    fn default() -> Self {
        Self::builder().build().expect("default client")
    }
}

impl MdClient {
    /// Create a new builder.
    pub fn builder() -> MdClientBuilder {
        MdClientBuilder::default()
    }

    /* -------- internal getters used by other modules -------- */

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }
    pub(crate) fn api_base(&self) -> &Url {
        &self.api_base
    }
    pub(crate) fn yahoo_chart_base(&self) -> &Url {
        &self.yahoo_chart_base
    }
    pub(crate) fn coingecko_base(&self) -> &Url {
        &self.coingecko_base
    }
    pub(crate) fn newsapi_base(&self) -> &Url {
        &self.newsapi_base
    }
    pub(crate) fn newsapi_key(&self) -> Option<&str> {
        self.newsapi_key.as_deref()
    }

    /// Whether the NewsAPI secondary source is configured for the news chains.
    pub fn newsapi_enabled(&self) -> bool {
        self.newsapi_key.is_some()
    }
}

/* ----------------------- Builder ----------------------- */

#[derive(Default)]
pub struct MdClientBuilder {
    user_agent: Option<String>,
    api_base: Option<Url>,
    yahoo_chart_base: Option<Url>,
    coingecko_base: Option<Url>,
    newsapi_base: Option<Url>,
    newsapi_key: Option<String>,

    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
}

impl MdClientBuilder {
    /// Start from the process environment.
    ///
    /// `MARKETDASH_API_URL` replaces the default backend base and `NEWS_API_KEY` enables the
    /// NewsAPI secondary source. Unset variables leave the defaults in place.
    ///
    /// # Errors
    ///
    /// Returns `MdError::Url` if `MARKETDASH_API_URL` is set but is not a valid URL.
    pub fn from_env() -> Result<Self, MdError> {
        let mut b = Self::default();
        if let Ok(raw) = std::env::var(API_BASE_ENV)
            && !raw.trim().is_empty()
        {
            b.api_base = Some(Url::parse(&with_trailing_slash(raw.trim()))?);
        }
        if let Ok(key) = std::env::var(NEWSAPI_KEY_ENV)
            && !key.trim().is_empty()
        {
            b.newsapi_key = Some(key.trim().to_string());
        }
        Ok(b)
    }

    /// Override the User-Agent.
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Override the dashboard backend base (e.g., `http://localhost:8000/`).
    pub fn api_base(mut self, url: Url) -> Self {
        self.api_base = Some(url);
        self
    }

    /// Override the Yahoo chart API base (e.g., `https://query1.finance.yahoo.com/v8/finance/chart/`).
    pub fn yahoo_chart_base(mut self, url: Url) -> Self {
        self.yahoo_chart_base = Some(url);
        self
    }

    /// Override the CoinGecko API base (e.g., `https://api.coingecko.com/api/v3/`).
    pub fn coingecko_base(mut self, url: Url) -> Self {
        self.coingecko_base = Some(url);
        self
    }

    /// Override the NewsAPI base (e.g., `https://newsapi.org/v2/`).
    pub fn newsapi_base(mut self, url: Url) -> Self {
        self.newsapi_base = Some(url);
        self
    }

    /// Enable NewsAPI as the secondary news source.
    pub fn newsapi_key(mut self, key: impl Into<String>) -> Self {
        self.newsapi_key = Some(key.into());
        self
    }

    /// Set a global request timeout (overall). Default: none.
    pub fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Set a connect timeout. Default: none.
    pub fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    pub fn build(self) -> Result<MdClient, MdError> {
        let api_base = self.api_base.unwrap_or(Url::parse(DEFAULT_API_BASE)?);
        let yahoo_chart_base = self
            .yahoo_chart_base
            .unwrap_or(Url::parse(DEFAULT_YAHOO_CHART)?);
        let coingecko_base = self.coingecko_base.unwrap_or(Url::parse(DEFAULT_COINGECKO)?);
        let newsapi_base = self.newsapi_base.unwrap_or(Url::parse(DEFAULT_NEWSAPI)?);

        let mut httpb =
            reqwest::Client::builder().user_agent(self.user_agent.as_deref().unwrap_or(USER_AGENT));

        if let Some(t) = self.timeout {
            httpb = httpb.timeout(t);
        }
        if let Some(ct) = self.connect_timeout {
            httpb = httpb.connect_timeout(ct);
        }

        let http = httpb.build()?;

        Ok(MdClient {
            http,
            api_base,
            yahoo_chart_base,
            coingecko_base,
            newsapi_base,
            newsapi_key: self.newsapi_key.filter(|k| !k.is_empty()),
        })
    }
}

fn with_trailing_slash(raw: &str) -> String {
    if raw.ends_with('/') {
        raw.to_string()
    } else {
        format!("{raw}/")
    }
}
