//! Centralized constants for default endpoints and UA.

/// Default desktop UA; the public providers throttle generic library agents.
pub(crate) const USER_AGENT: &str = concat!(
    "Mozilla/5.0 (X11; Linux x86_64) ",
    "AppleWebKit/537.36 (KHTML, like Gecko) ",
    "Chrome/122.0.0.0 Safari/537.36"
);

/// Dashboard backend base (resource paths are appended).
pub(crate) const DEFAULT_API_BASE: &str = "http://localhost:8000/";

/// Environment variable that overrides [`DEFAULT_API_BASE`] in `MdClientBuilder::from_env`.
pub(crate) const API_BASE_ENV: &str = "MARKETDASH_API_URL";

/// Environment variable holding a NewsAPI key for `MdClientBuilder::from_env`.
pub(crate) const NEWSAPI_KEY_ENV: &str = "NEWS_API_KEY";

/// Yahoo chart API base (symbol is appended).
pub(crate) const DEFAULT_YAHOO_CHART: &str = "https://query1.finance.yahoo.com/v8/finance/chart/";

/// CoinGecko v3 API base.
pub(crate) const DEFAULT_COINGECKO: &str = "https://api.coingecko.com/api/v3/";

/// NewsAPI v2 base.
pub(crate) const DEFAULT_NEWSAPI: &str = "https://newsapi.org/v2/";
