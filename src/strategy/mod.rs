//! Single-symbol strategy lookups.
//!
//! Unlike the list fetchers these never fall back: a transport failure or an unknown symbol
//! reaches the caller as an error, so a bad symbol is never reported as `Hold`.

mod model;
mod wire;

pub use model::{IndicatorValue, StrategyArticle, StrategyReport, TechnicalIndicators};

use url::Url;

use crate::core::{AssetClass, MdClient, MdError, net};

/// `GET /strategy?symbol={sym}&is_crypto={bool}`.
///
/// # Errors
///
/// - `MdError::InvalidParams` for an empty symbol.
/// - `MdError::Backend` with the backend's text when it rejects the symbol.
/// - Transport, status and decoding errors otherwise.
#[cfg_attr(feature = "tracing", tracing::instrument(skip(client), err))]
pub async fn strategy(
    client: &MdClient,
    symbol: &str,
    class: AssetClass,
) -> Result<StrategyReport, MdError> {
    let symbol = net::clean_symbol(symbol)?;
    let mut url = net::endpoint(client.api_base(), &["strategy"])?;
    url.query_pairs_mut()
        .append_pair("symbol", symbol)
        .append_pair("is_crypto", if class.is_crypto() { "true" } else { "false" });
    fetch_report(client, symbol, url).await
}

/// `GET /strategy/stock/{sym}`.
///
/// # Errors
///
/// Same as [`strategy`].
#[cfg_attr(feature = "tracing", tracing::instrument(skip(client), err))]
pub async fn stock_strategy(client: &MdClient, symbol: &str) -> Result<StrategyReport, MdError> {
    strategy_by_path(client, symbol, AssetClass::Stock).await
}

/// `GET /strategy/crypto/{sym}`.
///
/// # Errors
///
/// Same as [`strategy`].
#[cfg_attr(feature = "tracing", tracing::instrument(skip(client), err))]
pub async fn crypto_strategy(client: &MdClient, symbol: &str) -> Result<StrategyReport, MdError> {
    strategy_by_path(client, symbol, AssetClass::Crypto).await
}

async fn strategy_by_path(
    client: &MdClient,
    symbol: &str,
    class: AssetClass,
) -> Result<StrategyReport, MdError> {
    let symbol = net::clean_symbol(symbol)?;
    let url = net::endpoint(client.api_base(), &["strategy", class.path_segment(), symbol])?;
    fetch_report(client, symbol, url).await
}

async fn fetch_report(client: &MdClient, symbol: &str, url: Url) -> Result<StrategyReport, MdError> {
    let env: wire::StrategyEnvelope = net::get_json(client, url).await?;
    into_report(symbol, env)
}

fn into_report(symbol: &str, env: wire::StrategyEnvelope) -> Result<StrategyReport, MdError> {
    if let Some(msg) = env.error.filter(|m| !m.trim().is_empty()) {
        return Err(MdError::Backend(msg));
    }

    let final_signal = env
        .final_signal
        .ok_or_else(|| MdError::Data(format!("strategy for {symbol}: missing final_signal")))?;

    let technical_indicators = env
        .technical_indicators
        .map(|t| TechnicalIndicators {
            rsi: t.rsi,
            ma_50: t.ma_50,
            ma_20: t.ma_20,
            volume: t.volume,
        })
        .unwrap_or_default();

    // Older backends nest the headlines under `sentiment_data`.
    let articles = env
        .articles
        .or_else(|| env.sentiment_data.and_then(|s| s.articles))
        .unwrap_or_default()
        .into_iter()
        .filter_map(|node| {
            let title = node.title.filter(|t| !t.trim().is_empty())?;
            Some(StrategyArticle {
                title,
                analysis: node.gpt_analysis,
            })
        })
        .collect();

    Ok(StrategyReport {
        symbol: symbol.to_string(),
        technical_indicators,
        articles,
        positive_sentiment: env.positive_sentiment.unwrap_or(0.0),
        negative_sentiment: env.negative_sentiment.unwrap_or(0.0),
        final_signal,
    })
}
