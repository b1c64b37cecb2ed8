//! Market trend card data and per-symbol market/technical passthroughs.
//!
//! Internals are split into:
//! - `api`:   backend requests
//! - `trend`: average/Bullish/Bearish classification and price formatting
//! - `wire`:  JSON shapes as delivered

mod api;
mod model;
pub mod trend;
mod wire;

pub use model::{Instrument, MarketOverview, MarketSection};
pub use trend::{PriceDisplay, Trend, TrendSummary, parse_price};

use crate::core::{AssetClass, MdClient, MdError, net};

/// `GET /market`: stock indices and crypto coins with their average trend.
///
/// There is no secondary source for this resource, so failures propagate.
///
/// # Errors
///
/// Returns `MdError` if the request fails or the body does not have both sections.
#[cfg_attr(feature = "tracing", tracing::instrument(skip(client), err))]
pub async fn market_overview(client: &MdClient) -> Result<MarketOverview, MdError> {
    api::fetch_overview(client).await
}

/// `GET /market/{symbol}`, returned as raw JSON.
///
/// # Errors
///
/// Returns `MdError` for an empty symbol, a failed request or a non-JSON body.
#[cfg_attr(feature = "tracing", tracing::instrument(skip(client), err))]
pub async fn market_data(client: &MdClient, symbol: &str) -> Result<serde_json::Value, MdError> {
    let symbol = net::clean_symbol(symbol)?;
    api::fetch_raw(client, &["market", symbol]).await
}

/// `GET /technical/stock/{symbol}`, returned as raw JSON.
///
/// # Errors
///
/// Same as [`market_data`].
#[cfg_attr(feature = "tracing", tracing::instrument(skip(client), err))]
pub async fn stock_technical(
    client: &MdClient,
    symbol: &str,
) -> Result<serde_json::Value, MdError> {
    api::fetch_technical(client, symbol, AssetClass::Stock).await
}

/// `GET /technical/crypto/{symbol}`, returned as raw JSON.
///
/// # Errors
///
/// Same as [`market_data`].
#[cfg_attr(feature = "tracing", tracing::instrument(skip(client), err))]
pub async fn crypto_technical(
    client: &MdClient,
    symbol: &str,
) -> Result<serde_json::Value, MdError> {
    api::fetch_technical(client, symbol, AssetClass::Crypto).await
}
