//! "Top stocks" and "top cryptos" tables.
//!
//! Each list resolves backend → public provider → empty list:
//! - stocks fall back to one Yahoo chart request per ticker,
//! - cryptos fall back to a single batched CoinGecko request.

mod api;
pub mod defaults;
mod model;
mod wire;

pub use defaults::{default_crypto_recommendations, default_stock_recommendations};
pub use model::SignalRecommendation;

use crate::{
    chain::FallbackChain,
    core::{AssetClass, MdClient, MdError},
};

/// A builder for one top list.
pub struct TopListBuilder {
    client: MdClient,
    class: AssetClass,
    universe: Vec<String>,
}

impl TopListBuilder {
    /// Stocks, falling back to the default ten tickers on Yahoo.
    pub fn stocks(client: &MdClient) -> Self {
        Self {
            client: client.clone(),
            class: AssetClass::Stock,
            universe: defaults::DEFAULT_STOCK_SYMBOLS
                .iter()
                .map(ToString::to_string)
                .collect(),
        }
    }

    /// Cryptocurrencies, falling back to the default ten coins on CoinGecko.
    pub fn cryptos(client: &MdClient) -> Self {
        Self {
            client: client.clone(),
            class: AssetClass::Crypto,
            universe: defaults::default_coin_ids()
                .into_iter()
                .map(ToString::to_string)
                .collect(),
        }
    }

    /// Replaces what the public provider is asked for: ticker symbols for stocks, CoinGecko
    /// ids for cryptos.
    #[must_use]
    pub fn symbols<I, S>(mut self, syms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.universe = syms.into_iter().map(Into::into).collect();
        self
    }

    fn chain(&self) -> FallbackChain<'_, Vec<SignalRecommendation>> {
        let chain = FallbackChain::new(match self.class {
            AssetClass::Stock => "top stocks",
            AssetClass::Crypto => "top cryptos",
        })
        .source(api::BackendTopList {
            client: &self.client,
            class: self.class,
        });

        match self.class {
            AssetClass::Stock => chain.source(api::YahooChartQuotes {
                client: &self.client,
                symbols: &self.universe,
            }),
            AssetClass::Crypto => chain.source(api::CoinGeckoMarkets {
                client: &self.client,
                coin_ids: &self.universe,
            }),
        }
    }

    /// Resolves the list. Never fails; the last resort is an empty list.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), fields(class = ?self.class)))]
    pub async fn fetch(self) -> Vec<SignalRecommendation> {
        self.chain().resolve_or_else(Vec::new).await
    }
}

/// Top stocks; see [`TopListBuilder::fetch`].
pub async fn top_stocks(client: &MdClient) -> Vec<SignalRecommendation> {
    TopListBuilder::stocks(client).fetch().await
}

/// Top cryptos; see [`TopListBuilder::fetch`].
pub async fn top_cryptos(client: &MdClient) -> Vec<SignalRecommendation> {
    TopListBuilder::cryptos(client).fetch().await
}

/// A single stock row straight from Yahoo, with errors propagated.
///
/// # Errors
///
/// Returns `MdError` if the symbol is empty, the request fails, or the chart has no price.
pub async fn stock_quote(
    client: &MdClient,
    symbol: &str,
) -> Result<SignalRecommendation, MdError> {
    api::fetch_yahoo_quote(client, symbol).await
}
