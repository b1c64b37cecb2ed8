use futures::future::join_all;

use crate::{
    chain::{Source, SourceFuture},
    core::{AssetClass, MdClient, MdError, log::fallback_warn, net},
    recommend::{defaults::display_symbol, model::SignalRecommendation, wire},
    signal::percent_change,
};

/* ---------------- backend ---------------- */

/// `GET /strategy/recommended-stocks` or `GET /strategy/recommended-cryptos`.
pub(crate) struct BackendTopList<'a> {
    pub(crate) client: &'a MdClient,
    pub(crate) class: AssetClass,
}

impl Source<Vec<SignalRecommendation>> for BackendTopList<'_> {
    fn name(&self) -> &str {
        "backend"
    }

    fn fetch(&self) -> SourceFuture<'_, Vec<SignalRecommendation>> {
        Box::pin(fetch_backend_list(self.client, self.class))
    }
}

async fn fetch_backend_list(
    client: &MdClient,
    class: AssetClass,
) -> Result<Vec<SignalRecommendation>, MdError> {
    let leaf = match class {
        AssetClass::Stock => "recommended-stocks",
        AssetClass::Crypto => "recommended-cryptos",
    };
    let url = net::endpoint(client.api_base(), &["strategy", leaf])?;
    net::get_json(client, url).await
}

/* ---------------- Yahoo chart, one request per ticker ---------------- */

pub(crate) struct YahooChartQuotes<'a> {
    pub(crate) client: &'a MdClient,
    pub(crate) symbols: &'a [String],
}

impl Source<Vec<SignalRecommendation>> for YahooChartQuotes<'_> {
    fn name(&self) -> &str {
        "yahoo"
    }

    fn fetch(&self) -> SourceFuture<'_, Vec<SignalRecommendation>> {
        Box::pin(fetch_yahoo_batch(self.client, self.symbols))
    }
}

/// Fetches every ticker concurrently. A failing ticker is logged and left out; the rest keep
/// their input order.
async fn fetch_yahoo_batch(
    client: &MdClient,
    symbols: &[String],
) -> Result<Vec<SignalRecommendation>, MdError> {
    let results = join_all(symbols.iter().map(|s| fetch_yahoo_quote(client, s))).await;

    let rows = symbols
        .iter()
        .zip(results)
        .filter_map(|(sym, res)| match res {
            Ok(row) => Some(row),
            Err(e) => {
                fallback_warn!("yahoo: skipping {} ({})", sym, e);
                None
            }
        })
        .collect();

    Ok(rows)
}

pub(crate) async fn fetch_yahoo_quote(
    client: &MdClient,
    symbol: &str,
) -> Result<SignalRecommendation, MdError> {
    let symbol = net::clean_symbol(symbol)?;
    let mut url = net::endpoint(client.yahoo_chart_base(), &[symbol])?;
    url.query_pairs_mut().append_pair("interval", "1d");

    let env: wire::ChartEnvelope = net::get_json(client, url).await?;
    let chart = env
        .chart
        .ok_or_else(|| MdError::Data(format!("yahoo: no chart node for {symbol}")))?;

    if let Some(err) = chart.error {
        return Err(MdError::Data(format!(
            "yahoo: {}",
            err.description.unwrap_or_else(|| format!("error for {symbol}"))
        )));
    }

    let meta = chart
        .result
        .and_then(|r| r.into_iter().next())
        .and_then(|r| r.meta)
        .ok_or_else(|| MdError::Data(format!("yahoo: empty chart result for {symbol}")))?;

    let price = meta
        .regular_market_price
        .ok_or_else(|| MdError::Data(format!("yahoo: no regularMarketPrice for {symbol}")))?;
    let change = percent_change(price, meta.previous_close.or(meta.chart_previous_close));
    let name = meta
        .instrument_name
        .or(meta.long_name)
        .or(meta.short_name)
        .unwrap_or_else(|| symbol.to_string());

    Ok(SignalRecommendation::from_change(
        symbol,
        name,
        price,
        change,
        AssetClass::Stock,
    ))
}

/* ---------------- CoinGecko, one batched request ---------------- */

pub(crate) struct CoinGeckoMarkets<'a> {
    pub(crate) client: &'a MdClient,
    pub(crate) coin_ids: &'a [String],
}

impl Source<Vec<SignalRecommendation>> for CoinGeckoMarkets<'_> {
    fn name(&self) -> &str {
        "coingecko"
    }

    fn fetch(&self) -> SourceFuture<'_, Vec<SignalRecommendation>> {
        Box::pin(fetch_coingecko(self.client, self.coin_ids))
    }
}

async fn fetch_coingecko(
    client: &MdClient,
    coin_ids: &[String],
) -> Result<Vec<SignalRecommendation>, MdError> {
    if coin_ids.is_empty() {
        return Ok(Vec::new());
    }

    let mut url = net::endpoint(client.coingecko_base(), &["coins", "markets"])?;
    url.query_pairs_mut()
        .append_pair("vs_currency", "usd")
        .append_pair("ids", &coin_ids.join(","))
        .append_pair("price_change_percentage", "24h");

    let rows: Vec<wire::CoinMarketRow> = net::get_json(client, url).await?;

    Ok(rows
        .into_iter()
        .filter_map(|row| {
            let (Some(price), Some(change)) = (row.current_price, row.price_change_percentage_24h)
            else {
                fallback_warn!("coingecko: skipping {} (no price or 24h change)", row.id);
                return None;
            };
            let symbol = display_symbol(&row.id, row.symbol.as_deref());
            let name = row.name.unwrap_or_else(|| row.id.clone());
            Some(SignalRecommendation::from_change(
                symbol,
                name,
                price,
                change,
                AssetClass::Crypto,
            ))
        })
        .collect())
}
