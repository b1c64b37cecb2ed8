use crate::{
    core::{AssetClass, MdClient, MdError, log::fallback_warn, net},
    market::{
        model::{Instrument, MarketOverview, MarketSection},
        trend::average_change,
        wire,
    },
};

pub(super) async fn fetch_overview(client: &MdClient) -> Result<MarketOverview, MdError> {
    let url = net::endpoint(client.api_base(), &["market"])?;
    let env: wire::OverviewEnvelope = net::get_json(client, url).await?;

    Ok(MarketOverview {
        stock_market: section(env.stock_market.indices, env.stock_market.avg_trend),
        crypto_market: section(env.crypto_market.coins, env.crypto_market.avg_trend),
    })
}

/// Items without a percent change are dropped; a missing `avg_trend` is recomputed.
fn section(items: wire::OrderedItems, avg_trend: Option<f64>) -> MarketSection {
    let instruments: Vec<Instrument> = items
        .0
        .into_iter()
        .filter_map(|(name, item)| {
            let Some(percentage_change) = item.percentage_change else {
                fallback_warn!("market: skipping {} (no percentage_change)", name);
                return None;
            };
            Some(Instrument {
                name,
                current_price: item
                    .current_price
                    .map(wire::PriceNode::into_string)
                    .unwrap_or_default(),
                percentage_change,
            })
        })
        .collect();

    let avg_trend = avg_trend
        .unwrap_or_else(|| average_change(instruments.iter().map(|i| i.percentage_change)));

    MarketSection {
        instruments,
        avg_trend,
    }
}

pub(super) async fn fetch_raw(
    client: &MdClient,
    segments: &[&str],
) -> Result<serde_json::Value, MdError> {
    let url = net::endpoint(client.api_base(), segments)?;
    net::get_json(client, url).await
}

pub(super) async fn fetch_technical(
    client: &MdClient,
    symbol: &str,
    class: AssetClass,
) -> Result<serde_json::Value, MdError> {
    let symbol = net::clean_symbol(symbol)?;
    fetch_raw(client, &["technical", class.path_segment(), symbol]).await
}
