//! Static configuration for the top-list fetchers: ticker universes, the CoinGecko id table,
//! and the placeholder rows a view shows before any fetch has succeeded.

use crate::core::Signal;

use super::model::SignalRecommendation;

/// Tickers queried against Yahoo when the backend has no stock list.
pub const DEFAULT_STOCK_SYMBOLS: [&str; 10] = [
    "AAPL", "MSFT", "GOOGL", "AMZN", "TSLA", "NVDA", "META", "JPM", "V", "WMT",
];

/// CoinGecko id → display symbol for the coins the dashboard tracks.
pub const COIN_SYMBOLS: [(&str, &str); 10] = [
    ("bitcoin", "BTC"),
    ("ethereum", "ETH"),
    ("binancecoin", "BNB"),
    ("solana", "SOL"),
    ("ripple", "XRP"),
    ("cardano", "ADA"),
    ("dogecoin", "DOGE"),
    ("polkadot", "DOT"),
    ("litecoin", "LTC"),
    ("matic-network", "MATIC"),
];

/// CoinGecko ids queried when the backend has no crypto list.
pub fn default_coin_ids() -> Vec<&'static str> {
    COIN_SYMBOLS.iter().map(|(id, _)| *id).collect()
}

/// Display symbol for a CoinGecko id; unknown ids use the provider's own ticker, upper-cased.
pub fn display_symbol(coin_id: &str, provider_symbol: Option<&str>) -> String {
    COIN_SYMBOLS
        .iter()
        .find(|(id, _)| *id == coin_id)
        .map(|(_, sym)| (*sym).to_string())
        .or_else(|| provider_symbol.map(str::to_uppercase))
        .unwrap_or_else(|| coin_id.to_uppercase())
}

struct DefaultRow {
    symbol: &'static str,
    name: &'static str,
    signal: Signal,
    price: f64,
    change: f64,
}

const STOCK_ROWS: [DefaultRow; 5] = [
    DefaultRow { symbol: "AAPL", name: "Apple Inc.", signal: Signal::Buy, price: 180.25, change: 1.25 },
    DefaultRow { symbol: "MSFT", name: "Microsoft Corporation", signal: Signal::Buy, price: 350.80, change: 0.75 },
    DefaultRow { symbol: "GOOGL", name: "Alphabet Inc.", signal: Signal::Hold, price: 140.10, change: -0.5 },
    DefaultRow { symbol: "AMZN", name: "Amazon.com Inc.", signal: Signal::Buy, price: 125.30, change: 2.15 },
    DefaultRow { symbol: "TSLA", name: "Tesla Inc.", signal: Signal::Sell, price: 220.45, change: -3.20 },
];

const CRYPTO_ROWS: [DefaultRow; 5] = [
    DefaultRow { symbol: "BTC", name: "Bitcoin", signal: Signal::Buy, price: 65340.75, change: 2.45 },
    DefaultRow { symbol: "ETH", name: "Ethereum", signal: Signal::Buy, price: 3560.20, change: 1.35 },
    DefaultRow { symbol: "BNB", name: "Binance Coin", signal: Signal::Hold, price: 580.50, change: -0.75 },
    DefaultRow { symbol: "SOL", name: "Solana", signal: Signal::Buy, price: 140.65, change: 4.20 },
    DefaultRow { symbol: "XRP", name: "Ripple", signal: Signal::Sell, price: 0.58, change: -2.10 },
];

fn rows(table: &[DefaultRow]) -> Vec<SignalRecommendation> {
    table
        .iter()
        .map(|r| SignalRecommendation {
            symbol: r.symbol.to_string(),
            name: r.name.to_string(),
            final_signal: r.signal,
            price: Some(r.price),
            change: Some(r.change),
        })
        .collect()
}

/// Placeholder stock rows shown until a live list arrives.
pub fn default_stock_recommendations() -> Vec<SignalRecommendation> {
    rows(&STOCK_ROWS)
}

/// Placeholder crypto rows shown until a live list arrives.
pub fn default_crypto_recommendations() -> Vec<SignalRecommendation> {
    rows(&CRYPTO_ROWS)
}
