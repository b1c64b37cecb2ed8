use serde::Deserialize;

/* ---------------- Yahoo chart v8 ---------------- */

#[derive(Deserialize)]
pub(crate) struct ChartEnvelope {
    pub(crate) chart: Option<ChartNode>,
}

#[derive(Deserialize)]
pub(crate) struct ChartNode {
    pub(crate) result: Option<Vec<ChartResult>>,
    pub(crate) error: Option<ChartError>,
}

#[derive(Deserialize)]
pub(crate) struct ChartError {
    pub(crate) description: Option<String>,
}

#[derive(Deserialize)]
pub(crate) struct ChartResult {
    pub(crate) meta: Option<ChartMeta>,
}

#[derive(Deserialize)]
pub(crate) struct ChartMeta {
    #[serde(rename = "regularMarketPrice")]
    pub(crate) regular_market_price: Option<f64>,
    #[serde(rename = "previousClose")]
    pub(crate) previous_close: Option<f64>,
    #[serde(rename = "chartPreviousClose")]
    pub(crate) chart_previous_close: Option<f64>,
    #[serde(rename = "instrumentName")]
    pub(crate) instrument_name: Option<String>,
    #[serde(rename = "longName")]
    pub(crate) long_name: Option<String>,
    #[serde(rename = "shortName")]
    pub(crate) short_name: Option<String>,
}

/* ---------------- CoinGecko coins/markets ---------------- */

#[derive(Deserialize)]
pub(crate) struct CoinMarketRow {
    pub(crate) id: String,
    pub(crate) symbol: Option<String>,
    pub(crate) name: Option<String>,
    pub(crate) current_price: Option<f64>,
    pub(crate) price_change_percentage_24h: Option<f64>,
}
