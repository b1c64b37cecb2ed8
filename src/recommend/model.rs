use serde::{Deserialize, Serialize};

use crate::core::{AssetClass, Signal};
use crate::signal::{classify, round2};

/// One row of a "top stocks" / "top cryptos" table.
///
/// The backend delivers this shape directly; the third-party fallbacks synthesize it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignalRecommendation {
    /// Ticker or coin code (e.g., "AAPL", "BTC").
    pub symbol: String,
    /// Display name (e.g., "Apple Inc.").
    pub name: String,
    pub final_signal: Signal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    /// Percent change, rounded to two decimals.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub change: Option<f64>,
}

impl SignalRecommendation {
    /// Builds a row from a raw percent change, classifying on the unrounded value.
    pub fn from_change(
        symbol: impl Into<String>,
        name: impl Into<String>,
        price: f64,
        change_pct: f64,
        class: AssetClass,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            name: name.into(),
            final_signal: classify(change_pct, class),
            price: Some(price),
            change: Some(round2(change_pct)),
        }
    }
}
