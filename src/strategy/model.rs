use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::Signal;

/// An indicator the backend reports either as a number or as a text marker (e.g. "N/A").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IndicatorValue {
    Number(f64),
    Text(String),
}

impl IndicatorValue {
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Text(t) => t.trim().parse().ok(),
        }
    }
}

impl fmt::Display for IndicatorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n:.2}"),
            Self::Text(t) => f.write_str(t),
        }
    }
}

/// RSI, moving average and volume for the looked-up symbol.
///
/// Stocks report a 50-day moving average, cryptos a 20-day one.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TechnicalIndicators {
    pub rsi: Option<IndicatorValue>,
    pub ma_50: Option<IndicatorValue>,
    pub ma_20: Option<IndicatorValue>,
    pub volume: Option<IndicatorValue>,
}

impl TechnicalIndicators {
    /// Whichever moving average the backend sent, preferring the 50-day one.
    pub fn moving_average(&self) -> Option<&IndicatorValue> {
        self.ma_50.as_ref().or(self.ma_20.as_ref())
    }
}

/// A headline that fed the strategy, with its one-word verdict.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StrategyArticle {
    pub title: String,
    pub analysis: Option<String>,
}

/// The backend's recommendation for one symbol.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StrategyReport {
    pub symbol: String,
    pub technical_indicators: TechnicalIndicators,
    pub articles: Vec<StrategyArticle>,
    /// Share of positive coverage, in [0, 1].
    pub positive_sentiment: f64,
    /// Share of negative coverage, in [0, 1].
    pub negative_sentiment: f64,
    pub final_signal: Signal,
}
