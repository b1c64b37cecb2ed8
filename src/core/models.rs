use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::MdError;

/* ----- SIGNALS (shared by recommend/ and strategy/) ----- */

/// A trading recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Signal {
    #[serde(alias = "buy", alias = "BUY")]
    Buy,
    #[serde(alias = "sell", alias = "SELL")]
    Sell,
    #[serde(alias = "hold", alias = "HOLD")]
    Hold,
}

impl Signal {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Buy => "Buy",
            Self::Sell => "Sell",
            Self::Hold => "Hold",
        }
    }
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Stocks and cryptocurrencies are classified with different thresholds because crypto
/// prices move much more in a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetClass {
    Stock,
    Crypto,
}

impl AssetClass {
    /// Absolute percent change that must be strictly exceeded to leave `Hold`.
    pub const fn signal_threshold(self) -> f64 {
        match self {
            Self::Stock => 1.5,
            Self::Crypto => 5.0,
        }
    }

    pub const fn is_crypto(self) -> bool {
        matches!(self, Self::Crypto)
    }

    pub(crate) const fn path_segment(self) -> &'static str {
        match self {
            Self::Stock => "stock",
            Self::Crypto => "crypto",
        }
    }
}

/* ----- SENTIMENT (shared by news/ and sentiment/) ----- */

/// Tone of a news article, and the overall label of a set of articles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    Positive,
    Neutral,
    Negative,
}

impl SentimentLabel {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Positive => "Positive",
            Self::Neutral => "Neutral",
            Self::Negative => "Negative",
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for SentimentLabel {
    type Err = MdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "positive" => Ok(Self::Positive),
            "neutral" => Ok(Self::Neutral),
            "negative" => Ok(Self::Negative),
            other => Err(MdError::Data(format!("unrecognized sentiment label: {other:?}"))),
        }
    }
}
