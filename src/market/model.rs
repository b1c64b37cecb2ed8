use serde::Serialize;

use super::trend::{PriceDisplay, Trend, TrendSummary, average_change, format_change};

/// One tracked index or coin.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Instrument {
    pub name: String,
    /// Price as delivered, usually with a currency prefix (e.g. `"$5021.84"`).
    pub current_price: String,
    pub percentage_change: f64,
}

impl Instrument {
    /// The price parsed for display; `N/A` when `current_price` is not a number.
    pub fn price(&self) -> PriceDisplay {
        PriceDisplay::parse(&self.current_price)
    }

    /// Whether the instrument is flat or up.
    pub fn is_up(&self) -> bool {
        self.percentage_change >= 0.0
    }

    /// `"▲ 1.23%"` / `"▼ -0.40%"`.
    pub fn change_display(&self) -> String {
        format_change(self.percentage_change)
    }
}

/// Stock indices or crypto coins, in the order the backend listed them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarketSection {
    pub instruments: Vec<Instrument>,
    /// The backend's own average of the instruments' changes.
    pub avg_trend: f64,
}

impl MarketSection {
    /// Builds a section from instruments, computing `avg_trend` locally.
    pub fn from_instruments(instruments: Vec<Instrument>) -> Self {
        let avg_trend = average_change(instruments.iter().map(|i| i.percentage_change));
        Self {
            instruments,
            avg_trend,
        }
    }

    /// Trend implied by the reported `avg_trend`.
    pub fn reported(&self) -> TrendSummary {
        TrendSummary::from_average(self.avg_trend)
    }

    /// Trend recomputed from the instruments themselves.
    pub fn summarize(&self) -> TrendSummary {
        TrendSummary::from_average(average_change(
            self.instruments.iter().map(|i| i.percentage_change),
        ))
    }

    pub fn trend(&self) -> Trend {
        self.reported().trend
    }

    pub fn get(&self, name: &str) -> Option<&Instrument> {
        self.instruments.iter().find(|i| i.name == name)
    }

    pub fn is_empty(&self) -> bool {
        self.instruments.is_empty()
    }
}

/// Stock and crypto sections of the market trend card.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarketOverview {
    pub stock_market: MarketSection,
    pub crypto_market: MarketSection,
}
