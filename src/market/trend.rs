//! Trend classification and display formatting for market sections.

use std::fmt;

use serde::Serialize;

/// Direction of a market section, from the sign of its average percent change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Trend {
    Bullish,
    Bearish,
}

impl Trend {
    /// Bullish for an average ≥ 0 (including exactly 0), bearish below.
    pub fn from_average(avg: f64) -> Self {
        if avg < 0.0 { Self::Bearish } else { Self::Bullish }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bullish => "Bullish",
            Self::Bearish => "Bearish",
        }
    }
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Average change of a section and the trend it implies.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TrendSummary {
    pub average: f64,
    pub trend: Trend,
}

impl TrendSummary {
    pub fn from_average(average: f64) -> Self {
        Self {
            average,
            trend: Trend::from_average(average),
        }
    }
}

impl fmt::Display for TrendSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:.2}%)", self.trend, self.average)
    }
}

/// Mean of `changes`; 0 for an empty input.
pub fn average_change<I>(changes: I) -> f64
where
    I: IntoIterator<Item = f64>,
{
    let (sum, n) = changes
        .into_iter()
        .fold((0.0_f64, 0_u32), |(sum, n), c| (sum + c, n + 1));
    if n == 0 { 0.0 } else { sum / f64::from(n) }
}

/// Parses a price that may carry a leading `$` and thousands separators.
///
/// Returns `None` for anything that is not a finite number (`"N/A"`, `""`, `"NaN"`, …).
/// Commas are only accepted as well-formed thousands groups: `"1,234.5"` parses, `"1,2,3"`
/// does not.
pub fn parse_price(raw: &str) -> Option<f64> {
    let s = raw.trim();
    let s = s.strip_prefix('$').unwrap_or(s).trim();
    if s.is_empty() {
        return None;
    }
    let cleaned = strip_thousands(s)?;
    cleaned.parse::<f64>().ok().filter(|v| v.is_finite())
}

fn strip_thousands(s: &str) -> Option<String> {
    if !s.contains(',') {
        return Some(s.to_string());
    }

    let (int_part, frac) = match s.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (s, None),
    };
    if frac.is_some_and(|f| f.contains(',')) {
        return None;
    }

    let digits = int_part.strip_prefix('-').unwrap_or(int_part);
    let mut groups = digits.split(',');
    let lead = groups.next()?;
    let lead_ok = (1..=3).contains(&lead.len()) && lead.bytes().all(|b| b.is_ascii_digit());
    if !lead_ok || !groups.all(|g| g.len() == 3 && g.bytes().all(|b| b.is_ascii_digit())) {
        return None;
    }

    Some(s.replace(',', ""))
}

/// A price ready to render: `"$123.45"`, or `"N/A"` when the source could not be parsed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum PriceDisplay {
    Price(f64),
    NotAvailable,
}

impl PriceDisplay {
    pub fn parse(raw: &str) -> Self {
        parse_price(raw).map_or(Self::NotAvailable, Self::Price)
    }

    pub const fn value(self) -> Option<f64> {
        match self {
            Self::Price(v) => Some(v),
            Self::NotAvailable => None,
        }
    }
}

impl fmt::Display for PriceDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Price(v) => write!(f, "${v:.2}"),
            Self::NotAvailable => f.write_str("N/A"),
        }
    }
}

/// `"▲ 1.23%"` for a non-negative change, `"▼ -0.40%"` below zero.
pub fn format_change(change_pct: f64) -> String {
    let arrow = if change_pct >= 0.0 { '▲' } else { '▼' };
    format!("{arrow} {change_pct:.2}%")
}
