//! Threshold rule that turns a percent price change into a [`Signal`].

use crate::core::{AssetClass, Signal};

/// Classifies a percent change for the given asset class.
///
/// The threshold (1.5 for stocks, 5 for crypto) must be strictly exceeded; a change exactly on
/// the boundary, or a non-finite change, is `Hold`.
pub fn classify(change_pct: f64, class: AssetClass) -> Signal {
    let threshold = class.signal_threshold();
    if change_pct > threshold {
        Signal::Buy
    } else if change_pct < -threshold {
        Signal::Sell
    } else {
        Signal::Hold
    }
}

/// Percent change from `previous` to `current`, or 0 when there is no usable previous close.
pub fn percent_change(current: f64, previous: Option<f64>) -> f64 {
    match previous {
        Some(prev) if prev != 0.0 && prev.is_finite() => (current - prev) / prev * 100.0,
        _ => 0.0,
    }
}

/// Rounds to two decimals, the precision changes are reported with.
pub fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}
