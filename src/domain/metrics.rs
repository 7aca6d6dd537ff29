//! Safe metric extraction over sparse daily series.

use super::bar::{Bar, BarField};

/// Headline numbers for one instrument over the selected period. Every
/// field is optional; a missing value renders as the unavailable
/// placeholder instead of failing the instrument.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DisplayMetrics {
    pub current_price: Option<f64>,
    pub daily_change_pct: Option<f64>,
    pub current_volume: Option<u64>,
    pub period_high: Option<f64>,
    pub period_low: Option<f64>,
}

impl DisplayMetrics {
    /// Computes every headline metric from one series. Pure and total:
    /// any combination of missing fields yields `None`s, never an error.
    pub fn from_series(bars: &[Bar]) -> Self {
        DisplayMetrics {
            current_price: latest(bars, BarField::Close),
            daily_change_pct: daily_change_percent(bars),
            current_volume: bars.last().and_then(|b| b.volume),
            period_high: period_max(bars, BarField::High),
            period_low: period_min(bars, BarField::Low),
        }
    }
}

/// Value of `field` in the most recent bar. `None` when the series is
/// empty or the final bar omits that field.
pub fn latest(bars: &[Bar], field: BarField) -> Option<f64> {
    bars.last().and_then(|b| b.field(field))
}

/// Percent change between the last two closes, rounded to two decimal
/// places. `None` when fewer than two bars exist, when either close is
/// missing, or when the previous close is zero.
pub fn daily_change_percent(bars: &[Bar]) -> Option<f64> {
    if bars.len() < 2 {
        return None;
    }
    let last = bars[bars.len() - 1].close?;
    let prev = bars[bars.len() - 2].close?;
    if prev == 0.0 {
        return None;
    }
    let pct = (last - prev) / prev * 100.0;
    Some((pct * 100.0).round() / 100.0)
}

/// Maximum of `field` across the series, ignoring bars where it is
/// missing. `None` when no bar carries the field.
pub fn period_max(bars: &[Bar], field: BarField) -> Option<f64> {
    bars.iter().filter_map(|b| b.field(field)).reduce(f64::max)
}

/// Minimum of `field` across the series, ignoring bars where it is
/// missing.
pub fn period_min(bars: &[Bar], field: BarField) -> Option<f64> {
    bars.iter().filter_map(|b| b.field(field)).reduce(f64::min)
}
