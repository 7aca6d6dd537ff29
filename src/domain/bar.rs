//! Daily OHLCV bar with possibly-missing fields.

use chrono::NaiveDate;

/// One trading day for one instrument. Providers may omit any price or
/// volume field, so every field except the date is optional.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bar {
    pub date: NaiveDate,
    pub open: Option<f64>,
    pub high: Option<f64>,
    pub low: Option<f64>,
    pub close: Option<f64>,
    pub volume: Option<u64>,
}

/// Selects one numeric field of a [`Bar`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarField {
    Open,
    High,
    Low,
    Close,
    Volume,
}

impl Bar {
    /// The selected field as `f64`, or `None` when the provider omitted it.
    pub fn field(&self, field: BarField) -> Option<f64> {
        match field {
            BarField::Open => self.open,
            BarField::High => self.high,
            BarField::Low => self.low,
            BarField::Close => self.close,
            BarField::Volume => self.volume.map(|v| v as f64),
        }
    }

    /// True when every price and volume field is absent.
    pub fn is_empty(&self) -> bool {
        self.open.is_none()
            && self.high.is_none()
            && self.low.is_none()
            && self.close.is_none()
            && self.volume.is_none()
    }
}

/// Sorts bars by date and collapses duplicate dates, keeping the most
/// recent record for each date. Adapters call this so that every series
/// handed to the domain has strictly increasing dates.
pub fn normalize(bars: &mut Vec<Bar>) {
    bars.sort_by_key(|b| b.date);
    bars.dedup_by(|later, earlier| {
        if later.date == earlier.date {
            *earlier = *later;
            true
        } else {
            false
        }
    });
}
