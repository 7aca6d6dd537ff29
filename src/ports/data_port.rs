//! Data access port trait.

use crate::domain::bar::Bar;
use crate::domain::error::OreboardError;
use crate::domain::period::Period;
use async_trait::async_trait;

#[async_trait]
pub trait DataPort: Send + Sync {
    /// Daily bars for one ticker over the requested period, sorted by
    /// date with strictly increasing dates. An empty vec means the
    /// provider answered but had nothing for the ticker and period.
    async fn fetch_daily(&self, ticker: &str, period: Period) -> Result<Vec<Bar>, OreboardError>;
}
