//! Yahoo Finance chart API data adapter.

use crate::domain::bar::{self, Bar};
use crate::domain::error::OreboardError;
use crate::domain::period::Period;
use crate::ports::config_port::ConfigPort;
use crate::ports::data_port::DataPort;
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://query1.finance.yahoo.com";
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

pub struct YahooAdapter {
    client: reqwest::Client,
    base_url: String,
}

impl YahooAdapter {
    pub fn new() -> Result<Self, OreboardError> {
        Self::build(DEFAULT_BASE_URL, DEFAULT_USER_AGENT, DEFAULT_TIMEOUT_SECS)
    }

    /// Reads `[data] base_url`, `user_agent` and `timeout_secs`, falling
    /// back to the public endpoint defaults for anything unset.
    pub fn from_config(config: &dyn ConfigPort) -> Result<Self, OreboardError> {
        let base_url = config
            .get_string("data", "base_url")
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let user_agent = config
            .get_string("data", "user_agent")
            .unwrap_or_else(|| DEFAULT_USER_AGENT.to_string());
        let timeout_secs = config.get_int("data", "timeout_secs", DEFAULT_TIMEOUT_SECS as i64);
        if timeout_secs <= 0 {
            return Err(OreboardError::ConfigInvalid {
                section: "data".into(),
                key: "timeout_secs".into(),
                reason: format!("must be positive, got {}", timeout_secs),
            });
        }
        Self::build(&base_url, &user_agent, timeout_secs as u64)
    }

    /// Points the adapter at a different host, for tests.
    pub fn with_base_url(base_url: &str) -> Result<Self, OreboardError> {
        Self::build(base_url, DEFAULT_USER_AGENT, DEFAULT_TIMEOUT_SECS)
    }

    fn build(base_url: &str, user_agent: &str, timeout_secs: u64) -> Result<Self, OreboardError> {
        let client = reqwest::Client::builder()
            .user_agent(user_agent)
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| OreboardError::HttpClient {
                reason: e.to_string(),
            })?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn chart_url(&self, ticker: &str, period: Period) -> String {
        format!(
            "{}/v8/finance/chart/{}?interval=1d&range={}",
            self.base_url, ticker, period
        )
    }
}

#[derive(Debug, Deserialize)]
struct ChartResponse {
    chart: ChartNode,
}

#[derive(Debug, Deserialize)]
struct ChartNode {
    result: Option<Vec<ChartResult>>,
    error: Option<ChartError>,
}

#[derive(Debug, Deserialize)]
struct ChartError {
    code: String,
    description: String,
}

#[derive(Debug, Deserialize)]
struct ChartResult {
    #[serde(default)]
    timestamp: Vec<i64>,
    indicators: Indicators,
}

#[derive(Debug, Deserialize)]
struct Indicators {
    #[serde(default)]
    quote: Vec<QuoteBlock>,
}

#[derive(Debug, Deserialize)]
struct QuoteBlock {
    #[serde(default)]
    open: Vec<Option<f64>>,
    #[serde(default)]
    high: Vec<Option<f64>>,
    #[serde(default)]
    low: Vec<Option<f64>>,
    #[serde(default)]
    close: Vec<Option<f64>>,
    #[serde(default)]
    volume: Vec<Option<u64>>,
}

fn field_at<T: Copy>(values: &[Option<T>], index: usize) -> Option<T> {
    values.get(index).copied().flatten()
}

/// Turns a chart payload into a normalized series. A payload without a
/// result or quote block decodes to an empty series; individual nulls
/// in the field arrays become missing fields on the bar.
fn bars_from_chart(ticker: &str, response: ChartResponse) -> Vec<Bar> {
    let result = match response
        .chart
        .result
        .and_then(|r| r.into_iter().next())
    {
        Some(result) => result,
        None => {
            if let Some(err) = response.chart.error {
                log::warn!(
                    "{}: chart API answered {}: {}",
                    ticker,
                    err.code,
                    err.description
                );
            }
            return Vec::new();
        }
    };

    let quote = match result.indicators.quote.into_iter().next() {
        Some(quote) => quote,
        None => return Vec::new(),
    };

    let mut bars = Vec::with_capacity(result.timestamp.len());
    for (i, &ts) in result.timestamp.iter().enumerate() {
        let date = match chrono::DateTime::from_timestamp(ts, 0) {
            Some(dt) => dt.date_naive(),
            None => continue,
        };
        bars.push(Bar {
            date,
            open: field_at(&quote.open, i),
            high: field_at(&quote.high, i),
            low: field_at(&quote.low, i),
            close: field_at(&quote.close, i),
            volume: field_at(&quote.volume, i),
        });
    }

    bar::normalize(&mut bars);
    bars
}

#[async_trait]
impl DataPort for YahooAdapter {
    async fn fetch_daily(&self, ticker: &str, period: Period) -> Result<Vec<Bar>, OreboardError> {
        let url = self.chart_url(ticker, period);
        log::debug!("GET {}", url);

        let response =
            self.client
                .get(&url)
                .send()
                .await
                .map_err(|e| OreboardError::Provider {
                    ticker: ticker.to_string(),
                    reason: e.to_string(),
                })?;

        let payload: ChartResponse =
            response
                .json()
                .await
                .map_err(|e| OreboardError::Provider {
                    ticker: ticker.to_string(),
                    reason: format!("bad chart payload: {}", e),
                })?;

        Ok(bars_from_chart(ticker, payload))
    }
}
