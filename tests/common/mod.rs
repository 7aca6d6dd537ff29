#![allow(dead_code)]

use async_trait::async_trait;
use chrono::NaiveDate;
use oreboard::domain::bar::Bar;
use oreboard::domain::error::OreboardError;
use oreboard::domain::period::Period;
use oreboard::ports::data_port::DataPort;
use std::collections::HashMap;

pub struct MockDataPort {
    pub data: HashMap<String, Vec<Bar>>,
    pub errors: HashMap<String, String>,
    pub no_data: Vec<String>,
}

impl MockDataPort {
    pub fn new() -> Self {
        Self {
            data: HashMap::new(),
            errors: HashMap::new(),
            no_data: Vec::new(),
        }
    }

    pub fn with_bars(mut self, ticker: &str, bars: Vec<Bar>) -> Self {
        self.data.insert(ticker.to_string(), bars);
        self
    }

    pub fn with_error(mut self, ticker: &str, reason: &str) -> Self {
        self.errors.insert(ticker.to_string(), reason.to_string());
        self
    }

    pub fn with_no_data(mut self, ticker: &str) -> Self {
        self.no_data.push(ticker.to_string());
        self
    }
}

#[async_trait]
impl DataPort for MockDataPort {
    async fn fetch_daily(&self, ticker: &str, _period: Period) -> Result<Vec<Bar>, OreboardError> {
        if self.no_data.iter().any(|t| t == ticker) {
            return Err(OreboardError::NoData {
                ticker: ticker.to_string(),
            });
        }
        if let Some(reason) = self.errors.get(ticker) {
            return Err(OreboardError::Provider {
                ticker: ticker.to_string(),
                reason: reason.clone(),
            });
        }
        Ok(self.data.get(ticker).cloned().unwrap_or_default())
    }
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn make_bar(date_str: &str, close: f64) -> Bar {
    Bar {
        date: NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap(),
        open: Some(close - 1.0),
        high: Some(close + 1.0),
        low: Some(close - 2.0),
        close: Some(close),
        volume: Some(1000),
    }
}

pub fn generate_bars(start_date: &str, count: usize, start_price: f64) -> Vec<Bar> {
    let start = NaiveDate::parse_from_str(start_date, "%Y-%m-%d").unwrap();
    (0..count)
        .map(|i| {
            let price = start_price + i as f64;
            Bar {
                date: start + chrono::Duration::days(i as i64),
                open: Some(price - 0.5),
                high: Some(price + 1.0),
                low: Some(price - 1.5),
                close: Some(price),
                volume: Some(1_000 + 10 * i as u64),
            }
        })
        .collect()
}
