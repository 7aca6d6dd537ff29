//! CSV file data adapter for offline fixtures.

use crate::domain::bar::{self, Bar};
use crate::domain::error::OreboardError;
use crate::domain::period::Period;
use crate::ports::data_port::DataPort;
use async_trait::async_trait;
use chrono::{Months, NaiveDate};
use std::fs;
use std::path::PathBuf;

pub struct CsvAdapter {
    base_path: PathBuf,
}

impl CsvAdapter {
    pub fn new(base_path: PathBuf) -> Self {
        Self { base_path }
    }

    fn csv_path(&self, ticker: &str) -> PathBuf {
        self.base_path.join(format!("{}.csv", ticker))
    }
}

/// Blank or unparseable fields become `None` rather than failing the
/// series. Non-finite numbers are treated the same as absent ones.
fn parse_opt_f64(field: &str) -> Option<f64> {
    let trimmed = field.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

fn parse_opt_u64(field: &str) -> Option<u64> {
    let trimmed = field.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<u64>().ok()
}

/// First date inside the selected window, anchored at the newest bar in
/// the file so fixtures stay stable regardless of the wall clock.
fn window_start(anchor: NaiveDate, period: Period) -> NaiveDate {
    let months = match period {
        Period::OneMonth => 1,
        Period::ThreeMonths => 3,
        Period::SixMonths => 6,
        Period::OneYear => 12,
        Period::TwoYears => 24,
        Period::FiveYears => 60,
    };
    anchor - Months::new(months)
}

#[async_trait]
impl DataPort for CsvAdapter {
    async fn fetch_daily(&self, ticker: &str, period: Period) -> Result<Vec<Bar>, OreboardError> {
        let path = self.csv_path(ticker);
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(OreboardError::NoData {
                    ticker: ticker.to_string(),
                });
            }
            Err(e) => {
                return Err(OreboardError::Provider {
                    ticker: ticker.to_string(),
                    reason: format!("failed to read {}: {}", path.display(), e),
                });
            }
        };

        let mut rdr = csv::Reader::from_reader(content.as_bytes());
        let mut bars = Vec::new();

        for result in rdr.records() {
            let record = result.map_err(|e| OreboardError::Provider {
                ticker: ticker.to_string(),
                reason: format!("CSV parse error: {}", e),
            })?;

            let date_str = record.get(0).ok_or_else(|| OreboardError::Provider {
                ticker: ticker.to_string(),
                reason: "missing date column".into(),
            })?;
            let date = match NaiveDate::parse_from_str(date_str.trim(), "%Y-%m-%d") {
                Ok(date) => date,
                Err(e) => {
                    // A row without a usable date cannot be placed in the
                    // series; drop it and keep the rest of the file.
                    log::warn!("{}: dropping row with bad date '{}': {}", ticker, date_str, e);
                    continue;
                }
            };

            bars.push(Bar {
                date,
                open: record.get(1).and_then(parse_opt_f64),
                high: record.get(2).and_then(parse_opt_f64),
                low: record.get(3).and_then(parse_opt_f64),
                close: record.get(4).and_then(parse_opt_f64),
                volume: record.get(5).and_then(parse_opt_u64),
            });
        }

        bar::normalize(&mut bars);

        if let Some(anchor) = bars.last().map(|b| b.date) {
            let start = window_start(anchor, period);
            bars.retain(|b| b.date >= start);
        }

        Ok(bars)
    }
}
