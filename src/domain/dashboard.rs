//! Dashboard assembly: fetch, compute and degrade per instrument.

use crate::domain::bar::Bar;
use crate::domain::catalog::Instrument;
use crate::domain::error::OreboardError;
use crate::domain::format;
use crate::domain::metrics::DisplayMetrics;
use crate::domain::period::Period;
use crate::ports::data_port::DataPort;

/// One instrument ready for display: its series plus computed metrics.
#[derive(Debug, Clone)]
pub struct InstrumentPanel {
    pub instrument: Instrument,
    pub series: Vec<Bar>,
    pub metrics: DisplayMetrics,
}

/// An instrument left out of the dashboard, with a reason the user sees.
#[derive(Debug, Clone)]
pub struct SkippedInstrument {
    pub instrument: Instrument,
    pub reason: SkipReason,
}

#[derive(Debug, Clone)]
pub enum SkipReason {
    /// The provider answered but had nothing for the ticker and period.
    NoData,
    /// The fetch itself failed.
    Fetch { reason: String },
}

impl SkippedInstrument {
    pub fn message(&self) -> String {
        match &self.reason {
            SkipReason::NoData => format!(
                "{} ({}): no data available for the selected period",
                self.instrument.name, self.instrument.ticker
            ),
            SkipReason::Fetch { reason } => format!(
                "{} ({}): fetch failed: {}",
                self.instrument.name, self.instrument.ticker, reason
            ),
        }
    }

    /// Fetch faults rate an error-level notice; missing data only a warning.
    pub fn is_fault(&self) -> bool {
        matches!(self.reason, SkipReason::Fetch { .. })
    }
}

/// Everything one dashboard render needs, computed fresh per request.
#[derive(Debug, Clone, Default)]
pub struct DashboardData {
    pub panels: Vec<InstrumentPanel>,
    pub skipped: Vec<SkippedInstrument>,
}

impl DashboardData {
    /// True when instruments were requested but none produced data.
    pub fn all_unavailable(&self) -> bool {
        self.panels.is_empty() && !self.skipped.is_empty()
    }

    /// Formatted summary table rows, one per instrument with data.
    pub fn summary_rows(&self) -> Vec<SummaryRow> {
        self.panels
            .iter()
            .map(|p| SummaryRow {
                company: p.instrument.name.to_string(),
                ticker: p.instrument.ticker.to_string(),
                current_price: format::currency(p.metrics.current_price),
                daily_change: format::percent(p.metrics.daily_change_pct),
                volume: format::volume(p.metrics.current_volume),
                year_high: format::currency(p.metrics.period_high),
                year_low: format::currency(p.metrics.period_low),
            })
            .collect()
    }
}

/// One formatted row of the summary table.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryRow {
    pub company: String,
    pub ticker: String,
    pub current_price: String,
    pub daily_change: String,
    pub volume: String,
    pub year_high: String,
    pub year_low: String,
}

/// Fetches every selected instrument and computes its metrics. A failed
/// or empty fetch skips that instrument; the dashboard itself never
/// fails. Metrics are recomputed from scratch on every call.
pub async fn load_dashboard(
    data_port: &dyn DataPort,
    instruments: &[Instrument],
    period: Period,
) -> DashboardData {
    let mut data = DashboardData::default();

    for &instrument in instruments {
        log::info!("fetching {} ({})", instrument.ticker, period);
        match data_port.fetch_daily(instrument.ticker, period).await {
            Ok(bars) if bars.is_empty() => {
                log::warn!("{}: no data for period {}", instrument.ticker, period);
                data.skipped.push(SkippedInstrument {
                    instrument,
                    reason: SkipReason::NoData,
                });
            }
            Ok(bars) => {
                let metrics = DisplayMetrics::from_series(&bars);
                data.panels.push(InstrumentPanel {
                    instrument,
                    series: bars,
                    metrics,
                });
            }
            Err(OreboardError::NoData { .. }) => {
                log::warn!("{}: no data for period {}", instrument.ticker, period);
                data.skipped.push(SkippedInstrument {
                    instrument,
                    reason: SkipReason::NoData,
                });
            }
            Err(e) => {
                log::error!("{}: fetch failed: {}", instrument.ticker, e);
                data.skipped.push(SkippedInstrument {
                    instrument,
                    reason: SkipReason::Fetch {
                        reason: e.to_string(),
                    },
                });
            }
        }
    }

    data
}
