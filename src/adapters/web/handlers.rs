//! HTTP request handlers for the dashboard.

use askama::Template;
use axum::{
    extract::{RawQuery, State},
    response::{Html, IntoResponse, Response},
};
use std::sync::Arc;

use crate::adapters::chart_svg;
use crate::domain::catalog::{self, Instrument};
use crate::domain::dashboard::{DashboardData, load_dashboard};
use crate::domain::format;
use crate::domain::period::Period;

use super::templates::{
    DashboardTemplate, InstrumentChoice, Notice, PanelView, PeriodChoice, Tile,
};
use super::{AppState, WebError};

const PAGE_TITLE: &str = "ASX Mining Stocks Tracker";

pub async fn charts_view(
    State(state): State<Arc<AppState>>,
    RawQuery(query): RawQuery,
) -> Result<Response, WebError> {
    render_dashboard(&state, query.as_deref(), false).await
}

pub async fn summary_view(
    State(state): State<Arc<AppState>>,
    RawQuery(query): RawQuery,
) -> Result<Response, WebError> {
    render_dashboard(&state, query.as_deref(), true).await
}

pub async fn not_found() -> Response {
    WebError::not_found("No such page").into_response()
}

#[derive(Debug)]
struct DashboardRequest {
    instruments: Vec<Instrument>,
    period: Period,
    unknown: Vec<String>,
    explicit_selection: bool,
}

/// Parses the query string by hand so that both repeated `stocks` keys
/// from the checkbox form and a comma list in a single key work. Ticker
/// tokens and period values never need percent-decoding.
fn parse_request(query: Option<&str>) -> Result<DashboardRequest, WebError> {
    let mut tokens: Vec<String> = Vec::new();
    let mut explicit_selection = false;
    let mut period = Period::default();

    if let Some(query) = query {
        for pair in query.split('&') {
            if pair.is_empty() {
                continue;
            }
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            match key {
                "stocks" => {
                    explicit_selection = true;
                    for token in value.split(',') {
                        tokens.push(token.trim().to_string());
                    }
                }
                "period" => {
                    period = value
                        .parse()
                        .map_err(|_| WebError::bad_request(format!("Unknown period '{}'", value)))?;
                }
                _ => {}
            }
        }
    }

    let (instruments, unknown) = if explicit_selection {
        let selection = catalog::resolve_selection(tokens.iter().map(String::as_str));
        (selection.instruments, selection.unknown)
    } else {
        (catalog::default_selection(), Vec::new())
    };

    Ok(DashboardRequest {
        instruments,
        period,
        unknown,
        explicit_selection,
    })
}

async fn render_dashboard(
    state: &AppState,
    query: Option<&str>,
    summary_view: bool,
) -> Result<Response, WebError> {
    let request = parse_request(query)?;
    let data = load_dashboard(&*state.data_port, &request.instruments, request.period).await;

    let template = build_template(&request, &data, summary_view);
    let html = template
        .render()
        .map_err(|e| WebError::internal(e.to_string()))?;
    Ok(Html(html).into_response())
}

fn build_template(
    request: &DashboardRequest,
    data: &DashboardData,
    summary_view: bool,
) -> DashboardTemplate {
    let selected: Vec<&str> = request.instruments.iter().map(|i| i.ticker).collect();

    let instruments = catalog::INSTRUMENTS
        .iter()
        .map(|i| InstrumentChoice {
            name: i.name,
            ticker: i.ticker,
            checked: selected.contains(&i.ticker),
        })
        .collect();

    let periods = Period::ALL
        .iter()
        .map(|p| PeriodChoice {
            value: p.as_str(),
            selected: *p == request.period,
        })
        .collect();

    let mut notices: Vec<Notice> = Vec::new();
    if !request.unknown.is_empty() {
        notices.push(Notice {
            level: "warning",
            message: format!("Ignoring unknown tickers: {}", request.unknown.join(", ")),
        });
    }
    for skip in &data.skipped {
        notices.push(Notice {
            level: if skip.is_fault() { "error" } else { "warning" },
            message: skip.message(),
        });
    }

    let empty_selection = request.explicit_selection && request.instruments.is_empty();
    let aggregate_notice = if empty_selection {
        Some("No instruments selected.".to_string())
    } else if data.all_unavailable() {
        Some("No data available for the selected stocks and period.".to_string())
    } else {
        None
    };

    let panels = data
        .panels
        .iter()
        .map(|p| PanelView {
            name: p.instrument.name,
            ticker: p.instrument.ticker,
            chart: chart_svg::candlestick_svg(&p.series),
            tiles: vec![
                Tile {
                    label: "Current Price",
                    value: format::currency(p.metrics.current_price),
                },
                Tile {
                    label: "Daily Change",
                    value: format::percent(p.metrics.daily_change_pct),
                },
                Tile {
                    label: "Volume",
                    value: format::volume(p.metrics.current_volume),
                },
                Tile {
                    label: "Period High",
                    value: format::currency(p.metrics.period_high),
                },
            ],
        })
        .collect();

    let rows = data.summary_rows();

    let mut query_string = String::new();
    if request.explicit_selection {
        query_string.push_str("stocks=");
        query_string.push_str(&selected.join(","));
        query_string.push('&');
    }
    query_string.push_str("period=");
    query_string.push_str(request.period.as_str());

    DashboardTemplate {
        title: PAGE_TITLE,
        summary_view,
        form_target: if summary_view { "/summary" } else { "/" },
        charts_href: format!("/?{}", query_string),
        summary_href: format!("/summary?{}", query_string),
        instruments,
        periods,
        notices,
        has_aggregate_notice: aggregate_notice.is_some(),
        aggregate_notice: aggregate_notice.unwrap_or_default(),
        panels,
        has_rows: !rows.is_empty(),
        rows,
    }
}
