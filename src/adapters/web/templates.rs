//! HTML templates using Askama.

use askama::Template;

use crate::domain::dashboard::SummaryRow;

/// One catalog entry in the settings form.
pub struct InstrumentChoice {
    pub name: &'static str,
    pub ticker: &'static str,
    pub checked: bool,
}

/// One period option in the settings form.
pub struct PeriodChoice {
    pub value: &'static str,
    pub selected: bool,
}

/// A per-instrument warning or error shown above the views.
pub struct Notice {
    pub level: &'static str,
    pub message: String,
}

/// One metric tile under an instrument heading.
pub struct Tile {
    pub label: &'static str,
    pub value: String,
}

/// One chart section: heading, metric tiles and the rendered SVG.
pub struct PanelView {
    pub name: &'static str,
    pub ticker: &'static str,
    pub chart: String,
    pub tiles: Vec<Tile>,
}

#[derive(Template)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate {
    pub title: &'static str,
    pub summary_view: bool,
    pub form_target: &'static str,
    pub charts_href: String,
    pub summary_href: String,
    pub instruments: Vec<InstrumentChoice>,
    pub periods: Vec<PeriodChoice>,
    pub notices: Vec<Notice>,
    pub has_aggregate_notice: bool,
    pub aggregate_notice: String,
    pub panels: Vec<PanelView>,
    pub has_rows: bool,
    pub rows: Vec<SummaryRow>,
}

#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorTemplate<'a> {
    pub message: &'a str,
    pub status: u16,
}
