//! Candlestick SVG rendering for the dashboard.

use crate::domain::bar::Bar;

const WIDTH: f64 = 720.0;
const HEIGHT: f64 = 300.0;
const PADDING: f64 = 40.0;

const UP_COLOR: &str = "#16a34a";
const DOWN_COLOR: &str = "#dc2626";
const AXIS_COLOR: &str = "#94a3b8";
const LABEL_COLOR: &str = "#64748b";

/// Renders one instrument's series as a candlestick chart. Bars missing
/// any of open, high, low or close are left out of the drawing; an empty
/// or fully undrawable series yields a short placeholder message.
pub fn candlestick_svg(bars: &[Bar]) -> String {
    let drawable: Vec<(usize, f64, f64, f64, f64)> = bars
        .iter()
        .enumerate()
        .filter_map(|(i, b)| match (b.open, b.high, b.low, b.close) {
            (Some(open), Some(high), Some(low), Some(close)) => Some((i, open, high, low, close)),
            _ => None,
        })
        .collect();

    if drawable.is_empty() {
        return "No chart data available.".to_string();
    }

    let min_price = drawable
        .iter()
        .map(|&(_, _, _, low, _)| low)
        .fold(f64::INFINITY, f64::min);
    let max_price = drawable
        .iter()
        .map(|&(_, _, high, _, _)| high)
        .fold(f64::NEG_INFINITY, f64::max);

    let plot_width = WIDTH - 2.0 * PADDING;
    let plot_height = HEIGHT - 2.0 * PADDING;

    let range = max_price - min_price;
    let scale_y = if range > 0.0 { plot_height / range } else { 1.0 };

    // Slots span the whole series so gaps stay visible where bars were
    // undrawable.
    let slot = plot_width / bars.len() as f64;
    let body_width = (slot * 0.6).clamp(1.0, 12.0);

    let y = |price: f64| HEIGHT - PADDING - (price - min_price) * scale_y;

    let mut svg = format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {:.0} {:.0}" width="{:.0}" height="{:.0}" role="img">"#,
        WIDTH, HEIGHT, WIDTH, HEIGHT
    );

    svg.push_str(&format!(
        r#"<line x1="{:.1}" y1="{:.1}" x2="{:.1}" y2="{:.1}" stroke="{}" stroke-width="1"/>"#,
        PADDING,
        PADDING,
        PADDING,
        HEIGHT - PADDING,
        AXIS_COLOR
    ));
    svg.push_str(&format!(
        r#"<line x1="{:.1}" y1="{:.1}" x2="{:.1}" y2="{:.1}" stroke="{}" stroke-width="1"/>"#,
        PADDING,
        HEIGHT - PADDING,
        WIDTH - PADDING,
        HEIGHT - PADDING,
        AXIS_COLOR
    ));

    for &(i, open, high, low, close) in &drawable {
        let cx = PADDING + (i as f64 + 0.5) * slot;
        let color = if close >= open { UP_COLOR } else { DOWN_COLOR };

        svg.push_str(&format!(
            r#"<line x1="{:.1}" y1="{:.1}" x2="{:.1}" y2="{:.1}" stroke="{}" stroke-width="1"/>"#,
            cx,
            y(high),
            cx,
            y(low),
            color
        ));

        let top = y(open.max(close));
        let bottom = y(open.min(close));
        let body_height = (bottom - top).max(1.0);
        svg.push_str(&format!(
            r#"<rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" fill="{}"/>"#,
            cx - body_width / 2.0,
            top,
            body_width,
            body_height,
            color
        ));
    }

    svg.push_str(&format!(
        r#"<text x="4" y="{:.1}" font-size="10" fill="{}">{:.2}</text>"#,
        y(max_price) + 3.0,
        LABEL_COLOR,
        max_price
    ));
    svg.push_str(&format!(
        r#"<text x="4" y="{:.1}" font-size="10" fill="{}">{:.2}</text>"#,
        y(min_price) + 3.0,
        LABEL_COLOR,
        min_price
    ));

    let first_date = bars[drawable[0].0].date;
    let last_date = bars[drawable[drawable.len() - 1].0].date;
    svg.push_str(&format!(
        r#"<text x="{:.1}" y="{:.1}" font-size="10" fill="{}">{}</text>"#,
        PADDING,
        HEIGHT - PADDING + 14.0,
        LABEL_COLOR,
        first_date
    ));
    svg.push_str(&format!(
        r#"<text x="{:.1}" y="{:.1}" font-size="10" fill="{}" text-anchor="end">{}</text>"#,
        WIDTH - PADDING,
        HEIGHT - PADDING + 14.0,
        LABEL_COLOR,
        last_date
    ));

    svg.push_str("</svg>");
    svg
}
