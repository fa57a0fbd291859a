//! Shared ChartSpec renderer.
//!
//! Turns a [`ChartSpec`] into a ratatui line chart: one dataset per series,
//! x positions by record index, x axis annotated with the spec's time
//! labels and y axis with value bounds.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    symbols,
    text::Span,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph},
    Frame,
};

use crate::data::ChartSpec;
use crate::ui::Theme;

/// Render a chart spec into the given area.
///
/// An empty spec renders a placeholder instead of an empty plot.
pub fn render_chart(frame: &mut Frame, theme: &Theme, area: Rect, spec: &ChartSpec, title: &str) {
    let block = Block::default()
        .title(title.to_string())
        .borders(Borders::ALL)
        .border_type(theme.border_type)
        .border_style(Style::default().fg(theme.border));

    if spec.is_empty() {
        let paragraph = Paragraph::new("No measurements yet")
            .style(Style::default().fg(theme.axis))
            .block(block);
        frame.render_widget(paragraph, area);
        return;
    }

    // Each series becomes (index, value) points so all series share one axis
    let point_sets: Vec<Vec<(f64, f64)>> = spec
        .datasets
        .iter()
        .map(|s| {
            s.data
                .iter()
                .enumerate()
                .map(|(i, &v)| (i as f64, v))
                .collect()
        })
        .collect();

    let datasets: Vec<Dataset> = spec
        .datasets
        .iter()
        .zip(point_sets.iter())
        .map(|(series, points)| {
            Dataset::default()
                .name(series.label.clone())
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(parse_hex_color(&series.border_color)))
                .data(points)
        })
        .collect();

    let x_max = (spec.len().saturating_sub(1)).max(1) as f64;
    let x_labels = axis_time_labels(&spec.labels)
        .into_iter()
        .map(|l| Span::styled(l, Style::default().fg(theme.axis)))
        .collect::<Vec<_>>();

    let (y_lo, y_hi) = padded_bounds(spec.value_bounds().unwrap_or((0.0, 1.0)));
    let y_labels = [y_lo, (y_lo + y_hi) / 2.0, y_hi]
        .iter()
        .map(|&v| Span::styled(format_axis_value(v), Style::default().fg(theme.axis)))
        .collect::<Vec<_>>();

    let chart = Chart::new(datasets)
        .block(block)
        .x_axis(
            Axis::default()
                .style(Style::default().fg(theme.axis))
                .bounds([0.0, x_max])
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .style(Style::default().fg(theme.axis))
                .bounds([y_lo, y_hi])
                .labels(y_labels),
        );

    frame.render_widget(chart, area);
}

/// First, middle, and last time labels for the x axis.
fn axis_time_labels(labels: &[String]) -> Vec<String> {
    match labels.len() {
        0 => Vec::new(),
        1 => vec![labels[0].clone()],
        2 => vec![labels[0].clone(), labels[1].clone()],
        n => vec![
            labels[0].clone(),
            labels[n / 2].clone(),
            labels[n - 1].clone(),
        ],
    }
}

/// Pad value bounds so flat series don't collapse to a zero-height axis.
fn padded_bounds((lo, hi): (f64, f64)) -> (f64, f64) {
    if lo == hi {
        return (lo - 1.0, hi + 1.0);
    }
    let pad = (hi - lo) * 0.05;
    // Counts and rates are non-negative; don't pad below zero
    let lower = if lo >= 0.0 { (lo - pad).max(0.0) } else { lo - pad };
    (lower, hi + pad)
}

fn format_axis_value(v: f64) -> String {
    if v.abs() >= 100.0 {
        format!("{:.0}", v)
    } else {
        format!("{:.1}", v)
    }
}

/// Parse a `#rrggbb` hex string into a terminal color.
///
/// Falls back to white for anything malformed.
pub fn parse_hex_color(hex: &str) -> Color {
    let hex = hex.trim_start_matches('#');
    if hex.len() != 6 {
        return Color::White;
    }
    match (
        u8::from_str_radix(&hex[0..2], 16),
        u8::from_str_radix(&hex[2..4], 16),
        u8::from_str_radix(&hex[4..6], 16),
    ) {
        (Ok(r), Ok(g), Ok(b)) => Color::Rgb(r, g, b),
        _ => Color::White,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(parse_hex_color("#ff6d6d"), Color::Rgb(0xff, 0x6d, 0x6d));
        assert_eq!(parse_hex_color("64ef87"), Color::Rgb(0x64, 0xef, 0x87));
        assert_eq!(parse_hex_color("#bogus!"), Color::White);
        assert_eq!(parse_hex_color("#fff"), Color::White);
    }

    #[test]
    fn test_axis_time_labels() {
        let labels: Vec<String> = ["9:0:1", "9:0:11", "9:0:21", "9:0:31", "9:0:41"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(axis_time_labels(&labels), vec!["9:0:1", "9:0:21", "9:0:41"]);

        assert!(axis_time_labels(&[]).is_empty());
        assert_eq!(axis_time_labels(&labels[..1]).len(), 1);
    }

    #[test]
    fn test_padded_bounds() {
        let (lo, hi) = padded_bounds((0.0, 100.0));
        assert_eq!(lo, 0.0);
        assert!(hi > 100.0);

        // Flat series still gets a visible range
        let (lo, hi) = padded_bounds((5.0, 5.0));
        assert!(lo < 5.0 && hi > 5.0);
    }
}
