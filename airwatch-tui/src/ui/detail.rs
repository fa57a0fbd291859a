//! Latest measurement detail overlay.

use ratatui::{
    layout::{Constraint, Rect},
    style::Style,
    widgets::{Block, Borders, Cell, Clear, Row, Table},
    Frame,
};

use crate::app::App;
use crate::data::format_time_label;
use crate::ui::common::centered_rect;

/// Render an overlay with the fields of the most recent measurement.
pub fn render_overlay(frame: &mut Frame, app: &App, area: Rect) {
    let Some(record) = app.latest_measurement() else {
        return;
    };

    // Station count for the same interval, when the node publishes it
    let station_count = app.payload.as_ref().and_then(|p| {
        p.station_count_data
            .iter()
            .find(|s| s.measurement_id == record.measurement_id)
            .map(|s| s.station_count)
    });

    let mut rows = vec![
        ("Measurement ID", record.measurement_id.to_string()),
        ("Start", format_time_label(record.measurement_start_time)),
        ("End", format_time_label(record.measurement_end_time)),
        ("Duration", format!("{}s", record.measurement_duration)),
        ("Channel", record.channel.to_string()),
        (
            "Management frames",
            record.frame_counts.management_frame_count.to_string(),
        ),
        (
            "Data frames",
            record.frame_counts.data_frame_count.to_string(),
        ),
        (
            "Control frames",
            record.frame_counts.control_frame_count.to_string(),
        ),
        ("Total frames", record.frame_counts.total().to_string()),
    ];
    if let Some(count) = station_count {
        rows.push(("Stations seen", count.to_string()));
    }

    let height = rows.len() as u16 + 2;
    let popup = centered_rect(area, 44.min(area.width), height.min(area.height));

    let table_rows: Vec<Row> = rows
        .into_iter()
        .map(|(name, value)| {
            Row::new(vec![
                Cell::from(name),
                Cell::from(value).style(Style::default().fg(app.theme.highlight)),
            ])
        })
        .collect();

    let table = Table::new(table_rows, [Constraint::Fill(1), Constraint::Fill(1)]).block(
        Block::default()
            .title(" Latest Measurement ")
            .borders(Borders::ALL)
            .border_type(app.theme.border_type)
            .border_style(Style::default().fg(app.theme.highlight)),
    );

    frame.render_widget(Clear, popup);
    frame.render_widget(table, popup);
}
