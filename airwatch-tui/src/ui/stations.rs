//! Station count chart view.

use ratatui::{layout::Rect, style::Style, widgets::Paragraph, Frame};

use crate::app::App;
use crate::ui::chart::render_chart;

/// Render the station count line chart for the watched channel.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let Some(ref spec) = app.station_chart else {
        let paragraph =
            Paragraph::new("Waiting for data...").style(Style::default().fg(app.theme.axis));
        frame.render_widget(paragraph, area);
        return;
    };

    let title = format!(" Channel {} Latest Station Count Data ", app.channel);
    render_chart(frame, &app.theme, area, spec, &title);
}
