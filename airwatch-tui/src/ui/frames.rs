//! Frame count chart view.

use ratatui::{layout::Rect, style::Style, widgets::Paragraph, Frame};

use crate::app::App;
use crate::ui::chart::render_chart;

/// Render the frame count line chart for the watched channel.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    if let Some(ref err) = app.chart_error {
        let paragraph = Paragraph::new(format!("Cannot chart frame counts: {}", err))
            .style(Style::default().fg(app.theme.error));
        frame.render_widget(paragraph, area);
        return;
    }

    let Some(ref spec) = app.frame_chart else {
        let paragraph =
            Paragraph::new("Waiting for data...").style(Style::default().fg(app.theme.axis));
        frame.render_widget(paragraph, area);
        return;
    };

    let title = format!(" Channel {} Latest Measurement Data ", app.channel);
    render_chart(frame, &app.theme, area, spec, &title);
}
