//! Common UI components shared across views.
//!
//! This module contains the header bar, tab bar, status bar, and help overlay.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Tabs},
    Frame,
};

use crate::app::{App, View};

/// Render the header bar with channel and fetch state.
pub fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let mut spans = vec![
        Span::styled(" AIRWATCH ", app.theme.header),
        Span::raw(format!("| Channel {} ", app.channel)),
        Span::raw(format!("| Units: {} ", app.units.label())),
    ];

    if let Some(ref payload) = app.payload {
        spans.push(Span::raw(format!(
            "| {} measurements ",
            payload.data.len()
        )));
    } else {
        spans.push(Span::raw("| Loading... "));
    }

    if app.load_error.is_some() {
        spans.push(Span::styled(
            "| FETCH ERROR ",
            Style::default()
                .fg(app.theme.error)
                .add_modifier(Modifier::BOLD),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Render the tab bar.
pub fn render_tabs(frame: &mut Frame, app: &App, area: Rect) {
    let titles: Vec<Line> = vec![Line::from(" 1:Frames "), Line::from(" 2:Stations ")];

    let selected = match app.current_view {
        View::Frames => 0,
        View::Stations => 1,
    };

    let tabs = Tabs::new(titles)
        .select(selected)
        .style(app.theme.tab_inactive)
        .highlight_style(app.theme.tab_active)
        .divider("|");

    frame.render_widget(tabs, area);
}

/// Render the status bar at the bottom.
///
/// Shows: data source, time since last update, available controls.
/// Also displays temporary status messages and errors.
pub fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    // Check for temporary status message first
    if let Some(msg) = app.get_status_message() {
        let paragraph =
            Paragraph::new(format!(" {} ", msg)).style(Style::default().fg(app.theme.highlight));
        frame.render_widget(paragraph, area);
        return;
    }

    if let Some(ref err) = app.load_error {
        let paragraph =
            Paragraph::new(format!(" {} ", err)).style(Style::default().fg(app.theme.error));
        frame.render_widget(paragraph, area);
        return;
    }

    let age = match app.last_updated {
        Some(t) => format!("updated {}s ago", t.elapsed().as_secs()),
        None => "no data yet".to_string(),
    };

    let status = format!(
        " {} | {} | u:units r:refresh e:export ?:help q:quit ",
        app.source_description(),
        age
    );

    let paragraph = Paragraph::new(status).style(Style::default().fg(app.theme.axis));
    frame.render_widget(paragraph, area);
}

/// Render the help overlay listing all key bindings.
pub fn render_help(frame: &mut Frame, app: &App, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            "Keys",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("  Tab / h / l    switch view"),
        Line::from("  1 / 2          jump to Frames / Stations"),
        Line::from("  u              toggle raw / per-second units"),
        Line::from("  r              refresh now"),
        Line::from("  Enter          latest measurement detail"),
        Line::from("  e              export chart specs to JSON"),
        Line::from("  Esc            back / close overlay"),
        Line::from("  q              quit"),
        Line::from(""),
        Line::from("  Press any key to close"),
    ];

    let width = 46.min(area.width);
    let height = (lines.len() as u16 + 2).min(area.height);
    let popup = centered_rect(area, width, height);

    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.highlight));

    frame.render_widget(Clear, popup);
    frame.render_widget(
        Paragraph::new(lines).block(block).alignment(Alignment::Left),
        popup,
    );
}

/// Compute a centered rect of the given size inside `area`.
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}
