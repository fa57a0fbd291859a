// Binary includes library modules - some public API items are only for library consumers
#![allow(unused)]

use std::io;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Layout},
    Terminal,
};

mod app;
mod config;
mod data;
mod events;
mod source;
mod ui;

use airwatch_client::NodeClient;
use app::{App, View};
use config::AppConfig;
use data::Units;
use source::{DataSource, FileSource, HttpSource};

#[derive(Parser, Debug)]
#[command(name = "airwatch")]
#[command(about = "Diagnostic TUI for charting wireless channel measurements from a survey node")]
struct Args {
    /// Node API endpoint (e.g., http://node.local:8080)
    #[arg(short, long, conflicts_with = "file")]
    endpoint: Option<String>,

    /// Channel number to watch
    #[arg(short, long)]
    channel: Option<u32>,

    /// Path to a captured payload JSON file instead of a live node
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Maximum number of records to request per fetch
    #[arg(short, long)]
    limit: Option<u32>,

    /// Refresh interval in seconds
    #[arg(short, long)]
    refresh: Option<u64>,

    /// Frame count units
    #[arg(short, long, value_enum)]
    units: Option<Units>,

    /// Path to a TOML config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Fetch once, write the chart specs to a JSON file, and exit
    #[arg(long, conflicts_with = "file")]
    export: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Defaults < config file / environment < command line
    let mut cfg = AppConfig::load(args.config.as_deref())?;
    if let Some(endpoint) = args.endpoint {
        cfg.endpoint = endpoint;
    }
    if let Some(channel) = args.channel {
        cfg.channel = channel;
    }
    if let Some(limit) = args.limit {
        cfg.limit = limit;
    }
    if let Some(refresh) = args.refresh {
        cfg.refresh = refresh;
    }
    if let Some(units) = args.units {
        cfg.units = units;
    }

    // Handle export mode (non-interactive)
    if let Some(ref export_path) = args.export {
        return export_to_file(&cfg, export_path);
    }

    // Offline mode: replay a captured payload file
    if let Some(ref path) = args.file {
        return run_with_file(path, &cfg);
    }

    run_with_node(&cfg)
}

/// Run with a file-based data source
fn run_with_file(path: &Path, cfg: &AppConfig) -> Result<()> {
    let source = Box::new(FileSource::new(path));
    run_tui(source, cfg, Duration::from_secs(cfg.refresh))
}

/// Run against a live node, polling its measurement API
fn run_with_node(cfg: &AppConfig) -> Result<()> {
    // The fetch loop lives on this runtime; it must outlive the TUI
    let rt = tokio::runtime::Runtime::new()?;

    let client = NodeClient::builder().endpoint(cfg.endpoint.as_str()).build();

    let source = {
        let _guard = rt.enter();
        HttpSource::spawn(
            client,
            cfg.channel,
            Some(cfg.limit),
            Duration::from_secs(cfg.refresh),
        )
    };

    // The background task fetches on its own schedule; the UI just has to
    // pick up completed payloads promptly
    run_tui(Box::new(source), cfg, Duration::from_millis(250))
}

/// Run the TUI with the given data source
fn run_tui(source: Box<dyn DataSource>, cfg: &AppConfig, poll_interval: Duration) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Setup panic hook to restore terminal
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic);
    }));

    // Create app and load initial data
    let mut app = App::new(source, cfg.channel, cfg.units);
    let _ = app.reload_data();

    // Run the main loop
    let result = run_app(&mut terminal, &mut app, poll_interval);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    poll_interval: Duration,
) -> Result<()> {
    let mut last_poll = Instant::now();

    // Minimum terminal size for a readable chart
    const MIN_WIDTH: u16 = 60;
    const MIN_HEIGHT: u16 = 12;

    while app.running {
        // Draw UI
        terminal.draw(|frame| {
            let area = frame.area();

            // Check for minimum terminal size
            if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
                let msg = format!(
                    "Terminal too small: {}x{}\nMinimum: {}x{}\n\nResize to continue",
                    area.width, area.height, MIN_WIDTH, MIN_HEIGHT
                );
                let paragraph = ratatui::widgets::Paragraph::new(msg)
                    .alignment(ratatui::layout::Alignment::Center)
                    .style(ratatui::style::Style::default().fg(ratatui::style::Color::Yellow));
                let centered = ratatui::layout::Rect::new(
                    0,
                    (area.height / 2).saturating_sub(2),
                    area.width,
                    5.min(area.height),
                );
                frame.render_widget(paragraph, centered);
                return;
            }

            let chunks = Layout::vertical([
                Constraint::Length(1), // Header bar
                Constraint::Length(1), // Tabs
                Constraint::Min(8),    // Chart
                Constraint::Length(1), // Status bar
            ])
            .split(area);

            ui::common::render_header(frame, app, chunks[0]);
            ui::common::render_tabs(frame, app, chunks[1]);

            match app.current_view {
                View::Frames => ui::frames::render(frame, app, chunks[2]),
                View::Stations => ui::stations::render(frame, app, chunks[2]),
            }

            ui::common::render_status_bar(frame, app, chunks[3]);

            // Render detail overlay if active
            if app.show_detail_overlay {
                ui::detail::render_overlay(frame, app, area);
            }

            // Render help overlay if active
            if app.show_help {
                ui::common::render_help(frame, app, area);
            }
        })?;

        // Poll for events with a short timeout
        if let Some(event) = events::poll_event(Duration::from_millis(100))? {
            match event {
                Event::Key(key) => events::handle_key_event(app, key),
                Event::Mouse(mouse) => {
                    // Tabs are rendered on the second row
                    events::handle_mouse_event(app, mouse, 1);
                }
                Event::Resize(_, _) => {
                    // Terminal will redraw on next iteration
                }
                _ => {}
            }
        }

        // Pick up new data periodically
        if last_poll.elapsed() >= poll_interval {
            let _ = app.reload_data();
            last_poll = Instant::now();
        }
    }

    Ok(())
}

/// Fetch the latest payload once and write the chart specs to a JSON file
fn export_to_file(cfg: &AppConfig, export_path: &Path) -> Result<()> {
    use std::io::Write;

    // Headless mode, so logging can go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let rt = tokio::runtime::Runtime::new()?;
    let client = NodeClient::builder().endpoint(cfg.endpoint.as_str()).build();
    let payload = rt.block_on(client.latest_channel_data(cfg.channel, Some(cfg.limit)))?;

    let frame_chart = data::build_frame_count_series(&payload.data, cfg.units)?;
    let station_chart = data::build_station_count_series(&payload.station_count_data);

    let export = serde_json::json!({
        "channel": cfg.channel,
        "units": cfg.units,
        "frameChart": frame_chart,
        "stationChart": station_chart,
    });

    let json = serde_json::to_string_pretty(&export)?;
    let mut file = std::fs::File::create(export_path)?;
    file.write_all(json.as_bytes())?;

    println!(
        "Exported channel {} chart data to: {}",
        cfg.channel,
        export_path.display()
    );
    Ok(())
}
