//! Application state and navigation logic.

use std::time::Instant;

use anyhow::Result;

use airwatch_types::{ChannelDataPayload, MeasurementRecord};

use crate::data::{build_frame_count_series, build_station_count_series, ChartSpec, Units};
use crate::source::DataSource;
use crate::ui::Theme;

/// The current view/tab in the TUI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    /// Line chart of the three frame count series.
    Frames,
    /// Line chart of distinct stations seen per interval.
    Stations,
}

impl View {
    /// Cycle to the next view.
    pub fn next(self) -> Self {
        match self {
            View::Frames => View::Stations,
            View::Stations => View::Frames,
        }
    }

    /// Cycle to the previous view.
    pub fn prev(self) -> Self {
        // Two views, so prev == next
        self.next()
    }

    /// Returns the display label for this view.
    pub fn label(&self) -> &'static str {
        match self {
            View::Frames => "Frames",
            View::Stations => "Stations",
        }
    }
}

/// Main application state.
pub struct App {
    pub running: bool,
    pub current_view: View,
    pub show_help: bool,
    pub show_detail_overlay: bool,

    // Data source
    source: Box<dyn DataSource>,
    pub payload: Option<ChannelDataPayload>,
    pub last_updated: Option<Instant>,
    pub load_error: Option<String>,

    // Derived charts, rebuilt on every payload and units change
    pub units: Units,
    pub frame_chart: Option<ChartSpec>,
    pub station_chart: Option<ChartSpec>,
    pub chart_error: Option<String>,

    // Display
    pub channel: u32,
    pub theme: Theme,
    pub status_message: Option<(String, Instant)>,
}

impl App {
    /// Create a new App with the given data source.
    pub fn new(source: Box<dyn DataSource>, channel: u32, units: Units) -> Self {
        Self {
            running: true,
            current_view: View::Frames,
            show_help: false,
            show_detail_overlay: false,
            source,
            payload: None,
            last_updated: None,
            load_error: None,
            units,
            frame_chart: None,
            station_chart: None,
            chart_error: None,
            channel,
            theme: Theme::auto_detect(),
            status_message: None,
        }
    }

    /// Returns a description of the current data source.
    pub fn source_description(&self) -> &str {
        self.source.description()
    }

    /// Set a temporary status message that will be shown for a few seconds.
    pub fn set_status_message(&mut self, message: String) {
        self.status_message = Some((message, Instant::now()));
    }

    /// Get the current status message if it hasn't expired (3 seconds).
    pub fn get_status_message(&self) -> Option<&str> {
        if let Some((msg, time)) = &self.status_message {
            if time.elapsed() < std::time::Duration::from_secs(3) {
                return Some(msg);
            }
        }
        None
    }

    /// Poll the data source for new data.
    ///
    /// Returns Ok(true) if a new payload was received and the charts were
    /// rebuilt, Ok(false) if no new data.
    pub fn reload_data(&mut self) -> Result<bool> {
        if let Some(payload) = self.source.poll() {
            self.payload = Some(payload);
            self.last_updated = Some(Instant::now());
            self.load_error = None;
            self.rebuild_charts();
            Ok(true)
        } else {
            // No new data; surface (or clear) the source's fetch error
            self.load_error = self.source.error();
            Ok(false)
        }
    }

    /// Rebuild both charts from the current payload.
    ///
    /// Specs are constructed fresh each time and the previous ones
    /// discarded. A degenerate duration fails only the frame chart; the
    /// failure is surfaced in the status bar instead of plotting
    /// non-finite values.
    fn rebuild_charts(&mut self) {
        let Some(ref payload) = self.payload else {
            self.frame_chart = None;
            self.station_chart = None;
            return;
        };

        match build_frame_count_series(&payload.data, self.units) {
            Ok(spec) => {
                self.frame_chart = Some(spec);
                self.chart_error = None;
            }
            Err(e) => {
                self.frame_chart = None;
                self.chart_error = Some(e.to_string());
            }
        }

        self.station_chart = Some(build_station_count_series(&payload.station_count_data));
    }

    /// Toggle between raw and per-second units and rebuild.
    pub fn toggle_units(&mut self) {
        self.units = self.units.toggle();
        self.rebuild_charts();
        self.set_status_message(format!("Units: {}", self.units.label()));
    }

    /// Switch to the next view.
    pub fn next_view(&mut self) {
        self.current_view = self.current_view.next();
    }

    /// Switch to the previous view.
    pub fn prev_view(&mut self) {
        self.current_view = self.current_view.prev();
    }

    /// Switch to a specific view.
    pub fn set_view(&mut self, view: View) {
        self.current_view = view;
    }

    /// The most recent measurement record, if any.
    pub fn latest_measurement(&self) -> Option<&MeasurementRecord> {
        self.payload.as_ref().and_then(|p| p.data.last())
    }

    /// Open the detail overlay for the latest measurement.
    pub fn enter_detail(&mut self) {
        if self.latest_measurement().is_some() {
            self.show_detail_overlay = true;
        }
    }

    /// Navigate back: close overlays first, then fall back to Frames.
    pub fn go_back(&mut self) {
        if self.show_detail_overlay {
            self.show_detail_overlay = false;
            return;
        }
        if self.current_view != View::Frames {
            self.current_view = View::Frames;
        }
    }

    /// Close the detail overlay if open.
    pub fn close_overlay(&mut self) {
        self.show_detail_overlay = false;
    }

    /// Toggle the help overlay.
    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    /// Signal the application to quit.
    pub fn quit(&mut self) {
        self.running = false;
    }

    /// Export the current chart specs to a JSON file.
    ///
    /// Writes the same chart-configuration objects the renderer consumes:
    /// kind, labels, and datasets with name, values, color, and fill flag.
    pub fn export_charts(&self, path: &std::path::Path) -> Result<()> {
        use std::io::Write;

        if self.payload.is_none() {
            anyhow::bail!("No data to export");
        }

        let export = serde_json::json!({
            "channel": self.channel,
            "units": self.units,
            "frameChart": self.frame_chart,
            "stationChart": self.station_chart,
        });

        let json = serde_json::to_string_pretty(&export)?;
        let mut file = std::fs::File::create(path)?;
        file.write_all(json.as_bytes())?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::ChannelSource;
    use airwatch_types::{FrameCounts, StationCountRecord};

    fn sample_payload() -> ChannelDataPayload {
        ChannelDataPayload {
            data: vec![MeasurementRecord {
                measurement_id: 1,
                measurement_start_time: 1_000_000,
                measurement_end_time: 1_000_010,
                measurement_duration: 10.0,
                channel: 6,
                frame_counts: FrameCounts::new(50, 20, 5),
            }],
            station_count_data: vec![StationCountRecord {
                measurement_id: 1,
                measurement_start_time: 1_000_000,
                measurement_end_time: 1_000_010,
                measurement_duration: 10.0,
                station_count: 3,
            }],
        }
    }

    #[test]
    fn test_reload_rebuilds_charts() {
        let (tx, source) = ChannelSource::create("test");
        let mut app = App::new(Box::new(source), 6, Units::Raw);

        // First poll delivers the initial empty payload
        assert!(app.reload_data().unwrap());
        assert!(app.frame_chart.as_ref().unwrap().is_empty());

        tx.send(sample_payload()).unwrap();
        assert!(app.reload_data().unwrap());

        let frames = app.frame_chart.as_ref().unwrap();
        assert_eq!(frames.len(), 1);
        assert_eq!(frames.datasets[0].data, vec![50.0]);

        let stations = app.station_chart.as_ref().unwrap();
        assert_eq!(stations.datasets[0].data, vec![3.0]);
    }

    #[test]
    fn test_toggle_units_rebuilds() {
        let (tx, source) = ChannelSource::create("test");
        let mut app = App::new(Box::new(source), 6, Units::Raw);
        let _ = app.reload_data();
        tx.send(sample_payload()).unwrap();
        let _ = app.reload_data();

        app.toggle_units();
        assert_eq!(app.units, Units::PerSecond);
        let frames = app.frame_chart.as_ref().unwrap();
        assert_eq!(frames.datasets[0].data, vec![5.0]);
        assert_eq!(frames.datasets[2].data, vec![0.5]);
    }

    #[test]
    fn test_degenerate_duration_sets_chart_error() {
        let (tx, source) = ChannelSource::create("test");
        let mut app = App::new(Box::new(source), 6, Units::PerSecond);
        let _ = app.reload_data();

        let mut payload = sample_payload();
        payload.data[0].measurement_duration = 0.0;
        tx.send(payload).unwrap();
        let _ = app.reload_data();

        assert!(app.frame_chart.is_none());
        assert!(app.chart_error.as_ref().unwrap().contains("duration"));
        // Station chart is unaffected by the bad duration
        assert!(app.station_chart.is_some());
    }

    #[test]
    fn test_view_cycling() {
        assert_eq!(View::Frames.next(), View::Stations);
        assert_eq!(View::Stations.next(), View::Frames);
        assert_eq!(View::Frames.prev(), View::Stations);
    }
}
