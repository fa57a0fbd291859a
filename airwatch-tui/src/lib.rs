// Library crate: public API items may not be used by the binary
#![allow(unused)]

//! # airwatch-tui
//!
//! A diagnostic TUI and library for charting wireless channel measurements
//! from a survey node.
//!
//! The node publishes per-channel measurement data (frame counts by type,
//! station counts) as JSON over HTTP. This crate fetches those payloads,
//! shapes them into chart-ready series, and renders them as line charts in
//! the terminal.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        Application                          │
//! │  ┌─────────┐    ┌──────────┐    ┌─────────┐    ┌─────────┐ │
//! │  │  app    │───▶│   data   │───▶│   ui    │───▶│ Terminal│ │
//! │  │ (state) │    │ (series) │    │(rendering)   │         │ │
//! │  └────┬────┘    └──────────┘    └─────────┘    └─────────┘ │
//! │       │                                                     │
//! │       ▼                                                     │
//! │  ┌─────────┐                                                │
//! │  │ source  │◀── HttpSource | FileSource | ChannelSource    │
//! │  │ (input) │                                                │
//! │  └─────────┘                                                │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! - **[`app`]**: Application state, view navigation, and chart rebuilding
//! - **[`source`]**: Data source abstraction ([`DataSource`] trait) with
//!   implementations for node HTTP polling, file polling, and channel input
//! - **[`data`]**: The series transforms - converts raw payloads into
//!   [`ChartSpec`] values (labels plus aligned value series)
//! - **[`ui`]**: Terminal rendering using ratatui - line charts, detail
//!   overlay, and theme support
//!
//! ## Usage
//!
//! ### As a CLI tool
//!
//! ```bash
//! # Watch channel 6 on a node
//! airwatch --endpoint http://node.local:8080 --channel 6
//!
//! # View a captured payload offline
//! airwatch --file payload.json
//! ```
//!
//! ### As a library with a file source
//!
//! ```
//! use airwatch_tui::{App, FileSource, Units};
//!
//! let source = Box::new(FileSource::new("payload.json"));
//! let app = App::new(source, 6, Units::Raw);
//! ```
//!
//! ### As a library with a channel source
//!
//! ```
//! use airwatch_tui::{App, ChannelSource, Units};
//!
//! // Create a channel for pushing payloads
//! let (tx, source) = ChannelSource::create("collector");
//! let app = App::new(Box::new(source), 6, Units::PerSecond);
//! ```

pub mod app;
pub mod config;
pub mod data;
pub mod events;
pub mod source;
pub mod ui;

// Re-export main types for convenience
pub use app::{App, View};
pub use config::AppConfig;
pub use data::{
    build_frame_count_series, build_station_count_series, format_time_label, ChartSpec, Series,
    SeriesError, Units,
};
pub use source::{ChannelSource, DataSource, FileSource, HttpSource};
