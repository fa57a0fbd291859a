//! Data shaping for measurement payloads.
//!
//! This module converts raw records fetched from a node into chart-ready
//! series for the UI.
//!
//! ## Data Flow
//!
//! ```text
//! ChannelDataPayload (raw JSON from a source)
//!        │
//!        ├──▶ build_frame_count_series()   (three series, raw or per-second)
//!        │
//!        └──▶ build_station_count_series() (one series)
//!                      │
//!                      ▼
//!                  ChartSpec (labels + datasets, handed to the renderer)
//! ```

pub mod series;

pub use series::{
    build_frame_count_series, build_station_count_series, format_time_label, ChartKind, ChartSpec,
    Series, SeriesError, Units,
};
