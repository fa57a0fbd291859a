//! Data source abstraction for receiving channel payloads.
//!
//! This module provides a trait-based abstraction for receiving measurement
//! payloads from various backends (node HTTP polling, files, in-memory
//! channels).

mod channel;
mod file;
mod http;

pub use channel::ChannelSource;
pub use file::FileSource;
pub use http::HttpSource;

use std::fmt::Debug;

use airwatch_types::ChannelDataPayload;

/// Trait for receiving channel payloads from various sources.
///
/// # Example
///
/// ```
/// use airwatch_tui::{DataSource, FileSource};
///
/// let mut source = FileSource::new("payload.json");
/// if let Some(payload) = source.poll() {
///     println!("Got {} measurements", payload.data.len());
/// }
/// ```
pub trait DataSource: Send + Debug {
    /// Poll for the latest payload.
    ///
    /// Returns `Some(payload)` if new data is available, `None` otherwise.
    /// This method must be non-blocking; it is called once per UI frame.
    fn poll(&mut self) -> Option<ChannelDataPayload>;

    /// Returns a human-readable description of the source.
    ///
    /// Used for display in the TUI status bar.
    fn description(&self) -> &str;

    /// The error from the most recent poll or fetch, if any.
    fn error(&self) -> Option<String>;
}
