//! # airwatch-types
//!
//! Core types for wireless channel survey data. This crate defines the wire
//! schema a survey node uses to publish per-channel measurement data, and the
//! record types consumed by airwatch and other viewers.
//!
//! ## Design Goals
//!
//! - **Zero required dependencies**: the record types work without any
//!   serialization framework
//! - **Optional serialization**: enable the `serde` feature to (de)serialize
//!   the node's camelCase JSON envelope
//! - **Faithful to the wire**: field names and nesting match the node API
//!   response exactly, so a deserialized record is the record as published
//!
//! ## Features
//!
//! - `serde`: JSON serialization via serde
//!
//! ## Example
//!
//! ```rust
//! use airwatch_types::{FrameCounts, MeasurementRecord};
//!
//! let record = MeasurementRecord {
//!     measurement_id: 1,
//!     measurement_start_time: 1_000_000,
//!     measurement_end_time: 1_000_010,
//!     measurement_duration: 10.0,
//!     channel: 6,
//!     frame_counts: FrameCounts {
//!         management_frame_count: 50,
//!         data_frame_count: 20,
//!         control_frame_count: 5,
//!     },
//! };
//!
//! assert_eq!(record.frame_counts.total(), 75);
//! assert!(record.has_valid_duration());
//! ```

mod measurement;
mod payload;
mod station;

pub use measurement::*;
pub use payload::*;
pub use station::*;

/// Version segment of the node API path (`/api/1.0/...`).
///
/// Bump this when the node changes its envelope in an incompatible way.
/// Clients embed it when building request URLs.
pub const API_VERSION: &str = "1.0";
