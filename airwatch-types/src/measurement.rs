//! Per-interval channel measurement records.

/// Frame counts observed during one measurement interval, split by
/// 802.11 frame type.
///
/// On the wire these appear as three top-level camelCase keys of the
/// measurement object, so the struct is flattened into
/// [`MeasurementRecord`] when serialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct FrameCounts {
    /// Number of management frames (beacons, probes, auth, ...) seen.
    pub management_frame_count: u64,

    /// Number of data frames seen.
    pub data_frame_count: u64,

    /// Number of control frames (RTS/CTS, ACK, ...) seen.
    pub control_frame_count: u64,
}

impl FrameCounts {
    /// Create frame counts from the three per-type counters.
    pub fn new(management: u64, data: u64, control: u64) -> Self {
        Self {
            management_frame_count: management,
            data_frame_count: data,
            control_frame_count: control,
        }
    }

    /// Total frames of all types.
    pub fn total(&self) -> u64 {
        self.management_frame_count + self.data_frame_count + self.control_frame_count
    }
}

/// One channel measurement sample as published by a survey node.
///
/// A node measures a channel for `measurement_duration` seconds starting at
/// `measurement_start_time` and records what it saw. Records are immutable
/// once received; the viewer never rewrites or re-sorts them.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct MeasurementRecord {
    /// Node-assigned row identifier.
    #[cfg_attr(feature = "serde", serde(rename = "measurementID"))]
    pub measurement_id: i64,

    /// Interval start, seconds since the Unix epoch (UTC).
    pub measurement_start_time: i64,

    /// Interval end, seconds since the Unix epoch (UTC).
    pub measurement_end_time: i64,

    /// Interval length in seconds. Positive for well-formed records.
    pub measurement_duration: f64,

    /// 802.11 channel number the node was tuned to.
    pub channel: u32,

    /// Frame counts for the interval, flattened into the record on the wire.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub frame_counts: FrameCounts,
}

impl MeasurementRecord {
    /// Whether the duration can be used as a rate divisor.
    ///
    /// A zero, negative, or non-finite duration makes per-second values
    /// meaningless; callers must check before dividing.
    pub fn has_valid_duration(&self) -> bool {
        self.measurement_duration.is_finite() && self.measurement_duration > 0.0
    }
}
