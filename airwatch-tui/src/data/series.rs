//! Chart series construction.
//!
//! Pure transforms from measurement records to a [`ChartSpec`]: a label
//! axis of local time-of-day strings plus one or more named value series
//! aligned index-for-index with the labels. The transforms do no I/O and
//! hold no state; a fresh spec is built for every payload.

use airwatch_types::{FrameCounts, MeasurementRecord, StationCountRecord};
use chrono::{Local, TimeZone, Timelike};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Line color for the management frame series.
pub const MANAGEMENT_COLOR: &str = "#ff6d6d";
/// Line color for the data frame series.
pub const DATA_COLOR: &str = "#6470ef";
/// Line color for the control frame series.
pub const CONTROL_COLOR: &str = "#64ef87";
/// Line color for the station count series.
pub const STATION_COLOR: &str = "#efb964";

/// Value units for the frame count series.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum Units {
    /// Counts exactly as reported by the node.
    #[default]
    Raw,
    /// Counts divided by the measurement duration.
    PerSecond,
}

impl Units {
    /// Series display name for a base label under these units.
    pub fn series_name(&self, base: &str) -> String {
        match self {
            Units::Raw => base.to_string(),
            Units::PerSecond => format!("{} [Per Second]", base),
        }
    }

    /// Short label for the status bar.
    pub fn label(&self) -> &'static str {
        match self {
            Units::Raw => "raw",
            Units::PerSecond => "per-second",
        }
    }

    /// The other mode.
    pub fn toggle(self) -> Self {
        match self {
            Units::Raw => Units::PerSecond,
            Units::PerSecond => Units::Raw,
        }
    }
}

/// Errors surfaced by the series transforms.
#[derive(Debug, Error, PartialEq)]
pub enum SeriesError {
    /// A record's duration cannot be used as a rate divisor.
    #[error("measurement at index {index} has unusable duration {duration}")]
    DegenerateDuration { index: usize, duration: f64 },
}

/// Chart kind understood by the rendering collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Line,
}

/// One named value series aligned with the shared label axis.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Series {
    /// Display name shown in the legend.
    pub label: String,
    /// Values, one per axis label.
    pub data: Vec<f64>,
    /// Line color as a `#rrggbb` hex string.
    pub border_color: String,
    /// Whether the area under the line is filled.
    pub fill: bool,
}

/// A complete chart description: labels plus one or more series.
///
/// Transient by design: built fresh from each payload, handed to the
/// renderer (or serialized by `--export`), then discarded. The label
/// sequence and every series are always the same length.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartSpec {
    /// Chart kind, always line.
    #[serde(rename = "type")]
    pub kind: ChartKind,
    /// Axis labels, one per source record.
    pub labels: Vec<String>,
    /// Value series, each aligned with `labels`.
    pub datasets: Vec<Series>,
}

impl ChartSpec {
    /// Number of points along the label axis.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Whether the chart has no points.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Smallest and largest value across all series.
    ///
    /// Returns `None` for an empty chart.
    pub fn value_bounds(&self) -> Option<(f64, f64)> {
        let mut bounds: Option<(f64, f64)> = None;
        for series in &self.datasets {
            for &v in &series.data {
                bounds = Some(match bounds {
                    None => (v, v),
                    Some((lo, hi)) => (lo.min(v), hi.max(v)),
                });
            }
        }
        bounds
    }
}

/// Format an epoch timestamp as a local time-of-day label.
///
/// Matches the node dashboard convention: `H:M:S` with no zero-padding.
/// Presentation only; consumers must not parse it back. Out-of-range
/// timestamps yield a placeholder.
pub fn format_time_label(epoch_seconds: i64) -> String {
    match Local.timestamp_opt(epoch_seconds, 0).single() {
        Some(t) => format!("{}:{}:{}", t.hour(), t.minute(), t.second()),
        None => "-".to_string(),
    }
}

// Static description of the three frame count series: which counter feeds
// each series, and how it is labeled and colored.
struct FrameSeriesSpec {
    base_label: &'static str,
    color: &'static str,
    count: fn(&FrameCounts) -> u64,
}

fn management_count(c: &FrameCounts) -> u64 {
    c.management_frame_count
}

fn data_count(c: &FrameCounts) -> u64 {
    c.data_frame_count
}

fn control_count(c: &FrameCounts) -> u64 {
    c.control_frame_count
}

const FRAME_SERIES: &[FrameSeriesSpec] = &[
    FrameSeriesSpec {
        base_label: "Management Frame Count",
        color: MANAGEMENT_COLOR,
        count: management_count,
    },
    FrameSeriesSpec {
        base_label: "Data Frame Count",
        color: DATA_COLOR,
        count: data_count,
    },
    FrameSeriesSpec {
        base_label: "Control Frame Count",
        color: CONTROL_COLOR,
        count: control_count,
    },
];

/// Build the three frame count series from measurement records.
///
/// Records are taken in the order given; no re-sorting or deduplication.
/// Under [`Units::PerSecond`] every record must have a usable duration:
/// the first record that does not fails the whole transform with
/// [`SeriesError::DegenerateDuration`] rather than emitting a non-finite
/// value.
pub fn build_frame_count_series(
    records: &[MeasurementRecord],
    units: Units,
) -> Result<ChartSpec, SeriesError> {
    if units == Units::PerSecond {
        if let Some((index, r)) = records
            .iter()
            .enumerate()
            .find(|(_, r)| !r.has_valid_duration())
        {
            return Err(SeriesError::DegenerateDuration {
                index,
                duration: r.measurement_duration,
            });
        }
    }

    let labels = records
        .iter()
        .map(|r| format_time_label(r.measurement_start_time))
        .collect();

    let datasets = FRAME_SERIES
        .iter()
        .map(|spec| Series {
            label: units.series_name(spec.base_label),
            data: records
                .iter()
                .map(|r| {
                    let count = (spec.count)(&r.frame_counts) as f64;
                    match units {
                        Units::Raw => count,
                        Units::PerSecond => count / r.measurement_duration,
                    }
                })
                .collect(),
            border_color: spec.color.to_string(),
            fill: false,
        })
        .collect();

    Ok(ChartSpec {
        kind: ChartKind::Line,
        labels,
        datasets,
    })
}

/// Build the station count series from station count records.
///
/// Always a single raw-count series; station counts are not rated.
pub fn build_station_count_series(records: &[StationCountRecord]) -> ChartSpec {
    let labels = records
        .iter()
        .map(|r| format_time_label(r.measurement_start_time))
        .collect();

    let datasets = vec![Series {
        label: "Station Count".to_string(),
        data: records.iter().map(|r| r.station_count as f64).collect(),
        border_color: STATION_COLOR.to_string(),
        fill: false,
    }];

    ChartSpec {
        kind: ChartKind::Line,
        labels,
        datasets,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(start: i64, duration: f64, mgmt: u64, data: u64, ctrl: u64) -> MeasurementRecord {
        MeasurementRecord {
            measurement_id: start,
            measurement_start_time: start,
            measurement_end_time: start + duration as i64,
            measurement_duration: duration,
            channel: 6,
            frame_counts: FrameCounts::new(mgmt, data, ctrl),
        }
    }

    #[test]
    fn test_label_and_series_lengths_match_input() {
        let records = vec![
            record(1000, 10.0, 1, 2, 3),
            record(1010, 10.0, 4, 5, 6),
            record(1020, 10.0, 7, 8, 9),
        ];

        let spec = build_frame_count_series(&records, Units::Raw).unwrap();
        assert_eq!(spec.labels.len(), records.len());
        assert_eq!(spec.datasets.len(), 3);
        for series in &spec.datasets {
            assert_eq!(series.data.len(), records.len());
        }
    }

    #[test]
    fn test_empty_input_yields_empty_chart() {
        let spec = build_frame_count_series(&[], Units::PerSecond).unwrap();
        assert!(spec.is_empty());
        assert_eq!(spec.datasets.len(), 3);
        for series in &spec.datasets {
            assert!(series.data.is_empty());
        }

        let stations = build_station_count_series(&[]);
        assert!(stations.is_empty());
        assert_eq!(stations.datasets.len(), 1);
    }

    #[test]
    fn test_raw_values_are_identity_in_order() {
        let records = vec![record(1000, 10.0, 50, 20, 5), record(1010, 5.0, 3, 2, 1)];

        let spec = build_frame_count_series(&records, Units::Raw).unwrap();
        assert_eq!(spec.datasets[0].label, "Management Frame Count");
        assert_eq!(spec.datasets[0].data, vec![50.0, 3.0]);
        assert_eq!(spec.datasets[1].data, vec![20.0, 2.0]);
        assert_eq!(spec.datasets[2].data, vec![5.0, 1.0]);
    }

    #[test]
    fn test_per_second_values() {
        let records = vec![record(1_000_000, 10.0, 50, 20, 5)];

        let spec = build_frame_count_series(&records, Units::PerSecond).unwrap();
        assert_eq!(spec.datasets[0].label, "Management Frame Count [Per Second]");
        assert_eq!(spec.datasets[1].label, "Data Frame Count [Per Second]");
        assert_eq!(spec.datasets[2].label, "Control Frame Count [Per Second]");
        assert_eq!(spec.datasets[0].data, vec![5.0]);
        assert_eq!(spec.datasets[1].data, vec![2.0]);
        assert_eq!(spec.datasets[2].data, vec![0.5]);
    }

    #[test]
    fn test_degenerate_duration_is_surfaced() {
        let records = vec![record(1000, 10.0, 1, 1, 1), record(1010, 0.0, 2, 2, 2)];

        let err = build_frame_count_series(&records, Units::PerSecond).unwrap_err();
        assert_eq!(
            err,
            SeriesError::DegenerateDuration {
                index: 1,
                duration: 0.0
            }
        );
    }

    #[test]
    fn test_raw_units_ignore_degenerate_duration() {
        // No division happens in raw mode, so a zero duration is fine.
        let records = vec![record(1000, 0.0, 9, 9, 9)];

        let spec = build_frame_count_series(&records, Units::Raw).unwrap();
        assert_eq!(spec.datasets[0].data, vec![9.0]);
    }

    #[test]
    fn test_station_count_series() {
        let records = vec![
            StationCountRecord {
                measurement_id: 1,
                measurement_start_time: 1000,
                measurement_end_time: 1030,
                measurement_duration: 30.0,
                station_count: 12,
            },
            StationCountRecord {
                measurement_id: 2,
                measurement_start_time: 1030,
                measurement_end_time: 1060,
                measurement_duration: 30.0,
                station_count: 7,
            },
        ];

        let spec = build_station_count_series(&records);
        assert_eq!(spec.labels.len(), 2);
        assert_eq!(spec.datasets.len(), 1);
        assert_eq!(spec.datasets[0].label, "Station Count");
        assert_eq!(spec.datasets[0].data, vec![12.0, 7.0]);
        assert!(!spec.datasets[0].fill);
    }

    #[test]
    fn test_time_label_is_pure_and_matches_local_decomposition() {
        // 3661 = 1:01:01 UTC; the local rendering must agree with chrono's
        // own decomposition and be stable across calls.
        let expected = Local.timestamp_opt(3661, 0).single().unwrap();
        let label = format_time_label(3661);

        assert_eq!(
            label,
            format!(
                "{}:{}:{}",
                expected.hour(),
                expected.minute(),
                expected.second()
            )
        );
        assert_eq!(label, format_time_label(3661));
    }

    #[test]
    fn test_time_label_has_no_zero_padding() {
        // Any timestamp landing on an early minute/second must not be padded.
        let t = Local.timestamp_opt(3661, 0).single().unwrap();
        if t.minute() < 10 {
            let label = format_time_label(3661);
            let minute_part = label.split(':').nth(1).unwrap();
            assert_eq!(minute_part, t.minute().to_string());
        }
    }

    #[test]
    fn test_value_bounds() {
        let records = vec![record(1000, 10.0, 50, 20, 5), record(1010, 10.0, 80, 10, 0)];

        let spec = build_frame_count_series(&records, Units::Raw).unwrap();
        assert_eq!(spec.value_bounds(), Some((0.0, 80.0)));

        let empty = build_frame_count_series(&[], Units::Raw).unwrap();
        assert_eq!(empty.value_bounds(), None);
    }
}
