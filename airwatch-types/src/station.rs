//! Station count records.

/// Number of distinct stations seen during one measurement interval.
///
/// Produced by the node's device-count query, which joins measurements
/// against the stations observed in each interval. Shares the interval
/// fields with [`MeasurementRecord`](crate::MeasurementRecord) but carries
/// a single counter instead of per-type frame counts.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct StationCountRecord {
    /// Node-assigned row identifier of the underlying measurement.
    #[cfg_attr(feature = "serde", serde(rename = "measurementID"))]
    pub measurement_id: i64,

    /// Interval start, seconds since the Unix epoch (UTC).
    pub measurement_start_time: i64,

    /// Interval end, seconds since the Unix epoch (UTC).
    pub measurement_end_time: i64,

    /// Interval length in seconds.
    pub measurement_duration: f64,

    /// Distinct stations observed during the interval.
    pub station_count: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialize_station_count() {
        let json = r#"{
            "measurementID": 9,
            "measurementStartTime": 1000000,
            "measurementEndTime": 1000030,
            "measurementDuration": 30.0,
            "stationCount": 12
        }"#;

        let record: StationCountRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.measurement_id, 9);
        assert_eq!(record.station_count, 12);
        assert_eq!(record.measurement_duration, 30.0);
    }
}
