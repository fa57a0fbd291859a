//! The node API response envelope.

use crate::{MeasurementRecord, StationCountRecord};

/// Response body of `GET /api/{version}/channel/{n}/latest`.
///
/// `data` holds the latest measurements for the channel in chronological
/// order as returned by the node. `stationCountData` is only present on
/// nodes that expose the device-count query; older nodes omit the key,
/// which deserializes as an empty list.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ChannelDataPayload {
    /// Ordered measurement records, oldest first.
    pub data: Vec<MeasurementRecord>,

    /// Ordered station count records, oldest first. Empty when the node
    /// does not publish station counts.
    #[cfg_attr(feature = "serde", serde(default))]
    pub station_count_data: Vec<StationCountRecord>,
}

impl ChannelDataPayload {
    /// Whether the payload carries no records at all.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty() && self.station_count_data.is_empty()
    }
}
