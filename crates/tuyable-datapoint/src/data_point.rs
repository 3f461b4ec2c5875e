use tuyable_core::types::{DataPointId, DataPointType, DataPointValue};

/// Snapshot of one datapoint.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DataPoint {
    pub id: DataPointId,
    pub dp_type: DataPointType,
    pub value: DataPointValue,
}

impl DataPoint {
    /// Creates a datapoint typed after its value.
    pub fn new(id: DataPointId, value: DataPointValue) -> Self {
        Self {
            id,
            dp_type: value.data_point_type(),
            value,
        }
    }
}

/// Origin of a [`DataPointUpdate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UpdateSource {
    /// Reported by the device.
    Device,
    /// Applied by a local write.
    Write,
}

/// Notification emitted whenever a datapoint value changes.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DataPointUpdate {
    pub data_point: DataPoint,
    pub source: UpdateSource,
}
