use crate::types::{DataPointId, DataPointType};
use std::collections::{BTreeMap, HashMap};

/// An owned datapoint value.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DataPointValue {
    Raw(Vec<u8>),
    Bool(bool),
    Value(i32),
    String(String),
    Enum(u32),
    Bitmap(u32),
}

impl DataPointValue {
    /// The datapoint type this value is carried as.
    pub const fn data_point_type(&self) -> DataPointType {
        match self {
            Self::Raw(_) => DataPointType::Raw,
            Self::Bool(_) => DataPointType::Bool,
            Self::Value(_) => DataPointType::Value,
            Self::String(_) => DataPointType::String,
            Self::Enum(_) => DataPointType::Enum,
            Self::Bitmap(_) => DataPointType::Bitmap,
        }
    }

    /// Integer view of numeric values. Booleans read as `0`/`1`.
    pub const fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Bool(v) => Some(*v as i64),
            Self::Value(v) => Some(*v as i64),
            Self::Enum(v) | Self::Bitmap(v) => Some(*v as i64),
            Self::Raw(_) | Self::String(_) => None,
        }
    }

    /// Byte view of raw values.
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Self::Raw(v) => Some(v),
            _ => None,
        }
    }
}

/// Read access to the current datapoint values of one device.
///
/// Predicates and accessors only ever need the latest value of a datapoint,
/// so this is the narrowest view a datapoint store has to provide.
pub trait DataPointView {
    /// Returns the current value of `id`, or `None` if the device has not
    /// reported it yet.
    fn data_point_value(&self, id: DataPointId) -> Option<DataPointValue>;
}

impl DataPointView for HashMap<DataPointId, DataPointValue> {
    fn data_point_value(&self, id: DataPointId) -> Option<DataPointValue> {
        self.get(&id).cloned()
    }
}

impl DataPointView for BTreeMap<DataPointId, DataPointValue> {
    fn data_point_value(&self, id: DataPointId) -> Option<DataPointValue> {
        self.get(&id).cloned()
    }
}
