/// Tuya datapoint value types as carried in the BLE datapoint frames.
///
/// Unknown wire codes are kept in [`Unknown`](Self::Unknown) so a device
/// reporting a newer type does not fail decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DataPointType {
    Raw,
    Bool,
    Value,
    String,
    Enum,
    Bitmap,
    Unknown(u8),
}

impl DataPointType {
    /// Converts this type to its wire code.
    pub const fn to_u8(self) -> u8 {
        match self {
            Self::Raw => 0,
            Self::Bool => 1,
            Self::Value => 2,
            Self::String => 3,
            Self::Enum => 4,
            Self::Bitmap => 5,
            Self::Unknown(v) => v,
        }
    }

    /// Creates a `DataPointType` from its wire code.
    pub const fn from_u8(value: u8) -> Self {
        match value {
            0 => Self::Raw,
            1 => Self::Bool,
            2 => Self::Value,
            3 => Self::String,
            4 => Self::Enum,
            5 => Self::Bitmap,
            v => Self::Unknown(v),
        }
    }
}
