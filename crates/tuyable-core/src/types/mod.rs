pub mod data_point_type;
pub mod data_point_value;
pub mod device;
pub mod entity;

pub use data_point_type::DataPointType;
pub use data_point_value::{DataPointValue, DataPointView};
pub use device::DeviceIdentity;
pub use entity::{units, EntityCategory, NumberDeviceClass, NumberMode};

/// Identifier of a datapoint on a Tuya device.
pub type DataPointId = u8;
