//! Datapoint-to-number translation for Tuya BLE devices.
//!
//! `tuyable-core` holds everything that does not need a runtime: datapoint
//! types, the product capability catalog, number descriptors with their
//! availability and accessor strategies, and the read-only registry that maps
//! a device's category and product id to the numeric controls it exposes.
//!
//! # Feature flags
//!
//! - **`serde`**: derives `Serialize` on descriptors and `Serialize`/`Deserialize`
//!   on datapoint and device types.

/// Error types for registry construction and packed payload handling.
pub mod error;
/// Number descriptors, availability predicates, and composite accessors.
pub mod number;
/// Product capability catalog (fingerbot datapoint layouts and display names).
pub mod products;
/// Category/product to descriptor lookup, including the built-in device table.
pub mod registry;
/// Core data types: datapoint ids, types and values, device identity, entity metadata.
pub mod types;

pub use error::{PayloadError, RegistryError};
pub use number::{
    Availability, DataPointWrite, NumberDescription, NumberDescriptor, NumberMapping,
    ProgramField, ValueAccessor, VirtualNumberMapping, WriteChange,
};
pub use products::{product_info, FingerbotInfo, ProductInfo};
pub use registry::{registry, NumberRegistry, RegistryBuilder};
pub use types::{DataPointId, DataPointType, DataPointValue, DataPointView, DeviceIdentity};
