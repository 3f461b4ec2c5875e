pub mod device;
pub mod entity;
pub mod error;
pub mod number;
pub mod setup;
pub mod storage;
pub mod virtual_number;

pub use device::{DeviceHandle, DeviceInfo};
pub use entity::{NumberEntity, PendingWrite};
pub use error::StorageError;
pub use number::DataPointNumber;
pub use setup::setup_numbers;
pub use storage::{JsonFileStore, MemoryStateStore, StateStore, VirtualNumberRecord};
pub use virtual_number::{RestoreState, VirtualNumber};
