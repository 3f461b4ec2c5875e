pub mod data_point;
pub mod memory;
pub mod traits;

pub use data_point::{DataPoint, DataPointUpdate, UpdateSource};
pub use memory::MemoryDataPointStore;
pub use traits::{DataPointError, DataPointStore};
