pub mod availability;
pub mod description;
pub mod mapping;
pub mod program;

pub use availability::Availability;
pub use description::NumberDescription;
pub use mapping::{
    scale_from_raw, scale_to_raw, DataPointWrite, NumberDescriptor, NumberMapping,
    ValueAccessor, VirtualNumberMapping, WriteChange,
};
pub use program::ProgramField;
