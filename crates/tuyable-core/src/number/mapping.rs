use crate::number::program::{self, ProgramField};
use crate::number::{Availability, NumberDescription};
use crate::products::ProductInfo;
use crate::types::{DataPointId, DataPointType, DataPointValue, DataPointView, NumberMode};

/// Converts a stored integer to the value shown to the user.
pub fn scale_from_raw(raw: i64, coefficient: f64) -> f64 {
    raw as f64 / coefficient
}

/// Converts a user value to the stored integer, rounding to the nearest step
/// of the fixed-point scale and saturating at the `i32` range.
pub fn scale_to_raw(value: f64, coefficient: f64) -> i32 {
    (value * coefficient).round() as i32
}

/// What a [`DataPointWrite`] puts into its datapoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteChange {
    /// Replace the value outright.
    Set(DataPointValue),
    /// Rewrite one field of the program payload current at write time.
    Program(ProgramField),
}

impl WriteChange {
    /// The value to store given the datapoint's `current` value, or `None`
    /// when a program field cannot be applied to it.
    pub fn apply(&self, current: &DataPointValue) -> Option<DataPointValue> {
        match self {
            Self::Set(value) => Some(value.clone()),
            Self::Program(field) => current
                .as_bytes()
                .and_then(|payload| field.apply(payload).ok())
                .map(DataPointValue::Raw),
        }
    }
}

/// A datapoint write produced by encoding a user value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataPointWrite {
    pub id: DataPointId,
    pub dp_type: DataPointType,
    pub change: WriteChange,
}

/// How a direct descriptor reads and writes its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum ValueAccessor {
    /// The descriptor's own datapoint, scaled by its coefficient.
    #[default]
    Scaled,
    /// Repeat count field of the product's fingerbot program datapoint.
    ProgramRepeatCount,
    /// Idle position field of the product's fingerbot program datapoint.
    ProgramIdlePosition,
}

impl ValueAccessor {
    /// Decodes the current value of `mapping`.
    ///
    /// The scaled accessor falls back to the descriptor minimum while the
    /// datapoint is missing. Program accessors yield `None` when the product
    /// has no program datapoint or its payload is not a long enough byte
    /// sequence.
    pub fn read<V>(
        self,
        mapping: &NumberMapping,
        data_points: &V,
        product: &ProductInfo,
    ) -> Option<f64>
    where
        V: DataPointView + ?Sized,
    {
        match self {
            Self::Scaled => match data_points.data_point_value(mapping.dp_id) {
                Some(value) => value
                    .as_integer()
                    .map(|raw| scale_from_raw(raw, mapping.coefficient)),
                None => Some(mapping.description.native_min_value),
            },
            Self::ProgramRepeatCount => program_payload(data_points, product)
                .and_then(|payload| program::repeat_count(&payload).ok())
                .map(f64::from),
            Self::ProgramIdlePosition => program_payload(data_points, product)
                .and_then(|payload| program::idle_position(&payload).ok())
                .map(f64::from),
        }
    }

    /// Encodes `value` into the datapoint write that applies it.
    ///
    /// Program accessors produce a field edit that the store applies to the
    /// payload it holds when the write lands, so concurrent edits of
    /// different fields do not overwrite each other. They return `None`
    /// when there is no payload to edit.
    pub fn encode<V>(
        self,
        mapping: &NumberMapping,
        data_points: &V,
        product: &ProductInfo,
        value: f64,
    ) -> Option<DataPointWrite>
    where
        V: DataPointView + ?Sized,
    {
        match self {
            Self::Scaled => Some(DataPointWrite {
                id: mapping.dp_id,
                dp_type: DataPointType::Value,
                change: WriteChange::Set(DataPointValue::Value(scale_to_raw(
                    value,
                    mapping.coefficient,
                ))),
            }),
            Self::ProgramRepeatCount => {
                let count = value
                    .round()
                    .clamp(0.0, f64::from(program::MAX_REPEAT_COUNT)) as u16;
                program_edit(data_points, product, ProgramField::RepeatCount(count))
            }
            Self::ProgramIdlePosition => {
                let position = value.round().clamp(0.0, f64::from(u8::MAX)) as u8;
                program_edit(data_points, product, ProgramField::IdlePosition(position))
            }
        }
    }
}

/// Checks the current payload can take `field` and wraps it as a write.
fn program_edit<V>(
    data_points: &V,
    product: &ProductInfo,
    field: ProgramField,
) -> Option<DataPointWrite>
where
    V: DataPointView + ?Sized,
{
    let id = product.fingerbot?.program?;
    let payload = program_payload(data_points, product)?;
    field.apply(&payload).ok()?;
    Some(DataPointWrite {
        id,
        dp_type: DataPointType::Raw,
        change: WriteChange::Program(field),
    })
}

fn program_payload<V>(data_points: &V, product: &ProductInfo) -> Option<Vec<u8>>
where
    V: DataPointView + ?Sized,
{
    let id = product.fingerbot?.program?;
    match data_points.data_point_value(id)? {
        DataPointValue::Raw(payload) => Some(payload),
        _ => None,
    }
}

/// A number control backed by a device datapoint.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct NumberMapping {
    /// Backing datapoint. Advisory only for program accessors, which address
    /// the product's program datapoint.
    pub dp_id: DataPointId,
    pub description: NumberDescription,
    /// Create the entity even if the device has not reported `dp_id`.
    pub force_add: bool,
    /// Only match a reported datapoint of this type when `force_add` is off.
    pub dp_type: Option<DataPointType>,
    pub coefficient: f64,
    pub availability: Availability,
    pub accessor: ValueAccessor,
    pub mode: NumberMode,
}

impl NumberMapping {
    pub const fn new(dp_id: DataPointId, description: NumberDescription) -> Self {
        Self {
            dp_id,
            description,
            force_add: true,
            dp_type: None,
            coefficient: 1.0,
            availability: Availability::Always,
            accessor: ValueAccessor::Scaled,
            mode: NumberMode::Box,
        }
    }

    /// Fingerbot hold time, only shown in push mode.
    pub const fn hold_time(dp_id: DataPointId) -> Self {
        Self::new(dp_id, NumberDescription::hold_time())
            .availability(Availability::FingerbotInPushMode)
    }

    pub const fn force_add(mut self, force_add: bool) -> Self {
        self.force_add = force_add;
        self
    }

    pub const fn dp_type(mut self, dp_type: DataPointType) -> Self {
        self.dp_type = Some(dp_type);
        self
    }

    pub const fn coefficient(mut self, coefficient: f64) -> Self {
        self.coefficient = coefficient;
        self
    }

    pub const fn availability(mut self, availability: Availability) -> Self {
        self.availability = availability;
        self
    }

    pub const fn accessor(mut self, accessor: ValueAccessor) -> Self {
        self.accessor = accessor;
        self
    }

    pub const fn mode(mut self, mode: NumberMode) -> Self {
        self.mode = mode;
        self
    }
}

/// Default value of a virtual number when nothing was persisted.
pub const DEFAULT_VIRTUAL_VALUE: f64 = 3600.0;

/// A number control with no datapoint, persisted on the host.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct VirtualNumberMapping {
    pub description: NumberDescription,
    pub force_add: bool,
    pub availability: Availability,
    pub mode: NumberMode,
    pub default_value: f64,
}

impl VirtualNumberMapping {
    pub const fn new(description: NumberDescription) -> Self {
        Self {
            description,
            force_add: true,
            availability: Availability::Always,
            mode: NumberMode::Box,
            default_value: DEFAULT_VIRTUAL_VALUE,
        }
    }

    pub const fn default_value(mut self, value: f64) -> Self {
        self.default_value = value;
        self
    }

    pub const fn availability(mut self, availability: Availability) -> Self {
        self.availability = availability;
        self
    }

    pub const fn mode(mut self, mode: NumberMode) -> Self {
        self.mode = mode;
        self
    }
}

/// One entry of a product's control list.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum NumberDescriptor {
    Direct(NumberMapping),
    Virtual(VirtualNumberMapping),
}

impl NumberDescriptor {
    pub fn description(&self) -> &NumberDescription {
        match self {
            Self::Direct(m) => &m.description,
            Self::Virtual(m) => &m.description,
        }
    }

    pub fn key(&self) -> &'static str {
        self.description().key
    }

    pub fn mode(&self) -> NumberMode {
        match self {
            Self::Direct(m) => m.mode,
            Self::Virtual(m) => m.mode,
        }
    }

    pub fn availability(&self) -> Availability {
        match self {
            Self::Direct(m) => m.availability,
            Self::Virtual(m) => m.availability,
        }
    }
}

impl From<NumberMapping> for NumberDescriptor {
    fn from(mapping: NumberMapping) -> Self {
        Self::Direct(mapping)
    }
}

impl From<VirtualNumberMapping> for NumberDescriptor {
    fn from(mapping: VirtualNumberMapping) -> Self {
        Self::Virtual(mapping)
    }
}
