use crate::types::{units, EntityCategory, NumberDeviceClass};

/// Display metadata of a number control.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct NumberDescription {
    pub key: &'static str,
    pub name: Option<&'static str>,
    pub icon: Option<&'static str>,
    pub device_class: Option<NumberDeviceClass>,
    pub native_min_value: f64,
    pub native_max_value: f64,
    pub native_step: f64,
    pub native_unit_of_measurement: Option<&'static str>,
    pub entity_category: Option<EntityCategory>,
}

impl NumberDescription {
    /// A description over `[min, max]` with step 1 and no unit.
    pub const fn new(key: &'static str, min: f64, max: f64) -> Self {
        Self {
            key,
            name: None,
            icon: None,
            device_class: None,
            native_min_value: min,
            native_max_value: max,
            native_step: 1.0,
            native_unit_of_measurement: None,
            entity_category: None,
        }
    }

    pub const fn name(mut self, name: &'static str) -> Self {
        self.name = Some(name);
        self
    }

    pub const fn icon(mut self, icon: &'static str) -> Self {
        self.icon = Some(icon);
        self
    }

    pub const fn device_class(mut self, class: NumberDeviceClass) -> Self {
        self.device_class = Some(class);
        self
    }

    pub const fn min(mut self, min: f64) -> Self {
        self.native_min_value = min;
        self
    }

    pub const fn max(mut self, max: f64) -> Self {
        self.native_max_value = max;
        self
    }

    pub const fn step(mut self, step: f64) -> Self {
        self.native_step = step;
        self
    }

    pub const fn unit(mut self, unit: &'static str) -> Self {
        self.native_unit_of_measurement = Some(unit);
        self
    }

    pub const fn category(mut self, category: EntityCategory) -> Self {
        self.entity_category = Some(category);
        self
    }

    /// Fingerbot arm position when pressed, `51..=100` percent.
    pub const fn down_position() -> Self {
        Self::new("down_position", 51.0, 100.0)
            .icon("mdi:arrow-down-bold")
            .unit(units::PERCENTAGE)
            .category(EntityCategory::Config)
    }

    /// Fingerbot arm position when released, `0..=50` percent.
    pub const fn up_position() -> Self {
        Self::new("up_position", 0.0, 50.0)
            .icon("mdi:arrow-up-bold")
            .unit(units::PERCENTAGE)
            .category(EntityCategory::Config)
    }

    /// Fingerbot press duration in push mode, `0..=10` seconds.
    pub const fn hold_time() -> Self {
        Self::new("hold_time", 0.0, 10.0)
            .icon("mdi:timer")
            .unit(units::SECONDS)
            .category(EntityCategory::Config)
    }

    /// Whether `value` lies in `[min, max]`.
    pub fn contains(&self, value: f64) -> bool {
        value >= self.native_min_value && value <= self.native_max_value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_can_be_widened() {
        let up = NumberDescription::up_position().max(100.0);
        assert_eq!(up.key, "up_position");
        assert_eq!(up.native_max_value, 100.0);
        assert_eq!(up.native_min_value, 0.0);

        let down = NumberDescription::down_position().min(0.0);
        assert!(down.contains(0.0));
        assert!(!NumberDescription::down_position().contains(0.0));
    }
}
