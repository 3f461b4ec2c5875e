/// Where an entity is listed in the host UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EntityCategory {
    Config,
    Diagnostic,
}

/// How the host renders a number entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NumberMode {
    Auto,
    /// Free-entry input box.
    #[default]
    Box,
    Slider,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NumberDeviceClass {
    Duration,
    Temperature,
    Water,
    CarbonDioxide,
}

/// Units of measurement used by the built-in descriptors.
pub mod units {
    pub const PERCENTAGE: &str = "%";
    pub const SECONDS: &str = "s";
    pub const MINUTES: &str = "min";
    pub const CELSIUS: &str = "°C";
    pub const PARTS_PER_MILLION: &str = "ppm";
    pub const MILLILITERS: &str = "mL";
}
