/// Identity of one Tuya BLE device for the lifetime of a session.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DeviceIdentity {
    pub category: String,
    pub product_id: String,
    pub address: String,
    pub name: String,
}

impl DeviceIdentity {
    pub fn new(
        category: impl Into<String>,
        product_id: impl Into<String>,
        address: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            category: category.into(),
            product_id: product_id.into(),
            address: address.into(),
            name: name.into(),
        }
    }

    /// Stable entity id for a descriptor key on this device.
    pub fn unique_id(&self, key: &str) -> String {
        format!("{}_{key}", self.address)
    }

    /// Model string shown in device info, `"<category> <product_id>"`.
    pub fn model(&self) -> String {
        format!("{} {}", self.category, self.product_id)
    }
}

#[cfg(test)]
mod tests {
    use super::DeviceIdentity;

    #[test]
    fn derives_unique_id_and_model() {
        let device = DeviceIdentity::new("sfkzq", "nxquc5lb", "DC:23:4D:11:22:33", "Valve");
        assert_eq!(
            device.unique_id("watering_duration"),
            "DC:23:4D:11:22:33_watering_duration"
        );
        assert_eq!(device.model(), "sfkzq nxquc5lb");
    }
}
