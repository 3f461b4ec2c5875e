//! Product capability catalog.
//!
//! Maps a device's category and product id to a display name and, for the
//! fingerbot families, the datapoint ids that carry the mode and the packed
//! program. Availability predicates and program accessors read those ids from
//! here rather than from the number descriptors.

use crate::types::DataPointId;

/// Datapoint layout of a fingerbot-style pusher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FingerbotInfo {
    pub switch: DataPointId,
    /// Push (`0`), toggle, or program (`2`) mode.
    pub mode: DataPointId,
    pub up_position: DataPointId,
    pub down_position: DataPointId,
    pub hold_time: DataPointId,
    pub reverse_positions: DataPointId,
    pub manual_control: Option<DataPointId>,
    /// Packed program payload, see [`crate::number::program`].
    pub program: Option<DataPointId>,
}

/// Static information about a product.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ProductInfo {
    pub name: &'static str,
    pub fingerbot: Option<FingerbotInfo>,
}

impl ProductInfo {
    pub const UNKNOWN: Self = Self::named("Unknown");

    pub const fn named(name: &'static str) -> Self {
        Self {
            name,
            fingerbot: None,
        }
    }

    pub const fn fingerbot(name: &'static str, fingerbot: FingerbotInfo) -> Self {
        Self {
            name,
            fingerbot: Some(fingerbot),
        }
    }
}

const CUBETOUCH: FingerbotInfo = FingerbotInfo {
    switch: 1,
    mode: 2,
    up_position: 5,
    down_position: 6,
    hold_time: 3,
    reverse_positions: 4,
    manual_control: None,
    program: None,
};

const FINGERBOT: FingerbotInfo = FingerbotInfo {
    switch: 2,
    mode: 8,
    up_position: 15,
    down_position: 9,
    hold_time: 10,
    reverse_positions: 11,
    manual_control: None,
    program: Some(121),
};

const FINGERBOT_PLUS: FingerbotInfo = FingerbotInfo {
    manual_control: Some(17),
    ..FINGERBOT
};

const FINGERBOT_PLUS_KG: FingerbotInfo = FingerbotInfo {
    switch: 1,
    mode: 101,
    up_position: 106,
    down_position: 102,
    hold_time: 103,
    reverse_positions: 104,
    manual_control: Some(107),
    program: Some(109),
};

/// Looks up the product information for a device.
///
/// Unknown combinations yield [`ProductInfo::UNKNOWN`], which carries no
/// fingerbot layout, so every fingerbot predicate reports the control as
/// available.
pub fn product_info(category: &str, product_id: &str) -> ProductInfo {
    match (category, product_id) {
        ("sfkzq", "nxquc5lb") => ProductInfo::named("Smart Water Valve"),
        ("co2bj", "59s19z5m") => ProductInfo::named("CO2 Detector"),
        ("szjqr", "3yqdo5yt" | "xhf790if") => ProductInfo::fingerbot("CubeTouch", CUBETOUCH),
        ("szjqr", "blliqpsj" | "ndvkgsrm" | "yiihr7zh" | "neq16kgd") => {
            ProductInfo::fingerbot("Fingerbot Plus", FINGERBOT_PLUS)
        }
        (
            "szjqr",
            "ltak7e1p" | "y6kttvd6" | "yrnk7mnn" | "nvr2rocq" | "bnt7wajf" | "rvdceqjh"
            | "5xhbk964",
        ) => ProductInfo::fingerbot("Fingerbot", FINGERBOT),
        ("kg", "mknd4lci" | "riecov42") => {
            ProductInfo::fingerbot("Fingerbot Plus", FINGERBOT_PLUS_KG)
        }
        ("wk", "drlajpqc" | "nhj2j7su" | "zmachryv") => {
            ProductInfo::named("Thermostatic Radiator Valve")
        }
        ("wsdcg", "ojzlzzsw") => ProductInfo::named("Soil moisture sensor"),
        ("znhsb", "cdlandip") => ProductInfo::named("Smart water bottle"),
        ("ggq", "6pahkcau") => ProductInfo::named("Irrigation computer"),
        ("ggq", "hfgdqhho") => ProductInfo::named("Irrigation computer SGW02"),
        _ => ProductInfo::UNKNOWN,
    }
}
