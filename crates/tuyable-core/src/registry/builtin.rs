//! Number controls of every known Tuya BLE product.

use crate::error::RegistryError;
use crate::number::{
    Availability, NumberDescription, NumberDescriptor, NumberMapping, ValueAccessor,
    VirtualNumberMapping,
};
use crate::registry::{NumberRegistry, RegistryBuilder};
use crate::types::{units, EntityCategory, NumberDeviceClass, NumberMode};

const CUBETOUCH: &[&str] = &["3yqdo5yt", "xhf790if"];
const FINGERBOT_PLUS: &[&str] = &["blliqpsj", "ndvkgsrm", "yiihr7zh", "neq16kgd"];
const FINGERBOT: &[&str] = &[
    "ltak7e1p", "y6kttvd6", "yrnk7mnn", "nvr2rocq", "bnt7wajf", "rvdceqjh", "5xhbk964",
];
const FINGERBOT_PLUS_KG: &[&str] = &["mknd4lci", "riecov42"];
const RADIATOR_VALVE: &[&str] = &["drlajpqc", "nhj2j7su", "zmachryv"];

fn countdown_minutes(dp_id: u8, key: &'static str) -> NumberMapping {
    NumberMapping::new(
        dp_id,
        NumberDescription::new(key, 1.0, 1440.0)
            .icon("mdi:timer")
            .unit(units::MINUTES),
    )
}

/// Down position, hold time, up position, repeat count, and idle position of
/// a Fingerbot Plus whose program lives in `program_dp`.
fn fingerbot_plus(down_dp: u8, hold_dp: u8, up_dp: u8, program_dp: u8) -> [NumberMapping; 5] {
    [
        NumberMapping::new(down_dp, NumberDescription::down_position())
            .availability(Availability::FingerbotNotInProgramMode),
        NumberMapping::hold_time(hold_dp),
        NumberMapping::new(up_dp, NumberDescription::up_position())
            .availability(Availability::FingerbotNotInProgramMode),
        NumberMapping::new(
            program_dp,
            NumberDescription::new("program_repeats_count", 1.0, 65534.0)
                .icon("mdi:repeat")
                .category(EntityCategory::Config),
        )
        .availability(Availability::FingerbotRepeatCountAvailable)
        .accessor(ValueAccessor::ProgramRepeatCount),
        NumberMapping::new(
            program_dp,
            NumberDescription::new("program_idle_position", 0.0, 100.0)
                .icon("mdi:repeat")
                .unit(units::PERCENTAGE)
                .category(EntityCategory::Config),
        )
        .availability(Availability::FingerbotInProgramMode)
        .accessor(ValueAccessor::ProgramIdlePosition),
    ]
}

pub(super) fn build() -> Result<NumberRegistry, RegistryError> {
    let mut b = RegistryBuilder::new();

    // Smart Water Valve
    b.products(
        "sfkzq",
        &["nxquc5lb"],
        [
            NumberDescriptor::from(NumberMapping::new(
                9,
                NumberDescription::new("time_use", 0.0, 2_592_000.0)
                    .icon("mdi:timer")
                    .unit(units::SECONDS)
                    .category(EntityCategory::Config),
            )),
            NumberMapping::new(
                11,
                NumberDescription::new("countdown", 0.0, 86_400.0)
                    .icon("mdi:timer-outline")
                    .unit(units::SECONDS)
                    .category(EntityCategory::Config),
            )
            .into(),
            VirtualNumberMapping::new(
                NumberDescription::new("watering_duration", 60.0, 86_400.0)
                    .name("Watering Duration")
                    .icon("mdi:water-timer")
                    .step(60.0)
                    .unit(units::SECONDS)
                    .category(EntityCategory::Config),
            )
            .default_value(900.0)
            .into(),
        ],
    )?;

    // CO2 Detector
    b.products(
        "co2bj",
        &["59s19z5m"],
        [
            NumberMapping::new(
                17,
                NumberDescription::new("brightness", 0.0, 100.0)
                    .icon("mdi:brightness-percent")
                    .unit(units::PERCENTAGE)
                    .category(EntityCategory::Config),
            )
            .mode(NumberMode::Slider),
            NumberMapping::new(
                26,
                NumberDescription::new("carbon_dioxide_alarm_level", 400.0, 5000.0)
                    .icon("mdi:molecule-co2")
                    .step(100.0)
                    .unit(units::PARTS_PER_MILLION)
                    .category(EntityCategory::Config),
            ),
        ],
    )?;

    b.products(
        "szjqr",
        CUBETOUCH,
        [
            NumberMapping::hold_time(3),
            NumberMapping::new(5, NumberDescription::up_position().max(100.0)),
            NumberMapping::new(6, NumberDescription::down_position().min(0.0)),
        ],
    )?
    .products("szjqr", FINGERBOT_PLUS, fingerbot_plus(9, 10, 15, 121))?
    .products(
        "szjqr",
        FINGERBOT,
        [
            NumberMapping::new(9, NumberDescription::down_position())
                .availability(Availability::FingerbotNotInProgramMode),
            NumberMapping::new(10, NumberDescription::hold_time().step(0.1))
                .coefficient(10.0)
                .availability(Availability::FingerbotInPushMode),
            NumberMapping::new(15, NumberDescription::up_position())
                .availability(Availability::FingerbotNotInProgramMode),
        ],
    )?;

    b.products("kg", FINGERBOT_PLUS_KG, fingerbot_plus(102, 103, 106, 109))?;

    b.products(
        "wk",
        RADIATOR_VALVE,
        [NumberMapping::new(
            27,
            NumberDescription::new("temperature_calibration", -6.0, 6.0)
                .icon("mdi:thermometer-lines")
                .unit(units::CELSIUS)
                .category(EntityCategory::Config),
        )],
    )?;

    // Soil moisture sensor
    b.products(
        "wsdcg",
        &["ojzlzzsw"],
        [NumberMapping::new(
            17,
            NumberDescription::new("reporting_period", 1.0, 120.0)
                .icon("mdi:timer")
                .unit(units::MINUTES)
                .category(EntityCategory::Config),
        )],
    )?;

    // Smart water bottle
    b.products(
        "znhsb",
        &["cdlandip"],
        [NumberMapping::new(
            103,
            NumberDescription::new("recommended_water_intake", 0.0, 5000.0)
                .device_class(NumberDeviceClass::Water)
                .unit(units::MILLILITERS)
                .category(EntityCategory::Config),
        )],
    )?;

    // Irrigation computers: PARKSIDE PPB A1 and SGW02. The SGW08 shares the
    // SGW02 product id and gets its zone countdowns.
    b.products("ggq", &["6pahkcau"], [countdown_minutes(5, "countdown_duration")])?
        .products(
            "ggq",
            &["hfgdqhho"],
            [
                countdown_minutes(106, "countdown_duration_z1"),
                countdown_minutes(103, "countdown_duration_z2"),
            ],
        )?;

    Ok(b.build())
}
