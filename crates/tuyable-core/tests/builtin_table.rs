use tuyable_core::number::{Availability, NumberDescriptor, ValueAccessor};
use tuyable_core::types::NumberMode;
use tuyable_core::{product_info, registry};

fn keys(category: &str, product_id: &str) -> Vec<&'static str> {
    registry()
        .resolve(category, product_id)
        .iter()
        .map(NumberDescriptor::key)
        .collect()
}

fn direct(descriptor: &NumberDescriptor) -> &tuyable_core::NumberMapping {
    match descriptor {
        NumberDescriptor::Direct(mapping) => mapping,
        NumberDescriptor::Virtual(_) => panic!("expected a direct descriptor"),
    }
}

#[test]
fn resolves_every_registered_product() {
    let registry = registry();
    for category in registry.categories() {
        for product_id in registry.products(category) {
            assert!(
                !registry.resolve(category, product_id).is_empty(),
                "{category}/{product_id} resolved no controls"
            );
        }
    }
}

#[test]
fn unknown_pairs_resolve_empty() {
    assert!(registry().resolve("nope", "nxquc5lb").is_empty());
    assert!(registry().resolve("sfkzq", "unknown1").is_empty());
    assert!(registry().resolve("", "").is_empty());
}

#[test]
fn water_valve_has_virtual_watering_duration() {
    assert_eq!(
        keys("sfkzq", "nxquc5lb"),
        ["time_use", "countdown", "watering_duration"]
    );
    match &registry().resolve("sfkzq", "nxquc5lb")[2] {
        NumberDescriptor::Virtual(mapping) => {
            assert_eq!(mapping.default_value, 900.0);
            assert_eq!(mapping.description.native_step, 60.0);
            assert_eq!(mapping.description.native_min_value, 60.0);
        }
        NumberDescriptor::Direct(_) => panic!("watering duration must be virtual"),
    }
}

#[test]
fn fingerbot_plus_ids_share_one_list() {
    let first = registry().resolve("szjqr", "blliqpsj");
    for product_id in ["ndvkgsrm", "yiihr7zh", "neq16kgd"] {
        assert!(std::ptr::eq(first, registry().resolve("szjqr", product_id)));
    }
    assert_eq!(
        keys("szjqr", "blliqpsj"),
        [
            "down_position",
            "hold_time",
            "up_position",
            "program_repeats_count",
            "program_idle_position"
        ]
    );
}

#[test]
fn fingerbot_plus_program_controls_use_program_accessors() {
    for (category, product_id, program_dp) in
        [("szjqr", "neq16kgd", 121), ("kg", "mknd4lci", 109)]
    {
        let list = registry().resolve(category, product_id);
        let repeat = direct(&list[3]);
        assert_eq!(repeat.dp_id, program_dp);
        assert_eq!(repeat.accessor, ValueAccessor::ProgramRepeatCount);
        assert_eq!(
            repeat.availability,
            Availability::FingerbotRepeatCountAvailable
        );
        let idle = direct(&list[4]);
        assert_eq!(idle.accessor, ValueAccessor::ProgramIdlePosition);
        assert_eq!(idle.availability, Availability::FingerbotInProgramMode);
        assert_eq!(
            product_info(category, product_id).fingerbot.unwrap().program,
            Some(program_dp)
        );
    }
}

#[test]
fn plain_fingerbot_hold_time_is_tenths_of_seconds() {
    let list = registry().resolve("szjqr", "ltak7e1p");
    let hold = direct(&list[1]);
    assert_eq!(hold.description.key, "hold_time");
    assert_eq!(hold.coefficient, 10.0);
    assert_eq!(hold.description.native_step, 0.1);
    assert_eq!(hold.availability, Availability::FingerbotInPushMode);
}

#[test]
fn cubetouch_positions_span_full_range() {
    let list = registry().resolve("szjqr", "3yqdo5yt");
    let up = direct(&list[1]);
    let down = direct(&list[2]);
    assert_eq!(up.description.native_max_value, 100.0);
    assert_eq!(down.description.native_min_value, 0.0);
    assert_eq!(up.availability, Availability::Always);
}

#[test]
fn co2_brightness_is_a_slider() {
    let list = registry().resolve("co2bj", "59s19z5m");
    assert_eq!(list[0].mode(), NumberMode::Slider);
    assert_eq!(list[1].mode(), NumberMode::Box);
}

#[test]
fn irrigation_sgw_uses_zone_countdowns() {
    assert_eq!(
        keys("ggq", "hfgdqhho"),
        ["countdown_duration_z1", "countdown_duration_z2"]
    );
    assert_eq!(keys("ggq", "6pahkcau"), ["countdown_duration"]);
}
