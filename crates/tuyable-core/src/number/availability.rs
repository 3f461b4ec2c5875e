//! Availability predicates.
//!
//! Every predicate reads the current datapoint values through a
//! [`DataPointView`]; nothing is cached between calls. A datapoint the device
//! has not reported yet never hides a control.

use crate::number::program;
use crate::products::ProductInfo;
use crate::types::{DataPointId, DataPointView};

/// Fingerbot mode datapoint value for push mode.
pub const FINGERBOT_MODE_PUSH: i64 = 0;
/// Fingerbot mode datapoint value for program mode. Any other value is toggle.
pub const FINGERBOT_MODE_PROGRAM: i64 = 2;

/// Availability strategy attached to a number descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Availability {
    #[default]
    Always,
    FingerbotInProgramMode,
    FingerbotNotInProgramMode,
    FingerbotInPushMode,
    FingerbotRepeatCountAvailable,
}

impl Availability {
    pub fn evaluate<V>(self, data_points: &V, product: &ProductInfo) -> bool
    where
        V: DataPointView + ?Sized,
    {
        match self {
            Self::Always => true,
            Self::FingerbotInProgramMode => is_fingerbot_in_program_mode(data_points, product),
            Self::FingerbotNotInProgramMode => {
                is_fingerbot_not_in_program_mode(data_points, product)
            }
            Self::FingerbotInPushMode => is_fingerbot_in_push_mode(data_points, product),
            Self::FingerbotRepeatCountAvailable => {
                is_fingerbot_repeat_count_available(data_points, product)
            }
        }
    }
}

/// Tests the current mode value, or `None` when there is nothing to test.
fn mode_matches<V>(data_points: &V, mode: DataPointId, test: impl Fn(i64) -> bool) -> Option<bool>
where
    V: DataPointView + ?Sized,
{
    data_points
        .data_point_value(mode)
        .and_then(|value| value.as_integer())
        .map(test)
}

pub fn is_fingerbot_in_program_mode<V>(data_points: &V, product: &ProductInfo) -> bool
where
    V: DataPointView + ?Sized,
{
    product
        .fingerbot
        .and_then(|fb| mode_matches(data_points, fb.mode, |m| m == FINGERBOT_MODE_PROGRAM))
        .unwrap_or(true)
}

pub fn is_fingerbot_not_in_program_mode<V>(data_points: &V, product: &ProductInfo) -> bool
where
    V: DataPointView + ?Sized,
{
    product
        .fingerbot
        .and_then(|fb| mode_matches(data_points, fb.mode, |m| m != FINGERBOT_MODE_PROGRAM))
        .unwrap_or(true)
}

pub fn is_fingerbot_in_push_mode<V>(data_points: &V, product: &ProductInfo) -> bool
where
    V: DataPointView + ?Sized,
{
    product
        .fingerbot
        .and_then(|fb| mode_matches(data_points, fb.mode, |m| m == FINGERBOT_MODE_PUSH))
        .unwrap_or(true)
}

/// Program mode with a finite repeat count.
///
/// The repeat count is hidden while the program repeats forever
/// ([`program::REPEAT_FOREVER`]).
pub fn is_fingerbot_repeat_count_available<V>(data_points: &V, product: &ProductInfo) -> bool
where
    V: DataPointView + ?Sized,
{
    let Some(fingerbot) = product.fingerbot else {
        return true;
    };
    let Some(program_id) = fingerbot.program else {
        return true;
    };
    if !mode_matches(data_points, fingerbot.mode, |m| m == FINGERBOT_MODE_PROGRAM).unwrap_or(true)
    {
        return false;
    }
    data_points
        .data_point_value(program_id)
        .as_ref()
        .and_then(|value| value.as_bytes())
        .and_then(|payload| program::repeat_count(payload).ok())
        .map_or(true, |count| count != program::REPEAT_FOREVER)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::products::product_info;
    use crate::types::DataPointValue;
    use std::collections::HashMap;

    fn fingerbot_plus() -> ProductInfo {
        product_info("szjqr", "blliqpsj")
    }

    fn points(mode: Option<u32>, program: Option<&[u8]>) -> HashMap<DataPointId, DataPointValue> {
        let mut map = HashMap::new();
        if let Some(mode) = mode {
            map.insert(8, DataPointValue::Enum(mode));
        }
        if let Some(program) = program {
            map.insert(121, DataPointValue::Raw(program.to_vec()));
        }
        map
    }

    #[test]
    fn mode_predicates_follow_mode_value() {
        let product = fingerbot_plus();
        let push = points(Some(0), None);
        let toggle = points(Some(1), None);
        let program = points(Some(2), None);

        assert!(is_fingerbot_in_push_mode(&push, &product));
        assert!(!is_fingerbot_in_push_mode(&toggle, &product));
        assert!(!is_fingerbot_in_push_mode(&program, &product));

        assert!(is_fingerbot_in_program_mode(&program, &product));
        assert!(!is_fingerbot_in_program_mode(&toggle, &product));

        assert!(is_fingerbot_not_in_program_mode(&push, &product));
        assert!(is_fingerbot_not_in_program_mode(&toggle, &product));
        assert!(!is_fingerbot_not_in_program_mode(&program, &product));
    }

    #[test]
    fn missing_mode_keeps_controls_visible() {
        let product = fingerbot_plus();
        let empty = points(None, None);
        for availability in [
            Availability::FingerbotInProgramMode,
            Availability::FingerbotNotInProgramMode,
            Availability::FingerbotInPushMode,
            Availability::FingerbotRepeatCountAvailable,
        ] {
            assert!(availability.evaluate(&empty, &product), "{availability:?}");
        }
    }

    #[test]
    fn non_fingerbot_products_are_always_available() {
        let product = product_info("wk", "drlajpqc");
        let program = points(Some(2), None);
        assert!(is_fingerbot_in_push_mode(&program, &product));
        assert!(is_fingerbot_repeat_count_available(&program, &product));
    }

    #[test]
    fn repeat_count_hidden_while_repeating_forever() {
        let product = fingerbot_plus();
        assert!(!is_fingerbot_repeat_count_available(
            &points(Some(2), Some(b"\xFF\xFF\x05")),
            &product
        ));
        assert!(is_fingerbot_repeat_count_available(
            &points(Some(2), Some(b"\x00\x05\x05")),
            &product
        ));
        assert!(is_fingerbot_repeat_count_available(
            &points(Some(2), Some(b"\x00\x00\x05")),
            &product
        ));
    }

    #[test]
    fn repeat_count_requires_program_mode() {
        let product = fingerbot_plus();
        assert!(!is_fingerbot_repeat_count_available(
            &points(Some(0), Some(b"\x00\x05\x05")),
            &product
        ));
    }

    #[test]
    fn malformed_program_payload_does_not_hide_repeat_count() {
        let product = fingerbot_plus();
        let mut map = points(Some(2), None);
        map.insert(121, DataPointValue::Value(7));
        assert!(is_fingerbot_repeat_count_available(&map, &product));
    }
}
