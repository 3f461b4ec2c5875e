//! Fingerbot program payload fields.
//!
//! The program datapoint is a raw byte sequence:
//!
//! | bytes | field                                  |
//! |-------|----------------------------------------|
//! | 0..2  | repeat count, big-endian `u16`         |
//! | 2     | idle position, percent (`0..=100`)     |
//! | 3..   | step list, opaque here and preserved   |
//!
//! Encoders copy the whole payload and replace only the addressed field.

use crate::error::PayloadError;

/// Repeat count meaning "repeat forever"; the repeat count control is hidden
/// while it is set.
pub const REPEAT_FOREVER: u16 = 0xFFFF;
/// Largest finite repeat count.
pub const MAX_REPEAT_COUNT: u16 = REPEAT_FOREVER - 1;

const REPEAT_COUNT_LEN: usize = 2;
const IDLE_POSITION_OFFSET: usize = 2;

fn require(payload: &[u8], required: usize) -> Result<(), PayloadError> {
    if payload.len() < required {
        return Err(PayloadError::TooShort {
            required,
            actual: payload.len(),
        });
    }
    Ok(())
}

/// Reads the repeat count from bytes `0..2`.
pub fn repeat_count(payload: &[u8]) -> Result<u16, PayloadError> {
    require(payload, REPEAT_COUNT_LEN)?;
    Ok(u16::from_be_bytes([payload[0], payload[1]]))
}

/// Returns a copy of `payload` with bytes `0..2` replaced by `count`.
pub fn with_repeat_count(payload: &[u8], count: u16) -> Result<Vec<u8>, PayloadError> {
    require(payload, REPEAT_COUNT_LEN)?;
    let mut out = payload.to_vec();
    out[..REPEAT_COUNT_LEN].copy_from_slice(&count.to_be_bytes());
    Ok(out)
}

/// Reads the idle position from byte `2`.
pub fn idle_position(payload: &[u8]) -> Result<u8, PayloadError> {
    require(payload, IDLE_POSITION_OFFSET + 1)?;
    Ok(payload[IDLE_POSITION_OFFSET])
}

/// Returns a copy of `payload` with byte `2` replaced by `position`.
pub fn with_idle_position(payload: &[u8], position: u8) -> Result<Vec<u8>, PayloadError> {
    require(payload, IDLE_POSITION_OFFSET + 1)?;
    let mut out = payload.to_vec();
    out[IDLE_POSITION_OFFSET] = position;
    Ok(out)
}

/// One field of the program payload, to be written over the current payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum ProgramField {
    RepeatCount(u16),
    IdlePosition(u8),
}

impl ProgramField {
    /// Returns a copy of `payload` with this field replaced.
    pub fn apply(self, payload: &[u8]) -> Result<Vec<u8>, PayloadError> {
        match self {
            Self::RepeatCount(count) => with_repeat_count(payload, count),
            Self::IdlePosition(position) => with_idle_position(payload, position),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn repeat_count_is_big_endian() {
        assert_eq!(repeat_count(&[0x00, 0x05, 0x05]), Ok(5));
        assert_eq!(repeat_count(&[0xFF, 0xFF, 0x05]), Ok(REPEAT_FOREVER));
        assert_eq!(repeat_count(&[0x03, 0xE8]), Ok(1000));
    }

    #[test]
    fn encodes_repeat_count_and_keeps_tail() {
        let payload = [0x00, 0x01, 0x32, 0x10, 0x20, 0x30];
        let out = with_repeat_count(&payload, 1000).unwrap();
        assert_eq!(repeat_count(&out), Ok(1000));
        assert_eq!(&out[2..], &payload[2..]);
    }

    #[test]
    fn idle_position_touches_only_byte_two() {
        let payload = [0x12, 0x34, 0x00, 0x99];
        let out = with_idle_position(&payload, 37).unwrap();
        assert_eq!(out, vec![0x12, 0x34, 37, 0x99]);
    }

    #[test]
    fn fields_compose_over_one_payload() {
        let payload = [0x00, 0x05, 0x0A, 0x01];
        let out = ProgramField::RepeatCount(1000).apply(&payload).unwrap();
        let out = ProgramField::IdlePosition(37).apply(&out).unwrap();
        assert_eq!(out, vec![0x03, 0xE8, 37, 0x01]);
        assert!(ProgramField::IdlePosition(1).apply(&[0, 1]).is_err());
    }

    #[test]
    fn short_payloads_are_rejected() {
        assert_eq!(
            repeat_count(&[0x01]),
            Err(PayloadError::TooShort {
                required: 2,
                actual: 1
            })
        );
        assert!(idle_position(&[0x00, 0x01]).is_err());
        assert!(with_idle_position(&[], 10).is_err());
        assert!(with_repeat_count(&[0x00], 10).is_err());
    }

    proptest! {
        #[test]
        fn repeat_count_preserves_other_bytes(
            payload in proptest::collection::vec(any::<u8>(), 2..64),
            count in any::<u16>(),
        ) {
            let out = with_repeat_count(&payload, count).unwrap();
            prop_assert_eq!(out.len(), payload.len());
            prop_assert_eq!(repeat_count(&out).unwrap(), count);
            prop_assert_eq!(&out[2..], &payload[2..]);
        }

        #[test]
        fn idle_position_preserves_other_bytes(
            payload in proptest::collection::vec(any::<u8>(), 3..64),
            position in 0u8..=100,
        ) {
            let out = with_idle_position(&payload, position).unwrap();
            prop_assert_eq!(out.len(), payload.len());
            prop_assert_eq!(idle_position(&out).unwrap(), position);
            prop_assert_eq!(&out[..2], &payload[..2]);
            prop_assert_eq!(&out[3..], &payload[3..]);
        }
    }
}
