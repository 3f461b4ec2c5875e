use tuyable_core::types::{DataPointId, DataPointValue};

/// Parses a hex byte string such as `"0003e832"`. Spaces, colons and a
/// leading `0x` are ignored.
pub fn parse_hex(s: &str) -> Result<Vec<u8>, String> {
    let digits: String = s
        .trim()
        .trim_start_matches("0x")
        .chars()
        .filter(|c| !matches!(c, ' ' | ':'))
        .collect();
    if !digits.is_ascii() {
        return Err(format!("invalid hex string '{s}'"));
    }
    if digits.len() % 2 != 0 {
        return Err(format!("odd number of hex digits in '{s}'"));
    }
    (0..digits.len())
        .step_by(2)
        .map(|i| {
            u8::from_str_radix(&digits[i..i + 2], 16)
                .map_err(|e| format!("invalid hex byte '{}': {e}", &digits[i..i + 2]))
        })
        .collect()
}

pub fn format_hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}

/// Parses a datapoint assignment `id=value`.
///
/// `true`/`false` give a bool, `0x..` a raw payload, anything else an
/// integer value.
pub fn parse_datapoint(s: &str) -> Result<(DataPointId, DataPointValue), String> {
    let (id, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected id=value, got '{s}'"))?;
    let id = id
        .trim()
        .parse::<DataPointId>()
        .map_err(|e| format!("invalid datapoint id '{id}': {e}"))?;
    let value = value.trim();
    let value = match value {
        "true" => DataPointValue::Bool(true),
        "false" => DataPointValue::Bool(false),
        v if v.starts_with("0x") => DataPointValue::Raw(parse_hex(v)?),
        v => DataPointValue::Value(
            v.parse::<i32>()
                .map_err(|e| format!("invalid value '{v}': {e}"))?,
        ),
    };
    Ok((id, value))
}

/// Parses a number assignment `key=value`.
pub fn parse_assignment(s: &str) -> Result<(String, f64), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected key=value, got '{s}'"))?;
    let value = value
        .trim()
        .parse::<f64>()
        .map_err(|e| format!("invalid number '{value}': {e}"))?;
    Ok((key.trim().to_owned(), value))
}
