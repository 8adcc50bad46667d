/// Unit suffix of species weights.
pub const WEIGHT_SUFFIX: &str = " kg";
/// Unit suffix of species heights.
pub const HEIGHT_SUFFIX: &str = " m";

/// Parses a measurement stored as text, such as `"6,9 kg"`.
///
/// The first occurrence of `suffix` is removed and the first comma is read as the decimal
/// separator. Values that still fail to parse are read as `0.0`.
pub fn parse_measurement(value: &str, suffix: &str) -> f64 {
    value
        .replacen(',', ".", 1)
        .replacen(suffix, "", 1)
        .parse()
        .unwrap_or(0.0)
}

/// Parses a species weight in kilograms.
pub fn parse_weight(value: &str) -> f64 {
    parse_measurement(value, WEIGHT_SUFFIX)
}

/// Parses a species height in meters.
pub fn parse_height(value: &str) -> f64 {
    parse_measurement(value, HEIGHT_SUFFIX)
}
