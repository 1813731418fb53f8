// File: crates/mercator-core/src/dms.rs
// Summary: Degrees/minutes/seconds formatting plus the longitude, latitude and bearing adapters.

/// Zero-pad a floored component to `width` characters, keeping the rightmost characters.
/// At most three leading zeros are added. Non-finite values print as `NaN`/`Infinity`
/// and are cut the same way, so they never pass for a real reading.
fn pad(num: f64, width: usize) -> String {
    let digits = if num.is_nan() {
        "NaN".to_string()
    } else if num.is_infinite() {
        "Infinity".to_string()
    } else {
        format!("{num:.0}")
    };
    let s = format!("000{digits}");
    let start = s.len().saturating_sub(width);
    s[start..].to_string()
}

/// Format a signed decimal-degree value as `DDD°MM′SS″X`.
///
/// The sign only selects the suffix; the digits are taken from the absolute value
/// and every component is truncated, never rounded. `None` passes through.
pub fn format_dms(
    value: Option<f64>,
    positive_suffix: &str,
    negative_suffix: &str,
    degree_width: usize,
) -> Option<String> {
    let degrees = value?;
    let positive = degrees >= 0.0;
    let degrees = degrees.abs();

    let whole_degrees = degrees.floor();
    let minutes = (degrees - whole_degrees) * 60.0;
    let whole_minutes = minutes.floor();
    let seconds = (minutes - whole_minutes) * 60.0;
    let whole_seconds = seconds.floor();

    Some(format!(
        "{}°{}′{}″{}",
        pad(whole_degrees, degree_width),
        pad(whole_minutes, 2),
        pad(whole_seconds, 2),
        if positive { positive_suffix } else { negative_suffix },
    ))
}

/// Longitude readout, e.g. `060°00′00″E`.
pub fn format_long(long: Option<f64>) -> Option<String> {
    format_dms(long, "E", "W", 3)
}

/// Latitude readout, e.g. `30°00′00″N`.
pub fn format_lat(lat: Option<f64>) -> Option<String> {
    format_dms(lat, "N", "S", 2)
}

/// Bearing readout with no direction letter, e.g. `045°00′00″`.
pub fn format_bearing(deg: Option<f64>) -> Option<String> {
    format_dms(deg, "", "", 3)
}
