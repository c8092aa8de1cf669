//! Conversions between the units providers report and the canonical ones
//! (Celsius, meters per second).

const KMH_PER_MPS: f64 = 3.6;
const MPH_PER_MPS: f64 = 2.237;

pub fn fahrenheit_to_celsius(f: f64) -> f64 {
    (f - 32.0) * 5.0 / 9.0
}

pub fn celsius_to_fahrenheit(c: f64) -> f64 {
    c * 9.0 / 5.0 + 32.0
}

pub fn kmh_to_mps(kmh: f64) -> f64 {
    kmh / KMH_PER_MPS
}

pub fn mps_to_mph(mps: f64) -> f64 {
    mps * MPH_PER_MPS
}

/// Best-effort parse of a free-text wind speed such as `"10 mph"` or
/// `"5 to 10 mph"`.
///
/// The first run of digits and decimal points is taken as miles per hour.
/// Anything that does not yield a number comes back as `0.0`; this never
/// fails.
pub fn wind_speed_to_mps(raw: &str) -> f64 {
    let mut num = String::new();
    for ch in raw.chars() {
        if ch.is_ascii_digit() || ch == '.' {
            num.push(ch);
        } else if !num.is_empty() {
            break;
        }
    }

    num.parse::<f64>().map(|mph| mph / MPH_PER_MPS).unwrap_or(0.0)
}
