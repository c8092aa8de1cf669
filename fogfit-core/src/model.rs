use serde::Serialize;

use crate::units::celsius_to_fahrenheit;

/// A point on the map, usually the center of a neighborhood.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }
}

/// Normalized weather for the current hour, as supplied by one provider.
///
/// Only the Celsius temperature is stored; the Fahrenheit value is always
/// derived from it so the two can never disagree.
#[derive(Debug, Clone, PartialEq)]
pub struct HourReading {
    temperature_c: f64,
    pub wind_speed_mps: f64,
    pub short_forecast: String,
    pub detailed_forecast: String,
    /// ISO-8601 start of the hour, as reported by the provider.
    pub start_time: String,
    pub provider: String,
}

impl HourReading {
    pub fn new(
        temperature_c: f64,
        wind_speed_mps: f64,
        short_forecast: impl Into<String>,
        detailed_forecast: impl Into<String>,
        start_time: impl Into<String>,
        provider: impl Into<String>,
    ) -> Self {
        Self {
            temperature_c,
            wind_speed_mps,
            short_forecast: short_forecast.into(),
            detailed_forecast: detailed_forecast.into(),
            start_time: start_time.into(),
            provider: provider.into(),
        }
    }

    pub fn temperature_c(&self) -> f64 {
        self.temperature_c
    }

    pub fn temperature_f(&self) -> f64 {
        celsius_to_fahrenheit(self.temperature_c)
    }

    pub fn wind_speed_mph(&self) -> f64 {
        crate::units::mps_to_mph(self.wind_speed_mps)
    }
}

/// The reading picked by the fallback chain, plus how it got there.
#[derive(Debug, Clone)]
pub struct Resolution {
    pub reading: HourReading,
    pub note: String,
}

/// Everything the presentation layer needs to render one answer.
#[derive(Debug, Clone, Serialize)]
pub struct Recommendation {
    pub temp_f: i64,
    pub wind_mph: i64,
    pub forecast: String,
    pub last_updated_local: String,
    pub items: Vec<&'static str>,
    pub source: String,
    pub note: String,
}
