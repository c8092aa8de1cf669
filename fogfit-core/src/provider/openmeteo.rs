use async_trait::async_trait;
use chrono::{DateTime, FixedOffset, Offset, Utc};
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, instrument};

use crate::{Coordinate, HourReading, error::ProviderError, units::kmh_to_mps};

use super::{ProviderId, WeatherProvider, get_json};

const HOURLY_FIELDS: &str = "temperature_2m,wind_speed_10m,cloudcover,visibility";
const DEFAULT_CLOUD_COVER_PCT: f64 = 0.0;
const DEFAULT_VISIBILITY_M: f64 = 20_000.0;
const FOG_CLOUD_COVER_PCT: f64 = 80.0;
const FOG_VISIBILITY_M: f64 = 6_000.0;
const PARTLY_CLOUDY_PCT: f64 = 40.0;

/// Open-Meteo hourly forecast; one call, no API key.
#[derive(Debug, Clone)]
pub struct OpenMeteoProvider {
    base_url: String,
    http: Client,
}

impl OpenMeteoProvider {
    pub fn new(base_url: impl Into<String>, http: Client) -> Self {
        Self { base_url: base_url.into(), http }
    }
}

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    #[serde(default)]
    utc_offset_seconds: i32,
    hourly: Hourly,
}

#[derive(Debug, Deserialize)]
struct Hourly {
    time: Vec<String>,
    temperature_2m: Vec<Option<f64>>,
    wind_speed_10m: Vec<Option<f64>>,
    #[serde(default)]
    cloudcover: Vec<Option<f64>>,
    #[serde(default)]
    visibility: Vec<Option<f64>>,
}

impl ForecastResponse {
    fn into_reading(self, now: DateTime<Utc>) -> Result<HourReading, ProviderError> {
        let offset = FixedOffset::east_opt(self.utc_offset_seconds).unwrap_or_else(|| Utc.fix());
        let hourly = self.hourly;

        if hourly.time.is_empty() {
            return Err(ProviderError::Data("Open-Meteo returned an empty hourly series".into()));
        }

        let idx = select_hour_index(&hourly.time, &current_hour_stamp(now, offset));
        debug!(idx, stamp = %hourly.time[idx], "selected Open-Meteo hour");

        let temperature_c = required(&hourly.temperature_2m, idx, "temperature_2m")?;
        let wind_kmh = required(&hourly.wind_speed_10m, idx, "wind_speed_10m")?;
        let cloud = optional(&hourly.cloudcover, idx).unwrap_or(DEFAULT_CLOUD_COVER_PCT);
        let vis = optional(&hourly.visibility, idx).unwrap_or(DEFAULT_VISIBILITY_M);

        Ok(HourReading::new(
            temperature_c,
            kmh_to_mps(wind_kmh),
            condition_label(cloud, vis),
            format!("Cloud {}%, visibility {} m", cloud as i64, vis as i64),
            format!("{}:00{}", hourly.time[idx], offset),
            ProviderId::OpenMeteo.as_str(),
        ))
    }
}

fn required(series: &[Option<f64>], idx: usize, field: &str) -> Result<f64, ProviderError> {
    optional(series, idx)
        .ok_or_else(|| ProviderError::Data(format!("Open-Meteo {field} missing at index {idx}")))
}

fn optional(series: &[Option<f64>], idx: usize) -> Option<f64> {
    series.get(idx).copied().flatten()
}

/// `YYYY-MM-DDTHH:00` for the wall-clock hour at `offset`.
pub fn current_hour_stamp(now: DateTime<Utc>, offset: FixedOffset) -> String {
    now.with_timezone(&offset).format("%Y-%m-%dT%H:00").to_string()
}

/// Index of `stamp` in the series, or the first entry if it is absent.
pub fn select_hour_index(times: &[String], stamp: &str) -> usize {
    times.iter().position(|t| t == stamp).unwrap_or(0)
}

/// Fold the numeric cloud/visibility signals into a text label, so fog is
/// detected the same way for every provider.
pub fn condition_label(cloud_cover_pct: f64, visibility_m: f64) -> &'static str {
    if cloud_cover_pct >= FOG_CLOUD_COVER_PCT || visibility_m < FOG_VISIBILITY_M {
        "Foggy"
    } else if cloud_cover_pct >= PARTLY_CLOUDY_PCT {
        "Partly Cloudy"
    } else {
        "Clear"
    }
}

#[async_trait]
impl WeatherProvider for OpenMeteoProvider {
    fn id(&self) -> ProviderId {
        ProviderId::OpenMeteo
    }

    #[instrument(skip(self), fields(provider = "Open-Meteo"))]
    async fn fetch(&self, coord: Coordinate) -> Result<HourReading, ProviderError> {
        let url = format!("{}/forecast", self.base_url.trim_end_matches('/'));
        debug!(%url, "fetching Open-Meteo hourly forecast");

        let request = self.http.get(&url).query(&[
            ("latitude", coord.latitude.to_string()),
            ("longitude", coord.longitude.to_string()),
            ("hourly", HOURLY_FIELDS.to_string()),
            ("forecast_days", "1".to_string()),
            ("timezone", "auto".to_string()),
        ]);

        let parsed: ForecastResponse = get_json(request).await?;
        parsed.into_reading(Utc::now())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn response(json: serde_json::Value) -> ForecastResponse {
        serde_json::from_value(json).expect("response should deserialize")
    }

    #[test]
    fn labels_follow_thresholds() {
        assert_eq!(condition_label(80.0, 20_000.0), "Foggy");
        assert_eq!(condition_label(10.0, 5_999.0), "Foggy");
        assert_eq!(condition_label(79.0, 6_000.0), "Partly Cloudy");
        assert_eq!(condition_label(40.0, 20_000.0), "Partly Cloudy");
        assert_eq!(condition_label(39.9, 20_000.0), "Clear");
    }

    #[test]
    fn hour_stamp_uses_location_offset() {
        let now = Utc.with_ymd_and_hms(2024, 6, 1, 16, 42, 7).unwrap();
        let pdt = FixedOffset::west_opt(7 * 3600).unwrap();
        assert_eq!(current_hour_stamp(now, pdt), "2024-06-01T09:00");
    }

    #[test]
    fn missing_hour_defaults_to_first() {
        let times = vec!["2024-06-01T00:00".to_string(), "2024-06-01T01:00".to_string()];
        assert_eq!(select_hour_index(&times, "2024-06-01T01:00"), 1);
        assert_eq!(select_hour_index(&times, "2030-01-01T00:00"), 0);
    }

    #[test]
    fn selects_current_hour_and_converts_units() {
        let now = Utc.with_ymd_and_hms(2024, 6, 1, 16, 5, 0).unwrap();
        let reading = response(serde_json::json!({
            "utc_offset_seconds": -25200,
            "hourly": {
                "time": ["2024-06-01T08:00", "2024-06-01T09:00"],
                "temperature_2m": [11.0, 14.5],
                "wind_speed_10m": [7.2, 36.0],
                "cloudcover": [90, 50],
                "visibility": [1000, 24140]
            }
        }))
        .into_reading(now)
        .expect("valid response");

        assert!((reading.temperature_c() - 14.5).abs() < 1e-9);
        assert!((reading.wind_speed_mps - 10.0).abs() < 1e-9);
        assert_eq!(reading.short_forecast, "Partly Cloudy");
        assert_eq!(reading.detailed_forecast, "Cloud 50%, visibility 24140 m");
        assert_eq!(reading.start_time, "2024-06-01T09:00:00-07:00");
    }

    #[test]
    fn optional_series_default() {
        let now = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
        let reading = response(serde_json::json!({
            "hourly": {
                "time": ["2024-06-01T00:00"],
                "temperature_2m": [16.0],
                "wind_speed_10m": [3.6]
            }
        }))
        .into_reading(now)
        .expect("valid response");

        assert_eq!(reading.short_forecast, "Clear");
        assert_eq!(reading.detailed_forecast, "Cloud 0%, visibility 20000 m");
        assert_eq!(reading.start_time, "2024-06-01T00:00:00+00:00");
    }

    #[test]
    fn null_temperature_is_data_error() {
        let now = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
        let err = response(serde_json::json!({
            "hourly": {
                "time": ["2024-06-01T00:00"],
                "temperature_2m": [null],
                "wind_speed_10m": [3.6]
            }
        }))
        .into_reading(now)
        .unwrap_err();

        assert_eq!(err.category(), "DataError");
    }

    #[test]
    fn empty_series_is_data_error() {
        let err = response(serde_json::json!({
            "hourly": { "time": [], "temperature_2m": [], "wind_speed_10m": [] }
        }))
        .into_reading(Utc::now())
        .unwrap_err();

        assert!(err.to_string().contains("empty hourly series"));
    }
}
