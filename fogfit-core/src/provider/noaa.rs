use async_trait::async_trait;
use reqwest::{Client, header};
use serde::Deserialize;
use tracing::{debug, instrument};

use crate::{
    Coordinate, HourReading,
    error::ProviderError,
    units::{fahrenheit_to_celsius, wind_speed_to_mps},
};

use super::{ProviderId, WeatherProvider, get_json};

/// National Weather Service (api.weather.gov) hourly forecast.
///
/// Resolving a coordinate takes two calls: `/points/{lat},{lon}` yields the
/// hourly forecast URL for the grid cell, whose first period is "now".
#[derive(Debug, Clone)]
pub struct NoaaProvider {
    base_url: String,
    http: Client,
}

impl NoaaProvider {
    pub fn new(base_url: impl Into<String>, http: Client) -> Self {
        Self { base_url: base_url.into(), http }
    }

    fn get(&self, url: &str) -> reqwest::RequestBuilder {
        self.http
            .get(url)
            .header(header::ACCEPT, "application/geo+json")
            .header(header::CACHE_CONTROL, "no-cache")
    }

    async fn forecast_hourly_url(&self, coord: Coordinate) -> Result<String, ProviderError> {
        let url = format!(
            "{}/points/{},{}",
            self.base_url.trim_end_matches('/'),
            coord.latitude,
            coord.longitude
        );
        debug!(%url, "resolving NOAA grid point");

        let points: PointsResponse = get_json(self.get(&url)).await?;
        Ok(points.properties.forecast_hourly)
    }
}

#[derive(Debug, Deserialize)]
struct PointsResponse {
    properties: PointsProperties,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PointsProperties {
    forecast_hourly: String,
}

#[derive(Debug, Deserialize)]
struct HourlyResponse {
    properties: HourlyProperties,
}

#[derive(Debug, Deserialize)]
struct HourlyProperties {
    periods: Vec<Period>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Period {
    temperature: f64,
    #[serde(default)]
    temperature_unit: Option<String>,
    #[serde(default)]
    wind_speed: Option<String>,
    #[serde(default)]
    short_forecast: Option<String>,
    #[serde(default)]
    detailed_forecast: Option<String>,
    #[serde(default)]
    start_time: Option<String>,
}

impl Period {
    fn into_reading(self) -> Result<HourReading, ProviderError> {
        // A missing or unknown unit is rejected rather than assumed Celsius,
        // so a malformed period falls through to the next provider.
        let temperature_c = match self.temperature_unit.as_deref() {
            Some("F") => fahrenheit_to_celsius(self.temperature),
            Some("C") => self.temperature,
            other => {
                return Err(ProviderError::Data(format!(
                    "unrecognised temperatureUnit {other:?}"
                )));
            }
        };

        let wind_speed_mps = wind_speed_to_mps(self.wind_speed.as_deref().unwrap_or_default());

        Ok(HourReading::new(
            temperature_c,
            wind_speed_mps,
            self.short_forecast.unwrap_or_else(|| "—".to_string()),
            self.detailed_forecast.unwrap_or_default(),
            self.start_time.unwrap_or_default(),
            ProviderId::Noaa.as_str(),
        ))
    }
}

#[async_trait]
impl WeatherProvider for NoaaProvider {
    fn id(&self) -> ProviderId {
        ProviderId::Noaa
    }

    #[instrument(skip(self), fields(provider = "NOAA"))]
    async fn fetch(&self, coord: Coordinate) -> Result<HourReading, ProviderError> {
        let forecast_url = self.forecast_hourly_url(coord).await?;
        debug!(%forecast_url, "fetching NOAA hourly forecast");

        let hourly: HourlyResponse = get_json(self.get(&forecast_url)).await?;

        let period = hourly
            .properties
            .periods
            .into_iter()
            .next()
            .ok_or_else(|| ProviderError::Data("NOAA hourly forecast contained no periods".into()))?;

        period.into_reading()
    }
}
