use chrono_tz::Tz;
use rand::Rng;

use crate::{
    Config, Coordinate, Recommendation, Resolution,
    fog::is_foggy,
    localize::localize,
    outfit::recommend_outfit,
    provider::{WeatherProvider, http_client, noaa::NoaaProvider, openmeteo::OpenMeteoProvider},
    resolver::FallbackResolver,
};

/// Entry point: coordinate in, outfit recommendation out.
#[derive(Debug)]
pub struct Recommender {
    resolver: FallbackResolver,
    timezone: Tz,
}

impl Recommender {
    /// NOAA first, Open-Meteo second, offline last.
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let http = http_client(config)?;
        let timezone = config.tz()?;

        Ok(Self::with_providers(
            Box::new(NoaaProvider::new(config.noaa_base_url.clone(), http.clone())),
            Box::new(OpenMeteoProvider::new(config.open_meteo_base_url.clone(), http)),
            config.offline,
            timezone,
        ))
    }

    pub fn with_providers(
        primary: Box<dyn WeatherProvider>,
        secondary: Box<dyn WeatherProvider>,
        force_offline: bool,
        timezone: Tz,
    ) -> Self {
        Self { resolver: FallbackResolver::new(primary, secondary, force_offline), timezone }
    }

    pub async fn recommend(&self, coord: Coordinate) -> Recommendation {
        let resolution = self.resolver.resolve(coord).await;
        self.compose(resolution, &mut rand::rng())
    }

    /// Turn a resolved reading into the final answer, drawing the fog layer
    /// choice from `rng`.
    pub fn compose<R: Rng + ?Sized>(&self, resolution: Resolution, rng: &mut R) -> Recommendation {
        let Resolution { reading, note } = resolution;

        let items = recommend_outfit(
            reading.temperature_c(),
            reading.wind_speed_mps,
            is_foggy(&reading),
            rng,
        );

        Recommendation {
            temp_f: reading.temperature_f().round() as i64,
            wind_mph: reading.wind_speed_mph().round() as i64,
            last_updated_local: localize(&reading.start_time, self.timezone),
            items,
            forecast: reading.short_forecast,
            source: reading.provider,
            note,
        }
    }
}
