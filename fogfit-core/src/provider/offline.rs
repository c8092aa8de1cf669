use async_trait::async_trait;
use chrono::Utc;
use rand::{Rng, SeedableRng, rngs::StdRng, seq::IndexedRandom};

use crate::{Coordinate, HourReading, error::ProviderError};

use super::{ProviderId, WeatherProvider};

const NON_FOG_LABELS: [&str; 2] = ["Clear", "Partly Cloudy"];

/// Synthetic, coordinate-seeded weather. The end of every fallback chain.
#[derive(Debug, Clone, Copy, Default)]
pub struct OfflineProvider;

impl OfflineProvider {
    pub fn new() -> Self {
        Self
    }

    /// Same coordinate, same reading (apart from the timestamp).
    pub fn generate(&self, coord: Coordinate) -> HourReading {
        let mut rng = StdRng::seed_from_u64(seed_for(coord));

        let temperature_c = rng.random_range(12.0..20.0);
        let wind_speed_mps = rng.random_range(2.0..8.0);
        let short = if rng.random_bool(0.5) {
            "Foggy"
        } else {
            NON_FOG_LABELS.choose(&mut rng).copied().unwrap_or("Clear")
        };

        HourReading::new(
            temperature_c,
            wind_speed_mps,
            short,
            "offline mock",
            Utc::now().to_rfc3339(),
            ProviderId::Offline.as_str(),
        )
    }
}

/// `(|lat * 1000| + |lon * 1000|) mod 10000`, truncated to an integer.
pub fn seed_for(coord: Coordinate) -> u64 {
    let sum = (coord.latitude * 1000.0).abs() + (coord.longitude * 1000.0).abs();
    (sum as u64) % 10_000
}

#[async_trait]
impl WeatherProvider for OfflineProvider {
    fn id(&self) -> ProviderId {
        ProviderId::Offline
    }

    async fn fetch(&self, coord: Coordinate) -> Result<HourReading, ProviderError> {
        Ok(self.generate(coord))
    }
}
